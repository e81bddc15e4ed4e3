//! Scan command implementation.
//!
//! The `modsync scan` command lists the external modules required by the
//! editor sources without installing anything.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::discovery::dedupe;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ScanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::load(&self.project_root, self.config_path.as_deref())?;
        let values = ctx.editor_values(&self.args.sources)?;

        let mut modules = ctx
            .discoverer(&self.args.sources)
            .discover_in_values(&values)?;
        if self.args.unique {
            modules = dedupe(modules);
        }

        if self.args.json {
            let output = serde_json::to_string_pretty(&modules).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        if modules.is_empty() {
            ui.success("No external modules required");
            return Ok(CommandResult::success());
        }

        for module in &modules {
            ui.message(module);
        }
        ui.show_hint("Run `modsync sync` to install them");

        Ok(CommandResult::success())
    }
}
