//! Sync command implementation.
//!
//! The `modsync sync` command scans the editor sources and installs every
//! external module they require in a single package manager call.

use std::path::{Path, PathBuf};

use crate::cli::args::SyncArgs;
use crate::discovery::dedupe;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};
use super::install::run_install;

/// The sync command implementation.
pub struct SyncCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: SyncArgs,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: SyncArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for SyncCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::load(&self.project_root, self.config_path.as_deref())?;
        let values = ctx.editor_values(&self.args.sources)?;

        let modules = dedupe(
            ctx.discoverer(&self.args.sources)
                .discover_in_values(&values)?,
        );

        if modules.is_empty() {
            ui.success("No external modules to install");
            return Ok(CommandResult::success());
        }

        let target = ctx.install_target(self.args.dir.as_deref());
        let installer = ctx.installer(self.args.package_manager);

        ui.show_header(&format!("Required modules ({})", modules.len()));
        for module in &modules {
            ui.message(&format!("  {}", module));
        }

        if self.args.dry_run {
            let command = installer.command_for(&target, &modules);
            ui.message(&format!("Would run: {} (in {})", command, target.display()));
            ui.show_hint("Run without --dry-run to install");
            return Ok(CommandResult::success());
        }

        if ui.is_interactive() && !self.args.yes {
            let question = format!("Install into {}?", target.display());
            if !ui.confirm(&question, true)? {
                ui.warning("Install cancelled");
                return Ok(CommandResult::success());
            }
        }

        let output = run_install(ui, &installer, &target, &modules)?;
        ui.show_command_output(&output);
        Ok(CommandResult::success())
    }
}
