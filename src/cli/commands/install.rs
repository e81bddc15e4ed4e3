//! Install command implementation.
//!
//! The `modsync install` command installs explicitly named modules.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::install::{Installer, ProcessRunner};
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: InstallArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::load(&self.project_root, self.config_path.as_deref())?;
        let target = ctx.install_target(self.args.dir.as_deref());
        let installer = ctx.installer(self.args.package_manager);

        let output = run_install(ui, &installer, &target, &self.args.modules)?;
        for line in output.lines() {
            ui.message(line);
        }
        Ok(CommandResult::success())
    }
}

/// Install `modules` into `target` behind a spinner and return the package
/// manager's captured output.
///
/// Failures are returned unchanged after the spinner is marked as failed.
pub fn run_install<R: ProcessRunner>(
    ui: &mut dyn UserInterface,
    installer: &Installer<R>,
    target: &Path,
    modules: &[String],
) -> Result<String> {
    let label = if modules.len() == 1 { "module" } else { "modules" };
    let mut spinner = ui.start_spinner(&format!(
        "Installing {} {} into {}",
        modules.len(),
        label,
        target.display()
    ));
    spinner.set_message(&format!("Running {}", installer.command_for(target, modules)));

    match installer.install(target, modules) {
        Ok(output) => {
            spinner.finish_success(&format!("Installed {}", modules.join(", ")));
            Ok(output)
        }
        Err(e) => {
            spinner.finish_error("Install failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModsyncError;
    use crate::shell::CommandResult as ProcessResult;
    use crate::ui::{MockUI, OutputMode};
    use std::time::Duration;

    struct FixedRunner(bool);

    impl ProcessRunner for FixedRunner {
        fn run(&self, _program: &str, args: &[String], _cwd: &Path) -> Result<ProcessResult> {
            let output = format!("ran {}\n", args.join(" "));
            Ok(if self.0 {
                ProcessResult::success(output, String::new(), Duration::ZERO)
            } else {
                ProcessResult::failure(Some(1), output, "E404".to_string(), Duration::ZERO)
            })
        }
    }

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn success_returns_output_behind_spinner() {
        let installer = Installer::default().with_runner(FixedRunner(true));
        let mut ui = MockUI::new();

        let output =
            run_install(&mut ui, &installer, Path::new("/work"), &modules(&["a", "b"])).unwrap();

        assert_eq!(ui.spinners().len(), 1);
        assert!(ui.spinners()[0].contains("2 modules"));
        assert_eq!(output, "ran i -S a b\n");
    }

    #[test]
    fn failure_is_returned() {
        let installer = Installer::default().with_runner(FixedRunner(false));
        let mut ui = MockUI::new();

        let err = run_install(&mut ui, &installer, Path::new("/work"), &modules(&["a"]))
            .unwrap_err();

        assert!(matches!(err, ModsyncError::InstallFailed { .. }));
        assert!(ui.messages().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn install_command_prints_output_without_verbose() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(".modsync")).unwrap();
        std::fs::write(
            temp.path().join(".modsync/config.yml"),
            "install:\n  program: echo\n",
        )
        .unwrap();
        let args = InstallArgs {
            dir: None,
            package_manager: None,
            modules: modules(&["left-pad"]),
        };
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        let result = InstallCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), ["i -S left-pad"]);
    }
}
