//! Module installation.
//!
//! One call spawns exactly one package manager process in the target
//! directory. An error from that process always wins over any output it
//! produced; there is no partial success and no retry.

use std::fmt;
use std::path::Path;

use crate::config::InstallConfig;
use crate::error::{ModsyncError, Result};
use crate::shell::{self, CommandOptions, CommandResult};

use super::package_manager::PackageManager;

/// Runs an external program. Mockable for tests.
pub trait ProcessRunner {
    /// Run `program` with `args` in `cwd`, capturing its output.
    ///
    /// `Err` means the process could not be started.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandResult>;
}

/// Runs programs as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandResult> {
        shell::execute(program, args, &CommandOptions::captured_in(cwd))
    }
}

/// A fully built install invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell::display_command(&self.program, &self.args))
    }
}

/// Installs modules into a directory with a package manager.
#[derive(Debug, Clone)]
pub struct Installer<R = SystemRunner> {
    package_manager: PackageManager,
    program: Option<String>,
    runner: R,
}

impl Default for Installer {
    fn default() -> Self {
        Self::new(PackageManager::default())
    }
}

impl Installer {
    /// Create an installer that spawns real processes.
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            package_manager,
            program: None,
            runner: SystemRunner,
        }
    }

    /// Create an installer from the `install` section of the configuration.
    pub fn from_config(config: &InstallConfig) -> Self {
        let installer = Self::new(config.package_manager);
        match &config.program {
            Some(program) => installer.with_program(program),
            None => installer,
        }
    }
}

impl<R: ProcessRunner> Installer<R> {
    /// Swap the process runner.
    pub fn with_runner<T: ProcessRunner>(self, runner: T) -> Installer<T> {
        Installer {
            package_manager: self.package_manager,
            program: self.program,
            runner,
        }
    }

    /// Use `program` instead of the package manager's own executable.
    ///
    /// The install arguments of the configured package manager still apply.
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = Some(program.to_string());
        self
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// Build the invocation that [`Installer::install`] would run.
    pub fn command_for<S: AsRef<str>>(&self, target: &Path, names: &[S]) -> InstallCommand {
        let package_manager = self.package_manager.resolve(target);
        let program = self
            .program
            .clone()
            .unwrap_or_else(|| package_manager.program());

        let mut args = package_manager.install_args();
        args.extend(names.iter().map(|name| name.as_ref().to_string()));

        InstallCommand { program, args }
    }

    /// Install `names` into `target` and return the captured standard output.
    ///
    /// Fails with [`ModsyncError::InstallFailed`] if the process cannot be
    /// started (including when `target` does not exist) or exits non-zero.
    pub fn install<S: AsRef<str>>(&self, target: &Path, names: &[S]) -> Result<String> {
        let command = self.command_for(target, names);
        let command_line = command.to_string();

        tracing::info!(
            "Installing {} module(s) into {}",
            names.len(),
            target.display()
        );
        tracing::debug!("Running: {}", command_line);

        let result = self
            .runner
            .run(&command.program, &command.args, target)
            .map_err(|e| ModsyncError::InstallFailed {
                command: command_line.clone(),
                code: None,
                message: spawn_error_message(e),
            })?;

        if !result.success {
            tracing::warn!(
                "Install exited with code {:?} after {:?}",
                result.exit_code,
                result.duration
            );
            return Err(ModsyncError::InstallFailed {
                command: command_line,
                code: result.exit_code,
                message: failure_message(&result),
            });
        }

        tracing::debug!("Install finished in {:?}", result.duration);
        Ok(result.stdout)
    }
}

fn spawn_error_message(err: ModsyncError) -> String {
    match err {
        ModsyncError::Io(io) => format!("failed to start: {}", io),
        other => other.to_string(),
    }
}

fn failure_message(result: &CommandResult) -> String {
    let stderr = result.stderr.trim();
    if stderr.is_empty() {
        "process reported an error".to_string()
    } else {
        stderr.to_string()
    }
}
