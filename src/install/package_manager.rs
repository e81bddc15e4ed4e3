//! Package manager selection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shell::node_tool_program;

/// Package manager used to install modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    /// Pick from the lockfiles present in the install target.
    Auto,
}

impl PackageManager {
    /// Resolve [`PackageManager::Auto`] against `target`. Concrete managers
    /// resolve to themselves.
    pub fn resolve(self, target: &Path) -> Self {
        match self {
            Self::Auto => Self::detect(target),
            other => other,
        }
    }

    /// Detect the package manager a directory is set up for.
    ///
    /// Falls back to npm when no lockfile is present.
    pub fn detect(target: &Path) -> Self {
        if target.join("yarn.lock").is_file() {
            Self::Yarn
        } else if target.join("pnpm-lock.yaml").is_file() {
            Self::Pnpm
        } else {
            Self::Npm
        }
    }

    /// Executable name, including the `.cmd` shim on Windows.
    pub fn program(self) -> String {
        node_tool_program(self.name())
    }

    /// Arguments that precede the module names: the install subcommand and
    /// the flag recording packages as direct (production) dependencies.
    pub fn install_args(self) -> Vec<String> {
        let args: &[&str] = match self {
            Self::Npm | Self::Auto => &["i", "-S"],
            Self::Yarn => &["add"],
            Self::Pnpm => &["add", "--save-prod"],
        };
        args.iter().map(|s| s.to_string()).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Npm | Self::Auto => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            other => write!(f, "{}", other.name()),
        }
    }
}
