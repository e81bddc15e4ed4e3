//! Configuration schema definitions.
//!
//! These structs map to `.modsync/config.yml`. Every field has a default, so
//! an absent or empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::discovery::{BuiltinSource, EditorFiles, MatchMode, DEFAULT_RESERVED_MODULE};
use crate::install::PackageManager;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModsyncConfig {
    /// Module discovery settings
    pub scan: ScanConfig,

    /// Installation settings
    pub install: InstallConfig,

    /// Editor file names, relative to the project root
    pub editors: EditorFiles,
}

/// Module discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Scan every `require()` call or only the first one per file
    pub match_mode: MatchMode,

    /// Module provided by the host runtime itself
    pub reserved_module: String,

    /// Additional module names that are never reported
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    /// Where the built-in module list comes from
    pub builtins: BuiltinSource,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            reserved_module: DEFAULT_RESERVED_MODULE.to_string(),
            ignore: Vec::new(),
            builtins: BuiltinSource::default(),
        }
    }
}

/// Installation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Package manager to run
    pub package_manager: PackageManager,

    /// Executable to run instead of the package manager's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Default install target (relative to the project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_gives_defaults() {
        let config: ModsyncConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config, ModsyncConfig::default());
        assert_eq!(config.scan.reserved_module, "electron");
        assert_eq!(config.scan.match_mode, MatchMode::All);
        assert_eq!(config.install.package_manager, PackageManager::Npm);
        assert_eq!(config.editors.main, PathBuf::from("main.js"));
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
scan:
  match_mode: first
  reserved_module: nw
  ignore: [internal]
  builtins:
    type: file
    path: builtins.txt
install:
  package_manager: pnpm
  program: /usr/local/bin/pnpm
  dir: app
editors:
  main: src/main.js
"#;
        let config: ModsyncConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.scan.match_mode, MatchMode::First);
        assert_eq!(config.scan.reserved_module, "nw");
        assert_eq!(config.scan.ignore, vec!["internal"]);
        assert_eq!(
            config.scan.builtins,
            BuiltinSource::File {
                path: PathBuf::from("builtins.txt")
            }
        );
        assert_eq!(config.install.package_manager, PackageManager::Pnpm);
        assert_eq!(
            config.install.program.as_deref(),
            Some("/usr/local/bin/pnpm")
        );
        assert_eq!(config.install.dir, Some(PathBuf::from("app")));
        assert_eq!(config.editors.main, PathBuf::from("src/main.js"));
        assert_eq!(config.editors.renderer, PathBuf::from("renderer.js"));
    }

    #[test]
    fn rejects_unknown_package_manager() {
        let result: Result<ModsyncConfig, _> =
            serde_yaml::from_str("install:\n  package_manager: bower\n");
        assert!(result.is_err());
    }

    #[test]
    fn default_config_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&ModsyncConfig::default()).unwrap();
        let parsed: ModsyncConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, ModsyncConfig::default());
    }
}
