//! Configuration file discovery and loading.

use crate::config::merger::merge_layers;
use crate::config::schema::ModsyncConfig;
use crate::config::validator::validate;
use crate::error::{ModsyncError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding modsync configuration inside a project.
pub const CONFIG_DIR: &str = ".modsync";

/// Paths to configuration files in merge order (later overrides earlier).
///
/// 1. Project config (`.modsync/config.yml`)
/// 2. Local overrides (`.modsync/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .modsync/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .modsync/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(&self.project_local).collect()
    }

    /// Check if any config file exists.
    pub fn has_any(&self) -> bool {
        self.project.is_some() || self.project_local.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Read a config file. An unreadable file is a config problem, not an IO
/// failure of the tool itself.
fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ModsyncError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config_file(path)?;

    serde_yaml::from_str(&content).map_err(|e| ModsyncError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ModsyncConfig> {
    if content.trim().is_empty() {
        return Ok(ModsyncConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ModsyncError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project's config files.
///
/// A project without any config file gets the default configuration.
pub fn load_merged_config(project_root: &Path) -> Result<ModsyncConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_any() {
        tracing::debug!(
            "No config in {}, using defaults",
            project_root.join(CONFIG_DIR).display()
        );
        return Ok(ModsyncConfig::default());
    }

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push((path.clone(), load_config_value(path)?));
    }

    let values: Vec<_> = layers.iter().map(|(_, value)| value.clone()).collect();
    serde_yaml::from_value(merge_layers(&values)).map_err(|e| ModsyncError::ConfigParseError {
        path: blame_layer(&layers),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// The first layer that fails to deserialize on its own, else the last one.
fn blame_layer(layers: &[(PathBuf, serde_yaml::Value)]) -> PathBuf {
    layers
        .iter()
        .filter(|(_, value)| !value.is_null())
        .find(|(_, value)| serde_yaml::from_value::<ModsyncConfig>(value.clone()).is_err())
        .or_else(|| layers.last())
        .map(|(path, _)| path.clone())
        .unwrap_or_default()
}

/// Load and validate config, honouring an explicit `--config` path.
///
/// An explicit path is loaded on its own, without local overrides, and must
/// exist.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ModsyncConfig> {
    let config = match config_override {
        Some(path) => {
            let content = read_config_file(path)?;
            parse_config(&content, path)?
        }
        None => load_merged_config(project_root)?,
    };

    validate(&config)?;
    Ok(config)
}
