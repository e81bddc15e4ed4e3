//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use modsync::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".modsync")).unwrap();
//! fs::write(
//!     temp.path().join(".modsync/config.yml"),
//!     "scan:\n  reserved_module: nw\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.scan.reserved_module, "nw");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.modsync/config.yml`)
//! 2. Local overrides (`.modsync/config.local.yml`)
//!
//! Both are optional.

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_value, load_merged_config, parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_layers};
pub use schema::{InstallConfig, ModsyncConfig, ScanConfig};
pub use validator::{validate, validate_config, ValidationError};
