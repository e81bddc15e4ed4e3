//! modsync - Install the modules your playground code requires.
//!
//! modsync scans the JavaScript sources of an Electron playground (a main
//! process file, a renderer file and an optional preload script) for
//! `require()` calls, drops the ones Node or Electron already provide, and
//! installs the rest with a package manager.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`discovery`] - Finding required modules in editor sources
//! - [`error`] - Error types and result aliases
//! - [`install`] - Package manager selection and invocation
//! - [`shell`] - Process execution
//! - [`ui`] - Spinners, prompts, and terminal output
//!
//! # Example
//!
//! ```
//! use modsync::discovery::{Discoverer, MatchMode};
//!
//! let discoverer = Discoverer::new()
//!     .with_match_mode(MatchMode::All)
//!     .with_ignore(vec!["internal-tools".to_string()]);
//! let modules = discoverer
//!     .discover_in_editors(["require('fs'); require('lodash');", "require('internal-tools');"])
//!     .unwrap();
//! assert_eq!(modules, vec!["lodash"]);
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod install;
pub mod shell;
pub mod ui;

pub use error::{ModsyncError, Result};
