//! Static discovery of externally-required modules.
//!
//! - [`scanner`] - finds `require('...')` calls in raw text
//! - [`builtins`] - built-in module lists and where they come from
//! - [`editor`] - editor contents of a playground project
//! - [`discoverer`] - filters candidates down to installable module names
//!
//! # Example
//!
//! ```
//! use modsync::discovery::Discoverer;
//!
//! let discoverer = Discoverer::new();
//! let modules = discoverer
//!     .discover_in_editors([
//!         "const { app } = require('electron'); const fs = require('fs');",
//!         "const pad = require('left-pad'); require('./util');",
//!     ])
//!     .unwrap();
//! assert_eq!(modules, vec!["left-pad"]);
//! ```

pub mod builtins;
pub mod discoverer;
pub mod editor;
pub mod scanner;

pub use builtins::{BuiltinCatalog, BuiltinModules, BuiltinSource};
pub use discoverer::{dedupe, Discoverer, DEFAULT_RESERVED_MODULE};
pub use editor::{EditorFiles, EditorValues};
pub use scanner::{find_candidates, MatchMode};
