//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands that read editor sources share their
//! setup through [`context::ProjectContext`].

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod install;
pub mod scan;
pub mod sync;

pub use context::ProjectContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
