//! Command-line interface for modsync.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, InstallArgs, ScanArgs, SourceArgs, SyncArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
