//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::install::PackageManager;

/// modsync - Install the modules your playground code requires.
#[derive(Debug, Parser)]
#[command(name = "modsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .modsync/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output, including package manager output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output; repeat (-qq) to print errors only
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the external modules required by the editor sources (default)
    Scan(ScanArgs),

    /// Install the given modules into a directory
    Install(InstallArgs),

    /// Scan the editor sources and install what they require
    Sync(SyncArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where editor sources are read from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Main-process source file
    #[arg(long, conflicts_with = "editors")]
    pub main: Option<PathBuf>,

    /// Renderer source file
    #[arg(long, conflicts_with = "editors")]
    pub renderer: Option<PathBuf>,

    /// Preload script
    #[arg(long, conflicts_with = "editors")]
    pub preload: Option<PathBuf>,

    /// JSON file with "main", "renderer" and optional "preload" texts
    #[arg(long)]
    pub editors: Option<PathBuf>,

    /// Only consider the first require() call in each file
    #[arg(long)]
    pub first_only: bool,
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Report each module once
    #[arg(long)]
    pub unique: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Install target directory (defaults to the project root)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Package manager to use
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Modules to install
    #[arg(required = true)]
    pub modules: Vec<String>,
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SyncArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Install target directory (defaults to the project root)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Package manager to use
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Install without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Show the install command without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
