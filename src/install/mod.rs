//! Installing modules with a package manager.
//!
//! - [`package_manager`] - which tool to run and with which arguments
//! - [`installer`] - runs the tool in the install target

pub mod installer;
pub mod package_manager;

pub use installer::{InstallCommand, Installer, ProcessRunner, SystemRunner};
pub use package_manager::PackageManager;
