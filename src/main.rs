//! modsync CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use modsync::cli::{Cli, CommandDispatcher};
use modsync::shell::is_ci;
use modsync::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `--debug` forces DEBUG, otherwise `RUST_LOG` applies, defaulting to INFO.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("modsync=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modsync=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("modsync starting with args: {:?}", cli);

    let output_mode = match (cli.quiet, cli.verbose) {
        (0, true) => OutputMode::Verbose,
        (0, false) => OutputMode::Normal,
        (1, _) => OutputMode::Quiet,
        _ => OutputMode::Silent,
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = create_ui(!is_ci(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root).with_config_path(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
