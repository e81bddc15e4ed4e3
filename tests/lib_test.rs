//! Library integration tests.

use modsync::ModsyncError;

#[test]
fn error_types_are_public() {
    let err = ModsyncError::InstallFailed {
        command: "npm i -S left-pad".into(),
        code: Some(1),
        message: "E404".into(),
    };
    assert!(err.to_string().contains("npm i -S left-pad"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> modsync::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use modsync::cli::{Cli, Commands};

    let cli = Cli::parse_from(["modsync", "scan", "--json"]);

    if let Some(Commands::Scan(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Scan command");
    }
}
