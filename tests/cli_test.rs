//! Integration tests for the modsync binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MAIN_JS: &str = r#"
const { app, BrowserWindow } = require('electron');
const path = require('path');
const pad = require("left-pad");
"#;

const RENDERER_JS: &str = r#"
const fs = require('node:fs');
const chalk = require('chalk');
const helpers = require('./helpers');
const pad = require('left-pad');
"#;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.js"), MAIN_JS).unwrap();
    fs::write(temp.path().join("renderer.js"), RENDERER_JS).unwrap();
    temp
}

fn use_echo_installer(temp: &TempDir) {
    let dir = temp.path().join(".modsync");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), "install:\n  program: echo\n").unwrap();
}

fn modsync(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("modsync"));
    cmd.current_dir(temp.path()).env("CI", "true");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("modsync"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Install the modules"))
        .stdout(predicate::str::contains("sync"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("modsync"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_runs_scan() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    modsync(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("left-pad"))
        .stdout(predicate::str::contains("chalk"));
    Ok(())
}

#[test]
fn scan_skips_builtins_and_relative_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    modsync(&temp)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("electron").not())
        .stdout(predicate::str::contains("path").not())
        .stdout(predicate::str::contains("helpers").not());
    Ok(())
}

#[test]
fn scan_json_unique() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = modsync(&temp)
        .args(["scan", "--json", "--unique"])
        .output()?;

    assert!(output.status.success());
    let modules: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(modules, vec!["left-pad", "chalk"]);
    Ok(())
}

#[test]
fn scan_first_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("main.js"), "require('a'); require('b');")?;
    fs::write(temp.path().join("renderer.js"), "require('c'); require('d');")?;

    let output = modsync(&temp)
        .args(["scan", "--json", "--first-only"])
        .output()?;

    let modules: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(modules, vec!["a", "c"]);
    Ok(())
}

#[test]
fn scan_editors_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("editors.json"),
        r#"{"main": "require('x')", "renderer": "", "preload": "require('y')"}"#,
    )?;

    let output = modsync(&temp)
        .args(["scan", "--json", "--editors", "editors.json"])
        .output()?;

    let modules: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(modules, vec!["x", "y"]);
    Ok(())
}

#[test]
fn missing_renderer_exits_with_config_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("main.js"), "require('a')")?;

    modsync(&temp)
        .arg("scan")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("renderer.js"));
    Ok(())
}

#[test]
fn invalid_config_exits_with_config_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let dir = temp.path().join(".modsync");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.yml"), "scan:\n  reserved_module: \"\"\n")?;

    modsync(&temp).arg("scan").assert().code(2);
    Ok(())
}

#[test]
fn sync_dry_run_prints_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    modsync(&temp)
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm i -S left-pad chalk"));
    Ok(())
}

#[test]
fn sync_dry_run_with_yarn() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    modsync(&temp)
        .args(["sync", "--dry-run", "--package-manager", "yarn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: yarn add left-pad chalk"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_runs_configured_program() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    use_echo_installer(&temp);

    modsync(&temp)
        .args(["--verbose", "install", "left-pad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i -S left-pad"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_prints_output_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    use_echo_installer(&temp);

    modsync(&temp)
        .args(["install", "left-pad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i -S left-pad"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn sync_hides_output_without_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    use_echo_installer(&temp);

    modsync(&temp)
        .args(["sync", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i -S left-pad").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_into_missing_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    use_echo_installer(&temp);

    modsync(&temp)
        .args(["install", "--dir", "does-not-exist", "left-pad"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn sync_installs_discovered_modules() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    use_echo_installer(&temp);

    modsync(&temp)
        .args(["--verbose", "sync", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i -S left-pad chalk"));
    Ok(())
}

#[test]
fn sync_with_nothing_to_install() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("main.js"), "require('electron')")?;
    fs::write(temp.path().join("renderer.js"), "require('fs')")?;

    modsync(&temp)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("No external modules to install"));
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("modsync"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("modsync"));
    Ok(())
}
