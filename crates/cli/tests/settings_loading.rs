// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Config file discovery and precedence.
//!
//! 1. Built-in defaults - lowest priority
//! 2. Config file (`--config`, `CINK_CONFIG`, then the XDG location)
//! 3. `CINK_THEME` / `CINK_MODE`
//! 4. Command-line flags - highest priority

mod common;

use common::{cink, write_default_config, write_temp, RESET};
use predicates::prelude::*;

const GI: &str = "interface Gi0/1";

#[test]
fn test_default_location_is_used() {
    let (mut cmd, home) = cink();
    write_default_config(&home, "[colors]\nInterface = \"#ff0000\"\n");

    cmd.write_stdin(GI)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "\x1b[38;2;255;0;0mGi0/1{RESET}"
        )));
}

#[test]
fn test_explicit_config_flag() {
    let config = write_temp("[colors]\ninterface = \"underline 33\"\n", ".toml");

    let (mut cmd, _home) = cink();
    cmd.arg("--config")
        .arg(config.path())
        .write_stdin(GI)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "\x1b[4m\x1b[38;5;33mGi0/1{RESET}"
        )));
}

#[test]
fn test_config_env_var() {
    let config = write_temp("[colors]\nInterface = \"none\"\n", ".toml");

    let (mut cmd, _home) = cink();
    cmd.env("CINK_CONFIG", config.path())
        .write_stdin(GI)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" Gi0/1"));
}

#[test]
fn test_config_force_skips_content_check() {
    let (mut cmd, home) = cink();
    write_default_config(&home, "force = true\n[colors]\nIdentifier = \"red\"\n");

    cmd.write_stdin("hello")
        .assert()
        .success()
        .stdout(format!("\x1b[31mhello{RESET}"));
}

#[test]
fn test_env_theme_overrides_file() {
    let (mut cmd, home) = cink();
    write_default_config(&home, "theme = \"nord\"\n");

    cmd.env("CINK_THEME", "monokai")
        .arg("--verbose")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("cink: theme: monokai"));
}

#[test]
fn test_flag_overrides_env() {
    let (mut cmd, _home) = cink();
    cmd.env("CINK_MODE", "config")
        .args(["--mode", "show", "--verbose"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("cink: mode: Show"));
}

#[test]
fn test_verbose_names_config_file() {
    let config = write_temp("theme = \"gruvbox\"\n", ".toml");

    let (mut cmd, _home) = cink();
    cmd.arg("--config")
        .arg(config.path())
        .arg("--verbose")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "cink: config: {}",
            config.path().display()
        )))
        .stderr(predicate::str::contains("cink: theme: gruvbox"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unknown_field_fails() {
    let (mut cmd, home) = cink();
    write_default_config(&home, "colour = \"red\"\n");

    cmd.write_stdin(GI)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_unknown_theme_in_file_fails() {
    let config = write_temp("theme = \"neon\"\n", ".toml");

    let (mut cmd, _home) = cink();
    cmd.arg("--config")
        .arg(config.path())
        .write_stdin(GI)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'neon'"));
}

#[test]
fn test_bad_color_fails() {
    let config = write_temp("[colors]\nASN = \"#12\"\n", ".toml");

    let (mut cmd, _home) = cink();
    cmd.arg("--config")
        .arg(config.path())
        .write_stdin(GI)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color '#12' for ASN"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let (mut cmd, _home) = cink();
    cmd.args(["--config", "/nonexistent/cink.toml"])
        .write_stdin(GI)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
