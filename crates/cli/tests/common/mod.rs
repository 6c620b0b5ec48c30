// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! Shared helpers for binary tests.

use std::io::Write;

use assert_cmd::Command;
use tempfile::{NamedTempFile, TempDir};

/// Default tokyonight colors used in assertions.
pub const COMMAND: &str = "\x1b[1m\x1b[38;2;187;154;247m";
pub const RESET: &str = "\x1b[0m";

/// A `cink` command isolated from the caller's environment and config.
///
/// The returned directory stands in for `XDG_CONFIG_HOME` and must outlive
/// the command.
pub fn cink() -> (Command, TempDir) {
    let config_home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("cink").unwrap();
    cmd.env_remove("CINK_CONFIG")
        .env_remove("CINK_THEME")
        .env_remove("CINK_MODE")
        .env_remove("NO_COLOR")
        .env("XDG_CONFIG_HOME", config_home.path());
    (cmd, config_home)
}

/// Write `content` to a temporary file.
pub fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Write `config.toml` where `cink` looks for it by default.
pub fn write_default_config(config_home: &TempDir, content: &str) {
    let dir = config_home.path().join("cink");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}
