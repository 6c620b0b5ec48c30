// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! `CINK_CONFIG`, `CINK_THEME` and `CINK_MODE` are read by clap through the
//! names below; `NO_COLOR` and the directory lookups are read here.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::ffi::OsString;
use std::path::PathBuf;

/// Base directory for user configuration (`XDG_CONFIG_HOME`).
pub fn xdg_config_home() -> Option<PathBuf> {
    var_path(names::XDG_CONFIG_HOME)
}

/// Home directory, the fallback base for `~/.config`.
pub fn home_dir() -> Option<PathBuf> {
    var_path(names::HOME)
}

/// Whether `NO_COLOR` asks for uncolored output. Any non-empty value counts,
/// including `0` and `false`.
pub fn no_color() -> bool {
    is_set(std::env::var_os(names::NO_COLOR))
}

fn is_set(value: Option<OsString>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// Read a path variable, treating an empty value as unset.
fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
