// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing.

use std::path::PathBuf;

use cink_lexer::ParseMode;
use clap::{Parser, ValueEnum};

use crate::env;

/// Cisco IOS syntax highlighter
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cink",
    version,
    about = "Colorize Cisco IOS configuration, show output and CLI sessions"
)]
pub struct Cli {
    /// Files to highlight (stdin when none are given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Color theme
    #[arg(short = 't', long, env = env::CINK_THEME)]
    pub theme: Option<String>,

    /// Parse mode; auto detects configuration vs. show output
    #[arg(short = 'm', long, value_enum, env = env::CINK_MODE)]
    pub mode: Option<CliParseMode>,

    /// Highlight even if the input does not look like Cisco output
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Remove terminal control sequences instead of highlighting
    #[arg(long)]
    pub strip: bool,

    /// Process input line by line, flushing after each line
    #[arg(long)]
    pub stream: bool,

    /// List the built-in themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Print a built-in sample and exit
    #[arg(long, value_enum, value_name = "KIND")]
    pub demo: Option<DemoKind>,

    /// Config file (default: $XDG_CONFIG_HOME/cink/config.toml)
    #[arg(long, value_name = "PATH", env = env::CINK_CONFIG)]
    pub config: Option<PathBuf>,

    /// Pass input through without adding color; also on when `NO_COLOR` is
    /// set to anything. `--strip` takes precedence
    #[arg(long)]
    pub no_color: bool,

    /// Report the resolved settings on stderr
    #[arg(long)]
    pub verbose: bool,
}

/// Parse mode as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliParseMode {
    /// Detect from the input
    Auto,
    /// Configuration syntax
    Config,
    /// Show command output
    Show,
}

impl From<CliParseMode> for ParseMode {
    fn from(mode: CliParseMode) -> Self {
        match mode {
            CliParseMode::Auto => ParseMode::Auto,
            CliParseMode::Config => ParseMode::Config,
            CliParseMode::Show => ParseMode::Show,
        }
    }
}

/// Built-in samples for `--demo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Sample running configuration
    Config,
    /// Sample show command output
    Show,
    /// A short sample in every theme
    Themes,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
