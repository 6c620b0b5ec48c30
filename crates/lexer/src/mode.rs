// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse mode selection and the config-vs-show content heuristic.

use std::fmt;

use crate::patterns::{is_match, TABULAR};

/// Number of characters sampled when detecting the parse mode.
pub const DETECTION_SAMPLE_CHARS: usize = 500;

/// Bonus added for a strong structural signal (separator lines, tables).
const STRUCTURE_BONUS: usize = 2;

/// Minimum show score needed before show mode wins.
const MIN_SHOW_SCORE: usize = 2;

/// Which classification rules the lexer applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Detect from content on first classification
    #[default]
    Auto,
    /// Configuration syntax rules
    Config,
    /// Show command output rules
    Show,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Auto => write!(f, "Auto"),
            ParseMode::Config => write!(f, "Config"),
            ParseMode::Show => write!(f, "Show"),
        }
    }
}

/// Substrings suggesting configuration input.
pub const CONFIG_INDICATORS: &[&str] = &[
    "hostname ",
    "interface ",
    "router ",
    "ip address ",
    "switchport ",
    "access-list ",
    "no ",
    "line vty",
    "line con",
    "service ",
    "enable ",
    "username ",
    "ip route ",
    "snmp-server ",
    "logging ",
    "ntp ",
    "crypto ",
    "aaa ",
    "spanning-tree ",
    "vlan ",
    "banner ",
    "ip access-list ",
];

/// Substrings suggesting show command output.
pub const SHOW_INDICATORS: &[&str] = &[
    "line protocol",
    "up/up",
    "down/down",
    "notconnect",
    "err-disabled",
    "connected",
    "bgp summary",
    "ospf neighbor",
    "show ",
    "last input",
    "last output",
    "5 minute",
    "input rate",
    "output rate",
    "show version",
    "cisco ios",
];

/// Decide between [`ParseMode::Config`] and [`ParseMode::Show`].
///
/// Only the first [`DETECTION_SAMPLE_CHARS`] characters are inspected. Show
/// wins only with a score of at least two that beats the config score; ties
/// and weak signals fall back to config.
pub fn detect_parse_mode(input: &str) -> ParseMode {
    let sample = leading_chars(input, DETECTION_SAMPLE_CHARS);
    let lower = sample.to_lowercase();

    let mut config_score = count_present(&lower, CONFIG_INDICATORS);
    if sample.starts_with("!\n") || sample.contains("\n!\n") {
        config_score += STRUCTURE_BONUS;
    }

    let mut show_score = count_present(&lower, SHOW_INDICATORS);
    if is_match(&TABULAR, sample) {
        show_score += STRUCTURE_BONUS;
    }

    if show_score >= MIN_SHOW_SCORE && show_score > config_score {
        ParseMode::Show
    } else {
        ParseMode::Config
    }
}

fn count_present(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|needle| haystack.contains(**needle)).count()
}

/// Prefix of at most `n` characters, cut on a char boundary.
fn leading_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
