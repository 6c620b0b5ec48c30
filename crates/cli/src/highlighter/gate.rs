// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cheap pre-check deciding whether text is worth highlighting.

use cink_lexer::{is_prompt, CONFIG_INDICATORS, SHOW_INDICATORS};

/// Phrases that only show up in IOS configuration.
const CISCO_PHRASES: &[&str] = &[
    "switchport mode",
    "ip address ",
    "ip route ",
    "router ospf",
    "router bgp",
    "router eigrp",
    "transport input",
    "exec-timeout",
    "channel-group",
    "spanning-tree portfast",
];

/// Standalone `!` lines needed before separators alone are convincing.
const MIN_SEPARATOR_LINES: usize = 2;

/// True if `text` (already stripped of control sequences) looks like IOS
/// configuration, show output or a CLI prompt.
pub fn looks_like_cisco(text: &str) -> bool {
    if is_prompt_line(text) {
        return true;
    }

    let lower = text.to_lowercase();
    contains_any(&lower, CONFIG_INDICATORS)
        || contains_any(&lower, SHOW_INDICATORS)
        || has_separator_lines(text)
        || contains_any(&lower, CISCO_PHRASES)
}

/// Full prompt grammar, or a looser `host>` / `host(mode)#` shape.
fn is_prompt_line(text: &str) -> bool {
    if is_prompt(text) {
        return true;
    }

    let trimmed = text.trim();
    if trimmed.len() <= 1 {
        return false;
    }
    let Some(mut prefix) = trimmed
        .strip_suffix('>')
        .or_else(|| trimmed.strip_suffix('#'))
    else {
        return false;
    };

    if prefix.contains(')') {
        if let Some(open) = prefix.rfind('(') {
            prefix = &prefix[..open];
        }
    }
    is_hostname(prefix)
}

fn is_hostname(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn has_separator_lines(text: &str) -> bool {
    text.split('\n')
        .filter(|line| line.trim() == "!")
        .nth(MIN_SEPARATOR_LINES - 1)
        .is_some()
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
