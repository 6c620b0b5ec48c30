// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR escape sequence helpers.

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";

/// Bold
pub const BOLD: &str = "\x1b[1m";

/// Dim
pub const DIM: &str = "\x1b[2m";

/// Italic
pub const ITALIC: &str = "\x1b[3m";

/// Underline
pub const UNDERLINE: &str = "\x1b[4m";

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

pub const BRIGHT_BLACK: &str = "\x1b[90m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";

/// 256-color palette foreground
pub fn color256(n: u8) -> String {
    format!("\x1b[38;5;{}m", n)
}

/// 24-bit foreground color
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Basic or bright foreground color by name, e.g. `red` or `bright-cyan`.
pub fn named(name: &str) -> Option<&'static str> {
    let color = match name.replace('_', "-").as_str() {
        "black" => BLACK,
        "red" => RED,
        "green" => GREEN,
        "yellow" => YELLOW,
        "blue" => BLUE,
        "magenta" => MAGENTA,
        "cyan" => CYAN,
        "white" => WHITE,
        "bright-black" | "gray" | "grey" => BRIGHT_BLACK,
        "bright-red" => BRIGHT_RED,
        "bright-green" => BRIGHT_GREEN,
        "bright-yellow" => BRIGHT_YELLOW,
        "bright-blue" => BRIGHT_BLUE,
        "bright-magenta" => BRIGHT_MAGENTA,
        "bright-cyan" => BRIGHT_CYAN,
        "bright-white" => BRIGHT_WHITE,
        _ => return None,
    };
    Some(color)
}

/// Text attribute by name: `bold`, `dim`, `italic` or `underline`.
pub fn attribute(name: &str) -> Option<&'static str> {
    match name {
        "bold" => Some(BOLD),
        "dim" => Some(DIM),
        "italic" => Some(ITALIC),
        "underline" => Some(UNDERLINE),
        _ => None,
    }
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
