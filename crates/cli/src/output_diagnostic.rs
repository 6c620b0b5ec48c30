// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output on stderr.
//!
//! Messages are colored only when stderr is a terminal, so redirected
//! diagnostics never carry escape sequences.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr, red on a terminal.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_labeled(writer, "Error", RED, msg, is_terminal);
}

/// Print a warning message to stderr, yellow on a terminal.
pub fn print_warning(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_labeled(writer, "Warning", YELLOW, msg, is_terminal);
}

/// Print an informational `--verbose` message to stderr, dimmed on a
/// terminal.
pub fn print_note(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_note(&mut io::stderr(), msg, is_tty);
}

fn write_note<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_labeled(writer, "cink", DIM, msg, is_terminal);
}

fn write_labeled<W: Write>(
    writer: &mut W,
    label: &str,
    color: &str,
    msg: impl Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "{color}{label}: {msg}{RESET}");
    } else {
        let _ = writeln!(writer, "{label}: {msg}");
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
