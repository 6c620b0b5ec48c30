// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal syntax highlighting for Cisco IOS.
//!
//! Colorizes running configuration, `show` command output and CLI prompts
//! for display in a terminal. Highlighting only inserts color and reset
//! sequences: stripping them yields the original text, and control
//! sequences already present in the input are kept in place.
//!
//! ```
//! use cink::{Highlighter, Theme};
//!
//! let hl = Highlighter::with_theme(Theme::by_name("nord"));
//! let out = hl.highlight("interface GigabitEthernet0/0/0");
//! assert!(out.contains("GigabitEthernet0/0/0"));
//!
//! // Text that does not look like Cisco output is left alone.
//! assert_eq!(hl.highlight("SELECT * FROM users"), "SELECT * FROM users");
//! ```

pub use cink_lexer as lexer;

pub mod ansi;
#[doc(hidden)]
pub mod app;
#[doc(hidden)]
pub mod cli;
pub mod config;
pub mod demo;
#[doc(hidden)]
pub mod env;
pub mod highlighter;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod theme;

pub use highlighter::{highlight, looks_like_cisco, Highlighter};
pub use theme::{theme_names, Palette, Theme, ThemeError};
