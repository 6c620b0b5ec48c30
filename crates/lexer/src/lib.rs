// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizing classifier for Cisco IOS / IOS-XE text.
//!
//! Splits configuration syntax and `show` command output into a lossless
//! stream of typed tokens. Concatenating the text of every token yields the
//! original input, so a renderer can colorize without ever altering content.

mod lexer;
mod mode;
pub mod patterns;
mod prompt;
mod token;

pub use lexer::{tokenize, tokenize_with_mode, Lexer};
pub use mode::{detect_parse_mode, ParseMode, CONFIG_INDICATORS, SHOW_INDICATORS};
pub use prompt::is_prompt;
pub use token::{Position, Token, TokenCategory, UnknownCategory};
