// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-input recognition of Cisco CLI prompts.
//!
//! `Router>`, `Router#`, `core-rtr-01(config-if)#` and a prompt followed by
//! a typed command such as `Router# show ip interface brief`.

use crate::lexer::Lexer;
use crate::patterns::{is_match, PROMPT};
use crate::token::{Position, Token, TokenCategory};

/// True if the trimmed input is a CLI prompt line.
pub fn is_prompt(input: &str) -> bool {
    is_match(&PROMPT, input.trim())
}

/// Tokenize `input` as a prompt, or `None` if it is not one.
///
/// Every byte of the input ends up in exactly one token. The command after
/// the prompt character is lexed by a second, independent lexer without
/// prompt recognition.
pub(crate) fn tokenize_prompt(input: &str) -> Option<Vec<Token<'_>>> {
    let caps = PROMPT.as_ref()?.captures(input)?;
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let mut tokens = Vec::new();
    let mut at = Position::START;
    let terminator = if group(4) == "#" {
        TokenCategory::PromptConf
    } else {
        TokenCategory::PromptOper
    };

    let pieces = [
        (TokenCategory::Text, group(1)),
        (TokenCategory::PromptHost, group(2)),
        (TokenCategory::PromptMode, group(3)),
        (terminator, group(4)),
        (TokenCategory::Text, group(5)),
    ];
    for (category, text) in pieces {
        if !text.is_empty() {
            tokens.push(Token::new(category, text, at));
            at.advance(text);
        }
    }

    let command = group(6);
    if !command.is_empty() {
        for token in Lexer::new(command).scan_all() {
            tokens.push(shift(token, at));
        }
        at.advance(command);
    }

    let newline = group(7);
    if !newline.is_empty() {
        tokens.push(Token::new(TokenCategory::Text, newline, at));
    }

    Some(tokens)
}

/// Move a token lexed from a single-line command to where the command
/// starts in the prompt line.
fn shift(token: Token<'_>, origin: Position) -> Token<'_> {
    Token {
        line: origin.line + token.line - 1,
        column: origin.column + token.column - 1,
        ..token
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
