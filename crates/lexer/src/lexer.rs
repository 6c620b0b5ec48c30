// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classifying lexer for Cisco IOS configuration and show output.

use std::sync::LazyLock;

use crate::mode::{detect_parse_mode, ParseMode};
use crate::patterns::{
    self, is_match, Pattern, WordSet, ACTIONS, ASN, BYTE_SIZE, COLUMN_HEADERS, COMMANDS,
    COMMUNITY, COMMUNITY_KEYWORD, INTERFACE, IPV4, IPV4_PREFIX, IPV6, IPV6_PREFIX, KEYWORDS,
    MAC_COLON, MAC_DOTTED, OPERATORS, PERCENTAGE, PROTOCOLS, ROUTE_PROTOCOL, SECTIONS,
    STATES_BAD, STATES_GOOD, STATES_NEUTRAL, STATES_WARNING, TIME_DURATION, VALUE_KEYWORDS,
};
use crate::prompt::tokenize_prompt;
use crate::token::{Position, Token, TokenCategory};

/// Config-mode word sets, in precedence order.
static CONFIG_WORD_SETS: [(&LazyLock<WordSet>, TokenCategory); 6] = [
    (&COMMANDS, TokenCategory::Command),
    (&SECTIONS, TokenCategory::Section),
    (&PROTOCOLS, TokenCategory::Protocol),
    (&ACTIONS, TokenCategory::Action),
    (&OPERATORS, TokenCategory::Operator),
    (&KEYWORDS, TokenCategory::Keyword),
];

/// Show-mode state word sets, in precedence order.
static STATE_WORD_SETS: [(&LazyLock<WordSet>, TokenCategory); 4] = [
    (&STATES_GOOD, TokenCategory::StateGood),
    (&STATES_BAD, TokenCategory::StateBad),
    (&STATES_WARNING, TokenCategory::StateWarning),
    (&STATES_NEUTRAL, TokenCategory::StateNeutral),
];

/// Show-mode value patterns, in precedence order.
static SHOW_PATTERNS: [(&Pattern, TokenCategory); 4] = [
    (&TIME_DURATION, TokenCategory::TimeDuration),
    (&PERCENTAGE, TokenCategory::Percentage),
    (&BYTE_SIZE, TokenCategory::ByteSize),
    (&ROUTE_PROTOCOL, TokenCategory::RouteProtocol),
];

/// Tokenize `input`, detecting the parse mode from content.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).tokenize()
}

/// Tokenize `input` with an explicit parse mode.
pub fn tokenize_with_mode(input: &str, mode: ParseMode) -> Vec<Token<'_>> {
    Lexer::with_mode(input, mode).tokenize()
}

/// Single-pass tokenizer over one input.
///
/// Carries only the state needed between words: cursor, position, resolved
/// mode, the value-expected flag and the last context-setting word. An
/// instance is exhausted once [`Lexer::tokenize`] returns.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    position: Position,
    mode: ParseMode,
    mode_resolved: bool,
    expecting_value: bool,
    context: Option<String>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer that detects its mode from content.
    pub fn new(input: &'a str) -> Self {
        Self::with_mode(input, ParseMode::Auto)
    }

    /// Create a lexer with a pinned mode; `Auto` still detects.
    pub fn with_mode(input: &'a str, mode: ParseMode) -> Self {
        Lexer {
            input,
            pos: 0,
            position: Position::START,
            mode,
            mode_resolved: mode != ParseMode::Auto,
            expecting_value: false,
            context: None,
        }
    }

    /// Pin the parse mode. Setting `Auto` re-enables detection.
    pub fn set_parse_mode(&mut self, mode: ParseMode) {
        self.mode = mode;
        self.mode_resolved = mode != ParseMode::Auto;
    }

    /// Current mode: `Auto` until the first word has been classified.
    pub fn parse_mode(&self) -> ParseMode {
        self.mode
    }

    /// Consume the remaining input and return its tokens.
    ///
    /// A whole-input prompt match short-circuits line scanning on the first
    /// call.
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        if self.pos == 0 {
            if let Some(tokens) = tokenize_prompt(self.input) {
                self.finish();
                return tokens;
            }
        }
        self.scan_all()
    }

    /// Scan without prompt recognition. Used for the command typed after a
    /// prompt so that re-lexing is a single extra pass.
    pub(crate) fn scan_all(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn finish(&mut self) {
        let rest = &self.input[self.pos..];
        self.position.advance(rest);
        self.pos = self.input.len();
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Take the next `len` bytes as one token.
    fn emit(&mut self, category: TokenCategory, len: usize) -> Token<'a> {
        let at = self.position;
        let text = &self.input[self.pos..self.pos + len];
        self.position.advance(text);
        self.pos += len;
        Token::new(category, text, at)
    }

    fn next_token(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let first = rest.chars().next()?;

        let token = if first == '!' && self.position.column == 1 {
            self.emit(TokenCategory::Comment, line_len(rest))
        } else if first == '"' || first == '\'' {
            let category = if std::mem::take(&mut self.expecting_value) {
                TokenCategory::Value
            } else {
                TokenCategory::String
            };
            self.emit(category, quoted_len(rest, first))
        } else if is_separator(first) {
            let len = rest.find(|c: char| !is_separator(c)).unwrap_or(rest.len());
            // Free text never continues onto the next line
            if rest[..len].contains('\n') {
                self.expecting_value = false;
            }
            self.emit(TokenCategory::Text, len)
        } else if std::mem::take(&mut self.expecting_value) {
            self.emit(TokenCategory::Value, line_len(rest))
        } else {
            let len = rest
                .find(|c: char| is_separator(c) || c == '"' || c == '\'')
                .unwrap_or(rest.len());
            let category = self.classify_word(&rest[..len]);
            self.emit(category, len)
        };
        Some(token)
    }

    fn resolve_mode(&mut self) -> ParseMode {
        if !self.mode_resolved {
            self.mode = detect_parse_mode(self.input);
            self.mode_resolved = true;
        }
        self.mode
    }

    fn classify_word(&mut self, word: &str) -> TokenCategory {
        let lower = word.to_lowercase();
        match self.resolve_mode() {
            ParseMode::Show => self.classify_show_word(word, &lower),
            ParseMode::Config | ParseMode::Auto => self.classify_config_word(word, &lower),
        }
    }

    fn classify_config_word(&mut self, word: &str, lower: &str) -> TokenCategory {
        if lower == "no" {
            self.context = Some(lower.to_string());
            return TokenCategory::Negation;
        }

        if is_match(&ASN, word) {
            return TokenCategory::Asn;
        }

        let matched = CONFIG_WORD_SETS
            .iter()
            .find(|(set, _)| set.contains(lower))
            .map(|(_, category)| *category);
        if let Some(category) = matched {
            if VALUE_KEYWORDS.contains(lower) {
                self.expecting_value = true;
            }
            if category != TokenCategory::Operator {
                self.context = Some(lower.to_string());
            }
            return category;
        }

        self.classify_shared(word)
    }

    fn classify_show_word(&self, word: &str, lower: &str) -> TokenCategory {
        if patterns::STATES_GOOD_COMPOUND.contains(&lower) {
            return TokenCategory::StateGood;
        }
        if patterns::STATES_BAD_COMPOUND.contains(&lower) {
            return TokenCategory::StateBad;
        }

        if let Some((_, category)) = STATE_WORD_SETS.iter().find(|(set, _)| set.contains(lower)) {
            return *category;
        }

        if word.len() <= patterns::STATUS_SYMBOL_MAX_LEN
            && patterns::STATUS_SYMBOLS.contains(&word)
        {
            return TokenCategory::StatusSymbol;
        }

        if let Some((_, category)) = SHOW_PATTERNS.iter().find(|(re, _)| is_match(re, word)) {
            return *category;
        }

        if COLUMN_HEADERS.contains(lower) {
            return TokenCategory::ColumnHeader;
        }

        self.classify_shared(word)
    }

    /// Patterns common to both modes.
    fn classify_shared(&self, word: &str) -> TokenCategory {
        if is_match(&INTERFACE, word) {
            return TokenCategory::Interface;
        }
        if is_match(&IPV4_PREFIX, word) {
            return TokenCategory::Ipv4Prefix;
        }
        if is_match(&IPV4, word) {
            return TokenCategory::Ipv4;
        }
        if is_match(&MAC_DOTTED, word) || is_match(&MAC_COLON, word) {
            return TokenCategory::Mac;
        }
        // "12:00" is a time, not a community, unless `community` came first
        if self.context.as_deref() == Some(COMMUNITY_KEYWORD) && is_match(&COMMUNITY, word) {
            return TokenCategory::Community;
        }
        if is_match(&IPV6_PREFIX, word) {
            return TokenCategory::Ipv6Prefix;
        }
        if is_match(&IPV6, word) {
            return TokenCategory::Ipv6;
        }
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
            return TokenCategory::Number;
        }
        TokenCategory::Identifier
    }
}

/// Blank or control character: never part of a word.
fn is_separator(c: char) -> bool {
    c == ' ' || c.is_ascii_control()
}

/// Length up to, not including, the next newline.
fn line_len(text: &str) -> usize {
    text.find('\n').unwrap_or(text.len())
}

/// Length of a quoted string starting at `text[0]`, including both quotes.
/// A backslash escapes the next character; unterminated runs to the end.
fn quoted_len(text: &str, quote: char) -> usize {
    let mut chars = text.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        if c == quote {
            return i + c.len_utf8();
        }
        if c == '\\' {
            chars.next();
        }
    }
    text.len()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
