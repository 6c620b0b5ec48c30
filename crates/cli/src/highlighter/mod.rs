// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlighting entry points.
//!
//! [`Highlighter`] holds the selected theme and an on/off switch. All
//! methods take `&self` and are safe to call from several threads.

mod gate;

use std::sync::Arc;

use cink_lexer::{detect_parse_mode, tokenize_with_mode, ParseMode};
use parking_lot::RwLock;

use crate::ansi::{has_control_sequences, segments, strip_control_sequences};
use crate::theme::Theme;

pub use gate::looks_like_cisco;

/// Highlight `input` with the default theme, auto-detecting content.
pub fn highlight(input: &str) -> String {
    Highlighter::new().highlight(input)
}

#[derive(Debug)]
struct State {
    theme: Arc<Theme>,
    enabled: bool,
}

/// Colorizes Cisco IOS text with a theme.
#[derive(Debug)]
pub struct Highlighter {
    state: RwLock<State>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Enabled highlighter with the default theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Highlighter {
            state: RwLock::new(State {
                theme: Arc::new(theme),
                enabled: true,
            }),
        }
    }

    /// Replace the theme. Renders already in progress finish with the
    /// previous one.
    pub fn set_theme(&self, theme: Theme) {
        self.state.write().theme = Arc::new(theme);
    }

    /// The current theme. Color overrides applied to it are visible to
    /// subsequent renders.
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.state.read().theme)
    }

    pub fn enable(&self) {
        self.state.write().enabled = true;
    }

    pub fn disable(&self) {
        self.state.write().enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.state.read().enabled
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&self) -> bool {
        let mut state = self.state.write();
        state.enabled = !state.enabled;
        state.enabled
    }

    /// Highlight `input` if it looks like Cisco content.
    ///
    /// Returns the input unchanged when disabled, empty, or rejected by the
    /// content check. Existing control sequences are preserved in place.
    pub fn highlight(&self, input: &str) -> String {
        if !self.is_enabled() || input.is_empty() {
            return input.to_string();
        }

        let plain = strip_control_sequences(input);
        if !looks_like_cisco(&plain) {
            return input.to_string();
        }
        self.render(input, detect_parse_mode(&plain))
    }

    /// Highlight without the content check.
    pub fn highlight_forced(&self, input: &str) -> String {
        self.highlight_with_mode(input, ParseMode::Auto)
    }

    /// Highlight as show command output, without the content check.
    pub fn highlight_show_output(&self, input: &str) -> String {
        self.highlight_with_mode(input, ParseMode::Show)
    }

    /// Highlight with a pinned parse mode, without the content check.
    /// `Auto` detects the mode once for the whole input.
    pub fn highlight_with_mode(&self, input: &str, mode: ParseMode) -> String {
        if !self.is_enabled() || input.is_empty() {
            return input.to_string();
        }

        let mode = match mode {
            ParseMode::Auto if has_control_sequences(input) => {
                detect_parse_mode(&strip_control_sequences(input))
            }
            mode => mode,
        };
        self.render(input, mode)
    }

    /// Highlight each line independently with [`Highlighter::highlight`].
    pub fn highlight_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.highlight(line.as_ref()))
            .collect()
    }

    /// Colorize each text segment and copy control sequences through.
    fn render(&self, input: &str, mode: ParseMode) -> String {
        let theme = self.theme();
        let mut out = String::with_capacity(input.len() * 2);

        for segment in segments(input) {
            if segment.is_control_sequence {
                out.push_str(segment.text);
            } else {
                theme.paint(&tokenize_with_mode(segment.text, mode), &mut out);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
