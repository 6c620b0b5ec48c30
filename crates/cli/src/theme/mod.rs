// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color themes.
//!
//! A [`Theme`] maps every token category to an escape sequence. Built-in
//! themes are generated from a semantic [`Palette`]; individual colors can
//! be overridden at runtime with [`Theme::set_color`], which is safe while
//! other threads render with the same theme.

pub mod escape;
mod palette;

use std::collections::HashMap;
use std::fmt;

use cink_lexer::{Token, TokenCategory};
use parking_lot::RwLock;
use thiserror::Error;

use escape::{BOLD, DIM, ITALIC, RESET};

pub use palette::Palette;

/// Theme used when none is selected.
pub const DEFAULT_THEME: &str = "tokyonight";

/// Built-in themes, in listing order.
const THEMES: &[(&str, fn() -> Palette)] = &[
    ("tokyonight", palette::tokyonight),
    ("vibrant", palette::vibrant),
    ("solarized", palette::solarized),
    ("monokai", palette::monokai),
    ("nord", palette::nord),
    ("catppuccin", palette::catppuccin),
    ("dracula", palette::dracula),
    ("gruvbox", palette::gruvbox),
    ("onedark", palette::onedark),
];

/// Alternate spellings accepted by name lookup.
const ALIASES: &[(&str, &str)] = &[
    ("tokyo-night", "tokyonight"),
    ("tokyo", "tokyonight"),
    ("default", "tokyonight"),
    ("solarized-dark", "solarized"),
    ("catppuccin-mocha", "catppuccin"),
    ("mocha", "catppuccin"),
    ("gruvbox-dark", "gruvbox"),
    ("one-dark", "onedark"),
];

/// Names of the built-in themes, default first.
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|(name, _)| *name).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Unknown theme '{name}' (available: {})", theme_names().join(", "))]
    Unknown { name: String },
}

fn lookup(name: &str) -> Option<(&'static str, fn() -> Palette)> {
    let name = name.trim().to_ascii_lowercase();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name.as_str(), |(_, target)| *target);
    THEMES.iter().find(|(n, _)| *n == canonical).copied()
}

/// Escape sequences per token category.
pub struct Theme {
    name: String,
    colors: RwLock<HashMap<TokenCategory, String>>,
}

impl Theme {
    /// Build a theme from a palette. Commands, sections, actions,
    /// interfaces, negation, states and prompt markers are bold; comments
    /// are italic; plain text is never colored.
    pub fn from_palette(name: impl Into<String>, palette: &Palette) -> Self {
        let colors = TokenCategory::ALL
            .iter()
            .map(|&category| (category, palette_color(palette, category)))
            .collect();
        Theme {
            name: name.into(),
            colors: RwLock::new(colors),
        }
    }

    /// Built-in theme by name or alias, case-insensitive. Unknown names
    /// fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        Self::try_by_name(name).unwrap_or_default()
    }

    /// Built-in theme by name or alias, case-insensitive.
    pub fn try_by_name(name: &str) -> Result<Self, ThemeError> {
        let (canonical, palette) = lookup(name).ok_or_else(|| ThemeError::Unknown {
            name: name.to_string(),
        })?;
        Ok(Self::from_palette(canonical, &palette()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Escape sequence for `category`; empty when the category is uncolored.
    pub fn color_for(&self, category: TokenCategory) -> String {
        self.colors
            .read()
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }

    /// Override the color of one category. An empty string leaves the
    /// category uncolored.
    pub fn set_color(&self, category: TokenCategory, color: impl Into<String>) {
        self.colors.write().insert(category, color.into());
    }

    /// Append `tokens` to `out`, wrapping each colored token as
    /// `color + text + reset`.
    ///
    /// The color table is read under a single lock so that one pass never
    /// mixes old and new overrides.
    pub fn paint(&self, tokens: &[Token<'_>], out: &mut String) {
        let colors = self.colors.read();
        for token in tokens {
            match colors.get(&token.category).filter(|c| !c.is_empty()) {
                Some(color) => {
                    out.push_str(color);
                    out.push_str(token.text);
                    out.push_str(RESET);
                }
                None => out.push_str(token.text),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(DEFAULT_THEME, &palette::tokyonight())
    }
}

impl Clone for Theme {
    fn clone(&self) -> Self {
        Theme {
            name: self.name.clone(),
            colors: RwLock::new(self.colors.read().clone()),
        }
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn palette_color(p: &Palette, category: TokenCategory) -> String {
    let bold = |color: &str| format!("{BOLD}{color}");

    match category {
        TokenCategory::Text => String::new(),

        TokenCategory::Command => bold(&p.command),
        TokenCategory::Section => bold(&p.section),
        TokenCategory::Protocol => p.protocol.clone(),
        TokenCategory::Action => bold(&p.action),
        TokenCategory::Interface => bold(&p.interface),
        TokenCategory::Ipv4
        | TokenCategory::Ipv4Prefix
        | TokenCategory::Ipv6
        | TokenCategory::Ipv6Prefix => p.ip.clone(),
        TokenCategory::Mac => p.mac.clone(),
        TokenCategory::Number => p.number.clone(),
        TokenCategory::String => p.string.clone(),
        TokenCategory::Comment => format!("{ITALIC}{}", p.comment),
        TokenCategory::Identifier => p.foreground.clone(),
        TokenCategory::Keyword => p.keyword.clone(),
        TokenCategory::Operator => p.operator.clone(),
        TokenCategory::Asn => p.asn.clone(),
        TokenCategory::Community => p.community.clone(),
        TokenCategory::Value => p.value.clone(),
        TokenCategory::Negation => bold(&p.negation),

        TokenCategory::StateGood => bold(&p.state_good),
        TokenCategory::StateBad => bold(&p.state_bad),
        TokenCategory::StateWarning => bold(&p.state_warning),
        TokenCategory::StateNeutral => format!("{DIM}{}", p.comment),
        TokenCategory::ColumnHeader => bold(&p.foreground),
        TokenCategory::StatusSymbol => bold(&p.protocol),
        TokenCategory::TimeDuration => p.duration.clone(),
        TokenCategory::Percentage => p.state_good.clone(),
        TokenCategory::ByteSize => p.protocol.clone(),
        TokenCategory::RouteProtocol => bold(&p.route_protocol),

        TokenCategory::PromptHost => bold(&p.prompt_host),
        TokenCategory::PromptMode => p.prompt_mode.clone(),
        TokenCategory::PromptOper => bold(&p.prompt_oper),
        TokenCategory::PromptConf => bold(&p.prompt_conf),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
