// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file and settings resolution.
//!
//! ```toml
//! theme = "nord"
//! mode = "auto"      # auto | config | show
//! force = false
//!
//! [colors]
//! Interface = "bold #ff9e64"
//! state_bad = "bright-red"
//! Comment = "240"
//! ```
//!
//! Precedence, lowest first: built-in defaults, the config file,
//! environment variables, command-line flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use cink_lexer::{ParseMode, TokenCategory, UnknownCategory};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::theme::{escape, Theme, ThemeError, DEFAULT_THEME};

/// Directory under the user config base holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "cink";
pub const CONFIG_FILE_NAME: &str = "config.toml";

static HEX_COLOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").ok());

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("Invalid [colors] key: {0}")]
    Category(#[from] UnknownCategory),

    #[error("Invalid color '{spec}' for {category}: expected an escape sequence, #rrggbb, a 0-255 index or a color name")]
    Color {
        category: TokenCategory,
        spec: String,
    },
}

/// Parse mode as written in the config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Auto,
    Config,
    Show,
}

impl From<ModeSetting> for ParseMode {
    fn from(mode: ModeSetting) -> Self {
        match mode {
            ModeSetting::Auto => ParseMode::Auto,
            ModeSetting::Config => ParseMode::Config,
            ModeSetting::Show => ParseMode::Show,
        }
    }
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub mode: Option<ModeSetting>,

    /// Skip the content check
    #[serde(default)]
    pub force: Option<bool>,

    /// Category name to color spec
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `$XDG_CONFIG_HOME/cink/config.toml`, else `$HOME/.config/cink/config.toml`.
pub fn default_config_path(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = xdg_config_home.or_else(|| home.map(|h| h.join(".config")))?;
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the config file.
///
/// An explicit path must exist. Without one, the default location is used
/// only if a file is there.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<(PathBuf, FileConfig)>, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            match default_config_path(crate::env::xdg_config_home(), crate::env::home_dir()) {
                Some(path) if path.is_file() => path,
                _ => return Ok(None),
            }
        }
    };
    let config = FileConfig::load(&path)?;
    Ok(Some((path, config)))
}

/// Fully resolved settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub theme: String,
    pub mode: ParseMode,
    pub force: bool,
    pub colors: BTreeMap<String, String>,
    /// Config file the settings were read from
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: DEFAULT_THEME.to_string(),
            mode: ParseMode::Auto,
            force: false,
            colors: BTreeMap::new(),
            source: None,
        }
    }
}

/// Values taken from the environment and command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub theme: Option<String>,
    pub mode: Option<ParseMode>,
    /// `--force` can only turn the check off
    pub force: bool,
}

impl Settings {
    /// Layer the config file and overrides on top of the defaults.
    pub fn resolve(file: Option<(PathBuf, FileConfig)>, overrides: Overrides) -> Self {
        let mut settings = Settings::default();

        if let Some((path, file)) = file {
            if let Some(theme) = file.theme {
                settings.theme = theme;
            }
            if let Some(mode) = file.mode {
                settings.mode = mode.into();
            }
            settings.force = file.force.unwrap_or(false);
            settings.colors = file.colors;
            settings.source = Some(path);
        }

        if let Some(theme) = overrides.theme {
            settings.theme = theme;
        }
        if let Some(mode) = overrides.mode {
            settings.mode = mode;
        }
        settings.force |= overrides.force;
        settings
    }

    /// The selected theme with color overrides applied.
    pub fn build_theme(&self) -> Result<Theme, ConfigError> {
        let theme = Theme::try_by_name(&self.theme)?;
        for (name, spec) in &self.colors {
            let category: TokenCategory = name.parse()?;
            let color = parse_color(spec).ok_or_else(|| ConfigError::Color {
                category,
                spec: spec.clone(),
            })?;
            theme.set_color(category, color);
        }
        Ok(theme)
    }
}

/// Turn a color spec into an escape sequence.
///
/// Accepts a raw escape sequence (used as is), `none` or an empty string
/// (uncolored), or `[attribute ...] color` where attributes are `bold`,
/// `dim`, `italic`, `underline` and the color is `#rrggbb`, a 256-color
/// index or a color name such as `cyan` or `bright-red`. Attributes alone
/// are allowed.
pub fn parse_color(spec: &str) -> Option<String> {
    let spec = spec.trim();
    if spec.starts_with('\x1b') {
        return Some(spec.to_string());
    }
    if spec.is_empty() || spec.eq_ignore_ascii_case("none") {
        return Some(String::new());
    }

    let mut out = String::new();
    let mut words = spec.split_whitespace().peekable();
    while let Some(word) = words.next() {
        let word = word.to_ascii_lowercase();
        if let Some(attribute) = escape::attribute(&word) {
            out.push_str(attribute);
            continue;
        }
        // The color itself comes last
        if words.peek().is_some() {
            return None;
        }
        out.push_str(&color_word(&word)?);
    }
    Some(out)
}

fn color_word(word: &str) -> Option<String> {
    if word.starts_with('#') {
        let caps = HEX_COLOR.as_ref()?.captures(word)?;
        let channel = |i: usize| u8::from_str_radix(caps.get(i)?.as_str(), 16).ok();
        return Some(escape::rgb(channel(1)?, channel(2)?, channel(3)?));
    }
    if let Ok(index) = word.parse::<u8>() {
        return Some(escape::color256(index));
    }
    escape::named(word).map(str::to_string)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
