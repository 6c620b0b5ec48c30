// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use cink_lexer::tokenize;
use std::sync::Arc;
use yare::parameterized;

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_theme_names_lists_default_first() {
    let names = theme_names();
    assert_eq!(names.len(), 9);
    assert_eq!(names[0], DEFAULT_THEME);
    assert!(names.contains(&"onedark"));
}

#[test]
fn test_every_listed_theme_resolves() {
    for name in theme_names() {
        let theme = Theme::try_by_name(name).unwrap();
        assert_eq!(theme.name(), name);
    }
}

#[parameterized(
    tokyo_night = { "tokyo-night", "tokyonight" },
    tokyo = { "tokyo", "tokyonight" },
    mocha = { "mocha", "catppuccin" },
    catppuccin_mocha = { "catppuccin-mocha", "catppuccin" },
    gruvbox_dark = { "gruvbox-dark", "gruvbox" },
    one_dark = { "one-dark", "onedark" },
    mixed_case = { "Nord", "nord" },
    padded = { " dracula ", "dracula" },
)]
fn resolves_aliases(name: &str, canonical: &str) {
    assert_eq!(Theme::try_by_name(name).unwrap().name(), canonical);
}

#[test]
fn test_unknown_theme_is_an_error() {
    let err = Theme::try_by_name("solarised").unwrap_err();
    assert_eq!(
        err,
        ThemeError::Unknown {
            name: "solarised".to_string()
        }
    );
    let message = err.to_string();
    assert!(message.contains("solarised"));
    assert!(message.contains("tokyonight, vibrant"));
}

#[test]
fn test_by_name_falls_back_to_default() {
    assert_eq!(Theme::by_name("no-such-theme").name(), DEFAULT_THEME);
    assert_eq!(Theme::default().name(), DEFAULT_THEME);
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn test_text_is_never_colored() {
    for name in theme_names() {
        assert_eq!(Theme::by_name(name).color_for(TokenCategory::Text), "");
    }
}

#[test]
fn test_every_other_category_is_colored() {
    for name in theme_names() {
        let theme = Theme::by_name(name);
        for category in TokenCategory::ALL {
            if category != TokenCategory::Text {
                assert!(
                    !theme.color_for(category).is_empty(),
                    "{} has no color for {}",
                    name,
                    category
                );
            }
        }
    }
}

#[test]
fn test_palette_roles_map_to_categories() {
    let palette = Palette {
        command: "<cmd>".into(),
        ip: "<ip>".into(),
        comment: "<comment>".into(),
        state_good: "<good>".into(),
        ..Palette::default()
    };
    let theme = Theme::from_palette("custom", &palette);

    assert_eq!(theme.color_for(TokenCategory::Command), format!("{BOLD}<cmd>"));
    assert_eq!(theme.color_for(TokenCategory::Ipv4), "<ip>");
    assert_eq!(theme.color_for(TokenCategory::Ipv6Prefix), "<ip>");
    assert_eq!(theme.color_for(TokenCategory::Comment), format!("{ITALIC}<comment>"));
    assert_eq!(theme.color_for(TokenCategory::StateNeutral), format!("{DIM}<comment>"));
    assert_eq!(theme.color_for(TokenCategory::Percentage), "<good>");
}

#[test]
fn test_tokyonight_command_color() {
    let theme = Theme::default();
    assert_eq!(
        theme.color_for(TokenCategory::Command),
        "\x1b[1m\x1b[38;2;187;154;247m"
    );
}

#[test]
fn test_set_color_overrides() {
    let theme = Theme::default();
    theme.set_color(TokenCategory::Interface, escape::RED);
    assert_eq!(theme.color_for(TokenCategory::Interface), escape::RED);
}

#[test]
fn test_clone_is_independent() {
    let theme = Theme::by_name("nord");
    let copy = theme.clone();
    copy.set_color(TokenCategory::Number, "");

    assert_eq!(copy.color_for(TokenCategory::Number), "");
    assert!(!theme.color_for(TokenCategory::Number).is_empty());
}

// =============================================================================
// Painting
// =============================================================================

#[test]
fn test_paint_wraps_colored_tokens() {
    let theme = Theme::from_palette("plain", &Palette::default());
    theme.set_color(TokenCategory::Negation, "<neg>");
    theme.set_color(TokenCategory::Command, "<cmd>");

    let mut out = String::new();
    theme.paint(&tokenize("no shutdown"), &mut out);

    assert_eq!(out, format!("<neg>no{RESET} <cmd>shutdown{RESET}"));
}

#[test]
fn test_paint_skips_empty_colors() {
    let theme = Theme::default();
    theme.set_color(TokenCategory::Identifier, "");

    let mut out = String::new();
    theme.paint(&tokenize("frobnicate"), &mut out);

    assert_eq!(out, "frobnicate");
}

#[test]
fn test_concurrent_override_and_lookup() {
    let theme = Arc::new(Theme::default());
    let before = theme.color_for(TokenCategory::Keyword);

    std::thread::scope(|s| {
        for _ in 0..4 {
            let theme = Arc::clone(&theme);
            let before = before.clone();
            s.spawn(move || {
                for _ in 0..200 {
                    let color = theme.color_for(TokenCategory::Keyword);
                    assert!(color == before || color == escape::YELLOW);
                }
            });
        }
        s.spawn(|| {
            for _ in 0..200 {
                theme.set_color(TokenCategory::Keyword, escape::YELLOW);
            }
        });
    });

    assert_eq!(theme.color_for(TokenCategory::Keyword), escape::YELLOW);
}
