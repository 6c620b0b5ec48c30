// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::theme::escape::RESET;
use cink_lexer::TokenCategory;
use proptest::prelude::*;

fn colored(theme: &Theme, category: TokenCategory, text: &str) -> String {
    format!("{}{}{}", theme.color_for(category), text, RESET)
}

// =============================================================================
// Switch
// =============================================================================

#[test]
fn test_enabled_by_default() {
    assert!(Highlighter::new().is_enabled());
}

#[test]
fn test_toggle_returns_new_state() {
    let hl = Highlighter::new();
    assert!(!hl.toggle());
    assert!(!hl.is_enabled());
    assert!(hl.toggle());
    assert!(hl.is_enabled());
}

#[test]
fn test_disabled_returns_input() {
    let hl = Highlighter::new();
    hl.disable();
    let input = "interface GigabitEthernet0/0/0";
    assert_eq!(hl.highlight(input), input);
    assert_eq!(hl.highlight_forced(input), input);
    assert_eq!(hl.highlight_show_output(input), input);

    hl.enable();
    assert_ne!(hl.highlight(input), input);
}

#[test]
fn test_empty_input() {
    let hl = Highlighter::new();
    assert_eq!(hl.highlight(""), "");
    assert_eq!(hl.highlight_forced(""), "");
}

// =============================================================================
// Auto
// =============================================================================

#[test]
fn test_highlights_config_line() {
    let hl = Highlighter::new();
    let theme = hl.theme();

    let out = hl.highlight("interface GigabitEthernet0/0/0");

    let expected = format!(
        "{} {}",
        colored(&theme, TokenCategory::Command, "interface"),
        colored(&theme, TokenCategory::Interface, "GigabitEthernet0/0/0"),
    );
    assert_eq!(out, expected);
}

#[test]
fn test_rejected_input_is_returned_verbatim() {
    let hl = Highlighter::new();
    assert_eq!(hl.highlight("SELECT * FROM users"), "SELECT * FROM users");

    let escaped = "\x1b[31mSELECT\x1b[0m * FROM users";
    assert_eq!(hl.highlight(escaped), escaped);
}

#[test]
fn test_control_sequences_are_preserved() {
    let hl = Highlighter::new();
    let out = hl.highlight("\x1b[Kinterface Gi0/1\r\n\x1b[2K no shutdown");

    assert!(out.starts_with("\x1b[K"));
    assert!(out.contains("\r\n\x1b[2K"));
    assert_eq!(
        strip_control_sequences(&out),
        "interface Gi0/1\r\n no shutdown"
    );
}

#[test]
fn test_mode_is_detected_across_segments() {
    let hl = Highlighter::new();
    let theme = hl.theme();

    let out = hl.highlight("Interface  Status  Protocol\n\x1b[Kup");

    assert!(out.ends_with(&format!(
        "\x1b[K{}",
        colored(&theme, TokenCategory::StateGood, "up")
    )));
}

#[test]
fn test_prompt_is_highlighted() {
    let hl = Highlighter::new();
    let theme = hl.theme();

    let out = hl.highlight("Router>");

    assert_eq!(
        out,
        format!(
            "{}{}",
            colored(&theme, TokenCategory::PromptHost, "Router"),
            colored(&theme, TokenCategory::PromptOper, ">"),
        )
    );
}

#[test]
fn test_highlight_lines() {
    let hl = Highlighter::new();
    let lines = ["hostname r1", "just words", ""];

    let out = hl.highlight_lines(&lines);

    assert_eq!(out.len(), 3);
    assert_ne!(out[0], lines[0]);
    assert_eq!(out[1], lines[1]);
    assert_eq!(out[2], "");
}

#[test]
fn test_free_function_uses_default_theme() {
    let input = "router bgp 65001";
    assert_eq!(highlight(input), Highlighter::new().highlight(input));
}

// =============================================================================
// Forced and pinned modes
// =============================================================================

#[test]
fn test_forced_skips_content_check() {
    let hl = Highlighter::new();
    let theme = hl.theme();

    assert_eq!(
        hl.highlight_forced("hello"),
        colored(&theme, TokenCategory::Identifier, "hello")
    );
}

#[test]
fn test_show_output_uses_show_rules() {
    let hl = Highlighter::new();
    let theme = hl.theme();

    let out = hl.highlight_show_output("Gi0/1 down");

    assert_eq!(
        out,
        format!(
            "{} {}",
            colored(&theme, TokenCategory::Interface, "Gi0/1"),
            colored(&theme, TokenCategory::StateBad, "down"),
        )
    );
}

#[test]
fn test_highlight_with_mode_config() {
    let hl = Highlighter::new();
    let theme = hl.theme();

    assert_eq!(
        hl.highlight_with_mode("up", ParseMode::Config),
        colored(&theme, TokenCategory::Identifier, "up")
    );
}

#[test]
fn test_text_after_control_sequence_starts_a_fresh_scan() {
    let hl = Highlighter::new();
    let theme = hl.theme();

    let out = hl.highlight_with_mode("x \x1b[1m! note", ParseMode::Config);

    assert!(out.ends_with(&format!(
        "\x1b[1m{}",
        colored(&theme, TokenCategory::Comment, "! note")
    )));
}

// =============================================================================
// Themes
// =============================================================================

#[test]
fn test_set_theme_changes_output() {
    let hl = Highlighter::new();
    let before = hl.highlight("hostname r1");

    hl.set_theme(Theme::by_name("monokai"));

    assert_eq!(hl.theme().name(), "monokai");
    assert_ne!(hl.highlight("hostname r1"), before);
}

#[test]
fn test_theme_overrides_apply_to_later_renders() {
    let hl = Highlighter::new();
    hl.theme().set_color(TokenCategory::Command, "<cmd>");

    assert_eq!(hl.highlight_forced("hostname"), format!("<cmd>hostname{RESET}"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn forced_output_strips_to_input(input in "[ -~\t\n]{0,200}") {
        let out = Highlighter::new().highlight_forced(&input);
        prop_assert_eq!(strip_control_sequences(&out), input);
    }

    #[test]
    fn forced_output_strips_like_input(input in "(\x1b|\\[|[ -~]|\n){0,120}") {
        let out = Highlighter::new().highlight_forced(&input);
        prop_assert_eq!(
            strip_control_sequences(&out),
            strip_control_sequences(&input)
        );
    }

    #[test]
    fn auto_output_strips_like_input(input in "(\x1b\\[K|[ -~]|\n){0,120}") {
        let out = Highlighter::new().highlight(&input);
        prop_assert_eq!(
            strip_control_sequences(&out),
            strip_control_sequences(&input)
        );
    }
}
