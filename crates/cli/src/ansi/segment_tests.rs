// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use yare::parameterized;

// =============================================================================
// Segmenting
// =============================================================================

#[test]
fn test_sequence_then_text() {
    assert_eq!(
        segments("\x1b[Khello"),
        vec![Segment::control("\x1b[K"), Segment::text("hello")]
    );
}

#[test]
fn test_colored_word() {
    assert_eq!(
        segments("\x1b[31mred\x1b[0m done"),
        vec![
            Segment::control("\x1b[31m"),
            Segment::text("red"),
            Segment::control("\x1b[0m"),
            Segment::text(" done"),
        ]
    );
}

#[test]
fn test_plain_text_is_one_segment() {
    assert_eq!(segments("interface Gi0/1"), vec![Segment::text("interface Gi0/1")]);
}

#[test]
fn test_empty_input_has_no_segments() {
    assert!(segments("").is_empty());
}

#[test]
fn test_lone_escape_at_end_is_text() {
    assert_eq!(segments("abc\x1b"), vec![Segment::text("abc\x1b")]);
    assert!(!has_control_sequences("abc\x1b"));
}

#[parameterized(
    truecolor = { "\x1b[38;2;192;202;245m" },
    erase_line = { "\x1b[2K" },
    cursor_up = { "\x1b[1A" },
    private_mode = { "\x1b[?25l" },
    unterminated = { "\x1b[12" },
    charset = { "\x1b(B" },
    keypad = { "\x1b=" },
    two_intermediates = { "\x1b# 8" },
    multibyte_terminator = { "\x1bé" },
)]
fn whole_input_is_one_sequence(input: &str) {
    assert_eq!(segments(input), vec![Segment::control(input)]);
}

#[test]
fn test_csi_without_final_byte_stops_at_parameters() {
    assert_eq!(
        segments("\x1b[1\x07x"),
        vec![Segment::control("\x1b[1"), Segment::text("\x07x")]
    );
}

#[parameterized(
    bell = { "\x1b]0;R1: ~\x07" },
    string_terminator = { "\x1b]0;R1: ~\x1b\\" },
    hyperlink = { "\x1b]8;;http://10.0.0.1/\x07" },
)]
fn operating_system_command_runs_to_terminator(input: &str) {
    assert_eq!(segments(input), vec![Segment::control(input)]);
}

#[test]
fn test_title_then_prompt() {
    assert_eq!(
        segments("\x1b]0;R1: ~\x07R1#"),
        vec![Segment::control("\x1b]0;R1: ~\x07"), Segment::text("R1#")]
    );
    assert_eq!(strip_control_sequences("\x1b]0;R1: ~\x07R1#"), "R1#");
}

#[test]
fn test_unterminated_operating_system_command_takes_one_character() {
    assert_eq!(
        segments("\x1b]0;title"),
        vec![Segment::control("\x1b]"), Segment::text("0;title")]
    );
}

// =============================================================================
// Incomplete tails
// =============================================================================

#[parameterized(
    lone_escape = { "Router#\x1b", 1 },
    csi_opener = { "Router#\x1b[", 2 },
    csi_parameters = { "abc\x1b[38;5", 6 },
    osc_body = { "x\x1b]0;R1", 6 },
    osc_waiting_for_st = { "\x1b]0;R1\x1b", 7 },
)]
fn holds_back_open_sequence(input: &str, expected: usize) {
    assert_eq!(incomplete_tail_len(input.as_bytes()), expected);
}

#[parameterized(
    plain = { "Router#" },
    empty = { "" },
    finished_csi = { "\x1b[K" },
    text_after_csi = { "\x1b[31mred" },
    finished_osc = { "\x1b]0;R1\x07R1#" },
    short_escape = { "\x1b(B" },
)]
fn nothing_to_hold_back(input: &str) {
    assert_eq!(incomplete_tail_len(input.as_bytes()), 0);
}

#[test]
fn test_runaway_sequence_is_not_held() {
    let input = format!("\x1b]{}", "x".repeat(1024));
    assert_eq!(incomplete_tail_len(input.as_bytes()), 0);
}

// =============================================================================
// Strip and detect
// =============================================================================

#[parameterized(
    erase_then_text = { "\x1b[Khello", "hello" },
    colored = { "\x1b[1m\x1b[31mRouter#\x1b[0m", "Router#" },
    plain = { "no shutdown", "no shutdown" },
    between_lines = { "line one\r\n\x1b[Kline two", "line one\r\nline two" },
)]
fn strips(input: &str, expected: &str) {
    assert_eq!(strip_control_sequences(input), expected);
}

#[parameterized(
    csi = { "\x1b[0m", true },
    short = { "\x1b(B", true },
    embedded = { "a\x1b[Kb", true },
    plain = { "plain text", false },
    empty = { "", false },
    lone_escape = { "\x1b", false },
)]
fn detects(input: &str, expected: bool) {
    assert_eq!(has_control_sequences(input), expected);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn segments_reconstruct_input(input in "(\x1b|\\[|[ -~]|é|\t|\n){0,80}") {
        let rebuilt: String = segments(&input).iter().map(|s| s.text).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn segments_are_never_empty(input in "(\x1b|\\[|[ -~]){0,80}") {
        for segment in segments(&input) {
            prop_assert!(!segment.text.is_empty());
        }
    }

    #[test]
    fn strip_is_idempotent(input in "(\x1b|\\[|[ -~]|é){0,80}") {
        let once = strip_control_sequences(&input);
        prop_assert_eq!(strip_control_sequences(&once), once.clone());
        prop_assert!(!has_control_sequences(&once));
    }

    #[test]
    fn detection_agrees_with_segments(input in "(\x1b|\\[|[ -~]){0,40}") {
        let any_control = segments(&input).iter().any(|s| s.is_control_sequence);
        prop_assert_eq!(has_control_sequences(&input), any_control);
    }
}
