// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-aware segmenter.

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;
const CSI_BRACKET: u8 = b'[';
const OSC_BRACKET: u8 = b']';
const ST_FINAL: u8 = b'\\';

/// Longest unfinished sequence [`incomplete_tail_len`] will hold back.
const MAX_INCOMPLETE_SEQUENCE: usize = 512;

/// A run of plain text or a single control sequence, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_control_sequence: bool,
}

impl<'a> Segment<'a> {
    /// Plain text segment.
    pub fn text(text: &'a str) -> Self {
        Segment {
            text,
            is_control_sequence: false,
        }
    }

    /// Control sequence segment.
    pub fn control(text: &'a str) -> Self {
        Segment {
            text,
            is_control_sequence: true,
        }
    }
}

fn is_csi_param(b: u8) -> bool {
    (0x20..=0x3f).contains(&b)
}

fn is_csi_final(b: u8) -> bool {
    (0x40..=0x7e).contains(&b)
}

fn is_intermediate(b: u8) -> bool {
    (0x20..=0x2f).contains(&b)
}

/// End of a CSI sequence whose parameter bytes start at `i`.
fn skip_csi(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_csi_param(bytes[i]) {
        i += 1;
    }
    if i < bytes.len() && is_csi_final(bytes[i]) {
        i += 1;
    }
    i
}

/// End of an OSC sequence (window title, hyperlink) whose body starts at
/// `i`: just past the BEL or `ESC \` terminator. `None` when unterminated.
fn skip_osc(bytes: &[u8], mut i: usize) -> Option<usize> {
    while i < bytes.len() {
        match bytes[i] {
            BEL => return Some(i + 1),
            ESC if bytes.get(i + 1) == Some(&ST_FINAL) => return Some(i + 2),
            _ => i += 1,
        }
    }
    None
}

/// End of a non-CSI sequence (charset selection, keypad mode, ...) whose
/// intermediate bytes start at `i`. The terminating character is taken
/// whole, so a multi-byte character never gets split.
fn skip_short(input: &str, mut i: usize) -> usize {
    let bytes = input.as_bytes();
    while i < bytes.len() && is_intermediate(bytes[i]) {
        i += 1;
    }
    if let Some(c) = input[i..].chars().next() {
        i += c.len_utf8();
    }
    i
}

/// Split `input` into text and control sequence segments, in order.
///
/// Concatenating every segment's text reproduces the input. A lone ESC at
/// the very end of the input stays in the text.
pub fn segments(input: &str) -> Vec<Segment<'_>> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != ESC || i + 1 >= bytes.len() {
            i += 1;
            continue;
        }

        let end = match bytes[i + 1] {
            CSI_BRACKET => skip_csi(bytes, i + 2),
            // An unterminated OSC is just `ESC ]`
            OSC_BRACKET => skip_osc(bytes, i + 2).unwrap_or(i + 2),
            _ => skip_short(input, i + 1),
        };

        if text_start < i {
            segments.push(Segment::text(&input[text_start..i]));
        }
        segments.push(Segment::control(&input[i..end]));
        i = end;
        text_start = end;
    }

    if text_start < bytes.len() {
        segments.push(Segment::text(&input[text_start..]));
    }

    segments
}

/// Remove all control sequences, keeping only plain text.
pub fn strip_control_sequences(input: &str) -> String {
    segments(input)
        .into_iter()
        .filter(|s| !s.is_control_sequence)
        .map(|s| s.text)
        .collect()
}

/// True if `input` contains at least one control sequence.
pub fn has_control_sequences(input: &str) -> bool {
    // Any ESC with at least one byte after it opens a sequence
    let bytes = input.as_bytes();
    bytes.len() > 1 && bytes[..bytes.len() - 1].contains(&ESC)
}

/// Length of a control sequence left open at the end of `bytes`: a
/// trailing ESC, a CSI still missing its final byte, or an OSC without its
/// terminator. Zero when the input ends cleanly or the open sequence is
/// implausibly long.
///
/// Streaming callers hold these bytes back until the rest arrives.
pub fn incomplete_tail_len(bytes: &[u8]) -> usize {
    let open_osc = bytes
        .windows(2)
        .rposition(|pair| *pair == [ESC, OSC_BRACKET])
        .filter(|&start| skip_osc(bytes, start + 2).is_none());
    let open_escape = bytes
        .iter()
        .rposition(|&b| b == ESC)
        .filter(|&start| match &bytes[start + 1..] {
            [] => true,
            [CSI_BRACKET, params @ ..] => params.iter().all(|&b| is_csi_param(b)),
            _ => false,
        });

    match open_osc.into_iter().chain(open_escape).min() {
        Some(start) if bytes.len() - start <= MAX_INCOMPLETE_SEQUENCE => bytes.len() - start,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
