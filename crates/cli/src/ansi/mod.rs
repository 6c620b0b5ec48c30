// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal escape sequence handling.
//!
//! Splits terminal text into plain text and control sequences so that
//! highlighting can recolor the text while passing cursor movement, line
//! erasure and existing colors through untouched.

mod segment;

pub use segment::{
    has_control_sequences, incomplete_tail_len, segments, strip_control_sequences, Segment,
};
