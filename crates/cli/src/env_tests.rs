// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[parameterized(
    one = { "1" },
    zero = { "0" },
    false_word = { "false" },
    no = { "no" },
    space = { " " },
)]
fn no_color_any_value_counts(value: &str) {
    assert!(is_set(Some(OsString::from(value))));
}

#[test]
fn test_no_color_empty_or_unset() {
    assert!(!is_set(Some(OsString::new())));
    assert!(!is_set(None));
}
