// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for shmkit_errno

use proptest::prelude::*;

use crate::{HELP_WIDTH, describe, errno_help, errno_message, errno_name, wrap};

// =============================================================================
// describe()
// =============================================================================

#[test]
fn test_describe_known_code() {
    let description = describe(libc::EINVAL).expect("Failed to describe(EINVAL)");

    assert_eq!(description.code, libc::EINVAL);
    assert_eq!(description.name, "EINVAL");
    assert_eq!(description.message, "Invalid argument.");
    assert!(!description.help.is_empty());
}

#[test]
fn test_describe_unknown_code() {
    assert!(describe(0).is_none());
    assert!(describe(-1).is_none());
    assert!(describe(i32::MAX).is_none());
}

#[test]
fn test_aliased_code_resolves_to_canonical_name() {
    // EWOULDBLOCK shares its value with EAGAIN everywhere we build.
    assert_eq!(errno_name(libc::EWOULDBLOCK), "EAGAIN");
}

#[test]
fn test_every_name_round_trips_to_its_code() {
    for code in 1..200 {
        if let Some(description) = describe(code) {
            assert_eq!(description.code, code);
            assert!(description.name.starts_with('E'));
            assert!(!description.message.is_empty());
        }
    }
}

#[test]
fn test_network_codes_are_described() {
    for (code, name) in [
        (libc::ENOTSOCK, "ENOTSOCK"),
        (libc::EADDRINUSE, "EADDRINUSE"),
        (libc::ECONNREFUSED, "ECONNREFUSED"),
        (libc::ECONNRESET, "ECONNRESET"),
        (libc::ETIMEDOUT, "ETIMEDOUT"),
        (libc::EHOSTUNREACH, "EHOSTUNREACH"),
        (libc::EPROTO, "EPROTO"),
    ] {
        assert_eq!(errno_name(code), name);
        assert!(!errno_message(code).is_empty());
    }
}

#[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
#[test]
fn test_streams_codes_are_described() {
    assert_eq!(errno_name(libc::ETIME), "ETIME");
    assert_eq!(errno_message(libc::ETIME), "Timer expired.");
    assert_eq!(errno_name(libc::ENODATA), "ENODATA");
    assert_eq!(errno_name(libc::ENOSR), "ENOSR");
    assert_eq!(errno_name(libc::ENOSTR), "ENOSTR");
}

// =============================================================================
// errno_name() / errno_message() / errno_help()
// =============================================================================

#[test]
fn test_errno_name_and_message() {
    assert_eq!(errno_name(libc::EEXIST), "EEXIST");
    assert_eq!(errno_message(libc::EEXIST), "File exists.");
    assert_eq!(errno_name(libc::EFAULT), "EFAULT");
    assert_eq!(errno_message(libc::ENOENT), "No such file or directory.");
}

#[test]
fn test_unknown_code_yields_empty_strings() {
    assert_eq!(errno_name(-42), "");
    assert_eq!(errno_message(-42), "");
    assert_eq!(errno_help(-42), "");
}

#[test]
fn test_errno_help_is_wrapped() {
    let help = errno_help(libc::ENOMEM);

    assert!(help.contains('\n'));
    assert!(help.lines().all(|line| line.chars().count() <= HELP_WIDTH));
}

#[test]
fn test_errno_help_empty_for_code_without_help() {
    assert_eq!(errno_help(libc::EOWNERDEAD), "");
}

// =============================================================================
// wrap()
// =============================================================================

#[test]
fn test_wrap_empty_text_is_unchanged() {
    assert_eq!(wrap("", 10), "");
    assert_eq!(wrap("   ", 10), "   ");
}

#[test]
fn test_wrap_short_text_stays_on_one_line() {
    assert_eq!(wrap("  one two  ", 78), "one two");
}

#[test]
fn test_wrap_breaks_at_width() {
    assert_eq!(wrap("aaa bbb ccc", 7), "aaa bbb\nccc");
}

#[test]
fn test_wrap_keeps_long_word_whole() {
    assert_eq!(wrap("a abcdefghij b", 4), "a\nabcdefghij\nb");
}

proptest! {
    #[test]
    fn prop_wrap_preserves_words(
        words in proptest::collection::vec("[a-z]{1,12}", 1..40),
        width in 12usize..100,
    ) {
        let text = words.join(" ");
        let wrapped = wrap(&text, width);

        let rewrapped: Vec<&str> = wrapped.split_whitespace().collect();
        prop_assert_eq!(rewrapped, words.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_wrap_respects_width(
        words in proptest::collection::vec("[a-z]{1,12}", 1..40),
        width in 12usize..100,
    ) {
        let wrapped = wrap(&words.join(" "), width);

        for line in wrapped.lines() {
            prop_assert!(line.len() <= width);
        }
    }
}
