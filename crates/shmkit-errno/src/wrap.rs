// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

/// Greedy word wrap.
///
/// Splits `text` on whitespace and joins the words back with single spaces,
/// starting a new line whenever the next word would exceed `width` columns.
/// A word longer than `width` gets a line of its own and is never broken.
/// Text without any word is returned unchanged.
pub fn wrap(text: &str, width: usize) -> String {
    let mut words = text.split_whitespace();

    let Some(first) = words.next() else {
        return String::from(text);
    };

    let mut wrapped = String::with_capacity(text.len());
    wrapped.push_str(first);

    let mut space_left = width.saturating_sub(first.chars().count());

    for word in words {
        let word_len = word.chars().count();

        if word_len + 1 > space_left {
            wrapped.push('\n');
            wrapped.push_str(word);
            space_left = width.saturating_sub(word_len);
        } else {
            wrapped.push(' ');
            wrapped.push_str(word);
            space_left -= word_len + 1;
        }
    }

    wrapped
}
