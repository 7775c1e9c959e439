// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shmkit_errno
//!
//! Static lookup table translating raw POSIX error numbers into something a
//! human can act on: a symbolic name (`EINVAL`), a one-line message and a
//! longer help text.
//!
//! The table is read-only and process-wide. Nothing in the workspace needs it
//! to *handle* an error; it exists purely for diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use shmkit_errno::{errno_message, errno_name};
//!
//! assert_eq!(errno_name(libc::ENOENT), "ENOENT");
//! assert_eq!(errno_message(libc::ENOENT), "No such file or directory.");
//!
//! // Unknown codes resolve to empty strings.
//! assert_eq!(errno_name(-1), "");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod table;
mod wrap;

pub use table::{ErrnoDescription, describe};
pub use wrap::wrap;

use alloc::string::String;

/// Column width used by [`errno_help`].
pub const HELP_WIDTH: usize = 78;

/// Returns the symbolic name of `code`, or `""` if the code is unknown.
pub fn errno_name(code: i32) -> &'static str {
    describe(code).map_or("", |d| d.name)
}

/// Returns the one-line message of `code`, or `""` if the code is unknown.
pub fn errno_message(code: i32) -> &'static str {
    describe(code).map_or("", |d| d.message)
}

/// Returns the help text of `code` wrapped to [`HELP_WIDTH`] columns.
///
/// Unknown codes, and known codes without help text, yield an empty string.
pub fn errno_help(code: i32) -> String {
    describe(code).map_or_else(String::new, |d| wrap(d.help, HELP_WIDTH))
}
