// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Flag and name checks shared by every provider.

use shmkit_sys::consts::{MFD_ALL_FLAGS, MFD_HUGE_MASK, MFD_HUGE_SHIFT, MFD_HUGETLB, NAME_MAX};

use crate::config::DEFAULT_PREFIX;
use crate::error::AnonFileError;

/// Longest logical name accepted by [`AnonymousFileProvider::create`].
///
/// [`AnonymousFileProvider::create`]: crate::AnonymousFileProvider::create
pub const MFD_NAME_MAX_LEN: usize = NAME_MAX - DEFAULT_PREFIX.len();

/// Flag bits accepted alongside `flags`.
///
/// The huge-page size field is only meaningful together with `MFD_HUGETLB`.
pub(crate) fn allowed_flags(flags: u32) -> u32 {
    if flags & MFD_HUGETLB != 0 {
        MFD_ALL_FLAGS | (MFD_HUGE_MASK << MFD_HUGE_SHIFT)
    } else {
        MFD_ALL_FLAGS
    }
}

pub(crate) fn validate_flags(flags: u32) -> Result<(), AnonFileError> {
    let unsupported = flags & !allowed_flags(flags);

    if unsupported != 0 {
        return Err(AnonFileError::UnsupportedFlags(unsupported));
    }

    Ok(())
}

pub(crate) fn validate_name(name: &str) -> Result<(), AnonFileError> {
    if name.is_empty() {
        return Err(AnonFileError::EmptyName);
    }

    if name.len() > MFD_NAME_MAX_LEN {
        return Err(AnonFileError::NameTooLong {
            len: name.len(),
            max: MFD_NAME_MAX_LEN,
        });
    }

    Ok(())
}

/// Runs both checks in the order the errors take precedence.
pub(crate) fn validate(name: &str, flags: u32) -> Result<(), AnonFileError> {
    validate_flags(flags)?;
    validate_name(name)
}
