// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shmkit-mapping.
use thiserror::Error;

use shmkit_sys::{Errno, ErrorKind};

/// Errors reported by the [`MappingRegistry`](crate::MappingRegistry).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MappingError {
    /// A zero-length range was requested or passed in.
    #[error("mapping length must be non-zero")]
    ZeroLength,

    /// The range is not exactly one live registration.
    #[error("range does not match a live mapping")]
    UnknownRange,

    /// A `MAP_FIXED` request covers only part of a live registration.
    #[error("fixed mapping partially overlaps a live mapping")]
    PartialOverlap,

    /// Creating the mapping failed (`mmap`).
    #[error("mmap failed: {0}")]
    Map(Errno),

    /// Removing the mapping failed (`munmap`).
    #[error("munmap failed: {0}")]
    Unmap(Errno),

    /// Changing the protection failed (`mprotect`).
    #[error("mprotect failed: {0}")]
    Protect(Errno),

    /// Locking the pages failed (`mlock`).
    #[error("mlock failed: {0}")]
    Lock(Errno),

    /// Unlocking the pages failed (`munlock`).
    #[error("munlock failed: {0}")]
    Unlock(Errno),

    /// Passing usage advice failed (`madvise`).
    #[error("madvise failed: {0}")]
    Advise(Errno),

    /// Flushing to the backing file failed (`msync`).
    #[error("msync failed: {0}")]
    Sync(Errno),
}

impl MappingError {
    /// The numeric code of this error. Registry-side rejections map to `EINVAL`.
    pub fn errno(&self) -> Errno {
        match *self {
            Self::ZeroLength | Self::UnknownRange | Self::PartialOverlap => Errno::EINVAL,
            Self::Map(e)
            | Self::Unmap(e)
            | Self::Protect(e)
            | Self::Lock(e)
            | Self::Unlock(e)
            | Self::Advise(e)
            | Self::Sync(e) => e,
        }
    }

    /// Classifies this error by variant. Failures reported by the OS are
    /// always [`ErrorKind::Syscall`], whatever their code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroLength | Self::UnknownRange | Self::PartialOverlap => {
                ErrorKind::InvalidArgument
            }
            Self::Map(_)
            | Self::Unmap(_)
            | Self::Protect(_)
            | Self::Lock(_)
            | Self::Unlock(_)
            | Self::Advise(_)
            | Self::Sync(_) => ErrorKind::Syscall,
        }
    }
}
