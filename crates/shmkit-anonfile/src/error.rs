// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shmkit-anonfile.
use thiserror::Error;

use shmkit_sys::{Errno, ErrorKind};

/// Errors reported while creating or adjusting an anonymous file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnonFileError {
    /// Flag bits outside the supported set.
    #[error("unsupported flags {0:#x}")]
    UnsupportedFlags(u32),

    /// The logical name is empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The logical name exceeds the length limit.
    #[error("name is {len} bytes, at most {max} are allowed")]
    NameTooLong {
        /// Length of the rejected name.
        len: usize,
        /// Longest accepted name.
        max: usize,
    },

    /// Every candidate name collided with an existing object.
    #[error("no free object name after {attempts} attempts")]
    NamesExhausted {
        /// Number of candidates tried.
        attempts: usize,
    },

    /// The configured name prefix contains `/` or NUL, or leaves no room for
    /// the generated part of the name.
    #[error("invalid name prefix {0:?}")]
    InvalidPrefix(String),

    /// `shm_open` or `memfd_create` failed with something other than `EEXIST`.
    #[error("creating the backing object failed: {0}")]
    Create(Errno),

    /// `shm_unlink` failed. The descriptor was closed.
    #[error("unlinking the backing object failed: {0}")]
    Unlink(Errno),

    /// Reading or writing the descriptor flags failed. The descriptor was closed.
    #[error("updating close-on-exec failed: {0}")]
    CloseOnExec(Errno),
}

impl AnonFileError {
    /// The numeric code of this error.
    ///
    /// Validation failures map to `EINVAL`, an empty name and an exhausted
    /// name space to `EFAULT`.
    pub fn errno(&self) -> Errno {
        match *self {
            Self::UnsupportedFlags(_) | Self::NameTooLong { .. } | Self::InvalidPrefix(_) => {
                Errno::EINVAL
            }
            Self::EmptyName | Self::NamesExhausted { .. } => Errno::EFAULT,
            Self::Create(e) | Self::Unlink(e) | Self::CloseOnExec(e) => e,
        }
    }

    /// Classifies this error by variant. Failures reported by the OS are
    /// always [`ErrorKind::Syscall`], whatever their code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFlags(_) | Self::NameTooLong { .. } | Self::InvalidPrefix(_) => {
                ErrorKind::InvalidArgument
            }
            Self::EmptyName | Self::NamesExhausted { .. } => ErrorKind::ResourceFault,
            Self::Create(_) | Self::Unlink(_) | Self::CloseOnExec(_) => ErrorKind::Syscall,
        }
    }
}
