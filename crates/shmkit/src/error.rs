// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use shmkit_anonfile::AnonFileError;
use shmkit_mapping::MappingError;
use shmkit_sys::{Errno, ErrorKind};

/// Any error a [`SharedMemory`](crate::SharedMemory) operation can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A registry operation failed.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Creating or adjusting an anonymous file failed.
    #[error(transparent)]
    AnonFile(#[from] AnonFileError),

    /// Sizing the backing file failed.
    #[error("ftruncate failed: {0}")]
    Resize(Errno),
}

impl Error {
    /// The numeric code of this error.
    pub fn errno(&self) -> Errno {
        match self {
            Self::Mapping(e) => e.errno(),
            Self::AnonFile(e) => e.errno(),
            Self::Resize(e) => *e,
        }
    }

    /// Classifies this error by variant.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Mapping(e) => e.kind(),
            Self::AnonFile(e) => e.kind(),
            Self::Resize(_) => ErrorKind::Syscall,
        }
    }
}
