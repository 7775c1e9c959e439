// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::os::fd::{FromRawFd, OwnedFd};

use tracing::debug;

use shmkit_sys::consts::{MFD_ALLOW_SEALING, MFD_CLOEXEC};
use shmkit_sys::{LibcSyscalls, Syscalls};

use crate::error::AnonFileError;
use crate::file::{AnonymousFile, FileRecord};
use crate::provider::AnonymousFileProvider;
use crate::validate::validate;

/// Provider backed by `memfd_create(2)`.
///
/// Where the kernel has no `memfd_create` every call fails with
/// `Create(ENOSYS)`.
#[derive(Debug, Default)]
pub struct NativeProvider<S: Syscalls = LibcSyscalls> {
    syscalls: S,
}

impl NativeProvider<LibcSyscalls> {
    /// Creates a provider over the `libc` gateway.
    pub fn new() -> Self {
        Self::with_syscalls(LibcSyscalls)
    }
}

impl<S: Syscalls> NativeProvider<S> {
    /// Creates a provider over the given gateway.
    pub fn with_syscalls(syscalls: S) -> Self {
        Self { syscalls }
    }

    /// The gateway this provider calls into.
    pub fn syscalls(&self) -> &S {
        &self.syscalls
    }
}

impl<S: Syscalls> AnonymousFileProvider for NativeProvider<S> {
    fn create(&self, name: &str, flags: u32) -> Result<AnonymousFile, AnonFileError> {
        validate(name, flags)?;

        let raw = self
            .syscalls
            .memfd_create(name, flags)
            .map_err(AnonFileError::Create)?;
        // Safety: memfd_create returned a fresh descriptor nobody else owns
        let fd = unsafe { OwnedFd::from_raw_fd(raw) };

        debug!(fd = raw, name, flags, "created memfd");

        Ok(AnonymousFile::untracked(
            fd,
            FileRecord {
                name: name.to_owned(),
                unique_name: None,
                allows_sealing: flags & MFD_ALLOW_SEALING != 0,
                close_on_exec: flags & MFD_CLOEXEC != 0,
            },
        ))
    }
}
