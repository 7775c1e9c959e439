// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing::warn;

use shmkit_sys::{RawFd, Syscalls};

/// A freshly created named object that is not yet handed out.
///
/// Dropping it unlinks the name if it is still linked and closes the
/// descriptor. [`commit`](Self::commit) disarms the rollback.
pub(crate) struct StagedObject<'a, S: Syscalls> {
    syscalls: &'a S,
    fd: RawFd,
    name: String,
    linked: bool,
    armed: bool,
}

impl<'a, S: Syscalls> StagedObject<'a, S> {
    pub(crate) fn new(syscalls: &'a S, fd: RawFd, name: String) -> Self {
        Self {
            syscalls,
            fd,
            name,
            linked: true,
            armed: true,
        }
    }

    pub(crate) fn fd(&self) -> RawFd {
        self.fd
    }

    /// Removes the name from the namespace, keeping the descriptor.
    pub(crate) fn unlink(&mut self) -> Result<(), shmkit_sys::Errno> {
        if self.linked {
            self.syscalls.shm_unlink(&self.name)?;
            self.linked = false;
        }

        Ok(())
    }

    /// Hands out the descriptor and the unique name.
    pub(crate) fn commit(mut self) -> (RawFd, String) {
        debug_assert!(!self.linked, "committed a still-linked object");

        self.armed = false;
        (self.fd, core::mem::take(&mut self.name))
    }
}

impl<S: Syscalls> Drop for StagedObject<'_, S> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        if self.linked {
            if let Err(errno) = self.syscalls.shm_unlink(&self.name) {
                warn!(name = %self.name, %errno, "rollback: shm_unlink failed");
            }
        }

        if let Err(errno) = self.syscalls.close(self.fd) {
            warn!(fd = self.fd, %errno, "rollback: close failed");
        }
    }
}
