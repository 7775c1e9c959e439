// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::os::fd::{AsRawFd, IntoRawFd, OwnedFd};

use tracing::warn;

use shmkit_sys::consts::FD_CLOEXEC;
use shmkit_sys::{Errno, LibcSyscalls, RawFd, Syscalls};

use crate::error::AnonFileError;

/// Sets or clears `FD_CLOEXEC`, always writing the flags back.
pub(crate) fn set_close_on_exec<S: Syscalls>(
    syscalls: &S,
    fd: RawFd,
    enabled: bool,
) -> Result<(), Errno> {
    let flags = syscalls.get_fd_flags(fd)?;
    let flags = if enabled {
        flags | FD_CLOEXEC
    } else {
        flags & !FD_CLOEXEC
    };

    syscalls.set_fd_flags(fd, flags)
}

/// Clears `FD_CLOEXEC` so the descriptor survives `exec`.
///
/// On failure the descriptor is closed and the error returned.
///
/// # Example
///
/// ```rust
/// use std::os::fd::OwnedFd;
///
/// use shmkit_anonfile::{AnonymousFileProvider, default_provider, remove_close_on_exec};
/// use shmkit_sys::consts::MFD_CLOEXEC;
///
/// let file = default_provider().create("worker", MFD_CLOEXEC).unwrap();
/// let fd = remove_close_on_exec(OwnedFd::from(file)).unwrap();
/// # drop(fd);
/// ```
pub fn remove_close_on_exec(fd: OwnedFd) -> Result<OwnedFd, AnonFileError> {
    remove_close_on_exec_with(&LibcSyscalls, fd)
}

/// [`remove_close_on_exec`] through an explicit gateway.
pub fn remove_close_on_exec_with<S: Syscalls>(
    syscalls: &S,
    fd: OwnedFd,
) -> Result<OwnedFd, AnonFileError> {
    if let Err(errno) = set_close_on_exec(syscalls, fd.as_raw_fd(), false) {
        let raw = fd.into_raw_fd();

        if let Err(close_errno) = syscalls.close(raw) {
            warn!(fd = raw, errno = %close_errno, "close after failed fcntl failed");
        }

        return Err(AnonFileError::CloseOnExec(errno));
    }

    Ok(fd)
}
