// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw OS error codes and their classification.

use thiserror::Error;

/// Classification of every error the workspace can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad length, unmatched unmap target, unsupported flags, bad name length.
    InvalidArgument,
    /// Empty name, or no free unique name within the retry bound.
    ResourceFault,
    /// The object already exists. Absorbed by the create-retry loop.
    AlreadyExists,
    /// Any other failure reported by the operating system.
    Syscall,
}

/// A raw `errno` value returned by a failed syscall.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{}", render(.0))]
pub struct Errno(pub i32);

impl Errno {
    /// Invalid argument.
    pub const EINVAL: Self = Self(libc::EINVAL);
    /// Bad address. Used as the resource-fault code.
    pub const EFAULT: Self = Self(libc::EFAULT);
    /// Object already exists.
    pub const EEXIST: Self = Self(libc::EEXIST);
    /// No such file or directory.
    pub const ENOENT: Self = Self(libc::ENOENT);
    /// Function not implemented.
    pub const ENOSYS: Self = Self(libc::ENOSYS);
    /// Operation not permitted.
    pub const EPERM: Self = Self(libc::EPERM);

    /// Reads the calling thread's `errno`.
    pub fn last() -> Self {
        Self(std::io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// Returns the numeric code.
    pub fn code(self) -> i32 {
        self.0
    }

    /// Classifies the bare code.
    ///
    /// This is a hint for codes seen outside any typed error. The error
    /// enums classify by variant instead, so a kernel `EINVAL` wrapped in a
    /// syscall variant is still [`ErrorKind::Syscall`].
    pub fn kind(self) -> ErrorKind {
        match self.0 {
            libc::EINVAL => ErrorKind::InvalidArgument,
            libc::EFAULT => ErrorKind::ResourceFault,
            libc::EEXIST => ErrorKind::AlreadyExists,
            _ => ErrorKind::Syscall,
        }
    }

    /// Symbolic name, e.g. `"EINVAL"`. Empty for unknown codes.
    pub fn name(self) -> &'static str {
        shmkit_errno::errno_name(self.0)
    }

    /// One-line message. Empty for unknown codes.
    pub fn message(self) -> &'static str {
        shmkit_errno::errno_message(self.0)
    }

    /// Longer explanation wrapped to 78 columns. Empty for unknown codes.
    pub fn help(self) -> String {
        shmkit_errno::errno_help(self.0)
    }
}

impl From<Errno> for std::io::Error {
    fn from(errno: Errno) -> Self {
        std::io::Error::from_raw_os_error(errno.0)
    }
}

fn render(code: &i32) -> String {
    match shmkit_errno::describe(*code) {
        Some(d) => format!("{}: {} (errno {})", d.name, d.message, code),
        None => format!("errno {code}"),
    }
}
