// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shmkit_sys
//!
//! The syscall gateway of the shmkit workspace.
//!
//! Every operating-system call the mapping registry and the anonymous-file
//! layer need goes through the [`Syscalls`] trait. [`LibcSyscalls`] is the
//! production implementation on top of `libc`; with the `test-utils` feature
//! a [`test_utils::MockSyscalls`] wrapper can inject failures into any call.
//!
//! Each call returns a plain [`Errno`] on failure. Classification into
//! [`ErrorKind`] and human-readable translation happen on demand.
//!
//! ## Example
//!
//! ```rust
//! use shmkit_sys::{Errno, ErrorKind, LibcSyscalls, Syscalls};
//!
//! let sys = LibcSyscalls;
//!
//! // Names with an inner slash are rejected before reaching the kernel.
//! let result = sys.shm_open("a/b", libc::O_RDWR, 0);
//! assert_eq!(result, Err(Errno::EINVAL));
//! assert_eq!(Errno::EINVAL.kind(), ErrorKind::InvalidArgument);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod errno;
mod libc_syscalls;
mod support;
mod traits;

pub mod consts;

pub use errno::{Errno, ErrorKind};
pub use libc_syscalls::{LibcSyscalls, page_size, shm_name};
pub use traits::{RawFd, Syscall, Syscalls};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
