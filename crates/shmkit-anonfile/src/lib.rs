// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shmkit_anonfile
//!
//! Anonymous shared-memory files: a descriptor to memory that has no name in
//! any namespace and can be mapped, resized and passed to child processes.
//!
//! - [`NativeProvider`] calls `memfd_create(2)`.
//! - [`EmulatedProvider`] fakes it where only named POSIX shared memory
//!   exists: exclusive `shm_open` under a collision-resistant name, immediate
//!   `shm_unlink`, then the close-on-exec flag is set to what was asked for.
//!
//! Both validate flags and names the same way, so code written against
//! [`AnonymousFileProvider`] behaves identically on either.
//!
//! ## Example
//!
//! ```rust
//! use std::fs::File;
//!
//! use shmkit_anonfile::{AnonymousFileProvider, EmulatedProvider};
//! use shmkit_sys::consts::MFD_CLOEXEC;
//!
//! let provider = EmulatedProvider::new();
//! let anon = provider.create("scratch", MFD_CLOEXEC).unwrap();
//! assert!(anon.unique_name().unwrap().starts_with("memfd:"));
//! assert_eq!(provider.open_files(), 1);
//!
//! let file = File::from(anon);
//! file.set_len(4096).unwrap();
//! assert_eq!(file.metadata().unwrap().len(), 4096);
//! assert_eq!(provider.open_files(), 0);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod cloexec;
mod config;
mod emulated;
mod error;
mod file;
mod naming;
mod native;
mod provider;
mod staged;
mod validate;

pub use cloexec::{remove_close_on_exec, remove_close_on_exec_with};
pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PREFIX, EmulatorConfig, MAX_PREFIX_LEN};
pub use emulated::EmulatedProvider;
pub use error::AnonFileError;
pub use file::{AnonymousFile, FileRecord};
pub use native::NativeProvider;
pub use provider::{AnonymousFileProvider, UNNAMED, default_provider};
pub use validate::MFD_NAME_MAX_LEN;
