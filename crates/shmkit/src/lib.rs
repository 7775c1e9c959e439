// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Checked mmap lifetimes and portable anonymous shared memory.</em></p>
//!
//! ---
//!
//! shmkit gives a process two things the raw syscalls do not:
//!
//! - **A mapping registry.** Every range mapped through it is remembered, and
//!   `munmap` is only issued for a range that is exactly one live mapping.
//!   Double unmaps, partial unmaps and unmaps of memory that was never mapped
//!   fail with `EINVAL` instead of tearing down someone else's pages.
//! - **Anonymous files everywhere.** `memfd_create` where the kernel has it,
//!   an `shm_open` + `shm_unlink` emulation where it does not (macOS and the
//!   BSDs), behind one [`AnonymousFileProvider`](anonfile::AnonymousFileProvider)
//!   trait.
//!
//! # Quick Start
//!
//! ```rust
//! use shmkit::SharedMemory;
//! use shmkit::sys::consts::PROT_RDWR;
//!
//! fn main() -> Result<(), shmkit::Error> {
//!     let shm = SharedMemory::new();
//!
//!     // Inheritable by child processes: no MFD_CLOEXEC.
//!     let file = shm.create_anonymous_file("frames", 0)?;
//!
//!     let mut view = shm.map_file(&file, 4096, PROT_RDWR)?;
//!     unsafe { view.as_mut_slice()[..5].copy_from_slice(b"hello") };
//!
//!     shm.unmap(&view)?;
//!
//!     // Already gone.
//!     assert!(shm.unmap(&view).is_err());
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | module       | crate             |
//! |--------------|-------------------|
//! | [`mapping`]  | `shmkit-mapping`  |
//! | [`anonfile`] | `shmkit-anonfile` |
//! | [`sys`]      | `shmkit-sys`      |
//! | [`errno`]    | `shmkit-errno`    |
//!
//! # Logging
//!
//! Registration, unregistration, name collisions and file creation are
//! reported through `tracing` at `debug`; rollback failures at `warn`. No
//! subscriber is installed.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod error;
mod shared_memory;

pub mod support;

pub use error::Error;
pub use shared_memory::SharedMemory;

pub use shmkit_anonfile as anonfile;
pub use shmkit_errno as errno;
pub use shmkit_mapping as mapping;
pub use shmkit_sys as sys;
