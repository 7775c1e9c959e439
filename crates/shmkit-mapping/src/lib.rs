// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shmkit_mapping
//!
//! A registry of the virtual-memory mappings a process created through it.
//!
//! Every successful [`MappingRegistry::map`] is recorded under the exact
//! `(base, len)` pair the kernel returned. [`MappingRegistry::unmap`] only
//! reaches `munmap` when the handle it is given matches a live registration
//! exactly, so arbitrary, partial or repeated unmaps are rejected with an
//! invalid-argument error instead of tearing down memory someone else owns.
//!
//! ## Example
//!
//! ```rust
//! use core::ptr;
//!
//! use shmkit_mapping::{MappingError, MappingRegistry};
//! use shmkit_sys::consts::{MAP_ANONYMOUS, MAP_PRIVATE, PROT_RDWR};
//!
//! fn example() -> Result<(), MappingError> {
//!     let registry = MappingRegistry::new();
//!
//!     // No MAP_FIXED, so no existing mapping can be replaced.
//!     let mut mapping = unsafe {
//!         registry.map(ptr::null_mut(), 4096, PROT_RDWR, MAP_PRIVATE | MAP_ANONYMOUS, None, 0)?
//!     };
//!
//!     unsafe { mapping.as_mut_slice()[0] = 42 };
//!     assert!(registry.contains(&mapping));
//!
//!     registry.unmap(&mapping)?;
//!
//!     // The range is gone, a second unmap is refused.
//!     assert_eq!(registry.unmap(&mapping), Err(MappingError::UnknownRange));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod mapping;
mod registry;

pub use error::MappingError;
pub use mapping::{Mapping, MappingInfo};
pub use registry::MappingRegistry;
