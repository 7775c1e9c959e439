// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

use shmkit_sys::RawFd;

/// Handle to a byte range returned by [`MappingRegistry::map`].
///
/// The handle is plain data: copying it does not duplicate the mapping, and
/// it stays valid as a *value* after the range is unmapped. Only the registry
/// decides whether it still names live memory.
///
/// [`MappingRegistry::map`]: crate::MappingRegistry::map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mapping {
    ptr: NonNull<u8>,
    len: usize,
}

// Safety: Mapping is an address and a length; access goes through unsafe methods
unsafe impl Send for Mapping {}
unsafe impl Sync for Mapping {}

impl Mapping {
    /// Builds a handle from raw parts.
    ///
    /// Constructing a handle is always safe; the registry refuses to unmap
    /// anything that is not a live registration.
    pub fn from_raw_parts(ptr: NonNull<u8>, len: usize) -> Self {
        Self { ptr, len }
    }

    /// Base address of the range.
    pub fn base(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    /// Raw pointer to the first byte.
    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the range has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice view of the range.
    ///
    /// # Safety
    /// The range must still be mapped with at least `PROT_READ`, and must stay
    /// mapped for the lifetime of the slice.
    pub unsafe fn as_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a mutable slice view of the range.
    ///
    /// # Safety
    /// The range must still be mapped with `PROT_WRITE`, must stay mapped for
    /// the lifetime of the slice, and no other reference to it may exist.
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn key(&self) -> (usize, usize) {
        (self.base(), self.len)
    }
}

/// Bookkeeping record of one live mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingInfo {
    /// Base address.
    pub base: usize,
    /// Length in bytes.
    pub len: usize,
    /// Protection requested at map time.
    pub prot: i32,
    /// Sharing and placement flags requested at map time.
    pub flags: i32,
    /// Backing descriptor, `None` for anonymous mappings.
    pub fd: Option<RawFd>,
    /// Offset into the backing object.
    pub offset: i64,
}

impl MappingInfo {
    pub(crate) fn overlaps(&self, base: usize, len: usize) -> bool {
        self.base < base.saturating_add(len) && base < self.base.saturating_add(self.len)
    }

    pub(crate) fn covered_by(&self, base: usize, len: usize) -> bool {
        base <= self.base && self.base.saturating_add(self.len) <= base.saturating_add(len)
    }
}
