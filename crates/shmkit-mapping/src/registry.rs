// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MappingRegistry - bookkeeping of live mmap regions.
//!
//! The active set is guarded by one mutex. Only a `MAP_FIXED` map holds it
//! across the syscall, so its overlap check and the replacement it records
//! are one step. `unmap` claims the entry before calling `munmap` and puts it
//! back if the kernel refuses, so two threads can never both unmap the same
//! registration.

use core::ptr::NonNull;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use shmkit_sys::consts::MAP_FIXED;
use shmkit_sys::{Errno, LibcSyscalls, RawFd, Syscalls};

use crate::error::MappingError;
use crate::mapping::{Mapping, MappingInfo};

type ActiveSet = HashMap<(usize, usize), MappingInfo>;

/// Tracks every mapping created through it and validates unmap requests.
pub struct MappingRegistry<S: Syscalls = LibcSyscalls> {
    syscalls: S,
    active: Mutex<ActiveSet>,
}

impl MappingRegistry<LibcSyscalls> {
    /// Creates an empty registry over the `libc` gateway.
    pub fn new() -> Self {
        Self::with_syscalls(LibcSyscalls)
    }
}

impl Default for MappingRegistry<LibcSyscalls> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Syscalls> MappingRegistry<S> {
    /// Creates an empty registry over the given gateway.
    pub fn with_syscalls(syscalls: S) -> Self {
        Self {
            syscalls,
            active: Mutex::new(HashMap::new()),
        }
    }

    /// The gateway this registry calls into.
    pub fn syscalls(&self) -> &S {
        &self.syscalls
    }

    // The map is only mutated by single insert/remove calls, so a panic while
    // the lock is held cannot leave it half-updated.
    fn active(&self) -> MutexGuard<'_, ActiveSet> {
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Maps `len` bytes and registers the returned range.
    ///
    /// `fd` is the backing descriptor, `None` for anonymous mappings. The
    /// registry does not take ownership of it.
    ///
    /// With `MAP_FIXED` in `flags`, a request that covers only part of a live
    /// registration fails with [`MappingError::PartialOverlap`] before the
    /// kernel is asked. Registrations lying wholly inside the new range are
    /// replaced and dropped.
    ///
    /// # Safety
    /// With `MAP_FIXED` in `flags`, any existing mapping overlapping
    /// `[address_hint, address_hint + len)` is replaced by the kernel. The
    /// caller must not hold references into that range, nor unmap it from
    /// another thread while the call runs.
    pub unsafe fn map(
        &self,
        address_hint: *mut u8,
        len: usize,
        prot: i32,
        flags: i32,
        fd: Option<RawFd>,
        offset: i64,
    ) -> Result<Mapping, MappingError> {
        if len == 0 {
            return Err(MappingError::ZeroLength);
        }

        let fixed = flags & MAP_FIXED != 0;

        let held = if fixed {
            let active = self.active();
            let start = address_hint as usize;

            if active
                .values()
                .any(|existing| existing.overlaps(start, len) && !existing.covered_by(start, len))
            {
                debug!(base = start, len, "MAP_FIXED would split a registration");
                return Err(MappingError::PartialOverlap);
            }

            Some(active)
        } else {
            None
        };

        let addr = unsafe {
            self.syscalls
                .mmap(address_hint, len, prot, flags, fd.unwrap_or(-1), offset)
        }
        .map_err(MappingError::Map)?;

        // Only a MAP_FIXED request for address zero can get here.
        let Some(ptr) = NonNull::new(addr) else {
            let _ = unsafe { self.syscalls.munmap(addr, len) };
            return Err(MappingError::Map(Errno::EINVAL));
        };
        let mapping = Mapping::from_raw_parts(ptr, len);

        let info = MappingInfo {
            base: mapping.base(),
            len,
            prot,
            flags,
            fd,
            offset,
        };

        let mut active = held.unwrap_or_else(|| self.active());

        if fixed {
            active.retain(|_, existing| {
                let keep = !existing.covered_by(info.base, info.len);
                if !keep {
                    debug!(
                        base = existing.base,
                        len = existing.len,
                        "dropping registration replaced by MAP_FIXED"
                    );
                }
                keep
            });
        }

        active.insert(mapping.key(), info);
        debug!(base = info.base, len, "registered mapping");

        Ok(mapping)
    }

    /// Unmaps a range previously returned by [`map`](Self::map).
    ///
    /// The handle must match a live registration exactly: same base and same
    /// full length. Anything else fails with [`MappingError::UnknownRange`]
    /// without touching the kernel. If `munmap` itself fails the registration
    /// stays live.
    pub fn unmap(&self, mapping: &Mapping) -> Result<(), MappingError> {
        if mapping.is_empty() {
            return Err(MappingError::ZeroLength);
        }

        let key = mapping.key();
        let info = self
            .active()
            .remove(&key)
            .ok_or(MappingError::UnknownRange)?;

        // Safety: the range was a live registration and is now claimed by us
        if let Err(errno) = unsafe { self.syscalls.munmap(mapping.as_ptr(), mapping.len()) } {
            warn!(
                base = info.base,
                len = info.len,
                %errno,
                "munmap failed, mapping stays registered"
            );
            self.active().insert(key, info);

            return Err(MappingError::Unmap(errno));
        }

        debug!(base = info.base, len = info.len, "unregistered mapping");

        Ok(())
    }

    fn live(&self, mapping: &Mapping) -> Result<MappingInfo, MappingError> {
        if mapping.is_empty() {
            return Err(MappingError::ZeroLength);
        }

        self.active()
            .get(&mapping.key())
            .copied()
            .ok_or(MappingError::UnknownRange)
    }

    /// Changes the protection of a live mapping.
    ///
    /// The registration keeps the protection it was mapped with.
    pub fn protect(&self, mapping: &Mapping, prot: i32) -> Result<(), MappingError> {
        self.live(mapping)?;

        unsafe { self.syscalls.mprotect(mapping.as_ptr(), mapping.len(), prot) }
            .map_err(MappingError::Protect)
    }

    /// Locks a live mapping into RAM.
    pub fn lock(&self, mapping: &Mapping) -> Result<(), MappingError> {
        self.live(mapping)?;

        self.syscalls
            .mlock(mapping.as_ptr(), mapping.len())
            .map_err(MappingError::Lock)
    }

    /// Unlocks a live mapping.
    pub fn unlock(&self, mapping: &Mapping) -> Result<(), MappingError> {
        self.live(mapping)?;

        self.syscalls
            .munlock(mapping.as_ptr(), mapping.len())
            .map_err(MappingError::Unlock)
    }

    /// Passes usage advice for a live mapping to the kernel.
    ///
    /// `MADV_DONTNEED` on a private mapping discards its contents.
    pub fn advise(&self, mapping: &Mapping, advice: i32) -> Result<(), MappingError> {
        self.live(mapping)?;

        unsafe { self.syscalls.madvise(mapping.as_ptr(), mapping.len(), advice) }
            .map_err(MappingError::Advise)
    }

    /// Flushes a live shared mapping to its backing object.
    pub fn sync(&self, mapping: &Mapping, flags: i32) -> Result<(), MappingError> {
        self.live(mapping)?;

        self.syscalls
            .msync(mapping.as_ptr(), mapping.len(), flags)
            .map_err(MappingError::Sync)
    }

    /// Returns true if `mapping` is exactly one live registration.
    pub fn contains(&self, mapping: &Mapping) -> bool {
        self.live(mapping).is_ok()
    }

    /// Returns the bookkeeping record of a live mapping.
    pub fn info(&self, mapping: &Mapping) -> Option<MappingInfo> {
        self.live(mapping).ok()
    }

    /// Snapshot of all live registrations, ordered by base address.
    pub fn active_mappings(&self) -> Vec<MappingInfo> {
        let mut infos: Vec<MappingInfo> = self.active().values().copied().collect();
        infos.sort_by_key(|info| info.base);
        infos
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.active().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }
}

impl<S: Syscalls> core::fmt::Debug for MappingRegistry<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MappingRegistry")
            .field("active", &self.len())
            .finish_non_exhaustive()
    }
}
