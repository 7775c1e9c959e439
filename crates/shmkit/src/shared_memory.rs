// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::os::fd::{AsRawFd, OwnedFd};

use tracing::debug;

use shmkit_anonfile::{
    AnonFileError, AnonymousFile, AnonymousFileProvider, default_provider,
    remove_close_on_exec_with,
};
use shmkit_mapping::{Mapping, MappingError, MappingRegistry};
use shmkit_sys::consts::MAP_SHARED;
use shmkit_sys::{Errno, LibcSyscalls, RawFd, Syscalls};

use crate::error::Error;

/// A mapping registry and an anonymous-file provider used together.
///
/// Every mapping made through the context is tracked by its registry; every
/// file comes from its provider.
pub struct SharedMemory<S: Syscalls = LibcSyscalls> {
    registry: MappingRegistry<S>,
    provider: Box<dyn AnonymousFileProvider>,
}

impl SharedMemory<LibcSyscalls> {
    /// Creates a context with a fresh registry and the platform's
    /// [`default_provider`].
    pub fn new() -> Self {
        Self::from_parts(MappingRegistry::new(), default_provider())
    }

    /// Creates a context with a fresh registry and the given provider.
    pub fn with_provider(provider: Box<dyn AnonymousFileProvider>) -> Self {
        Self::from_parts(MappingRegistry::new(), provider)
    }
}

impl Default for SharedMemory<LibcSyscalls> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Syscalls> SharedMemory<S> {
    /// Assembles a context from its parts.
    pub fn from_parts(
        registry: MappingRegistry<S>,
        provider: Box<dyn AnonymousFileProvider>,
    ) -> Self {
        Self { registry, provider }
    }

    /// The registry tracking this context's mappings.
    pub fn registry(&self) -> &MappingRegistry<S> {
        &self.registry
    }

    /// The provider creating this context's files.
    pub fn provider(&self) -> &dyn AnonymousFileProvider {
        self.provider.as_ref()
    }

    /// See [`MappingRegistry::map`].
    ///
    /// # Safety
    /// Same contract as [`MappingRegistry::map`]: with `MAP_FIXED`, nothing
    /// may still reference the replaced range.
    pub unsafe fn map(
        &self,
        address_hint: *mut u8,
        len: usize,
        prot: i32,
        flags: i32,
        fd: Option<RawFd>,
        offset: i64,
    ) -> Result<Mapping, MappingError> {
        unsafe { self.registry.map(address_hint, len, prot, flags, fd, offset) }
    }

    /// See [`MappingRegistry::unmap`].
    pub fn unmap(&self, mapping: &Mapping) -> Result<(), MappingError> {
        self.registry.unmap(mapping)
    }

    /// See [`AnonymousFileProvider::create`].
    pub fn create_anonymous_file(
        &self,
        name: &str,
        flags: u32,
    ) -> Result<AnonymousFile, AnonFileError> {
        self.provider.create(name, flags)
    }

    /// See [`AnonymousFileProvider::create_unnamed`].
    pub fn create_unnamed(&self) -> Result<AnonymousFile, AnonFileError> {
        self.provider.create_unnamed()
    }

    /// Clears `FD_CLOEXEC` through this context's gateway.
    ///
    /// On failure the descriptor is closed.
    pub fn remove_close_on_exec(&self, fd: OwnedFd) -> Result<OwnedFd, AnonFileError> {
        remove_close_on_exec_with(self.registry.syscalls(), fd)
    }

    /// Sizes `file` to `len` bytes and maps all of it shared.
    ///
    /// The mapping is registered like any other and must be released with
    /// [`unmap`](Self::unmap). It stays valid after `file` is closed.
    pub fn map_file(&self, file: &impl AsRawFd, len: usize, prot: i32) -> Result<Mapping, Error> {
        if len == 0 {
            return Err(MappingError::ZeroLength.into());
        }

        let fd = file.as_raw_fd();
        let size = i64::try_from(len).map_err(|_| Error::Resize(Errno::EINVAL))?;

        self.registry.syscalls().ftruncate(fd, size).map_err(Error::Resize)?;

        // Safety: no MAP_FIXED, the kernel picks a fresh range
        let mapping = unsafe {
            self.registry
                .map(core::ptr::null_mut(), len, prot, MAP_SHARED, Some(fd), 0)
        }?;

        debug!(fd, base = mapping.base(), len, "mapped anonymous file");

        Ok(mapping)
    }
}

impl<S: Syscalls> core::fmt::Debug for SharedMemory<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedMemory")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
