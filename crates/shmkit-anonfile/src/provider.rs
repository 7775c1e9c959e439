// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::AnonFileError;
use crate::file::AnonymousFile;

/// Logical name used by [`AnonymousFileProvider::create_unnamed`].
pub const UNNAMED: &str = "shm_anon";

/// Creates anonymous shared-memory files.
pub trait AnonymousFileProvider: Send + Sync {
    /// Creates an anonymous file.
    ///
    /// `flags` takes the `MFD_*` bits. `name` must be non-empty and at most
    /// [`MFD_NAME_MAX_LEN`](crate::MFD_NAME_MAX_LEN) bytes.
    fn create(&self, name: &str, flags: u32) -> Result<AnonymousFile, AnonFileError>;

    /// Creates an inheritable anonymous file named [`UNNAMED`].
    fn create_unnamed(&self) -> Result<AnonymousFile, AnonFileError> {
        self.create(UNNAMED, 0)
    }
}

impl<P: AnonymousFileProvider + ?Sized> AnonymousFileProvider for Box<P> {
    fn create(&self, name: &str, flags: u32) -> Result<AnonymousFile, AnonFileError> {
        (**self).create(name, flags)
    }
}

/// The best provider for the target platform.
///
/// `memfd_create` on Linux and Android, the `shm_open` emulation elsewhere.
pub fn default_provider() -> Box<dyn AnonymousFileProvider> {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        Box::new(crate::NativeProvider::new())
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    {
        Box::new(crate::EmulatedProvider::new())
    }
}
