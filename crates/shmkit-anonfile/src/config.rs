// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shmkit_sys::consts::SHM_NAME_MAX;

use crate::error::AnonFileError;
use crate::naming::GENERATED_LEN;

/// Prefix of every generated object name.
pub const DEFAULT_PREFIX: &str = "memfd:";

/// Longest prefix that keeps `/<prefix><generated>` within
/// [`SHM_NAME_MAX`](shmkit_sys::consts::SHM_NAME_MAX).
pub const MAX_PREFIX_LEN: usize = SHM_NAME_MAX - 1 - GENERATED_LEN;

/// Default bound on exclusive-create attempts per file.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Settings of an [`EmulatedProvider`](crate::EmulatedProvider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    prefix: String,
    max_attempts: usize,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl EmulatorConfig {
    /// Sets the name prefix.
    ///
    /// Fails with [`AnonFileError::InvalidPrefix`] if the prefix contains `/`
    /// or NUL, or is longer than [`MAX_PREFIX_LEN`] bytes.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Result<Self, AnonFileError> {
        let prefix = prefix.into();

        if prefix.len() > MAX_PREFIX_LEN || prefix.contains(['/', '\0']) {
            return Err(AnonFileError::InvalidPrefix(prefix));
        }

        self.prefix = prefix;
        Ok(self)
    }

    /// Sets the attempt bound. Zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Prepended to every generated name.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// How many colliding names are tolerated before giving up.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}
