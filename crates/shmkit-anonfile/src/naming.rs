// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Candidate object names.
//!
//! A candidate is `prefix`, 8 hex digits of a per-generator serial, then 16
//! hex digits of the FNV-1a hash of the logical name XORed with 64 fresh
//! random bits. With the default `memfd:` prefix that is 30 bytes, 31 once
//! `shm_open` gets its leading `/`, which is exactly what macOS allows.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hex digits a candidate adds after the prefix.
pub(crate) const GENERATED_LEN: usize = 8 + 16;

pub(crate) fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

fn entropy() -> u64 {
    let mut buf = [0u8; 8];

    match getrandom::fill(&mut buf) {
        Ok(()) => u64::from_ne_bytes(buf),
        Err(err) => {
            // Collisions are still caught by O_EXCL, only less rarely.
            warn!(%err, "getrandom failed, mixing in the clock instead");
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        }
    }
}

#[derive(Debug)]
pub(crate) struct NameGenerator {
    prefix: String,
    serial: u32,
}

impl NameGenerator {
    pub(crate) fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            serial: 0,
        }
    }

    /// Returns a fresh candidate for `name`. Never returns the same string twice
    /// until the serial wraps.
    pub(crate) fn candidate(&mut self, name: &str) -> String {
        let serial = self.serial;
        self.serial = self.serial.wrapping_add(1);

        let mixed = entropy() ^ fnv1a(name.as_bytes());

        format!("{}{:08x}{:016x}", self.prefix, serial, mixed)
    }
}
