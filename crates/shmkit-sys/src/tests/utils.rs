// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for shmkit-sys.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_NAME: AtomicUsize = AtomicUsize::new(0);

/// Returns a shared-memory object name no other test (or test run) uses.
pub fn unique_shm_name(tag: &str) -> String {
    let n = NEXT_NAME.fetch_add(1, Ordering::Relaxed);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);

    format!("sk-{tag}-{}-{n}-{nanos:x}", std::process::id())
}
