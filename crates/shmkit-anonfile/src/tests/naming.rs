// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashSet;

use shmkit_sys::consts::SHM_NAME_MAX;
use shmkit_sys::shm_name;

use crate::config::{DEFAULT_PREFIX, MAX_PREFIX_LEN};
use crate::naming::{GENERATED_LEN, NameGenerator, fnv1a};

#[test]
fn test_fnv1a_reference_values() {
    assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    assert_eq!(fnv1a(b"foobar"), 0x8594_4171_f739_67e8);
}

#[test]
fn test_candidate_layout() {
    let mut names = NameGenerator::new("memfd:");
    let candidate = names.candidate("shm_anon");

    assert_eq!(candidate.len(), 30);
    assert!(candidate.starts_with("memfd:00000000"));
    assert!(candidate[6..].bytes().all(|b| b.is_ascii_hexdigit()));
}

#[test]
fn test_default_candidate_fits_shm_open_limit() {
    let mut names = NameGenerator::new(DEFAULT_PREFIX);

    for name in ["", "x", "a-much-longer-logical-name-than-any-prefix"] {
        let candidate = names.candidate(name);
        let passed = shm_name(&candidate).expect("Failed to shm_name(..)");

        assert!(passed.to_bytes().len() <= SHM_NAME_MAX);
    }
}

#[test]
fn test_longest_prefix_fits_shm_open_limit() {
    let prefix = "p".repeat(MAX_PREFIX_LEN);
    let mut names = NameGenerator::new(&prefix);
    let passed = shm_name(&names.candidate("x")).expect("Failed to shm_name(..)");

    assert_eq!(passed.to_bytes().len(), SHM_NAME_MAX);
    assert_eq!(prefix.len() + GENERATED_LEN + 1, SHM_NAME_MAX);
}

#[test]
fn test_serial_advances() {
    let mut names = NameGenerator::new("p-");

    assert!(names.candidate("x").starts_with("p-00000000"));
    assert!(names.candidate("x").starts_with("p-00000001"));
    assert!(names.candidate("x").starts_with("p-00000002"));
}

#[test]
fn test_candidates_are_distinct_for_same_name() {
    let mut names = NameGenerator::new("memfd:");
    let candidates: HashSet<String> = (0..1000).map(|_| names.candidate("same")).collect();

    assert_eq!(candidates.len(), 1000);
}
