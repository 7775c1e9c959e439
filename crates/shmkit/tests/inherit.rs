// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Anonymous files passed to child processes.

#![cfg(target_os = "linux")]

use std::fs::File;
use std::io::Write;
use std::os::fd::AsRawFd;
use std::process::Command;

use shmkit::SharedMemory;
use shmkit::anonfile::{AnonymousFileProvider, EmulatedProvider, NativeProvider};

fn child_reads(fd: i32) -> Vec<u8> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(format!("cat /dev/fd/{fd}"))
        .output()
        .expect("Failed to spawn sh");

    assert!(output.status.success(), "child failed: {output:?}");
    output.stdout
}

fn assert_inherited(provider: Box<dyn AnonymousFileProvider>) {
    let shm = SharedMemory::with_provider(provider);
    let anon = shm.create_unnamed().expect("Failed to create_unnamed()");
    assert!(!anon.close_on_exec());

    let mut file = File::from(anon);
    file.write_all(b"inherited").expect("Failed to write_all(..)");

    assert_eq!(child_reads(file.as_raw_fd()), b"inherited");
}

#[test]
fn test_native_file_reaches_child() {
    assert_inherited(Box::new(NativeProvider::new()));
}

#[test]
fn test_emulated_file_reaches_child() {
    assert_inherited(Box::new(EmulatedProvider::new()));
}

#[test]
fn test_cleared_close_on_exec_reaches_child() {
    let shm = SharedMemory::new();
    let anon = shm
        .create_anonymous_file("late", shmkit::sys::consts::MFD_CLOEXEC)
        .expect("Failed to create_anonymous_file(..)");

    let fd = shm
        .remove_close_on_exec(anon.into_owned_fd())
        .expect("Failed to remove_close_on_exec(..)");

    let mut file = File::from(fd);
    file.write_all(b"late").expect("Failed to write_all(..)");

    assert_eq!(child_reads(file.as_raw_fd()), b"late");
}
