// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EmulatedProvider - `memfd_create` on top of named POSIX shared memory.
//!
//! A file is an `shm_open` object created under a fresh unique name and
//! unlinked right away, so only the descriptor keeps it alive. Each step is
//! tracked by a [`StagedObject`] that unlinks and closes whatever was left
//! behind if a later step fails.

use std::collections::HashMap;
use std::os::fd::{FromRawFd, OwnedFd};
use std::sync::{Arc, Mutex};

use tracing::debug;

use shmkit_sys::consts::{
    MFD_ALLOW_SEALING, MFD_CLOEXEC, O_CREAT, O_EXCL, O_NOFOLLOW, O_RDWR, S_IRUSR, S_IWUSR,
};
use shmkit_sys::{Errno, LibcSyscalls, RawFd, Syscalls};

use crate::cloexec::set_close_on_exec;
use crate::config::EmulatorConfig;
use crate::error::AnonFileError;
use crate::file::{AnonymousFile, FileRecord, FileTable, lock_table};
use crate::naming::NameGenerator;
use crate::provider::AnonymousFileProvider;
use crate::staged::StagedObject;
use crate::validate::validate;

const OPEN_FLAGS: i32 = O_RDWR | O_CREAT | O_EXCL | O_NOFOLLOW;
const OPEN_MODE: u32 = S_IRUSR | S_IWUSR;

/// Provider that emulates `memfd_create` with `shm_open` and `shm_unlink`.
///
/// `MFD_ALLOW_SEALING` is recorded but not enforced and `MFD_HUGETLB` is
/// accepted and ignored: named shared memory supports neither.
pub struct EmulatedProvider<S: Syscalls = LibcSyscalls> {
    syscalls: S,
    config: EmulatorConfig,
    names: Mutex<NameGenerator>,
    files: FileTable,
}

impl EmulatedProvider<LibcSyscalls> {
    /// Creates a provider with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EmulatorConfig::default())
    }

    /// Creates a provider over the `libc` gateway.
    pub fn with_config(config: EmulatorConfig) -> Self {
        Self::with_syscalls(LibcSyscalls, config)
    }
}

impl Default for EmulatedProvider<LibcSyscalls> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Syscalls> EmulatedProvider<S> {
    /// Creates a provider over the given gateway.
    pub fn with_syscalls(syscalls: S, config: EmulatorConfig) -> Self {
        Self {
            names: Mutex::new(NameGenerator::new(config.prefix())),
            syscalls,
            config,
            files: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The gateway this provider calls into.
    pub fn syscalls(&self) -> &S {
        &self.syscalls
    }

    /// The configuration this provider was built with.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Record of a file created by this provider that is still open.
    pub fn lookup(&self, fd: RawFd) -> Option<FileRecord> {
        lock_table(&self.files).get(&fd).cloned()
    }

    /// Number of files created by this provider that are still open.
    pub fn open_files(&self) -> usize {
        lock_table(&self.files).len()
    }

    /// Opens a new object under a name nobody holds, retrying on `EEXIST`.
    fn create_exclusive(&self, name: &str) -> Result<StagedObject<'_, S>, AnonFileError> {
        // Held across the loop so two creators never race for one candidate.
        let mut names = self.names.lock().unwrap_or_else(|e| e.into_inner());

        for attempt in 1..=self.config.max_attempts() {
            let candidate = names.candidate(name);

            match self.syscalls.shm_open(&candidate, OPEN_FLAGS, OPEN_MODE) {
                Ok(fd) => return Ok(StagedObject::new(&self.syscalls, fd, candidate)),
                Err(Errno::EEXIST) => {
                    debug!(attempt, %candidate, "candidate name taken, retrying");
                }
                Err(errno) => return Err(AnonFileError::Create(errno)),
            }
        }

        Err(AnonFileError::NamesExhausted {
            attempts: self.config.max_attempts(),
        })
    }
}

impl<S: Syscalls> AnonymousFileProvider for EmulatedProvider<S> {
    fn create(&self, name: &str, flags: u32) -> Result<AnonymousFile, AnonFileError> {
        validate(name, flags)?;

        let mut staged = self.create_exclusive(name)?;
        staged.unlink().map_err(AnonFileError::Unlink)?;

        let close_on_exec = flags & MFD_CLOEXEC != 0;
        set_close_on_exec(&self.syscalls, staged.fd(), close_on_exec)
            .map_err(AnonFileError::CloseOnExec)?;

        let (raw, unique_name) = staged.commit();
        // Safety: the descriptor came from shm_open and the guard gave it up
        let fd = unsafe { OwnedFd::from_raw_fd(raw) };

        debug!(fd = raw, name, %unique_name, close_on_exec, "created emulated memfd");

        let record = FileRecord {
            name: name.to_owned(),
            unique_name: Some(unique_name),
            allows_sealing: flags & MFD_ALLOW_SEALING != 0,
            close_on_exec,
        };

        Ok(AnonymousFile::tracked(fd, record, Arc::clone(&self.files)))
    }
}

impl<S: Syscalls> core::fmt::Debug for EmulatedProvider<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EmulatedProvider")
            .field("config", &self.config)
            .field("open_files", &self.open_files())
            .finish_non_exhaustive()
    }
}
