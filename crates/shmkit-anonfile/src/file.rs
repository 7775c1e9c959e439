// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;
use std::fs::File;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, OwnedFd};
use std::sync::{Arc, Mutex, MutexGuard};

use shmkit_sys::RawFd;

/// What is known about one anonymous file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Name the caller asked for.
    pub name: String,
    /// Name the backing object had before it was unlinked. `None` for native
    /// files, which never had one.
    pub unique_name: Option<String>,
    /// `MFD_ALLOW_SEALING` was requested.
    pub allows_sealing: bool,
    /// The descriptor is closed on `exec`.
    pub close_on_exec: bool,
}

pub(crate) type FileTable = Arc<Mutex<HashMap<RawFd, FileRecord>>>;

pub(crate) fn lock_table(
    table: &Mutex<HashMap<RawFd, FileRecord>>,
) -> MutexGuard<'_, HashMap<RawFd, FileRecord>> {
    table.lock().unwrap_or_else(|e| e.into_inner())
}

/// Removes the provider's record when dropped.
struct TableEntry {
    table: FileTable,
    fd: RawFd,
}

impl Drop for TableEntry {
    fn drop(&mut self) {
        lock_table(&self.table).remove(&self.fd);
    }
}

/// An anonymous, unlinked shared-memory file.
///
/// Owns its descriptor; dropping the file closes it. Convert into an
/// [`OwnedFd`] or a [`File`] to keep the descriptor past the file's lifetime.
pub struct AnonymousFile {
    // Declared before `fd` so the record is gone before the number can be reused.
    entry: Option<TableEntry>,
    fd: OwnedFd,
    record: FileRecord,
}

impl AnonymousFile {
    pub(crate) fn untracked(fd: OwnedFd, record: FileRecord) -> Self {
        Self {
            entry: None,
            fd,
            record,
        }
    }

    /// Builds a file whose record lives in `table` until the file goes away.
    pub(crate) fn tracked(fd: OwnedFd, record: FileRecord, table: FileTable) -> Self {
        let raw = fd.as_raw_fd();
        lock_table(&table).insert(raw, record.clone());

        Self {
            entry: Some(TableEntry { table, fd: raw }),
            fd,
            record,
        }
    }

    /// Name the caller asked for.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Name of the backing object before it was unlinked, if it had one.
    pub fn unique_name(&self) -> Option<&str> {
        self.record.unique_name.as_deref()
    }

    /// `MFD_ALLOW_SEALING` was requested.
    pub fn allows_sealing(&self) -> bool {
        self.record.allows_sealing
    }

    /// The descriptor is closed on `exec`.
    pub fn close_on_exec(&self) -> bool {
        self.record.close_on_exec
    }

    /// The full bookkeeping record.
    pub fn record(&self) -> &FileRecord {
        &self.record
    }

    /// Returns a [`File`] sharing the same open file description.
    pub fn try_clone_file(&self) -> std::io::Result<File> {
        Ok(File::from(self.fd.try_clone()?))
    }

    /// Drops the bookkeeping record and returns the descriptor.
    pub fn into_owned_fd(self) -> OwnedFd {
        let Self { entry, fd, .. } = self;
        drop(entry);
        fd
    }
}

impl AsFd for AnonymousFile {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl AsRawFd for AnonymousFile {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

impl From<AnonymousFile> for OwnedFd {
    fn from(file: AnonymousFile) -> Self {
        file.into_owned_fd()
    }
}

impl From<AnonymousFile> for File {
    fn from(file: AnonymousFile) -> Self {
        File::from(file.into_owned_fd())
    }
}

impl core::fmt::Debug for AnonymousFile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnonymousFile")
            .field("fd", &self.fd.as_raw_fd())
            .field("record", &self.record)
            .field("tracked", &self.entry.is_some())
            .finish()
    }
}
