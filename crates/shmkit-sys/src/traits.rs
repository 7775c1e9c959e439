// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::errno::Errno;

/// Raw file descriptor.
pub type RawFd = std::os::fd::RawFd;

/// Identifies one gateway call. Used for failure injection and call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syscall {
    /// `mmap(2)`
    Mmap,
    /// `munmap(2)`
    Munmap,
    /// `mprotect(2)`
    Mprotect,
    /// `mlock(2)`
    Mlock,
    /// `munlock(2)`
    Munlock,
    /// `madvise(2)`
    Madvise,
    /// `msync(2)`
    Msync,
    /// `shm_open(3)`
    ShmOpen,
    /// `shm_unlink(3)`
    ShmUnlink,
    /// `memfd_create(2)`
    MemfdCreate,
    /// `fcntl(F_GETFD)`
    GetFdFlags,
    /// `fcntl(F_SETFD)`
    SetFdFlags,
    /// `ftruncate(2)`
    Ftruncate,
    /// `close(2)`
    Close,
}

/// The operating-system calls used by the mapping registry and the
/// anonymous-file providers.
///
/// Every method returns the raw [`Errno`] on failure and never retries.
/// Calls that can invalidate memory the caller still references are `unsafe`.
pub trait Syscalls: Send + Sync {
    /// Creates a mapping. Returns its base address.
    ///
    /// # Safety
    ///
    /// With `MAP_FIXED` any existing mapping at `addr` is silently replaced;
    /// the caller must not hold references into that range.
    unsafe fn mmap(
        &self,
        addr: *mut u8,
        len: usize,
        prot: i32,
        flags: i32,
        fd: RawFd,
        offset: i64,
    ) -> Result<*mut u8, Errno>;

    /// Removes a mapping.
    ///
    /// # Safety
    ///
    /// Nothing may reference `[addr, addr + len)` after a successful call.
    unsafe fn munmap(&self, addr: *mut u8, len: usize) -> Result<(), Errno>;

    /// Changes the protection of a range.
    ///
    /// # Safety
    ///
    /// Existing references into the range must not be used in a way the new
    /// protection forbids.
    unsafe fn mprotect(&self, addr: *mut u8, len: usize, prot: i32) -> Result<(), Errno>;

    /// Locks a range into RAM.
    fn mlock(&self, addr: *const u8, len: usize) -> Result<(), Errno>;

    /// Unlocks a range.
    fn munlock(&self, addr: *const u8, len: usize) -> Result<(), Errno>;

    /// Gives the kernel usage advice for a range.
    ///
    /// # Safety
    ///
    /// Some advice values (`MADV_DONTNEED` on private mappings) discard the
    /// contents of the range.
    unsafe fn madvise(&self, addr: *mut u8, len: usize, advice: i32) -> Result<(), Errno>;

    /// Flushes a shared mapping to its backing object.
    fn msync(&self, addr: *mut u8, len: usize, flags: i32) -> Result<(), Errno>;

    /// Opens a named shared-memory object.
    fn shm_open(&self, name: &str, oflag: i32, mode: u32) -> Result<RawFd, Errno>;

    /// Removes the name of a shared-memory object.
    fn shm_unlink(&self, name: &str) -> Result<(), Errno>;

    /// Creates a native anonymous memory file.
    fn memfd_create(&self, name: &str, flags: u32) -> Result<RawFd, Errno>;

    /// Reads the descriptor flags (`FD_CLOEXEC`).
    fn get_fd_flags(&self, fd: RawFd) -> Result<i32, Errno>;

    /// Writes the descriptor flags.
    fn set_fd_flags(&self, fd: RawFd, flags: i32) -> Result<(), Errno>;

    /// Sets the size of the object behind `fd`.
    fn ftruncate(&self, fd: RawFd, len: i64) -> Result<(), Errno>;

    /// Closes a descriptor.
    fn close(&self, fd: RawFd) -> Result<(), Errno>;
}
