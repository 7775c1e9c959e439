// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errno::Errno;
use crate::libc_syscalls::LibcSyscalls;
use crate::traits::{RawFd, Syscall, Syscalls};

/// Configurable behavior of one syscall of [`MockSyscalls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSyscallsBehaviour {
    /// Normal operation (delegates to the real syscall).
    None,
    /// Always fail with the given errno.
    FailAlways(Errno),
    /// Fail on the Nth call (1-indexed: 1 = first call fails).
    FailAtNth(usize, Errno),
    /// Fail the first N calls, then delegate.
    FailFirst(usize, Errno),
}

#[derive(Debug, Default)]
struct MockState {
    behaviours: HashMap<Syscall, MockSyscallsBehaviour>,
    counts: HashMap<Syscall, usize>,
    opened: Vec<String>,
    unlinked: Vec<String>,
    closed: Vec<RawFd>,
}

/// Mock gateway for testing.
///
/// Wraps [`LibcSyscalls`] but allows simulating failures of any call via
/// [`MockSyscallsBehaviour`]. A failing call never reaches the kernel.
/// Clones share their state, so a test can keep one handle while the
/// component under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MockSyscalls {
    inner: LibcSyscalls,
    state: Arc<Mutex<MockState>>,
}

impl MockSyscalls {
    /// Creates a mock where every call delegates to `libc`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the behavior of `syscall` at runtime.
    pub fn change_behaviour(&self, syscall: Syscall, behaviour: MockSyscallsBehaviour) {
        self.state().behaviours.insert(syscall, behaviour);
    }

    /// Returns how many times `syscall` was invoked, failed calls included.
    pub fn call_count(&self, syscall: Syscall) -> usize {
        self.state().counts.get(&syscall).copied().unwrap_or(0)
    }

    /// Resets all call counters and recordings. Behaviours are kept.
    pub fn reset_count(&self) {
        let mut state = self.state();

        state.counts.clear();
        state.opened.clear();
        state.unlinked.clear();
        state.closed.clear();
    }

    /// Names successfully passed to `shm_open`, in call order.
    pub fn opened_names(&self) -> Vec<String> {
        self.state().opened.clone()
    }

    /// Names successfully passed to `shm_unlink`, in call order.
    pub fn unlinked_names(&self) -> Vec<String> {
        self.state().unlinked.clone()
    }

    /// Descriptors successfully closed, in call order.
    pub fn closed_fds(&self) -> Vec<RawFd> {
        self.state().closed.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn intercept(&self, syscall: Syscall) -> Result<(), Errno> {
        let mut state = self.state();

        let count = state.counts.entry(syscall).or_insert(0);
        *count += 1;
        let current = *count;

        let behaviour = state
            .behaviours
            .get(&syscall)
            .copied()
            .unwrap_or(MockSyscallsBehaviour::None);

        match behaviour {
            MockSyscallsBehaviour::None => Ok(()),
            MockSyscallsBehaviour::FailAlways(errno) => Err(errno),
            MockSyscallsBehaviour::FailAtNth(n, errno) if current == n => Err(errno),
            MockSyscallsBehaviour::FailAtNth(..) => Ok(()),
            MockSyscallsBehaviour::FailFirst(n, errno) if current <= n => Err(errno),
            MockSyscallsBehaviour::FailFirst(..) => Ok(()),
        }
    }
}

impl Syscalls for MockSyscalls {
    unsafe fn mmap(
        &self,
        addr: *mut u8,
        len: usize,
        prot: i32,
        flags: i32,
        fd: RawFd,
        offset: i64,
    ) -> Result<*mut u8, Errno> {
        self.intercept(Syscall::Mmap)?;
        unsafe { self.inner.mmap(addr, len, prot, flags, fd, offset) }
    }

    unsafe fn munmap(&self, addr: *mut u8, len: usize) -> Result<(), Errno> {
        self.intercept(Syscall::Munmap)?;
        unsafe { self.inner.munmap(addr, len) }
    }

    unsafe fn mprotect(&self, addr: *mut u8, len: usize, prot: i32) -> Result<(), Errno> {
        self.intercept(Syscall::Mprotect)?;
        unsafe { self.inner.mprotect(addr, len, prot) }
    }

    fn mlock(&self, addr: *const u8, len: usize) -> Result<(), Errno> {
        self.intercept(Syscall::Mlock)?;
        self.inner.mlock(addr, len)
    }

    fn munlock(&self, addr: *const u8, len: usize) -> Result<(), Errno> {
        self.intercept(Syscall::Munlock)?;
        self.inner.munlock(addr, len)
    }

    unsafe fn madvise(&self, addr: *mut u8, len: usize, advice: i32) -> Result<(), Errno> {
        self.intercept(Syscall::Madvise)?;
        unsafe { self.inner.madvise(addr, len, advice) }
    }

    fn msync(&self, addr: *mut u8, len: usize, flags: i32) -> Result<(), Errno> {
        self.intercept(Syscall::Msync)?;
        self.inner.msync(addr, len, flags)
    }

    fn shm_open(&self, name: &str, oflag: i32, mode: u32) -> Result<RawFd, Errno> {
        self.intercept(Syscall::ShmOpen)?;
        let fd = self.inner.shm_open(name, oflag, mode)?;
        self.state().opened.push(name.to_owned());

        Ok(fd)
    }

    fn shm_unlink(&self, name: &str) -> Result<(), Errno> {
        self.intercept(Syscall::ShmUnlink)?;
        self.inner.shm_unlink(name)?;
        self.state().unlinked.push(name.to_owned());

        Ok(())
    }

    fn memfd_create(&self, name: &str, flags: u32) -> Result<RawFd, Errno> {
        self.intercept(Syscall::MemfdCreate)?;
        self.inner.memfd_create(name, flags)
    }

    fn get_fd_flags(&self, fd: RawFd) -> Result<i32, Errno> {
        self.intercept(Syscall::GetFdFlags)?;
        self.inner.get_fd_flags(fd)
    }

    fn set_fd_flags(&self, fd: RawFd, flags: i32) -> Result<(), Errno> {
        self.intercept(Syscall::SetFdFlags)?;
        self.inner.set_fd_flags(fd, flags)
    }

    fn ftruncate(&self, fd: RawFd, len: i64) -> Result<(), Errno> {
        self.intercept(Syscall::Ftruncate)?;
        self.inner.ftruncate(fd, len)
    }

    fn close(&self, fd: RawFd) -> Result<(), Errno> {
        self.intercept(Syscall::Close)?;
        self.inner.close(fd)?;
        self.state().closed.push(fd);

        Ok(())
    }
}
