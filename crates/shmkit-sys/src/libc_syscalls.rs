// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `libc`-backed gateway.

use std::ffi::CString;

use crate::consts::NAME_MAX;
use crate::errno::Errno;
use crate::traits::{RawFd, Syscalls};

/// Production [`Syscalls`] implementation calling straight into `libc`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LibcSyscalls;

/// Normalizes a shared-memory object name.
///
/// Leading slashes are stripped. The remainder must be non-empty, shorter
/// than [`NAME_MAX`] bytes and free of `/` and NUL. The result is the
/// portable `/<name>` form expected by `shm_open(3)`.
pub fn shm_name(name: &str) -> Result<CString, Errno> {
    let name = name.trim_start_matches('/');

    if name.is_empty() || name.len() >= NAME_MAX || name.contains('/') {
        return Err(Errno::EINVAL);
    }

    CString::new(format!("/{name}")).map_err(|_| Errno::EINVAL)
}

/// Returns the system page size.
pub fn page_size() -> usize {
    unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize }
}

fn check(ret: libc::c_int) -> Result<(), Errno> {
    if ret == -1 {
        return Err(Errno::last());
    }

    Ok(())
}

fn check_fd(ret: libc::c_int) -> Result<RawFd, Errno> {
    if ret == -1 {
        return Err(Errno::last());
    }

    Ok(ret)
}

impl Syscalls for LibcSyscalls {
    unsafe fn mmap(
        &self,
        addr: *mut u8,
        len: usize,
        prot: i32,
        flags: i32,
        fd: RawFd,
        offset: i64,
    ) -> Result<*mut u8, Errno> {
        let ptr = unsafe {
            libc::mmap(
                addr as *mut libc::c_void,
                len,
                prot,
                flags,
                fd,
                offset as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(Errno::last());
        }

        Ok(ptr as *mut u8)
    }

    unsafe fn munmap(&self, addr: *mut u8, len: usize) -> Result<(), Errno> {
        check(unsafe { libc::munmap(addr as *mut libc::c_void, len) })
    }

    unsafe fn mprotect(&self, addr: *mut u8, len: usize, prot: i32) -> Result<(), Errno> {
        check(unsafe { libc::mprotect(addr as *mut libc::c_void, len, prot) })
    }

    fn mlock(&self, addr: *const u8, len: usize) -> Result<(), Errno> {
        check(unsafe { libc::mlock(addr as *const libc::c_void, len) })
    }

    fn munlock(&self, addr: *const u8, len: usize) -> Result<(), Errno> {
        check(unsafe { libc::munlock(addr as *const libc::c_void, len) })
    }

    unsafe fn madvise(&self, addr: *mut u8, len: usize, advice: i32) -> Result<(), Errno> {
        check(unsafe { libc::madvise(addr as *mut libc::c_void, len, advice) })
    }

    fn msync(&self, addr: *mut u8, len: usize, flags: i32) -> Result<(), Errno> {
        check(unsafe { libc::msync(addr as *mut libc::c_void, len, flags) })
    }

    fn shm_open(&self, name: &str, oflag: i32, mode: u32) -> Result<RawFd, Errno> {
        let name = shm_name(name)?;

        // shm_open is variadic on Apple platforms, so the mode travels as c_uint.
        check_fd(unsafe { libc::shm_open(name.as_ptr(), oflag, mode as libc::c_uint) })
    }

    fn shm_unlink(&self, name: &str) -> Result<(), Errno> {
        let name = shm_name(name)?;

        check(unsafe { libc::shm_unlink(name.as_ptr()) })
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn memfd_create(&self, name: &str, flags: u32) -> Result<RawFd, Errno> {
        let name = CString::new(name).map_err(|_| Errno::EINVAL)?;

        check_fd(unsafe { libc::memfd_create(name.as_ptr(), flags as libc::c_uint) })
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    fn memfd_create(&self, _name: &str, _flags: u32) -> Result<RawFd, Errno> {
        Err(Errno::ENOSYS)
    }

    fn get_fd_flags(&self, fd: RawFd) -> Result<i32, Errno> {
        check_fd(unsafe { libc::fcntl(fd, libc::F_GETFD) })
    }

    fn set_fd_flags(&self, fd: RawFd, flags: i32) -> Result<(), Errno> {
        check(unsafe { libc::fcntl(fd, libc::F_SETFD, flags) })
    }

    fn ftruncate(&self, fd: RawFd, len: i64) -> Result<(), Errno> {
        check(unsafe { libc::ftruncate(fd, len as libc::off_t) })
    }

    fn close(&self, fd: RawFd) -> Result<(), Errno> {
        check(unsafe { libc::close(fd) })
    }
}
