// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! End-to-end behaviour of the public operations.

use std::collections::HashSet;
use std::os::fd::{AsRawFd, RawFd};
use std::ptr::{self, NonNull};

use serial_test::serial;

use shmkit::anonfile::{AnonFileError, EmulatedProvider, EmulatorConfig, MFD_NAME_MAX_LEN};
use shmkit::mapping::{Mapping, MappingError, MappingRegistry};
use shmkit::sys::consts::{
    FD_CLOEXEC, MAP_ANONYMOUS, MAP_FIXED, MAP_PRIVATE, MFD_ALLOW_SEALING, MFD_CLOEXEC, O_RDWR,
    PROT_RDWR, PROT_WRITE, SHM_NAME_MAX,
};
use shmkit::sys::{Errno, ErrorKind, LibcSyscalls, Syscall, Syscalls, page_size, shm_name};
use shmkit::{Error, SharedMemory};
use shmkit_sys::test_utils::MockSyscalls;

struct NotOpen;

impl AsRawFd for NotOpen {
    fn as_raw_fd(&self) -> RawFd {
        -1
    }
}

fn emulated() -> SharedMemory {
    SharedMemory::with_provider(Box::new(EmulatedProvider::new()))
}

// =============================================================================
// Mappings
// =============================================================================

#[test]
fn test_map_then_double_unmap() {
    let shm = SharedMemory::new();

    let mapping = unsafe {
        shm.map(
            ptr::null_mut(),
            4096,
            PROT_WRITE,
            MAP_PRIVATE | MAP_ANONYMOUS,
            None,
            0,
        )
    }
    .expect("Failed to map(..)");

    assert_eq!(mapping.len(), 4096);
    assert_eq!(shm.registry().len(), 1);

    assert_eq!(shm.unmap(&mapping), Ok(()));

    let second = shm.unmap(&mapping);
    assert_eq!(second, Err(MappingError::UnknownRange));
    assert_eq!(second.map_err(|e| e.kind()), Err(ErrorKind::InvalidArgument));
}

#[test]
fn test_unmap_of_never_mapped_address() {
    let shm = SharedMemory::new();
    let bogus = Mapping::from_raw_parts(NonNull::dangling(), 4096);

    let result = shm.unmap(&bogus);

    assert_eq!(result.map_err(|e| e.errno()), Err(Errno::EINVAL));
}

#[test]
fn test_unmap_goes_to_kernel_once() {
    let mock = MockSyscalls::new();
    let registry = MappingRegistry::with_syscalls(mock.clone());
    let shm = SharedMemory::from_parts(registry, Box::new(EmulatedProvider::new()));

    let mapping = unsafe {
        shm.map(
            ptr::null_mut(),
            page_size(),
            PROT_RDWR,
            MAP_PRIVATE | MAP_ANONYMOUS,
            None,
            0,
        )
    }
    .expect("Failed to map(..)");

    shm.unmap(&mapping).expect("Failed to unmap(..)");
    let _ = shm.unmap(&mapping);
    let _ = shm.unmap(&mapping);

    assert_eq!(mock.call_count(Syscall::Mmap), 1);
    assert_eq!(mock.call_count(Syscall::Munmap), 1);
}

// =============================================================================
// Anonymous files
// =============================================================================

#[test]
fn test_same_name_twice() {
    let shm = emulated();

    let first = shm.create_anonymous_file("x", 0).expect("Failed to create_anonymous_file(..)");
    let second = shm.create_anonymous_file("x", 0).expect("Failed to create_anonymous_file(..)");

    assert_ne!(first.as_raw_fd(), second.as_raw_fd());
    assert_ne!(first.unique_name(), second.unique_name());
}

#[test]
fn test_unique_name_is_not_openable() {
    let shm = emulated();

    let file = shm.create_anonymous_file("hidden", 0).expect("Failed to create_anonymous_file(..)");
    let unique = file.unique_name().expect("emulated file has a unique name");

    assert_eq!(LibcSyscalls.shm_open(unique, O_RDWR, 0), Err(Errno::ENOENT));
    assert!(shm_name(unique).is_ok_and(|name| name.to_bytes().len() <= SHM_NAME_MAX));
}

#[test]
fn test_overlong_name_creates_nothing() {
    let mock = MockSyscalls::new();
    let provider = EmulatedProvider::with_syscalls(mock.clone(), EmulatorConfig::default());
    let shm = SharedMemory::with_provider(Box::new(provider));

    let result = shm.create_anonymous_file(&"n".repeat(300), 0).map(drop);

    assert_eq!(
        result,
        Err(AnonFileError::NameTooLong {
            len: 300,
            max: MFD_NAME_MAX_LEN
        })
    );
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::InvalidArgument));
    assert_eq!(mock.call_count(Syscall::ShmOpen), 0);
}

#[test]
fn test_empty_name_is_resource_fault() {
    let shm = SharedMemory::new();

    let result = shm.create_anonymous_file("", 0).map(drop);

    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::ResourceFault));
}

#[test]
#[serial(creators)]
fn test_fifty_concurrent_creators() {
    let shm = &emulated();

    let files = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..50)
            .map(|_| scope.spawn(move || shm.create_anonymous_file("demo", MFD_ALLOW_SEALING)))
            .collect();

        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .expect("creator panicked")
                    .expect("Failed to create_anonymous_file(..)")
            })
            .collect::<Vec<_>>()
    });

    let fds: HashSet<i32> = files.iter().map(|f| f.as_raw_fd()).collect();
    let names: HashSet<&str> = files.iter().filter_map(|f| f.unique_name()).collect();

    assert_eq!(fds.len(), 50);
    assert_eq!(names.len(), 50);
    assert!(files.iter().all(|f| f.allows_sealing()));
}

// =============================================================================
// Files and mappings together
// =============================================================================

#[test]
fn test_two_views_of_one_file_share_bytes() {
    let shm = SharedMemory::new();
    let len = page_size();

    let file = shm
        .create_anonymous_file("views", MFD_CLOEXEC)
        .expect("Failed to create_anonymous_file(..)");

    let mut writer = shm.map_file(&file, len, PROT_RDWR).expect("Failed to map_file(..)");
    let reader = shm.map_file(&file, len, PROT_RDWR).expect("Failed to map_file(..)");
    assert_ne!(writer.base(), reader.base());

    // Closing the descriptor does not affect the mappings.
    drop(file);

    unsafe {
        writer.as_mut_slice()[..5].copy_from_slice(b"hello");
        assert_eq!(&reader.as_slice()[..5], b"hello");
    }

    shm.unmap(&writer).expect("Failed to unmap(..)");
    shm.unmap(&reader).expect("Failed to unmap(..)");
    assert!(shm.registry().is_empty());
}

#[test]
fn test_map_file_zero_length() {
    let shm = SharedMemory::new();
    let file = shm.create_unnamed().expect("Failed to create_unnamed()");

    let result = shm.map_file(&file, 0, PROT_RDWR).map(drop);

    assert_eq!(result, Err(Error::Mapping(MappingError::ZeroLength)));
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::InvalidArgument));
}

#[test]
fn test_map_file_on_closed_descriptor() {
    let shm = SharedMemory::new();

    let result = shm.map_file(&NotOpen, page_size(), PROT_RDWR).map(drop);

    assert_eq!(result, Err(Error::Resize(Errno(libc::EBADF))));
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Syscall));
    assert!(shm.registry().is_empty());
}

#[test]
fn test_kernel_einval_is_a_syscall_failure() {
    let kernel = Error::Mapping(MappingError::Map(Errno::EINVAL));
    let rejected = Error::Mapping(MappingError::ZeroLength);

    assert_eq!(kernel.errno(), rejected.errno());
    assert_eq!(kernel.kind(), ErrorKind::Syscall);
    assert_eq!(rejected.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        Error::AnonFile(AnonFileError::Create(Errno::EFAULT)).kind(),
        ErrorKind::Syscall
    );
}

#[test]
fn test_map_fixed_cannot_orphan_outer_pages() {
    let shm = SharedMemory::new();
    let page = page_size();

    let wide = unsafe {
        shm.map(
            ptr::null_mut(),
            3 * page,
            PROT_RDWR,
            MAP_PRIVATE | MAP_ANONYMOUS,
            None,
            0,
        )
    }
    .expect("Failed to map(..)");

    let result = unsafe {
        shm.map(
            wide.as_ptr().add(page),
            page,
            PROT_RDWR,
            MAP_PRIVATE | MAP_ANONYMOUS | MAP_FIXED,
            None,
            0,
        )
    }
    .map(drop);

    assert_eq!(result, Err(MappingError::PartialOverlap));
    assert_eq!(shm.unmap(&wide), Ok(()));
    assert!(shm.registry().is_empty());
}

#[test]
fn test_remove_close_on_exec_through_context() {
    let shm = SharedMemory::new();
    let file = shm
        .create_anonymous_file("cloexec", MFD_CLOEXEC)
        .expect("Failed to create_anonymous_file(..)");

    let fd = shm
        .remove_close_on_exec(file.into_owned_fd())
        .expect("Failed to remove_close_on_exec(..)");

    let flags = LibcSyscalls.get_fd_flags(fd.as_raw_fd()).expect("Failed to get_fd_flags(..)");
    assert_eq!(flags & FD_CLOEXEC, 0);
}
