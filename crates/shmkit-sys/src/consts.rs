// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Flag constants used across the workspace.
//!
//! The `MFD_*` values follow the Linux ABI and are defined here so that the
//! emulated provider can validate them on platforms whose `libc` lacks them.

/// Maximum length of a single path component.
pub const NAME_MAX: usize = 255;

/// Longest shared-memory object name, leading `/` included, that every
/// supported system accepts. macOS caps names at `PSHMNAMLEN` (31) bytes.
pub const SHM_NAME_MAX: usize = 31;

// memfd_create(2) flags

/// Set close-on-exec on the new descriptor.
pub const MFD_CLOEXEC: u32 = 0x0001;
/// Allow sealing operations on the new file.
pub const MFD_ALLOW_SEALING: u32 = 0x0002;
/// Back the file with huge pages.
pub const MFD_HUGETLB: u32 = 0x0004;
/// Every flag bit the anonymous-file providers accept.
pub const MFD_ALL_FLAGS: u32 = MFD_CLOEXEC | MFD_ALLOW_SEALING | MFD_HUGETLB;

/// Shift of the huge page size field.
pub const MFD_HUGE_SHIFT: u32 = 26;
/// Mask of the huge page size field (after shifting).
pub const MFD_HUGE_MASK: u32 = 0x3f;

/// 64 KiB huge pages.
pub const MFD_HUGE_64KB: u32 = 16 << MFD_HUGE_SHIFT;
/// 512 KiB huge pages.
pub const MFD_HUGE_512KB: u32 = 19 << MFD_HUGE_SHIFT;
/// 1 MiB huge pages.
pub const MFD_HUGE_1MB: u32 = 20 << MFD_HUGE_SHIFT;
/// 2 MiB huge pages.
pub const MFD_HUGE_2MB: u32 = 21 << MFD_HUGE_SHIFT;
/// 8 MiB huge pages.
pub const MFD_HUGE_8MB: u32 = 23 << MFD_HUGE_SHIFT;
/// 16 MiB huge pages.
pub const MFD_HUGE_16MB: u32 = 24 << MFD_HUGE_SHIFT;
/// 32 MiB huge pages.
pub const MFD_HUGE_32MB: u32 = 25 << MFD_HUGE_SHIFT;
/// 256 MiB huge pages.
pub const MFD_HUGE_256MB: u32 = 28 << MFD_HUGE_SHIFT;
/// 512 MiB huge pages.
pub const MFD_HUGE_512MB: u32 = 29 << MFD_HUGE_SHIFT;
/// 1 GiB huge pages.
pub const MFD_HUGE_1GB: u32 = 30 << MFD_HUGE_SHIFT;
/// 2 GiB huge pages.
pub const MFD_HUGE_2GB: u32 = 31 << MFD_HUGE_SHIFT;
/// 16 GiB huge pages.
pub const MFD_HUGE_16GB: u32 = 34 << MFD_HUGE_SHIFT;

// mmap(2) / mprotect(2)

/// Pages may not be accessed.
pub const PROT_NONE: i32 = libc::PROT_NONE;
/// Pages may be read.
pub const PROT_READ: i32 = libc::PROT_READ;
/// Pages may be written.
pub const PROT_WRITE: i32 = libc::PROT_WRITE;
/// Pages may be executed.
pub const PROT_EXEC: i32 = libc::PROT_EXEC;
/// Read and write.
pub const PROT_RDWR: i32 = PROT_READ | PROT_WRITE;

/// Share changes with other mappings of the same object.
pub const MAP_SHARED: i32 = libc::MAP_SHARED;
/// Private copy-on-write mapping.
pub const MAP_PRIVATE: i32 = libc::MAP_PRIVATE;
/// Not backed by any file.
pub const MAP_ANONYMOUS: i32 = libc::MAP_ANON;
/// Place the mapping exactly at the hinted address.
pub const MAP_FIXED: i32 = libc::MAP_FIXED;
/// Do not reserve swap space.
pub const MAP_NORESERVE: i32 = libc::MAP_NORESERVE;

// msync(2)

/// Schedule the write-back and return.
pub const MS_ASYNC: i32 = libc::MS_ASYNC;
/// Write back and wait.
pub const MS_SYNC: i32 = libc::MS_SYNC;
/// Invalidate other mappings of the same file.
pub const MS_INVALIDATE: i32 = libc::MS_INVALIDATE;

// madvise(2)

/// No special treatment.
pub const MADV_NORMAL: i32 = libc::MADV_NORMAL;
/// Expect random page references.
pub const MADV_RANDOM: i32 = libc::MADV_RANDOM;
/// Expect sequential page references.
pub const MADV_SEQUENTIAL: i32 = libc::MADV_SEQUENTIAL;
/// Expect access in the near future.
pub const MADV_WILLNEED: i32 = libc::MADV_WILLNEED;
/// Do not expect access in the near future.
pub const MADV_DONTNEED: i32 = libc::MADV_DONTNEED;

// open(2) / fcntl(2)

/// Open for reading only.
pub const O_RDONLY: i32 = libc::O_RDONLY;
/// Open for reading and writing.
pub const O_RDWR: i32 = libc::O_RDWR;
/// Create if it does not exist.
pub const O_CREAT: i32 = libc::O_CREAT;
/// Fail if it already exists.
pub const O_EXCL: i32 = libc::O_EXCL;
/// Do not follow a trailing symbolic link.
pub const O_NOFOLLOW: i32 = libc::O_NOFOLLOW;
/// Close on exec.
pub const O_CLOEXEC: i32 = libc::O_CLOEXEC;

/// Descriptor flag: close on exec.
pub const FD_CLOEXEC: i32 = libc::FD_CLOEXEC;

/// Owner may read.
pub const S_IRUSR: u32 = libc::S_IRUSR as u32;
/// Owner may write.
pub const S_IWUSR: u32 = libc::S_IWUSR as u32;
