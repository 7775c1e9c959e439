// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for the syscall gateway.

mod mock_syscalls;

pub use mock_syscalls::{MockSyscalls, MockSyscallsBehaviour};
