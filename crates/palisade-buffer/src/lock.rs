// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Advisory page-locking for buffer allocations.
//!
//! `mlock`/`munlock` on Unix, no-op elsewhere. Lock budgets are a per-process
//! OS resource (`RLIMIT_MEMLOCK`), so a failed lock is not fatal: it is
//! reported once per process and the buffer stays usable.

#[cfg(unix)]
use std::sync::Once;

#[cfg(unix)]
static LOCK_FAILURE_REPORTED: Once = Once::new();

/// Locks `len` bytes at `ptr` into RAM (prevents swapping to disk).
///
/// Best-effort: on failure a single warning is emitted for the whole process.
#[cfg(unix)]
pub(crate) fn lock_region(ptr: *const u8, len: usize) {
    if len == 0 {
        return;
    }

    let failed = unsafe { libc::mlock(ptr as *const libc::c_void, len) } != 0;

    if failed {
        LOCK_FAILURE_REPORTED.call_once(|| {
            tracing::warn!(
                "mlock failed; secret pages may be swappable (check RLIMIT_MEMLOCK)"
            );
        });
    }
}

/// Unlocks `len` bytes at `ptr` (allows swapping again). Called before free.
#[cfg(unix)]
pub(crate) fn unlock_region(ptr: *const u8, len: usize) {
    if len == 0 {
        return;
    }

    unsafe {
        libc::munlock(ptr as *const libc::c_void, len);
    }
}

#[cfg(not(unix))]
pub(crate) fn lock_region(_ptr: *const u8, _len: usize) {}

#[cfg(not(unix))]
pub(crate) fn unlock_region(_ptr: *const u8, _len: usize) {}
