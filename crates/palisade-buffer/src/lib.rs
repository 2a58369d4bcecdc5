// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade-buffer
//!
//! `SecureBuffer` is the substrate every secret in the Palisade stack lives
//! in: a heap byte container whose backing storage is page-locked while
//! allocated and overwritten with zeros before any release.
//!
//! # Guarantees
//!
//! - **Locked while live**: the full capacity is `mlock`ed so secret pages
//!   are not swapped to disk. Locking is advisory; a failed lock is logged
//!   once per process and the buffer keeps working.
//! - **Zeroized on release**: drop, `clear()`, shrinking, and every
//!   reallocation path overwrite the abandoned storage before freeing it.
//! - **No implicit copies**: `Clone` is the only way to duplicate contents,
//!   and it produces an independent locked, zeroizing buffer.
//!
//! # Example
//!
//! ```rust
//! use palisade_buffer::SecureBuffer;
//!
//! let mut passphrase = SecureBuffer::from_bytes(b"correct horse battery staple");
//! passphrase.append(b" x");
//! assert_eq!(passphrase.len(), 30);
//! // contents are wiped and pages unlocked when `passphrase` drops
//! ```

#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod buffer;
mod error;
mod lock;

pub use buffer::SecureBuffer;
pub use error::BufferError;
