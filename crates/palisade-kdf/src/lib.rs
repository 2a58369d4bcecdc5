// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade-kdf
//!
//! Memory-hard password-to-key derivation using Colin Percival's ROMix
//! construction over SHA-512.
//!
//! A lookup table is filled with a hash chain seeded by `H(password || salt)`,
//! then mixed by repeatedly XOR-ing the running state with pseudorandomly
//! indexed table entries and re-hashing. Forcing the table into working
//! memory is what frustrates GPU/ASIC parallelism: below roughly a megabyte
//! per thread, random global-memory lookups make a GPU no better than a CPU.
//!
//! Parameters can be self-tuned against a wall-clock target
//! ([`KdfRomix::calibrated`]) or reconstructed from a stored wallet header
//! ([`KdfRomix::with_params`]).
//!
//! # Example
//!
//! ```rust
//! use palisade_buffer::SecureBuffer;
//! use palisade_kdf::KdfRomix;
//!
//! let salt = SecureBuffer::new(32);
//! let mut kdf = KdfRomix::with_params(1024, 2, salt).expect("valid params");
//!
//! let password = SecureBuffer::from_bytes(b"TestPassword");
//! let key = kdf.derive(&password);
//! assert_eq!(key.len(), 32);
//! ```

#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod romix;

pub use error::KdfError;
pub use romix::{
    KdfRomix, DEFAULT_MAX_MEMORY_BYTES, DEFAULT_TARGET_SECONDS, HASH_OUTPUT_BYTES,
    KDF_OUTPUT_BYTES, SALT_LENGTH,
};
