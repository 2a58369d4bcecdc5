// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade-ecdsa
//!
//! ECDSA over secp256k1 with SHA-256 digests: key generation, parsing and
//! serialization, signing, verification, and key-pair consistency checks.
//!
//! Wire formats are fixed width and big-endian throughout: private keys are
//! 32-byte scalars, public keys are 65-byte SEC1 uncompressed points
//! (`0x04 || X || Y`), signatures are 64 bytes (`r || s`).
//!
//! Nonces are deterministic per RFC 6979, so signing never touches the
//! entropy source and a given (key, message) pair always yields the same
//! signature. Produced signatures are low-s normalized; verification
//! accepts either half.
//!
//! All types are immutable after construction and safe for concurrent use.
//!
//! # Example
//!
//! ```rust
//! use palisade_ecdsa::{sign, verify, PrivateKey};
//!
//! let key = PrivateKey::generate().expect("entropy available");
//! let signature = sign(b"hello", &key);
//!
//! assert!(verify(b"hello", &signature, &key.public_key()));
//! assert!(!verify(b"goodbye", &signature, &key.public_key()));
//! ```

#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod keys;
mod signature;

pub use error::EcdsaError;
pub use keys::{
    PrivateKey, PublicKey, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SEC1_UNCOMPRESSED_TAG,
};
pub use signature::{sign, verify, verify_sec1, Signature, SIGNATURE_LENGTH};
