// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade-cipher
//!
//! AES encryption and decryption of wallet material in CFB mode (128-bit
//! feedback). CFB is a self-synchronizing stream construction: ciphertext
//! length equals plaintext length and no padding is involved, so encrypted
//! private-key blobs keep their exact size on disk.
//!
//! Keys of 16, 24, or 32 bytes select AES-128/-192/-256. The IV is caller
//! supplied, must be exactly 16 bytes, and must be unique per encryption
//! under the same key.
//!
//! # Example
//!
//! ```rust
//! use palisade_buffer::SecureBuffer;
//! use palisade_cipher::{decrypt, encrypt};
//!
//! let key = SecureBuffer::new(32);
//! let iv = SecureBuffer::new(16);
//! let secret = SecureBuffer::from_bytes(b"private key material");
//!
//! let sealed = encrypt(&secret, &key, &iv).expect("valid key and iv");
//! assert_eq!(sealed.len(), secret.len());
//!
//! let opened = decrypt(&sealed, &key, &iv).expect("valid key and iv");
//! assert_eq!(opened, secret);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod cfb;
mod error;

pub use cfb::{decrypt, encrypt, IV_LENGTH, KEY_LENGTHS};
pub use error::CipherError;
