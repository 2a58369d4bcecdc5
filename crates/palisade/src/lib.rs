// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # Palisade
//!
//! Wallet-security crypto core: a page-locked zeroizing secret buffer, a
//! memory-hard ROMix key-derivation function with self-tuning parameters,
//! AES-CFB encryption of wallet material, and secp256k1 ECDSA.
//!
//! Everything synchronous and blocking; every secret crosses module
//! boundaries as a [`buffer::SecureBuffer`].
//!
//! # Quick Start
//!
//! ```rust
//! use palisade::buffer::SecureBuffer;
//! use palisade::cipher;
//! use palisade::ecdsa::{self, PrivateKey};
//! use palisade::kdf::KdfRomix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Derive an encryption key from a password
//! let mut kdf = KdfRomix::with_params(16 * 1024, 2, SecureBuffer::generate_random(32)?)?;
//! let password = SecureBuffer::from_bytes(b"correct horse battery staple");
//! let aes_key = kdf.derive(&password);
//!
//! // Encrypt a signing key under it
//! let signing_key = PrivateKey::generate()?;
//! let iv = SecureBuffer::generate_random(16)?;
//! let sealed = cipher::encrypt(&signing_key.to_bytes(), &aes_key, &iv)?;
//!
//! // Decrypt and sign
//! let opened = cipher::decrypt(&sealed, &aes_key, &iv)?;
//! let restored = PrivateKey::from_bytes(opened.as_slice())?;
//! let signature = ecdsa::sign(b"spend 1 coin", &restored);
//!
//! assert!(ecdsa::verify(b"spend 1 coin", &signature, &restored.public_key()));
//! # Ok(())
//! # }
//! ```

pub use palisade_buffer as buffer;
pub use palisade_cipher as cipher;
pub use palisade_ecdsa as ecdsa;
pub use palisade_kdf as kdf;
pub use palisade_rand as rand;
