// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-CFB stream transforms over SecureBuffer.

use aes::{Aes128, Aes192, Aes256};
use cfb_mode::{Decryptor, Encryptor};
use cipher::{AsyncStreamCipher, KeyIvInit};

use palisade_buffer::SecureBuffer;

use crate::error::CipherError;

/// Accepted AES key lengths in bytes (AES-128, AES-192, AES-256).
pub const KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Required IV length in bytes (one AES block).
pub const IV_LENGTH: usize = 16;

/// Encrypts `plaintext` under `(key, iv)`.
///
/// The ciphertext has exactly the plaintext's length. Inputs are not
/// mutated; the result lands in a fresh locked buffer.
///
/// # Errors
///
/// [`CipherError::BadKeyLength`] unless the key is 16, 24, or 32 bytes,
/// [`CipherError::BadIvLength`] unless the IV is exactly 16 bytes.
pub fn encrypt(
    plaintext: &SecureBuffer,
    key: &SecureBuffer,
    iv: &SecureBuffer,
) -> Result<SecureBuffer, CipherError> {
    if iv.len() != IV_LENGTH {
        return Err(CipherError::BadIvLength(iv.len()));
    }

    let mut output = plaintext.clone();

    match key.len() {
        16 => Encryptor::<Aes128>::new_from_slices(key.as_slice(), iv.as_slice())
            .expect("Infallible: key and iv lengths are checked")
            .encrypt(output.as_mut_slice()),
        24 => Encryptor::<Aes192>::new_from_slices(key.as_slice(), iv.as_slice())
            .expect("Infallible: key and iv lengths are checked")
            .encrypt(output.as_mut_slice()),
        32 => Encryptor::<Aes256>::new_from_slices(key.as_slice(), iv.as_slice())
            .expect("Infallible: key and iv lengths are checked")
            .encrypt(output.as_mut_slice()),
        other => return Err(CipherError::BadKeyLength(other)),
    }

    Ok(output)
}

/// Decrypts `ciphertext` under `(key, iv)`: the exact inverse of
/// [`encrypt`] for the same key and IV.
///
/// # Errors
///
/// Same failure set as [`encrypt`].
pub fn decrypt(
    ciphertext: &SecureBuffer,
    key: &SecureBuffer,
    iv: &SecureBuffer,
) -> Result<SecureBuffer, CipherError> {
    if iv.len() != IV_LENGTH {
        return Err(CipherError::BadIvLength(iv.len()));
    }

    let mut output = ciphertext.clone();

    match key.len() {
        16 => Decryptor::<Aes128>::new_from_slices(key.as_slice(), iv.as_slice())
            .expect("Infallible: key and iv lengths are checked")
            .decrypt(output.as_mut_slice()),
        24 => Decryptor::<Aes192>::new_from_slices(key.as_slice(), iv.as_slice())
            .expect("Infallible: key and iv lengths are checked")
            .decrypt(output.as_mut_slice()),
        32 => Decryptor::<Aes256>::new_from_slices(key.as_slice(), iv.as_slice())
            .expect("Infallible: key and iv lengths are checked")
            .decrypt(output.as_mut_slice()),
        other => return Err(CipherError::BadKeyLength(other)),
    }

    Ok(output)
}
