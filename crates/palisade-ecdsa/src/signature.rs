// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Signing and verification with SHA-256 digests and RFC 6979 nonces.

use core::fmt;

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::signature::Signer;
use k256::ecdsa::Signature as BackendSignature;
use sha2::{Digest, Sha256};

use crate::error::EcdsaError;
use crate::keys::{PrivateKey, PublicKey};

/// Signature width in bytes: 32-byte big-endian `r` followed by `s`.
pub const SIGNATURE_LENGTH: usize = 64;

/// A secp256k1 ECDSA signature, fixed 64-byte `r || s` encoding.
#[derive(Clone)]
pub struct Signature(pub(crate) BackendSignature);

impl Signature {
    /// Parses a 64-byte `r || s` signature.
    ///
    /// # Errors
    ///
    /// [`EcdsaError::BadKeyFormat`] when the length is not 64,
    /// [`EcdsaError::OutOfRange`] when `r` or `s` is zero or not below the
    /// curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(EcdsaError::BadKeyFormat);
        }

        BackendSignature::from_slice(bytes)
            .map(Self)
            .map_err(|_| EcdsaError::OutOfRange)
    }

    /// Serializes to 64 bytes: `r || s`, each 32-byte big-endian.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0.to_bytes().into()
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Signature({}..)", hex::encode(&bytes[..8]))
    }
}

/// Signs `message` (unhashed; SHA-256 is applied internally).
///
/// The nonce is deterministic per RFC 6979, so signing cannot fail once the
/// key exists, and repeated calls yield the identical signature. The result
/// is normalized to the low half of the `s` range.
pub fn sign(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signature: BackendSignature = private_key.0.sign(message);

    Signature(signature.normalize_s().unwrap_or(signature))
}

/// Verifies `signature` over `message` (unhashed; SHA-256 is applied
/// internally). High-s signatures are accepted.
pub fn verify(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let digest = Sha256::digest(message);

    public_key.0.verify_prehash(&digest, &signature.0).is_ok()
}

/// Verifies from raw encodings: 64-byte `r || s` and 65-byte SEC1
/// uncompressed public key.
///
/// Any parse failure verifies as `false`; this entry point never errors.
pub fn verify_sec1(message: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
    let Ok(signature) = Signature::from_bytes(signature) else {
        return false;
    };

    let Ok(public_key) = PublicKey::from_sec1_bytes(public_key) else {
        return false;
    };

    verify(message, &signature, &public_key)
}
