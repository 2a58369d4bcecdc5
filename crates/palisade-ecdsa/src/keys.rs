// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Private and public key types over secp256k1.

use core::fmt;

use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::{EncodedPoint, FieldBytes};
use zeroize::Zeroizing;

use palisade_buffer::SecureBuffer;
use palisade_rand::{EntropySource, SystemEntropySource};

use crate::error::EcdsaError;

/// Private-key scalar width in bytes (big-endian).
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// SEC1 uncompressed public-key width in bytes (`0x04 || X || Y`).
pub const PUBLIC_KEY_LENGTH: usize = 65;

/// SEC1 tag byte for uncompressed points.
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// A secp256k1 private-key scalar in `[1, n-1]`.
#[derive(Clone)]
pub struct PrivateKey(pub(crate) SigningKey);

impl PrivateKey {
    /// Generates a key from the platform entropy source.
    ///
    /// Candidate scalars are rejection-sampled until one lands in
    /// `[1, n-1]`; a rejection is a ~2^-128 event, so the loop effectively
    /// runs once.
    ///
    /// # Errors
    ///
    /// Returns [`EcdsaError::Entropy`] if no entropy can be obtained.
    pub fn generate() -> Result<Self, EcdsaError> {
        Self::generate_with(&SystemEntropySource {})
    }

    /// Generates a key from the given entropy source.
    pub fn generate_with(entropy: &dyn EntropySource) -> Result<Self, EcdsaError> {
        loop {
            let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
            entropy.fill_bytes(&mut candidate[..])?;

            if let Ok(key) = SigningKey::from_slice(&candidate[..]) {
                return Ok(Self(key));
            }
        }
    }

    /// Parses a 32-byte big-endian scalar.
    ///
    /// # Errors
    ///
    /// [`EcdsaError::BadKeyFormat`] when the length is not 32,
    /// [`EcdsaError::OutOfRange`] when the scalar is zero or not below the
    /// curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(EcdsaError::BadKeyFormat);
        }

        SigningKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| EcdsaError::OutOfRange)
    }

    /// Serializes to a 32-byte big-endian scalar in a locked buffer.
    pub fn to_bytes(&self) -> SecureBuffer {
        let field_bytes = Zeroizing::new(self.0.to_bytes());

        SecureBuffer::from_bytes(field_bytes.as_slice())
    }

    /// Computes the public point `k * G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().clone())
    }

    /// Returns `true` iff `public_key` equals this key's public point,
    /// byte-for-byte in uncompressed encoding.
    pub fn matches(&self, public_key: &PublicKey) -> bool {
        self.public_key().to_uncompressed_bytes() == public_key.to_uncompressed_bytes()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}

/// A secp256k1 public point (never the identity).
#[derive(Clone)]
pub struct PublicKey(pub(crate) VerifyingKey);

impl PublicKey {
    /// Parses a 65-byte SEC1 uncompressed point.
    ///
    /// # Errors
    ///
    /// [`EcdsaError::BadKeyFormat`] on wrong length or tag byte,
    /// [`EcdsaError::IsIdentity`] when both coordinates are zero,
    /// [`EcdsaError::NotOnCurve`] when the coordinates miss the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() != PUBLIC_KEY_LENGTH {
            return Err(EcdsaError::BadKeyFormat);
        }

        let x = &bytes[1..33];
        let y = &bytes[33..65];

        // The identity has no affine coordinates; an all-zero encoding is
        // the conventional stand-in and is reported as such even when the
        // tag byte is also zero
        if is_zero(x) && is_zero(y) {
            return Err(EcdsaError::IsIdentity);
        }

        if bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(EcdsaError::BadKeyFormat);
        }

        Self::from_affine(x, y)
    }

    /// Parses a point from raw 32-byte X and Y coordinates (no tag byte).
    ///
    /// Same failure set as [`from_sec1_bytes`](Self::from_sec1_bytes).
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self, EcdsaError> {
        if x.len() != 32 || y.len() != 32 {
            return Err(EcdsaError::BadKeyFormat);
        }

        if is_zero(x) && is_zero(y) {
            return Err(EcdsaError::IsIdentity);
        }

        Self::from_affine(x, y)
    }

    /// Serializes to 65 bytes: `0x04 || X || Y`.
    pub fn to_uncompressed_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        let encoded = self.0.to_encoded_point(false);

        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes.copy_from_slice(encoded.as_bytes());

        bytes
    }

    fn from_affine(x: &[u8], y: &[u8]) -> Result<Self, EcdsaError> {
        let point = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(x),
            FieldBytes::from_slice(y),
            false,
        );

        VerifyingKey::from_encoded_point(&point)
            .map(Self)
            .map_err(|_| EcdsaError::NotOnCurve)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_uncompressed_bytes() == other.to_uncompressed_bytes()
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_uncompressed_bytes();
        write!(f, "PublicKey({}..)", hex::encode(&bytes[..9]))
    }
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}
