// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-ecdsa.
//!
//! Parse and range failures are distinct kinds so callers can tell corrupted
//! user input apart from internal inconsistency. [`verify`](crate::verify)
//! never surfaces these: a malformed signature or key verifies as `false`.

use thiserror::Error;

use palisade_rand::EntropyError;

/// Error type for key and signature handling.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum EcdsaError {
    /// Structural problem: wrong length or wrong SEC1 tag byte.
    #[error("BadKeyFormat: malformed key or signature encoding")]
    BadKeyFormat,

    /// Point coordinates do not satisfy the curve equation.
    #[error("NotOnCurve: point does not satisfy the secp256k1 equation")]
    NotOnCurve,

    /// The encoded point is the identity element.
    #[error("IsIdentity: point is the identity element")]
    IsIdentity,

    /// Scalar is zero or not below the curve order.
    #[error("OutOfRange: scalar is not in [1, n-1]")]
    OutOfRange,

    /// The platform entropy source failed during key generation.
    #[error("{0}")]
    Entropy(#[from] EntropyError),
}
