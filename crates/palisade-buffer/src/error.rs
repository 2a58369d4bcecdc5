// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-buffer.

use thiserror::Error;

use palisade_rand::EntropyError;

/// Error type for `SecureBuffer` operations.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum BufferError {
    /// Input is not a valid even-length hex string.
    #[error("BadEncoding: input is not an even-length hex string")]
    BadEncoding,

    /// The platform entropy source failed.
    #[error("{0}")]
    Entropy(#[from] EntropyError),
}
