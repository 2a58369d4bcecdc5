// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-kdf.

use thiserror::Error;

use palisade_rand::EntropyError;

/// Error type for `KdfRomix` construction and calibration.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum KdfError {
    /// Memory or iteration parameters are illegal.
    #[error("BadParams: {0}")]
    BadParams(&'static str),

    /// The platform entropy source failed during salt generation.
    #[error("{0}")]
    Entropy(#[from] EntropyError),
}
