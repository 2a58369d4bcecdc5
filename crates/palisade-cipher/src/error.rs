// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-cipher.

use thiserror::Error;

/// Error type for AES-CFB operations.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum CipherError {
    /// Key is not 16, 24, or 32 bytes.
    #[error("BadKeyLength: aes key must be 16, 24, or 32 bytes, got {0}")]
    BadKeyLength(usize),

    /// IV is not exactly 16 bytes.
    #[error("BadIvLength: aes iv must be exactly 16 bytes, got {0}")]
    BadIvLength(usize),
}
