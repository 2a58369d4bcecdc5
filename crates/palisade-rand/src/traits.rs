// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Interface for cryptographically secure random byte generation.
pub trait EntropySource {
    /// Fills `dest` with random bytes, or fails if no entropy can be obtained.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
