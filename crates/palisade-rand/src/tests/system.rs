// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for SystemEntropySource.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_fill_bytes_fills_dest() {
    let entropy = SystemEntropySource {};
    let mut dest = [0u8; 64];

    entropy
        .fill_bytes(&mut dest)
        .expect("Failed to fill_bytes(..)");

    // 64 random bytes being all zero has probability 2^-512
    assert!(dest.iter().any(|&b| b != 0));
}

#[test]
fn test_fill_bytes_produces_distinct_outputs() {
    let entropy = SystemEntropySource {};
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    entropy.fill_bytes(&mut a).expect("Failed to fill_bytes(..)");
    entropy.fill_bytes(&mut b).expect("Failed to fill_bytes(..)");

    assert_ne!(a, b);
}

#[test]
fn test_fill_bytes_empty_dest() {
    let entropy = SystemEntropySource {};
    let mut dest = [0u8; 0];

    entropy
        .fill_bytes(&mut dest)
        .expect("Failed to fill_bytes(..)");
}

#[test]
fn test_fill_bytes_with_maps_error() {
    let mut dest = [0u8; 16];

    let result =
        SystemEntropySource::fill_bytes_with(&|_| Err(GetRandomError::UNSUPPORTED), &mut dest);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}
