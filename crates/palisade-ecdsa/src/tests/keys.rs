// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for key parsing, serialization, and pair consistency.

use palisade_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::error::EcdsaError;
use crate::keys::{PrivateKey, PublicKey, PUBLIC_KEY_LENGTH};

// secp256k1 generator, affine coordinates
const GENERATOR_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const GENERATOR_Y: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

// secp256k1 group order n
const CURVE_ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

fn one_key() -> PrivateKey {
    let mut scalar = [0u8; 32];
    scalar[31] = 1;

    PrivateKey::from_bytes(&scalar).expect("Failed to from_bytes(..)")
}

fn generator_uncompressed() -> [u8; PUBLIC_KEY_LENGTH] {
    let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
    bytes[0] = 0x04;
    hex::decode_to_slice(GENERATOR_X, &mut bytes[1..33]).expect("Failed to decode_to_slice(..)");
    hex::decode_to_slice(GENERATOR_Y, &mut bytes[33..65]).expect("Failed to decode_to_slice(..)");

    bytes
}

// =============================================================================
// PrivateKey::generate()
// =============================================================================

#[test]
fn test_generate_round_trips() {
    let key = PrivateKey::generate().expect("Failed to generate(..)");

    let bytes = key.to_bytes();
    assert_eq!(bytes.len(), 32);

    let restored = PrivateKey::from_bytes(bytes.as_slice()).expect("Failed to from_bytes(..)");
    assert_eq!(restored.to_bytes(), bytes);
}

#[test]
fn test_generate_public_key_parses_back() {
    let key = PrivateKey::generate().expect("Failed to generate(..)");

    let encoded = key.public_key().to_uncompressed_bytes();

    assert_eq!(encoded[0], 0x04);
    PublicKey::from_sec1_bytes(&encoded).expect("generated point must be on the curve");
}

#[test]
fn test_generate_with_failing_entropy() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    let result = PrivateKey::generate_with(&entropy);

    assert!(matches!(result, Err(EcdsaError::Entropy(_))));
}

#[test]
fn test_generate_with_deterministic_entropy() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FillWithByte(0x01));

    let key = PrivateKey::generate_with(&entropy).expect("Failed to generate_with(..)");

    assert_eq!(key.to_bytes().as_slice(), &[0x01; 32]);
}

// =============================================================================
// PrivateKey::from_bytes()
// =============================================================================

#[test]
fn test_private_key_wrong_lengths() {
    assert_eq!(
        PrivateKey::from_bytes(&[1u8; 31]).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
    assert_eq!(
        PrivateKey::from_bytes(&[1u8; 33]).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
    assert_eq!(
        PrivateKey::from_bytes(&[]).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
}

#[test]
fn test_private_key_zero_scalar() {
    assert_eq!(
        PrivateKey::from_bytes(&[0u8; 32]).unwrap_err(),
        EcdsaError::OutOfRange
    );
}

#[test]
fn test_private_key_order_and_above() {
    let mut order = [0u8; 32];
    hex::decode_to_slice(CURVE_ORDER, &mut order).expect("Failed to decode_to_slice(..)");

    assert_eq!(
        PrivateKey::from_bytes(&order).unwrap_err(),
        EcdsaError::OutOfRange
    );
    assert_eq!(
        PrivateKey::from_bytes(&[0xFF; 32]).unwrap_err(),
        EcdsaError::OutOfRange
    );
}

#[test]
fn test_private_key_order_minus_one_is_valid() {
    let mut scalar = [0u8; 32];
    hex::decode_to_slice(CURVE_ORDER, &mut scalar).expect("Failed to decode_to_slice(..)");
    scalar[31] -= 1;

    PrivateKey::from_bytes(&scalar).expect("n - 1 is a valid scalar");
}

// =============================================================================
// compute_public_key: known answer
// =============================================================================

// Private key 1 maps to the generator itself: 0x04 || Gx || Gy
#[test]
fn test_public_key_of_one_is_generator() {
    let key = one_key();

    assert_eq!(key.public_key().to_uncompressed_bytes(), generator_uncompressed());
}

// =============================================================================
// PublicKey parsing
// =============================================================================

#[test]
fn test_public_key_round_trip() {
    let encoded = generator_uncompressed();

    let parsed = PublicKey::from_sec1_bytes(&encoded).expect("Failed to from_sec1_bytes(..)");

    assert_eq!(parsed.to_uncompressed_bytes(), encoded);
}

#[test]
fn test_public_key_from_coordinates() {
    let encoded = generator_uncompressed();

    let parsed = PublicKey::from_coordinates(&encoded[1..33], &encoded[33..65])
        .expect("Failed to from_coordinates(..)");

    assert_eq!(parsed.to_uncompressed_bytes(), encoded);
}

#[test]
fn test_public_key_all_zero_is_identity() {
    assert_eq!(
        PublicKey::from_sec1_bytes(&[0u8; 65]).unwrap_err(),
        EcdsaError::IsIdentity
    );
    assert_eq!(
        PublicKey::from_coordinates(&[0u8; 32], &[0u8; 32]).unwrap_err(),
        EcdsaError::IsIdentity
    );
}

#[test]
fn test_public_key_wrong_length() {
    assert_eq!(
        PublicKey::from_sec1_bytes(&[0u8; 64]).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
    assert_eq!(
        PublicKey::from_sec1_bytes(&[0u8; 33]).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
}

#[test]
fn test_public_key_wrong_tag() {
    let mut encoded = generator_uncompressed();
    encoded[0] = 0x02;

    assert_eq!(
        PublicKey::from_sec1_bytes(&encoded).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
}

#[test]
fn test_public_key_off_curve() {
    let mut encoded = generator_uncompressed();
    // Perturbing Y breaks the curve equation
    encoded[64] ^= 0x01;

    assert_eq!(
        PublicKey::from_sec1_bytes(&encoded).unwrap_err(),
        EcdsaError::NotOnCurve
    );
}

#[test]
fn test_public_key_coordinates_wrong_length() {
    assert_eq!(
        PublicKey::from_coordinates(&[1u8; 31], &[1u8; 32]).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
    assert_eq!(
        PublicKey::from_coordinates(&[1u8; 32], &[1u8; 33]).unwrap_err(),
        EcdsaError::BadKeyFormat
    );
}

// =============================================================================
// matches()
// =============================================================================

#[test]
fn test_matches_own_public_key() {
    let key = PrivateKey::generate().expect("Failed to generate(..)");

    assert!(key.matches(&key.public_key()));
}

#[test]
fn test_matches_rejects_foreign_public_key() {
    let key = PrivateKey::generate().expect("Failed to generate(..)");
    let other = PrivateKey::generate().expect("Failed to generate(..)");

    assert!(!key.matches(&other.public_key()));
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_private_key_debug_is_redacted() {
    let key = one_key();
    let debug_output = format!("{:?}", key);

    assert!(debug_output.contains("REDACTED"));
    assert!(!debug_output.contains("01"));
}
