// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! KdfRomix - ROMix over SHA-512 with wall-clock calibration.

use core::fmt;
use std::time::Instant;

use sha2::{Digest, Sha512};
use zeroize::{Zeroize, Zeroizing};

use palisade_buffer::SecureBuffer;
use palisade_rand::{EntropySource, SystemEntropySource};

use crate::error::KdfError;

/// Output size of the internal hash (SHA-512), and the lookup-table entry
/// size. Memory requirements must be a positive multiple of this.
pub const HASH_OUTPUT_BYTES: usize = 64;

/// Size of a derived key.
pub const KDF_OUTPUT_BYTES: usize = 32;

/// Salt size generated during calibration.
pub const SALT_LENGTH: usize = 32;

/// Default wall-clock target for one full derivation.
pub const DEFAULT_TARGET_SECONDS: f64 = 0.25;

/// Ceiling on the lookup-table size. 32 MiB per derivation is already far
/// past the point where a GPU loses to a CPU on random table lookups.
pub const DEFAULT_MAX_MEMORY_BYTES: u32 = 32 * 1024 * 1024;

const CALIBRATION_START_MEMORY_BYTES: u32 = 1024;

/// Memory-hard password-to-key derivation (ROMix, SHA-512).
///
/// Each instance owns a preallocated lookup table of `memory_reqt_bytes`
/// scratch bytes, reused across derivations. The table is not wiped between
/// derivations, so until the instance drops it retains state derived from
/// the last password; the backing [`SecureBuffer`] zeroizes it on drop.
///
/// Derivation takes `&mut self` because of that scratch table: concurrent
/// derivations need distinct instances.
pub struct KdfRomix {
    hash_function_name: &'static str,
    memory_reqt_bytes: u32,
    sequence_count: u32,
    num_iterations: u32,
    salt: SecureBuffer,
    lookup_table: SecureBuffer,
}

impl KdfRomix {
    /// Builds a KDF from stored parameters, bypassing calibration.
    ///
    /// This is the reconstruction path for parameters persisted in a wallet
    /// header.
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::BadParams`] when `memory_reqt_bytes` is below one
    /// hash block, not a multiple of [`HASH_OUTPUT_BYTES`], or
    /// `num_iterations` is zero.
    pub fn with_params(
        memory_reqt_bytes: u32,
        num_iterations: u32,
        salt: SecureBuffer,
    ) -> Result<Self, KdfError> {
        if memory_reqt_bytes < HASH_OUTPUT_BYTES as u32 {
            return Err(KdfError::BadParams(
                "memory requirement is below one hash block",
            ));
        }

        if memory_reqt_bytes % HASH_OUTPUT_BYTES as u32 != 0 {
            return Err(KdfError::BadParams(
                "memory requirement must be a multiple of the hash output size",
            ));
        }

        if num_iterations == 0 {
            return Err(KdfError::BadParams("iteration count must be at least 1"));
        }

        Ok(Self {
            hash_function_name: "sha512",
            memory_reqt_bytes,
            sequence_count: memory_reqt_bytes / HASH_OUTPUT_BYTES as u32,
            num_iterations,
            salt,
            lookup_table: SecureBuffer::new(memory_reqt_bytes as usize),
        })
    }

    /// Self-tunes parameters so one full derivation lands in
    /// `[target_seconds / 2, target_seconds]` on this host, then generates a
    /// fresh random salt.
    ///
    /// Memory doubles from 1 KiB while a single iteration stays under a
    /// quarter of the target; the iteration count then fills the remaining
    /// time budget. The selected memory never exceeds `max_memory_bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::BadParams`] for a non-positive target or a
    /// `max_memory_bytes` below one hash block, [`KdfError::Entropy`] if the
    /// salt cannot be generated.
    pub fn calibrated(target_seconds: f64, max_memory_bytes: u32) -> Result<Self, KdfError> {
        Self::calibrated_with(target_seconds, max_memory_bytes, &SystemEntropySource {})
    }

    /// Calibrates with the library defaults (0.25 s, 32 MiB).
    pub fn calibrated_default() -> Result<Self, KdfError> {
        Self::calibrated(DEFAULT_TARGET_SECONDS, DEFAULT_MAX_MEMORY_BYTES)
    }

    /// Calibrates using the given entropy source for the salt.
    pub fn calibrated_with(
        target_seconds: f64,
        max_memory_bytes: u32,
        entropy: &dyn EntropySource,
    ) -> Result<Self, KdfError> {
        if !(target_seconds > 0.0) {
            return Err(KdfError::BadParams("target time must be positive"));
        }

        if max_memory_bytes < HASH_OUTPUT_BYTES as u32 {
            return Err(KdfError::BadParams(
                "memory ceiling is below one hash block",
            ));
        }

        let mut salt = SecureBuffer::new(SALT_LENGTH);
        entropy.fill_bytes(salt.as_mut_slice())?;

        // Round the starting point down into the allowed range
        let start_memory = CALIBRATION_START_MEMORY_BYTES
            .min(max_memory_bytes - max_memory_bytes % HASH_OUTPUT_BYTES as u32);

        let probe = SecureBuffer::from_bytes(b"calibration probe password");
        let mut kdf = Self::with_params(start_memory, 1, salt)?;

        // with_params zero-fills the table, so every page is already
        // resident when the timed iterations below run
        loop {
            let elapsed = kdf.time_one_iter(&probe);

            let doubled = match kdf.memory_reqt_bytes.checked_mul(2) {
                Some(bytes) => bytes,
                None => break,
            };

            if elapsed < target_seconds / 4.0 && doubled <= max_memory_bytes {
                kdf.grow_table(doubled);
            } else {
                break;
            }
        }

        let t1 = kdf.time_one_iter(&probe).max(1e-9);
        kdf.num_iterations = ((target_seconds / t1) as u32).max(1);

        tracing::debug!(
            memory_reqt_bytes = kdf.memory_reqt_bytes,
            sequence_count = kdf.sequence_count,
            num_iterations = kdf.num_iterations,
            "kdf calibration selected parameters"
        );

        Ok(kdf)
    }

    /// Runs one ROMix pass: fill the table with the `H(password || salt)`
    /// hash chain, then `sequence_count` XOR-and-rehash mixing rounds.
    /// Returns the first [`KDF_OUTPUT_BYTES`] of the final state.
    pub fn derive_one_iter(&mut self, password: &SecureBuffer) -> SecureBuffer {
        let mut hasher = Sha512::new();
        hasher.update(password.as_slice());
        hasher.update(self.salt.as_slice());
        let mut x: Zeroizing<[u8; HASH_OUTPUT_BYTES]> = Zeroizing::new(hasher.finalize().into());

        let sequence_count = self.sequence_count as u64;
        let table = self.lookup_table.as_mut_slice();

        for entry in table.chunks_exact_mut(HASH_OUTPUT_BYTES) {
            entry.copy_from_slice(&x[..]);
            x = Zeroizing::new(Sha512::digest(&x[..]).into());
        }

        let mut mixed = Zeroizing::new([0u8; HASH_OUTPUT_BYTES]);
        for _ in 0..sequence_count {
            let mut head = [0u8; 8];
            head.copy_from_slice(&x[..8]);
            let offset = (u64::from_le_bytes(head) % sequence_count) as usize * HASH_OUTPUT_BYTES;
            head.zeroize();

            let entry = &table[offset..offset + HASH_OUTPUT_BYTES];
            for (out, (state, looked_up)) in mixed.iter_mut().zip(x.iter().zip(entry)) {
                *out = state ^ looked_up;
            }

            x = Zeroizing::new(Sha512::digest(&mixed[..]).into());
        }

        SecureBuffer::from_bytes(&x[..KDF_OUTPUT_BYTES])
    }

    /// Derives the final key: `num_iterations` chained ROMix passes, each
    /// output feeding the next pass as its password.
    pub fn derive(&mut self, password: &SecureBuffer) -> SecureBuffer {
        let mut key = self.derive_one_iter(password);

        for _ in 1..self.num_iterations {
            key = self.derive_one_iter(&key);
        }

        key
    }

    /// Name of the internal hash function (informational).
    pub fn hash_function_name(&self) -> &'static str {
        self.hash_function_name
    }

    /// Lookup-table size in bytes.
    pub fn memory_reqt_bytes(&self) -> u32 {
        self.memory_reqt_bytes
    }

    /// Number of table entries (`memory_reqt_bytes / HASH_OUTPUT_BYTES`).
    pub fn sequence_count(&self) -> u32 {
        self.sequence_count
    }

    /// Number of chained ROMix passes per derivation.
    pub fn num_iterations(&self) -> u32 {
        self.num_iterations
    }

    /// The salt mixed into the initial hash.
    pub fn salt(&self) -> &SecureBuffer {
        &self.salt
    }

    fn grow_table(&mut self, memory_reqt_bytes: u32) {
        // The abandoned table is zeroized and unlocked by SecureBuffer's drop
        self.lookup_table = SecureBuffer::new(memory_reqt_bytes as usize);
        self.memory_reqt_bytes = memory_reqt_bytes;
        self.sequence_count = memory_reqt_bytes / HASH_OUTPUT_BYTES as u32;
    }

    fn time_one_iter(&mut self, probe: &SecureBuffer) -> f64 {
        let started = Instant::now();
        let _key = self.derive_one_iter(probe);

        started.elapsed().as_secs_f64()
    }
}

impl fmt::Debug for KdfRomix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdfRomix")
            .field("hash_function_name", &self.hash_function_name)
            .field("memory_reqt_bytes", &self.memory_reqt_bytes)
            .field("sequence_count", &self.sequence_count)
            .field("num_iterations", &self.num_iterations)
            .field("salt", &self.salt)
            .finish()
    }
}
