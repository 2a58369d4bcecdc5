// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SecureBuffer - page-locked, zeroizing byte container.

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use palisade_rand::{EntropySource, SystemEntropySource};

use crate::error::BufferError;
use crate::lock;

/// A heap byte buffer for secret material.
///
/// The backing storage is `mlock`ed while allocated and overwritten with
/// zeros before every release: drop, [`clear`](Self::clear), shrinking, and
/// any reallocation. The full capacity is kept zero beyond the logical
/// length, so growth never exposes stale bytes.
///
/// `SecureBuffer` is not internally synchronized; independent instances are
/// freely usable from different threads, shared mutation requires external
/// coordination.
///
/// # Example
///
/// ```rust
/// use palisade_buffer::SecureBuffer;
///
/// let key = SecureBuffer::from_hex("000102030405060708090a0b0c0d0e0f")
///     .expect("valid hex");
/// assert_eq!(key.len(), 16);
/// assert_eq!(key.to_hex(), "000102030405060708090a0b0c0d0e0f");
/// ```
pub struct SecureBuffer {
    // Invariants:
    // - the allocation is locked via lock::lock_region while capacity > 0
    // - all capacity bytes are initialized; bytes in [len, capacity) are zero
    data: Vec<u8>,
}

impl SecureBuffer {
    /// Allocates a locked, zero-initialized buffer of `len` bytes.
    pub fn new(len: usize) -> Self {
        let mut data = Self::alloc_locked(len);
        unsafe {
            data.set_len(len);
        }

        Self { data }
    }

    /// Allocates an empty buffer with `capacity` bytes of locked storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Self::alloc_locked(capacity),
        }
    }

    /// Allocates a locked buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut data = Self::alloc_locked(bytes.len());
        data.extend_from_slice(bytes);

        Self { data }
    }

    /// Parses an even-length hex string into a locked buffer.
    ///
    /// The decoded bytes never pass through an unlocked intermediate
    /// allocation.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::BadEncoding`] on odd length or any non-hex
    /// character.
    pub fn from_hex(text: &str) -> Result<Self, BufferError> {
        if text.len() % 2 != 0 {
            return Err(BufferError::BadEncoding);
        }

        let mut buffer = Self::new(text.len() / 2);
        hex::decode_to_slice(text, buffer.as_mut_slice()).map_err(|_| BufferError::BadEncoding)?;

        Ok(buffer)
    }

    /// Hex-encodes the contents. The caller owns the exposure.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }

    /// Fills a new `len`-byte buffer from the platform entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Entropy`] if no entropy can be obtained.
    pub fn generate_random(len: usize) -> Result<Self, BufferError> {
        Self::generate_random_with(len, &SystemEntropySource {})
    }

    /// Fills a new `len`-byte buffer from the given entropy source.
    pub fn generate_random_with(
        len: usize,
        entropy: &dyn EntropySource,
    ) -> Result<Self, BufferError> {
        let mut buffer = Self::new(len);
        entropy.fill_bytes(buffer.as_mut_slice())?;

        Ok(buffer)
    }

    /// Returns the logical length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the locked capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns an immutable view of the contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable view of the contents.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Overwrites every byte of the contents with `byte`.
    pub fn fill(&mut self, byte: u8) {
        self.data.fill(byte);
    }

    /// Sets the length to zero and zeroizes the full capacity.
    ///
    /// The storage stays allocated and locked for reuse.
    pub fn clear(&mut self) {
        self.zeroize();
    }

    /// Shortens the buffer to `len` bytes, zeroizing the abandoned tail.
    ///
    /// No-op when `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.data.len() {
            self.data[len..].zeroize();
            unsafe {
                self.data.set_len(len);
            }
        }
    }

    /// Resizes to `len` bytes. New bytes are zero.
    ///
    /// Growth beyond the current capacity relocates into fresh locked
    /// storage; the old storage is zeroized and unlocked before release.
    pub fn resize(&mut self, len: usize) {
        if len <= self.data.len() {
            self.truncate(len);
            return;
        }

        self.relocate(len);
        unsafe {
            // bytes in [old_len, len) are zero per the capacity invariant
            self.data.set_len(len);
        }
    }

    /// Ensures at least `capacity` bytes of locked storage.
    pub fn reserve(&mut self, capacity: usize) {
        self.relocate(capacity);
    }

    /// Appends `bytes`, relocating with doubling growth when needed.
    pub fn append(&mut self, bytes: &[u8]) {
        let needed = self.data.len() + bytes.len();

        if needed > self.data.capacity() {
            self.relocate(needed.max(self.data.capacity() * 2));
        }

        self.data.extend_from_slice(bytes);
    }

    /// Returns a new locked buffer holding `self` followed by `other`.
    pub fn concat(&self, other: &SecureBuffer) -> SecureBuffer {
        let mut out = Self::with_capacity(self.len() + other.len());
        out.append(self.as_slice());
        out.append(other.as_slice());

        out
    }

    fn alloc_locked(capacity: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(capacity);

        if data.capacity() > 0 {
            lock::lock_region(data.as_ptr(), data.capacity());
            // Zero the whole capacity up front: establishes the capacity
            // invariant and pre-touches every page of the allocation.
            unsafe {
                core::ptr::write_bytes(data.as_mut_ptr(), 0, data.capacity());
            }
        }

        data
    }

    fn relocate(&mut self, min_capacity: usize) {
        if min_capacity <= self.data.capacity() {
            return;
        }

        let mut next = Self::alloc_locked(min_capacity);
        next.extend_from_slice(&self.data);

        let mut old = core::mem::replace(&mut self.data, next);
        Self::release(&mut old);
    }

    // Zeroizes the full capacity and unlocks the region. The allocation is
    // freed by Vec when `data` drops.
    fn release(data: &mut Vec<u8>) {
        if data.capacity() == 0 {
            return;
        }

        Self::capacity_mut(data).zeroize();
        lock::unlock_region(data.as_ptr(), data.capacity());
    }

    fn capacity_mut(data: &mut Vec<u8>) -> &mut [u8] {
        // Sound: alloc_locked initializes every capacity byte
        unsafe { core::slice::from_raw_parts_mut(data.as_mut_ptr(), data.capacity()) }
    }

    #[cfg(test)]
    pub(crate) fn capacity_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.data.as_ptr(), self.data.capacity()) }
    }
}

impl Zeroize for SecureBuffer {
    fn zeroize(&mut self) {
        Self::capacity_mut(&mut self.data).zeroize();
        unsafe {
            self.data.set_len(0);
        }
    }
}

impl Drop for SecureBuffer {
    fn drop(&mut self) {
        Self::release(&mut self.data);
    }
}

impl Clone for SecureBuffer {
    /// Copies into an independent locked, zeroizing buffer.
    fn clone(&self) -> Self {
        Self::from_bytes(&self.data)
    }
}

impl Default for SecureBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PartialEq for SecureBuffer {
    /// Byte-wise, length-equal comparison in constant time over the contents.
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && bool::from(self.data.ct_eq(&other.data))
    }
}

impl Eq for SecureBuffer {}

impl AsRef<[u8]> for SecureBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for SecureBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for SecureBuffer {
    /// Moves the contents into locked storage and zeroizes the source vec.
    fn from(mut bytes: Vec<u8>) -> Self {
        let buffer = Self::from_bytes(&bytes);
        bytes.zeroize();

        buffer
    }
}

impl fmt::Debug for SecureBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureBuffer(len={}, [REDACTED])", self.data.len())
    }
}
