//! Deterministic random stream utilities.
//!
//! Each [`Stream`] instance represents an independent pseudo-random sequence
//! derived from a text key. The key is hashed with SHA-256 and the first
//! sixteen hex characters of the digest (the leading eight bytes, read
//! big-endian) become the generator seed, so identical keys reproduce
//! identical draws on every platform.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

#[derive(Clone, Debug)]
pub struct Stream {
    seed: u64,
    inner: ChaCha8Rng,
}

impl Stream {
    /// Construct a stream for the given seed text.
    pub fn from_key(key: &str) -> Self {
        let seed = seed_from_key(key);
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Stream for the identity-keyed layers (stars and pattern).
    pub fn identity(name: &str, hair_type: &str, message: &str) -> Self {
        Self::from_key(&identity_key(name, hair_type, message))
    }

    /// Stream reserved for the Morse ring layout.
    pub fn ring(message: &str) -> Self {
        Self::from_key(message)
    }

    /// Seed value derived from the key.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance the stream and return the next `f64` sample in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform angle in `[0, 2π)`.
    pub fn next_angle(&mut self) -> f64 {
        self.next_f64() * TAU
    }

    /// Radius for a uniform sample over a disk of `radius`.
    ///
    /// Uses the square-root transform; sampling the radius linearly would
    /// crowd points toward the center.
    pub fn next_disk_radius(&mut self, radius: f64) -> f64 {
        radius * self.next_f64().sqrt()
    }

    /// Advance the stream and return the next `f64` sample in `[-0.5, 0.5)`.
    pub fn next_centered(&mut self) -> f64 {
        self.next_f64() - 0.5
    }
}

/// Composite key for the identity stream.
pub fn identity_key(name: &str, hair_type: &str, message: &str) -> String {
    format!("{name}|{hair_type}|{message}")
}

/// First sixteen hex characters of the SHA-256 digest of `key` as an integer.
pub fn seed_from_key(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}
