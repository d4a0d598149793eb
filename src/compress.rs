//! Compression of 64-bit hash codes into table indices.

use crate::error::ProbeError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Prime modulus used when none is configured.
pub const DEFAULT_PRIME: u64 = 109_345_121;

/// Maps a hash code into `[0, capacity)`.
pub trait Compress {
    fn compress(&self, hash: u64, capacity: usize) -> usize;
}

/// Multiply-add-and-divide: `((hash * scale + shift) mod prime) mod capacity`.
///
/// `scale` is drawn from `[1, prime)` and `shift` from `[0, prime)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MadCompressor {
    prime: u64,
    scale: u64,
    shift: u64,
}

impl MadCompressor {
    /// Random scale and shift for `prime`, seeded from entropy.
    pub fn new(prime: u64) -> Result<Self, ProbeError> {
        Self::with_rng(prime, &mut StdRng::from_entropy())
    }

    /// Deterministic scale and shift for `prime`.
    pub fn with_seed(prime: u64, seed: u64) -> Result<Self, ProbeError> {
        Self::with_rng(prime, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: Rng>(prime: u64, rng: &mut R) -> Result<Self, ProbeError> {
        if prime < 2 {
            return Err(ProbeError::InvalidPrime(prime));
        }
        Ok(Self {
            prime,
            scale: rng.gen_range(1..prime),
            shift: rng.gen_range(0..prime),
        })
    }

    pub fn prime(&self) -> u64 {
        self.prime
    }
}

impl Default for MadCompressor {
    fn default() -> Self {
        Self {
            prime: DEFAULT_PRIME,
            scale: 1,
            shift: 0,
        }
    }
}

impl Compress for MadCompressor {
    #[inline]
    fn compress(&self, hash: u64, capacity: usize) -> usize {
        let mixed = (hash as u128 * self.scale as u128 + self.shift as u128) % self.prime as u128;
        (mixed % capacity as u128) as usize
    }
}
