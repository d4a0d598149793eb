//! Construction parameters for `ProbeHashMap`.

use crate::compress::{MadCompressor, DEFAULT_PRIME};
use crate::error::ProbeError;

/// Initial slot count when none is given.
pub const DEFAULT_CAPACITY: usize = 17;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MapConfig {
    /// Initial number of slots.
    pub capacity: usize,
    /// Modulus for the multiply-add-divide compression.
    pub prime: u64,
    /// Seed for the compression's scale and shift; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            prime: DEFAULT_PRIME,
            seed: None,
        }
    }
}

impl MapConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_prime(mut self, prime: u64) -> Self {
        self.prime = prime;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters without building anything.
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.capacity == 0 {
            return Err(ProbeError::ZeroCapacity);
        }
        if self.prime < 2 {
            return Err(ProbeError::InvalidPrime(self.prime));
        }
        Ok(())
    }

    pub fn compressor(&self) -> Result<MadCompressor, ProbeError> {
        match self.seed {
            Some(seed) => MadCompressor::with_seed(self.prime, seed),
            None => MadCompressor::new(self.prime),
        }
    }
}
