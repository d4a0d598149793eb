use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Every slot is occupied and none holds the key.
    #[error("no available slot in a table of capacity {capacity}")]
    TableFull { capacity: usize },
    /// A rebuild was asked for fewer slots than there are live entries.
    #[error("capacity {capacity} cannot hold {len} live entries")]
    CapacityBelowLen { capacity: usize, len: usize },
    #[error("table capacity must be at least 1")]
    ZeroCapacity,
    #[error("compression prime must be at least 2, got {0}")]
    InvalidPrime(u64),
}
