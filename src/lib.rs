//! probe-hashmap: an open-addressing hash map with linear probing and
//! lazy deletion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the probing table independent of hashing so each piece can
//!   be reasoned about on its own.
//! - Layers:
//!   - SlotTable<K, V>: fixed-length array of `Empty | Tombstone |
//!     Occupied` slots. Never resized in place.
//!   - find_slot: linear probe search from a precomputed start index;
//!     reports `Found`, `Vacant` (first reusable slot) or `Full`.
//!   - ProbeTable<K, V>: bucket-level get/put/remove and iteration over
//!     a SlotTable, plus a rebuild into a fresh table.
//!   - ProbeHashMap<K, V, S, C>: hashes with `S: BuildHasher`, compresses
//!     with `C: Compress` and rebuilds the table as the load grows.
//!
//! Probe invariants
//! - At most one occupied slot holds a given key.
//! - A key is reachable from its start index by a contiguous, wrapping run
//!   of non-empty slots. Only an empty slot ends a search; tombstones are
//!   skipped and the first one seen is reused by the next insert.
//! - Slots return to empty only through a rebuild.
//!
//! Full tables
//! - A put that finds neither the key nor an available slot fails with
//!   `ProbeError::TableFull` and leaves the table unchanged. After every
//!   insert the map layer keeps live entries at or below half the capacity
//!   and live entries plus tombstones at or below three quarters, so an
//!   available slot always exists and it never reaches that state itself.
//!
//! Probe statistics
//! - Searches report how many slots they visited. Aggregation is an
//!   explicit `ProbeStats` value owned by the caller.
//!
//! Notes and non-goals
//! - Single-threaded; no internal locking.
//! - Iteration order is slot order, which is neither insertion order nor
//!   sorted.

pub mod compress;
pub mod config;
pub mod error;
pub mod map;
#[cfg(test)]
mod map_proptest;
pub mod near_miss;
pub mod probe;
pub mod slot;
pub mod table;

// Public surface
pub use compress::{Compress, MadCompressor};
pub use config::MapConfig;
pub use error::ProbeError;
pub use map::ProbeHashMap;
pub use probe::{Probe, ProbeReport, ProbeStats};
pub use table::ProbeTable;
