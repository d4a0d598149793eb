//! Linear probe search over a `SlotTable`.
//!
//! The scan starts at an already-compressed index and walks forward one
//! slot at a time, wrapping at the end of the table. Tombstones are
//! skipped (the first one seen is remembered as an insertion candidate);
//! only an `Empty` slot or a full lap ends an unsuccessful search.

use crate::slot::{Slot, SlotTable};
use core::borrow::Borrow;

/// Outcome of a probe search.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Probe {
    /// The key lives in this slot.
    Found(usize),
    /// The key is absent; this is the first slot a new entry may use.
    Vacant(usize),
    /// The key is absent and every slot is occupied.
    Full,
}

/// A probe outcome together with the number of slots visited to reach it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ProbeReport {
    pub outcome: Probe,
    pub probes: usize,
}

/// Searches for `key` starting at slot `start`.
///
/// `start` must be below the table capacity. Debug builds assert it;
/// release builds reduce it modulo the capacity.
pub fn find_slot<K, V, Q>(table: &SlotTable<K, V>, start: usize, key: &Q) -> ProbeReport
where
    K: Borrow<Q>,
    Q: ?Sized + Eq,
{
    let capacity = table.capacity();
    debug_assert!(
        start < capacity,
        "start index {start} out of range for capacity {capacity}"
    );
    let start = start % capacity;

    let mut avail: Option<usize> = None;
    let mut probes = 0;
    let mut j = start;
    loop {
        probes += 1;
        match table.get(j) {
            Slot::Empty => {
                // Nothing past an empty slot can belong to this probe run.
                let outcome = Probe::Vacant(avail.unwrap_or(j));
                return ProbeReport { outcome, probes };
            }
            Slot::Tombstone => {
                avail.get_or_insert(j);
            }
            Slot::Occupied(e) => {
                if e.key.borrow() == key {
                    return ProbeReport {
                        outcome: Probe::Found(j),
                        probes,
                    };
                }
            }
        }
        j += 1;
        if j == capacity {
            j = 0;
        }
        if j == start {
            break;
        }
    }

    let outcome = match avail {
        Some(a) => Probe::Vacant(a),
        None => Probe::Full,
    };
    ProbeReport { outcome, probes }
}

/// Aggregated probe lengths over a series of searches.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ProbeStats {
    pub lookups: usize,
    pub total_probes: usize,
    pub max_probes: usize,
}

impl ProbeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &ProbeReport) {
        self.lookups += 1;
        self.total_probes += report.probes;
        self.max_probes = self.max_probes.max(report.probes);
    }

    /// Mean slots visited per lookup; 0.0 when nothing was recorded.
    pub fn mean(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.total_probes as f64 / self.lookups as f64
        }
    }
}
