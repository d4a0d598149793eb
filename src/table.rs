//! ProbeTable: bucket-level operations over a linear-probing slot table.
//!
//! Callers supply the already-compressed start index `h` for every key;
//! the table never hashes. Each operation runs one probe search and then
//! acts on its outcome, keeping the live-entry count in step with the
//! number of occupied slots.

use crate::error::ProbeError;
use crate::probe::{find_slot, Probe, ProbeReport};
use crate::slot::{Entry, Slot, SlotTable};
use core::borrow::Borrow;
use log::{debug, warn};

#[derive(Debug, Clone)]
pub struct ProbeTable<K, V> {
    slots: SlotTable<K, V>,
    len: usize,
    tombstones: usize,
}

impl<K, V> ProbeTable<K, V>
where
    K: Eq,
{
    /// Allocates an all-empty table of `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, ProbeError> {
        Ok(Self {
            slots: SlotTable::new(capacity)?,
            len: 0,
            tombstones: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Runs the probe search alone, for callers that want probe lengths.
    pub fn probe<Q>(&self, h: usize, k: &Q) -> ProbeReport
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        find_slot(&self.slots, h, k)
    }

    pub fn bucket_get<Q>(&self, h: usize, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        match self.probe(h, k).outcome {
            Probe::Found(j) => self.slots.get(j).entry().map(|e| &e.value),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    pub fn bucket_get_mut<Q>(&mut self, h: usize, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        match self.probe(h, k).outcome {
            Probe::Found(j) => self.slots.entry_mut(j).map(|e| &mut e.value),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Associates `k` with `v`, returning the value it replaced.
    ///
    /// Fails with `TableFull` (leaving the table untouched) when `k` is
    /// absent and no slot is available.
    pub fn bucket_put(&mut self, h: usize, k: K, v: V) -> Result<Option<V>, ProbeError> {
        match self.probe(h, &k).outcome {
            Probe::Found(j) => {
                let e = self
                    .slots
                    .entry_mut(j)
                    .expect("probe reported an occupied slot");
                Ok(Some(core::mem::replace(&mut e.value, v)))
            }
            Probe::Vacant(j) => {
                let prev = self.slots.set(j, Slot::Occupied(Entry { key: k, value: v }));
                if prev.is_tombstone() {
                    self.tombstones -= 1;
                }
                self.len += 1;
                Ok(None)
            }
            Probe::Full => {
                let capacity = self.capacity();
                warn!("put into full probe table (capacity {capacity})");
                Err(ProbeError::TableFull { capacity })
            }
        }
    }

    /// Removes `k`, leaving a tombstone in its slot.
    pub fn bucket_remove<Q>(&mut self, h: usize, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let Probe::Found(j) = self.probe(h, k).outcome else {
            return None;
        };
        match self.slots.set(j, Slot::Tombstone) {
            Slot::Occupied(e) => {
                self.len -= 1;
                self.tombstones += 1;
                Some(e.value)
            }
            _ => unreachable!("probe reported an occupied slot"),
        }
    }

    /// Borrowing iterator over live entries in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.slots.slots(),
        }
    }

    /// Snapshot of the live entries in slot order.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Consumes the table, yielding its live entries in slot order.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.slots
            .into_slots()
            .into_iter()
            .filter_map(|s| match s {
                Slot::Occupied(e) => Some((e.key, e.value)),
                _ => None,
            })
            .collect()
    }

    /// Replaces the slot table with a fresh one of `capacity` slots and
    /// reinserts every live entry at the index `index_of` computes for it
    /// against the new capacity. Tombstones do not survive a rebuild.
    ///
    /// A capacity below the live count is rejected before the table is
    /// touched.
    pub fn rebuild<F>(&mut self, capacity: usize, mut index_of: F) -> Result<(), ProbeError>
    where
        F: FnMut(&K, usize) -> usize,
    {
        if capacity < self.len {
            return Err(ProbeError::CapacityBelowLen {
                capacity,
                len: self.len,
            });
        }
        let fresh = Self::with_capacity(capacity)?;
        let old = core::mem::replace(self, fresh);
        let live = old.len;
        for (k, v) in old.into_entries() {
            let h = index_of(&k, capacity);
            // Keys are unique and capacity >= live count, so every put lands
            // in an empty slot.
            let prev = self.bucket_put(h, k, v)?;
            debug_assert!(prev.is_none(), "duplicate key during rebuild");
        }
        debug!("rebuilt probe table: {live} entries into capacity {capacity}");
        Ok(())
    }
}

/// Iterator over the live entries of a `ProbeTable`, in slot order.
pub struct Iter<'a, K, V> {
    it: core::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .find_map(|s| s.entry().map(|e| (&e.key, &e.value)))
    }
}

impl<'a, K: Eq, V> IntoIterator for &'a ProbeTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
