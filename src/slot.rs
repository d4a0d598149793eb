//! Slot table: the fixed-capacity array a probing table lives in.
//!
//! Every slot is in exactly one of three states. `Empty` has never held an
//! entry and terminates a probe scan; `Tombstone` held an entry that was
//! removed and is skipped by scans but may be reused by inserts;
//! `Occupied` holds a live entry.

use crate::error::ProbeError;

/// A live key-value pair stored in an occupied slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied(Entry<K, V>),
}

impl<K, V> Slot<K, V> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// Empty or tombstone: the slot can receive a new entry.
    #[inline]
    pub fn is_available(&self) -> bool {
        !matches!(self, Slot::Occupied(_))
    }

    #[inline]
    pub fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }
}

/// Fixed-length array of slots, all `Empty` at creation.
///
/// The length never changes; growing means building a new table.
#[derive(Debug, Clone)]
pub struct SlotTable<K, V> {
    slots: Box<[Slot<K, V>]>,
}

impl<K, V> SlotTable<K, V> {
    pub fn new(capacity: usize) -> Result<Self, ProbeError> {
        if capacity == 0 {
            return Err(ProbeError::ZeroCapacity);
        }
        let slots = (0..capacity).map(|_| Slot::Empty).collect();
        Ok(Self { slots })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_available(&self, i: usize) -> bool {
        self.slots[i].is_available()
    }

    #[inline]
    pub fn get(&self, i: usize) -> &Slot<K, V> {
        &self.slots[i]
    }

    /// Mutable access to the entry in slot `i`, if it is occupied.
    #[inline]
    pub fn entry_mut(&mut self, i: usize) -> Option<&mut Entry<K, V>> {
        match &mut self.slots[i] {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }

    /// Overwrite slot `i`, returning what was there.
    #[inline]
    pub fn set(&mut self, i: usize, slot: Slot<K, V>) -> Slot<K, V> {
        core::mem::replace(&mut self.slots[i], slot)
    }

    pub fn slots(&self) -> core::slice::Iter<'_, Slot<K, V>> {
        self.slots.iter()
    }

    pub(crate) fn into_slots(self) -> Vec<Slot<K, V>> {
        self.slots.into_vec()
    }
}
