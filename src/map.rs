//! ProbeHashMap: hashing, compression and growth around a `ProbeTable`.

use crate::compress::{Compress, MadCompressor};
use crate::config::MapConfig;
use crate::error::ProbeError;
use crate::probe::ProbeStats;
use crate::table::{Iter, ProbeTable};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;
use log::debug;

/// Capacity after growth from `capacity` slots.
fn grown_capacity(capacity: usize) -> usize {
    (2 * capacity - 1).max(capacity + 1)
}

/// Live entries plus tombstones allowed before tombstones are cleared.
///
/// Sits a quarter of the capacity above the growth mark, so a cleared table
/// absorbs at least `capacity / 4` new tombstones before the next clear.
/// Always below `capacity`, which keeps a free slot for every insert.
fn tombstone_limit(capacity: usize) -> usize {
    capacity / 2 + capacity / 4
}

pub struct ProbeHashMap<K, V, S = DefaultHashBuilder, C = MadCompressor> {
    hasher: S,
    compressor: C,
    table: ProbeTable<K, V>,
}

impl<K, V> ProbeHashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_config(&MapConfig::default()).expect("default config is valid")
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, ProbeError> {
        Self::with_config(&MapConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: &MapConfig) -> Result<Self, ProbeError> {
        config.validate()?;
        Self::with_parts(config.capacity, DefaultHashBuilder::default(), config.compressor()?)
    }
}

impl<K, V> Default for ProbeHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ProbeHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        let config = MapConfig::default();
        let compressor = config.compressor().expect("default config is valid");
        Self::with_parts(config.capacity, hasher, compressor).expect("default config is valid")
    }
}

impl<K, V, S, C> ProbeHashMap<K, V, S, C>
where
    K: Eq + Hash,
    S: BuildHasher,
    C: Compress,
{
    pub fn with_parts(capacity: usize, hasher: S, compressor: C) -> Result<Self, ProbeError> {
        Ok(Self {
            hasher,
            compressor,
            table: ProbeTable::with_capacity(capacity)?,
        })
    }

    fn index_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        self.compressor
            .compress(self.hasher.hash_one(q), self.table.capacity())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.bucket_get(self.index_of(q), q)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let h = self.index_of(q);
        self.table.bucket_get_mut(h, q)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(q).is_some()
    }

    /// Associates `key` with `value`, returning the previous value.
    ///
    /// Grows the table once more than half the slots are live, and clears
    /// tombstones once live entries plus tombstones pass three quarters.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ProbeError> {
        let h = self.index_of(&key);
        let prev = self.table.bucket_put(h, key, value)?;
        if prev.is_none() {
            self.maintain_load()?;
        }
        Ok(prev)
    }

    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let h = self.index_of(q);
        self.table.bucket_remove(h, q)
    }

    fn maintain_load(&mut self) -> Result<(), ProbeError> {
        let capacity = self.table.capacity();
        let len = self.table.len();
        if len > capacity / 2 {
            let mut target = grown_capacity(capacity);
            while len > target / 2 {
                target = grown_capacity(target);
            }
            self.resize(target)
        } else if len + self.table.tombstones() > tombstone_limit(capacity) {
            self.resize(capacity)
        } else {
            Ok(())
        }
    }

    fn resize(&mut self, capacity: usize) -> Result<(), ProbeError> {
        debug!(
            "resizing probe map: {} -> {} slots ({} live, {} tombstones)",
            self.table.capacity(),
            capacity,
            self.table.len(),
            self.table.tombstones()
        );
        let hasher = &self.hasher;
        let compressor = &self.compressor;
        self.table
            .rebuild(capacity, |k, cap| compressor.compress(hasher.hash_one(k), cap))
    }

    /// Snapshot of all live pairs in slot order.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.table.entries()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.table.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.table.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.table.iter().map(|(_, v)| v)
    }

    /// Probe lengths for looking up every live key once.
    pub fn probe_stats(&self) -> ProbeStats {
        let mut stats = ProbeStats::new();
        for (k, _) in self.table.iter() {
            stats.record(&self.table.probe(self.index_of(k), k));
        }
        stats
    }
}

impl<'a, K, V, S, C> IntoIterator for &'a ProbeHashMap<K, V, S, C>
where
    K: Eq + Hash,
    S: BuildHasher,
    C: Compress,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
