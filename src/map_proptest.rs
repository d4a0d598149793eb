#![cfg(test)]

// Property tests for ProbeHashMap and ProbeTable kept inside the crate so
// they can inspect table internals such as tombstone counts.

use crate::compress::Compress;
use crate::config::MapConfig;
use crate::error::ProbeError;
use crate::map::ProbeHashMap;
use crate::table::ProbeTable;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

/// Sends every key to slot 0.
#[derive(Clone, Default)]
struct ConstCompress;
impl Compress for ConstCompress {
    fn compress(&self, _hash: u64, _capacity: usize) -> usize {
        0
    }
}

// Drives `sut` and a hashbrown model with the same ops and checks parity
// after each one.
fn run_against_model<S, C>(
    mut sut: ProbeHashMap<String, i32, S, C>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: std::hash::BuildHasher,
    C: Compress,
{
    let mut model: HashMap<String, i32> = HashMap::new();
    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = pool[i].clone();
                let prev = sut.insert(k.clone(), v).expect("map keeps a free slot");
                prop_assert_eq!(prev, model.insert(k, v));
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k.as_str()), model.remove(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k.as_str()), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k.as_str()), model.get_mut(k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "get_mut presence differs for {:?}", k),
                }
            }
            OpI::Iterate => {
                let pairs: Vec<(String, i32)> = sut.entries();
                let keys: BTreeSet<_> = pairs.iter().map(|(k, _)| k.clone()).collect();
                prop_assert_eq!(keys.len(), pairs.len(), "duplicate key in iteration");
                for (k, v) in &pairs {
                    prop_assert_eq!(model.get(k), Some(v));
                }
                prop_assert_eq!(pairs.len(), model.len());
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.len() <= sut.capacity());
    }
    Ok(())
}

// Property: State-machine equivalence against hashbrown::HashMap.
// Invariants exercised across random operation sequences:
// - `insert` returns the replaced value exactly when the model does.
// - `remove`/`get`/`contains_key` agree with the model, including after
//   tombstones have accumulated.
// - `entries` yields each live pair exactly once.
// - `len` parity and `len <= capacity` after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), seed in any::<u64>()) {
        let config = MapConfig::default().with_capacity(3).with_seed(seed);
        let sut: ProbeHashMap<String, i32> = ProbeHashMap::with_config(&config).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Property: Same state-machine invariants as above, with every key
// compressed to slot 0 so each lookup walks one long probe run through
// occupied slots and tombstones.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let sut: ProbeHashMap<String, i32, DefaultHashBuilder, ConstCompress> =
            ProbeHashMap::with_parts(5, DefaultHashBuilder::default(), ConstCompress).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Property: a fixed-capacity ProbeTable with caller-chosen start indices
// never grows, so it can fill up. A put of an absent key fails exactly
// when every slot is live, and the failure leaves the table intact.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_fixed_table_fills_and_drains(
        capacity in 1usize..=6,
        ops in proptest::collection::vec((any::<bool>(), 0u8..10, 0usize..6), 1..120),
    ) {
        let mut sut: ProbeTable<u8, usize> = ProbeTable::with_capacity(capacity).unwrap();
        let mut model: HashMap<u8, usize> = HashMap::new();
        // Each key keeps one start index for the life of the table.
        let start = |k: u8| (k as usize * 7) % capacity;

        for (is_put, k, v) in ops {
            if is_put {
                match sut.bucket_put(start(k), k, v) {
                    Ok(prev) => prop_assert_eq!(prev, model.insert(k, v)),
                    Err(ProbeError::TableFull { capacity: c }) => {
                        prop_assert_eq!(c, capacity);
                        prop_assert!(!model.contains_key(&k));
                        prop_assert_eq!(model.len(), capacity);
                    }
                    Err(other) => prop_assert!(false, "unexpected error {:?}", other),
                }
            } else {
                prop_assert_eq!(sut.bucket_remove(start(k), &k), model.remove(&k));
            }

            for (k, v) in &model {
                prop_assert_eq!(sut.bucket_get(start(*k), k), Some(v));
            }
            let live: BTreeSet<u8> = sut.iter().map(|(k, _)| *k).collect();
            prop_assert_eq!(live.len(), sut.len());
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.len() + sut.tombstones() <= capacity);
        }
    }
}
