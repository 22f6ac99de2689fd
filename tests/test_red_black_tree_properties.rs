use std::collections::BTreeMap;

use llrb_collections::red_black_tree::{Error, RedBlackMap};
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn key_strategy() -> impl Strategy<Value = i32> {
    // A range smaller than TEST_SIZE forces repeated keys.
    -500i32..500i32
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i32, i32),
    Remove(i32),
    RemoveMin,
    RemoveMax,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), any::<i32>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        1 => Just(MapOp::RemoveMin),
        1 => Just(MapOp::RemoveMax),
    ]
}

fn apply(map: &mut RedBlackMap<i32, i32>, expected: &mut BTreeMap<i32, i32>, op: &MapOp) {
    match *op {
        MapOp::Insert(key, value) => {
            let old = expected.insert(key, value).map(|old| (key, old));
            assert_eq!(map.insert(key, value), old);
        },
        MapOp::Remove(key) => {
            let removed = if expected.is_empty() {
                Err(Error::Underflow)
            } else {
                Ok(expected.remove(&key).map(|value| (key, value)))
            };
            assert_eq!(map.remove(&key), removed);
        },
        MapOp::RemoveMin => {
            let key = expected.keys().next().cloned();
            let removed = match key {
                Some(key) => Ok((key, expected.remove(&key).unwrap())),
                None => Err(Error::Underflow),
            };
            assert_eq!(map.remove_min(), removed);
        },
        MapOp::RemoveMax => {
            let key = expected.keys().next_back().cloned();
            let removed = match key {
                Some(key) => Ok((key, expected.remove(&key).unwrap())),
                None => Err(Error::Underflow),
            };
            assert_eq!(map.remove_max(), removed);
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random sequence of mutations on both RedBlackMap and BTreeMap and checks that
    /// the tree invariants hold after the sequence.
    #[test]
    fn mutations_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map = RedBlackMap::new();
        let mut expected = BTreeMap::new();

        for (index, op) in ops.iter().enumerate() {
            apply(&mut map, &mut expected, op);
            prop_assert_eq!(map.len(), expected.len());
            if index % 250 == 0 {
                prop_assert_eq!(map.check(), Ok(()));
            }
        }

        prop_assert_eq!(map.check(), Ok(()));
        prop_assert_eq!(
            map.iter().collect::<Vec<(&i32, &i32)>>(),
            expected.iter().collect::<Vec<(&i32, &i32)>>()
        );
    }

    /// In-order traversal is strictly increasing after any sequence of insertions.
    #[test]
    fn keys_strictly_increase(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let map: RedBlackMap<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        let sorted = map.keys().cloned().collect::<Vec<i32>>();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(map.check(), Ok(()));
    }

    /// `rank` and `select` are inverses for every position and every present key.
    #[test]
    fn rank_select_round_trip(keys in proptest::collection::vec(key_strategy(), 1..TEST_SIZE)) {
        let map: RedBlackMap<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        for index in 0..map.len() {
            let key = map.select(index).unwrap();
            prop_assert_eq!(map.rank(key), index);
        }
        for key in &keys {
            prop_assert_eq!(map.select(map.rank(key)), Ok(key));
        }
    }

    /// Removing a key makes it absent and shrinks the map by exactly one, while removing an
    /// absent key changes nothing.
    #[test]
    fn remove_shrinks_by_one(
        keys in proptest::collection::vec(key_strategy(), 1..TEST_SIZE),
        key in key_strategy(),
    ) {
        let mut map: RedBlackMap<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        let len = map.len();
        let was_present = map.contains_key(&key);

        let removed = map.remove(&key);
        prop_assert_eq!(removed.map(|pair| pair.is_some()), Ok(was_present));
        prop_assert!(!map.contains_key(&key));
        prop_assert_eq!(map.len(), if was_present { len - 1 } else { len });
        prop_assert_eq!(map.check(), Ok(()));
    }

    /// Range counting and range iteration agree with BTreeMap.
    #[test]
    fn ranges_match_btreemap(
        keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE),
        lo in key_strategy(),
        hi in key_strategy(),
    ) {
        let map: RedBlackMap<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        let expected: BTreeMap<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        let expected_keys = if lo <= hi {
            expected.range(lo..=hi).map(|pair| *pair.0).collect::<Vec<i32>>()
        } else {
            Vec::new()
        };

        prop_assert_eq!(map.range_len(&lo, &hi), expected_keys.len());
        prop_assert_eq!(map.range_keys(&lo, &hi).cloned().collect::<Vec<i32>>(), expected_keys);
    }
}
