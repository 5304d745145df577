use std::collections::BTreeMap;

use proptest::prelude::*;
use rubra::Map;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_048;

/// Generates keys in a range narrow enough to force collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

/// Builds a model with the same insertion policy as `Map::from_iter`: the
/// first value seen for a key wins. A plain `collect()` on `BTreeMap` keeps
/// the last value instead, so it cannot serve as the oracle here.
fn first_wins(entries: &[(i64, u32)]) -> BTreeMap<i64, u32> {
    let mut model = BTreeMap::new();
    for &(k, v) in entries {
        model.entry(k).or_insert(v);
    }
    model
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, u32),
    InsertOrAssign(i64, u32),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    First,
    Last,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        4 => (key_strategy(), any::<u32>()).prop_map(|(k, v)| MapOp::InsertOrAssign(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        2 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => Just(MapOp::First),
        1 => Just(MapOp::Last),
    ]
}

// ─── Core operations replayed against BTreeMap ───────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence on both Map and BTreeMap and
    /// asserts identical results at every step. `insert` never overwrites, so
    /// the model counterpart is `entry(k).or_insert(v)`.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: Map<i64, u32> = Map::new();
        let mut model: BTreeMap<i64, u32> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let inserted = map.insert(*k, *v);
                    let was_vacant = !model.contains_key(k);
                    model.entry(*k).or_insert(*v);
                    prop_assert_eq!(inserted, was_vacant, "insert({}, {})", k, v);
                }
                MapOp::InsertOrAssign(k, v) => {
                    let inserted = map.insert_or_assign(*k, *v);
                    let old = model.insert(*k, *v);
                    prop_assert_eq!(inserted, old.is_none(), "insert_or_assign({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(k), model.remove(k), "remove({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(map.get(k), model.get(k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(map.contains_key(k), model.contains_key(k), "contains_key({})", k);
                }
                MapOp::First => {
                    prop_assert_eq!(map.first_key_value(), model.first_key_value(), "first_key_value()");
                }
                MapOp::Last => {
                    prop_assert_eq!(map.last_key_value(), model.last_key_value(), "last_key_value()");
                }
            }
            prop_assert_eq!(map.len(), model.len(), "len mismatch after {:?}", op);
        }

        let items: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<_> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(items, expected, "final content mismatch");
    }

    /// Iteration order and the keys/values projections match BTreeMap.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), any::<u32>()), TEST_SIZE)) {
        let map: Map<i64, u32> = entries.iter().copied().collect();
        let model = first_wins(&entries);

        let keys: Vec<_> = map.keys().copied().collect();
        let expected_keys: Vec<_> = model.keys().copied().collect();
        prop_assert_eq!(&keys, &expected_keys, "keys() mismatch");

        let values: Vec<_> = map.values().copied().collect();
        let expected_values: Vec<_> = model.values().copied().collect();
        prop_assert_eq!(&values, &expected_values, "values() mismatch");

        let rev: Vec<_> = map.iter().rev().map(|(k, _)| *k).collect();
        let expected_rev: Vec<_> = model.iter().rev().map(|(k, _)| *k).collect();
        prop_assert_eq!(&rev, &expected_rev, "iter().rev() mismatch");

        let rev_keys: Vec<_> = map.keys().rev().copied().collect();
        let expected_rev_keys: Vec<_> = model.keys().rev().copied().collect();
        prop_assert_eq!(&rev_keys, &expected_rev_keys, "keys().rev() mismatch");

        let rev_values: Vec<_> = map.values().rev().copied().collect();
        let expected_rev_values: Vec<_> = model.values().rev().copied().collect();
        prop_assert_eq!(&rev_values, &expected_rev_values, "values().rev() mismatch");

        let into: Vec<_> = map.clone().into_iter().collect();
        let expected_into: Vec<_> = model.clone().into_iter().collect();
        prop_assert_eq!(&into, &expected_into, "into_iter() mismatch");
    }

    /// The entry API agrees with BTreeMap's for the or_insert family.
    #[test]
    fn entry_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), any::<u32>()), TEST_SIZE / 4),
    ) {
        let mut map: Map<i64, u32> = Map::new();
        let mut model: BTreeMap<i64, u32> = BTreeMap::new();

        for &(k, v) in &entries {
            let mine = *map.entry(k).and_modify(|old| *old = old.wrapping_add(1)).or_insert(v);
            let theirs = *model.entry(k).and_modify(|old| *old = old.wrapping_add(1)).or_insert(v);
            prop_assert_eq!(mine, theirs, "entry({}).and_modify().or_insert({})", k, v);
        }

        let items: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<_> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(items, expected, "entry API content mismatch");
    }

    /// get_mut writes are visible through subsequent reads.
    #[test]
    fn get_mut_writes_are_visible(entries in proptest::collection::vec((key_strategy(), any::<u32>()), 1..256)) {
        let mut map: Map<i64, u32> = entries.iter().copied().collect();
        let mut model = first_wins(&entries);

        for &(k, _) in &entries {
            if let Some(v) = map.get_mut(&k) {
                *v = v.wrapping_mul(3);
            }
            if let Some(v) = model.get_mut(&k) {
                *v = v.wrapping_mul(3);
            }
        }

        let items: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<_> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(items, expected, "get_mut content mismatch");
    }

    /// merge moves only the entries whose keys are absent from the
    /// destination; colliding keys stay in the source with their values.
    #[test]
    fn merge_moves_only_new_keys(
        entries_a in proptest::collection::vec((key_strategy(), any::<u32>()), TEST_SIZE / 4),
        entries_b in proptest::collection::vec((key_strategy(), any::<u32>()), TEST_SIZE / 4),
    ) {
        let mut dst: Map<i64, u32> = entries_a.iter().copied().collect();
        let mut src: Map<i64, u32> = entries_b.iter().copied().collect();
        let model_a = first_wins(&entries_a);
        let model_b = first_wins(&entries_b);

        dst.merge(&mut src);

        let mut expected_dst = model_a.clone();
        let mut expected_src = BTreeMap::new();
        for (k, v) in model_b {
            if model_a.contains_key(&k) {
                expected_src.insert(k, v);
            } else {
                expected_dst.insert(k, v);
            }
        }

        let merged: Vec<_> = dst.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<_> = expected_dst.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(merged, expected, "merged content mismatch");

        let leftover: Vec<_> = src.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<_> = expected_src.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(leftover, expected, "leftover content mismatch");
    }

    /// A clone is an independent deep copy.
    #[test]
    fn clone_is_independent(entries in proptest::collection::vec((key_strategy(), any::<u32>()), 1..TEST_SIZE)) {
        let original: Map<i64, u32> = entries.iter().copied().collect();
        let mut copy = original.clone();

        let before: Vec<_> = original.iter().map(|(k, v)| (*k, *v)).collect();
        for (k, _) in &entries {
            if let Some(v) = copy.get_mut(k) {
                *v = v.wrapping_add(1);
            }
        }
        copy.clear();

        let after: Vec<_> = original.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(before, after, "mutating the clone leaked into the original");
    }
}

// ─── Deterministic scenarios ─────────────────────────────────────────────────

/// insert keeps the first value for a key; insert_or_assign overwrites it.
#[test]
fn insert_versus_insert_or_assign() {
    let mut map = Map::new();

    assert!(map.insert(5, "a"));
    assert!(!map.insert(5, "b"));
    assert_eq!(map[5], "a");

    assert!(!map.insert_or_assign(5, "c"));
    assert_eq!(map[5], "c");

    assert!(map.insert_or_assign(6, "d"));
    assert_eq!(map.len(), 2);
}

/// Collecting duplicate keys goes through insert, so the first value for each
/// key survives and later ones are dropped.
#[test]
fn from_iter_keeps_first_value_per_key() {
    let map: Map<i32, &str> = [(1, "a"), (2, "b"), (1, "c"), (2, "d"), (3, "e")]
        .into_iter()
        .collect();

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&1), Some(&"a"));
    assert_eq!(map.get(&2), Some(&"b"));
    assert_eq!(map.get(&3), Some(&"e"));
}

/// entry().or_default() inserts a default value for a missing key and leaves
/// an existing value alone.
#[test]
fn entry_or_default() {
    let mut tally: Map<&str, u32> = Map::new();
    for word in ["red", "blue", "red", "red"] {
        *tally.entry(word).or_default() += 1;
    }

    assert_eq!(tally["red"], 3);
    assert_eq!(tally["blue"], 1);
    assert_eq!(tally.len(), 2);
}

/// OccupiedEntry exposes removal and in-place replacement.
#[test]
fn occupied_entry_insert_and_remove() {
    use rubra::map::Entry;

    let mut map = Map::from([(1, "one"), (2, "two")]);

    match map.entry(1) {
        Entry::Occupied(mut occupied) => {
            assert_eq!(occupied.insert("uno"), "one");
            assert_eq!(occupied.get(), &"uno");
        }
        Entry::Vacant(_) => panic!("key 1 should be occupied"),
    }

    match map.entry(2) {
        Entry::Occupied(occupied) => assert_eq!(occupied.remove(), "two"),
        Entry::Vacant(_) => panic!("key 2 should be occupied"),
    }

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Some(&"uno"));
    assert_eq!(map.get(&2), None);
}

/// Borrowed lookups work through `Borrow`, e.g. `&str` against `String`.
#[test]
fn borrowed_key_lookups() {
    let map: Map<String, u32> = [("one", 1), ("two", 2)]
        .into_iter()
        .map(|(k, v)| (String::from(k), v))
        .collect();

    assert_eq!(map.get("two"), Some(&2));
    assert!(map.contains_key("one"));
    assert!(!map.contains_key("three"));
}

/// Indexing a missing key panics, matching the map indexing convention.
#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let map: Map<i32, &str> = Map::from([(1, "one")]);
    let _ = map[2];
}

/// get_key_value returns the stored key alongside the value.
#[test]
fn get_key_value_returns_stored_key() {
    let map = Map::from([(10, "ten")]);
    assert_eq!(map.get_key_value(&10), Some((&10, &"ten")));
    assert_eq!(map.get_key_value(&11), None);
}
