// Property tests for the hash/equality contract and the table, kept inside
// the crate in their own module rather than spread over the unit test mods.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::HashTable;
use crate::StructuralEq;
use crate::StructuralHash;
use crate::Value;
use crate::hash_table::MIN_CAPACITY;

const SEEDS: [u64; 3] = [0, 1, 0x9e37_79b9];

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Absent),
        any::<bool>().prop_map(Value::Bool),
        (-1000i32..1000).prop_map(|n| Value::Number(n.into())),
        any::<i64>().prop_map(|n| Value::BigInt(n.into())),
        "[a-z]{0,6}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Record),
        ]
    })
}

proptest! {
    // Hash/equality contract: a value is structurally equal to its clone
    // and the two hash identically under every seed.
    #[test]
    fn prop_clone_is_equal_and_hash_consistent(value in arb_value()) {
        let copy = value.clone();
        prop_assert!(value.structural_eq(&copy));
        for seed in SEEDS {
            prop_assert_eq!(value.structural_hash(seed), copy.structural_hash(seed));
        }
    }

    // The implication direction of the contract over arbitrary pairs:
    // equal values never hash differently. (Unequal pairs may collide.)
    #[test]
    fn prop_equal_implies_same_hash(a in arb_value(), b in arb_value()) {
        if a.structural_eq(&b) {
            for seed in SEEDS {
                prop_assert_eq!(a.structural_hash(seed), b.structural_hash(seed));
            }
        }
        // Symmetry holds regardless.
        prop_assert_eq!(a.structural_eq(&b), b.structural_eq(&a));
    }

    #[test]
    fn prop_hash_is_stable_across_calls(value in arb_value(), seed in any::<u64>()) {
        prop_assert_eq!(value.structural_hash(seed), value.structural_hash(seed));
    }

    // Composite keys round-trip through the table: after inserting each key
    // with its position, lookup returns the position of the last equal key.
    #[test]
    fn prop_table_finds_every_composite_key(keys in proptest::collection::vec(arb_value(), 1..12)) {
        let mut table = HashTable::new();
        for (i, key) in keys.iter().enumerate() {
            table.insert(key.clone(), i);
        }

        let mut distinct = 0;
        for (i, key) in keys.iter().enumerate() {
            if !keys[..i].iter().any(|earlier| earlier.structural_eq(key)) {
                distinct += 1;
            }
            let last = keys
                .iter()
                .rposition(|k| k.structural_eq(key))
                .unwrap();
            prop_assert_eq!(table.get(key), Some(&last));
        }
        prop_assert_eq!(table.len(), distinct);
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,3}", 1..=8).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            idx.clone().prop_map(Op::Remove),
            idx.prop_map(Op::Get),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    // State-machine equivalence against std::collections::HashMap: insert,
    // remove, and lookup results and the length agree after every
    // operation, whatever resizes happen along the way.
    #[test]
    fn prop_table_matches_model((pool, ops) in arb_scenario()) {
        let mut table: HashTable<String, i32> = HashTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let key = pool[i].clone();
                    prop_assert_eq!(table.insert(key.clone(), v), model.insert(key, v));
                }
                Op::Remove(i) => {
                    prop_assert_eq!(table.remove(&pool[i]), model.remove(&pool[i]));
                }
                Op::Get(i) => {
                    prop_assert_eq!(table.get(&pool[i]), model.get(&pool[i]));
                }
            }
            prop_assert_eq!(table.len(), model.len());
        }

        for key in &pool {
            prop_assert_eq!(table.get(key), model.get(key));
        }
        prop_assert!(table.capacity() >= MIN_CAPACITY);
    }
}
