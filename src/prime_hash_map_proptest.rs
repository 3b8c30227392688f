#![cfg(test)]

// Property tests for PrimeHashMap kept inside the crate so they can
// assert structural invariants (capacity primality, load-factor band)
// alongside the behavioral model check.

use crate::hash32::{Murmur3, XxHash32};
use crate::key::Key;
use crate::prime_hash_map::PrimeHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to
// earlier keys, the pool shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Keys,
}

// Keys of all three kinds, including pairs that collide across kinds
// ("a" vs b"a") so the canonical-encoding identity is exercised.
fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-c]{0,4}".prop_map(Key::from),
        (0u64..500).prop_map(Key::from),
        proptest::collection::vec(any::<u8>(), 0..4).prop_map(Key::from),
    ]
}

fn arb_scenario() -> impl Strategy<Value = (Vec<Key>, Vec<OpI>)> {
    proptest::collection::vec(arb_key(), 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            Just(OpI::Keys),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn is_prime(n: usize) -> bool {
    n >= 2 && (2..=n.isqrt()).all(|d| n % d != 0)
}

fn run_state_machine<H: crate::hash32::Hash32>(
    pool: Vec<Key>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut sut: PrimeHashMap<i32, H> = PrimeHashMap::with_hasher(10);
    let floor = sut.capacity();
    // The model keys on canonical bytes, the same identity the map uses.
    let mut model: HashMap<Vec<u8>, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = pool[i].clone();
                let canonical = k.normalized().into_owned();
                let displaced = sut.insert(k, v);
                let model_prev = model.insert(canonical, v);
                prop_assert_eq!(displaced, model_prev, "insert must report the displaced value");
            }
            OpI::Remove(i) => {
                let k = pool[i].clone();
                let canonical = k.normalized().into_owned();
                prop_assert_eq!(sut.remove(k), model.remove(&canonical));
            }
            OpI::Get(i) => {
                let k = pool[i].clone();
                let canonical = k.normalized().into_owned();
                prop_assert_eq!(sut.get(k), model.get(&canonical));
            }
            OpI::Keys => {
                let mut seen: Vec<Vec<u8>> =
                    sut.keys().map(|k| k.normalized().into_owned()).collect();
                seen.sort();
                prop_assert!(
                    seen.windows(2).all(|w| w[0] != w[1]),
                    "keys() must not repeat a key"
                );
                let mut expected: Vec<Vec<u8>> = model.keys().cloned().collect();
                expected.sort();
                prop_assert_eq!(seen, expected);
            }
        }

        // Structural invariants after every operation.
        prop_assert_eq!(sut.len(), model.len());
        prop_assert!(is_prime(sut.capacity()), "capacity {} not prime", sut.capacity());
        prop_assert!(sut.capacity() >= floor, "capacity fell below the floor");
        let load = sut.load_factor();
        prop_assert!(load <= 0.7, "load {} above max", load);
        if sut.capacity() > floor {
            prop_assert!(load >= 0.2, "load {} below min off the floor", load);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    // Property: state-machine equivalence against std HashMap keyed by
    // canonical bytes, plus primality / floor / load-band invariants
    // after every operation, under both hash algorithms.
    #[test]
    fn prop_state_machine_murmur3((pool, ops) in arb_scenario()) {
        run_state_machine::<Murmur3>(pool, ops)?;
    }

    #[test]
    fn prop_state_machine_xxhash32((pool, ops) in arb_scenario()) {
        run_state_machine::<XxHash32>(pool, ops)?;
    }

    // Property: hashing is deterministic and stable across calls for
    // both algorithms and any seed.
    #[test]
    fn prop_hash_determinism(data in proptest::collection::vec(any::<u8>(), 0..64), seed in any::<u32>()) {
        prop_assert_eq!(crate::murmur3::hash(&data, seed), crate::murmur3::hash(&data, seed));
        prop_assert_eq!(crate::xxhash32::hash(&data, seed), crate::xxhash32::hash(&data, seed));
    }

    // Property: streaming xxHash32 agrees with the one-shot function no
    // matter how the input is fragmented.
    #[test]
    fn prop_xxh32_streaming_equivalence(
        chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..40), 0..6),
        seed in any::<u32>(),
    ) {
        let whole: Vec<u8> = chunks.concat();
        let mut state = crate::xxhash32::Xxh32::new(seed);
        for chunk in &chunks {
            state.update(chunk);
        }
        prop_assert_eq!(state.digest(), crate::xxhash32::hash(&whole, seed));
    }
}
