// PrimeHashMap integration test suite.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Capacity: the bucket-array length is prime at all times and never
//   drops below the floor, the first prime past the requested min_size.
// - Identity: two keys are the same iff their canonical byte encodings
//   are identical, across key kinds.
// - Update: inserting an existing key replaces in place; len is
//   unchanged and the last write wins.
// - Resizing: grow/shrink rehashes preserve every stored entry.
// - Lookup: absence is None, never an error.
use prime_hashmap::{Config, Key, Murmur3, PrimeHashMap, XxHash32};

fn is_prime(n: usize) -> bool {
    n >= 2 && (2..=n.isqrt()).all(|d| n % d != 0)
}

// Test: the min_size=10 sizing walk-through.
// Verifies: new(10) rounds to capacity 11; eight inserts push the load
// factor to 8/11 ≈ 0.73 > 0.7, growing to the next prime ≥ 22 (23);
// all eight keys remain retrievable afterward.
#[test]
fn grow_scenario_from_min_size_10() {
    let mut m = PrimeHashMap::new(10);
    assert_eq!(m.capacity(), 11);

    for i in 1u64..=8 {
        m.insert(i, format!("record-{i}"));
    }

    assert_eq!(m.capacity(), 23);
    assert_eq!(m.len(), 8);
    for i in 1u64..=8 {
        assert_eq!(m.get(i), Some(&format!("record-{i}")));
    }
}

// Test: construction rounding is strictly greater.
// Verifies: a prime min_size still advances to the following prime
// (11 → 13), and that prime is the shrink floor a drained table
// returns to.
#[test]
fn prime_min_size_still_advances() {
    let mut m = PrimeHashMap::new(11);
    assert_eq!(m.capacity(), 13);

    for i in 0u64..60 {
        m.insert(i, ());
    }
    assert!(m.capacity() > 13);

    for i in 0u64..60 {
        m.remove(i);
    }
    assert!(m.is_empty());
    assert_eq!(m.capacity(), 13);
}

// Test: round-trip across all three key kinds.
// Verifies: lookup immediately after insert returns the value, for
// text, integer, and byte-sequence keys.
#[test]
fn round_trip_all_key_kinds() {
    let mut m = PrimeHashMap::new(10);
    m.insert("package-17", 17);
    m.insert(9000u64, 9000);
    m.insert(vec![0xde, 0xad, 0xbe, 0xef], -1);

    assert_eq!(m.get("package-17"), Some(&17));
    assert_eq!(m.get(9000u64), Some(&9000));
    assert_eq!(m.get(vec![0xde, 0xad, 0xbe, 0xef]), Some(&-1));
    assert_eq!(m.get("missing"), None);
}

// Test: last write wins.
// Verifies: re-inserting a key leaves len unchanged, returns the
// displaced value, and lookup sees the newest value.
#[test]
fn update_semantics() {
    let mut m = PrimeHashMap::new(10);
    assert_eq!(m.insert("id", "first"), None);
    assert_eq!(m.insert("id", "second"), Some("first"));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("id"), Some(&"second"));
}

// Test: a grow-heavy workload keeps every entry reachable.
// Verifies: after many resizes, each of 10_000 keys still maps to its
// value and the capacity is prime.
#[test]
fn mass_insert_survives_many_resizes() {
    let mut m = PrimeHashMap::new(10);
    for i in 0u64..10_000 {
        m.insert(i, i.wrapping_mul(31));
    }
    assert_eq!(m.len(), 10_000);
    assert!(is_prime(m.capacity()), "capacity {}", m.capacity());
    for i in 0u64..10_000 {
        assert_eq!(m.get(i), Some(&i.wrapping_mul(31)), "key {i}");
    }
}

// Test: shrink path and the floor rule.
// Verifies: draining a grown table walks capacity back down through
// primes but stops at the floor (11 for min_size 10), even at load 0.
#[test]
fn drain_shrinks_to_floor_and_stops() {
    let mut m = PrimeHashMap::new(10);
    for i in 0u64..200 {
        m.insert(i, ());
    }
    let grown = m.capacity();
    assert!(grown > 11);

    for i in 0u64..200 {
        m.remove(i);
        assert!(is_prime(m.capacity()));
        assert!(m.capacity() >= 11);
    }
    assert!(m.is_empty());
    assert_eq!(m.capacity(), 11);
}

// Test: load-factor band.
// Verifies: after every insert the load factor is ≤ 0.7, and ≥ 0.2
// whenever the table has left its floor capacity.
#[test]
fn load_factor_band_after_every_insert() {
    let mut m = PrimeHashMap::new(10);
    for i in 0u64..1_000 {
        m.insert(i, ());
        let load = m.load_factor();
        assert!(load <= 0.7, "load {load} after {i}");
        if m.capacity() > 11 {
            assert!(load >= 0.2, "load {load} after {i}");
        }
    }
}

// Test: key identity crosses kinds.
// Verifies: a text key and a byte key with identical canonical
// encodings address the same entry.
#[test]
fn cross_kind_key_identity() {
    let mut m = PrimeHashMap::new(10);
    m.insert("route", 1);
    assert_eq!(m.get(&b"route"[..]), Some(&1));
    assert_eq!(m.insert(&b"route"[..], 2), Some(1));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("route"), Some(&2));
}

// Test: keys() is a complete, duplicate-free snapshot.
// Verifies: the iterator yields exactly the live key set; exhausting it
// and calling keys() again restarts from the top.
#[test]
fn keys_iterator_is_complete_and_restartable() {
    let mut m = PrimeHashMap::new(10);
    for i in 0u64..64 {
        m.insert(i, ());
    }
    m.remove(63u64);

    let collect_sorted = |m: &PrimeHashMap<()>| {
        let mut v: Vec<u64> = m
            .keys()
            .map(|k| match k {
                Key::Int(n) => *n,
                other => panic!("unexpected key {other:?}"),
            })
            .collect();
        v.sort_unstable();
        v
    };

    let expected: Vec<u64> = (0u64..63).collect();
    assert_eq!(collect_sorted(&m), expected);
    // A fresh call restarts the sequence.
    assert_eq!(collect_sorted(&m), expected);
}

// Test: the xxHash32-backed table honors the same contract.
// Verifies: identical workload behaves identically modulo bucket
// placement; both algorithms may be run against one data set.
#[test]
fn xxhash_table_contract_parity() {
    let mut a: PrimeHashMap<u64, Murmur3> = PrimeHashMap::with_hasher(10);
    let mut b: PrimeHashMap<u64, XxHash32> = PrimeHashMap::with_hasher(10);
    for i in 0u64..500 {
        a.insert(i, i);
        b.insert(i, i);
    }
    assert_eq!(a.len(), b.len());
    for i in 0u64..500 {
        assert_eq!(a.get(i), b.get(i));
    }
    assert!(is_prime(a.capacity()) && is_prime(b.capacity()));
}

// Test: a custom seed produces a working table.
// Verifies: the seed only changes bucket placement; the contract holds
// with any stable seed fixed at construction.
#[test]
fn custom_seed_round_trips() {
    let config = Config {
        seed: 0xdead_beef,
        ..Config::default()
    };
    let mut m: PrimeHashMap<&str, Murmur3> = PrimeHashMap::with_config(50, config);
    assert_eq!(m.capacity(), 53);
    m.insert("a", "alpha");
    m.insert("b", "beta");
    assert_eq!(m.get("a"), Some(&"alpha"));
    assert_eq!(m.get("b"), Some(&"beta"));
    assert_eq!(m.remove("a"), Some("alpha"));
    assert_eq!(m.get("a"), None);
}
