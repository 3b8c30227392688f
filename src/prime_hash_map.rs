//! PrimeHashMap: chained buckets, prime capacities, load-factor resizing.

use crate::hash32::{Hash32, Murmur3};
use crate::key::Key;
use crate::sieve::next_prime;
use core::marker::PhantomData;

/// Tuning knobs fixed at construction time.
///
/// The seed feeds every hash computation for the table's lifetime;
/// changing it between inserts and lookups would silently strand
/// previously inserted keys in the wrong buckets, which is why there is
/// no setter.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub seed: u32,
    pub max_load_factor: f64,
    pub min_load_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 42,
            max_load_factor: 0.7,
            min_load_factor: 0.2,
        }
    }
}

#[derive(Debug)]
struct Entry<V> {
    key: Key,
    // Full 32-bit hash, cached so a rehash re-buckets without ever
    // touching key bytes again.
    hash: u32,
    value: V,
}

/// A self-resizing associative container keyed by [`Key`].
///
/// The bucket array length is prime at all times, picked by
/// [`next_prime`]; collisions chain within a bucket and are resolved by
/// linear scan. After every `insert`/`remove` the load factor is pulled
/// back inside `[min_load_factor, max_load_factor]` by a full rehash,
/// except that the table never shrinks below the first prime past its
/// `min_size` (the floor).
pub struct PrimeHashMap<V, H: Hash32 = Murmur3> {
    buckets: Vec<Vec<Entry<V>>>,
    count: usize,
    floor: usize,
    config: Config,
    _hash: PhantomData<H>,
}

impl<V> PrimeHashMap<V> {
    /// Murmur3-hashed map with the default [`Config`].
    pub fn new(min_size: usize) -> Self {
        Self::with_config(min_size, Config::default())
    }
}

impl<V, H: Hash32> PrimeHashMap<V, H> {
    /// Default [`Config`], hash algorithm chosen by the `H` parameter.
    pub fn with_hasher(min_size: usize) -> Self {
        Self::with_config(min_size, Config::default())
    }

    pub fn with_config(min_size: usize, config: Config) -> Self {
        debug_assert!(
            0.0 < config.min_load_factor && config.min_load_factor < config.max_load_factor,
            "load factor band must satisfy 0 < min < max"
        );
        // Smallest prime strictly greater than min_size; this is also
        // the shrink floor.
        let capacity = next_prime(min_size);
        Self {
            buckets: empty_buckets(capacity),
            count: 0,
            floor: capacity,
            config,
            _hash: PhantomData,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current bucket-array length. Prime at all times.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    fn bucket_index(&self, key: &Key) -> usize {
        let hash = H::hash(&key.normalized(), self.config.seed);
        hash as usize % self.buckets.len()
    }

    /// Insert or overwrite. Returns the value the key previously held,
    /// if any; a replacement leaves `len` unchanged (last write wins).
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        let hash = H::hash(&key.normalized(), self.config.seed);
        let index = hash as usize % self.buckets.len();
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            return Some(core::mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, hash, value });
        self.count += 1;
        self.rebalance();
        None
    }

    /// Value stored under `key`, or `None`. Absence is an expected
    /// condition, not an error.
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        let key = key.into();
        self.buckets[self.bucket_index(&key)]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut V> {
        let key = key.into();
        let idx = self.bucket_index(&key);
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value if present.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<V> {
        let key = key.into();
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|e| e.key == key)?;
        // Order within a bucket only affects scan cost; swap_remove is
        // fine.
        let entry = bucket.swap_remove(pos);
        self.count -= 1;
        self.rebalance();
        Some(entry.value)
    }

    /// Lazy iterator over every stored key, in bucket order. The `&self`
    /// borrow keeps the table unmodified for the iterator's lifetime,
    /// so the sequence is a consistent snapshot.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Lazy iterator over `(&Key, &V)` pairs, in bucket order.
    pub fn iter(&self) -> Iter<'_, V> {
        let mut outer = self.buckets.iter();
        let inner = outer.next().map(|b| b.iter()).unwrap_or_default();
        Iter { outer, inner }
    }

    /// Pull the load factor back inside the configured band. Called
    /// after every mutation; at most one rehash per call.
    fn rebalance(&mut self) {
        let load = self.load_factor();
        if load > self.config.max_load_factor {
            self.rehash(next_prime(2 * self.buckets.len()));
        } else if load < self.config.min_load_factor && self.buckets.len() > self.floor {
            let target = next_prime(self.buckets.len() / 2).max(self.floor);
            self.rehash(target);
        }
    }

    /// Rebuild the bucket array at `new_capacity`, re-bucketing every
    /// entry by its cached hash. Moves entries without re-normalizing
    /// or re-hashing keys, and never re-enters the resize policy.
    fn rehash(&mut self, new_capacity: usize) {
        let old = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for entry in old.into_iter().flatten() {
            self.buckets[entry.hash as usize % new_capacity].push(entry);
        }
    }
}

fn empty_buckets<V>(capacity: usize) -> Vec<Vec<Entry<V>>> {
    core::iter::repeat_with(Vec::new).take(capacity).collect()
}

/// Iterator over immutable entries in a [`PrimeHashMap`].
pub struct Iter<'a, V> {
    outer: core::slice::Iter<'a, Vec<Entry<V>>>,
    inner: core::slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.inner.next() {
                return Some((&e.key, &e.value));
            }
            self.inner = self.outer.next()?.iter();
        }
    }
}

/// Iterator over the keys of a [`PrimeHashMap`].
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}
