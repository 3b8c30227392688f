//! prime-hashmap: a single-threaded, chained hash map with
//! prime-sequenced capacities and pluggable 32-bit hash functions.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build PrimeHashMap out of small, independently testable
//!   layers, leaves first.
//! - Layers:
//!   - sieve: Sieve of Atkin prime enumeration; `next_prime` supplies
//!     every bucket-array capacity the map ever uses.
//!   - murmur3 / xxhash32: pure `(bytes, seed) -> u32` hash functions;
//!     xxhash32 also offers an incremental `Xxh32` state.
//!   - hash32: the `Hash32` trait and the `Murmur3`/`XxHash32` marker
//!     types that plug an algorithm into the map as a type parameter.
//!   - key: the `Key` enum (text / integer / bytes) and its canonical
//!     byte normalization; key identity is the canonical encoding.
//!   - prime_hash_map: the container itself: chaining buckets,
//!     load-factor-driven grow/shrink, full rehash on resize.
//!
//! Constraints
//! - Single-threaded and synchronous: no internal locking, no
//!   suspension points; callers needing sharing wrap the map in their
//!   own lock.
//! - The bucket-array length is prime at all times; resizes move to the
//!   next prime past double (grow) or half (shrink) the capacity and
//!   never below the initial floor prime.
//! - The hash seed is fixed per table; every entry caches its full
//!   32-bit hash so a rehash never re-reads key bytes.
//! - Deterministic: for a fixed seed, bucket placement is a pure
//!   function of the key's canonical bytes.
//!
//! Why prime capacities?
//! - A composite capacity lets keys whose hashes share a stride with a
//!   table factor pile into a fraction of the buckets; a prime modulus
//!   is coprime to every smaller stride, so systematic patterns in
//!   hash output spread out.
//!
//! Notes and non-goals
//! - No persistence, no concurrency, no cryptographic guarantees, no
//!   key ordering.
//! - Lookup misses are `None`, never an error; the key universe is the
//!   closed `Key` enum, so there is no runtime "unsupported key" path.
//! - Public API surface is `PrimeHashMap`, `Config`, `Key`, the
//!   `Hash32` trait with its two algorithms, and the hash/sieve
//!   primitives they are built from.

pub mod hash32;
pub mod key;
pub mod murmur3;
pub mod prime_hash_map;
mod prime_hash_map_proptest;
pub mod sieve;
pub mod xxhash32;

// Public surface
pub use hash32::{Hash32, Murmur3, XxHash32};
pub use key::Key;
pub use prime_hash_map::{Config, Iter, Keys, PrimeHashMap};
pub use sieve::next_prime;
pub use xxhash32::Xxh32;
