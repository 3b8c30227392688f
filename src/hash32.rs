//! Hash algorithm selection.
//!
//! The map is generic over a stateless 32-bit hash function, chosen as
//! a type parameter at construction time. Both shipped algorithms are
//! zero-sized markers; swapping one for the other changes bucket
//! placement but nothing about the map's contract.

/// A seedable, deterministic 32-bit hash over a byte string.
///
/// Implementations must be pure: equal `(data, seed)` pairs always
/// produce equal output, across calls and across processes.
pub trait Hash32 {
    fn hash(data: &[u8], seed: u32) -> u32;
}

/// MurmurHash3-32 (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3;

impl Hash32 for Murmur3 {
    #[inline]
    fn hash(data: &[u8], seed: u32) -> u32 {
        crate::murmur3::hash(data, seed)
    }
}

/// xxHash32.
#[derive(Debug, Clone, Copy, Default)]
pub struct XxHash32;

impl Hash32 for XxHash32 {
    #[inline]
    fn hash(data: &[u8], seed: u32) -> u32 {
        crate::xxhash32::hash(data, seed)
    }
}
