//! MurmurHash3, 32-bit variant.
//!
//! One-shot, seedable, non-cryptographic. Follows the published
//! algorithm, including the mix of a trailing 1–3 byte tail; keys that
//! differ only in their last few bytes must not collide structurally.
//! All arithmetic is wrapping 32-bit.

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

/// Hash `data` with the given seed.
pub fn hash(data: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        h ^= mix_k(k);
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(0xe6546b64);
    }

    // Tail: remaining 1–3 bytes are assembled little-endian and mixed
    // like a chunk, but not folded with the rotate/multiply step.
    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut k = 0u32;
        for (i, &b) in tail.iter().enumerate() {
            k |= u32::from(b) << (8 * i);
        }
        h ^= mix_k(k);
    }

    h ^= data.len() as u32;
    avalanche(h)
}

#[inline]
fn mix_k(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Final bit scramble so that nearby inputs land far apart.
#[inline]
fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
