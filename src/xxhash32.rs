//! xxHash, 32-bit variant.
//!
//! One-shot `hash` plus a streaming [`Xxh32`] state for callers that
//! receive a key in fragments. Both produce identical output for the
//! same total input: the streaming state buffers up to one 16-byte
//! stripe and only promotes to the four-lane path once a full stripe
//! has been seen, exactly mirroring the one-shot length split.
//! All arithmetic is wrapping 32-bit.

pub const PRIME32_1: u32 = 0x9e3779b1;
pub const PRIME32_2: u32 = 0x85ebca77;
pub const PRIME32_3: u32 = 0xc2b2ae3d;
pub const PRIME32_4: u32 = 0x27d4eb2f;
pub const PRIME32_5: u32 = 0x165667b1;

/// Hash `data` with the given seed.
pub fn hash(data: &[u8], seed: u32) -> u32 {
    let mut rest = data;
    let mut h = if data.len() >= 16 {
        let mut lanes = Lanes::new(seed);
        while rest.len() >= 16 {
            lanes.consume_stripe(rest);
            rest = &rest[16..];
        }
        lanes.converge()
    } else {
        seed.wrapping_add(PRIME32_5)
    };
    h = h.wrapping_add(data.len() as u32);
    finish(h, rest)
}

/// Four interleaved lane accumulators, one 16-byte stripe at a time.
#[derive(Clone, Copy)]
struct Lanes {
    v: [u32; 4],
}

impl Lanes {
    fn new(seed: u32) -> Self {
        Self {
            v: [
                seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
                seed.wrapping_add(PRIME32_2),
                seed,
                seed.wrapping_sub(PRIME32_1),
            ],
        }
    }

    #[inline]
    fn consume_stripe(&mut self, stripe: &[u8]) {
        debug_assert!(stripe.len() >= 16);
        for (lane, word) in self.v.iter_mut().zip(stripe.chunks_exact(4)) {
            let k = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            *lane = lane
                .wrapping_add(k.wrapping_mul(PRIME32_2))
                .rotate_left(13)
                .wrapping_mul(PRIME32_1);
        }
    }

    #[inline]
    fn converge(&self) -> u32 {
        self.v[0]
            .rotate_left(1)
            .wrapping_add(self.v[1].rotate_left(7))
            .wrapping_add(self.v[2].rotate_left(12))
            .wrapping_add(self.v[3].rotate_left(18))
    }
}

/// Fold the sub-stripe remainder (first whole words, then single
/// bytes) and apply the final avalanche.
fn finish(mut h: u32, mut rest: &[u8]) -> u32 {
    while rest.len() >= 4 {
        let k = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
        h = h
            .wrapping_add(k.wrapping_mul(PRIME32_3))
            .rotate_left(17)
            .wrapping_mul(PRIME32_4);
        rest = &rest[4..];
    }
    for &b in rest {
        h = h
            .wrapping_add(u32::from(b).wrapping_mul(PRIME32_5))
            .rotate_left(11)
            .wrapping_mul(PRIME32_1);
    }
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME32_2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME32_3);
    h ^= h >> 16;
    h
}

/// Incremental xxHash32 state: `update` any number of times, then
/// `digest`. The state is reusable only by constructing a fresh one.
#[derive(Clone)]
pub struct Xxh32 {
    seed: u32,
    lanes: Lanes,
    // Pending bytes that do not yet form a full stripe.
    buf: [u8; 16],
    buf_len: usize,
    total_len: u64,
}

impl Xxh32 {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            lanes: Lanes::new(seed),
            buf: [0; 16],
            buf_len: 0,
            total_len: 0,
        }
    }

    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len += data.len() as u64;

        // Top up a partially filled stripe buffer first.
        if self.buf_len > 0 {
            let take = data.len().min(16 - self.buf_len);
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];
            if self.buf_len < 16 {
                return;
            }
            let stripe = self.buf;
            self.lanes.consume_stripe(&stripe);
            self.buf_len = 0;
        }

        while data.len() >= 16 {
            self.lanes.consume_stripe(data);
            data = &data[16..];
        }

        self.buf[..data.len()].copy_from_slice(data);
        self.buf_len = data.len();
    }

    /// Final hash over everything passed to `update` so far.
    pub fn digest(&self) -> u32 {
        // Fewer than 16 bytes total: no stripe was ever consumed, take
        // the short-input path.
        let h = if self.total_len >= 16 {
            self.lanes.converge()
        } else {
            self.seed.wrapping_add(PRIME32_5)
        };
        finish(
            h.wrapping_add(self.total_len as u32),
            &self.buf[..self.buf_len],
        )
    }
}
