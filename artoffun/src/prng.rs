//! Pseudo-random number generators.
//!
//! Each generator is a small struct owning its state; the free
//! `xorshift64` family threads the state through a `&mut u64` because
//! the shuffle and ranged-draw helpers share it.

use sha1::{Digest, Sha1};

/// Microsecond-resolution wall-clock seed.
pub fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d
            .as_secs()
            .wrapping_mul(1_000_000)
            .wrapping_add(u64::from(d.subsec_micros())),
        Err(_) => 0x9e37_79b9_7f4a_7c15,
    }
}

/// One xorshift64 step; `state` must be non-zero.
pub fn xorshift64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

/// Draw from `min..=max` using xorshift64.
pub fn rand_range(state: &mut u64, min: u64, max: u64) -> u64 {
    min + xorshift64(state) % (max - min + 1)
}

/// Draw a double in `[0, 1)` using the top 53 bits of xorshift64.
pub fn rand_double(state: &mut u64) -> f64 {
    (xorshift64(state) >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Lehmer (multiplicative congruential) generator on 128-bit state.
pub struct Lehmer64 {
    state: u128,
}

impl Lehmer64 {
    const MULTIPLIER: u64 = 0xda94_2042_e4dd_58b5;

    pub fn new(seed: u64) -> Self {
        Lehmer64 {
            state: u128::from(seed),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(u128::from(Self::MULTIPLIER));
        (self.state >> 64) as u64
    }
}

/// xoshiro256++ with splitmix64 state expansion.
pub struct Xoshiro256pp {
    s: [u64; 4],
}

impl Xoshiro256pp {
    pub fn new(seed: u64) -> Self {
        let mut tmp = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            tmp ^= tmp >> 30;
            tmp = tmp.wrapping_mul(0xbf58_476d_1ce4_e5b9);
            tmp ^= tmp >> 27;
            tmp = tmp.wrapping_mul(0x94d0_49bb_1331_11eb);
            tmp ^= tmp >> 31;
            *slot = tmp;
        }
        Xoshiro256pp { s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.s;
        let result = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);

        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }
}

/// PCG32 (XSH RR variant).
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new(state: u64, inc: u64) -> Self {
        Pcg32 { state, inc }
    }

    pub fn next_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(self.inc | 1);
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27) as u32;
        let rot = (oldstate >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

/// wyrand: one Weyl step plus a 128-bit multiply fold.
pub struct Wyrand {
    seed: u64,
}

impl Wyrand {
    pub fn new(seed: u64) -> Self {
        Wyrand { seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.seed = self.seed.wrapping_add(0xa076_1d64_78bd_642f);
        let t = u128::from(self.seed ^ 0xe703_7ed1_a0b4_28db).wrapping_mul(u128::from(self.seed));
        (t >> 64) as u64 ^ t as u64
    }
}

/// Middle-square Weyl sequence generator.
pub struct Msws32 {
    x: u64,
    w: u64,
    s: u64,
}

impl Msws32 {
    pub fn new(seed: u64) -> Self {
        Msws32 {
            x: seed,
            w: seed,
            s: 0xb5ad_4ece_da1c_e2a9,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(self.x);
        self.w = self.w.wrapping_add(self.s);
        self.x = self.x.wrapping_add(self.w);
        self.x = self.x.rotate_right(32);
        self.x as u32
    }
}

/// RomuDuo: multiply on one word, rotations on the other.
pub struct RomuDuo {
    x: u64,
    y: u64,
}

impl RomuDuo {
    pub fn new(seed: u64) -> Self {
        // Two splitmix64 steps so the state is never all-zero.
        let mut tmp = seed;
        let mut word = || {
            tmp = tmp.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = tmp;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        };
        RomuDuo {
            x: word(),
            y: word() | 1,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let xp = self.x;
        self.x = 15_241_094_284_759_029_579u64.wrapping_mul(self.y);
        self.y = self
            .y
            .rotate_left(36)
            .wrapping_add(self.y.rotate_left(15))
            .wrapping_sub(xp);
        xp
    }
}

/// sfc32 (small fast chaotic), warmed up for twelve rounds.
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    counter: u32,
}

impl Sfc32 {
    pub fn new(seed: u32) -> Self {
        let mut rng = Sfc32 {
            a: seed,
            b: seed,
            c: seed,
            counter: 1,
        };
        for _ in 0..12 {
            rng.next_u32();
        }
        rng
    }

    pub fn next_u32(&mut self) -> u32 {
        let t = self
            .a
            .wrapping_add(self.b)
            .wrapping_add(self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        t
    }
}

/// SHA-1 based generator over a 64-byte state block.
///
/// Every draw hashes the block, folds the digest back into the first
/// five words and bumps a counter word, so consecutive draws differ.
pub struct Sha1Prng {
    state: [u32; 16],
}

impl Sha1Prng {
    pub fn new(seed: u64) -> Self {
        let mut state = [0u32; 16];
        for (i, slot) in state.iter_mut().enumerate() {
            *slot = seed.wrapping_add(i as u64) as u32;
        }
        Sha1Prng { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut block = [0u8; 64];
        for (chunk, word) in block.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        let digest = Sha1::digest(block);
        for (slot, chunk) in self.state.iter_mut().zip(digest.chunks_exact(4)) {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(chunk);
            *slot = u32::from_le_bytes(bytes);
        }
        self.state[15] = self.state[15].wrapping_add(1);
        self.state[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_is_deterministic() {
        let mut a = 42u64;
        let mut b = 42u64;
        assert_eq!(xorshift64(&mut a), xorshift64(&mut b));
        assert_eq!(a, b);
    }

    #[test]
    fn xorshift_advances_state() {
        let mut state = 42u64;
        let first = xorshift64(&mut state);
        let second = xorshift64(&mut state);
        assert_ne!(first, second);
    }

    #[test]
    fn rand_range_stays_in_bounds() {
        let mut state = time_seed() | 1;
        for _ in 0..1000 {
            let n = rand_range(&mut state, 10, 100);
            assert!((10..=100).contains(&n));
        }
    }

    #[test]
    fn rand_double_is_unit_interval() {
        let mut state = 0xdead_beef_u64;
        for _ in 0..1000 {
            let d = rand_double(&mut state);
            assert!((0.0..1.0).contains(&d));
        }
    }

    #[test]
    fn lehmer_known_sequence_differs_by_seed() {
        let mut a = Lehmer64::new(1);
        let mut b = Lehmer64::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn xoshiro_seeded_identically_matches() {
        let mut a = Xoshiro256pp::new(7);
        let mut b = Xoshiro256pp::new(7);
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn pcg32_same_stream_repeats() {
        let mut rng = Pcg32::new(42, 54);
        let first = rng.next_u32();
        let mut again = Pcg32::new(42, 54);
        assert_eq!(first, again.next_u32());
        assert_ne!(rng.next_u32(), first);
    }

    #[test]
    fn pcg32_streams_differ_by_increment() {
        let mut a = Pcg32::new(42, 54);
        let mut b = Pcg32::new(42, 56);
        a.next_u32();
        b.next_u32();
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn wyrand_produces_distinct_draws() {
        let mut rng = Wyrand::new(99);
        let a = rng.next_u64();
        let b = rng.next_u64();
        assert_ne!(a, b);
    }

    #[test]
    fn msws_rotates_state() {
        let mut rng = Msws32::new(1);
        let draws: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn romu_duo_survives_zero_seed() {
        let mut rng = RomuDuo::new(0);
        let mut all_zero = true;
        for _ in 0..8 {
            if rng.next_u64() != 0 {
                all_zero = false;
            }
        }
        assert!(!all_zero);
    }

    #[test]
    fn sfc32_warmup_changes_output() {
        let mut a = Sfc32::new(5);
        let mut b = Sfc32::new(6);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn sha1_prng_draws_differ() {
        let mut rng = Sha1Prng::new(1234);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn sha1_prng_same_seed_same_stream() {
        let mut a = Sha1Prng::new(77);
        let mut b = Sha1Prng::new(77);
        for _ in 0..5 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
