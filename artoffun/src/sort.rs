//! Array utilities: counting sort and Fisher-Yates shuffling.

use crate::prng;

/// Counting sort for byte arrays, 256 buckets.
pub fn counting_sort_256(data: &mut [u8]) {
    let mut counts = [0usize; 256];
    for &b in data.iter() {
        counts[usize::from(b)] += 1;
    }
    let mut i = 0;
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            data[i] = value as u8;
            i += 1;
        }
    }
}

/// In-place Fisher-Yates shuffle driven by xorshift64.
pub fn fisher_yates_shuffle(arr: &mut [u32], seed: &mut u64) {
    for i in (1..arr.len()).rev() {
        let j = prng::rand_range(seed, 0, i as u64) as usize;
        arr.swap(i, j);
    }
}
