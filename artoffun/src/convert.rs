//! Miles-to-kilometers conversions.
//!
//! The mile/km ratio (1.609) is close to the golden ratio, so
//! consecutive Fibonacci numbers approximate the conversion: if n miles
//! is near F(k), then F(k+1) is near the same distance in km. The
//! variants differ in how they locate and interpolate between the
//! bracketing Fibonacci numbers.

use std::sync::OnceLock;

use crate::power::binary_pow;

const MAX_CACHE: usize = 94; // F(93) is the last Fibonacci number to fit in u64

pub fn fibonacci(num: i64) -> u64 {
    if num <= 0 {
        return 0;
    }
    let mut a = 0u64;
    let mut b = 1u64;
    if num == 1 {
        return b;
    }
    for _ in 2..=num {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

pub fn basic_miles2km(miles: f32) -> f32 {
    miles * 1.609_344
}

/// Walk the Fibonacci pairs until they bracket `miles`, then
/// interpolate linearly between the bracketing terms.
pub fn fib_interpolate(miles: f32) -> f32 {
    if miles < 5.0 {
        return basic_miles2km(miles);
    }

    let mut prev_mile = 0u64;
    let mut prev_km = 1u64;
    let mut curr_mile = 1u64;
    let mut curr_km = 2u64;

    while curr_mile as f32 <= miles {
        prev_mile = curr_mile;
        prev_km = curr_km;

        curr_mile = prev_km;
        curr_km = prev_mile.wrapping_add(prev_km);

        if curr_km < prev_km || curr_mile < prev_mile {
            break;
        }
    }

    prev_km as f32
        + (miles - prev_mile as f32) * ((curr_km - prev_km) as f32 / (curr_mile - prev_mile) as f32)
}

fn fib_cache() -> &'static [u64; MAX_CACHE] {
    static CACHE: OnceLock<[u64; MAX_CACHE]> = OnceLock::new();
    CACHE.get_or_init(|| {
        let mut cache = [0u64; MAX_CACHE];
        cache[1] = 1;
        for i in 2..MAX_CACHE {
            cache[i] = cache[i - 1] + cache[i - 2];
        }
        cache
    })
}

/// Same interpolation as [`fib_interpolate`] but against a
/// precomputed table.
pub fn fib_cache_convert(miles: f32) -> f32 {
    if miles < 5.0 {
        return basic_miles2km(miles);
    }

    let cache = fib_cache();
    let mut i = 2;
    while i < MAX_CACHE - 2 && cache[i] as f32 <= miles {
        i += 1;
    }
    if i >= MAX_CACHE - 2 {
        return basic_miles2km(miles);
    }

    let fn0 = cache[i - 1];
    let fn1 = cache[i];
    let fn2 = cache[i + 1];

    fn1 as f32 + (miles - fn0 as f32) * ((fn2 - fn1) as f32 / (fn1 - fn0) as f32)
}

/// Locate the bracketing Fibonacci terms in closed form via Binet's
/// formula instead of iterating.
pub fn fib_golden_ratio(miles: f32) -> f32 {
    let s5 = 5f64.sqrt();
    let phi = (1.0 + s5) / 2.0;

    if miles < 1e-5 {
        return 0.0;
    }

    let n = (f64::from(miles) * s5).ln() / phi.ln();
    let k = n.floor() as i32;

    let fk = (phi.powi(k) - (-phi).powi(-k)) / s5;
    let fk1 = (phi.powi(k + 1) - (-phi).powi(-k - 1)) / s5;
    let fk2 = (phi.powi(k + 2) - (-phi).powi(-k - 2)) / s5;

    if fk1 - fk < f64::EPSILON {
        return basic_miles2km(miles);
    }

    (fk1 + (f64::from(miles) - fk) * ((fk2 - fk1) / (fk1 - fk))) as f32
}

/// [`fib_golden_ratio`] with the powers of phi computed by binary
/// exponentiation; negative powers use `(-1)^k / phi^k`.
pub fn fib_golden_ratio_binary(miles: f32) -> f32 {
    let s5 = 5f64.sqrt();
    let phi = (1.0 + s5) / 2.0;

    if miles < 1e-5 {
        return 0.0;
    }

    let n = (f64::from(miles) * s5).ln() / phi.ln();
    if n < 1.0 {
        return basic_miles2km(miles);
    }
    let k = n.floor() as u64;

    let fib = |k: u64| {
        let p = binary_pow(phi, k);
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        (p - sign / p) / s5
    };
    let fk = fib(k);
    let fk1 = fib(k + 1);
    let fk2 = fib(k + 2);

    if fk1 - fk < f64::EPSILON {
        return basic_miles2km(miles);
    }

    (fk1 + (f64::from(miles) - fk) * ((fk2 - fk1) / (fk1 - fk))) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_base_cases() {
        assert_eq!(fibonacci(-3), 0);
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(93), 12_200_160_415_121_876_738);
    }

    #[test]
    fn basic_conversion_factor() {
        assert!((basic_miles2km(1.0) - 1.609_344).abs() < 1e-6);
        assert!((basic_miles2km(100.0) - 160.9344).abs() < 1e-3);
    }

    #[test]
    fn small_distances_fall_back_to_basic() {
        for &m in &[0.0f32, 1.0, 4.9] {
            assert_eq!(fib_interpolate(m), basic_miles2km(m));
            assert_eq!(fib_cache_convert(m), basic_miles2km(m));
        }
    }

    #[test]
    fn interpolation_tracks_basic_within_a_few_percent() {
        let methods: [fn(f32) -> f32; 3] = [fib_interpolate, fib_cache_convert, fib_golden_ratio];
        for i in 1..=20 {
            let miles = 5.0 * i as f32;
            let exact = basic_miles2km(miles);
            for f in methods {
                let approx = f(miles);
                let rel = ((approx - exact) / exact).abs();
                assert!(rel < 0.05, "miles={} approx={} exact={}", miles, approx, exact);
            }
        }
    }

    #[test]
    fn golden_binary_matches_golden_closely() {
        for i in 1..=20 {
            let miles = 5.0 * i as f32;
            let a = fib_golden_ratio(miles);
            let b = fib_golden_ratio_binary(miles);
            let rel = ((a - b) / a).abs();
            assert!(rel < 0.01, "miles={} golden={} binary={}", miles, a, b);
        }
    }

    #[test]
    fn golden_ratio_zero_distance() {
        assert_eq!(fib_golden_ratio(0.0), 0.0);
        assert_eq!(fib_golden_ratio_binary(0.0), 0.0);
    }

    #[test]
    fn cache_table_is_monotonic() {
        let cache = fib_cache();
        assert_eq!(cache[0], 0);
        assert_eq!(cache[1], 1);
        for i in 2..MAX_CACHE {
            assert_eq!(cache[i], cache[i - 1] + cache[i - 2]);
        }
    }
}
