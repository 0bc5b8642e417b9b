//! Benchmark suite behind `--benchmark`.
//!
//! Wall-clock timings with `Instant`; sums are pushed through
//! `black_box` so the measured loops cannot be optimized away.

use std::hint::black_box;
use std::time::Instant;

use crate::{bits, compress, convert, date, hash, power, prng, sort, text};

const PRNG_ITERATIONS: usize = 10_000_000;
const MATH_ITERATIONS: usize = 1_000_000;
const DATE_ITERATIONS: usize = 100_000;
const STRING_ITERATIONS: usize = 100_000;

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn time_draws<F: FnMut() -> u64>(mut draw: F) -> f64 {
    let start = Instant::now();
    let mut sum = 0u64;
    for _ in 0..PRNG_ITERATIONS {
        sum = sum.wrapping_add(draw());
    }
    black_box(sum);
    elapsed_ms(start)
}

fn bench_prngs() {
    let seed = prng::time_seed();

    let mut xorshift_state = seed;
    let mut lehmer = prng::Lehmer64::new(seed);
    let mut xoshiro = prng::Xoshiro256pp::new(seed);
    let mut pcg = prng::Pcg32::new(seed, 0);
    let mut wyrand = prng::Wyrand::new(seed);
    let mut msws = prng::Msws32::new(seed);
    let mut romu = prng::RomuDuo::new(seed);
    let mut sfc = prng::Sfc32::new(seed as u32);
    let mut sha1 = prng::Sha1Prng::new(seed);

    let results = [
        ("xorshift64:", time_draws(|| prng::xorshift64(&mut xorshift_state))),
        ("lehmer64:", time_draws(|| lehmer.next_u64())),
        ("xoshiro256pp:", time_draws(|| xoshiro.next_u64())),
        ("pcg32:", time_draws(|| u64::from(pcg.next_u32()))),
        ("wyrand:", time_draws(|| wyrand.next_u64())),
        ("msws32:", time_draws(|| u64::from(msws.next_u32()))),
        ("romu_duo:", time_draws(|| romu.next_u64())),
        ("sfc32:", time_draws(|| u64::from(sfc.next_u32()))),
        ("sha1_prng:", time_draws(|| u64::from(sha1.next_u32()))),
    ];

    println!("PRNG Performance (10,000,000 iterations):");
    println!("-----------------------------------------");
    for (name, ms) in results {
        println!(
            "{:<13} {:8.2} ms  ({:6.2}M numbers/s)",
            name,
            ms,
            PRNG_ITERATIONS as f64 / (ms / 1000.0) / 1_000_000.0
        );
    }
    println!("-----------------------------------------\n");
}

fn bench_conversions() {
    const TEST_POINTS: usize = 20;
    const ITERATIONS: usize = 10_000;

    let methods: [(&str, fn(f32) -> f32); 5] = [
        ("Basic", convert::basic_miles2km),
        ("Fibonacci Interpolation", convert::fib_interpolate),
        ("Fibonacci Cache", convert::fib_cache_convert),
        ("Golden Ratio", convert::fib_golden_ratio),
        ("Golden Ratio (Binary)", convert::fib_golden_ratio_binary),
    ];

    let mile_values: Vec<f32> = (0..TEST_POINTS).map(|i| 5.0 + i as f32 * 5.0).collect();
    let mut results = [[0f32; TEST_POINTS]; 5];
    let mut timings = [0f64; 5];

    println!(
        "Conversion Methods Performance (each method called {} times per point):",
        ITERATIONS
    );
    println!("----------------------------------------------------------------------");

    for (m, (_, f)) in methods.iter().enumerate() {
        let start = Instant::now();
        for (i, &miles) in mile_values.iter().enumerate() {
            for _ in 0..ITERATIONS {
                results[m][i] = black_box(f(black_box(miles)));
            }
        }
        timings[m] = elapsed_ms(start);
    }

    let total_calls = (TEST_POINTS * ITERATIONS) as f64;
    for (m, (name, _)) in methods.iter().enumerate() {
        println!(
            "{:<25}: {:8.2} ms  ({:6.3} us/call)",
            name,
            timings[m],
            timings[m] * 1000.0 / total_calls
        );
    }
    println!("----------------------------------------------------------------------");

    println!("\nAccuracy Comparison (5 sample points):");
    println!("Miles |   Basic   | Interpol |  Cache   |  Golden  | GoldenBin");
    println!("------+-----------+----------+----------+----------+-----------");
    for &idx in &[0usize, 5, 10, 15, 19] {
        let miles = mile_values[idx];
        let basic = convert::basic_miles2km(miles);
        print!("{:5.0} | {:9.2}", miles, basic);
        for row in results.iter().skip(1) {
            let diff = (row[idx] - basic).abs();
            print!(" | {:7.2}%", diff / basic * 100.0);
        }
        println!();
    }
    println!("---------------------------------------------------------------");
}

fn bench_math_algos() {
    println!("\nMath Algorithms Performance ({} iterations):", MATH_ITERATIONS);
    println!("--------------------------------------------");

    let mut lines: Vec<(&str, f64, usize)> = Vec::new();

    let start = Instant::now();
    let mut fast_pow_sum = 0f64;
    for _ in 0..MATH_ITERATIONS {
        fast_pow_sum += power::fast_pow(black_box(2.5), black_box(3.7));
    }
    black_box(fast_pow_sum);
    lines.push(("fast_pow:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut fastest_pow_sum = 0f32;
    for _ in 0..MATH_ITERATIONS {
        fastest_pow_sum += power::fastest_pow(black_box(2.5), black_box(3.7));
    }
    black_box(fastest_pow_sum);
    lines.push(("fastest_pow:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::fast_mod(i as u32, 16));
    }
    black_box(sum);
    lines.push(("fast_mod:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut count = 0u32;
    for i in 0..MATH_ITERATIONS {
        count += u32::from(power::is_power_of_two(i as u32));
    }
    black_box(count);
    lines.push(("is_power_of_two:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(hash::jenkins_hash(b"benchmark_test_data", i as u32));
    }
    black_box(sum);
    lines.push(("jenkins_hash:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let (mut a, mut b, mut c) = (0xdead_beef_u32, 0x1234_5678_u32, 0x8765_4321_u32);
    for _ in 0..MATH_ITERATIONS {
        hash::jenkins_mix(&mut a, &mut b, &mut c);
        hash::jenkins_final(&mut a, &mut b, &mut c);
    }
    black_box((a, b, c));
    lines.push(("jenkins_mix+final:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let (mut x, mut y) = (42i32, 1337i32);
    for _ in 0..MATH_ITERATIONS {
        bits::xor_swap(&mut x, &mut y);
    }
    black_box((x, y));
    lines.push(("xor_swap:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::div3(i as u32));
    }
    black_box(sum);
    lines.push(("div3:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::isqrt(i as u32));
    }
    black_box(sum);
    lines.push(("isqrt:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::to_gray(i as u32));
    }
    black_box(sum);
    lines.push(("to_gray:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::from_gray(i as u32));
    }
    black_box(sum);
    lines.push(("from_gray:", elapsed_ms(start), MATH_ITERATIONS));

    let mut sort_arr = [0u8; 256];
    for (i, slot) in sort_arr.iter_mut().enumerate() {
        *slot = ((i * 37) & 0xff) as u8;
    }
    let start = Instant::now();
    for _ in 0..MATH_ITERATIONS / 100 {
        sort::counting_sort_256(black_box(&mut sort_arr));
    }
    lines.push(("counting_sort_256:", elapsed_ms(start), MATH_ITERATIONS / 100));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::next_power_of_two(i as u32));
    }
    black_box(sum);
    lines.push(("next_power_of_two:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::count_trailing_zeros(i as u32));
    }
    black_box(sum);
    lines.push(("count_trailing_zeros:", elapsed_ms(start), MATH_ITERATIONS));

    let start = Instant::now();
    let mut sum = 0u32;
    for i in 0..MATH_ITERATIONS {
        sum = sum.wrapping_add(bits::count_trailing_zeros_kernighan(i as u32));
    }
    black_box(sum);
    lines.push((
        "count_trailing_zeros_kernighan:",
        elapsed_ms(start),
        MATH_ITERATIONS,
    ));

    let mut shuffle_arr: Vec<u32> = (0..100).collect();
    let mut shuffle_seed = prng::time_seed();
    let start = Instant::now();
    for _ in 0..MATH_ITERATIONS / 100 {
        sort::fisher_yates_shuffle(&mut shuffle_arr, &mut shuffle_seed);
    }
    black_box(&shuffle_arr);
    lines.push(("fisher_yates_shuffle:", elapsed_ms(start), MATH_ITERATIONS / 100));

    for (name, ms, calls) in lines {
        println!("{:<21}{:8.2} ms  ({:6.3} us/call)", name, ms, ms * 1000.0 / calls as f64);
    }
    println!("--------------------------------------------\n");
}

fn bench_compression() {
    const ITERATIONS: usize = 1000;
    let test_strings = [
        "AAAAABBBCCCDDDEEEEFFFFGGGGHHHHIIIIJJJJKKKKLLLLMMMMNNNNOOOOPPPPQQQQRRRRSSSSTTTTUUUUVVVVWWWWXXXXYYYYZZZZ",
        "abcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabc",
        "1122334455667788990011223344556677889900112233445566778899001122334455667788990011223344556677889900",
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        "aabbccddeeffgghhiijjkkllmmnnooppqqrrssttuuvvwwxxyyzzaabbccddeeffgghhiijjkkllmmnnooppqqrrssttuuvvwwxx",
    ];

    println!("Compression Algorithms Performance ({} iterations):", ITERATIONS);
    println!("---------------------------------------------------");

    let mut total_encode_time = 0f64;
    let mut total_decode_time = 0f64;
    let mut total_original_size = 0usize;
    let mut total_compressed_size = 0usize;

    for input in test_strings {
        total_original_size += input.len();

        let start = Instant::now();
        let mut encoded = String::new();
        for _ in 0..ITERATIONS {
            encoded = compress::rle_encode(black_box(input));
        }
        total_encode_time += elapsed_ms(start);
        total_compressed_size += encoded.len();

        let start = Instant::now();
        for _ in 0..ITERATIONS {
            black_box(compress::rle_decode(black_box(&encoded)));
        }
        total_decode_time += elapsed_ms(start);
    }

    let ratio = total_compressed_size as f64 / total_original_size as f64 * 100.0;
    let total_calls = (test_strings.len() * ITERATIONS) as f64;

    println!(
        "RLE Encode:          {:8.2} ms  ({:6.3} us/call)",
        total_encode_time,
        total_encode_time * 1000.0 / total_calls
    );
    println!(
        "RLE Decode:          {:8.2} ms  ({:6.3} us/call)",
        total_decode_time,
        total_decode_time * 1000.0 / total_calls
    );
    println!("Compression Ratio:   {:8.2}%", ratio);
    println!("---------------------------------------------------\n");
}

fn bench_date_algos() {
    println!("Date Algorithms Performance ({} iterations):", DATE_ITERATIONS);
    println!("--------------------------------------------");

    let start = Instant::now();
    let mut count = 0i32;
    for i in 0..DATE_ITERATIONS {
        count += i32::from(date::is_leap_year(2000 + (i % 100) as i32));
    }
    black_box(count);
    let leap_ms = elapsed_ms(start);

    let start = Instant::now();
    let mut sum = 0i32;
    for i in 0..DATE_ITERATIONS {
        sum += date::zellers_congruence(
            (i % 28) as i32 + 1,
            (i % 12) as i32 + 1,
            2000 + (i % 100) as i32,
        );
    }
    black_box(sum);
    let zellers_ms = elapsed_ms(start);

    println!(
        "is_leap_year:        {:8.2} ms  ({:6.3} us/call)",
        leap_ms,
        leap_ms * 1000.0 / DATE_ITERATIONS as f64
    );
    println!(
        "zellers_congruence:  {:8.2} ms  ({:6.3} us/call)",
        zellers_ms,
        zellers_ms * 1000.0 / DATE_ITERATIONS as f64
    );
    println!("--------------------------------------------\n");
}

fn bench_string_algos() {
    let test_strings = [
        "racecar",
        "level",
        "rotor",
        "civic",
        "radar",
        "hello",
        "world",
        "palindrome",
        "deified",
        "noon",
    ];

    println!("String Algorithms Performance ({} iterations):", STRING_ITERATIONS);
    println!("---------------------------------------------");

    let start = Instant::now();
    let mut count = 0usize;
    for i in 0..STRING_ITERATIONS {
        count += usize::from(text::is_palindrome_bit(test_strings[i % test_strings.len()]));
    }
    black_box(count);
    let palindrome_ms = elapsed_ms(start);

    println!(
        "is_palindrome_bit:   {:8.2} ms  ({:6.3} us/call)",
        palindrome_ms,
        palindrome_ms * 1000.0 / STRING_ITERATIONS as f64
    );
    println!("---------------------------------------------\n");
}

pub fn run_benchmarks() {
    println!("======================================");
    println!("      THE ARTOFFUN BENCHMARK SUITE     ");
    println!("======================================\n");

    bench_prngs();
    bench_conversions();
    bench_math_algos();
    bench_compression();
    bench_date_algos();
    bench_string_algos();

    println!("Benchmark completed!");
}
