//! Option table and dispatcher.
//!
//! The table is declared once; after parsing, the first populated
//! action runs and the process exits. Options must precede positional
//! arguments, and several actions take extra operands from the
//! positional tail (e.g. `--fast-pow BASE EXP`, `--zellers-day D M Y`).

use std::str::FromStr;

use cmdparser::{Context, Opt, OptionTable};

use crate::error::{AppError, Result};
use crate::{bench, bits, cipher, compress, convert, date, hash, power, prng, sort, text};

/// Key used when `--xxtea-key` is absent (also its declared default).
const XXTEA_DEFAULT_KEY: &str = "A1B2C3D4,5E6F7A8B,9C0D1E2F,3A4B5C6D";

fn build_table() -> OptionTable {
    OptionTable::new()
        .option(Opt::new("help").short('h').help("Show help information"))
        .option(
            Opt::new("fib")
                .short('f')
                .arg()
                .help("Convert miles to km using basic Fibonacci"),
        )
        .option(
            Opt::new("miles-to-km")
                .short('m')
                .arg()
                .help("Convert miles to km using standard formula"),
        )
        .option(
            Opt::new("fib-interp")
                .short('i')
                .arg()
                .help("Convert miles to km using Fibonacci interpolation"),
        )
        .option(
            Opt::new("fib-cache")
                .short('c')
                .arg()
                .help("Convert miles to km using cached Fibonacci"),
        )
        .option(
            Opt::new("fib-golden")
                .short('g')
                .arg()
                .help("Convert miles to km using golden ratio"),
        )
        .option(
            Opt::new("fib-golden-binary")
                .short('b')
                .arg()
                .help("Convert miles to km using golden ratio with binary pow"),
        )
        .option(
            Opt::new("exponent")
                .short('e')
                .arg()
                .help("Set exponent for pow-algos"),
        )
        .option(
            Opt::new("binary-power")
                .short('p')
                .arg()
                .help("Power the number by binary power algorithm"),
        )
        .option(
            Opt::new("xorshift-random")
                .short('x')
                .help("Generate pseudo random numbers by xorshift64"),
        )
        .option(
            Opt::new("xorshift-double-random")
                .short('d')
                .help("Generate pseudo random float numbers by xorshift64"),
        )
        .option(
            Opt::new("q-rsqrt-quake")
                .short('q')
                .arg()
                .help("Q_rsqrt from Quake III Arena"),
        )
        .option(
            Opt::new("lehmer-random")
                .short('l')
                .help("Generate pseudo random numbers by lehmer64"),
        )
        .option(
            Opt::new("xoshiro256pp-random")
                .short('o')
                .help("Generate pseudo random numbers by xoshiro256pp"),
        )
        .option(
            Opt::new("benchmark")
                .short('B')
                .help("Run benchmarks for all algorithm families"),
        )
        .option(
            Opt::new("fast-pow")
                .short('P')
                .arg()
                .help("Fast power calculation (base; exponent positional)"),
        )
        .option(
            Opt::new("fastest-pow")
                .short('F')
                .arg()
                .help("Fastest power calculation (base; exponent positional)"),
        )
        .option(
            Opt::new("fast-mod")
                .short('M')
                .arg()
                .help("Fast modulo calculation (value; modulus positional)"),
        )
        .option(
            Opt::new("power-of-two")
                .short('T')
                .arg()
                .help("Check if number is power of two"),
        )
        .option(
            Opt::new("jenkins-hash")
                .short('J')
                .arg()
                .help("Jenkins hash calculation (data; optional seed positional)"),
        )
        .option(
            Opt::new("jenkins-mix")
                .short('j')
                .help("Test Jenkins mix and final functions"),
        )
        .option(
            Opt::new("pcg32-random")
                .short('R')
                .help("Generate pseudo random numbers by PCG32"),
        )
        .option(
            Opt::new("xor-swap")
                .short('X')
                .arg()
                .help("XOR swap two numbers (first value; second positional)"),
        )
        .option(Opt::new("div3").short('D').arg().help("Fast division by 3"))
        .option(Opt::new("rle-encode").short('E').arg().help("RLE encode string"))
        .option(Opt::new("rle-decode").short('C').arg().help("RLE decode string"))
        .option(
            Opt::new("is-palindrome")
                .short('A')
                .arg()
                .help("Check if string is palindrome (bit method)"),
        )
        .option(
            Opt::new("leap-year")
                .short('Y')
                .arg()
                .help("Check if year is leap year"),
        )
        .option(
            Opt::new("zellers-day")
                .short('Z')
                .arg()
                .help("Zellers congruence (day; month and year positional)"),
        )
        .option(
            Opt::new("count-trailing-zeros")
                .short('z')
                .arg()
                .help("Count trailing zeros in number"),
        )
        .option(
            Opt::new("next-power")
                .short('N')
                .arg()
                .help("Find next power of two"),
        )
        .option(
            Opt::new("fisher-yates")
                .short('S')
                .arg()
                .help("Fisher-Yates shuffle array size"),
        )
        .option(
            Opt::new("sfc32-random")
                .short('U')
                .help("Generate pseudo random numbers by sfc32"),
        )
        .option(
            Opt::new("sha1-prng")
                .short('H')
                .help("Generate pseudo random numbers by sha1_prng"),
        )
        .option(
            Opt::new("morton-encode")
                .short('O')
                .arg()
                .help("Morton encode x coordinate (y positional)"),
        )
        .option(
            Opt::new("morton-decode")
                .arg()
                .help("Decode Morton code into x/y coordinates"),
        )
        .option(
            Opt::new("levenshtein")
                .short('L')
                .arg()
                .help("Levenshtein distance (first string; second positional)"),
        )
        .option(
            Opt::new("fletcher32")
                .short('w')
                .arg()
                .help("Fletcher32 checksum of string"),
        )
        .option(
            Opt::new("kmp-search")
                .short('k')
                .arg()
                .help("KMP substring search (pattern; text positional)"),
        )
        .option(
            Opt::new("boyer-moore")
                .arg()
                .help("Boyer-Moore substring search (pattern; text positional)"),
        )
        .option(
            Opt::new("xxtea-encrypt")
                .short('t')
                .arg()
                .help("XXTEA encrypt comma-separated hex words"),
        )
        .option(
            Opt::new("xxtea-decrypt")
                .short('u')
                .arg()
                .help("XXTEA decrypt comma-separated hex words"),
        )
        .option(
            Opt::new("xxtea-key")
                .arg()
                .default_val(XXTEA_DEFAULT_KEY)
                .help("XXTEA key as 4 comma-separated hex words"),
        )
}

fn parse_arg<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| AppError::User(format!("Invalid {}", what)))
}

fn take_positional<'a>(argv: &'a [String], pos: &mut usize, what: &str) -> Result<&'a str> {
    if *pos < argv.len() {
        let value = &argv[*pos];
        *pos += 1;
        Ok(value)
    } else {
        Err(AppError::User(format!("Missing {}", what)))
    }
}

fn parse_miles(value: &str) -> Result<f32> {
    match value.parse::<f32>() {
        Ok(miles) if miles >= 0.0 => Ok(miles),
        _ => Err(AppError::User(format!(
            "Invalid distance value '{}'",
            value
        ))),
    }
}

/// Entry point used by the binary: parse, dispatch, map errors to a
/// single stderr diagnostic and a non-zero exit code.
pub fn main() -> i32 {
    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

pub fn run(argv: &[String]) -> Result<i32> {
    let prog = argv.first().map(String::as_str).unwrap_or("artoffun");
    let mut ctx = Context::builder(prog)
        .description("TheArtOfFun")
        .usage_args("[commands]")
        .options(build_table())
        .build()?;

    let mut pos = ctx.parse(argv)?;

    if ctx.flag("help") {
        ctx.print_help();
        return Ok(0);
    }

    let fib_methods = ["fib", "fib-interp", "fib-cache", "fib-golden"]
        .into_iter()
        .filter(|&name| ctx.value(name).is_some())
        .count();

    if ctx.flag("benchmark") {
        bench::run_benchmarks();
        return Ok(0);
    }

    if fib_methods > 1 {
        return Err(AppError::User(
            "Use only one Fibonacci conversion method".into(),
        ));
    }
    if ctx.value("miles-to-km").is_some() && fib_methods > 0 {
        return Err(AppError::User(
            "Cannot combine basic and Fibonacci conversions".into(),
        ));
    }

    if let Some(data) = ctx.value("rle-encode") {
        println!("RLE Encoded: {}", compress::rle_encode(data));
        return Ok(0);
    }

    if let Some(data) = ctx.value("rle-decode") {
        println!("RLE Decoded: {}", compress::rle_decode(data));
        return Ok(0);
    }

    if let Some(s) = ctx.value("is-palindrome") {
        println!(
            "is_palindrome_bit(\"{}\") = {}",
            s,
            text::is_palindrome_bit(s)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("leap-year") {
        let year: i32 = parse_arg(value, "year value")?;
        println!("is_leap_year({}) = {}", year, date::is_leap_year(year));
        return Ok(0);
    }

    if let Some(value) = ctx.value("zellers-day") {
        let day: i32 = parse_arg(value, "day value")?;
        if day < 1 || day > 31 {
            return Err(AppError::User("Invalid day value".into()));
        }

        let month: i32 = parse_arg(
            take_positional(argv, &mut pos, "month for zellers")?,
            "month value",
        )?;
        if month < 1 || month > 12 {
            return Err(AppError::User("Invalid month value".into()));
        }

        let year: i32 = parse_arg(
            take_positional(argv, &mut pos, "year for zellers")?,
            "year value",
        )?;
        if year < 1 {
            return Err(AppError::User("Invalid year value".into()));
        }

        let result = date::zellers_congruence(day, month, year);
        println!(
            "zellers_congruence({}, {}, {}) = {} ({})",
            day, month, year, result, date::WEEKDAYS[result as usize]
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("count-trailing-zeros") {
        let n: u32 = parse_arg(value, "number")?;
        println!("count_trailing_zeros({}) = {}", n, bits::count_trailing_zeros(n));
        println!(
            "count_trailing_zeros_kernighan({}) = {}",
            n,
            bits::count_trailing_zeros_kernighan(n)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("next-power") {
        let n: u32 = parse_arg(value, "number")?;
        println!("next_power_of_two({}) = {}", n, bits::next_power_of_two(n));
        return Ok(0);
    }

    if let Some(value) = ctx.value("fisher-yates") {
        let size: usize = parse_arg(value, "array size")?;
        if size == 0 || size > 1_000_000 {
            return Err(AppError::User("Invalid array size".into()));
        }

        let mut arr: Vec<u32> = (0..size as u32).collect();
        let mut seed = prng::time_seed();
        sort::fisher_yates_shuffle(&mut arr, &mut seed);

        print!("Fisher-Yates shuffle first 10 elements: ");
        for v in arr.iter().take(10) {
            print!("{} ", v);
        }
        println!();
        return Ok(0);
    }

    if ctx.flag("sfc32-random") {
        let mut rng = prng::Sfc32::new(prng::time_seed() as u32);
        let num = rng.next_u32();
        println!("sfc32() = {} (0x{:08X})", num, num);
        return Ok(0);
    }

    if ctx.flag("sha1-prng") {
        let mut rng = prng::Sha1Prng::new(prng::time_seed());
        let num = rng.next_u32();
        println!("sha1_prng() = {} (0x{:08X})", num, num);
        return Ok(0);
    }

    if let (Some(base_s), Some(exp_s)) = (ctx.value("binary-power"), ctx.value("exponent")) {
        let base: f64 = match base_s.parse() {
            Ok(b) if b >= 0.0 => b,
            _ => {
                return Err(AppError::User(format!("Invalid base value '{}'", base_s)));
            }
        };
        let exponent: f64 = match exp_s.parse() {
            Ok(e) if e >= 0.0 => e,
            _ => {
                return Err(AppError::User(format!(
                    "Invalid exponent value '{}'",
                    exp_s
                )));
            }
        };
        let powered = power::binary_pow(base, exponent as u64);
        println!("{:.2} ** {:.2} = {:.2}", base, exponent, powered);
        return Ok(0);
    }

    if let Some(base_s) = ctx.value("fast-pow") {
        let base: f64 = parse_arg(base_s, "base value")?;
        let exp: f64 = parse_arg(
            take_positional(argv, &mut pos, "exponent for fast-pow")?,
            "exponent value",
        )?;
        println!(
            "fast_pow({:.2}, {:.2}) = {:.6}",
            base,
            exp,
            power::fast_pow(base, exp)
        );
        return Ok(0);
    }

    if let Some(base_s) = ctx.value("fastest-pow") {
        let base: f32 = parse_arg(base_s, "base value")?;
        let exp: f32 = parse_arg(
            take_positional(argv, &mut pos, "exponent for fastest-pow")?,
            "exponent value",
        )?;
        println!(
            "fastest_pow({:.2}, {:.2}) = {:.6}",
            base,
            exp,
            power::fastest_pow(base, exp)
        );
        return Ok(0);
    }

    if let Some(value_s) = ctx.value("fast-mod") {
        let value: u32 = parse_arg(value_s, "value")?;
        let modulus: u32 = parse_arg(
            take_positional(argv, &mut pos, "modulus for fast-mod")?,
            "modulus value",
        )?;
        if modulus == 0 {
            return Err(AppError::User("Invalid modulus value".into()));
        }
        println!(
            "fast_mod({}, {}) = {}",
            value,
            modulus,
            bits::fast_mod(value, modulus)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("power-of-two") {
        let n: u32 = parse_arg(value, "number")?;
        println!("is_power_of_two({}) = {}", n, power::is_power_of_two(n));
        return Ok(0);
    }

    if let Some(data) = ctx.value("jenkins-hash") {
        // Optional positional seed; anything unparseable means seed 0.
        let seed: u32 = argv
            .get(pos)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        println!(
            "jenkins_hash(\"{}\", {}) = 0x{:08X}",
            data,
            seed,
            hash::jenkins_hash(data.as_bytes(), seed)
        );
        return Ok(0);
    }

    if ctx.flag("jenkins-mix") {
        let (mut a, mut b, mut c) = (0xdead_beef_u32, 0x1234_5678_u32, 0x8765_4321_u32);
        println!(
            "Before jenkins_mix: a=0x{:08X}, b=0x{:08X}, c=0x{:08X}",
            a, b, c
        );
        hash::jenkins_mix(&mut a, &mut b, &mut c);
        hash::jenkins_final(&mut a, &mut b, &mut c);
        println!(
            "After jenkins_mix+final: a=0x{:08X}, b=0x{:08X}, c=0x{:08X}",
            a, b, c
        );
        return Ok(0);
    }

    if ctx.flag("pcg32-random") {
        let mut rng = prng::Pcg32::new(prng::time_seed(), 0);
        let num = rng.next_u32();
        println!("pcg32_random_r() = {} (0x{:08X})", num, num);
        return Ok(0);
    }

    if let Some(first_s) = ctx.value("xor-swap") {
        let mut a: i32 = parse_arg(first_s, "first value")?;
        let mut b: i32 = parse_arg(
            take_positional(argv, &mut pos, "second value for xor-swap")?,
            "second value",
        )?;
        println!("Before xor_swap: a={}, b={}", a, b);
        bits::xor_swap(&mut a, &mut b);
        println!("After xor_swap: a={}, b={}", a, b);
        return Ok(0);
    }

    if let Some(value) = ctx.value("div3") {
        let n: u32 = parse_arg(value, "number")?;
        println!("div3({}) = {}", n, bits::div3(n));
        return Ok(0);
    }

    if ctx.flag("xorshift-random") {
        let mut seed = prng::time_seed();
        let num = prng::xorshift64(&mut seed);
        let ranged = prng::rand_range(&mut seed, 10, 100);
        println!("xorshift64 random number: {}", num);
        println!("xorshift64 random num from 10 to 100: {}", ranged);
        return Ok(0);
    }

    if ctx.flag("xorshift-double-random") {
        let mut seed = prng::time_seed();
        println!(
            "xorshift64 double random number: {:.6}",
            prng::rand_double(&mut seed)
        );
        return Ok(0);
    }

    if ctx.flag("lehmer-random") {
        let mut rng = prng::Lehmer64::new(prng::time_seed());
        println!("lehmer64 random number: {}", rng.next_u64());
        return Ok(0);
    }

    if ctx.flag("xoshiro256pp-random") {
        let mut rng = prng::Xoshiro256pp::new(prng::time_seed());
        println!("xoshiro256pp random number: {}", rng.next_u64());
        return Ok(0);
    }

    if let Some(value) = ctx.value("q-rsqrt-quake") {
        let number: f32 = value
            .parse()
            .map_err(|_| AppError::User("Invalid number format for Q_rsqrt".into()))?;
        if number <= 0.0 {
            return Err(AppError::User("Q_rsqrt requires positive number".into()));
        }
        println!("Q_rsqrt({:.2}) = {:.6}", number, power::q_rsqrt(number));
        return Ok(0);
    }

    if let Some(value) = ctx.value("fib") {
        let miles = f64::from(parse_miles(value)?);
        let km = convert::fibonacci((miles + 1.0) as i64);
        println!("{:.2} miles ≈ {} km (Fibonacci)", miles, km);
        return Ok(0);
    }

    if let Some(value) = ctx.value("fib-interp") {
        let miles = parse_miles(value)?;
        println!(
            "{:.2} miles ≈ {:.2} km (Fibonacci interpolation)",
            miles,
            convert::fib_interpolate(miles)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("fib-cache") {
        let miles = parse_miles(value)?;
        println!(
            "{:.2} miles ≈ {:.2} km (Cached Fibonacci)",
            miles,
            convert::fib_cache_convert(miles)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("fib-golden-binary") {
        let miles = parse_miles(value)?;
        println!(
            "{:.2} miles ≈ {:.2} km (Golden Ratio with Binary Pow)",
            miles,
            convert::fib_golden_ratio_binary(miles)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("fib-golden") {
        let miles = parse_miles(value)?;
        println!(
            "{:.2} miles ≈ {:.2} km (Golden Ratio)",
            miles,
            convert::fib_golden_ratio(miles)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("miles-to-km") {
        let miles = parse_miles(value)?;
        println!(
            "{:.6} miles = {:.6} km",
            miles,
            convert::basic_miles2km(miles)
        );
        return Ok(0);
    }

    if let Some(value) = ctx.value("morton-encode") {
        let x: u16 = parse_arg(value, "x coordinate")?;
        let y: u16 = parse_arg(
            take_positional(argv, &mut pos, "y coordinate for morton-encode")?,
            "y coordinate",
        )?;
        let code = bits::morton_encode(x, y);
        println!("morton_encode({}, {}) = {} (0x{:08X})", x, y, code, code);
        return Ok(0);
    }

    if let Some(value) = ctx.value("morton-decode") {
        let code: u32 = parse_arg(value, "Morton code")?;
        let (x, y) = bits::morton_decode(code);
        println!("morton_decode({}) = ({}, {})", code, x, y);
        return Ok(0);
    }

    if let Some(first) = ctx.value("levenshtein") {
        let second = take_positional(argv, &mut pos, "second string for levenshtein")?;
        println!(
            "levenshtein(\"{}\", \"{}\") = {}",
            first,
            second,
            text::levenshtein(first, second)
        );
        return Ok(0);
    }

    if let Some(data) = ctx.value("fletcher32") {
        println!(
            "fletcher32(\"{}\") = 0x{:08X}",
            data,
            hash::fletcher32_str(data)
        );
        return Ok(0);
    }

    if let Some(pattern) = ctx.value("kmp-search") {
        if pattern.is_empty() {
            return Err(AppError::User("Empty pattern".into()));
        }
        let haystack = take_positional(argv, &mut pos, "text for kmp-search")?;
        let matches = text::kmp_search(pattern, haystack);
        if matches.is_empty() {
            println!("Pattern not found");
        } else {
            for index in matches {
                println!("Pattern found at index {}", index);
            }
        }
        return Ok(0);
    }

    if let Some(pattern) = ctx.value("boyer-moore") {
        let haystack = take_positional(argv, &mut pos, "text for boyer-moore")?;
        match text::boyer_moore_search(haystack, pattern) {
            Some(index) => println!("Pattern found at index: {}", index),
            None => println!("Pattern not found"),
        }
        return Ok(0);
    }

    if let Some(data) = ctx.value("xxtea-encrypt") {
        let mut words = parse_xxtea_block(data)?;
        let key = parse_xxtea_key(ctx.value("xxtea-key").unwrap_or(XXTEA_DEFAULT_KEY))?;
        cipher::xxtea_encrypt(&mut words, &key);
        println!("XXTEA encrypted: {}", cipher::format_hex_words(&words));
        return Ok(0);
    }

    if let Some(data) = ctx.value("xxtea-decrypt") {
        let mut words = parse_xxtea_block(data)?;
        let key = parse_xxtea_key(ctx.value("xxtea-key").unwrap_or(XXTEA_DEFAULT_KEY))?;
        cipher::xxtea_decrypt(&mut words, &key);
        println!("XXTEA decrypted: {}", cipher::format_hex_words(&words));
        return Ok(0);
    }

    if pos < argv.len() {
        for arg in &argv[pos..] {
            match arg.parse::<f32>() {
                Ok(miles) if miles >= 0.0 => {
                    println!("{:.2} miles = {:.2} km", miles, convert::basic_miles2km(miles));
                }
                _ => {
                    eprintln!("Error: Invalid distance value '{}'. Skipping.", arg);
                }
            }
        }
        return Ok(0);
    }

    ctx.print_help();
    Ok(0)
}

fn parse_xxtea_block(data: &str) -> Result<Vec<u32>> {
    match cipher::parse_hex_words(data) {
        Some(words) if words.len() >= 2 => Ok(words),
        Some(_) => Err(AppError::User(
            "XXTEA needs at least 2 hex words".into(),
        )),
        None => Err(AppError::User(format!("Invalid hex word list '{}'", data))),
    }
}

fn parse_xxtea_key(key: &str) -> Result<[u32; 4]> {
    match cipher::parse_hex_words(key) {
        Some(words) if words.len() == 4 => Ok([words[0], words[1], words[2], words[3]]),
        _ => Err(AppError::User(format!(
            "Invalid cipher key '{}' (need 4 hex words)",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        let mut v = vec!["artoffun".to_string()];
        v.extend(args.iter().map(|s| s.to_string()));
        v
    }

    #[test]
    fn table_builds_cleanly() {
        // Uniqueness of every short and long spelling is enforced here.
        let ctx = Context::builder("artoffun")
            .options(build_table())
            .build();
        assert!(ctx.is_ok());
    }

    #[test]
    fn conflicting_fib_methods_are_rejected() {
        let err = run(&argv(&["--fib", "5", "--fib-cache", "5"])).unwrap_err();
        assert!(err.to_string().contains("only one Fibonacci"));
    }

    #[test]
    fn basic_and_fib_cannot_combine() {
        let err = run(&argv(&["--fib", "5", "--miles-to-km", "5"])).unwrap_err();
        assert!(err.to_string().contains("Cannot combine"));
    }

    #[test]
    fn unknown_option_propagates() {
        let err = run(&argv(&["--nonsense"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown option: --nonsense");
    }

    #[test]
    fn zellers_requires_month_and_year() {
        let err = run(&argv(&["--zellers-day", "5"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Missing month for zellers");

        let err = run(&argv(&["--zellers-day", "5", "7"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Missing year for zellers");

        assert_eq!(run(&argv(&["--zellers-day", "5", "7", "2025"])).unwrap(), 0);
    }

    #[test]
    fn zellers_validates_ranges() {
        let err = run(&argv(&["--zellers-day", "32", "7", "2025"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid day value");

        let err = run(&argv(&["--zellers-day", "5", "13", "2025"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid month value");
    }

    #[test]
    fn negative_distance_is_rejected() {
        let err = run(&argv(&["--miles-to-km", "-3"])).unwrap_err();
        assert!(err.to_string().contains("Invalid distance value"));
    }

    #[test]
    fn fast_pow_needs_positional_exponent() {
        let err = run(&argv(&["--fast-pow", "2.5"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Missing exponent for fast-pow");
        assert_eq!(run(&argv(&["--fast-pow", "2.5", "3.7"])).unwrap(), 0);
    }

    #[test]
    fn fast_mod_rejects_zero_modulus() {
        let err = run(&argv(&["--fast-mod", "17", "0"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid modulus value");
    }

    #[test]
    fn q_rsqrt_rejects_non_positive() {
        let err = run(&argv(&["-q", "0"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Q_rsqrt requires positive number");
        let err = run(&argv(&["-q", "abc"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid number format for Q_rsqrt");
    }

    #[test]
    fn fisher_yates_validates_size() {
        let err = run(&argv(&["--fisher-yates", "0"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid array size");
        let err = run(&argv(&["--fisher-yates", "1000001"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid array size");
    }

    #[test]
    fn xxtea_rejects_bad_block_and_key() {
        let err = run(&argv(&["--xxtea-encrypt", "zz"])).unwrap_err();
        assert!(err.to_string().contains("Invalid hex word list"));

        let err = run(&argv(&["--xxtea-encrypt", "12345678"])).unwrap_err();
        assert!(err.to_string().contains("at least 2 hex words"));

        let err = run(&argv(&[
            "--xxtea-encrypt",
            "12345678,9ABCDEF0",
            "--xxtea-key",
            "01,02",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("need 4 hex words"));
    }

    #[test]
    fn simple_actions_succeed() {
        assert_eq!(run(&argv(&["--rle-encode", "AAAB"])).unwrap(), 0);
        assert_eq!(run(&argv(&["--rle-decode", "3AB"])).unwrap(), 0);
        assert_eq!(run(&argv(&["-A", "racecar"])).unwrap(), 0);
        assert_eq!(run(&argv(&["-Y", "2000"])).unwrap(), 0);
        assert_eq!(run(&argv(&["-T", "8"])).unwrap(), 0);
        assert_eq!(run(&argv(&["-D", "99"])).unwrap(), 0);
        assert_eq!(run(&argv(&["-N", "5"])).unwrap(), 0);
        assert_eq!(run(&argv(&["-z", "40"])).unwrap(), 0);
        assert_eq!(run(&argv(&["--levenshtein", "kitten", "sitting"])).unwrap(), 0);
        assert_eq!(run(&argv(&["--morton-encode", "3", "5"])).unwrap(), 0);
        assert_eq!(run(&argv(&["--morton-decode", "39"])).unwrap(), 0);
        assert_eq!(run(&argv(&["-w", "abcde"])).unwrap(), 0);
    }

    #[test]
    fn positional_tail_converts_miles() {
        assert_eq!(run(&argv(&["5", "10"])).unwrap(), 0);
        assert_eq!(run(&argv(&["--", "5"])).unwrap(), 0);
    }

    #[test]
    fn no_arguments_prints_help() {
        assert_eq!(run(&argv(&[])).unwrap(), 0);
    }
}
