//! Run-length encoding.
//!
//! Runs longer than one character are written as `<count><char>`;
//! single characters are copied through. Digits in the input therefore
//! make the encoding ambiguous to decode; that is inherent to the
//! format, not a decoder defect.

pub fn rle_encode(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        let mut count = 1;
        while i + 1 < chars.len() && chars[i + 1] == current {
            count += 1;
            i += 1;
        }
        if count > 1 {
            output.push_str(&count.to_string());
        }
        output.push(current);
        i += 1;
    }
    output
}

/// Decode `<count><char>` runs; characters without a leading count are
/// copied through. A trailing count with no character is dropped.
pub fn rle_decode(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let mut count: usize = 0;
            while i < chars.len() && chars[i].is_ascii_digit() {
                count = count * 10 + chars[i].to_digit(10).unwrap_or(0) as usize;
                i += 1;
            }
            if i < chars.len() {
                let symbol = chars[i];
                for _ in 0..count {
                    output.push(symbol);
                }
                i += 1;
            }
        } else {
            output.push(chars[i]);
            i += 1;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_runs_and_singles() {
        assert_eq!(rle_encode("AAAB"), "3AB");
        assert_eq!(rle_encode("AAABBBCCCD"), "3A3B3CD");
        assert_eq!(rle_encode("ABC"), "ABC");
        assert_eq!(rle_encode(""), "");
    }

    #[test]
    fn decode_runs_and_singles() {
        assert_eq!(rle_decode("3AB"), "AAAB");
        assert_eq!(rle_decode("3A3B3CD"), "AAABBBCCCD");
        assert_eq!(rle_decode("ABC"), "ABC");
        assert_eq!(rle_decode(""), "");
    }

    #[test]
    fn decode_multi_digit_count() {
        assert_eq!(rle_decode("12A"), "A".repeat(12));
    }

    #[test]
    fn decode_trailing_count_is_dropped() {
        assert_eq!(rle_decode("AB3"), "AB");
    }

    #[test]
    fn roundtrip_letter_input() {
        for input in ["AAAAABBBCCC", "abcabc", "zzzzzzzzzzzz", "a"] {
            assert_eq!(rle_decode(&rle_encode(input)), input);
        }
    }

    #[test]
    fn long_run_compresses() {
        let input = "A".repeat(100);
        assert_eq!(rle_encode(&input), "100A");
    }
}
