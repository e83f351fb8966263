//! # ID Generation
//!
//! Generates unique, sortable identifiers using a configurable pattern.
//! Default pattern: `%T%RRRRRRRR%C` (e.g., `01HQ3V5KX7M2P9D4A`)
//!
//! ## Tokens
//! - `%T`: Timestamp token (8 symbols, Unix seconds, sorts in time order)
//! - `%R`: Random symbol (count of R determines length)
//! - `%C`: Checksum symbol of the number spelled by the `%T` and `%R`
//!   symbols before it (literal text and date fields are not covered)
//! - `%y`, `%m`, `%d`: Year, Month, Day (2 digits, UTC)
//! - `%j`: Day of year (001-366)
//! - `%%`: Literal percent sign
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::{alphabet::Case, checksum::values_checksum, timestamp};

pub use crate::constants::DEFAULT_ID_PATTERN as DEFAULT_PATTERN;

/// Generates an ID from `pattern` using the current time and thread RNG.
pub fn generate(pattern: &str, case: Case) -> String {
    generate_with(pattern, case, Utc::now(), &mut rand::rng())
}

/// Generates an ID from `pattern` with an explicit clock value and RNG.
pub fn generate_with<R: Rng>(
    pattern: &str,
    case: Case,
    now: DateTime<Utc>,
    rng: &mut R,
) -> String {
    let alphabet = case.alphabet();
    let mut result = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars().peekable();
    // 5-bit values of every encoded symbol emitted so far
    let mut values: Vec<u8> = Vec::new();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some('T') => {
                let token = timestamp::encode_time(&now, alphabet);
                values.extend(token.bytes().filter_map(|symbol| alphabet.value(symbol)));
                result.push_str(&token);
            }
            Some('R') => {
                // Count consecutive R's to determine random length
                let mut count = 1;
                while chars.peek() == Some(&'R') {
                    chars.next();
                    count += 1;
                }
                for _ in 0..count {
                    let value = rng.random::<u8>() & 0x1f;
                    values.push(value);
                    result.push(char::from(alphabet.symbol(value)));
                }
            }
            Some('C') => {
                result.push(values_checksum(&values, case));
            }
            Some('y') => {
                let _ = write!(result, "{:02}", now.year() % 100);
            }
            Some('m') => {
                let _ = write!(result, "{:02}", now.month());
            }
            Some('d') => {
                let _ = write!(result, "{:02}", now.day());
            }
            Some('j') => {
                let _ = write!(result, "{:03}", now.ordinal());
            }
            Some('%') | None => {
                result.push('%');
            }
            Some(other) => {
                // Unknown token, keep as-is
                result.push('%');
                result.push(other);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        checksum::{checksum, symbols_checksum},
        codec,
        timestamp::timestamp_bytes,
        Alphabet,
    };

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_default_pattern_format() {
        let id = generate(DEFAULT_PATTERN, Case::Upper);
        // 8 time + 8 random + 1 checksum
        assert_eq!(id.len(), 17);
    }

    #[test]
    fn test_default_pattern_checksum_verifies() {
        let id = generate(DEFAULT_PATTERN, Case::Upper);
        let (body, check) = id.split_at(id.len() - 1);
        let expected = symbols_checksum(body, &Alphabet::UPPER, Case::Upper).unwrap();
        assert_eq!(check.chars().next(), Some(expected));
    }

    #[test]
    fn test_time_token() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_with("%T", Case::Upper, fixed_now(), &mut rng);
        assert_eq!(id, timestamp::encode_timestamp(1_700_000_000, &Alphabet::UPPER));
    }

    #[test]
    fn test_random_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_with("%R", Case::Upper, fixed_now(), &mut rng).len(), 1);
        assert_eq!(generate_with("%RR", Case::Upper, fixed_now(), &mut rng).len(), 2);
        assert_eq!(generate_with("%RRRR", Case::Upper, fixed_now(), &mut rng).len(), 4);
    }

    #[test]
    fn test_random_symbols_decode() {
        let mut rng = StdRng::seed_from_u64(11);
        let id = generate_with("%RRRRRRRR", Case::Lower, fixed_now(), &mut rng);
        assert!(codec::decode(&id, &Alphabet::LOWER).is_ok());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_with(
            DEFAULT_PATTERN,
            Case::Upper,
            fixed_now(),
            &mut StdRng::seed_from_u64(1),
        );
        let b = generate_with(
            DEFAULT_PATTERN,
            Case::Upper,
            fixed_now(),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_sort_by_time() {
        let later = Utc.timestamp_opt(1_700_000_001, 0).unwrap();
        let a = generate_with(
            "%T%RRRR",
            Case::Upper,
            fixed_now(),
            &mut StdRng::seed_from_u64(9),
        );
        let b = generate_with("%T%RRRR", Case::Upper, later, &mut StdRng::seed_from_u64(3));
        assert!(a < b);
    }

    #[test]
    fn test_lowercase_checksum() {
        let mut rng = StdRng::seed_from_u64(5);
        let id = generate_with("%C", Case::Lower, fixed_now(), &mut rng);
        assert_eq!(id, "0");
    }

    #[test]
    fn test_time_checksum_covers_raw_seconds() {
        // The token spells exactly the 5 packed bytes, so its check symbol
        // is the checksum of the unencoded timestamp
        let mut rng = StdRng::seed_from_u64(5);
        let id = generate_with("%T%C", Case::Upper, fixed_now(), &mut rng);
        let expected = checksum(&timestamp_bytes(1_700_000_000), Case::Upper);
        assert_eq!(id.chars().last(), Some(expected));
    }

    #[test]
    fn test_checksum_skips_literals() {
        let mut rng = StdRng::seed_from_u64(5);
        let plain = generate_with("%T%C", Case::Lower, fixed_now(), &mut rng);
        let decorated = generate_with("id-%y-%T-%C", Case::Lower, fixed_now(), &mut rng);
        assert_eq!(plain.chars().last(), decorated.chars().last());
    }

    #[test]
    fn test_date_tokens() {
        let mut rng = StdRng::seed_from_u64(0);
        // 2023-11-14T22:13:20Z
        let id = generate_with("%y%m%d-%j", Case::Upper, fixed_now(), &mut rng);
        assert_eq!(id, "231114-318");
    }

    #[test]
    fn test_literal_passthrough() {
        let mut rng = StdRng::seed_from_u64(0);
        let id = generate_with("prefix-%RR-suffix", Case::Upper, fixed_now(), &mut rng);
        assert!(id.starts_with("prefix-"));
        assert!(id.ends_with("-suffix"));
    }

    #[test]
    fn test_escaped_percent_and_unknown() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_with("100%%", Case::Upper, fixed_now(), &mut rng), "100%");
        assert_eq!(generate_with("%q", Case::Upper, fixed_now(), &mut rng), "%q");
        assert_eq!(generate_with("end%", Case::Upper, fixed_now(), &mut rng), "end%");
    }
}
