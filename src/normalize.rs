//! # Normalization
//!
//! Recovers canonical, uppercase encoded text from what a person typed.
//!
//! ## Rules
//! 1. `O` and `o` become `0`; `I` and `i` become `1`
//! 2. Lowercase symbols (including the checksum alias `u`) become uppercase
//! 3. Uppercase symbols, digits and `*`, `~`, `$`, `=` pass through
//! 4. Anything else (hyphens, spaces, non-ASCII) is dropped
//!
//! The pass never fails, keeps relative order, and is idempotent.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Maps one input byte to its canonical symbol, or `None` to drop it.
const fn normalize_symbol(c: u8) -> Option<u8> {
    match c {
        b'0' | b'O' | b'o' => Some(b'0'),
        b'1' | b'I' | b'i' => Some(b'1'),
        b'2'..=b'9'
        | b'A'..=b'H'
        | b'J'..=b'K'
        | b'M'..=b'N'
        | b'P'..=b'T'
        | b'V'..=b'Z'
        | b'*'
        | b'~'
        | b'$'
        | b'='
        | b'U' => Some(c),
        b'a'..=b'h'
        | b'j'..=b'k'
        | b'm'..=b'n'
        | b'p'..=b't'
        | b'v'..=b'z'
        | b'u' => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Appends the normalized form of raw input bytes to `dst`.
///
/// Input need not be valid UTF-8; every byte outside the table is dropped.
/// If `dst` has no capacity yet, room for `src.len()` symbols is reserved.
pub fn normalize_bytes_append(dst: &mut String, src: &[u8]) {
    if dst.capacity() == 0 {
        dst.reserve(src.len());
    }
    dst.extend(
        src.iter()
            .filter_map(|&c| normalize_symbol(c))
            .map(char::from),
    );
}

/// Returns the normalized form of raw input bytes.
///
/// # Example
/// ```
/// use crockford::normalize::normalize_bytes;
/// assert_eq!(normalize_bytes(b"ab\xff-cd"), "ABCD");
/// ```
pub fn normalize_bytes(src: &[u8]) -> String {
    let mut dst = String::new();
    normalize_bytes_append(&mut dst, src);
    dst
}

/// Appends the normalized form of `src` to `dst`.
///
/// Multi-byte UTF-8 sequences consist of non-ASCII bytes, which are all dropped.
pub fn normalize_append(dst: &mut String, src: &str) {
    normalize_bytes_append(dst, src.as_bytes());
}

/// Returns the normalized form of `src`.
///
/// # Example
/// ```
/// use crockford::normalize::normalize;
/// assert_eq!(normalize("Io-1O"), "1011");
/// assert_eq!(normalize("csqp-yrk1-e8"), "CSQPYRK1E8");
/// ```
pub fn normalize(src: &str) -> String {
    normalize_bytes(src.as_bytes())
}
