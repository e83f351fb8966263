//! # Codec
//!
//! Bit-packing encoder and decoder. Input bytes are read as one continuous
//! bitstream, most significant bit first, and emitted as one symbol per 5 bits.
//! A final partial group is padded with zero bits on the right; no padding
//! symbols are ever written.
//!
//! Decoding is strict: the bits left over after the last full byte must be
//! zero, otherwise [`DecodeError::InvalidPadding`] is returned.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    alphabet::Alphabet,
    constants::{BITS_PER_SYMBOL, SYMBOL_MASK},
};

pub use crate::error::DecodeError;

/// Returns the number of symbols produced for `len` input bytes: `ceil(8 * len / 5)`.
pub const fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(BITS_PER_SYMBOL)
}

/// Returns the number of bytes recovered from `len` symbols: `floor(5 * len / 8)`.
pub const fn decoded_len(len: usize) -> usize {
    len * BITS_PER_SYMBOL / 8
}

/// Encodes bytes into a new string of symbols.
///
/// # Example
/// ```
/// use crockford::{codec::encode, Alphabet};
/// assert_eq!(encode(&[0x00], &Alphabet::UPPER), "00");
/// assert_eq!(encode(b"", &Alphabet::UPPER), "");
/// ```
pub fn encode(bytes: &[u8], alphabet: &Alphabet) -> String {
    let mut dst = String::with_capacity(encoded_len(bytes.len()));
    encode_append(&mut dst, bytes, alphabet);
    dst
}

/// Encodes bytes, appending the symbols to `dst`.
pub fn encode_append(dst: &mut String, bytes: &[u8], alphabet: &Alphabet) {
    dst.reserve(encoded_len(bytes.len()));

    let mut buffer: u32 = 0;
    let mut bits: usize = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= BITS_PER_SYMBOL {
            bits -= BITS_PER_SYMBOL;
            dst.push(symbol_char(alphabet, buffer >> bits));
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        dst.push(symbol_char(alphabet, buffer << (BITS_PER_SYMBOL - bits)));
    }
}

/// Decodes symbols into a new byte vector.
///
/// # Example
/// ```
/// use crockford::{codec::decode, Alphabet, DecodeError};
/// assert_eq!(decode("00", &Alphabet::UPPER), Ok(vec![0x00]));
/// assert!(matches!(
///     decode("!!!", &Alphabet::UPPER),
///     Err(DecodeError::InvalidSymbol { symbol: b'!', position: 0 })
/// ));
/// ```
pub fn decode(symbols: impl AsRef<[u8]>, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let symbols = symbols.as_ref();
    let mut dst = Vec::with_capacity(decoded_len(symbols.len()));
    decode_append(&mut dst, symbols, alphabet)?;
    Ok(dst)
}

/// Decodes symbols, appending the bytes to `dst`.
///
/// On error `dst` is left exactly as it was passed in.
pub fn decode_append(
    dst: &mut Vec<u8>,
    symbols: impl AsRef<[u8]>,
    alphabet: &Alphabet,
) -> Result<(), DecodeError> {
    let symbols = symbols.as_ref();
    let start = dst.len();
    dst.reserve(decoded_len(symbols.len()));

    let result = unpack(dst, symbols, alphabet);
    if result.is_err() {
        dst.truncate(start);
    }
    result
}

#[allow(clippy::cast_possible_truncation)] // shifted values are masked to 8 bits
fn unpack(dst: &mut Vec<u8>, symbols: &[u8], alphabet: &Alphabet) -> Result<(), DecodeError> {
    let mut buffer: u32 = 0;
    let mut bits: usize = 0;

    for (position, &symbol) in symbols.iter().enumerate() {
        let value = alphabet
            .value(symbol)
            .ok_or(DecodeError::InvalidSymbol { symbol, position })?;

        buffer = (buffer << BITS_PER_SYMBOL) | u32::from(value);
        bits += BITS_PER_SYMBOL;
        if bits >= 8 {
            bits -= 8;
            dst.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    if buffer != 0 {
        return Err(DecodeError::InvalidPadding);
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)] // masked to 5 bits
fn symbol_char(alphabet: &Alphabet, group: u32) -> char {
    char::from(alphabet.symbol((group & SYMBOL_MASK) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(&[], &Alphabet::UPPER), "");
        assert_eq!(decode("", &Alphabet::UPPER), Ok(vec![]));
    }

    #[test]
    fn test_single_zero_byte() {
        assert_eq!(encode(&[0x00], &Alphabet::UPPER), "00");
        assert_eq!(encode(&[0x00], &Alphabet::LOWER), "00");
    }

    #[test]
    fn test_known_vectors() {
        // 0xff = 11111 111(00)
        assert_eq!(encode(&[0xff], &Alphabet::UPPER), "ZW");
        assert_eq!(encode(&[0xff], &Alphabet::LOWER), "zw");
        // 40 bits of ones fill exactly 8 symbols
        assert_eq!(encode(&[0xff; 5], &Alphabet::UPPER), "ZZZZZZZZ");
        assert_eq!(encode(b"f", &Alphabet::UPPER), "CR");
        assert_eq!(encode(b"foobar", &Alphabet::UPPER), "CSQPYRK1E8");
        assert_eq!(encode(b"foobar", &Alphabet::LOWER), "csqpyrk1e8");
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode("ZW", &Alphabet::UPPER), Ok(vec![0xff]));
        assert_eq!(decode("CSQPYRK1E8", &Alphabet::UPPER), Ok(b"foobar".to_vec()));
        assert_eq!(decode("csqpyrk1e8", &Alphabet::LOWER), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn test_length_law() {
        for len in 0..=20 {
            let bytes = vec![0xa5; len];
            let encoded = encode(&bytes, &Alphabet::UPPER);
            assert_eq!(encoded.len(), (8 * len).div_ceil(5));
            assert_eq!(encoded.len(), encoded_len(len));
        }
    }

    #[test]
    fn test_invalid_symbol_reports_position() {
        let err = decode("00!0", &Alphabet::UPPER).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidSymbol {
                symbol: b'!',
                position: 2
            }
        );
        assert_eq!(err.to_string(), "invalid symbol '!' at position 2");
    }

    #[test]
    fn test_case_mismatch_is_invalid_symbol() {
        assert!(matches!(
            decode("csqpyrk1e8", &Alphabet::UPPER),
            Err(DecodeError::InvalidSymbol { symbol: b'c', .. })
        ));
    }

    #[test]
    fn test_nonzero_trailing_bits_rejected() {
        // "ZZ" = 10 bits of ones; the last two bits do not fit a byte
        assert_eq!(decode("ZZ", &Alphabet::UPPER), Err(DecodeError::InvalidPadding));
        assert_eq!(decode("1", &Alphabet::UPPER), Err(DecodeError::InvalidPadding));
    }

    #[test]
    fn test_zero_trailing_bits_accepted() {
        // A lone symbol carries no full byte
        assert_eq!(decode("0", &Alphabet::UPPER), Ok(vec![]));
    }

    #[test]
    fn test_append_semantics() {
        let mut dst = String::from("id-");
        encode_append(&mut dst, &[0xff], &Alphabet::UPPER);
        assert_eq!(dst, "id-ZW");

        let mut bytes = vec![1, 2];
        decode_append(&mut bytes, "ZW", &Alphabet::UPPER).unwrap();
        assert_eq!(bytes, vec![1, 2, 0xff]);
    }

    #[test]
    fn test_decode_append_restores_on_error() {
        let mut bytes = vec![7];
        let result = decode_append(&mut bytes, "ZZZZ!", &Alphabet::UPPER);
        assert!(result.is_err());
        assert_eq!(bytes, vec![7]);
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        for alphabet in [&Alphabet::UPPER, &Alphabet::LOWER] {
            let encoded = encode(&bytes, alphabet);
            assert_eq!(decode(&encoded, alphabet), Ok(bytes.clone()));
        }
    }
}
