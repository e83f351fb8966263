//! # Checksums
//!
//! Crockford's check symbol: the raw (unencoded) body read as a big-endian
//! integer, reduced modulo 37, and mapped onto the 37-symbol checksum alphabet.
//!
//! [`symbols_checksum`] computes the same symbol for a number that is already
//! encoded, reading its symbols as big-endian base-32 digits.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    alphabet::{Alphabet, Case},
    constants::{BITS_PER_SYMBOL, CHECKSUM_MODULUS},
    error::DecodeError,
};

/// Big-endian modulus of a digit string where each digit is `bits` wide.
fn modulus(digits: impl IntoIterator<Item = u8>, bits: usize, m: u32) -> u32 {
    digits
        .into_iter()
        .fold(0, |rem, digit| ((rem << bits) + u32::from(digit)) % m)
}

fn checksum_symbol(rem: u32, case: Case) -> char {
    char::from(case.checksum_alphabet().as_bytes()[rem as usize])
}

/// Returns the checksum symbol for an unencoded body.
///
/// # Example
/// ```
/// use crockford::{checksum::checksum, Case};
/// assert_eq!(checksum(&[], Case::Lower), '0');
/// assert_eq!(checksum(&[36], Case::Upper), 'U');
/// assert_eq!(checksum(&[36], Case::Lower), 'u');
/// ```
pub fn checksum(body: &[u8], case: Case) -> char {
    checksum_symbol(modulus(body.iter().copied(), 8, CHECKSUM_MODULUS), case)
}

/// Returns the checksum symbol of the number that `symbols` encode.
///
/// The symbols are base-32 digits of `alphabet`, most significant first. For a
/// sequence whose bit length is a multiple of 8 this equals [`checksum`] over
/// the decoded bytes.
///
/// # Example
/// ```
/// use crockford::{checksum::{checksum, symbols_checksum}, Alphabet, Case};
/// assert_eq!(symbols_checksum("14", &Alphabet::UPPER, Case::Upper), Ok('U'));
/// assert!(symbols_checksum("4GU", &Alphabet::UPPER, Case::Upper).is_err());
///
/// let token = "00000014";
/// let expected = checksum(&[0, 0, 0, 0, 36], Case::Upper);
/// assert_eq!(symbols_checksum(token, &Alphabet::UPPER, Case::Upper), Ok(expected));
/// ```
pub fn symbols_checksum(
    symbols: impl AsRef<[u8]>,
    alphabet: &Alphabet,
    case: Case,
) -> Result<char, DecodeError> {
    let digits = symbols
        .as_ref()
        .iter()
        .enumerate()
        .map(|(position, &symbol)| {
            alphabet
                .value(symbol)
                .ok_or(DecodeError::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(values_checksum(&digits, case))
}

/// Returns the checksum symbol of a sequence of 5-bit values, most significant first.
pub(crate) fn values_checksum(values: &[u8], case: Case) -> char {
    checksum_symbol(
        modulus(values.iter().copied(), BITS_PER_SYMBOL, CHECKSUM_MODULUS),
        case,
    )
}

/// Checks `symbol` against the checksum of `body`, accepting either case.
pub fn verify_checksum(body: &[u8], symbol: char) -> bool {
    checksum(body, Case::Upper) == symbol.to_ascii_uppercase()
}
