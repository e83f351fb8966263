//! # Alphabets
//!
//! Crockford's Base32 alphabets: 0-9, A-Z excluding I, L, O, U (32 characters),
//! in lowercase and uppercase, plus the checksum variants that append
//! `*`, `~`, `$`, `=` and `U`.
//!
//! Each [`Alphabet`] carries its inverse table (symbol byte to 5-bit value),
//! built at compile time from the forward table.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::constants::{
    LOWERCASE_ALPHABET, LOWERCASE_CHECKSUM, UPPERCASE_ALPHABET, UPPERCASE_CHECKSUM,
};
use crate::{
    codec,
    constants::ALPHABET_LEN,
    error::DecodeError,
    timestamp,
};

/// Marker for bytes absent from the inverse table.
const INVALID: u8 = 0xff;

/// Letter case of the symbols an alphabet produces.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Lower,
    #[default]
    Upper,
}

impl Case {
    /// Returns the data alphabet for this case
    pub const fn alphabet(self) -> &'static Alphabet {
        match self {
            Self::Lower => &Alphabet::LOWER,
            Self::Upper => &Alphabet::UPPER,
        }
    }

    /// Returns the 37-symbol checksum alphabet for this case
    pub const fn checksum_alphabet(self) -> &'static str {
        match self {
            Self::Lower => LOWERCASE_CHECKSUM,
            Self::Upper => UPPERCASE_CHECKSUM,
        }
    }
}

/// A 32-symbol alphabet with its symbol-to-value lookup table.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
    values: [u8; 256],
}

impl Alphabet {
    /// Lowercase Crockford alphabet.
    pub const LOWER: Self = Self::new(LOWERCASE_ALPHABET.as_bytes());

    /// Uppercase Crockford alphabet.
    pub const UPPER: Self = Self::new(UPPERCASE_ALPHABET.as_bytes());

    /// Builds an alphabet from 32 distinct ASCII symbols.
    ///
    /// # Panics
    /// Panics if `symbols` is not exactly 32 bytes long, contains a non-ASCII
    /// byte, or repeats a symbol. In a `const` context this is a compile error.
    #[allow(clippy::cast_possible_truncation)] // indices are below 32
    pub const fn new(symbols: &[u8]) -> Self {
        assert!(
            symbols.len() == ALPHABET_LEN,
            "alphabet must have 32 symbols"
        );

        let mut forward = [0u8; ALPHABET_LEN];
        let mut values = [INVALID; 256];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let symbol = symbols[i];
            assert!(symbol.is_ascii(), "alphabet symbols must be ASCII");
            assert!(
                values[symbol as usize] == INVALID,
                "alphabet symbols must be distinct"
            );
            forward[i] = symbol;
            values[symbol as usize] = i as u8;
            i += 1;
        }

        Self {
            symbols: forward,
            values,
        }
    }

    /// Returns the alphabet for the given case
    pub const fn for_case(case: Case) -> &'static Self {
        case.alphabet()
    }

    /// Returns the symbol for a 5-bit value. Only the low 5 bits are used.
    pub const fn symbol(&self, value: u8) -> u8 {
        self.symbols[(value & 0x1f) as usize]
    }

    /// Returns the 5-bit value of a symbol, or `None` if it is not in the alphabet.
    pub const fn value(&self, symbol: u8) -> Option<u8> {
        match self.values[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// Returns the ordered symbols as a string slice.
    pub fn as_str(&self) -> &str {
        // Every symbol was checked to be ASCII on construction
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    /// Encodes `bytes` with this alphabet. See [`codec::encode`].
    pub fn encode(&self, bytes: &[u8]) -> String {
        codec::encode(bytes, self)
    }

    /// Decodes `symbols` with this alphabet. See [`codec::decode`].
    pub fn decode(&self, symbols: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
        codec::decode(symbols, self)
    }

    /// Encodes a Unix timestamp with this alphabet. See [`timestamp::encode_timestamp`].
    pub fn encode_timestamp(&self, seconds: i64) -> String {
        timestamp::encode_timestamp(seconds, self)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}
