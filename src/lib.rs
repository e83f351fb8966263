//! # crockford
//!
//! Crockford's Base32: a byte-to-text encoding that avoids visually
//! ambiguous characters, for identifiers people read aloud and type by hand.
//!
//! ## Features
//!
//! - **Codec**: Unpadded bit-packing encode/decode over lowercase or uppercase alphabets
//! - **Timestamps**: Fixed 8-symbol tokens that sort in time order
//! - **Checksums**: One check symbol over the raw body (modulo 37)
//! - **Normalization**: Case folding, `O`/`I` correction, and removal of stray characters
//!
//! ```
//! use crockford::{normalize::normalize, Alphabet};
//!
//! let encoded = Alphabet::UPPER.encode(b"foobar");
//! assert_eq!(encoded, "CSQPYRK1E8");
//! let typed = "csqp-yrkI-e8";
//! assert_eq!(Alphabet::UPPER.decode(normalize(typed)).unwrap(), b"foobar");
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;
pub mod checksum;
pub mod codec;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod normalize;
pub mod timestamp;

pub use alphabet::{
    Alphabet, Case, LOWERCASE_ALPHABET, LOWERCASE_CHECKSUM, UPPERCASE_ALPHABET, UPPERCASE_CHECKSUM,
};
pub use checksum::{checksum, symbols_checksum, verify_checksum};
pub use codec::{decode, decode_append, encode, encode_append};
pub use config::{set_home_override, Config};
pub use error::DecodeError;
pub use normalize::{normalize, normalize_append, normalize_bytes, normalize_bytes_append};
pub use timestamp::{encode_time, encode_timestamp};
