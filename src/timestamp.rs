//! # Timestamp Tokens
//!
//! Encodes Unix time as a 40-bit big-endian number, producing a fixed
//! 8-symbol token that sorts lexicographically in time order.
//!
//! Only the low 40 bits of the seconds value are kept; later times (past the
//! year 36812) wrap around silently.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, TimeZone};

use crate::{
    alphabet::Alphabet,
    codec,
    constants::{TIMESTAMP_BYTES, TIMESTAMP_LEN},
};

/// Packs the low 40 bits of `seconds` into 5 bytes, most significant first.
pub fn timestamp_bytes(seconds: i64) -> [u8; TIMESTAMP_BYTES] {
    let be = seconds.to_be_bytes();
    let mut packed = [0u8; TIMESTAMP_BYTES];
    packed.copy_from_slice(&be[be.len() - TIMESTAMP_BYTES..]);
    packed
}

/// Encodes Unix seconds into an 8-symbol token.
///
/// # Example
/// ```
/// use crockford::{timestamp::encode_timestamp, Alphabet};
/// assert_eq!(encode_timestamp(0, &Alphabet::UPPER), "00000000");
/// assert!(encode_timestamp(1, &Alphabet::UPPER) < encode_timestamp(2, &Alphabet::UPPER));
/// ```
pub fn encode_timestamp(seconds: i64, alphabet: &Alphabet) -> String {
    let mut token = String::with_capacity(TIMESTAMP_LEN);
    codec::encode_append(&mut token, &timestamp_bytes(seconds), alphabet);
    token
}

/// Encodes a calendar time (whole seconds) into an 8-symbol token.
pub fn encode_time<Tz: TimeZone>(time: &DateTime<Tz>, alphabet: &Alphabet) -> String {
    encode_timestamp(time.timestamp(), alphabet)
}
