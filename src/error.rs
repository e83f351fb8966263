//! # Errors
//!
//! Error types returned by the decoder.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors produced when decoding a symbol sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte that is not part of the selected alphabet.
    #[error("invalid symbol '{}' at position {position}", .symbol.escape_ascii())]
    InvalidSymbol {
        /// The offending input byte
        symbol: u8,
        /// Byte offset of the symbol in the input
        position: usize,
    },

    /// The bits after the last full byte are not zero.
    #[error("invalid padding: trailing bits are not zero")]
    InvalidPadding,
}
