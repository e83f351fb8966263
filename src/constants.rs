//! # Constants
//!
//! Centralized constants for magic values used throughout crockford.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Alphabets
// =============================================================================

/// Lowercase Crockford alphabet (excludes i, l, o, u).
pub const LOWERCASE_ALPHABET: &str = "0123456789abcdefghjkmnpqrstvwxyz";

/// Uppercase Crockford alphabet (excludes I, L, O, U).
pub const UPPERCASE_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Lowercase alphabet extended with the five checksum-only symbols.
pub const LOWERCASE_CHECKSUM: &str = "0123456789abcdefghjkmnpqrstvwxyz*~$=u";

/// Uppercase alphabet extended with the five checksum-only symbols.
pub const UPPERCASE_CHECKSUM: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ*~$=U";

// =============================================================================
// Bit Packing
// =============================================================================

/// Bits carried by one data symbol.
pub const BITS_PER_SYMBOL: usize = 5;

/// Mask selecting one 5-bit group.
pub const SYMBOL_MASK: u32 = 0x1f;

/// Number of data symbols in an alphabet.
pub const ALPHABET_LEN: usize = 32;

// =============================================================================
// Checksum
// =============================================================================

/// Modulus of the checksum (size of the checksum alphabet).
pub const CHECKSUM_MODULUS: u32 = 37;

// =============================================================================
// Timestamps
// =============================================================================

/// Raw bytes packed from a timestamp (40 bits).
pub const TIMESTAMP_BYTES: usize = 5;

/// Symbols in an encoded timestamp token.
pub const TIMESTAMP_LEN: usize = 8;

// =============================================================================
// ID Generation
// =============================================================================

/// Default ID pattern: timestamp token, 8 random symbols, checksum.
pub const DEFAULT_ID_PATTERN: &str = "%T%RRRRRRRR%C";

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "crockford";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
