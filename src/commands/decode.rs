//! # Decode Command
//!
//! Decodes Crockford symbols back to raw bytes, optionally checking and
//! stripping a trailing checksum symbol.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt::Write as _,
    io::{self, Write},
};

use anyhow::{Context, Result};

use crate::{
    alphabet::{Alphabet, Case},
    checksum::{checksum, verify_checksum},
    codec,
    normalize::normalize_bytes,
};

/// Arguments for the decode command
#[derive(Debug, Clone)]
pub struct DecodeArgs {
    /// Symbols to decode (stdin when absent)
    pub input: Option<String>,
    pub case: Case,
    /// Normalize the input before decoding (implies uppercase)
    pub normalize: bool,
    /// Input ends with a checksum symbol to verify and strip
    pub checksum: bool,
    /// Print bytes as lowercase hex instead of raw
    pub hex: bool,
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Decodes `input` with the alphabet selected by `case`, or normalized
/// against the uppercase alphabet when `normalize_input` is set.
///
/// With `with_checksum`, the last symbol is split off and must match the
/// checksum of the decoded body.
pub fn decode_input(
    input: &[u8],
    case: Case,
    normalize_input: bool,
    with_checksum: bool,
) -> Result<Vec<u8>> {
    let normalized;
    let (symbols, alphabet) = if normalize_input {
        normalized = normalize_bytes(input);
        (normalized.as_bytes(), &Alphabet::UPPER)
    } else {
        (trim_ascii_whitespace(input), case.alphabet())
    };

    if !with_checksum {
        return codec::decode(symbols, alphabet).context("Failed to decode input");
    }

    let Some((&check, body)) = symbols.split_last() else {
        anyhow::bail!("Missing checksum symbol");
    };
    let bytes = codec::decode(body, alphabet).context("Failed to decode input")?;
    let check = char::from(check);

    if !verify_checksum(&bytes, check) {
        anyhow::bail!(
            "Checksum mismatch: expected {}, got {}",
            checksum(&bytes, case),
            check.escape_default()
        );
    }

    Ok(bytes)
}

/// Formats bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
}

/// Executes the decode command.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let input = super::input_bytes(args.input.as_deref())?;
    let bytes = decode_input(&input, args.case, args.normalize, args.checksum)?;

    if args.hex {
        println!("{}", to_hex(&bytes));
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}
