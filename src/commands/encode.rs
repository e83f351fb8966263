//! # Encode Command
//!
//! Encodes raw bytes (argument or stdin) as Crockford symbols.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{alphabet::Case, checksum::checksum, codec};

/// Arguments for the encode command
#[derive(Debug, Clone)]
pub struct EncodeArgs {
    /// Text to encode (stdin when absent)
    pub input: Option<String>,
    pub case: Case,
    /// Append a checksum symbol
    pub checksum: bool,
}

/// Encodes `bytes`, optionally followed by the checksum symbol of the raw bytes.
pub fn render(bytes: &[u8], case: Case, with_checksum: bool) -> String {
    let mut output = codec::encode(bytes, case.alphabet());
    if with_checksum {
        output.push(checksum(bytes, case));
    }
    output
}

/// Executes the encode command.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    let bytes = super::input_bytes(args.input.as_deref())?;
    println!("{}", render(&bytes, args.case, args.checksum));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        assert_eq!(render(b"foobar", Case::Upper, false), "CSQPYRK1E8");
        assert_eq!(render(b"foobar", Case::Lower, false), "csqpyrk1e8");
    }

    #[test]
    fn test_render_with_checksum() {
        // [36] mod 37 = 36 -> 'U'
        assert_eq!(render(&[36], Case::Upper, true), "4GU");
        assert_eq!(render(&[36], Case::Lower, true), "4gu");
    }
}
