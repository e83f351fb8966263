//! # Checksum Command
//!
//! Prints or verifies the check symbol of a raw body.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    alphabet::Case,
    checksum::{checksum, verify_checksum},
};

/// Arguments for the checksum command
#[derive(Debug, Clone)]
pub struct ChecksumArgs {
    /// Body to checksum (stdin when absent)
    pub input: Option<String>,
    pub case: Case,
    /// Expected symbol; fail unless it matches
    pub verify: Option<char>,
}

/// Executes the checksum command.
pub fn execute(args: &ChecksumArgs) -> Result<()> {
    let body = super::input_bytes(args.input.as_deref())?;

    match args.verify {
        Some(expected) => {
            if !verify_checksum(&body, expected) {
                anyhow::bail!(
                    "Checksum mismatch: expected {}, got {expected}",
                    checksum(&body, args.case)
                );
            }
            println!("{expected}");
        }
        None => println!("{}", checksum(&body, args.case)),
    }

    Ok(())
}
