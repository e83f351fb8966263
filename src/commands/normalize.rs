//! # Normalize Command
//!
//! Cleans up hand-typed symbols into canonical uppercase form.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::normalize::normalize_bytes;

/// Arguments for the normalize command
#[derive(Debug, Clone)]
pub struct NormalizeArgs {
    /// Text to normalize (stdin when absent)
    pub input: Option<String>,
}

/// Executes the normalize command.
///
/// Stdin is read as raw bytes, so invalid UTF-8 is dropped like any other
/// stray character.
pub fn execute(args: &NormalizeArgs) -> Result<()> {
    let input = super::input_bytes(args.input.as_deref())?;
    println!("{}", normalize_bytes(&input));
    Ok(())
}
