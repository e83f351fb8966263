//! # Commands
//!
//! CLI command implementations for crockford.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod checksum;
pub mod completions;
pub mod decode;
pub mod encode;
pub mod id;
pub mod normalize;
pub mod setup;
pub mod timestamp;

use std::io::{self, Read};

use anyhow::{Context, Result};

pub use self::{
    checksum::{execute as checksum, ChecksumArgs},
    completions::execute as completions,
    decode::{execute as decode, DecodeArgs},
    encode::{execute as encode, EncodeArgs},
    id::{execute as id, IdArgs},
    normalize::{execute as normalize, NormalizeArgs},
    setup::execute as setup,
    timestamp::{execute as timestamp, TimestampArgs},
};

/// Returns the argument bytes, or everything on stdin when no argument was given.
pub(crate) fn input_bytes(arg: Option<&str>) -> Result<Vec<u8>> {
    if let Some(text) = arg {
        return Ok(text.as_bytes().to_vec());
    }

    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
