//! # Timestamp Command
//!
//! Prints the sortable 8-symbol token for a Unix time (now by default).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use chrono::Utc;

use crate::{alphabet::Case, timestamp::encode_timestamp};

/// Arguments for the timestamp command
#[derive(Debug, Clone)]
pub struct TimestampArgs {
    /// Unix seconds (current time when absent)
    pub seconds: Option<i64>,
    pub case: Case,
}

/// Executes the timestamp command.
pub fn execute(args: &TimestampArgs) -> Result<()> {
    let seconds = args.seconds.unwrap_or_else(|| Utc::now().timestamp());
    println!("{}", encode_timestamp(seconds, args.case.alphabet()));
    Ok(())
}
