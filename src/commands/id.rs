//! # ID Command
//!
//! Generates one or more identifiers from a pattern.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{alphabet::Case, id::generate};

/// Arguments for the id command
#[derive(Debug, Clone)]
pub struct IdArgs {
    pub pattern: String,
    pub count: usize,
    pub case: Case,
}

/// Executes the id command, printing one ID per line.
pub fn execute(args: &IdArgs) -> Result<()> {
    for _ in 0..args.count {
        println!("{}", generate(&args.pattern, args.case));
    }
    Ok(())
}
