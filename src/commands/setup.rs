//! # Setup Command
//!
//! Writes a commented default config file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;

/// Executes the setup command.
pub fn execute() -> Result<()> {
    let (path, created) = Config::create_default_if_missing()?;

    if created {
        eprintln!("{} Created config at {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Config already exists at {}",
            "·".dimmed(),
            path.display()
        );
    }

    Ok(())
}
