//! # Configuration
//!
//! Optional user configuration stored at `~/.config/crockford/config`.
//! A missing file means defaults; command-line flags override file values.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    alphabet::Case,
    constants::{DEFAULT_ID_PATTERN, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME},
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// User configuration stored at ~/.config/crockford/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Letter case of encoded output
    #[serde(default)]
    pub case: Case,

    /// Pattern used by the `id` command
    #[serde(default = "default_id_pattern")]
    pub id_pattern: String,

    /// Whether `encode` appends a checksum symbol and `decode` expects one
    #[serde(default)]
    pub checksum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: Case::default(),
            id_pattern: DEFAULT_ID_PATTERN.to_string(),
            checksum: false,
        }
    }
}

fn default_id_pattern() -> String {
    DEFAULT_ID_PATTERN.to_string()
}

impl Config {
    /// Returns the path to the config file (~/.config/crockford/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config.
    pub fn path() -> Option<PathBuf> {
        get_home_override()
            .or_else(dirs::home_dir)
            .map(|home| {
                home.join(".config")
                    .join(GLOBAL_CONFIG_DIR)
                    .join(GLOBAL_CONFIG_FILENAME)
            })
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses config file contents.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Writes a commented default config unless one already exists.
    /// Returns the path and whether the file was created.
    pub fn create_default_if_missing() -> Result<(PathBuf, bool)> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok((path, false));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, Self::default().to_commented_toml())
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok((path, true))
    }

    /// Renders the config with a comment above every option.
    fn to_commented_toml(&self) -> String {
        let case = match self.case {
            Case::Lower => "lower",
            Case::Upper => "upper",
        };

        format!(
            r#"# crockford Configuration
# Location: ~/.config/crockford/config

# Letter case of encoded output: "upper" or "lower".
# Decoding expects input in this case unless --normalize is given.
# Default: "upper"
case = "{case}"

# Pattern for the `id` command.
#
# Available tokens:
#   %T  - Timestamp token (8 chars, sorts in time order)
#   %R  - Random symbol (repeat for more: %RRRR = 4 chars)
#   %C  - Checksum symbol over everything before it
#   %y  - Year (2 digits)
#   %m  - Month (01-12)
#   %d  - Day of month (01-31)
#   %j  - Day of year (001-366)
#   %%  - Literal percent sign
#
# Default: "{default_pattern}"
id_pattern = "{id_pattern}"

# Append a checksum symbol to `encode` output and verify it on `decode`.
# Default: false
checksum = {checksum}
"#,
            default_pattern = DEFAULT_ID_PATTERN,
            id_pattern = self.id_pattern,
            checksum = self.checksum,
        )
    }
}
