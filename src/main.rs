//! # crockford CLI
//!
//! Command-line interface for the crockford codec.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use crockford::{
    commands::{self, ChecksumArgs, DecodeArgs, EncodeArgs, IdArgs, NormalizeArgs, TimestampArgs},
    Case, Config,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/crockford/config   Default case, ID pattern, checksum flag

Alphabet:
  0123456789ABCDEFGHJKMNPQRSTVWXYZ   (I, L, O, U excluded)
  Checksum symbols add: * ~ $ = U

Examples:
  crockford encode foobar           CSQPYRK1E8
  crockford decode CSQPYRK1E8       foobar
  crockford normalize csqp-yrkI-e8  CSQPYRK1E8
  crockford timestamp               Sortable token for the current time
  crockford id                      New sortable ID with checksum";

#[derive(Parser)]
#[command(name = "crockford")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Crockford Base32 encoder, decoder and ID toolkit")]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Letter case of output (and expected case of decode input)
    #[arg(long, global = true, value_enum)]
    case: Option<Case>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text (or stdin bytes) as Base32
    #[command(after_help = "Examples:\n  \
crockford encode foobar\n  \
crockford encode --checksum foobar\n  \
head -c 16 /dev/urandom | crockford encode --case lower")]
    Encode {
        /// Text to encode (reads stdin if omitted)
        input: Option<String>,

        /// Append a checksum symbol
        #[arg(long)]
        checksum: bool,
    },

    /// Decode Base32 symbols to bytes
    #[command(after_help = "Examples:\n  \
crockford decode CSQPYRK1E8\n  \
crockford decode --normalize csqp-yrkI-e8\n  \
crockford decode --checksum 4GU\n  \
crockford decode --hex ZW")]
    Decode {
        /// Symbols to decode (reads stdin if omitted)
        input: Option<String>,

        /// Normalize input first (fix case, O/I, drop hyphens)
        #[arg(long)]
        normalize: bool,

        /// Input ends with a checksum symbol; verify and strip it
        #[arg(long)]
        checksum: bool,

        /// Print bytes as hex
        #[arg(long)]
        hex: bool,
    },

    /// Print the sortable token for a Unix time
    Timestamp {
        /// Unix seconds (defaults to now)
        #[arg(long, allow_negative_numbers = true)]
        seconds: Option<i64>,
    },

    /// Print or verify the checksum symbol of a body
    Checksum {
        /// Body to checksum (reads stdin if omitted)
        input: Option<String>,

        /// Expected checksum symbol
        #[arg(long)]
        verify: Option<char>,
    },

    /// Normalize hand-typed symbols
    Normalize {
        /// Text to normalize (reads stdin if omitted)
        input: Option<String>,
    },

    /// Generate sortable IDs
    Id {
        /// ID pattern (overrides config)
        #[arg(long)]
        pattern: Option<String>,

        /// Number of IDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Create the config file with defaults
    Setup,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Neither of these needs (or should fail on) the config file
    match cli.command {
        Commands::Setup => return commands::setup(),
        Commands::Completions { shell } => return commands::completions(shell, &mut Cli::command()),
        _ => {}
    }

    let config = Config::load()?;
    let case = cli.case.unwrap_or(config.case);

    match cli.command {
        Commands::Encode { input, checksum } => commands::encode(&EncodeArgs {
            input,
            case,
            checksum: checksum || config.checksum,
        }),

        Commands::Decode {
            input,
            normalize,
            checksum,
            hex,
        } => commands::decode(&DecodeArgs {
            input,
            case,
            normalize,
            checksum: checksum || config.checksum,
            hex,
        }),

        Commands::Timestamp { seconds } => commands::timestamp(&TimestampArgs { seconds, case }),

        Commands::Checksum { input, verify } => commands::checksum(&ChecksumArgs {
            input,
            case,
            verify,
        }),

        Commands::Normalize { input } => commands::normalize(&NormalizeArgs { input }),

        Commands::Id { pattern, count } => commands::id(&IdArgs {
            pattern: pattern.unwrap_or(config.id_pattern),
            count,
            case,
        }),

        Commands::Setup | Commands::Completions { .. } => Ok(()),
    }
}
