//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::forge::config::{
    DEFAULT_BASE_LENGTH, DEFAULT_EPOCH_YEAR, DEFAULT_GROWTH_INTERVAL_YEARS, DEFAULT_SECRET,
};
use crate::forge::{GeneratorConfig, Prefix, Style};

/// Top-level CLI parser for `forgeid`.
#[derive(Debug, Parser)]
#[command(name = "forgeid", version, about = "Generate and verify self-signed identifiers")]
pub struct Cli {
    /// Generator settings shared by every command.
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Settings used to build the generator.
#[derive(Debug, Args)]
pub struct GeneratorArgs {
    /// Signing secret shared by issuers and verifiers.
    #[arg(long, env = "FORGEID_SECRET", default_value = DEFAULT_SECRET, hide_env_values = true)]
    pub secret: String,

    /// Year the length schedule counts from.
    #[arg(long, env = "FORGEID_EPOCH_YEAR", default_value_t = DEFAULT_EPOCH_YEAR)]
    pub epoch_year: i32,

    /// Payload length at the epoch year.
    #[arg(long, env = "FORGEID_BASE_LENGTH", default_value_t = DEFAULT_BASE_LENGTH)]
    pub base_length: usize,

    /// Years between one-character payload growth steps.
    #[arg(long, env = "FORGEID_GROWTH_INTERVAL", default_value_t = DEFAULT_GROWTH_INTERVAL_YEARS)]
    pub growth_interval: u32,
}

impl GeneratorArgs {
    /// Converts the parsed flags into a generator configuration.
    #[must_use]
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.secret.as_bytes())
            .with_epoch_year(self.epoch_year)
            .with_base_length(self.base_length)
            .with_growth_interval_years(self.growth_interval)
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate new identifiers.
    Generate {
        /// Alphanumeric prefix placed before the first dash.
        #[arg(long)]
        prefix: Option<Prefix>,
        /// Grouping style: none, dash or space.
        #[arg(long, default_value_t = Style::None)]
        style: Style,
        /// Number of identifiers to print, one per line.
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Verify identifiers; exits non-zero if any fails.
    Verify {
        /// Identifiers to check.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Re-render an identifier in another style.
    Format {
        /// Identifier to re-render.
        id: String,
        /// Grouping style: none, dash or space.
        #[arg(long, default_value_t = Style::None)]
        style: Style,
    },
    /// Generate many identifiers and report duplicates and failures.
    Stress {
        /// Identifiers to generate.
        #[arg(long, default_value_t = 1_000_000)]
        total: u64,
        /// Report progress every this many identifiers (0 disables).
        #[arg(long, default_value_t = 100_000)]
        step: u64,
        /// Print the final report as JSON.
        #[arg(long)]
        json: bool,
    },
}
