// src/cli/commands.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Subcommand};

use crate::core::Config;
use crate::models::{BatchPolicy, GenerationPolicy};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a single password
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Copy the password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Generate a batch of passwords
    Batch {
        #[command(flatten)]
        batch: BatchArgs,

        /// Save the batch as CSV
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print a JSON report instead of plain lines
        #[arg(long)]
        json: bool,

        /// Copy every password to the clipboard, one per line
        #[arg(long)]
        copy_all: bool,

        /// Open the folder containing the CSV after saving
        #[arg(long, requires = "output")]
        open_folder: bool,
    },

    /// Interactive menu
    Interactive,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerationArgs {
    /// Password length (1-64)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Require at least one digit, one uppercase and one lowercase letter
    #[arg(long, conflicts_with = "no_require_all")]
    pub require_all: bool,

    /// Do not require every character class, even if it is the configured default
    #[arg(long)]
    pub no_require_all: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct BatchArgs {
    /// Number of passwords (1-10000)
    #[arg(long, short)]
    pub count: Option<usize>,

    /// Avoid repeats across the batch
    #[arg(long, short, conflicts_with = "allow_repeats")]
    pub unique: bool,

    /// Allow repeats even if unique batches are the configured default
    #[arg(long)]
    pub allow_repeats: bool,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

// An explicit flag wins over the configured default
fn pick_flag(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

impl GenerationArgs {
    pub fn apply(&self, base: GenerationPolicy) -> GenerationPolicy {
        GenerationPolicy::new(
            self.length.unwrap_or(base.length),
            pick_flag(self.require_all, self.no_require_all, base.require_all_classes),
        )
    }

    pub fn policy(&self, config: &Config) -> GenerationPolicy {
        self.apply(config.default_policy().generation)
    }
}

impl BatchArgs {
    pub fn policy(&self, config: &Config) -> BatchPolicy {
        let base = config.default_policy();
        BatchPolicy::new(
            self.count.unwrap_or(base.count),
            self.generation.apply(base.generation),
            pick_flag(self.unique, self.allow_repeats, base.unique),
        )
    }
}
