// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod input;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cryptographically secure password generator", long_about = None)]
pub struct Args {
    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}
