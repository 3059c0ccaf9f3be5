//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::commands::Command;

/// LuminaLib book catalog client.
#[derive(Parser, Debug)]
#[command(name = "lumina")]
#[command(author, version = env!("LUMINA_VERSION"), about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL
    #[arg(
        long,
        global = true,
        env = lumina::config::API_URL_ENV,
        default_value = lumina::config::DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Where the session token is kept (defaults to the user data directory)
    #[arg(long, global = true, env = "LUMINA_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,
}
