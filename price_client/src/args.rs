//! Command-line arguments for the Price Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Command-line arguments for the price client.
#[derive(Parser, Debug)]
#[command(version, about = "Submits a price lookup task to a price performer")]
pub struct Args {
    /// Address of the performer host, e.g. 127.0.0.1:8080.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub server: String,

    /// Identifier to price, e.g. bitcoin.
    #[arg(long)]
    pub token: String,

    /// Correlation token for the task; generated when omitted.
    #[arg(long)]
    pub task_id: Option<String>,
}
