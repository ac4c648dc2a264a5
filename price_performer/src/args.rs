//! Command-line arguments for the price performer host.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use price_common::net::{DEFAULT_PRICE_API_URL, PERFORMER_PORT, REQUEST_TIMEOUT};

/// Command-line arguments for the price performer host.
#[derive(Parser, Debug)]
#[command(version, about = "Serves price lookup tasks over TCP")]
pub struct Args {
    /// Interface to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// TCP port for task connections.
    #[arg(long, default_value_t = PERFORMER_PORT)]
    pub port: u16,

    /// Read/write timeout of a task connection, in seconds.
    #[arg(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Base URL of the CoinGecko-compatible price service.
    #[arg(long, default_value = DEFAULT_PRICE_API_URL)]
    pub price_api_url: String,
}
