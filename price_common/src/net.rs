//! Shared networking constants and helpers used by the performer host and client.
use std::time::Duration;

/// TCP port the performer host accepts tasks on.
pub const PERFORMER_PORT: u16 = 8080;
/// Read/write timeout applied to each task connection by the host.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout of a single call to the price service.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
/// Largest price service body read into memory.
pub const MAX_UPSTREAM_BODY_BYTES: u64 = 4 * 1024 * 1024;
/// Base URL of the public CoinGecko API.
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}
