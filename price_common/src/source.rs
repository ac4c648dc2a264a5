//! Price service access.
//!
//! `PriceSource` is the seam between the resolver and the network: one call per
//! identifier, returning the raw status and body so that status, decode and
//! missing-quote handling stays in the resolver. `CoinGeckoSource` is the HTTP
//! implementation backed by a blocking `reqwest` client with a bounded timeout.
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::error::PerformerError;
use crate::net::{DEFAULT_PRICE_API_URL, MAX_UPSTREAM_BODY_BYTES, UPSTREAM_TIMEOUT};

/// Query flags asking for market data only.
pub const COIN_QUERY: [(&str, &str); 6] = [
    ("localization", "false"),
    ("tickers", "false"),
    ("market_data", "true"),
    ("community_data", "false"),
    ("developer_data", "false"),
    ("sparkline", "false"),
];

/// Raw answer of the price service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl UpstreamReply {
    /// `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can look up the coin record for an identifier.
pub trait PriceSource {
    /// Performs exactly one upstream call for `token_id`.
    ///
    /// Only transport failures are errors here; any status code is returned as a reply.
    fn fetch_coin(&self, token_id: &str) -> Result<UpstreamReply, PerformerError>;
}

impl<T: PriceSource + ?Sized> PriceSource for &T {
    fn fetch_coin(&self, token_id: &str) -> Result<UpstreamReply, PerformerError> {
        (**self).fetch_coin(token_id)
    }
}

impl<T: PriceSource + ?Sized> PriceSource for Box<T> {
    fn fetch_coin(&self, token_id: &str) -> Result<UpstreamReply, PerformerError> {
        (**self).fetch_coin(token_id)
    }
}

impl<T: PriceSource + ?Sized> PriceSource for Arc<T> {
    fn fetch_coin(&self, token_id: &str) -> Result<UpstreamReply, PerformerError> {
        (**self).fetch_coin(token_id)
    }
}

/// CoinGecko `/api/v3/coins/{id}` client.
#[derive(Debug, Clone)]
pub struct CoinGeckoSource {
    client: Client,
    base_url: Url,
    max_body_bytes: u64,
}

impl CoinGeckoSource {
    /// Client for the public API with the default 10 second timeout.
    pub fn new() -> Result<Self, PerformerError> {
        Self::with_config(DEFAULT_PRICE_API_URL, UPSTREAM_TIMEOUT)
    }

    /// Client for another deployment of the API (proxy, mirror, test stub).
    pub fn with_base_url(base_url: &str) -> Result<Self, PerformerError> {
        Self::with_config(base_url, UPSTREAM_TIMEOUT)
    }

    /// Client with an explicit base URL and request timeout.
    pub fn with_config(base_url: &str, timeout: Duration) -> Result<Self, PerformerError> {
        let parsed = Url::parse(base_url).map_err(|e| {
            PerformerError::Config(format!("invalid price service URL {}: {}", base_url, e))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PerformerError::Config(format!(
                "price service URL {} cannot carry a path",
                base_url
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PerformerError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: parsed,
            max_body_bytes: MAX_UPSTREAM_BODY_BYTES,
        })
    }

    /// Caps how much of a response body is read.
    ///
    /// A 2xx body over the cap is a transport failure; any other body is truncated.
    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Full request URL for `token_id`; the identifier is a single path segment.
    pub fn coin_url(&self, token_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base URLs are rejected at construction
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v3", "coins", token_id]);
        }
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(COIN_QUERY.iter());
        url
    }
}

impl PriceSource for CoinGeckoSource {
    fn fetch_coin(&self, token_id: &str) -> Result<UpstreamReply, PerformerError> {
        let url = self.coin_url(token_id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| PerformerError::transport(token_id, e))?;
        let status = response.status().as_u16();

        let mut raw = Vec::new();
        response
            .take(self.max_body_bytes.saturating_add(1))
            .read_to_end(&mut raw)
            .map_err(|e| PerformerError::transport(token_id, e))?;

        if raw.len() as u64 > self.max_body_bytes {
            if (200..300).contains(&status) {
                return Err(PerformerError::transport(
                    token_id,
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("response body exceeds {} bytes", self.max_body_bytes),
                    ),
                ));
            }
            warn!(
                "Price service body for {} truncated to {} bytes",
                token_id, self.max_body_bytes
            );
            raw.truncate(self.max_body_bytes as usize);
        }
        let body = String::from_utf8_lossy(&raw).into_owned();

        debug!("Price service answered {} ({} bytes)", status, body.len());
        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_coin_url_with_market_data_flags() {
        let source = CoinGeckoSource::new().unwrap();
        assert_eq!(
            source.coin_url("bitcoin").as_str(),
            "https://api.coingecko.com/api/v3/coins/bitcoin?localization=false&tickers=false\
             &market_data=true&community_data=false&developer_data=false&sparkline=false"
        );
    }

    #[test]
    fn keeps_base_path_and_encodes_identifier() {
        let source = CoinGeckoSource::with_base_url("http://127.0.0.1:9/proxy/").unwrap();
        let url = source.coin_url("a/b c");
        assert_eq!(url.path(), "/proxy/api/v3/coins/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            CoinGeckoSource::with_base_url("not a url"),
            Err(PerformerError::Config(_))
        ));
        assert!(matches!(
            CoinGeckoSource::with_base_url("mailto:prices@example.com"),
            Err(PerformerError::Config(_))
        ));
    }

    #[test]
    fn success_range() {
        let ok = UpstreamReply { status: 200, body: String::new() };
        let limited = UpstreamReply { status: 429, body: String::new() };
        assert!(ok.is_success());
        assert!(!limited.is_success());
    }
}
