//! Price resolution: identifier in, `Quote` out.
//!
//! One upstream call per invocation, no retries and no caching. The three terminal
//! outcomes are a quote, a transport/status failure, or a missing-data failure.
use std::collections::HashMap;

use log::{debug, info};
use serde::Deserialize;

use crate::currency::{Currency, QUOTE_CURRENCY};
use crate::error::PerformerError;
use crate::quote::Quote;
use crate::source::PriceSource;

/// Coin record as returned by the price service. Unused fields are ignored.
#[derive(Debug, Deserialize)]
struct CoinRecord {
    id: String,
    symbol: String,
    name: String,
    #[serde(default)]
    market_data: MarketData,
}

#[derive(Debug, Default, Deserialize)]
struct MarketData {
    #[serde(default)]
    current_price: HashMap<String, Option<f64>>,
}

impl CoinRecord {
    fn price_in(&self, currency: Currency) -> Option<f64> {
        self.market_data
            .current_price
            .get(&currency.upstream_key())
            .copied()
            .flatten()
    }
}

/// Resolves identifiers to quotes through a [`PriceSource`].
#[derive(Debug, Clone)]
pub struct PriceResolver<S> {
    source: S,
}

impl<S: PriceSource> PriceResolver<S> {
    /// Create a resolver over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the coin record for `token_id` and shape it into a USD quote.
    ///
    /// The quote carries the identifier and name reported upstream, which may differ
    /// from `token_id` in casing or spelling.
    pub fn resolve(&self, token_id: &str) -> Result<Quote, PerformerError> {
        debug!("Fetching price for token {}", token_id);
        let reply = self.source.fetch_coin(token_id)?;

        if !reply.is_success() {
            return Err(PerformerError::UpstreamStatus {
                token_id: token_id.to_string(),
                status: reply.status,
                body: reply.body,
            });
        }

        let record: CoinRecord =
            serde_json::from_str(&reply.body).map_err(|source| PerformerError::Decode {
                token_id: token_id.to_string(),
                source,
            })?;

        let price = record
            .price_in(QUOTE_CURRENCY)
            .ok_or_else(|| PerformerError::MissingQuote {
                token_id: token_id.to_string(),
                currency: QUOTE_CURRENCY,
            })?;

        debug!("Coin record {} ({}) quoted at {}", record.id, record.symbol, price);
        let quote = Quote::observed(record.id, record.name, price);
        info!(
            "Price fetched successfully: token={} tokenID={} price=${:.2} currency={}",
            quote.token_name, quote.token_id, quote.price, quote.currency
        );
        Ok(quote)
    }
}
