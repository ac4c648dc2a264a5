//! Quote data model and JSON encoding helpers.
//!
//! A `Quote` is the result of one successful resolution: the identifier and display
//! name reported by the price service, the price, the currency and the Unix time (in
//! seconds) at which the price was observed. The timestamp is taken locally when the
//! quote is built, never from the upstream record.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::currency::{Currency, QUOTE_CURRENCY};
use crate::error::PerformerError;

/// Resolved price record for a single identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier as reported by the price service.
    pub token_id: String,
    /// Display name as reported by the price service.
    pub token_name: String,
    /// Price in `currency`, passed through unmodified.
    pub price: f64,
    /// Always `USD`.
    pub currency: Currency,
    /// Observation time in seconds since the Unix epoch.
    pub timestamp: i64,
}

impl Quote {
    /// Build a quote observed now.
    pub fn observed(token_id: String, token_name: String, price: f64) -> Quote {
        Quote {
            token_id,
            token_name,
            price,
            currency: QUOTE_CURRENCY,
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, PerformerError> {
        serde_json::to_vec(self).map_err(|source| PerformerError::Encode {
            token_id: self.token_id.clone(),
            source,
        })
    }

    /// Decode a quote previously produced by [`Self::to_json_bytes`].
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Quote, PerformerError> {
        serde_json::from_slice(bytes).map_err(|source| PerformerError::Decode {
            token_id: String::new(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quote {
        Quote {
            token_id: "bitcoin".to_string(),
            token_name: "Bitcoin".to_string(),
            price: 67_012.25,
            currency: Currency::Usd,
            timestamp: 1_718_000_000,
        }
    }

    #[test]
    fn encodes_field_named_json() {
        let bytes = sample().to_json_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["token_id"], "bitcoin");
        assert_eq!(value["token_name"], "Bitcoin");
        assert_eq!(value["price"], 67_012.25);
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["timestamp"], 1_718_000_000);
    }

    fn assert_round_trips(price: f64) {
        let quote = Quote { price, ..sample() };
        let decoded = Quote::from_json_bytes(&quote.to_json_bytes().unwrap()).unwrap();
        assert_eq!(decoded, quote, "price {:e} changed on decode", price);
        assert_eq!(decoded.price.to_bits(), price.to_bits());
    }

    #[test]
    fn decode_is_inverse_of_encode() {
        for price in [
            67_012.25,
            0.0014560818564369113,
            0.1 + 0.2,
            1.0 / 3.0,
            0.000000123,
            f64::MIN_POSITIVE,
            f64::MAX,
        ] {
            assert_round_trips(price);
        }
    }

    #[test]
    fn full_precision_prices_survive_decode() {
        // geometric sweep from 1e-8 to 1e6 hits many 17-digit values
        let mut price = 1e-8_f64;
        while price < 1e6 {
            assert_round_trips(price);
            price *= 1.000_731_9;
        }
    }

    #[test]
    fn rejects_foreign_currency() {
        let raw = br#"{"token_id":"bitcoin","token_name":"Bitcoin","price":1.0,"currency":"EUR","timestamp":1}"#;
        assert!(matches!(
            Quote::from_json_bytes(raw),
            Err(PerformerError::Decode { .. })
        ));
    }

    #[test]
    fn observed_stamps_current_time_in_usd() {
        let before = Utc::now().timestamp();
        let quote = Quote::observed("ethereum".to_string(), "Ethereum".to_string(), 3_100.5);
        let after = Utc::now().timestamp();
        assert_eq!(quote.currency, Currency::Usd);
        assert!(quote.timestamp >= before && quote.timestamp <= after);
        assert_eq!(quote.price, 3_100.5);
    }
}
