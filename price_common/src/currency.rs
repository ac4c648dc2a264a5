//! Quote currency.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Currency a `Quote` is denominated in.
///
/// Only USD is supported; a decoded quote naming any other currency is rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    /// United States dollar.
    #[serde(rename = "USD")]
    #[strum(serialize = "USD")]
    Usd,
}

/// The fixed currency every quote is resolved in.
pub const QUOTE_CURRENCY: Currency = Currency::Usd;

impl Currency {
    /// Key of this currency in the price service's `current_price` mapping.
    pub fn upstream_key(&self) -> String {
        self.as_ref().to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_upper_and_looks_up_lower() {
        assert_eq!(QUOTE_CURRENCY.to_string(), "USD");
        assert_eq!(QUOTE_CURRENCY.upstream_key(), "usd");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("eur".parse::<Currency>().is_err());
    }
}
