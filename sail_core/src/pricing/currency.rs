//! Currencies
//!
//! Price tables are in NZD. Each storefront currency carries a fixed
//! exchange rate and its own market markup; the markup reflects local
//! pricing strategy and is not derived from the rate.
//!
//! | Code | Rate (per NZD) | Market markup |
//! |------|----------------|---------------|
//! | NZD  | 1.00           | 1.00          |
//! | AUD  | 0.91           | 1.05          |
//! | USD  | 0.59           | 1.12          |
//! | GBP  | 0.47           | 1.15          |
//! | EUR  | 0.55           | 1.10          |
//! | CAD  | 0.82           | 1.08          |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SailError, SailResult};

/// Customer-facing currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Nzd,
    Aud,
    Usd,
    Gbp,
    Eur,
    Cad,
}

impl Currency {
    /// All supported currencies for UI selection
    pub const ALL: [Currency; 6] = [
        Currency::Nzd,
        Currency::Aud,
        Currency::Usd,
        Currency::Gbp,
        Currency::Eur,
        Currency::Cad,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Nzd => "NZD",
            Currency::Aud => "AUD",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
        }
    }

    /// Parse an ISO code (case-insensitive)
    pub fn from_str_flexible(s: &str) -> SailResult<Self> {
        let upper = s.trim().to_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| SailError::unknown_option("currency", s))
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Nzd | Currency::Aud | Currency::Usd | Currency::Cad => "$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
        }
    }

    /// Units of this currency per NZD (fixed table, not live rates)
    pub fn exchange_rate(&self) -> f64 {
        match self {
            Currency::Nzd => 1.0,
            Currency::Aud => 0.91,
            Currency::Usd => 0.59,
            Currency::Gbp => 0.47,
            Currency::Eur => 0.55,
            Currency::Cad => 0.82,
        }
    }

    /// Market-specific markup applied after the base markup
    pub fn market_markup(&self) -> f64 {
        match self {
            Currency::Nzd => 1.0,
            Currency::Aud => 1.05,
            Currency::Usd => 1.12,
            Currency::Gbp => 1.15,
            Currency::Eur => 1.10,
            Currency::Cad => 1.08,
        }
    }

    /// Format a whole amount, e.g. `"NZD $1234"`
    pub fn format_amount(&self, amount: u64) -> String {
        format!("{} {}{}", self.code(), self.symbol(), amount)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!(Currency::from_str_flexible("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str_flexible(" GBP ").unwrap(), Currency::Gbp);
        assert!(Currency::from_str_flexible("JPY").is_err());
    }

    #[test]
    fn test_base_currency_is_identity() {
        assert_eq!(Currency::Nzd.exchange_rate(), 1.0);
        assert_eq!(Currency::Nzd.market_markup(), 1.0);
    }

    #[test]
    fn test_markup_not_proportional_to_rate() {
        let ratios: Vec<f64> = Currency::ALL
            .iter()
            .map(|c| c.market_markup() / c.exchange_rate())
            .collect();
        assert!(ratios.windows(2).any(|w| (w[0] - w[1]).abs() > 1e-6));
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
        let c: Currency = serde_json::from_str("\"AUD\"").unwrap();
        assert_eq!(c, Currency::Aud);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(Currency::Gbp.format_amount(250), "GBP £250");
    }
}
