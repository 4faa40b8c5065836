//! Price display.
//!
//! Feed prices are plain decimals; this module only decides how they are shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency prefix (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Format an amount with the currency prefix and two decimals.
    ///
    /// ```
    /// use vitrine_catalog::money::Currency;
    /// assert_eq!(Currency::BRL.format(19.9), "R$ 19.90");
    /// ```
    pub fn format(&self, amount: f64) -> String {
        format!("{} {:.2}", self.symbol(), amount)
    }
}

impl FromStr for Currency {
    type Err = CatalogError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_uppercase().as_str() {
            "BRL" => Ok(Currency::BRL),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(CatalogError::UnsupportedCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
