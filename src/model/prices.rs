use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Snapshot of USD prices, one per [`Currency`].
///
/// All conversions in and out of USD go through [`PriceBasket::usd_price`]
/// so the two directions stay inverse of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PriceBasket {
    /// HTR price in USD.
    pub htr: f64,
    /// BTC price in USD.
    pub btc: f64,
    /// ETH price in USD.
    pub eth: f64,
    /// USDC price in USD (normally 1.0).
    pub usdc: f64,
    /// USDT price in USD (normally 1.0).
    pub usdt: f64,
}

impl PriceBasket {
    pub fn usd_price(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Htr => self.htr,
            Currency::Btc => self.btc,
            Currency::Eth => self.eth,
            Currency::Usdc => self.usdc,
            Currency::Usdt => self.usdt,
        }
    }

    /// Value of `amount` units of `currency` in USD.
    pub fn to_usd(&self, amount: f64, currency: Currency) -> f64 {
        amount * self.usd_price(currency)
    }

    /// Units of `currency` worth `usd`.
    pub fn from_usd(&self, usd: f64, currency: Currency) -> f64 {
        usd / self.usd_price(currency)
    }

    /// `(currency, price)` pairs in a stable order.
    pub fn entries(&self) -> [(Currency, f64); 5] {
        Currency::ALL.map(|c| (c, self.usd_price(c)))
    }
}
