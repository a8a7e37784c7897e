use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calc::CalcError;

/// Assets priced in a [`PriceBasket`](super::PriceBasket).
///
/// `HTR` is the paired pool asset; the other four can be deposited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Hathor, the volatile leg of the synthetic HTR/USDT pool.
    #[serde(alias = "htr")]
    Htr,
    #[serde(alias = "btc")]
    Btc,
    #[serde(alias = "eth")]
    Eth,
    #[serde(alias = "usdc")]
    Usdc,
    #[serde(alias = "usdt")]
    Usdt,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Htr,
        Currency::Btc,
        Currency::Eth,
        Currency::Usdc,
        Currency::Usdt,
    ];

    /// Currencies accepted as a liquidity deposit.
    pub const DEPOSITABLE: [Currency; 4] =
        [Currency::Btc, Currency::Eth, Currency::Usdc, Currency::Usdt];

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Htr => "HTR",
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
            Currency::Usdc => "USDC",
            Currency::Usdt => "USDT",
        }
    }

    pub fn is_depositable(self) -> bool {
        Self::DEPOSITABLE.contains(&self)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::UnsupportedCurrency(s.to_string()))
    }
}
