use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// A one-time liquidity contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Deposit {
    /// Amount of `currency` deposited (must be > 0).
    pub amount: f64,
    /// One of BTC, ETH, USDC, USDT.
    pub currency: Currency,
}

impl Deposit {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// Reward-program terms attached to a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PoolConfig {
    /// Lock period of the position in months.
    pub hold_period_months: u32,
    /// Bonus paid in HTR, valued in USD at scenario start.
    pub bonus_value_usd: f64,
    /// DEX fee setting used for the informational fee estimate.
    pub dex_fees_bps: f64,
}
