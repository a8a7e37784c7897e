use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// The deposit a scenario was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputCurrency {
    pub currency: Currency,
    pub amount: f64,
    pub usd_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndPrice {
    pub htr_price: f64,
}

/// The two legs of the synthetic HTR/USDT pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolBalances {
    pub usdt: f64,
    pub htr: f64,
}

/// Value withdrawn from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LpValue {
    pub usd: f64,
    /// `usd` expressed in the deposit currency.
    pub original_currency: f64,
}

/// A value under both bonus strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyValues {
    /// Bonus kept in HTR and exposed to the price move.
    pub hodl: f64,
    /// Bonus sold at scenario start.
    pub sell: f64,
}

/// Percentage change against the deposit's USD value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentChange {
    pub lp_only: f64,
    pub hodl: f64,
    pub sell: f64,
}

/// Outcome of one hypothetical HTR price move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub price_change_pct: f64,
    pub hold_period_months: u32,
    pub input_currency: InputCurrency,
    pub end_price: EndPrice,
    pub starting_balances: PoolBalances,
    pub new_balances: PoolBalances,
    pub usdt_dex_fees: f64,
    /// Impermanent-loss magnitude in USD.
    pub usdt_deficit: f64,
    /// `usdt_deficit` in HTR at the ending price.
    pub htr_il_protection: f64,
    pub lp_value: LpValue,
    pub plus_bonus: StrategyValues,
    pub final_value: StrategyValues,
    pub pct_change: PercentChange,
}
