pub mod amm;
mod calculator;
mod error;
mod sweep;

pub use calculator::PairReturnCalculator;
pub use error::CalcError;
pub use sweep::{Analysis, MAX_ANALYSIS_POINTS};

use crate::model::{Deposit, PoolConfig, PriceBasket, ScenarioResult};

/// One-shot scenario without keeping a calculator around.
pub fn compute_scenario(
    prices: PriceBasket,
    deposit: Deposit,
    pool: PoolConfig,
    htr_price_change_pct: f64,
) -> Result<ScenarioResult, CalcError> {
    PairReturnCalculator::new(prices, deposit, pool)?.calculate_position(htr_price_change_pct)
}

/// Every scenario from `min_change` to `max_change` (inclusive) in `step`
/// percentage-point increments.
pub fn generate_analysis(
    prices: PriceBasket,
    deposit: Deposit,
    pool: PoolConfig,
    min_change: f64,
    max_change: f64,
    step: f64,
) -> Result<Vec<ScenarioResult>, CalcError> {
    let calculator = PairReturnCalculator::new(prices, deposit, pool)?;
    Ok(calculator.generate_analysis(min_change, max_change, step)?.collect())
}
