use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::position::{Deposit, PoolConfig};
use super::prices::PriceBasket;
use crate::calc::{CalcError, PairReturnCalculator};

/// Input document for the calculator: a price snapshot, a deposit and the
/// reward terms that apply to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CalculatorConfig {
    /// Optional label shown in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// USD price snapshot.
    pub prices: PriceBasket,
    /// The liquidity contribution.
    pub deposit: Deposit,
    /// Reward-program terms.
    pub pool: PoolConfig,
}

impl CalculatorConfig {
    pub fn calculator(&self) -> Result<PairReturnCalculator, CalcError> {
        PairReturnCalculator::new(self.prices, self.deposit, self.pool)
    }

    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!("{} {}", self.deposit.amount, self.deposit.currency)
        })
    }
}
