use serde::{Deserialize, Serialize};

use crate::model::ScenarioResult;

/// Headline numbers over a sweep of scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub scenarios: usize,
    /// Price change with the lowest `pct_change.hodl`.
    pub worst_change_pct: f64,
    pub worst_hodl_pct: f64,
    /// Price change with the highest `pct_change.hodl`.
    pub best_change_pct: f64,
    pub best_hodl_pct: f64,
    /// Largest impermanent-loss deficit in USD and where it occurs.
    pub max_deficit_usd: f64,
    pub max_deficit_change_pct: f64,
    /// Lowest price change whose hold-strategy value covers the deposit.
    pub hodl_breakeven_change_pct: Option<f64>,
}

impl AnalysisSummary {
    /// `None` for an empty slice.
    pub fn from_results(results: &[ScenarioResult]) -> Option<Self> {
        let first = results.first()?;

        let mut worst = first;
        let mut best = first;
        let mut max_deficit = first;
        for r in results {
            if r.pct_change.hodl < worst.pct_change.hodl {
                worst = r;
            }
            if r.pct_change.hodl > best.pct_change.hodl {
                best = r;
            }
            if r.usdt_deficit > max_deficit.usdt_deficit {
                max_deficit = r;
            }
        }

        let hodl_breakeven_change_pct = results
            .iter()
            .filter(|r| r.final_value.hodl >= r.input_currency.usd_value)
            .map(|r| r.price_change_pct)
            .min_by(f64::total_cmp);

        Some(Self {
            scenarios: results.len(),
            worst_change_pct: worst.price_change_pct,
            worst_hodl_pct: worst.pct_change.hodl,
            best_change_pct: best.price_change_pct,
            best_hodl_pct: best.pct_change.hodl,
            max_deficit_usd: max_deficit.usdt_deficit,
            max_deficit_change_pct: max_deficit.price_change_pct,
            hodl_breakeven_change_pct,
        })
    }
}
