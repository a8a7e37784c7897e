use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::model::ScenarioResult;

/// One flat CSV row per scenario, suitable for charting.
#[derive(Debug, Serialize)]
pub struct ScenarioCsvRow {
    pub price_change_pct: f64,
    pub end_htr_price: f64,
    pub new_usdt: f64,
    pub new_htr: f64,
    pub usdt_deficit: f64,
    pub htr_il_protection: f64,
    pub lp_value_usd: f64,
    pub lp_value_original: f64,
    pub hodl_bonus: f64,
    pub sell_bonus: f64,
    pub final_hodl: f64,
    pub final_sell: f64,
    pub pct_lp_only: f64,
    pub pct_hodl: f64,
    pub pct_sell: f64,
}

impl From<&ScenarioResult> for ScenarioCsvRow {
    fn from(r: &ScenarioResult) -> Self {
        Self {
            price_change_pct: r.price_change_pct,
            end_htr_price: r.end_price.htr_price,
            new_usdt: r.new_balances.usdt,
            new_htr: r.new_balances.htr,
            usdt_deficit: r.usdt_deficit,
            htr_il_protection: r.htr_il_protection,
            lp_value_usd: r.lp_value.usd,
            lp_value_original: r.lp_value.original_currency,
            hodl_bonus: r.plus_bonus.hodl,
            sell_bonus: r.plus_bonus.sell,
            final_hodl: r.final_value.hodl,
            final_sell: r.final_value.sell,
            pct_lp_only: r.pct_change.lp_only,
            pct_hodl: r.pct_change.hodl,
            pct_sell: r.pct_change.sell,
        }
    }
}

pub fn write_csv<W: Write>(out: W, results: &[ScenarioResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for r in results {
        writer.serialize(ScenarioCsvRow::from(r))?;
    }
    writer.flush()?;
    Ok(())
}
