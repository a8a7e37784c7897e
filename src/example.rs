use crate::model::{CalculatorConfig, Currency, Deposit, PoolConfig, PriceBasket};

/// Reference position: 0.102 BTC paired against HTR at $0.07 with a
/// $2,000 bonus over a 12-month lock.
pub fn example_config() -> CalculatorConfig {
    CalculatorConfig {
        name: Some("0.102 BTC / HTR, 12-month lock".to_string()),
        prices: PriceBasket {
            htr: 0.07,
            btc: 98_520.0,
            eth: 3_339.0,
            usdc: 1.0,
            usdt: 1.0,
        },
        deposit: Deposit::new(0.102, Currency::Btc),
        pool: PoolConfig {
            hold_period_months: 12,
            bonus_value_usd: 2_000.0,
            dex_fees_bps: 25.0,
        },
    }
}

/// Print the example config JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&example_config())?;
    println!("{json}");
    Ok(())
}
