mod position;
mod prices;

use std::path::Path;

use thiserror::Error;

use crate::model::{CalculatorConfig, Currency};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Price for {currency} must be a positive finite number, got {value}")]
    InvalidPrice { currency: Currency, value: f64 },

    #[error("Stablecoin {currency} is priced at {value}, expected close to 1.0")]
    StablecoinDepeg { currency: Currency, value: f64 },

    #[error("Deposit currency {0} is not supported (expected BTC, ETH, USDC or USDT)")]
    UnsupportedCurrency(Currency),

    #[error("Deposit amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),

    #[error("Hold period must be at least one month")]
    ZeroHoldPeriod,

    #[error("Bonus value must be a non-negative finite number, got {0}")]
    InvalidBonus(f64),

    #[error("DEX fee must be a non-negative finite number of basis points, got {0}")]
    InvalidDexFee(f64),
}

/// Load and fully validate a calculator config from a JSON file.
pub fn load_and_validate(path: &Path) -> Result<CalculatorConfig, Vec<ValidationError>> {
    let contents = std::fs::read_to_string(path).map_err(|e| vec![ValidationError::Io(e)])?;
    let config: CalculatorConfig =
        serde_json::from_str(&contents).map_err(|e| vec![ValidationError::Json(e)])?;
    validate(&config)?;
    Ok(config)
}

/// Validate a config, collecting all errors.
pub fn validate(config: &CalculatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(prices::check_prices(&config.prices));
    errors.extend(position::check_deposit(&config.deposit));
    errors.extend(position::check_pool(&config.pool));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fold a list of validation errors into a single `anyhow` error.
pub fn into_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow::anyhow!("Config validation failed:\n  {}", msgs.join("\n  "))
}

/// CLI entry point for the `validate` subcommand.
pub fn run(path: &Path) -> anyhow::Result<()> {
    match load_and_validate(path) {
        Ok(config) => {
            println!(
                "Config '{}' is valid. Deposit worth ${:.2}.",
                config.label(),
                config.prices.to_usd(config.deposit.amount, config.deposit.currency)
            );
            Ok(())
        }
        Err(errors) => {
            eprintln!("Validation failed with {} error(s):", errors.len());
            for (i, e) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, e);
            }
            std::process::exit(1);
        }
    }
}
