use thiserror::Error;

use crate::model::Currency;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Unsupported deposit currency `{0}` (expected BTC, ETH, USDC or USDT)")]
    UnsupportedCurrency(String),

    #[error("Deposit amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),

    #[error("Price for {currency} must be a positive finite number, got {value}")]
    InvalidPrice { currency: Currency, value: f64 },

    #[error("HTR price change {0}% is out of range (must be finite and greater than -100%)")]
    PriceChangeOutOfRange(f64),

    #[error("Analysis step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    #[error("Analysis range is empty: min {min}% is above max {max}%")]
    InvalidRange { min: f64, max: f64 },

    #[error("Analysis would produce {count} scenarios, more than the limit of {max}")]
    TooManyPoints { count: f64, max: usize },
}
