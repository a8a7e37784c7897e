use crate::model::{Currency, PriceBasket};

use super::ValidationError;

/// How far a stablecoin may drift from $1 before a config is rejected. The
/// calculator itself accepts any positive price.
const MAX_STABLECOIN_DEVIATION: f64 = 0.10;

pub fn check_prices(prices: &PriceBasket) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (currency, value) in prices.entries() {
        if !value.is_finite() || value <= 0.0 {
            errors.push(ValidationError::InvalidPrice { currency, value });
            continue;
        }
        if matches!(currency, Currency::Usdc | Currency::Usdt)
            && (value - 1.0).abs() > MAX_STABLECOIN_DEVIATION
        {
            errors.push(ValidationError::StablecoinDepeg { currency, value });
        }
    }

    errors
}
