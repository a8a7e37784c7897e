use crate::model::{Deposit, PoolConfig};

use super::ValidationError;

pub fn check_deposit(deposit: &Deposit) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !deposit.currency.is_depositable() {
        errors.push(ValidationError::UnsupportedCurrency(deposit.currency));
    }
    if !deposit.amount.is_finite() || deposit.amount <= 0.0 {
        errors.push(ValidationError::InvalidAmount(deposit.amount));
    }

    errors
}

pub fn check_pool(pool: &PoolConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if pool.hold_period_months == 0 {
        errors.push(ValidationError::ZeroHoldPeriod);
    }
    if !pool.bonus_value_usd.is_finite() || pool.bonus_value_usd < 0.0 {
        errors.push(ValidationError::InvalidBonus(pool.bonus_value_usd));
    }
    if !pool.dex_fees_bps.is_finite() || pool.dex_fees_bps < 0.0 {
        errors.push(ValidationError::InvalidDexFee(pool.dex_fees_bps));
    }

    errors
}
