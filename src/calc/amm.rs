//! Constant-product (`x * y = k`) pool math for a synthetic HTR/USDT pair.

use crate::model::scenario::PoolBalances;

/// Seed a pool with `value_usd` on each side at `htr_price`.
pub fn seed_balances(value_usd: f64, htr_price: f64) -> PoolBalances {
    PoolBalances {
        usdt: value_usd,
        htr: value_usd / htr_price,
    }
}

pub fn invariant(balances: &PoolBalances) -> f64 {
    balances.usdt * balances.htr
}

/// Re-solve the pool legs for a new HTR price while holding `k` fixed.
///
/// Arbitrage pushes the pool to `usdt / htr = price`, which together with
/// `usdt * htr = k` gives `htr = sqrt(k / price)`.
pub fn rebalance(k: f64, htr_price: f64) -> PoolBalances {
    let htr = (k / htr_price).sqrt();
    PoolBalances { usdt: k / htr, htr }
}

/// USD value of both legs at `htr_price`.
pub fn position_value(balances: &PoolBalances, htr_price: f64) -> f64 {
    balances.usdt + balances.htr * htr_price
}

/// USD shortfall of the stable leg against the original deposit value.
pub fn impermanent_loss_deficit(deposit_usd: f64, new_usdt: f64) -> f64 {
    (deposit_usd - new_usdt).max(0.0)
}
