use tracing::debug;

use super::amm;
use super::error::CalcError;
use super::sweep::Analysis;
use crate::model::scenario::{EndPrice, InputCurrency, LpValue, PercentChange, StrategyValues};
use crate::model::{Deposit, PoolConfig, PriceBasket, ScenarioResult};

/// Return calculator for a single-sided deposit paired against HTR in a
/// constant-product pool.
///
/// The deposit's USD value seeds the USDT leg and an equal USD value of HTR
/// seeds the other leg. Each scenario moves the HTR price, re-solves the
/// pool at fixed `k` and compares holding the HTR bonus against selling it
/// up front.
#[derive(Debug, Clone)]
pub struct PairReturnCalculator {
    prices: PriceBasket,
    deposit: Deposit,
    pool: PoolConfig,
    liquidity_value_usd: f64,
}

impl PairReturnCalculator {
    pub fn new(prices: PriceBasket, deposit: Deposit, pool: PoolConfig) -> Result<Self, CalcError> {
        if !deposit.currency.is_depositable() {
            return Err(CalcError::UnsupportedCurrency(deposit.currency.to_string()));
        }
        if !deposit.amount.is_finite() || deposit.amount <= 0.0 {
            return Err(CalcError::InvalidAmount(deposit.amount));
        }
        if let Some((currency, value)) = prices
            .entries()
            .into_iter()
            .find(|(_, p)| !p.is_finite() || *p <= 0.0)
        {
            return Err(CalcError::InvalidPrice { currency, value });
        }

        let liquidity_value_usd = prices.to_usd(deposit.amount, deposit.currency);
        debug!(
            amount = deposit.amount,
            currency = %deposit.currency,
            liquidity_value_usd,
            "calculator ready"
        );

        Ok(Self {
            prices,
            deposit,
            pool,
            liquidity_value_usd,
        })
    }

    pub fn liquidity_value_usd(&self) -> f64 {
        self.liquidity_value_usd
    }

    pub fn prices(&self) -> &PriceBasket {
        &self.prices
    }

    pub fn deposit(&self) -> &Deposit {
        &self.deposit
    }

    pub fn pool(&self) -> &PoolConfig {
        &self.pool
    }

    /// Outcome of moving the HTR price by `htr_price_change_pct` percent.
    ///
    /// Changes at or below -100% would zero or invert the HTR price and are
    /// rejected.
    pub fn calculate_position(&self, htr_price_change_pct: f64) -> Result<ScenarioResult, CalcError> {
        check_price_change(htr_price_change_pct)?;
        Ok(self.scenario(htr_price_change_pct))
    }

    /// Lazy sweep over `min_change..=max_change` in `step` increments.
    pub fn generate_analysis(
        &self,
        min_change: f64,
        max_change: f64,
        step: f64,
    ) -> Result<Analysis<'_>, CalcError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(CalcError::InvalidStep(step));
        }
        check_price_change(min_change)?;
        if !max_change.is_finite() {
            return Err(CalcError::PriceChangeOutOfRange(max_change));
        }
        if min_change > max_change {
            return Err(CalcError::InvalidRange {
                min: min_change,
                max: max_change,
            });
        }
        let analysis = Analysis::new(self, min_change, max_change, step)?;
        debug!(
            min_change,
            max_change,
            step,
            points = analysis.len(),
            "analysis range"
        );
        Ok(analysis)
    }

    /// Scenario math for an already range-checked price change.
    pub(super) fn scenario(&self, htr_price_change_pct: f64) -> ScenarioResult {
        let htr_change = htr_price_change_pct / 100.0;
        let start_htr_price = self.prices.htr;
        let end_htr_price = start_htr_price * (1.0 + htr_change);

        let starting_balances = amm::seed_balances(self.liquidity_value_usd, start_htr_price);
        let k = amm::invariant(&starting_balances);
        let new_balances = amm::rebalance(k, end_htr_price);

        let usdt_dex_fees = new_balances.usdt * (self.pool.dex_fees_bps / 100.0);
        let usdt_deficit = amm::impermanent_loss_deficit(self.liquidity_value_usd, new_balances.usdt);
        let htr_il_protection = usdt_deficit / end_htr_price;

        let lp_value_usd = amm::position_value(&new_balances, end_htr_price);

        let plus_bonus = StrategyValues {
            hodl: self.pool.bonus_value_usd * (1.0 + htr_change),
            sell: self.pool.bonus_value_usd,
        };
        let final_value = StrategyValues {
            hodl: lp_value_usd + plus_bonus.hodl,
            sell: lp_value_usd + plus_bonus.sell,
        };

        ScenarioResult {
            price_change_pct: htr_price_change_pct,
            hold_period_months: self.pool.hold_period_months,
            input_currency: InputCurrency {
                currency: self.deposit.currency,
                amount: self.deposit.amount,
                usd_value: self.liquidity_value_usd,
            },
            end_price: EndPrice {
                htr_price: end_htr_price,
            },
            starting_balances,
            new_balances,
            usdt_dex_fees,
            usdt_deficit,
            htr_il_protection,
            lp_value: LpValue {
                usd: lp_value_usd,
                original_currency: self.prices.from_usd(lp_value_usd, self.deposit.currency),
            },
            plus_bonus,
            final_value,
            pct_change: PercentChange {
                lp_only: self.pct_vs_deposit(lp_value_usd),
                hodl: self.pct_vs_deposit(final_value.hodl),
                sell: self.pct_vs_deposit(final_value.sell),
            },
        }
    }

    fn pct_vs_deposit(&self, value_usd: f64) -> f64 {
        (value_usd / self.liquidity_value_usd - 1.0) * 100.0
    }
}

fn check_price_change(pct: f64) -> Result<(), CalcError> {
    if pct.is_finite() && pct > -100.0 {
        Ok(())
    } else {
        Err(CalcError::PriceChangeOutOfRange(pct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Currency;

    fn prices() -> PriceBasket {
        PriceBasket {
            htr: 0.07,
            btc: 98_520.0,
            eth: 3_339.0,
            usdc: 1.0,
            usdt: 1.0,
        }
    }

    fn pool() -> PoolConfig {
        PoolConfig {
            hold_period_months: 12,
            bonus_value_usd: 2_000.0,
            dex_fees_bps: 25.0,
        }
    }

    #[test]
    fn test_htr_deposit_rejected() {
        let err = PairReturnCalculator::new(prices(), Deposit::new(100.0, Currency::Htr), pool()).unwrap_err();
        assert_eq!(err, CalcError::UnsupportedCurrency("HTR".into()));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in [0.0, -1.0, f64::NAN] {
            let err = PairReturnCalculator::new(prices(), Deposit::new(amount, Currency::Eth), pool()).unwrap_err();
            assert!(matches!(err, CalcError::InvalidAmount(_)), "{amount}");
        }
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut p = prices();
        p.htr = 0.0;
        let err = PairReturnCalculator::new(p, Deposit::new(100.0, Currency::Usdc), pool()).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidPrice {
                currency: Currency::Htr,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_price_change_floor() {
        let calc = PairReturnCalculator::new(prices(), Deposit::new(1_000.0, Currency::Usdt), pool()).unwrap();
        assert!(calc.calculate_position(-99.9).is_ok());
        assert_eq!(
            calc.calculate_position(-100.0).unwrap_err(),
            CalcError::PriceChangeOutOfRange(-100.0)
        );
        assert!(calc.calculate_position(f64::INFINITY).is_err());
    }

    #[test]
    fn test_dex_fee_reported_not_deducted() {
        let calc = PairReturnCalculator::new(prices(), Deposit::new(1_000.0, Currency::Usdt), pool()).unwrap();
        let r = calc.calculate_position(50.0).unwrap();
        assert!((r.usdt_dex_fees - r.new_balances.usdt * 0.25).abs() < 1e-9);
        let expected_lp = r.new_balances.usdt + r.new_balances.htr * r.end_price.htr_price;
        assert_eq!(r.lp_value.usd, expected_lp);
    }

    #[test]
    fn test_no_deficit_when_htr_rises() {
        let calc = PairReturnCalculator::new(prices(), Deposit::new(1_000.0, Currency::Usdc), pool()).unwrap();
        let r = calc.calculate_position(100.0).unwrap();
        assert!(r.new_balances.usdt > 1_000.0);
        assert_eq!(r.usdt_deficit, 0.0);
        assert_eq!(r.htr_il_protection, 0.0);
    }
}
