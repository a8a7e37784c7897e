use std::iter::FusedIterator;

use super::calculator::PairReturnCalculator;
use super::error::CalcError;
use crate::model::ScenarioResult;

/// Lazy sequence of scenarios over an inclusive price-change range.
///
/// Points are derived from their index (`min + i * step`), so the upper
/// bound is hit exactly even when `step` is not representable in binary.
/// Clone it to restart from the current position.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    calculator: &'a PairReturnCalculator,
    min_change: f64,
    max_change: f64,
    step: f64,
    next: usize,
    count: usize,
}

/// Slack for `(max - min) / step` landing a hair under a whole number.
const STEP_EPSILON: f64 = 1e-9;

/// Largest sweep `generate_analysis` will build.
pub const MAX_ANALYSIS_POINTS: usize = 100_000;

impl<'a> Analysis<'a> {
    pub(super) fn new(
        calculator: &'a PairReturnCalculator,
        min_change: f64,
        max_change: f64,
        step: f64,
    ) -> Result<Self, CalcError> {
        let count = ((max_change - min_change) / step + STEP_EPSILON).floor() + 1.0;
        if !count.is_finite() || count > MAX_ANALYSIS_POINTS as f64 {
            return Err(CalcError::TooManyPoints {
                count,
                max: MAX_ANALYSIS_POINTS,
            });
        }
        Ok(Self {
            calculator,
            min_change,
            max_change,
            step,
            next: 0,
            count: count as usize,
        })
    }

    /// Price changes (percent) this sweep visits, from the start.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.point(i))
    }

    fn point(&self, index: usize) -> f64 {
        (self.min_change + index as f64 * self.step).min(self.max_change)
    }
}

impl Iterator for Analysis<'_> {
    type Item = ScenarioResult;

    fn next(&mut self) -> Option<ScenarioResult> {
        if self.next >= self.count {
            return None;
        }
        let pct = self.point(self.next);
        self.next += 1;
        Some(self.calculator.scenario(pct))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Analysis<'_> {}

impl FusedIterator for Analysis<'_> {}

#[cfg(test)]
mod tests {
    use super::MAX_ANALYSIS_POINTS;
    use crate::calc::{CalcError, PairReturnCalculator};
    use crate::model::{Currency, Deposit, PoolConfig, PriceBasket};

    fn calculator() -> PairReturnCalculator {
        PairReturnCalculator::new(
            PriceBasket {
                htr: 0.05,
                btc: 90_000.0,
                eth: 3_000.0,
                usdc: 1.0,
                usdt: 1.0,
            },
            Deposit::new(500.0, Currency::Usdc),
            PoolConfig {
                hold_period_months: 6,
                bonus_value_usd: 50.0,
                dex_fees_bps: 30.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_inclusive_bounds() {
        let calc = calculator();
        let points: Vec<f64> = calc.generate_analysis(-90.0, 200.0, 10.0).unwrap().points().collect();
        assert_eq!(points.len(), 30);
        assert_eq!(points[0], -90.0);
        assert_eq!(*points.last().unwrap(), 200.0);
    }

    #[test]
    fn test_fractional_step_reaches_max() {
        let calc = calculator();
        let points: Vec<f64> = calc.generate_analysis(0.0, 1.0, 0.1).unwrap().points().collect();
        assert_eq!(points.len(), 11);
        assert_eq!(*points.last().unwrap(), 1.0);
    }

    #[test]
    fn test_range_not_multiple_of_step_stops_below_max() {
        let calc = calculator();
        let points: Vec<f64> = calc.generate_analysis(0.0, 25.0, 10.0).unwrap().points().collect();
        assert_eq!(points, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_single_point_when_min_equals_max() {
        let calc = calculator();
        let mut sweep = calc.generate_analysis(15.0, 15.0, 5.0).unwrap();
        assert_eq!(sweep.len(), 1);
        assert_eq!(sweep.next().unwrap().price_change_pct, 15.0);
        assert!(sweep.next().is_none());
    }

    #[test]
    fn test_point_cap_is_inclusive() {
        let calc = calculator();
        let sweep = calc
            .generate_analysis(0.0, (MAX_ANALYSIS_POINTS - 1) as f64, 1.0)
            .unwrap();
        assert_eq!(sweep.len(), MAX_ANALYSIS_POINTS);

        let err = calc
            .generate_analysis(0.0, MAX_ANALYSIS_POINTS as f64, 1.0)
            .unwrap_err();
        assert!(matches!(err, CalcError::TooManyPoints { .. }));
    }
}
