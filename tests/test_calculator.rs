use rand::prelude::*;

use oasis_calc::calc::{
    CalcError, MAX_ANALYSIS_POINTS, PairReturnCalculator, compute_scenario, generate_analysis,
};
use oasis_calc::model::{Currency, Deposit, PoolConfig, PriceBasket};

// ── Helpers ──────────────────────────────────────────────────────────

fn reference_prices() -> PriceBasket {
    PriceBasket {
        htr: 0.07,
        btc: 98_520.0,
        eth: 3_339.0,
        usdc: 1.0,
        usdt: 1.0,
    }
}

fn reference_pool() -> PoolConfig {
    PoolConfig {
        hold_period_months: 12,
        bonus_value_usd: 2_000.0,
        dex_fees_bps: 25.0,
    }
}

fn reference_calculator() -> PairReturnCalculator {
    PairReturnCalculator::new(
        reference_prices(),
        Deposit::new(0.102, Currency::Btc),
        reference_pool(),
    )
    .unwrap()
}

fn assert_rel_eq(actual: f64, expected: f64, what: &str) {
    let err = ((actual - expected) / expected).abs();
    assert!(err < 1e-9, "{what}: {actual} vs {expected} (rel err {err})");
}

// ── Tests ────────────────────────────────────────────────────────────

#[test]
fn test_reference_scenario_minus_90() {
    let r = reference_calculator().calculate_position(-90.0).unwrap();

    let usd = 0.102 * 98_520.0;
    assert!((r.input_currency.usd_value - 10_049.04).abs() < 1e-6);
    assert!((r.end_price.htr_price - 0.007).abs() < 1e-12);

    // Constant product: both legs end worth `usd * sqrt(price ratio)`.
    let expected_lp = 2.0 * usd * 0.1f64.sqrt();
    assert_rel_eq(r.lp_value.usd, expected_lp, "lp value");
    assert_rel_eq(r.new_balances.usdt, usd * 0.1f64.sqrt(), "usdt leg");
    assert_rel_eq(r.usdt_deficit, usd - usd * 0.1f64.sqrt(), "deficit");
    assert_rel_eq(r.htr_il_protection, r.usdt_deficit / 0.007, "il protection");

    assert_eq!(r.plus_bonus.sell, 2_000.0);
    assert_eq!(r.plus_bonus.hodl, 2_000.0 * (1.0 + -90.0 / 100.0));

    let expected_hodl_pct = ((expected_lp + 200.0) / usd - 1.0) * 100.0;
    let expected_sell_pct = ((expected_lp + 2_000.0) / usd - 1.0) * 100.0;
    assert!((r.pct_change.hodl - expected_hodl_pct).abs() < 1e-6);
    assert!((r.pct_change.sell - expected_sell_pct).abs() < 1e-6);

    assert_rel_eq(r.lp_value.original_currency, expected_lp / 98_520.0, "lp in BTC");
    assert_eq!(r.hold_period_months, 12);
}

#[test]
fn test_constant_product_preserved() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let prices = PriceBasket {
            htr: rng.random_range(0.001..10.0),
            btc: rng.random_range(10_000.0..200_000.0),
            eth: rng.random_range(500.0..10_000.0),
            usdc: 1.0,
            usdt: 1.0,
        };
        let currency = *Currency::DEPOSITABLE.choose(&mut rng).unwrap();
        let amount = rng.random_range(0.001..1_000.0);
        let pct = rng.random_range(-99.0..500.0);

        let r = compute_scenario(prices, Deposit::new(amount, currency), reference_pool(), pct).unwrap();
        let k0 = r.starting_balances.usdt * r.starting_balances.htr;
        let k1 = r.new_balances.usdt * r.new_balances.htr;
        assert_rel_eq(k1, k0, "k");

        let lp = r.new_balances.usdt + r.new_balances.htr * r.end_price.htr_price;
        assert_rel_eq(r.lp_value.usd, lp, "lp value identity");
    }
}

#[test]
fn test_zero_change_keeps_pool_unchanged() {
    let calc = reference_calculator();
    let r = calc.calculate_position(0.0).unwrap();

    assert_rel_eq(r.new_balances.usdt, r.starting_balances.usdt, "usdt");
    assert_rel_eq(r.new_balances.htr, r.starting_balances.htr, "htr");
    assert_rel_eq(r.starting_balances.usdt, calc.liquidity_value_usd(), "usdt leg seeded with deposit");
    assert!(r.usdt_deficit < 1e-9 * calc.liquidity_value_usd());

    // The pool holds the deposit on the USDT leg plus an equal value of HTR.
    assert_rel_eq(r.lp_value.usd, 2.0 * calc.liquidity_value_usd(), "lp value");
    assert_eq!(r.plus_bonus.hodl, r.plus_bonus.sell);
}

#[test]
fn test_bonus_strategies() {
    let calc = reference_calculator();
    for pct in [-99.5, -75.0, -12.5, 0.0, 3.3, 50.0, 250.0, 1_000.0] {
        let r = calc.calculate_position(pct).unwrap();
        assert_eq!(r.plus_bonus.sell, 2_000.0, "sell at {pct}");
        assert_eq!(r.plus_bonus.hodl, 2_000.0 * (1.0 + pct / 100.0), "hodl at {pct}");
        assert!((r.final_value.sell - r.lp_value.usd - r.plus_bonus.sell).abs() < 1e-6);
    }
}

#[test]
fn test_hodl_beats_sell_only_when_htr_rises() {
    let calc = reference_calculator();
    let down = calc.calculate_position(-20.0).unwrap();
    let up = calc.calculate_position(20.0).unwrap();
    assert!(down.final_value.hodl < down.final_value.sell);
    assert!(up.final_value.hodl > up.final_value.sell);
}

#[test]
fn test_unsupported_currency_from_string() {
    let err = "DOGE".parse::<Currency>().unwrap_err();
    assert_eq!(err, CalcError::UnsupportedCurrency("DOGE".into()));

    let err = PairReturnCalculator::new(
        reference_prices(),
        Deposit::new(1.0, Currency::Htr),
        reference_pool(),
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::UnsupportedCurrency(_)));
}

#[test]
fn test_generate_analysis_matches_single_scenarios() {
    let results = generate_analysis(
        reference_prices(),
        Deposit::new(0.102, Currency::Btc),
        reference_pool(),
        -90.0,
        200.0,
        10.0,
    )
    .unwrap();
    assert_eq!(results.len(), 30);

    let calc = reference_calculator();
    for r in &results {
        assert_eq!(r, &calc.calculate_position(r.price_change_pct).unwrap());
    }
}

#[test]
fn test_analysis_is_restartable() {
    let calc = reference_calculator();
    let mut sweep = calc.generate_analysis(-50.0, 50.0, 25.0).unwrap();
    sweep.next();
    let restarted = sweep.clone();

    let a: Vec<f64> = sweep.map(|r| r.price_change_pct).collect();
    let b: Vec<f64> = restarted.map(|r| r.price_change_pct).collect();
    assert_eq!(a, vec![-25.0, 0.0, 25.0, 50.0]);
    assert_eq!(a, b);

    let again: Vec<f64> = calc
        .generate_analysis(-50.0, 50.0, 25.0)
        .unwrap()
        .map(|r| r.price_change_pct)
        .collect();
    assert_eq!(again.len(), 5);
}

#[test]
fn test_analysis_rejects_bad_ranges() {
    let calc = reference_calculator();
    assert_eq!(
        calc.generate_analysis(-90.0, 100.0, 0.0).unwrap_err(),
        CalcError::InvalidStep(0.0)
    );
    assert_eq!(
        calc.generate_analysis(50.0, -50.0, 10.0).unwrap_err(),
        CalcError::InvalidRange {
            min: 50.0,
            max: -50.0
        }
    );
    assert_eq!(
        calc.generate_analysis(-100.0, 100.0, 10.0).unwrap_err(),
        CalcError::PriceChangeOutOfRange(-100.0)
    );
}

#[test]
fn test_analysis_rejects_oversized_sweeps() {
    let calc = reference_calculator();

    let err = calc.generate_analysis(-90.0, 1e300, 1e-300).unwrap_err();
    match err {
        CalcError::TooManyPoints { count, max } => {
            assert!(count.is_infinite());
            assert_eq!(max, MAX_ANALYSIS_POINTS);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Default CLI range with a tiny step: finite but far over the cap.
    let err = calc.generate_analysis(-90.0, 200.0, 1e-9).unwrap_err();
    assert!(matches!(err, CalcError::TooManyPoints { count, .. } if count > 1e11));

    let err = generate_analysis(
        reference_prices(),
        Deposit::new(0.102, Currency::Btc),
        reference_pool(),
        -50.0,
        1e12,
        1.0,
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::TooManyPoints { .. }));
}

#[test]
fn test_results_serialize_with_nested_sections() {
    let r = reference_calculator().calculate_position(25.0).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["input_currency"]["currency"], "BTC");
    assert!(v["plus_bonus"]["hodl"].is_number());
    assert!(v["pct_change"]["sell"].is_number());
    assert!(v["lp_value"]["original_currency"].is_number());
}
