#[cfg(feature = "full")]
pub mod export;
pub mod summary;

#[cfg(feature = "full")]
pub use cli::*;
pub use summary::AnalysisSummary;

#[cfg(feature = "full")]
mod cli {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use tracing::info;

    use super::AnalysisSummary;
    use super::export;
    use crate::example;
    use crate::model::{CalculatorConfig, Currency, ScenarioResult};
    use crate::validate;

    /// Where the calculator inputs come from and what to override.
    pub struct InputConfig {
        pub config_path: Option<PathBuf>,
        pub amount: Option<f64>,
        pub currency: Option<Currency>,
    }

    pub struct ScenarioConfig {
        pub input: InputConfig,
        pub change_pct: f64,
        pub json: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum OutputFormat {
        Table,
        Json,
        Csv,
    }

    impl std::str::FromStr for OutputFormat {
        type Err = anyhow::Error;

        fn from_str(s: &str) -> Result<Self> {
            match s.to_lowercase().as_str() {
                "table" => Ok(OutputFormat::Table),
                "json" => Ok(OutputFormat::Json),
                "csv" => Ok(OutputFormat::Csv),
                other => bail!("Unknown format '{other}'. Use 'table', 'json' or 'csv'."),
            }
        }
    }

    pub struct AnalysisConfig {
        pub input: InputConfig,
        pub min_change: f64,
        pub max_change: f64,
        pub step: f64,
        pub format: OutputFormat,
        pub output: Option<PathBuf>,
    }

    /// Load the config file (or the built-in example), apply CLI overrides,
    /// and validate the result.
    pub fn load_input(input: &InputConfig) -> Result<CalculatorConfig> {
        let mut config = match &input.config_path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config at {}", path.display()))?;
                serde_json::from_str::<CalculatorConfig>(&contents)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => {
                info!("no config file given, using the example config");
                example::example_config()
            }
        };

        if let Some(amount) = input.amount {
            config.deposit.amount = amount;
        }
        if let Some(currency) = input.currency {
            config.deposit.currency = currency;
        }

        validate::validate(&config).map_err(validate::into_anyhow)?;
        Ok(config)
    }

    /// CLI entry point for the `scenario` subcommand.
    pub fn run_scenario(config: &ScenarioConfig) -> Result<()> {
        let input = load_input(&config.input)?;
        let calculator = input.calculator()?;
        let result = calculator.calculate_position(config.change_pct)?;

        if config.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_scenario(&input.label(), &result);
        }
        Ok(())
    }

    /// CLI entry point for the `analysis` subcommand.
    pub fn run(config: &AnalysisConfig) -> Result<()> {
        let input = load_input(&config.input)?;
        let calculator = input.calculator()?;
        let results: Vec<ScenarioResult> = calculator
            .generate_analysis(config.min_change, config.max_change, config.step)?
            .collect();
        info!(scenarios = results.len(), "analysis complete");

        match config.format {
            OutputFormat::Table => {
                print_table(&input.label(), &results);
                if let Some(summary) = AnalysisSummary::from_results(&results) {
                    print_summary(&summary);
                }
                if config.output.is_some() {
                    println!("  (--output is ignored for table format)");
                }
            }
            OutputFormat::Json => {
                let doc = serde_json::json!({
                    "label": input.label(),
                    "summary": AnalysisSummary::from_results(&results),
                    "scenarios": results,
                });
                let json = serde_json::to_string_pretty(&doc)?;
                match &config.output {
                    Some(path) => std::fs::write(path, json)
                        .with_context(|| format!("writing {}", path.display()))?,
                    None => println!("{json}"),
                }
            }
            OutputFormat::Csv => match &config.output {
                Some(path) => {
                    let file = std::fs::File::create(path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    export::write_csv(file, &results)?;
                }
                None => export::write_csv(std::io::stdout().lock(), &results)?,
            },
        }

        if let Some(path) = &config.output {
            if config.format != OutputFormat::Table {
                println!("Wrote {} scenarios to {}", results.len(), path.display());
            }
        }
        Ok(())
    }

    pub fn print_scenario(label: &str, r: &ScenarioResult) {
        let ic = &r.input_currency;
        println!("\n{}", "═".repeat(60));
        println!("  {label}: HTR {:+.2}%", r.price_change_pct);
        println!("{}", "═".repeat(60));
        println!(
            "  {:<28} {} {} (${:.2})",
            "Deposit", ic.amount, ic.currency, ic.usd_value
        );
        println!("  {:<28} {}", "Hold period (months)", r.hold_period_months);
        println!("  {:<28} ${:.6}", "Ending HTR price", r.end_price.htr_price);
        println!(
            "  {:<28} {:.2} USDT / {:.2} HTR",
            "Starting pool", r.starting_balances.usdt, r.starting_balances.htr
        );
        println!(
            "  {:<28} {:.2} USDT / {:.2} HTR",
            "Pool after move", r.new_balances.usdt, r.new_balances.htr
        );
        println!("  {:<28} ${:.2}", "DEX fees", r.usdt_dex_fees);
        println!("  {:<28} ${:.2}", "IL deficit", r.usdt_deficit);
        println!("  {:<28} {:.2} HTR", "IL protection", r.htr_il_protection);
        println!(
            "  {:<28} ${:.2} ({:.6} {})",
            "LP value", r.lp_value.usd, r.lp_value.original_currency, ic.currency
        );
        println!("  {}", "-".repeat(56));
        println!("  {:<28} {:>12} {:>12}", "", "HODL bonus", "Sell bonus");
        println!(
            "  {:<28} {:>12.2} {:>12.2}",
            "Bonus ($)", r.plus_bonus.hodl, r.plus_bonus.sell
        );
        println!(
            "  {:<28} {:>12.2} {:>12.2}",
            "Final value ($)", r.final_value.hodl, r.final_value.sell
        );
        println!(
            "  {:<28} {:>+12.2} {:>+12.2}",
            "vs deposit (%)", r.pct_change.hodl, r.pct_change.sell
        );
        println!("{}", "═".repeat(60));
    }

    pub fn print_table(label: &str, results: &[ScenarioResult]) {
        println!("\n{}", "═".repeat(112));
        println!("  Return analysis: {label}");
        println!("{}", "═".repeat(112));
        println!(
            "  {:>8} {:>11} {:>12} {:>14} {:>11} {:>12} {:>12} {:>8} {:>8} {:>8}",
            "HTR %",
            "HTR price",
            "USDT leg",
            "HTR leg",
            "IL ($)",
            "LP ($)",
            "HODL ($)",
            "LP%",
            "HODL%",
            "Sell%",
        );
        println!("  {}", "-".repeat(110));
        for r in results {
            println!(
                "  {:>+8.1} {:>11.6} {:>12.2} {:>14.2} {:>11.2} {:>12.2} {:>12.2} {:>+8.2} {:>+8.2} {:>+8.2}",
                r.price_change_pct,
                r.end_price.htr_price,
                r.new_balances.usdt,
                r.new_balances.htr,
                r.usdt_deficit,
                r.lp_value.usd,
                r.final_value.hodl,
                r.pct_change.lp_only,
                r.pct_change.hodl,
                r.pct_change.sell,
            );
        }
        println!("{}", "═".repeat(112));
    }

    pub fn print_summary(s: &AnalysisSummary) {
        println!(
            "  {} scenarios. Worst HODL: {:+.2}% at HTR {:+.1}%. Best HODL: {:+.2}% at HTR {:+.1}%.",
            s.scenarios, s.worst_hodl_pct, s.worst_change_pct, s.best_hodl_pct, s.best_change_pct
        );
        println!(
            "  Max IL deficit ${:.2} at HTR {:+.1}%.",
            s.max_deficit_usd, s.max_deficit_change_pct
        );
        match s.hodl_breakeven_change_pct {
            Some(pct) => println!("  HODL strategy covers the deposit from HTR {pct:+.1}%."),
            None => println!("  HODL strategy never covers the deposit in this range."),
        }
    }
}
