use clap::Parser;

use oasis_calc::analysis::{self, AnalysisConfig, InputConfig, ScenarioConfig};
use oasis_calc::{example, presale, schema, validate};

mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        cli::Command::Scenario {
            file,
            change,
            amount,
            currency,
            json,
        } => analysis::run_scenario(&ScenarioConfig {
            input: InputConfig {
                config_path: file,
                amount,
                currency,
            },
            change_pct: change,
            json,
        }),
        cli::Command::Analysis {
            file,
            min,
            max,
            step,
            amount,
            currency,
            format,
            output,
        } => analysis::run(&AnalysisConfig {
            input: InputConfig {
                config_path: file,
                amount,
                currency,
            },
            min_change: min,
            max_change: max,
            step,
            format,
            output,
        }),
        cli::Command::Presale { at, window, json } => {
            presale::report::run(at.as_deref(), window.as_deref(), json)
        }
        cli::Command::Validate { file } => validate::run(&file),
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
    }
}
