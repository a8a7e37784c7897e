use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive, e.g. `oasis_calc=debug`.
pub const LOG_ENV: &str = "OASIS_CALC_LOG";

/// Install the stderr subscriber. `OASIS_CALC_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
