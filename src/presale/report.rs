use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use super::{PresaleClock, format_countdown};
use crate::model::{PresalePhase, PresaleWindow};

/// Load a presale window from a JSON file and validate it.
pub fn load_window(path: &Path) -> Result<PresaleWindow> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading presale window at {}", path.display()))?;
    let window: PresaleWindow = serde_json::from_str(&contents)
        .with_context(|| format!("parsing presale window {}", path.display()))?;
    window
        .validate()
        .with_context(|| format!("invalid presale window {}", path.display()))?;
    Ok(window)
}

/// CLI entry point for the `presale` subcommand.
pub fn run(at: Option<&str>, window_path: Option<&Path>, json: bool) -> Result<()> {
    let now = match at {
        Some(s) => s
            .parse::<DateTime<Utc>>()
            .with_context(|| format!("parsing --at timestamp `{s}` (expected RFC 3339)"))?,
        None => Utc::now(),
    };

    let clock = match window_path {
        Some(path) => PresaleClock::new(load_window(path)?)?,
        None => PresaleClock::default(),
    };

    let point = clock.current_price(now);

    if json {
        println!("{}", serde_json::to_string_pretty(&point)?);
        return Ok(());
    }

    let w = clock.window();
    println!("Presale {} → {}", w.start_date, w.end_date);
    println!(
        "  price range  ${:.2} → ${:.2}, every {}h ({} steps)",
        w.start_price,
        w.end_price,
        w.step_hours,
        w.total_steps()
    );
    println!("  as of        {now}");
    println!("  price        ${:.2}", point.price);
    match point.phase {
        PresalePhase::NotStarted => {
            println!("  starts in    {}", format_countdown(&point.countdown));
        }
        PresalePhase::Active => {
            println!("  next step    {}", point.next_step_at);
            println!("  in           {}", format_countdown(&point.countdown));
        }
        PresalePhase::Ended => println!("  presale has ended"),
    }
    Ok(())
}
