use wasm_bindgen::prelude::*;

use crate::model::{CalculatorConfig, Countdown};
use crate::{presale, validate};

fn error_json(msg: String) -> String {
    serde_json::json!({ "error": msg }).to_string()
}

fn parse_config(json: &str) -> Result<CalculatorConfig, String> {
    let config: CalculatorConfig =
        serde_json::from_str(json).map_err(|e| format!("JSON parse error: {}", e))?;
    validate::validate(&config).map_err(|errors| {
        errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    })?;
    Ok(config)
}

#[wasm_bindgen]
pub fn validate_config_json(json: &str) -> String {
    let config: CalculatorConfig = match serde_json::from_str(json) {
        Ok(c) => c,
        Err(e) => {
            return serde_json::json!({
                "valid": false,
                "errors": [format!("JSON parse error: {}", e)]
            })
            .to_string();
        }
    };
    match validate::validate(&config) {
        Ok(()) => serde_json::json!({ "valid": true }).to_string(),
        Err(errors) => {
            let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            serde_json::json!({
                "valid": false,
                "errors": error_strings
            })
            .to_string()
        }
    }
}

#[wasm_bindgen]
pub fn compute_scenario_json(config_json: &str, htr_price_change_pct: f64) -> String {
    let result = parse_config(config_json).and_then(|config| {
        config
            .calculator()
            .and_then(|calc| calc.calculate_position(htr_price_change_pct))
            .map_err(|e| e.to_string())
    });
    match result {
        Ok(scenario) => serde_json::to_string(&scenario)
            .unwrap_or_else(|e| error_json(format!("Serialization error: {}", e))),
        Err(msg) => error_json(msg),
    }
}

#[wasm_bindgen]
pub fn generate_analysis_json(config_json: &str, min_change: f64, max_change: f64, step: f64) -> String {
    let result = parse_config(config_json).and_then(|config| {
        let calc = config.calculator().map_err(|e| e.to_string())?;
        let scenarios: Vec<_> = calc
            .generate_analysis(min_change, max_change, step)
            .map_err(|e| e.to_string())?
            .collect();
        Ok(scenarios)
    });
    match result {
        Ok(scenarios) => serde_json::to_string(&scenarios)
            .unwrap_or_else(|e| error_json(format!("Serialization error: {}", e))),
        Err(msg) => error_json(msg),
    }
}

/// Presale price under the default schedule at `now_ms` (unix millis), as
/// `{ current_price, time_until_next_step, next_step_date }`.
#[wasm_bindgen]
pub fn presale_price_json(now_ms: f64) -> String {
    match presale::presale_price_at_millis(now_ms) {
        Ok(price) => serde_json::to_string(&price)
            .unwrap_or_else(|e| error_json(format!("Serialization error: {}", e))),
        Err(e) => error_json(e.to_string()),
    }
}

/// Display text such as `"2d 04:05:06"`.
#[wasm_bindgen]
pub fn format_countdown_js(days: u32, hours: u32, minutes: u32, seconds: u32) -> String {
    presale::format_countdown(&Countdown {
        days: days.into(),
        hours: hours.into(),
        minutes: minutes.into(),
        seconds: seconds.into(),
    })
}

#[wasm_bindgen]
pub fn get_schema() -> String {
    crate::schema::get_schema_json()
}
