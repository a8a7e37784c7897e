use schemars::schema_for;

use crate::model::CalculatorConfig;

/// JSON Schema for `CalculatorConfig`, pretty-printed.
pub fn get_schema_json() -> String {
    let schema = schema_for!(CalculatorConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Serialization error: {e}") }).to_string()
    })
}

/// Generate and print the JSON Schema for `CalculatorConfig`.
pub fn run() -> anyhow::Result<()> {
    println!("{}", get_schema_json());
    Ok(())
}
