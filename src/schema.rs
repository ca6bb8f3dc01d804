use schemars::schema_for;

use crate::view::SwapInputs;

/// JSON Schema for the swap screen snapshot, pretty-printed.
pub fn get_schema_json() -> String {
    let schema = schema_for!(SwapInputs);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Serialization error: {}", e) }).to_string()
    })
}

/// Print the JSON Schema for `SwapInputs`.
pub fn run() -> anyhow::Result<()> {
    println!("{}", get_schema_json());
    Ok(())
}
