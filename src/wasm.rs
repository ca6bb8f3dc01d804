use wasm_bindgen::prelude::*;

use crate::config::ViewConfig;
use crate::restore::{self, Bip39English};
use crate::validate;
use crate::view::{SwapInputs, SwapViewModel};

/// Compute the swap view state. Takes snapshot and config JSON, returns the
/// state JSON or `{"error": ...}`.
#[wasm_bindgen]
pub fn render_swap_view_json(inputs_json: &str, config_json: &str) -> String {
    let inputs: SwapInputs = match serde_json::from_str(inputs_json) {
        Ok(i) => i,
        Err(e) => {
            return serde_json::json!({
                "error": format!("JSON parse error: {}", e)
            })
            .to_string();
        }
    };
    let config = if config_json.trim().is_empty() {
        ViewConfig::default()
    } else {
        match ViewConfig::from_json(config_json) {
            Ok(c) => c,
            Err(e) => {
                return serde_json::json!({ "error": e.to_string() }).to_string();
            }
        }
    };
    let state = SwapViewModel::new(config).compute(&inputs);
    serde_json::to_string(&state).unwrap_or_else(|e| {
        serde_json::json!({
            "error": format!("Serialization error: {}", e)
        })
        .to_string()
    })
}

/// Same as [`render_swap_view_json`] but with JS objects on both sides.
#[wasm_bindgen]
pub fn render_swap_view(inputs: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let inputs: SwapInputs = serde_wasm_bindgen::from_value(inputs)?;
    let config: ViewConfig = if config.is_undefined() || config.is_null() {
        ViewConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let state = SwapViewModel::new(config).compute(&inputs);
    Ok(serde_wasm_bindgen::to_value(&state)?)
}

#[wasm_bindgen]
pub fn validate_swap_inputs_json(json: &str) -> String {
    let inputs: SwapInputs = match serde_json::from_str(json) {
        Ok(i) => i,
        Err(e) => {
            return serde_json::json!({
                "valid": false,
                "errors": [format!("JSON parse error: {}", e)]
            })
            .to_string();
        }
    };
    match validate::validate(&inputs) {
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

/// Classify a restore secret against the English BIP-39 wordlist.
#[wasm_bindgen]
pub fn classify_restore_secret(secret: &str, onboarded: bool) -> String {
    match restore::classify(secret, onboarded, &Bip39English) {
        Ok(plan) => serde_json::to_string(&plan).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("Serialization error: {}", e) }).to_string()
        }),
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}

#[wasm_bindgen]
pub fn get_schema() -> String {
    crate::schema::get_schema_json()
}
