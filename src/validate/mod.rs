mod amounts;
mod settings;
mod tokens;

use std::path::Path;

use thiserror::Error;

use crate::view::SwapInputs;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token in and token out are the same contract `{address}`")]
    SameToken { address: String },

    #[error("Token `{token}` has {decimals} decimals, more than the supported {max}")]
    PrecisionTooLarge { token: String, decimals: u8, max: u8 },

    #[error("`{field}` has precision {actual} but its token has {expected} decimals")]
    AmountPrecisionMismatch {
        field: &'static str,
        expected: u8,
        actual: u8,
    },

    #[error("Quote `{field}` is not a base-unit integer: `{value}`")]
    InvalidQuoteAmount { field: &'static str, value: String },

    #[error("Transaction cannot be both a wrap and an unwrap")]
    ConflictingWrapFlags,

    #[error("Slippage {value}% is outside the valid range (0, {max}]")]
    SlippageOutOfRange { value: f64, max: f64 },

    #[error("Transaction deadline must be at least one minute")]
    DeadlineZero,
}

/// Load and fully validate a swap screen snapshot from a JSON file.
pub fn load_and_validate(path: &Path) -> Result<SwapInputs, Vec<ValidationError>> {
    let contents = std::fs::read_to_string(path).map_err(|e| vec![ValidationError::Io(e)])?;
    let inputs: SwapInputs =
        serde_json::from_str(&contents).map_err(|e| vec![ValidationError::Json(e)])?;
    validate(&inputs)?;
    Ok(inputs)
}

/// Validate a snapshot, collecting all errors.
pub fn validate(inputs: &SwapInputs) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(tokens::check_tokens(inputs));
    errors.extend(amounts::check_amounts(inputs));
    errors.extend(settings::check_settings(inputs));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// CLI entry point for the `validate` subcommand.
pub fn run(path: &Path) -> anyhow::Result<()> {
    match load_and_validate(path) {
        Ok(inputs) => {
            println!(
                "Swap snapshot {} -> {} is valid. Quote: {}.",
                inputs.token_in,
                inputs.token_out,
                if inputs.quote.is_some() { "present" } else { "absent" }
            );
            Ok(())
        }
        Err(errors) => {
            eprintln!("Validation failed with {} error(s):", errors.len());
            for (i, e) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, e);
            }
            std::process::exit(1);
        }
    }
}
