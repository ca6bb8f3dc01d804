use crate::model::TokenAmount;
use crate::view::SwapInputs;

use super::ValidationError;

/// Every balance must use its token's precision, and quote amounts must be
/// base-unit integers.
pub fn check_amounts(inputs: &SwapInputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let in_decimals = inputs.token_in.decimals;
    let out_decimals = inputs.token_out.decimals;

    let mut check = |field: &'static str, amount: Option<&TokenAmount>, expected: u8| {
        if let Some(a) = amount {
            if a.precision != expected {
                errors.push(ValidationError::AmountPrecisionMismatch {
                    field,
                    expected,
                    actual: a.precision,
                });
            }
        }
    };

    check("current_in", Some(&inputs.current_in), in_decimals);
    check("available_in", Some(&inputs.available_in), in_decimals);
    check("current_out", Some(&inputs.current_out), out_decimals);
    check("available_out", inputs.available_out.as_ref(), out_decimals);
    check("min_received", inputs.min_received.as_ref(), out_decimals);

    if let Some(quote) = &inputs.quote {
        for (field, value) in [("amount_in", &quote.amount_in), ("amount_out", &quote.amount_out)] {
            if value.trim().parse::<u128>().is_err() {
                errors.push(ValidationError::InvalidQuoteAmount {
                    field,
                    value: value.clone(),
                });
            }
        }
    }

    errors
}
