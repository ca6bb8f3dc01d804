use crate::model::amount::MAX_PRECISION;
use crate::model::SwapDirection;
use crate::view::SwapInputs;

use super::ValidationError;

/// Token in and out must differ and carry a supported number of decimals.
pub fn check_tokens(inputs: &SwapInputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let direction = SwapDirection {
        token_in: inputs.token_in.clone(),
        token_out: inputs.token_out.clone(),
    };
    if let Err(e) = direction.check() {
        errors.push(ValidationError::SameToken { address: e.address });
    }

    for token in [&inputs.token_in, &inputs.token_out] {
        if token.decimals > MAX_PRECISION {
            errors.push(ValidationError::PrecisionTooLarge {
                token: token.to_string(),
                decimals: token.decimals,
                max: MAX_PRECISION,
            });
        }
    }

    if inputs.is_wrap_tx && inputs.is_unwrap_tx {
        errors.push(ValidationError::ConflictingWrapFlags);
    }

    errors
}
