use crate::model::settings::MAX_SLIPPAGE_PERCENT;
use crate::view::SwapInputs;

use super::ValidationError;

pub fn check_settings(inputs: &SwapInputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let settings = &inputs.settings;

    if !settings.slippage_in_range() {
        errors.push(ValidationError::SlippageOutOfRange {
            value: settings.slippage,
            max: MAX_SLIPPAGE_PERCENT,
        });
    }
    if !settings.deadline_in_range() {
        errors.push(ValidationError::DeadlineZero);
    }

    errors
}
