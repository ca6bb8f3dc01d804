use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SwapInputs;

/// A transaction button on the swap screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SwapAction {
    Swap,
    Approve,
    Wrap,
    Unwrap,
}

/// Which transaction buttons the screen offers. First match wins:
/// unwrap, then wrap, then swap (with approve added in front when the
/// router needs an allowance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionSelection {
    Unwrap,
    Wrap,
    Swap { with_approve: bool },
}

impl ActionSelection {
    pub fn select(is_unwrap_tx: bool, is_wrap_tx: bool, need_approve: bool) -> Self {
        if is_unwrap_tx {
            ActionSelection::Unwrap
        } else if is_wrap_tx {
            ActionSelection::Wrap
        } else {
            ActionSelection::Swap {
                with_approve: need_approve,
            }
        }
    }

    /// Every offered action, in display order.
    pub fn actions(&self) -> Vec<SwapAction> {
        match self {
            ActionSelection::Unwrap => vec![SwapAction::Unwrap],
            ActionSelection::Wrap => vec![SwapAction::Wrap],
            ActionSelection::Swap { with_approve: true } => {
                vec![SwapAction::Approve, SwapAction::Swap]
            }
            ActionSelection::Swap { with_approve: false } => vec![SwapAction::Swap],
        }
    }

    pub fn offers(&self, action: SwapAction) -> bool {
        self.actions().contains(&action)
    }
}

/// Label parameters for the approve button ("Approve {amount} {symbol}").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApproveParams {
    pub symbol: String,
    pub amount: String,
}

/// Render state of one transaction button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionButton {
    pub action: SwapAction,
    pub disabled: bool,
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approve: Option<ApproveParams>,
}

/// Enablement flags derived from the in-flight flags, the input error and
/// the input balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ButtonFlags {
    pub header_disabled: bool,
    pub swap_disabled: bool,
    pub approve_disabled: bool,
    /// Spinner on swap, wrap and unwrap.
    pub swap_loading: bool,
    pub approve_loading: bool,
}

impl ButtonFlags {
    pub fn derive(inputs: &SwapInputs) -> Self {
        let blocked = inputs.input_error.is_some() || !inputs.current_in.is_positive();
        ButtonFlags {
            header_disabled: inputs.is_estimating
                || inputs.is_swap_in_progress
                || inputs.is_approve_in_progress,
            swap_disabled: inputs.is_estimating || inputs.is_swap_in_progress || blocked,
            approve_disabled: inputs.is_approve_in_progress || blocked,
            swap_loading: inputs.is_estimating || inputs.is_swap_in_progress,
            approve_loading: inputs.is_approve_in_progress,
        }
    }

    pub fn button(&self, action: SwapAction, approve: Option<ApproveParams>) -> ActionButton {
        match action {
            SwapAction::Approve => ActionButton {
                action,
                disabled: self.approve_disabled,
                loading: self.approve_loading,
                approve,
            },
            SwapAction::Swap | SwapAction::Wrap | SwapAction::Unwrap => ActionButton {
                action,
                disabled: self.swap_disabled,
                loading: self.swap_loading,
                approve: None,
            },
        }
    }
}
