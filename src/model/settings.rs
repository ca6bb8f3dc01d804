use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for slippage tolerance, in percent.
pub const MAX_SLIPPAGE_PERCENT: f64 = 50.0;

/// User-tunable swap parameters from the settings bottom sheet.
///
/// Swap and approve intents carry a copy of these, so a transaction can never
/// be dispatched without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransactionSettings {
    /// Maximum accepted price movement between quote and execution, in
    /// percent. Default: 0.5.
    #[serde(default = "default_slippage")]
    pub slippage: f64,
    /// Minutes until the transaction is rejected on-chain. Default: 20.
    #[serde(default = "default_deadline")]
    pub deadline: u32,
}

fn default_slippage() -> f64 {
    0.5
}
fn default_deadline() -> u32 {
    20
}

impl Default for TransactionSettings {
    fn default() -> Self {
        TransactionSettings {
            slippage: default_slippage(),
            deadline: default_deadline(),
        }
    }
}

impl TransactionSettings {
    pub fn slippage_in_range(&self) -> bool {
        self.slippage.is_finite() && self.slippage > 0.0 && self.slippage <= MAX_SLIPPAGE_PERCENT
    }

    pub fn deadline_in_range(&self) -> bool {
        self.deadline > 0
    }
}
