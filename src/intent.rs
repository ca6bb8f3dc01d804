use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{SwapDirection, TransactionSettings};

/// A user action on the swap screen, handed to collaborators for execution.
///
/// The view-model only builds these values; it never performs the work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwapIntent {
    /// Wrap the native coin into its token form.
    Wrap,
    /// Unwrap the token form back into the native coin.
    Unwrap,
    /// Fill the input with the maximum available balance.
    Max,
    /// The amount input lost focus; re-estimate.
    InputBlur,
    /// Open the token picker for the input side.
    ChangeTokenIn,
    /// Open the token picker for the output side.
    ChangeTokenOut,
    /// Submit the swap with these settings.
    Swap { settings: TransactionSettings },
    /// Submit an allowance approval with these settings.
    Approve { settings: TransactionSettings },
    /// Open the wallet picker.
    ChangeWallet,
    /// Exchange token in and token out.
    ChangeDirection,
    /// Open the settings bottom sheet.
    OpenSettings,
    /// The settings sheet produced new values.
    SettingsChange { settings: TransactionSettings },
}

impl SwapIntent {
    /// Synchronous intents update screen state immediately; the rest start
    /// asynchronous work in a collaborator.
    pub fn is_sync(&self) -> bool {
        matches!(
            self,
            SwapIntent::ChangeWallet
                | SwapIntent::ChangeDirection
                | SwapIntent::OpenSettings
                | SwapIntent::SettingsChange { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            SwapIntent::Wrap => "wrap",
            SwapIntent::Unwrap => "unwrap",
            SwapIntent::Max => "max",
            SwapIntent::InputBlur => "input_blur",
            SwapIntent::ChangeTokenIn => "change_token_in",
            SwapIntent::ChangeTokenOut => "change_token_out",
            SwapIntent::Swap { .. } => "swap",
            SwapIntent::Approve { .. } => "approve",
            SwapIntent::ChangeWallet => "change_wallet",
            SwapIntent::ChangeDirection => "change_direction",
            SwapIntent::OpenSettings => "open_settings",
            SwapIntent::SettingsChange { .. } => "settings_change",
        }
    }
}

/// Receives intents. Implemented by whatever owns the quote fetcher and the
/// transaction sender.
pub trait IntentSink {
    fn dispatch(&mut self, intent: SwapIntent);
}

/// Collects dispatched intents in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub intents: Vec<SwapIntent>,
}

impl IntentSink for RecordingSink {
    fn dispatch(&mut self, intent: SwapIntent) {
        debug!(intent = intent.name(), "intent dispatched");
        self.intents.push(intent);
    }
}

/// Screen-owned settings, replaced only through `SettingsChange`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    current: TransactionSettings,
}

impl SettingsState {
    pub fn new(settings: TransactionSettings) -> Self {
        SettingsState { current: settings }
    }

    pub fn current(&self) -> &TransactionSettings {
        &self.current
    }

    /// Apply an intent; returns true when the settings changed.
    pub fn apply(&mut self, intent: &SwapIntent) -> bool {
        match intent {
            SwapIntent::SettingsChange { settings } if *settings != self.current => {
                self.current = settings.clone();
                true
            }
            _ => false,
        }
    }
}

/// Screen-owned direction, flipped only through `ChangeDirection`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionState {
    current: SwapDirection,
}

impl DirectionState {
    pub fn new(direction: SwapDirection) -> Self {
        DirectionState { current: direction }
    }

    pub fn current(&self) -> &SwapDirection {
        &self.current
    }

    /// Apply an intent; returns true when the direction changed.
    pub fn apply(&mut self, intent: &SwapIntent) -> bool {
        if !matches!(intent, SwapIntent::ChangeDirection) {
            return false;
        }
        self.current = self.current.clone().flip();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    #[test]
    fn sync_intents() {
        assert!(SwapIntent::ChangeDirection.is_sync());
        assert!(SwapIntent::OpenSettings.is_sync());
        assert!(SwapIntent::ChangeWallet.is_sync());
        assert!(!SwapIntent::Max.is_sync());
        assert!(
            !SwapIntent::Swap {
                settings: TransactionSettings::default()
            }
            .is_sync()
        );
    }

    #[test]
    fn settings_only_change_through_settings_intent() {
        let mut state = SettingsState::default();
        assert!(!state.apply(&SwapIntent::Max));
        let next = TransactionSettings {
            slippage: 1.0,
            deadline: 10,
        };
        assert!(state.apply(&SwapIntent::SettingsChange {
            settings: next.clone()
        }));
        assert_eq!(state.current(), &next);
        assert!(!state.apply(&SwapIntent::SettingsChange { settings: next }));
    }

    #[test]
    fn direction_flips_on_change_direction() {
        let a = Token::new("0xa0000000000000000000000000000000000000aa", "A", 18);
        let b = Token::new("0xb0000000000000000000000000000000000000bb", "B", 6);
        let mut state = DirectionState::new(SwapDirection::new(a.clone(), b.clone()).unwrap());
        assert!(state.apply(&SwapIntent::ChangeDirection));
        assert_eq!(state.current().token_in, b);
        assert_eq!(state.current().token_out, a);
    }

    #[test]
    fn intents_serialize_with_type_tag() {
        let json = serde_json::to_value(SwapIntent::ChangeTokenIn).unwrap();
        assert_eq!(json["type"], "change_token_in");
    }
}
