use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the user got to the finish screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingAction {
    Create,
    Restore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FinishNavigation {
    /// Close the modal flow and return to where it was opened.
    GoBack,
    /// Replace the stack with the home screen.
    ReplaceHome,
}

/// What the finish screen shows and does when the user taps "Finish".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FinishOutcome {
    pub title: String,
    pub navigation: FinishNavigation,
    /// Persist the onboarded flag (first wallet only).
    pub mark_onboarded: bool,
    /// Ask the wallets collaborator to check backup status afterwards.
    pub check_backup: bool,
}

pub fn finish(action: OnboardingAction, onboarded: bool) -> FinishOutcome {
    let title = match action {
        OnboardingAction::Create => "Congratulations! You have successfully added a new wallet",
        OnboardingAction::Restore => "Congratulations! You have successfully recovered a wallet",
    };
    FinishOutcome {
        title: title.to_string(),
        navigation: if onboarded {
            FinishNavigation::GoBack
        } else {
            FinishNavigation::ReplaceHome
        },
        mark_onboarded: !onboarded,
        check_backup: true,
    }
}
