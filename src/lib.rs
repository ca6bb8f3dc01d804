//! Presentation logic for a wallet's token swap screen.
//!
//! Collaborators (quote service, balance provider, contract registry) hand
//! over resolved snapshots; [`view::SwapViewModel`] turns them into what the
//! screen shows and [`intent::SwapIntent`]s describe what the user asked for.

pub mod config;
pub mod example;
pub mod format;
pub mod intent;
pub mod model;
pub mod onboarding;
pub mod render;
pub mod restore;
pub mod schema;
pub mod validate;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::ViewConfig;
pub use intent::{IntentSink, SwapIntent};
pub use view::{SwapInputs, SwapViewModel, SwapViewState};
