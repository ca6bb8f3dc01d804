//! Derived presentation state for the swap screen.
//!
//! [`SwapViewModel::compute`] is a pure function from a [`SwapInputs`]
//! snapshot to a [`SwapViewState`]. The screen calls it (through
//! [`SwapViewModel::update`]) every time any input changes; nothing here
//! fetches, signs or stores anything.

pub mod buttons;
pub mod impact;
pub mod rate;
pub mod routing;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ViewConfig;
use crate::format::{self, FormatPrecision};
use crate::intent::SwapIntent;
use crate::model::{QuoteSnapshot, Token, TokenAmount, TransactionSettings};

pub use buttons::{ActionButton, ActionSelection, ApproveParams, ButtonFlags, SwapAction};
pub use impact::PriceImpactTier;
pub use routing::{RouteHop, RoutingSource};

/// Provider fee rows always show six digits.
const PROVIDER_FEE_DIGITS: u8 = 6;

/// Everything the swap screen knows at one moment, as supplied by its
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SwapInputs {
    /// Latest estimate. `None` while estimating or after a failed fetch.
    #[serde(default)]
    pub quote: Option<QuoteSnapshot>,
    pub token_in: Token,
    pub token_out: Token,
    /// Amount of `token_in` entered for the swap.
    pub current_in: TokenAmount,
    /// Amount of `token_out` the quote yields.
    pub current_out: TokenAmount,
    /// Wallet balance of `token_in`.
    pub available_in: TokenAmount,
    /// Wallet balance of `token_out`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_out: Option<TokenAmount>,
    /// Fee charged by the pools on the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_fee: Option<TokenAmount>,
    /// Minimum output after slippage, computed by the quote collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_received: Option<TokenAmount>,
    /// The amount text as typed by the user, shown on the approve button.
    #[serde(default)]
    pub amount_in_text: String,
    /// Validation error on the amount input (e.g. exceeds balance).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_error: Option<String>,
    #[serde(default)]
    pub is_estimating: bool,
    #[serde(default)]
    pub is_swap_in_progress: bool,
    #[serde(default)]
    pub is_approve_in_progress: bool,
    #[serde(default)]
    pub is_wrap_tx: bool,
    #[serde(default)]
    pub is_unwrap_tx: bool,
    #[serde(default)]
    pub settings: TransactionSettings,
}

/// Rows under the amount inputs. Only present while a quote is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EstimatePanel {
    /// `"1 ISLM ≈ 2.5 USDT"`.
    pub rate_row: String,
    /// Hidden (`None`) for wrap/unwrap.
    pub provider_fee: Option<String>,
    /// Hidden (`None`) for wrap/unwrap.
    pub price_impact: Option<String>,
    pub price_impact_tier: PriceImpactTier,
    /// Hidden (`None`) for wrap/unwrap.
    pub minimum_received: Option<String>,
    pub routing_source: String,
    pub route: Vec<RouteHop>,
}

/// Which header control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAction {
    ChangeDirection,
    Settings,
    ChangeWallet,
}

/// What the swap screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SwapViewState {
    pub header_buttons_disabled: bool,
    pub swap_button_disabled: bool,
    pub approve_button_disabled: bool,
    pub action: ActionSelection,
    pub buttons: Vec<ActionButton>,
    /// Rate in the output token, or the placeholder.
    pub display_rate: String,
    pub price_impact_tier: PriceImpactTier,
    /// Minimum received, or the placeholder.
    pub minimum_received: String,
    pub routing_source: RoutingSource,
    pub estimate: Option<EstimatePanel>,
    /// Settings that swap/approve intents will carry.
    pub settings: TransactionSettings,
}

impl SwapViewState {
    fn button(&self, action: SwapAction) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Turn a transaction button press into an intent. `None` when the
    /// button is not offered or is disabled.
    pub fn press(&self, action: SwapAction) -> Option<SwapIntent> {
        let button = self.button(action)?;
        if button.disabled {
            return None;
        }
        Some(match action {
            SwapAction::Swap => SwapIntent::Swap {
                settings: self.settings.clone(),
            },
            SwapAction::Approve => SwapIntent::Approve {
                settings: self.settings.clone(),
            },
            SwapAction::Wrap => SwapIntent::Wrap,
            SwapAction::Unwrap => SwapIntent::Unwrap,
        })
    }

    /// Header presses. Direction and settings lock while anything is in
    /// flight; the wallet picker never does.
    pub fn press_header(&self, action: HeaderAction) -> Option<SwapIntent> {
        match action {
            HeaderAction::ChangeWallet => Some(SwapIntent::ChangeWallet),
            _ if self.header_buttons_disabled => None,
            HeaderAction::ChangeDirection => Some(SwapIntent::ChangeDirection),
            HeaderAction::Settings => Some(SwapIntent::OpenSettings),
        }
    }
}

/// Computes [`SwapViewState`] and remembers the latest one.
#[derive(Debug, Clone)]
pub struct SwapViewModel {
    config: ViewConfig,
    state: Option<SwapViewState>,
}

impl SwapViewModel {
    pub fn new(config: ViewConfig) -> Self {
        SwapViewModel {
            config,
            state: None,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Last state produced by [`update`](Self::update).
    pub fn state(&self) -> Option<&SwapViewState> {
        self.state.as_ref()
    }

    /// Recompute from a new snapshot, replacing the previous state wholesale.
    pub fn update(&mut self, inputs: &SwapInputs) -> &SwapViewState {
        let state = self.compute(inputs);
        debug!(
            has_quote = inputs.quote.is_some(),
            action = ?state.action,
            swap_disabled = state.swap_button_disabled,
            "swap view recomputed"
        );
        self.state.insert(state)
    }

    /// Pure derivation: same inputs, same output.
    pub fn compute(&self, inputs: &SwapInputs) -> SwapViewState {
        let quote = inputs.quote.as_ref();
        let flags = ButtonFlags::derive(inputs);
        let action = ActionSelection::select(
            inputs.is_unwrap_tx,
            inputs.is_wrap_tx,
            quote.is_some_and(|q| q.need_approve),
        );

        let approve_params = ApproveParams {
            symbol: inputs
                .token_in
                .symbol()
                .unwrap_or(self.config.provider.denom.as_str())
                .to_string(),
            amount: inputs.amount_in_text.clone(),
        };
        let buttons = action
            .actions()
            .into_iter()
            .map(|a| flags.button(a, (a == SwapAction::Approve).then(|| approve_params.clone())))
            .collect();

        let rate = rate::exchange_rate(quote, &inputs.token_in, &inputs.current_out);
        let placeholder = self.config.placeholder.as_str();
        let display_rate = rate::display_rate(rate, &inputs.current_out, placeholder);
        let price_impact_tier = PriceImpactTier::from_quote(quote);
        let minimum_received = match (quote, &inputs.min_received) {
            (Some(_), Some(min)) => min.to_balance_string(FormatPrecision::Auto),
            _ => placeholder.to_string(),
        };
        let routing_source =
            RoutingSource::resolve(inputs.is_wrap_tx, inputs.is_unwrap_tx, &self.config);

        let estimate = quote.map(|q| {
            self.estimate_panel(
                q,
                inputs,
                &display_rate,
                price_impact_tier,
                &minimum_received,
                &routing_source,
            )
        });

        SwapViewState {
            header_buttons_disabled: flags.header_disabled,
            swap_button_disabled: flags.swap_disabled,
            approve_button_disabled: flags.approve_disabled,
            action,
            buttons,
            display_rate,
            price_impact_tier,
            minimum_received,
            routing_source,
            estimate,
            settings: inputs.settings.clone(),
        }
    }

    fn estimate_panel(
        &self,
        quote: &QuoteSnapshot,
        inputs: &SwapInputs,
        display_rate: &str,
        price_impact_tier: PriceImpactTier,
        minimum_received: &str,
        routing_source: &RoutingSource,
    ) -> EstimatePanel {
        let is_wrapping = inputs.is_wrap_tx || inputs.is_unwrap_tx;

        let (provider_fee, price_impact, minimum_received) = if is_wrapping {
            (None, None, None)
        } else {
            let fee = inputs
                .provider_fee
                .as_ref()
                .map(|f| f.to_balance_string(FormatPrecision::Fixed(PROVIDER_FEE_DIGITS)))
                .unwrap_or_else(|| self.config.placeholder.clone());
            let impact = quote
                .price_impact
                .as_deref()
                .and_then(format::format_percent)
                .unwrap_or_else(|| self.config.placeholder.clone());
            (Some(fee), Some(impact), Some(minimum_received.to_string()))
        };

        EstimatePanel {
            rate_row: rate::rate_row(inputs.current_in.symbol(), display_rate),
            provider_fee,
            price_impact,
            price_impact_tier,
            minimum_received,
            routing_source: routing_source.label(),
            route: routing::route_hops(&quote.route, &self.config),
        }
    }
}
