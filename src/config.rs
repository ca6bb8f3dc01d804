use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::PLACEHOLDER;
use crate::model::{ContractRegistry, ProviderConfig};

/// Env var that overrides [`ViewConfig::router_label`].
pub const ROUTER_LABEL_ENV: &str = "SWAP_VIEW_ROUTER_LABEL";
/// Env var that overrides the provider's wrapped native address.
pub const WETH_ADDRESS_ENV: &str = "SWAP_VIEW_WETH_ADDRESS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Display configuration and collaborator context for the swap screen.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViewConfig {
    /// Routing source label for regular swaps. Default: "SwapRouterV3".
    #[serde(default = "default_router_label")]
    pub router_label: String,
    /// Separator placed between the head and tail of shortened addresses.
    /// Default: "•".
    #[serde(default = "default_address_delimiter")]
    pub address_delimiter: String,
    /// Shown wherever a value cannot be computed. Default: "-".
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Active chain provider.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Known contracts by address.
    #[serde(default)]
    pub contracts: ContractRegistry,
}

fn default_router_label() -> String {
    "SwapRouterV3".to_string()
}
fn default_address_delimiter() -> String {
    "•".to_string()
}
fn default_placeholder() -> String {
    PLACEHOLDER.to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            router_label: default_router_label(),
            address_delimiter: default_address_delimiter(),
            placeholder: default_placeholder(),
            provider: ProviderConfig::default(),
            contracts: ContractRegistry::default(),
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply overrides from a variable source (normally `std::env::var`).
    pub fn apply_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(label) = var(ROUTER_LABEL_ENV).filter(|s| !s.trim().is_empty()) {
            self.router_label = label;
        }
        if let Some(address) = var(WETH_ADDRESS_ENV).filter(|s| !s.trim().is_empty()) {
            self.provider.weth_address = Some(address);
        }
        self
    }
}

/// Load a config file, or the defaults when no path is given. Environment
/// overrides are applied on top either way.
pub fn load(path: Option<&Path>) -> Result<ViewConfig, ConfigError> {
    let config = match path {
        Some(p) => ViewConfig::from_json(&std::fs::read_to_string(p)?)?,
        None => ViewConfig::default(),
    };
    Ok(config.apply_overrides(|key| std::env::var(key).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContractLookup;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ViewConfig::from_json("{}").unwrap(), ViewConfig::default());
    }

    #[test]
    fn parses_provider_and_contracts() {
        let config = ViewConfig::from_json(
            r#"{
                "router_label": "Router",
                "provider": {"denom": "ETH", "weth_address": "0xC02a"},
                "contracts": {"0xC02a": {"name": "Wrapped Ether", "symbol": "WETH"}}
            }"#,
        )
        .unwrap();
        assert_eq!(config.router_label, "Router");
        assert_eq!(config.provider.denom, "ETH");
        assert_eq!(config.provider.name, "HAQQ Mainnet");
        assert!(config.contracts.get_by_id("0xc02a").is_some());
    }

    #[test]
    fn overrides_replace_values() {
        let config = ViewConfig::default().apply_overrides(|key| match key {
            ROUTER_LABEL_ENV => Some("CustomRouter".into()),
            WETH_ADDRESS_ENV => Some("0xabc".into()),
            _ => None,
        });
        assert_eq!(config.router_label, "CustomRouter");
        assert_eq!(config.provider.weth_address.as_deref(), Some("0xabc"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ViewConfig::default().apply_overrides(|_| Some("  ".into()));
        assert_eq!(config.router_label, "SwapRouterV3");
    }

    #[test]
    fn placeholder_is_configurable() {
        assert_eq!(ViewConfig::default().placeholder, "-");
        let config = ViewConfig::from_json(r#"{"placeholder": "n/a"}"#).unwrap();
        assert_eq!(config.placeholder, "n/a");
        assert_eq!(config.router_label, "SwapRouterV3");
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            ViewConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
    }
}
