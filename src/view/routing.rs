use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ViewConfig;
use crate::format::{self, NBSP};
use crate::model::ContractLookup;

/// Where the transaction is executed, shown in the "Routing source" row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoutingSource {
    /// Wrap/unwrap goes straight to the wrapped-native contract.
    WrappedNative { name: String, short_address: String },
    /// Everything else goes through the swap router.
    Router { label: String },
}

impl RoutingSource {
    /// Wrap/unwrap takes precedence over the router label.
    pub fn resolve(is_wrap_tx: bool, is_unwrap_tx: bool, config: &ViewConfig) -> Self {
        if !(is_wrap_tx || is_unwrap_tx) {
            return RoutingSource::Router {
                label: config.router_label.clone(),
            };
        }

        let Some(address) = config.provider.weth_address.as_deref() else {
            warn!(provider = %config.provider.name, "provider has no wrapped native address");
            return RoutingSource::WrappedNative {
                name: config.placeholder.clone(),
                short_address: config.placeholder.clone(),
            };
        };

        let name = match config.contracts.get_by_id(address) {
            Some(info) => info.name.clone(),
            None => {
                warn!(address, "wrapped native contract is not in the registry");
                config.placeholder.clone()
            }
        };

        RoutingSource::WrappedNative {
            name,
            short_address: format::short_address(address, &config.address_delimiter),
        }
    }

    pub fn label(&self) -> String {
        match self {
            RoutingSource::WrappedNative {
                name,
                short_address,
            } => format!("{name}{NBSP}{short_address}"),
            RoutingSource::Router { label } => label.clone(),
        }
    }
}

/// One hop of the quote's route, labelled for the route row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RouteHop {
    pub address: String,
    /// Registry symbol, else registry name, else the shortened address.
    pub label: String,
}

pub fn route_hops(route: &[String], config: &ViewConfig) -> Vec<RouteHop> {
    route
        .iter()
        .map(|address| {
            let label = config
                .contracts
                .get_by_id(address)
                .map(|info| info.symbol.clone().unwrap_or_else(|| info.name.clone()))
                .unwrap_or_else(|| format::short_address(address, &config.address_delimiter));
            RouteHop {
                address: address.clone(),
                label,
            }
        })
        .collect()
}
