use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The active chain provider, normally a global in the wallet app. Here it
/// is passed in explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProviderConfig {
    /// Human-readable network name, e.g. "HAQQ Mainnet".
    #[serde(default = "default_provider_name")]
    pub name: String,
    /// Native coin denomination, used when a token has no symbol.
    #[serde(default = "default_denom")]
    pub denom: String,
    /// Address of the wrapped native coin contract (the wrap/unwrap target).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weth_address: Option<String>,
}

fn default_provider_name() -> String {
    "HAQQ Mainnet".to_string()
}
fn default_denom() -> String {
    "ISLM".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            name: default_provider_name(),
            denom: default_denom(),
            weth_address: None,
        }
    }
}

/// What the registry knows about a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContractInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// Resolves contract addresses to display metadata.
pub trait ContractLookup {
    fn get_by_id(&self, address: &str) -> Option<&ContractInfo>;
}

/// Address-keyed contract metadata. Keys are matched case-insensitively.
///
/// In JSON this is a plain map: `{"0xabc...": {"name": "Wrapped ISLM"}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ContractRegistry {
    contracts: HashMap<String, ContractInfo>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: &str, info: ContractInfo) {
        self.contracts.insert(normalize(address), info);
    }

    pub fn with(mut self, address: &str, info: ContractInfo) -> Self {
        self.insert(address, info);
        self
    }
}

impl ContractLookup for ContractRegistry {
    fn get_by_id(&self, address: &str) -> Option<&ContractInfo> {
        // Entries loaded from JSON keep their original casing.
        let key = normalize(address);
        self.contracts.get(&key).or_else(|| {
            self.contracts
                .iter()
                .find(|(k, _)| k.trim().eq_ignore_ascii_case(&key))
                .map(|(_, v)| v)
        })
    }
}

fn normalize(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_address_case() {
        let registry = ContractRegistry::new().with(
            "0xEC8CC083787C6E5218D86F9FF5F28D4CC377AC54",
            ContractInfo {
                name: "Wrapped ISLM".into(),
                symbol: Some("wISLM".into()),
                decimals: Some(18),
            },
        );
        let info = registry
            .get_by_id("0xec8cc083787c6e5218d86f9ff5f28d4cc377ac54")
            .unwrap();
        assert_eq!(info.name, "Wrapped ISLM");
        assert!(registry.get_by_id("0x0").is_none());
    }

    #[test]
    fn deserializes_from_plain_map() {
        let registry: ContractRegistry =
            serde_json::from_str(r#"{"0xABC": {"name": "Router"}}"#).unwrap();
        assert_eq!(registry.get_by_id("0xabc").map(|c| c.name.as_str()), Some("Router"));
    }
}
