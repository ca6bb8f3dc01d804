use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Token metadata as supplied by the token list collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    /// Contract address (0x-prefixed). The native coin uses its wrapped
    /// or sentinel address, whatever the token list reports.
    pub address: String,
    /// Ticker symbol. Absent for the chain's native coin on some token lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Number of decimals.
    pub decimals: u8,
}

impl Token {
    pub fn new(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        let symbol = symbol.into();
        Token {
            address: address.into(),
            name: symbol.clone(),
            symbol: Some(symbol),
            decimals,
        }
    }

    /// Same contract, compared case-insensitively (checksummed vs lowercase).
    pub fn same_address(&self, other: &Token) -> bool {
        self.address.trim().eq_ignore_ascii_case(other.address.trim())
    }

    /// Symbol if present and non-empty.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref().filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, "{}", self.address),
        }
    }
}
