use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::amount::{AmountError, TokenAmount};

/// A priced route proposal from the indexer's estimate endpoint.
///
/// Snapshots are replaced wholesale on every successful estimate; nothing
/// mutates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuoteSnapshot {
    /// Input amount in base units of the input token (decimal string).
    pub amount_in: String,
    /// Output amount in base units of the output token (decimal string).
    pub amount_out: String,
    /// Price impact as a percentage string, e.g. "0.42".
    #[serde(default, alias = "s_price_impact", skip_serializing_if = "Option::is_none")]
    pub price_impact: Option<String>,
    /// Whether the router needs an allowance before the swap can execute.
    #[serde(default)]
    pub need_approve: bool,
    /// Ordered hop addresses the swap is routed through.
    #[serde(default)]
    pub route: Vec<String>,
}

impl QuoteSnapshot {
    /// `amount_in` as a token amount with the input token's precision.
    pub fn amount_in_with(&self, precision: u8, symbol: &str) -> Result<TokenAmount, AmountError> {
        TokenAmount::from_raw_str(&self.amount_in, precision, symbol)
    }

    /// `amount_out` as a token amount with the output token's precision.
    pub fn amount_out_with(&self, precision: u8, symbol: &str) -> Result<TokenAmount, AmountError> {
        TokenAmount::from_raw_str(&self.amount_out, precision, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_indexer_field_names() {
        let q: QuoteSnapshot = serde_json::from_str(
            r#"{
                "amount_in": "1000000000000000000",
                "amount_out": "2500000",
                "s_price_impact": "0.31",
                "need_approve": true,
                "route": ["0xaaa", "0xbbb"]
            }"#,
        )
        .unwrap();
        assert_eq!(q.price_impact.as_deref(), Some("0.31"));
        assert!(q.need_approve);
        assert_eq!(q.amount_out_with(6, "USDC").unwrap().to_float(), 2.5);
    }

    #[test]
    fn optional_fields_default() {
        let q: QuoteSnapshot =
            serde_json::from_str(r#"{"amount_in": "1", "amount_out": "1"}"#).unwrap();
        assert_eq!(q.price_impact, None);
        assert!(!q.need_approve);
        assert!(q.route.is_empty());
    }
}
