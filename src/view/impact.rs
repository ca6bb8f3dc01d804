use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::format;
use crate::model::QuoteSnapshot;

/// Price impact (percent) at which the value turns to a warning.
pub const WARNING_THRESHOLD: f64 = 1.0;
/// Price impact (percent) at which the value turns to danger.
pub const DANGER_THRESHOLD: f64 = 5.0;

/// Severity of the quote's price impact, drives the value's text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PriceImpactTier {
    #[default]
    Neutral,
    Warning,
    Danger,
}

impl PriceImpactTier {
    /// `< 1` neutral, `[1, 5)` warning, `>= 5` danger.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= DANGER_THRESHOLD {
            PriceImpactTier::Danger
        } else if percent >= WARNING_THRESHOLD {
            PriceImpactTier::Warning
        } else {
            PriceImpactTier::Neutral
        }
    }

    /// Missing quote, missing impact or an unparsable value is neutral.
    pub fn from_quote(quote: Option<&QuoteSnapshot>) -> Self {
        quote
            .and_then(|q| q.price_impact.as_deref())
            .and_then(format::parse_percent)
            .map(Self::from_percent)
            .unwrap_or_default()
    }

    /// Theme color key used by the mobile front end.
    pub fn color(&self) -> &'static str {
        match self {
            PriceImpactTier::Neutral => "textBase1",
            PriceImpactTier::Warning => "textYellow1",
            PriceImpactTier::Danger => "textRed1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(impact: Option<&str>) -> QuoteSnapshot {
        QuoteSnapshot {
            amount_in: "1".into(),
            amount_out: "1".into(),
            price_impact: impact.map(str::to_string),
            need_approve: false,
            route: vec![],
        }
    }

    #[test]
    fn boundaries_are_closed_open() {
        assert_eq!(PriceImpactTier::from_percent(0.99), PriceImpactTier::Neutral);
        assert_eq!(PriceImpactTier::from_percent(1.0), PriceImpactTier::Warning);
        assert_eq!(PriceImpactTier::from_percent(4.9), PriceImpactTier::Warning);
        assert_eq!(PriceImpactTier::from_percent(5.0), PriceImpactTier::Danger);
        assert_eq!(PriceImpactTier::from_percent(-3.0), PriceImpactTier::Neutral);
    }

    #[test]
    fn reads_quote_strings() {
        let tier = |s| PriceImpactTier::from_quote(Some(&quote(Some(s))));
        assert_eq!(tier("4.9"), PriceImpactTier::Warning);
        assert_eq!(tier("5.0"), PriceImpactTier::Danger);
    }

    #[test]
    fn missing_or_garbage_is_neutral() {
        assert_eq!(PriceImpactTier::from_quote(None), PriceImpactTier::Neutral);
        assert_eq!(PriceImpactTier::from_quote(Some(&quote(None))), PriceImpactTier::Neutral);
        assert_eq!(
            PriceImpactTier::from_quote(Some(&quote(Some("n/a")))),
            PriceImpactTier::Neutral
        );
    }
}
