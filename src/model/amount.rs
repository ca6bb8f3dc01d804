use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{self, FormatPrecision};

/// Largest decimal precision a token amount may carry.
pub const MAX_PRECISION: u8 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Precision mismatch: {left} vs {right}")]
    PrecisionMismatch { left: u8, right: u8 },

    #[error("Symbol mismatch: `{left}` vs `{right}`")]
    SymbolMismatch { left: String, right: String },

    #[error("Amount overflow")]
    Overflow,

    #[error("Amount underflow: cannot go below zero")]
    Underflow,

    #[error("Precision {0} exceeds the maximum of {MAX_PRECISION}")]
    PrecisionTooLarge(u8),

    #[error("Invalid amount `{0}`")]
    Invalid(String),
}

/// A token balance: raw base units plus the decimal precision and symbol
/// needed to display it.
///
/// In JSON the raw amount is a decimal string (e.g. `"1000000000000000000"`),
/// since base-unit amounts routinely exceed what a JS number can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TokenAmount {
    /// Amount in base units.
    #[serde(with = "raw_str")]
    #[schemars(with = "String")]
    pub raw: u128,
    /// Number of decimals (18 for most EVM tokens, 6 for USDC).
    pub precision: u8,
    /// Display symbol, e.g. "ISLM".
    pub symbol: String,
}

impl TokenAmount {
    pub fn new(raw: u128, precision: u8, symbol: impl Into<String>) -> Self {
        TokenAmount {
            raw,
            precision,
            symbol: symbol.into(),
        }
    }

    pub fn zero(precision: u8, symbol: impl Into<String>) -> Self {
        Self::new(0, precision, symbol)
    }

    /// Parse a base-unit decimal string, e.g. a quote's `amount_in`.
    pub fn from_raw_str(
        raw: &str,
        precision: u8,
        symbol: impl Into<String>,
    ) -> Result<Self, AmountError> {
        if precision > MAX_PRECISION {
            return Err(AmountError::PrecisionTooLarge(precision));
        }
        let trimmed = raw.trim();
        let raw = trimmed
            .parse::<u128>()
            .map_err(|_| AmountError::Invalid(trimmed.to_string()))?;
        Ok(Self::new(raw, precision, symbol))
    }

    /// Parse a human decimal string ("1.5") into base units.
    /// Digits beyond `precision` are rejected rather than rounded.
    pub fn from_decimal_str(
        value: &str,
        precision: u8,
        symbol: impl Into<String>,
    ) -> Result<Self, AmountError> {
        if precision > MAX_PRECISION {
            return Err(AmountError::PrecisionTooLarge(precision));
        }
        let value = value.trim();
        let invalid = || AmountError::Invalid(value.to_string());

        let (int_part, frac_part) = match value.split_once('.') {
            Some((i, f)) => (i, f),
            None => (value, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let frac_trimmed = frac_part.trim_end_matches('0');
        if frac_trimmed.len() > precision as usize {
            return Err(invalid());
        }

        let scale = 10u128
            .checked_pow(precision as u32)
            .ok_or(AmountError::Overflow)?;
        let int_value = if int_part.is_empty() {
            0
        } else {
            int_part.parse::<u128>().map_err(|_| AmountError::Overflow)?
        };
        let frac_value = if frac_trimmed.is_empty() {
            0
        } else {
            let digits = frac_trimmed.parse::<u128>().map_err(|_| invalid())?;
            let pad = 10u128.pow((precision as usize - frac_trimmed.len()) as u32);
            digits * pad
        };

        let raw = int_value
            .checked_mul(scale)
            .and_then(|v| v.checked_add(frac_value))
            .ok_or(AmountError::Overflow)?;
        Ok(Self::new(raw, precision, symbol))
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    pub fn is_positive(&self) -> bool {
        self.raw > 0
    }

    /// Lossy conversion to a float in whole-token units.
    pub fn to_float(&self) -> f64 {
        self.raw as f64 / 10f64.powi(self.precision as i32)
    }

    pub fn checked_add(&self, other: &TokenAmount) -> Result<TokenAmount, AmountError> {
        self.check_compatible(other)?;
        let raw = self.raw.checked_add(other.raw).ok_or(AmountError::Overflow)?;
        Ok(Self::new(raw, self.precision, self.symbol.clone()))
    }

    pub fn checked_sub(&self, other: &TokenAmount) -> Result<TokenAmount, AmountError> {
        self.check_compatible(other)?;
        let raw = self.raw.checked_sub(other.raw).ok_or(AmountError::Underflow)?;
        Ok(Self::new(raw, self.precision, self.symbol.clone()))
    }

    fn check_compatible(&self, other: &TokenAmount) -> Result<(), AmountError> {
        if self.precision != other.precision {
            return Err(AmountError::PrecisionMismatch {
                left: self.precision,
                right: other.precision,
            });
        }
        if self.symbol != other.symbol {
            return Err(AmountError::SymbolMismatch {
                left: self.symbol.clone(),
                right: other.symbol.clone(),
            });
        }
        Ok(())
    }

    /// Render as `"<number> <symbol>"`, e.g. `"2.5 ISLM"`.
    pub fn to_balance_string(&self, precision: FormatPrecision) -> String {
        format::balance_string(self.to_float(), &self.symbol, precision)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_balance_string(FormatPrecision::Auto))
    }
}

/// Serialize `u128` as a decimal string, accept either a string or a number.
mod raw_str {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(u64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s
                .trim()
                .parse::<u128>()
                .map_err(|_| de::Error::custom(format!("invalid base-unit amount `{s}`"))),
            Raw::Num(n) => Ok(n as u128),
        }
    }
}
