use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Token in and token out are the same contract `{address}`")]
pub struct SameTokenError {
    pub address: String,
}

/// Which token is sold and which is bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SwapDirection {
    pub token_in: Token,
    pub token_out: Token,
}

impl SwapDirection {
    pub fn new(token_in: Token, token_out: Token) -> Result<Self, SameTokenError> {
        let direction = SwapDirection {
            token_in,
            token_out,
        };
        direction.check()?;
        Ok(direction)
    }

    /// Fails when both sides point at the same contract.
    pub fn check(&self) -> Result<(), SameTokenError> {
        if self.token_in.same_address(&self.token_out) {
            return Err(SameTokenError {
                address: self.token_in.address.clone(),
            });
        }
        Ok(())
    }

    /// Exchange the two sides in one step.
    pub fn flip(self) -> Self {
        SwapDirection {
            token_in: self.token_out,
            token_out: self.token_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn islm() -> Token {
        Token::new("0xEC8CC083787C6E5218D86F9FF5F28D4CC377AC54", "wISLM", 18)
    }

    fn usdt() -> Token {
        Token::new("0xd567b3d7b8fe3c79a1ad8da978812cfc4fa05e75", "USDT", 6)
    }

    #[test]
    fn rejects_same_token_case_insensitively() {
        let mut lower = islm();
        lower.address = lower.address.to_lowercase();
        assert!(SwapDirection::new(islm(), lower).is_err());
    }

    #[test]
    fn flip_exchanges_both_sides() {
        let d = SwapDirection::new(islm(), usdt()).unwrap().flip();
        assert_eq!(d.token_in, usdt());
        assert_eq!(d.token_out, islm());
    }

    #[test]
    fn flipped_direction_still_checks() {
        let d = SwapDirection::new(islm(), usdt()).unwrap().flip();
        assert!(d.check().is_ok());
    }
}
