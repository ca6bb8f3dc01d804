//! Sign-in/restore: decide what kind of secret the user pasted and where the
//! flow goes next. Key derivation and mnemonic decoding happen elsewhere.

use bip39::{Language, Mnemonic};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("unknown key")]
    UnknownKey,
}

/// Decides whether a normalized phrase is a valid mnemonic.
pub trait MnemonicCheck {
    fn is_valid_mnemonic(&self, phrase: &str) -> bool;
}

/// BIP-39 English wordlist and checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bip39English;

impl MnemonicCheck for Bip39English {
    fn is_valid_mnemonic(&self, phrase: &str) -> bool {
        Mnemonic::parse_in_normalized(Language::English, phrase).is_ok()
    }
}

/// A recognized secret, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RestoreSecret {
    /// Always `0x`-prefixed.
    PrivateKey { private_key: String },
    /// Trimmed, single-spaced and lowercased.
    Mnemonic { mnemonic: String },
}

/// Next screen in the restore flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RestoreRoute {
    /// Already onboarded: store the wallet straight away.
    StoreWallet,
    /// First wallet: set up a PIN first.
    SetupPin,
    /// Mnemonic: pick which derived accounts to import.
    ChooseAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RestorePlan {
    pub secret: RestoreSecret,
    pub route: RestoreRoute,
}

/// Classify a pasted secret. Hex keys win over mnemonics.
pub fn classify(
    input: &str,
    onboarded: bool,
    mnemonics: &impl MnemonicCheck,
) -> Result<RestorePlan, RestoreError> {
    let seed = input.trim();
    if seed.is_empty() {
        return Err(RestoreError::UnknownKey);
    }

    if is_hex(seed) {
        let private_key = if seed.starts_with("0x") {
            seed.to_string()
        } else {
            format!("0x{seed}")
        };
        return Ok(RestorePlan {
            secret: RestoreSecret::PrivateKey { private_key },
            route: if onboarded {
                RestoreRoute::StoreWallet
            } else {
                RestoreRoute::SetupPin
            },
        });
    }

    let phrase = seed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if mnemonics.is_valid_mnemonic(&phrase) {
        return Ok(RestorePlan {
            secret: RestoreSecret::Mnemonic { mnemonic: phrase },
            route: RestoreRoute::ChooseAccount,
        });
    }

    Err(RestoreError::UnknownKey)
}

/// Hex digits with an optional `0x` prefix, at least one digit.
fn is_hex(s: &str) -> bool {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                          abandon abandon abandon abandon abandon about";

    #[test]
    fn hex_key_gets_prefix() {
        let plan = classify("  deadBEEF01 ", false, &Bip39English).unwrap();
        assert_eq!(
            plan.secret,
            RestoreSecret::PrivateKey {
                private_key: "0xdeadBEEF01".into()
            }
        );
        assert_eq!(plan.route, RestoreRoute::SetupPin);
    }

    #[test]
    fn prefixed_key_kept_and_onboarded_stores_directly() {
        let plan = classify("0xabc", true, &Bip39English).unwrap();
        assert_eq!(
            plan.secret,
            RestoreSecret::PrivateKey {
                private_key: "0xabc".into()
            }
        );
        assert_eq!(plan.route, RestoreRoute::StoreWallet);
    }

    #[test]
    fn mnemonic_is_lowercased() {
        let plan = classify(&PHRASE.to_uppercase(), false, &Bip39English).unwrap();
        assert_eq!(plan.route, RestoreRoute::ChooseAccount);
        match plan.secret {
            RestoreSecret::Mnemonic { mnemonic } => assert!(mnemonic.starts_with("abandon")),
            other => panic!("expected mnemonic, got {other:?}"),
        }
    }

    #[test]
    fn garbage_is_unknown() {
        assert_eq!(classify("", false, &Bip39English), Err(RestoreError::UnknownKey));
        assert_eq!(classify("0x", false, &Bip39English), Err(RestoreError::UnknownKey));
        assert_eq!(
            classify("hello world", false, &Bip39English),
            Err(RestoreError::UnknownKey)
        );
    }

    #[test]
    fn twelve_words_outside_the_wordlist_are_unknown() {
        let phrase = vec!["hello"; 12].join(" ");
        assert_eq!(classify(&phrase, false, &Bip39English), Err(RestoreError::UnknownKey));
    }

    #[test]
    fn bad_checksum_is_unknown() {
        let phrase = vec!["abandon"; 12].join(" ");
        assert!(!Bip39English.is_valid_mnemonic(&phrase));
        assert_eq!(classify(&phrase, true, &Bip39English), Err(RestoreError::UnknownKey));
    }

    #[test]
    fn extra_whitespace_is_collapsed() {
        let spaced = PHRASE.replace(' ', "   ");
        let plan = classify(&spaced, false, &Bip39English).unwrap();
        assert_eq!(
            plan.secret,
            RestoreSecret::Mnemonic {
                mnemonic: PHRASE.split_whitespace().collect::<Vec<_>>().join(" ")
            }
        );
    }
}
