use swap_view::onboarding::{self, FinishNavigation, OnboardingAction};
use swap_view::restore::{
    self, Bip39English, MnemonicCheck, RestoreError, RestoreRoute, RestoreSecret,
};

/// Accepts exactly one phrase.
struct KnownPhrase(&'static str);

impl MnemonicCheck for KnownPhrase {
    fn is_valid_mnemonic(&self, phrase: &str) -> bool {
        phrase == self.0
    }
}

#[test]
fn private_key_route_depends_on_onboarding() {
    let key = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    let first = restore::classify(key, false, &Bip39English).unwrap();
    assert_eq!(first.route, RestoreRoute::SetupPin);
    assert_eq!(
        first.secret,
        RestoreSecret::PrivateKey {
            private_key: format!("0x{key}")
        }
    );

    let later = restore::classify(&format!("0x{key}"), true, &Bip39English).unwrap();
    assert_eq!(later.route, RestoreRoute::StoreWallet);
}

#[test]
fn mnemonic_goes_through_collaborator_check() {
    let check = KnownPhrase("test test test test test test test test test test test junk");

    let plan = restore::classify(
        "  Test test test test test test test test test test test JUNK ",
        false,
        &check,
    )
    .unwrap();
    assert_eq!(plan.route, RestoreRoute::ChooseAccount);

    let rejected = restore::classify(
        "test test test test test test test test test test test test",
        false,
        &check,
    );
    assert_eq!(rejected, Err(RestoreError::UnknownKey));
}

#[test]
fn bip39_wordlist_and_checksum() {
    let valid = "abandon abandon abandon abandon abandon abandon \
                 abandon abandon abandon abandon abandon about";
    assert!(Bip39English.is_valid_mnemonic(valid));

    let eleven = valid.split(' ').skip(1).collect::<Vec<_>>().join(" ");
    assert!(!Bip39English.is_valid_mnemonic(&eleven));
    assert!(!Bip39English.is_valid_mnemonic(&vec!["abandon"; 12].join(" ")));
}

#[test]
fn non_wordlist_phrase_is_unknown_key() {
    let phrase = vec!["hello"; 12].join(" ");
    assert_eq!(
        restore::classify(&phrase, false, &Bip39English),
        Err(RestoreError::UnknownKey)
    );
}

#[test]
fn valid_mnemonic_goes_to_account_choice() {
    let plan = restore::classify(
        "Legal Winner Thank Year Wave Sausage Worth Useful Legal Winner Thank Yellow",
        true,
        &Bip39English,
    )
    .unwrap();
    assert_eq!(plan.route, RestoreRoute::ChooseAccount);
}

#[test]
fn onboarding_finish_matrix() {
    for (action, onboarded, nav) in [
        (OnboardingAction::Create, false, FinishNavigation::ReplaceHome),
        (OnboardingAction::Create, true, FinishNavigation::GoBack),
        (OnboardingAction::Restore, false, FinishNavigation::ReplaceHome),
        (OnboardingAction::Restore, true, FinishNavigation::GoBack),
    ] {
        let outcome = onboarding::finish(action, onboarded);
        assert_eq!(outcome.navigation, nav);
        assert_eq!(outcome.mark_onboarded, !onboarded);
    }
}
