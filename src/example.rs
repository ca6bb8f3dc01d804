use crate::model::{QuoteSnapshot, Token, TokenAmount, TransactionSettings};
use crate::view::SwapInputs;

const WISLM: &str = "0xEC8CC083787C6E5218D86F9FF5F28D4CC377AC54";
const USDT: &str = "0xd567B3d7B8FE3C79a1AD8dA978812cfC4Fa05e75";

/// An ISLM -> USDT swap with a fresh quote that needs an allowance.
pub fn example_inputs() -> SwapInputs {
    let islm = Token::new(WISLM, "ISLM", 18);
    let usdt = Token::new(USDT, "USDT", 6);

    SwapInputs {
        quote: Some(QuoteSnapshot {
            amount_in: "10000000000000000000".into(),
            amount_out: "254310".into(),
            price_impact: Some("1.27".into()),
            need_approve: true,
            route: vec![WISLM.into(), USDT.into()],
        }),
        current_in: TokenAmount::new(10_000_000_000_000_000_000, 18, "ISLM"),
        current_out: TokenAmount::new(254_310, 6, "USDT"),
        available_in: TokenAmount::new(125_400_000_000_000_000_000, 18, "ISLM"),
        available_out: Some(TokenAmount::new(3_000_000, 6, "USDT")),
        provider_fee: Some(TokenAmount::new(30_000_000_000_000_000, 18, "ISLM")),
        min_received: Some(TokenAmount::new(253_038, 6, "USDT")),
        amount_in_text: "10".into(),
        input_error: None,
        is_estimating: false,
        is_swap_in_progress: false,
        is_approve_in_progress: false,
        is_wrap_tx: false,
        is_unwrap_tx: false,
        settings: TransactionSettings::default(),
        token_in: islm,
        token_out: usdt,
    }
}

/// Print an example swap snapshot JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&example_inputs())?;
    println!("{json}");
    Ok(())
}
