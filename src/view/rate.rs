use tracing::warn;

use crate::format::{self, FormatPrecision, NBSP};
use crate::model::{QuoteSnapshot, Token, TokenAmount};

/// Units of the output token received per one whole input token.
///
/// `None` when there is no quote, `amount_in` does not parse or is zero, or
/// the division is not finite.
pub fn exchange_rate(
    quote: Option<&QuoteSnapshot>,
    token_in: &Token,
    current_out: &TokenAmount,
) -> Option<f64> {
    let quote = quote?;
    let symbol = token_in.symbol().unwrap_or_default();
    let amount_in = match quote.amount_in_with(token_in.decimals, symbol) {
        Ok(a) => a,
        Err(e) => {
            warn!(amount_in = %quote.amount_in, error = %e, "quote amount_in is not usable");
            return None;
        }
    };
    if amount_in.is_zero() {
        return None;
    }
    let rate = current_out.to_float() / amount_in.to_float();
    rate.is_finite().then_some(rate)
}

/// The rate rendered in the output token, e.g. `"2.5 USDT"`.
pub fn display_rate(rate: Option<f64>, current_out: &TokenAmount, placeholder: &str) -> String {
    match rate {
        Some(r) => format::balance_string(r, current_out.symbol(), FormatPrecision::Auto),
        None => placeholder.to_string(),
    }
}

/// The full rate row, `"1 ISLM ≈ 2.5 USDT"`.
pub fn rate_row(symbol_in: &str, display_rate: &str) -> String {
    format!("1{NBSP}{symbol_in}{NBSP}≈{NBSP}{display_rate}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(amount_in: &str) -> QuoteSnapshot {
        QuoteSnapshot {
            amount_in: amount_in.into(),
            amount_out: "0".into(),
            price_impact: None,
            need_approve: false,
            route: vec![],
        }
    }

    fn islm() -> Token {
        Token::new("0xec8cc083787c6e5218d86f9ff5f28d4cc377ac54", "ISLM", 18)
    }

    #[test]
    fn one_token_in_gives_output_balance() {
        let out = TokenAmount::from_decimal_str("2.5", 6, "SYM").unwrap();
        let rate = exchange_rate(Some(&quote("1000000000000000000")), &islm(), &out);
        assert_eq!(rate, Some(2.5));
        assert_eq!(display_rate(rate, &out, "-"), "2.5 SYM");
    }

    #[test]
    fn zero_or_garbage_amount_in_has_no_rate() {
        let out = TokenAmount::new(1, 0, "SYM");
        assert_eq!(exchange_rate(Some(&quote("0")), &islm(), &out), None);
        assert_eq!(exchange_rate(Some(&quote("-1")), &islm(), &out), None);
        assert_eq!(exchange_rate(Some(&quote("")), &islm(), &out), None);
        assert_eq!(exchange_rate(None, &islm(), &out), None);
        assert_eq!(display_rate(None, &out, "-"), "-");
        assert_eq!(display_rate(None, &out, "n/a"), "n/a");
    }

    #[test]
    fn row_uses_non_breaking_spaces() {
        assert_eq!(rate_row("ISLM", "2.5 SYM"), "1\u{a0}ISLM\u{a0}≈\u{a0}2.5 SYM");
    }
}
