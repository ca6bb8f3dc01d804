//! Display formatting shared by the swap screen rows.
//!
//! Every function here is total: inputs that cannot be rendered come back as
//! [`PLACEHOLDER`] instead of an error.

/// Default text for values that cannot be computed (no quote, division by
/// zero, ...). `ViewConfig::placeholder` overrides it on the swap screen.
pub const PLACEHOLDER: &str = "-";

/// Non-breaking space, keeps "1 ISLM ≈ 2.5 USDT" on one line.
pub const NBSP: char = '\u{a0}';

/// Maximum fractional digits the auto rule will ever emit.
const MAX_AUTO_DECIMALS: usize = 18;

/// Significant fractional digits kept after the leading zeros.
const AUTO_SIGNIFICANT: usize = 3;

const SHORT_ADDRESS_HEAD: usize = 6;
const SHORT_ADDRESS_TAIL: usize = 4;

/// How many fractional digits to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatPrecision {
    /// Digits scale with magnitude, trailing zeros trimmed.
    #[default]
    Auto,
    /// Exactly this many digits, no trimming.
    Fixed(u8),
}

/// Format a number with the auto rule.
///
/// Values `>= 1` keep three decimals. Values below one keep three digits past
/// the leading zeros (`0.00123456` -> `0.00123`). Trailing zeros and a bare
/// decimal point are trimmed. Non-zero values too small for the digit cap
/// render as a bound (`<0.000000000000000001`) so they never read as zero.
pub fn format_auto(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    let decimals = if abs >= 1.0 {
        AUTO_SIGNIFICANT
    } else {
        let zeros = (-abs.log10()).floor().max(0.0) as usize;
        (zeros + AUTO_SIGNIFICANT).min(MAX_AUTO_DECIMALS)
    };

    let rendered = trim_fraction(format!("{value:.decimals$}"));
    if rendered == "0" || rendered == "-0" {
        let smallest = format!("0.{}1", "0".repeat(MAX_AUTO_DECIMALS - 1));
        return if value > 0.0 {
            format!("<{smallest}")
        } else {
            format!(">-{smallest}")
        };
    }
    rendered
}

pub fn format_fixed(value: f64, digits: u8) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let digits = digits as usize;
    format!("{value:.digits$}")
}

pub fn format_number(value: f64, precision: FormatPrecision) -> String {
    match precision {
        FormatPrecision::Auto => format_auto(value),
        FormatPrecision::Fixed(d) => format_fixed(value, d),
    }
}

/// `"<number> <symbol>"`, or just the number when the symbol is empty.
pub fn balance_string(value: f64, symbol: &str, precision: FormatPrecision) -> String {
    let number = format_number(value, precision);
    if symbol.is_empty() || number == PLACEHOLDER {
        number
    } else {
        format!("{number} {symbol}")
    }
}

/// Format a percentage string from a quote (`"4.91234"` -> `"4.91%"`).
/// Returns `None` when the value does not parse.
pub fn format_percent(raw: &str) -> Option<String> {
    let value = parse_percent(raw)?;
    Some(format!("{}%", trim_fraction(format!("{value:.2}"))))
}

/// Parse a percentage string; `None` for empty, garbage or non-finite input.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let value = raw.trim().trim_end_matches('%').trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Shorten an address to head + delimiter + tail (`0x1234•abcd`).
/// Short or non-ASCII input is returned unchanged.
pub fn short_address(address: &str, delimiter: &str) -> String {
    let address = address.trim();
    if !address.is_ascii() || address.len() <= SHORT_ADDRESS_HEAD + SHORT_ADDRESS_TAIL {
        return address.to_string();
    }
    format!(
        "{}{}{}",
        &address[..SHORT_ADDRESS_HEAD],
        delimiter,
        &address[address.len() - SHORT_ADDRESS_TAIL..]
    )
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_trims_trailing_zeros() {
        assert_eq!(format_auto(2.5), "2.5");
        assert_eq!(format_auto(2.0), "2");
        assert_eq!(format_auto(1234.56789), "1234.568");
    }

    #[test]
    fn auto_keeps_digits_for_small_magnitudes() {
        assert_eq!(format_auto(0.5), "0.5");
        assert_eq!(format_auto(0.00123456), "0.00123");
        assert_eq!(format_auto(0.0), "0");
    }

    #[test]
    fn values_below_the_digit_cap_are_not_zero() {
        assert_eq!(format_auto(1e-20), "<0.000000000000000001");
        assert_eq!(format_auto(-1e-20), ">-0.000000000000000001");
        assert_eq!(format_auto(1e-18), "0.000000000000000001");
        assert_eq!(
            balance_string(3e-21, "SYM", FormatPrecision::Auto),
            "<0.000000000000000001 SYM"
        );
    }

    #[test]
    fn non_finite_renders_placeholder() {
        assert_eq!(format_auto(f64::NAN), PLACEHOLDER);
        assert_eq!(format_auto(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_fixed(f64::NAN, 6), PLACEHOLDER);
        assert_eq!(balance_string(f64::NAN, "ISLM", FormatPrecision::Auto), PLACEHOLDER);
    }

    #[test]
    fn fixed_keeps_all_digits() {
        assert_eq!(format_fixed(0.1, 6), "0.100000");
        assert_eq!(balance_string(1.0, "USDC", FormatPrecision::Fixed(2)), "1.00 USDC");
    }

    #[test]
    fn percent_parsing() {
        assert_eq!(format_percent("4.91234").as_deref(), Some("4.91%"));
        assert_eq!(format_percent("5.0").as_deref(), Some("5%"));
        assert_eq!(format_percent("abc"), None);
        assert_eq!(parse_percent(" 1.5% "), Some(1.5));
        assert_eq!(parse_percent(""), None);
    }

    #[test]
    fn shortens_addresses() {
        assert_eq!(
            short_address("0xeC8CC083787c6e5218D86f9FF5f28d4cC377Ac54", "•"),
            "0xeC8C•Ac54"
        );
        assert_eq!(short_address("0x1234", "•"), "0x1234");
    }
}
