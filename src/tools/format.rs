//! Formatting helpers shared by post-processors.
//!
//! None of these fail: unrenderable input falls back to the original text or
//! to `"unknown"`.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits kept when rendering amounts.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Render a raw integer amount in whole units.
///
/// `total_supply` is divided by `10^decimals` and printed with `,` thousands
/// separators and at most three fraction digits. A non-numeric supply is
/// returned unchanged; a missing or non-numeric `decimals` counts as zero.
/// Amounts too small to show at three places render as `0`.
pub fn format_supply(total_supply: &str, decimals: &str) -> String {
    let scale = decimals.trim().parse::<u32>().unwrap_or(0);
    let Ok(amount) = Decimal::from_str(total_supply.trim()) else {
        return total_supply.to_string();
    };

    let rounded = shift_right(amount, scale)
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    group_thousands(&rounded.to_string())
}

/// `amount / 10^places`, rounding away digits past the decimal's precision.
fn shift_right(mut amount: Decimal, places: u32) -> Decimal {
    if let Some(target) = amount.scale().checked_add(places)
        && amount.set_scale(target).is_ok()
    {
        return amount;
    }

    // Divide in steps that fit a u64 power of ten until nothing is left.
    let mut remaining = places;
    while remaining > 0 && !amount.is_zero() {
        let step = remaining.min(18);
        amount = amount
            .checked_div(Decimal::from(10u64.pow(step)))
            .unwrap_or(Decimal::ZERO);
        remaining -= step;
    }
    amount
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Render an epoch timestamp (`seconds[.nanoseconds]`) as an ISO-8601 UTC
/// instant with millisecond precision, or `"unknown"`.
pub fn format_timestamp(timestamp: &str) -> String {
    parse_timestamp(timestamp.trim())
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| "unknown".to_string())
}

fn parse_timestamp(ts: &str) -> Option<DateTime<chrono::Utc>> {
    let (secs, frac) = match ts.split_once('.') {
        Some((s, f)) => (s, f),
        None => (ts, ""),
    };
    if secs.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let secs: i64 = secs.parse().ok()?;
    // Right-pad to nanoseconds, dropping anything finer.
    let nanos: u32 = if frac.is_empty() {
        0
    } else {
        format!("{:0<9}", &frac[..frac.len().min(9)]).parse().ok()?
    };
    DateTime::from_timestamp(secs, nanos)
}

/// Phrase for a token's default freeze flag.
pub fn freeze_phrase(freeze_default: bool) -> &'static str {
    if freeze_default {
        "Frozen by default"
    } else {
        "Not frozen by default"
    }
}

/// Phrase for a mirror node `supply_type` value.
pub fn supply_type_phrase(supply_type: &str) -> &'static str {
    if supply_type == "INFINITE" {
        "Infinite"
    } else {
        "Finite"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_supply_divides_by_decimals() {
        assert_eq!(format_supply("1000", "2"), "10");
        assert_eq!(format_supply("123456789", "2"), "1,234,567.89");
        assert_eq!(format_supply("1000000", "0"), "1,000,000");
        assert_eq!(format_supply("999", "0"), "999");
    }

    #[test]
    fn test_format_supply_rounds_to_three_places() {
        assert_eq!(format_supply("12345678", "4"), "1,234.568");
        assert_eq!(format_supply("1", "4"), "0");
        assert_eq!(format_supply("15", "4"), "0.002");
    }

    #[test]
    fn test_format_supply_fallbacks() {
        assert_eq!(format_supply("lots", "2"), "lots");
        assert_eq!(format_supply("1500", ""), "1,500");
        assert_eq!(format_supply("1500", "abc"), "1,500");
    }

    #[test]
    fn test_format_supply_beyond_decimal_scale() {
        assert_eq!(format_supply("1", "40"), "0");
        assert_eq!(format_supply("123456789", "29"), "0");
        assert_eq!(format_supply("1.5", "4294967295"), "0");
        assert_eq!(
            format_supply("79228162514264337593543950335", "29"),
            "0.792"
        );
    }

    #[test]
    fn test_format_supply_eighteen_decimals() {
        assert_eq!(format_supply("5000000000000000000000", "18"), "5,000");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-1234567.5"), "-1,234,567.5");
        assert_eq!(group_thousands("123"), "123");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("1700000000.123456789"),
            "2023-11-14T22:13:20.123Z"
        );
        assert_eq!(format_timestamp("1700000000"), "2023-11-14T22:13:20.000Z");
        assert_eq!(format_timestamp("1700000000.5"), "2023-11-14T22:13:20.500Z");
    }

    #[test]
    fn test_format_timestamp_unknown() {
        assert_eq!(format_timestamp(""), "unknown");
        assert_eq!(format_timestamp("yesterday"), "unknown");
        assert_eq!(format_timestamp("1700000000.abc"), "unknown");
    }

    #[test]
    fn test_phrases() {
        assert_eq!(freeze_phrase(true), "Frozen by default");
        assert_eq!(freeze_phrase(false), "Not frozen by default");
        assert_eq!(supply_type_phrase("INFINITE"), "Infinite");
        assert_eq!(supply_type_phrase("FINITE"), "Finite");
    }
}
