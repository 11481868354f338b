//! Display formatting for the calculator readout.
//!
//! Turns the raw display string into what the screen shows: thousands
//! separators for values that fit, exponential notation for values that
//! don't, and the error sentinel for anything that isn't a number.

use super::evaluation::{ERROR_SENTINEL, parse_number};
use crate::config::DisplayConfig;

/// Format a display value with the default screen settings.
pub fn format_display(display: &str) -> String {
    format_display_with(display, &DisplayConfig::default())
}

/// Format a display value for the screen.
///
/// - Values that don't parse render as the error sentinel.
/// - Raw strings longer than `max_length` characters switch to exponential
///   notation with `exponent_digits` fractional digits, e.g. `1.2346e+9`.
/// - Everything else gets its integer part grouped in threes; the fraction,
///   including a trailing `.` typed mid-entry, is kept as-is.
pub fn format_display_with(display: &str, config: &DisplayConfig) -> String {
    let Some(value) = parse_number(display) else {
        return ERROR_SENTINEL.to_string();
    };

    if display.chars().count() > config.max_length {
        return format_exponential(value, config.exponent_digits);
    }

    match display.split_once('.') {
        Some((int_part, frac_part)) => format!(
            "{}.{}",
            group_integer(int_part, &config.group_separator),
            frac_part
        ),
        None => group_integer(display, &config.group_separator),
    }
}

/// Exponential notation with a fixed number of fractional digits and an
/// explicit exponent sign.
///
/// Ties round away from zero (`1234450000` shows as `1.2345e+9`), so the
/// mantissa is rounded by hand from the exact decimal expansion instead of
/// relying on `{:e}`, which rounds ties to even.
fn format_exponential(value: f64, digits: usize) -> String {
    // A finite f64 never has more than 767 significant decimal digits
    let exact = format!("{:.767e}", value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return exact;
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return exact;
    };

    let all_digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept: Vec<u8> = all_digits.iter().copied().take(digits + 1).collect();
    kept.resize(digits + 1, b'0');

    let round_up = all_digits.get(digits + 1).is_some_and(|&d| d >= b'5');
    if round_up && increment_digits(&mut kept) {
        // Carried out of the leading digit: 9.99995 becomes 1.0000e+1
        kept.insert(0, b'1');
        kept.truncate(digits + 1);
        exponent += 1;
    }

    let mut result = String::new();
    if value.is_sign_negative() && value != 0.0 {
        result.push('-');
    }
    result.push(char::from(kept[0]));
    if digits > 0 {
        result.push('.');
        result.extend(kept[1..].iter().map(|&d| char::from(d)));
    }

    if exponent >= 0 {
        format!("{}e+{}", result, exponent)
    } else {
        format!("{}e{}", result, exponent)
    }
}

/// Add one to a run of ASCII digits. Returns `true` when the carry runs off
/// the front.
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// Insert separators between groups of three digits.
///
/// Only a plain run of digits (with an optional leading minus) is grouped;
/// anything else, like an exponent form, passes through untouched.
fn group_integer(int_part: &str, separator: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return int_part.to_string();
    }

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push_str(&separator.chars().rev().collect::<String>());
        }
        result.push(c);
    }

    let grouped: String = result.chars().rev().collect();
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_display("1234567"), "1,234,567");
        assert_eq!(format_display("1000"), "1,000");
        assert_eq!(format_display("999"), "999");
        assert_eq!(format_display("-123456"), "-123,456");
        assert_eq!(format_display("0"), "0");
    }

    #[test]
    fn test_fraction_preserved() {
        assert_eq!(format_display("1234.5678"), "1,234.5678");
        assert_eq!(format_display("5."), "5.");
        assert_eq!(format_display("0.09"), "0.09");
        assert_eq!(format_display("-0.5"), "-0.5");
    }

    #[test]
    fn test_overflow_switches_to_exponential() {
        assert_eq!(format_display("1234567890"), "1.2346e+9");
        assert_eq!(format_display("0.33333333"), "3.3333e-1");
        assert_eq!(format_display("-123456789"), "-1.2346e+8");

        assert_eq!(format_display("0.00000000"), "0.0000e+0");

        let rendered = format_display("98765432101");
        let (mantissa, _) = rendered.split_once('e').unwrap();
        let (_, fraction) = mantissa.split_once('.').unwrap();
        assert_eq!(fraction.len(), 4);
    }

    #[test]
    fn test_exponential_ties_round_away_from_zero() {
        assert_eq!(format_display("1234450000"), "1.2345e+9");
        assert_eq!(format_display("12344.5000"), "1.2345e+4");
        assert_eq!(format_display("1000050000"), "1.0001e+9");
        assert_eq!(format_display("-1234450000"), "-1.2345e+9");
    }

    #[test]
    fn test_exponential_rounding_carries_into_exponent() {
        assert_eq!(format_display("9999950000"), "1.0000e+10");
        assert_eq!(format_display("99999.5000"), "1.0000e+5");
    }

    #[test]
    fn test_nine_characters_still_grouped() {
        assert_eq!(format_display("123456789"), "123,456,789");
        assert_eq!(format_display("1234567.8"), "1,234,567.8");
    }

    #[test]
    fn test_error_sentinel() {
        assert_eq!(format_display("Error"), "Error");
        assert_eq!(format_display("abc"), "Error");
        assert_eq!(format_display(""), "Error");
    }

    #[test]
    fn test_exponent_form_not_grouped() {
        assert_eq!(format_display("1e-7"), "1e-7");
    }

    #[test]
    fn test_custom_display_config() {
        let config = DisplayConfig {
            max_length: 12,
            exponent_digits: 2,
            group_separator: " ".to_string(),
        };
        assert_eq!(format_display_with("1234567890", &config), "1 234 567 890");
        assert_eq!(format_display_with("1234567890123", &config), "1.23e+12");
    }
}
