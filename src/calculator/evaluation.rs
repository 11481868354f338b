//! Binary arithmetic on display strings.
//!
//! Operands travel through the engine as strings, exactly as they appear on
//! the display. This module parses them, applies the operator, hides binary
//! floating point noise by rounding, and renders the result back to the
//! shortest decimal string.

use super::token::Operator;
use crate::config::EngineConfig;

/// The display text shown after a division by zero or an overflow.
pub const ERROR_SENTINEL: &str = "Error";

/// Evaluate `a op b` with the default rounding precision.
pub fn evaluate(a: &str, b: &str, op: Operator) -> String {
    evaluate_with(a, b, op, &EngineConfig::default())
}

/// Evaluate `a op b`, rounding to `config.precision` decimal places.
///
/// Returns [`ERROR_SENTINEL`] on division by exactly zero, on an operand that
/// is not a number, or when the result overflows to infinity.
pub fn evaluate_with(a: &str, b: &str, op: Operator, config: &EngineConfig) -> String {
    let (Some(lhs), Some(rhs)) = (parse_number(a), parse_number(b)) else {
        return ERROR_SENTINEL.to_string();
    };

    let value = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return ERROR_SENTINEL.to_string();
            }
            lhs / rhs
        }
    };

    if !value.is_finite() {
        return ERROR_SENTINEL.to_string();
    }

    format_number(round_to_places(value, config.precision))
}

/// Parse a display string as a finite number.
///
/// Reads the longest leading part that is a number, so mid-entry values such
/// as `"5."` or a dot typed after an exponent form (`"1e-8."`) still parse.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();

    let value = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())?;

    value.is_finite().then_some(value)
}

/// Round half-up to `places` decimal places: `floor(v * 10^p + 0.5) / 10^p`.
///
/// Values too large to scale are returned as they are.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    // Already integral once scaled; adding 0.5 could bump it past 2^52
    let rounded = if scaled.fract() == 0.0 {
        scaled
    } else {
        (scaled + 0.5).floor()
    };
    rounded / factor
}

/// Render a number as its shortest decimal string.
///
/// Very large (>= 1e21) and very small (< 1e-6) magnitudes use exponent form
/// with an explicit sign, e.g. `1e+21` or `1.5e-7`. Negative zero renders as
/// `"0"`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
