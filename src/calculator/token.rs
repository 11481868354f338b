//! Normalized input tokens accepted by the engine.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "−")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// The button label for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single key press, already normalized by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A digit in `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    /// `AC`
    Clear,
    /// `+/-`
    ToggleSign,
    Percent,
}

impl Token {
    /// Build a digit token, rejecting anything outside `0..=9`.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// The canonical label of this token, as printed on the keypad.
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            // The keypad historically printed an ASCII hyphen for minus
            "−" | "-" => Self::Operator(Operator::Subtract),
            "×" => Self::Operator(Operator::Multiply),
            "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "AC" => Self::Clear,
            "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            _ => {
                let mut chars = s.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => Self::Digit(d as u8),
                    _ => return Err(CalcError::UnknownToken(s.to_string())),
                }
            }
        };
        Ok(token)
    }
}
