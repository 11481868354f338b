//! The calculator's state tuple.

use super::evaluation::ERROR_SENTINEL;
use super::token::Operator;
use serde::{Deserialize, Serialize};

/// Everything the calculator remembers between key presses.
///
/// `previous_operand` and `pending_operator` are set and cleared together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The value on screen: a decimal numeral, a value mid-entry such as
    /// `"3."`, or the `"Error"` sentinel.
    pub display: String,
    /// Left operand captured when an operator was pressed.
    pub previous_operand: Option<String>,
    /// Operator waiting for its right operand.
    pub pending_operator: Option<Operator>,
    /// The next digit starts a new number instead of extending `display`.
    pub awaiting_fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
        }
    }
}

impl CalculatorState {
    /// The state at session start, also reached by `AC`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the calculator is locked on the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    /// Whether a binary operation is waiting for its right operand.
    pub fn has_pending_operation(&self) -> bool {
        self.pending_operator.is_some() && self.previous_operand.is_some()
    }
}
