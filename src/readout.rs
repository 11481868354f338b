//! Readout representing what the calculator screen shows.

use crate::calculator::{CalculatorState, Operator, format_display_with};
use crate::config::DisplayConfig;
use serde::Serialize;

/// The rendered view of a calculator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Readout {
    /// The display formatted for the screen (separators, exponent form).
    pub display: String,
    /// The raw display value, as the engine holds it.
    pub raw: String,
    /// Whether the calculator is locked on the error sentinel.
    pub is_error: bool,
    /// Operator key to highlight while it waits for its right operand.
    pub active_operator: Option<Operator>,
}

impl Readout {
    /// Render a state with the given display settings.
    pub fn from_state(state: &CalculatorState, config: &DisplayConfig) -> Self {
        Self {
            display: format_display_with(&state.display, config),
            raw: state.display.clone(),
            is_error: state.is_error(),
            active_operator: state.pending_operator,
        }
    }

    /// Get the text to copy to clipboard.
    /// Returns the raw value for numbers, or the display text for errors
    /// (so the user can still copy the error message).
    pub fn text_for_clipboard(&self) -> &str {
        if self.is_error {
            &self.display
        } else {
            &self.raw
        }
    }
}
