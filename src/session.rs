//! A running calculator session.
//!
//! The session is the mutable cell a front end holds on to: it owns the
//! current state, swaps in the engine's result after every key, and renders
//! the readout.

use crate::calculator::{CalculatorState, apply_with, backspace};
use crate::config::Config;
use crate::error::{CalcError, Result};
use crate::input::{KeyAction, tokenize_line, translate_key};
use crate::readout::Readout;

pub struct Session {
    state: CalculatorState,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply one key action and return the new state.
    pub fn press(&mut self, action: KeyAction) -> &CalculatorState {
        let next = match action {
            KeyAction::Press(token) => apply_with(&self.state, token, &self.config.engine),
            KeyAction::Backspace => backspace(&self.state),
        };

        if next == self.state {
            tracing::trace!(?action, "Key press left state unchanged");
        } else {
            tracing::debug!(
                ?action,
                display = %next.display,
                pending = ?next.pending_operator,
                "Calculator state updated"
            );
        }

        if next.is_error() && !self.state.is_error() {
            tracing::warn!(
                previous = ?self.state.previous_operand,
                operand = %self.state.display,
                "Arithmetic error (division by zero or overflow), calculator locked until cleared"
            );
        }

        self.state = next;
        &self.state
    }

    /// Translate a raw key name and apply it.
    ///
    /// Keys the calculator doesn't know are rejected without changing state.
    pub fn press_key(&mut self, key: &str) -> Result<&CalculatorState> {
        let action = translate_key(key).ok_or_else(|| CalcError::UnknownKey(key.to_string()))?;
        Ok(self.press(action))
    }

    /// Apply every key on a line, in order.
    ///
    /// The line is validated first, so an unknown key leaves the state as it
    /// was.
    pub fn press_line(&mut self, line: &str) -> Result<&CalculatorState> {
        for action in tokenize_line(line)? {
            self.press(action);
        }
        Ok(&self.state)
    }

    /// Render the current state for the screen.
    pub fn readout(&self) -> Readout {
        Readout::from_state(&self.state, &self.config.display)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
