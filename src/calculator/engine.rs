//! The key-press state machine.
//!
//! Every transition is a pure function from the previous state and one token
//! to a new state. The caller owns the current state and replaces it with the
//! returned one.

use super::evaluation::{evaluate_with, format_number, parse_number};
use super::state::CalculatorState;
use super::token::{Operator, Token};
use crate::config::EngineConfig;

/// Apply one token using the default engine settings.
pub fn apply(state: &CalculatorState, token: Token) -> CalculatorState {
    apply_with(state, token, &EngineConfig::default())
}

/// Apply one token.
///
/// While the display shows the error sentinel, every token except
/// [`Token::Clear`] leaves the state untouched.
pub fn apply_with(state: &CalculatorState, token: Token, config: &EngineConfig) -> CalculatorState {
    if state.is_error() && token != Token::Clear {
        return state.clone();
    }

    match token {
        Token::Digit(d) => input_digit(state, d),
        Token::Decimal => input_decimal(state),
        Token::Operator(op) => input_operator(state, op, config),
        Token::Equals => input_equals(state, config),
        Token::Clear => CalculatorState::new(),
        Token::ToggleSign => map_display(state, |value| -value),
        Token::Percent => map_display(state, |value| value / 100.0),
    }
}

/// Remove the last character of the display.
///
/// This is an editing convenience of the keyboard front end rather than an
/// arithmetic token. A single remaining character, or a leftover that no
/// longer reads as a number (such as a lone `-`), resets the display to `"0"`.
/// The error sentinel is left alone; only `AC` clears it.
pub fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.is_error() {
        return state.clone();
    }

    let mut chars = state.display.chars();
    chars.next_back();
    let trimmed = chars.as_str();

    let display = if trimmed.is_empty() || parse_number(trimmed).is_none() {
        "0".to_string()
    } else {
        trimmed.to_string()
    };

    CalculatorState {
        display,
        ..state.clone()
    }
}

impl CalculatorState {
    /// Apply one token, returning the next state.
    pub fn apply(&self, token: Token) -> Self {
        apply(self, token)
    }

    /// Apply a sequence of tokens in order.
    pub fn apply_all<I>(&self, tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        tokens
            .into_iter()
            .fold(self.clone(), |state, token| apply(&state, token))
    }
}

fn input_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    // Tokens can be deserialized, so an out-of-range digit is possible
    let Some(digit) = char::from_digit(u32::from(digit), 10) else {
        return state.clone();
    };

    let display = if state.awaiting_fresh_entry || state.display == "0" {
        digit.to_string()
    } else {
        format!("{}{}", state.display, digit)
    };

    CalculatorState {
        display,
        awaiting_fresh_entry: false,
        ..state.clone()
    }
}

fn input_decimal(state: &CalculatorState) -> CalculatorState {
    if state.awaiting_fresh_entry {
        return CalculatorState {
            display: "0.".to_string(),
            awaiting_fresh_entry: false,
            ..state.clone()
        };
    }

    if state.display.contains('.') {
        return state.clone();
    }

    CalculatorState {
        display: format!("{}.", state.display),
        ..state.clone()
    }
}

fn input_operator(state: &CalculatorState, op: Operator, config: &EngineConfig) -> CalculatorState {
    // Operator pressed again before any new digits: last one wins
    if state.pending_operator.is_some() && state.awaiting_fresh_entry {
        return CalculatorState {
            pending_operator: Some(op),
            ..state.clone()
        };
    }

    let (display, previous) = match (&state.previous_operand, state.pending_operator) {
        (Some(previous), Some(pending)) => {
            let result = evaluate_with(previous, &state.display, pending, config);
            (result.clone(), result)
        }
        _ => (state.display.clone(), state.display.clone()),
    };

    CalculatorState {
        display,
        previous_operand: Some(previous),
        pending_operator: Some(op),
        awaiting_fresh_entry: true,
    }
}

fn input_equals(state: &CalculatorState, config: &EngineConfig) -> CalculatorState {
    let (Some(previous), Some(pending)) = (&state.previous_operand, state.pending_operator) else {
        return state.clone();
    };

    CalculatorState {
        display: evaluate_with(previous, &state.display, pending, config),
        previous_operand: None,
        pending_operator: None,
        awaiting_fresh_entry: true,
    }
}

fn map_display(state: &CalculatorState, f: impl Fn(f64) -> f64) -> CalculatorState {
    let Some(value) = parse_number(&state.display) else {
        return state.clone();
    };

    CalculatorState {
        display: format_number(f(value)),
        ..state.clone()
    }
}
