//! Pocket-calculator engine.
//!
//! This module provides:
//! - The key-press state machine that turns tokens into display values
//! - Binary arithmetic with display-friendly rounding
//! - Formatting of the display string for the screen

mod engine;
mod evaluation;
mod format;
mod state;
mod token;

pub use engine::{apply, apply_with, backspace};
pub use evaluation::{ERROR_SENTINEL, evaluate, evaluate_with, format_number, parse_number};
pub use format::{format_display, format_display_with};
pub use state::CalculatorState;
pub use token::{Operator, Token};
