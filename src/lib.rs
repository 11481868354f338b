//! A pocket-calculator arithmetic engine.
//!
//! The [`calculator`] module holds the key-press state machine. Everything
//! else wraps it for a front end: [`input`] translates raw key names,
//! [`session`] owns the state between presses, and [`readout`] renders it.

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod readout;
pub mod session;

pub use calculator::{CalculatorState, Operator, Token};
pub use config::Config;
pub use error::CalcError;
pub use input::KeyAction;
pub use readout::Readout;
pub use session::Session;
