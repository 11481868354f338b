//! Translation of raw key names into calculator input.
//!
//! Front ends deliver whatever their toolkit calls a key: keypad button
//! labels (`×`, `AC`), physical keys (`*`, `Enter`, `Escape`) or typed
//! characters. This module maps them onto engine tokens without touching any
//! calculator state, so it can be tested on its own.

use crate::calculator::{Operator, Token};
use crate::error::{CalcError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single ASCII digit key.
    static ref DIGIT_KEY: Regex = Regex::new(r"^[0-9]$").unwrap();

    /// A run of digits and dots typed in one go, e.g. `12.5`.
    static ref NUMBER_RUN: Regex = Regex::new(r"^[0-9.]{2,}$").unwrap();
}

/// What a key press asks the calculator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a token to the engine.
    Press(Token),
    /// Delete the last character of the display.
    Backspace,
}

/// Translate one key name.
///
/// Returns `None` for keys the calculator doesn't react to.
pub fn translate_key(key: &str) -> Option<KeyAction> {
    if DIGIT_KEY.is_match(key) {
        return key
            .bytes()
            .next()
            .and_then(|b| Token::digit(b - b'0'))
            .map(KeyAction::Press);
    }

    let token = match key {
        "." => Token::Decimal,
        "+" => Token::Operator(Operator::Add),
        "-" | "−" => Token::Operator(Operator::Subtract),
        "*" | "×" | "x" | "X" => Token::Operator(Operator::Multiply),
        "/" | "÷" => Token::Operator(Operator::Divide),
        "=" => Token::Equals,
        "+/-" | "±" => Token::ToggleSign,
        "%" => Token::Percent,
        _ => return translate_named_key(key),
    };

    Some(KeyAction::Press(token))
}

/// Named keys, matched case-insensitively.
fn translate_named_key(key: &str) -> Option<KeyAction> {
    let action = match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyAction::Press(Token::Equals),
        "escape" | "esc" | "ac" | "clear" => KeyAction::Press(Token::Clear),
        "backspace" | "delete" => KeyAction::Backspace,
        _ => return None,
    };
    Some(action)
}

/// Split a line of whitespace-separated key names into actions.
///
/// Runs of digits such as `120` or `3.5` expand into one press per
/// character. The first key that doesn't translate aborts the whole line.
pub fn tokenize_line(line: &str) -> Result<Vec<KeyAction>> {
    let mut actions = Vec::new();

    for key in line.split_whitespace() {
        if NUMBER_RUN.is_match(key) {
            for c in key.chars() {
                let mut buf = [0u8; 4];
                let single = c.encode_utf8(&mut buf);
                actions.extend(translate_key(single));
            }
            continue;
        }

        let action = translate_key(key).ok_or_else(|| CalcError::UnknownKey(key.to_string()))?;
        actions.push(action);
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(token: Token) -> Option<KeyAction> {
        Some(KeyAction::Press(token))
    }

    #[test]
    fn test_digits() {
        assert_eq!(translate_key("0"), press(Token::Digit(0)));
        assert_eq!(translate_key("7"), press(Token::Digit(7)));
        assert_eq!(translate_key("٣"), None);
    }

    #[test]
    fn test_keyboard_operators() {
        assert_eq!(translate_key("*"), press(Token::Operator(Operator::Multiply)));
        assert_eq!(translate_key("/"), press(Token::Operator(Operator::Divide)));
        assert_eq!(translate_key("-"), press(Token::Operator(Operator::Subtract)));
        assert_eq!(translate_key("+"), press(Token::Operator(Operator::Add)));
    }

    #[test]
    fn test_keypad_labels() {
        assert_eq!(translate_key("×"), press(Token::Operator(Operator::Multiply)));
        assert_eq!(translate_key("÷"), press(Token::Operator(Operator::Divide)));
        assert_eq!(translate_key("AC"), press(Token::Clear));
        assert_eq!(translate_key("+/-"), press(Token::ToggleSign));
        assert_eq!(translate_key("%"), press(Token::Percent));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(translate_key("Enter"), press(Token::Equals));
        assert_eq!(translate_key("="), press(Token::Equals));
        assert_eq!(translate_key("Escape"), press(Token::Clear));
        assert_eq!(translate_key("esc"), press(Token::Clear));
        assert_eq!(translate_key("Backspace"), Some(KeyAction::Backspace));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(translate_key("Shift"), None);
        assert_eq!(translate_key("a"), None);
        assert_eq!(translate_key(""), None);
        assert_eq!(translate_key("12"), None);
    }

    #[test]
    fn test_tokenize_line() {
        let actions = tokenize_line("12 + 3.5 Enter").unwrap();
        assert_eq!(
            actions,
            vec![
                KeyAction::Press(Token::Digit(1)),
                KeyAction::Press(Token::Digit(2)),
                KeyAction::Press(Token::Operator(Operator::Add)),
                KeyAction::Press(Token::Digit(3)),
                KeyAction::Press(Token::Decimal),
                KeyAction::Press(Token::Digit(5)),
                KeyAction::Press(Token::Equals),
            ]
        );
    }

    #[test]
    fn test_tokenize_line_unknown_key() {
        let err = tokenize_line("1 + banana").unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey(ref k) if k == "banana"));
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize_line("   ").unwrap().is_empty());
    }
}
