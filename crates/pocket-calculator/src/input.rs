//! Input events and their sources
//!
//! Buttons and keys both resolve to an [`InputEvent`]; the controller only
//! ever sees events, never the device that produced them.

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// One discrete press on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset the session
    Clear,
    /// Drop the last typed character
    Delete,
}

/// Label of the clear button
pub const CLEAR_LABEL: &str = "AC";
/// Label of the delete button
pub const DELETE_LABEL: &str = "DEL";

impl InputEvent {
    /// Maps a button's visible label to an event
    ///
    /// Labels are trimmed first. `×` and `÷` are the keypad glyphs for
    /// multiply and divide; the ASCII `*` and `/` are accepted too.
    #[must_use]
    pub fn from_button_label(label: &str) -> Option<Self> {
        match label.trim() {
            "." => Some(Self::Decimal),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "×" | "*" => Some(Self::Operator(Operator::Multiply)),
            "÷" | "/" => Some(Self::Operator(Operator::Divide)),
            "=" => Some(Self::Equals),
            CLEAR_LABEL => Some(Self::Clear),
            DELETE_LABEL => Some(Self::Delete),
            other => Self::digit_from_str(other),
        }
    }

    /// Maps a keyboard `key` value (as in `KeyboardEvent.key`) to an event
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "Backspace" | "Delete" => Some(Self::Delete),
            other => Self::digit_from_str(other),
        }
    }

    /// Label drawn on the matching keypad button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.button_label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => CLEAR_LABEL.to_string(),
            Self::Delete => DELETE_LABEL.to_string(),
        }
    }

    fn digit_from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            _ => None,
        }
    }
}
