//! The calculator's session record
//!
//! One record per calculator. It is plain data; the transitions live in
//! [`crate::controller::Calculator`].

use serde::{Deserialize, Serialize};

use crate::core::number::{format_number, parse_operand};
use crate::core::Operator;

/// Display text of a fresh session
pub const INITIAL_DISPLAY: &str = "0";

/// Input/display state of one calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Operand being typed, the last result, or the error marker
    pub display: String,
    /// First operand, captured on the first operator press
    #[serde(with = "operand_text")]
    pub pending_operand: Option<f64>,
    /// Operator waiting for its second operand
    pub pending_operator: Option<Operator>,
    /// Next digit or decimal point starts a new operand
    pub awaiting_fresh_operand: bool,
}

/// Where the session stands, derived from the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No pending operation
    Fresh,
    /// Operator pressed, second operand not started
    AwaitingOperand,
    /// Second operand being typed
    TypingSecondOperand,
    /// Last evaluation failed; the error marker is shown
    Error,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_operand: false,
        }
    }

    /// Returns every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True when the record equals a freshly created one
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    /// Drops the pending operation, keeping the display
    pub fn clear_pending(&mut self) {
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_operand = false;
    }

    /// Both halves of a pending operation, if one is set
    #[must_use]
    pub fn pending(&self) -> Option<(f64, Operator)> {
        self.pending_operand.zip(self.pending_operator)
    }

    /// True when the display shows `error_marker`
    #[must_use]
    pub fn shows_error(&self, error_marker: &str) -> bool {
        self.display == error_marker
    }

    /// Derives the phase; `error_marker` identifies the error display
    #[must_use]
    pub fn phase(&self, error_marker: &str) -> Phase {
        match (self.pending_operator, self.awaiting_fresh_operand) {
            (Some(_), true) => Phase::AwaitingOperand,
            (Some(_), false) => Phase::TypingSecondOperand,
            (None, _) if self.shows_error(error_marker) => Phase::Error,
            (None, _) => Phase::Fresh,
        }
    }

    /// Serializes the record as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Operands as display text, so NaN and the infinities survive JSON
mod operand_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_number, parse_operand};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&format_number(*v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.as_deref().map(parse_operand))
    }
}
