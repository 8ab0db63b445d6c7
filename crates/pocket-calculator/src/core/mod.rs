//! Core calculator: evaluator, session record and number text handling
//!
//! Nothing in here knows about buttons, keys or the DOM.

pub mod number;
mod operations;
pub mod session;

pub use operations::{add, divide, multiply, operate, subtract, Operator};
pub use session::{Phase, Session};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluator failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Divisor was zero (either sign)
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
    /// Operator symbol outside `+ - * /`
    #[error("Invalid operator: {0:?}")]
    InvalidOperator(String),
}

impl CalcError {
    /// Short machine-friendly name, used as a structured log field
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::InvalidOperator(_) => "invalid_operator",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero is not allowed.");
    }

    #[test]
    fn test_calc_error_display_invalid_operator() {
        let err = CalcError::InvalidOperator("%".into());
        assert_eq!(format!("{err}"), "Invalid operator: \"%\"");
    }

    #[test]
    fn test_calc_error_kind() {
        assert_eq!(CalcError::DivisionByZero.kind(), "division_by_zero");
        assert_eq!(
            CalcError::InvalidOperator("x".into()).kind(),
            "invalid_operator"
        );
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
