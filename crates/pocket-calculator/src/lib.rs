//! Pocket Calculator
//!
//! A four-function calculator driven one button at a time. A [`Session`]
//! record holds the display and the pending operation; the [`Calculator`]
//! state machine updates it per [`InputEvent`] and renders the display to a
//! [`DisplaySurface`]. Evaluator failures show an error marker and go to a
//! [`DiagnosticSink`].
//!
//! The same machine runs natively, on the mock page used for testing, and
//! (with the `wasm` feature) in the browser.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Calculator::new(BufferDisplay::new());
//! calc.press_digit(5);
//! calc.press_operator(Operator::Multiply);
//! calc.press_digit(8);
//! calc.press_equals();
//! assert_eq!(calc.surface().text(), "40");
//!
//! // Division by zero shows the error marker
//! calc.press_operator(Operator::Divide);
//! calc.press_digit(0);
//! calc.press_equals();
//! assert_eq!(calc.display_text(), "Error");
//! assert_eq!(calc.phase(), Phase::Error);
//! ```
//!
//! [`Session`]: core::Session
//! [`Calculator`]: controller::Calculator
//! [`InputEvent`]: input::InputEvent
//! [`DisplaySurface`]: surface::DisplaySurface
//! [`DiagnosticSink`]: surface::DiagnosticSink

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod input;
pub mod surface;

/// Web front end - mock page always available for testing, browser
/// bindings behind the `wasm` feature
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::controller::Calculator;
    pub use crate::core::{operate, CalcError, CalcResult, Operator, Phase, Session};
    pub use crate::driver::{CalculatorDriver, DirectDriver};
    pub use crate::input::InputEvent;
    pub use crate::surface::{
        BufferDisplay, DiagnosticSink, DisplaySurface, EvaluationSite, RecordingSink, TracingSink,
    };

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmKeypad};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new(BufferDisplay::new());
        calc.handle_all([
            InputEvent::Digit(2),
            InputEvent::Operator(Operator::Add),
            InputEvent::Digit(3),
            InputEvent::Equals,
        ]);
        assert_eq!(calc.display_text(), "5");
    }

    #[test]
    fn test_evaluator_direct() {
        assert_eq!(operate("*", 6.0, 7.0).unwrap(), 42.0);
        assert_eq!(Operator::Subtract.apply(10.0, 3.0).unwrap(), 7.0);
    }

    #[test]
    fn test_error_handling() {
        assert_eq!(operate("/", 1.0, 0.0), Err(CalcError::DivisionByZero));
        assert!(matches!(
            operate("%", 1.0, 2.0),
            Err(CalcError::InvalidOperator(_))
        ));
    }

    #[test]
    fn test_all_operations() {
        let mut driver = DirectDriver::new();
        for (script, expected) in [
            ("1 0 + 5 =", "15"),
            ("1 0 - 3 =", "7"),
            ("6 × 7 =", "42"),
            ("2 0 ÷ 4 =", "5"),
            ("7 ÷ 2 =", "3.5"),
        ] {
            driver.clear();
            assert!(driver.press_all(script));
            assert_eq!(driver.display(), expected, "{script}");
        }
    }

    #[test]
    fn test_session_json() {
        let mut calc = Calculator::new(BufferDisplay::new());
        calc.press_digit(9);
        calc.press_operator(Operator::Divide);
        let json = calc.session().to_json().unwrap();
        assert!(json.contains(r#""pending_operator":"/""#));
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, calc.session());
    }

    #[test]
    fn test_config_json_drives_calculator() {
        let config = CalculatorConfig::from_json(r#"{"error_marker": "E"}"#).unwrap();
        let mut driver = DirectDriver::with_config(config);
        driver.press_all("1 ÷ 0 =");
        assert_eq!(driver.display(), "E");
    }
}
