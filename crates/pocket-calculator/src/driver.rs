//! Unified calculator driver
//!
//! Interaction scenarios are written once against [`CalculatorDriver`] and
//! run on every front end: the in-memory [`DirectDriver`] and the DOM-backed
//! [`WasmDriver`](crate::wasm::WasmDriver).
//!
//! ```rust
//! use pocket_calculator::driver::{verify_chaining, CalculatorDriver, DirectDriver};
//!
//! let mut driver = DirectDriver::new();
//! driver.press_all("4 2 × 2 =");
//! assert_eq!(driver.display(), "84");
//!
//! verify_chaining(&mut driver);
//! ```

use crate::config::CalculatorConfig;
use crate::controller::Calculator;
use crate::core::{CalcError, Phase, Session};
use crate::input::{InputEvent, CLEAR_LABEL};
use crate::surface::{BufferDisplay, RecordingSink};

/// Abstract driver for button-level interaction
pub trait CalculatorDriver {
    /// Presses the button labelled `label`; returns false when no button
    /// has that label
    fn press(&mut self, label: &str) -> bool;

    /// Text currently shown on the display
    fn display(&self) -> String;

    /// Snapshot of the session record
    fn session(&self) -> Session;

    /// Errors reported so far, oldest first
    fn diagnostics(&self) -> Vec<CalcError>;

    /// Configuration in use
    fn config(&self) -> &CalculatorConfig;

    /// Presses whitespace-separated labels in order; returns false if any
    /// label was unknown
    fn press_all(&mut self, labels: &str) -> bool {
        labels
            .split_whitespace()
            .fold(true, |ok, label| self.press(label) && ok)
    }

    /// Presses the clear button
    fn clear(&mut self) {
        self.press(CLEAR_LABEL);
    }

    /// Current phase
    fn phase(&self) -> Phase {
        self.session().phase(&self.config().error_marker)
    }
}

/// Driver over a calculator with an in-memory display
#[derive(Debug)]
pub struct DirectDriver {
    calculator: Calculator<BufferDisplay, RecordingSink>,
}

impl Default for DirectDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectDriver {
    /// Creates a driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with `config`
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_parts(config, BufferDisplay::new(), RecordingSink::new()),
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<BufferDisplay, RecordingSink> {
        &self.calculator
    }

    /// Returns a mutable reference to the calculator
    pub fn calculator_mut(&mut self) -> &mut Calculator<BufferDisplay, RecordingSink> {
        &mut self.calculator
    }
}

impl CalculatorDriver for DirectDriver {
    fn press(&mut self, label: &str) -> bool {
        match InputEvent::from_button_label(label) {
            Some(event) => {
                self.calculator.handle(event);
                true
            }
            None => false,
        }
    }

    fn display(&self) -> String {
        self.calculator.surface().text().to_string()
    }

    fn session(&self) -> Session {
        self.calculator.session().clone()
    }

    fn diagnostics(&self) -> Vec<CalcError> {
        self.calculator.sink().errors()
    }

    fn config(&self) -> &CalculatorConfig {
        self.calculator.config()
    }
}

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Digits append; a lone zero is replaced
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.display(), "0");

    driver.press_all("1 2 3");
    assert_eq!(driver.display(), "123");
    driver.clear();
}

/// Leading zeros collapse until a decimal point is typed
pub fn verify_leading_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("0 0 7");
    assert_eq!(driver.display(), "7");
    driver.clear();

    driver.press_all("0 . 0 5");
    assert_eq!(driver.display(), "0.05");
    driver.clear();
}

/// At most one decimal point per operand
pub fn verify_decimal_guard<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(". .");
    assert_eq!(driver.display(), "0.");

    driver.press_all("5 .");
    assert_eq!(driver.display(), "0.5");
    driver.clear();

    driver.press_all("3 + .");
    assert_eq!(driver.display(), "0.");
    driver.clear();
}

/// Operations evaluate left to right as operators are pressed
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("5 + 3 +");
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.phase(), Phase::AwaitingOperand);

    driver.press_all("2 =");
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.phase(), Phase::Fresh);
    driver.clear();

    driver.press_all("2 + 3 × 4 =");
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// A second operator before any digit replaces the first
pub fn verify_operator_substitution<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("9 + × ÷ -");
    let session = driver.session();
    assert_eq!(session.pending_operand, Some(9.0));
    assert_eq!(session.pending_operator, Some(crate::core::Operator::Subtract));

    driver.press_all("4 =");
    assert_eq!(driver.display(), "5");
    driver.clear();
}

/// Dividing by zero shows the error marker and reports the failure
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let reported = driver.diagnostics().len();

    driver.press_all("5 ÷ 0 =");
    assert_eq!(driver.display(), driver.config().error_marker);
    assert_eq!(driver.phase(), Phase::Error);
    assert_eq!(driver.session().pending(), None);

    let diagnostics = driver.diagnostics();
    assert_eq!(diagnostics.len(), reported + 1);
    assert_eq!(diagnostics.last(), Some(&CalcError::DivisionByZero));

    // delete leaves the marker in place
    driver.press("DEL");
    assert_eq!(driver.display(), driver.config().error_marker);
    driver.clear();
}

/// Delete drops the last character, bottoming out at zero
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("4 5 DEL");
    assert_eq!(driver.display(), "4");
    driver.press_all("DEL DEL");
    assert_eq!(driver.display(), "0");

    driver.press_all("1 2 + DEL");
    assert_eq!(driver.display(), "12");
    driver.clear();
}

/// Clear always returns to the initial record
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("7 × 6 + 1");
    driver.clear();
    assert!(driver.session().is_initial());
    assert_eq!(driver.display(), "0");
}

/// Complete suite, runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_leading_zero(driver);
    verify_decimal_guard(driver);
    verify_chaining(driver);
    verify_operator_substitution(driver);
    verify_division_by_zero(driver);
    verify_delete(driver);
    verify_clear(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_driver_new() {
        let driver = DirectDriver::new();
        assert_eq!(driver.display(), "0");
        assert!(driver.session().is_initial());
        assert!(driver.diagnostics().is_empty());
    }

    #[test]
    fn test_direct_driver_default() {
        let driver = DirectDriver::default();
        assert_eq!(driver.phase(), Phase::Fresh);
    }

    #[test]
    fn test_press_unknown_label() {
        let mut driver = DirectDriver::new();
        assert!(!driver.press("%"));
        assert!(!driver.press_all("1 ^ 2"));
        // known labels around the unknown one still landed
        assert_eq!(driver.display(), "12");
    }

    #[test]
    fn test_calculator_access() {
        let mut driver = DirectDriver::new();
        driver.calculator_mut().press_digit(8);
        assert_eq!(driver.calculator().display_text(), "8");
    }

    #[test]
    fn test_custom_marker() {
        let config = CalculatorConfig::builder()
            .error_marker("Nope")
            .build()
            .unwrap();
        let mut driver = DirectDriver::with_config(config);
        driver.press_all("1 ÷ 0 =");
        assert_eq!(driver.display(), "Nope");
    }

    // ===== Unified Scenario Tests =====

    #[test]
    fn test_unified_digit_entry() {
        verify_digit_entry(&mut DirectDriver::new());
    }

    #[test]
    fn test_unified_leading_zero() {
        verify_leading_zero(&mut DirectDriver::new());
    }

    #[test]
    fn test_unified_decimal_guard() {
        verify_decimal_guard(&mut DirectDriver::new());
    }

    #[test]
    fn test_unified_chaining() {
        verify_chaining(&mut DirectDriver::new());
    }

    #[test]
    fn test_unified_operator_substitution() {
        verify_operator_substitution(&mut DirectDriver::new());
    }

    #[test]
    fn test_unified_division_by_zero() {
        verify_division_by_zero(&mut DirectDriver::new());
    }

    #[test]
    fn test_unified_delete() {
        verify_delete(&mut DirectDriver::new());
    }

    #[test]
    fn test_unified_clear() {
        verify_clear(&mut DirectDriver::new());
    }

    #[test]
    fn test_all_scenarios() {
        let config = CalculatorConfig::builder()
            .error_marker("Err")
            .build()
            .unwrap();
        run_all_scenarios(&mut DirectDriver::with_config(config));
    }
}
