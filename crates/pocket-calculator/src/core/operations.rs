//! Four-function arithmetic and the operator dispatcher

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operators the calculator can hold as pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// ASCII symbol understood by [`operate`]
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Label shown on the keypad button
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(CalcError::InvalidOperator(other.to_string())),
        }
    }
}

/// a + b
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// a - b
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// a * b
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// a / b, rejecting a zero divisor
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Applies the operator named by `symbol` to `a` and `b`
///
/// # Errors
///
/// [`CalcError::InvalidOperator`] for symbols outside `+ - * /`,
/// [`CalcError::DivisionByZero`] for `/` with a zero divisor.
pub fn operate(symbol: &str, a: f64, b: f64) -> CalcResult<f64> {
    symbol.parse::<Operator>()?.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operator enum tests ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Divide.symbol(), "/");
    }

    #[test]
    fn test_operator_button_labels() {
        assert_eq!(Operator::Multiply.button_label(), "×");
        assert_eq!(Operator::Divide.button_label(), "÷");
        assert_eq!(Operator::Add.button_label(), "+");
    }

    #[test]
    fn test_operator_parse_round_trip() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn test_operator_parse_rejects_button_glyphs() {
        assert_eq!(
            "×".parse::<Operator>(),
            Err(CalcError::InvalidOperator("×".into()))
        );
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Divide.to_string(), "/");
    }

    #[test]
    fn test_operator_serde_uses_symbols() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"*\"");
        let back: Operator = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(back, Operator::Subtract);
    }

    // --- Arithmetic ---

    #[test]
    fn test_add_subtract_multiply() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(3.0, 5.0), -2.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
    }

    #[test]
    fn test_add_decimals_uses_float_semantics() {
        assert_eq!(add(0.1, 0.2), 0.30000000000000004);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(6.0, 2.0), Ok(3.0));
        assert_eq!(divide(1.0, 3.0), Ok(1.0 / 3.0));
        assert_eq!(divide(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(10.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_no_overflow_check() {
        assert_eq!(multiply(f64::MAX, 10.0), f64::INFINITY);
    }

    // --- operate() ---

    #[test]
    fn test_operate_dispatch() {
        assert_eq!(operate("+", 5.0, 3.0), Ok(8.0));
        assert_eq!(operate("-", 5.0, 3.0), Ok(2.0));
        assert_eq!(operate("*", 5.0, 3.0), Ok(15.0));
        assert_eq!(operate("/", 6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_operate_invalid_operator() {
        assert_eq!(
            operate("%", 1.0, 2.0),
            Err(CalcError::InvalidOperator("%".into()))
        );
        assert_eq!(
            operate("", 1.0, 2.0),
            Err(CalcError::InvalidOperator(String::new()))
        );
    }

    #[test]
    fn test_operate_divide_by_zero() {
        assert_eq!(operate("/", 5.0, 0.0), Err(CalcError::DivisionByZero));
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_operate_matches_direct_arithmetic(a in -1e12f64..1e12f64, b in -1e12f64..1e12f64) {
            prop_assert_eq!(operate("+", a, b), Ok(a + b));
            prop_assert_eq!(operate("-", a, b), Ok(a - b));
            prop_assert_eq!(operate("*", a, b), Ok(a * b));
        }

        #[test]
        fn prop_divide_nonzero_matches_direct(a in -1e12f64..1e12f64, b in -1e12f64..1e12f64) {
            prop_assume!(b != 0.0);
            prop_assert_eq!(operate("/", a, b), Ok(a / b));
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in proptest::num::f64::ANY) {
            prop_assert_eq!(operate("/", a, 0.0), Err(CalcError::DivisionByZero));
        }

        #[test]
        fn prop_unknown_symbol_is_invalid(symbol in "[^+*/-]{0,3}") {
            prop_assert_eq!(
                operate(&symbol, 1.0, 2.0),
                Err(CalcError::InvalidOperator(symbol.clone()))
            );
        }
    }
}
