//! Operator kinds and the arithmetic dispatch

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Operators available on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Square root of the second operand (sqrt)
    Sqrt,
}

/// A fault produced by applying an operator. Rendered into the display
/// verbatim; never propagated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalFault {
    /// Division with a zero second operand
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Square root of a negative (or NaN) operand
    #[error("Invalid input")]
    NegativeRoot,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Sqrt,
    ];

    /// Returns the button label for this operator
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Sqrt => "sqrt",
        }
    }

    /// Looks up an operator by its exact button label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns true if the operator only reads the second operand
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Sqrt)
    }

    /// Applies the operator to the captured first operand and the entered
    /// second operand.
    pub fn apply(self, first: f64, second: f64) -> Result<f64, EvalFault> {
        match self {
            Self::Add => Ok(first + second),
            Self::Subtract => Ok(first - second),
            Self::Multiply => Ok(first * second),
            Self::Divide => {
                if second == 0.0 {
                    Err(EvalFault::DivisionByZero)
                } else {
                    Ok(first / second)
                }
            }
            Self::Sqrt => {
                if second >= 0.0 {
                    Ok(second.sqrt())
                } else {
                    Err(EvalFault::NegativeRoot)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
