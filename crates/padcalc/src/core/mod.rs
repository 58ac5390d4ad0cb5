//! Calculator core: operators, number formatting, session state and the
//! state machine that ties them together.
//!
//! Evaluation faults (division by zero, negative root) are not errors here.
//! They render into the display and the session keeps going. [`CalcError`]
//! only covers input that cannot be turned into a key or a configuration.

mod calculator;
pub mod format;
mod operations;
mod state;

pub use calculator::{Calculator, Evaluation};
pub use format::{format_number, parse_operand, NumberStyle};
pub use operations::{EvalFault, Operator};
pub use state::{CalculatorState, Phase};

use thiserror::Error;

/// Result type for calculator construction and key parsing
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Button label that matches no key
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// Character that is neither a decimal digit nor '.'
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
    /// Configuration could not be read or written
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(label: impl Into<String>) -> Self {
        Self::UnknownKey(label.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
