//! padcalc - keypad calculator engine
//!
//! The engine behind a single-screen calculator: a display string, a
//! pending operator, a captured first operand and a flag that marks a
//! freshly evaluated result. A presentation layer presses keys and renders
//! [`Calculator::display`](core::Calculator::display).
//!
//! There is no expression parsing and no precedence: each operator applies
//! to exactly the operand captured before it and the one typed after it.
//! Faults never surface as errors. Dividing by zero shows
//! `Cannot divide by zero`, a negative square root shows `Invalid input`,
//! and the next digit starts over.
//!
//! # Example
//!
//! ```rust
//! use padcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["2", "+", "3", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "5.0");
//!
//! // chain from the result
//! for label in ["*", "4", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "20.0");
//!
//! // unknown labels are rejected, never treated as clear
//! assert!(calc.press_label("AC").is_err());
//! assert_eq!(calc.display(), "20.0");
//! ```

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
pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, DecimalPolicy};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, EvalFault, Evaluation, NumberStyle,
        Operator, Phase,
    };
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::keypad::{DigitToken, Key, Keypad, KeypadButton};
}
