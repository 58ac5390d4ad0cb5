//! Session state held between key presses

use super::Operator;
use serde::{Deserialize, Serialize};

/// Which step of a calculation the session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Building an operand, no operator pending
    Entering,
    /// First operand captured, waiting for the second
    OperatorSelected,
    /// Showing the outcome of `=`
    Result,
}

/// The four values a calculator session carries.
///
/// Fields are only mutated through [`Calculator`](super::Calculator); the
/// struct is serializable so a presentation layer can snapshot and restore
/// a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) pending_operator: Option<Operator>,
    #[serde(with = "super::format::operand_serde")]
    pub(crate) first_operand: f64,
    pub(crate) just_evaluated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial session state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display: String::new(),
            pending_operator: None,
            first_operand: 0.0,
            just_evaluated: false,
        }
    }

    /// Replaces the display text
    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    /// Sets a pending operator and its captured first operand
    #[must_use]
    pub fn with_pending(mut self, operator: Operator, first_operand: f64) -> Self {
        self.pending_operator = Some(operator);
        self.first_operand = first_operand;
        self
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Operand captured when the pending operator was chosen
    #[must_use]
    pub const fn first_operand(&self) -> f64 {
        self.first_operand
    }

    /// True right after `=` until the next digit
    #[must_use]
    pub const fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Derives the phase from the stored flags
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.just_evaluated {
            Phase::Result
        } else if self.pending_operator.is_some() {
            Phase::OperatorSelected
        } else {
            Phase::Entering
        }
    }
}
