//! Presentation-layer driver
//!
//! A presentation layer (terminal, GUI, test harness) talks to the engine
//! through [`CalculatorDriver`]: it presses button labels and reads the
//! display. The `verify_*` scenarios are written once against the trait and
//! run against any driver.

use crate::config::CalcConfig;
use crate::core::{CalcError, CalcResult, Calculator, CalculatorState};
use crate::keypad::Keypad;

/// Interface a presentation layer drives
pub trait CalculatorDriver {
    /// Presses the button with this label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Presses a sequence of labels, stopping at the first unknown one
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press(label))
    }

    /// Text currently shown
    fn display(&self) -> String;

    /// Resets the session
    fn clear(&mut self);

    /// Snapshot of the session state
    fn state(&self) -> CalculatorState;
}

/// Driver that only accepts labels present on its keypad
#[derive(Debug, Clone, Default)]
pub struct KeypadDriver {
    calculator: Calculator,
    keypad: Keypad,
}

impl KeypadDriver {
    /// Creates a driver over the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with custom configuration
    #[must_use]
    pub fn with_config(config: CalcConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            keypad: Keypad::standard(),
        }
    }

    /// Replaces the keypad
    #[must_use]
    pub fn with_keypad(mut self, keypad: Keypad) -> Self {
        self.keypad = keypad;
        self
    }

    /// The keypad being driven
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The underlying calculator
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let button = self
            .keypad
            .find(label)
            .ok_or_else(|| CalcError::unknown_key(label))?;
        self.calculator.press(button.key());
        Ok(())
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }

    fn state(&self) -> CalculatorState {
        self.calculator.state().clone()
    }
}

// ===== Driver scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four binary operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    let cases: [(&[&str], &str); 4] = [
        (&["2", "+", "3", "="][..], "5.0"),
        (&["1", "0", "-", "4", "="][..], "6.0"),
        (&["6", "*", "7", "="][..], "42.0"),
        (&["7", "/", "2", "="][..], "3.5"),
    ];
    for (labels, expected) in cases {
        driver.clear();
        driver.press_all(labels)?;
        assert_eq!(driver.display(), expected, "{labels:?}");
    }
    driver.clear();
    Ok(())
}

/// Verifies the two fault messages and that the session survives them
pub fn verify_error_messages<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_all(&["5", "/", "0", "="])?;
    assert_eq!(driver.display(), "Cannot divide by zero");

    driver.press_all(&["sqrt", "9", "="])?;
    assert_eq!(driver.display(), "3.0");

    driver.press_all(&["8", "+", "1", "="])?;
    assert_eq!(driver.display(), "9.0");
    driver.clear();
    Ok(())
}

/// Verifies that a digit after `=` replaces the result
pub fn verify_result_overwrite<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_all(&["4", "*", "4", "="])?;
    assert_eq!(driver.display(), "16.0");
    driver.press("5")?;
    assert_eq!(driver.display(), "5");
    driver.clear();
    Ok(())
}

/// Verifies chaining a new operator onto a result
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_all(&["2", "+", "3", "="])?;
    assert_eq!(driver.display(), "5.0");
    driver.press_all(&["*", "4", "="])?;
    assert_eq!(driver.display(), "20.0");
    driver.clear();
    Ok(())
}

/// Verifies clear and that evaluating with nothing pending shows nothing
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_all(&["9", "-"])?;
    driver.clear();
    let once = driver.state();
    driver.clear();
    assert_eq!(driver.state(), once);
    assert_eq!(once, CalculatorState::new());

    driver.press("=")?;
    assert_eq!(driver.display(), "");
    driver.clear();
    Ok(())
}
