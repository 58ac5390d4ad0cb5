//! The calculator state machine
//!
//! ```text
//! Entering --operator--> OperatorSelected --=--> Result --digit--> Entering
//!                               ^                  |
//!                               +----operator------+
//! ```
//! `C` returns any phase to `Entering`.

use super::format::{format_number, parse_operand, NumberStyle};
use super::{CalcResult, CalculatorState, EvalFault, Operator, Phase};
use crate::config::{CalcConfig, DecimalPolicy};
use crate::keypad::{DigitToken, Key};
use tracing::debug;

/// Outcome of pressing `=`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// The pending operator produced a number
    Value(f64),
    /// The pending operator could not be applied
    Fault(EvalFault),
    /// No operator was pending
    Nothing,
}

impl Evaluation {
    /// Text shown on the display for this outcome
    #[must_use]
    pub fn render(&self, style: NumberStyle) -> String {
        match self {
            Self::Value(value) => format_number(*value, style),
            Self::Fault(fault) => fault.to_string(),
            Self::Nothing => String::new(),
        }
    }
}

/// A calculator session: state plus the policies that shape it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    state: CalculatorState,
    config: CalcConfig,
}

impl Calculator {
    /// Creates a session with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with custom configuration
    #[must_use]
    pub fn with_config(config: CalcConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
        }
    }

    /// Resumes a session from a snapshot
    #[must_use]
    pub const fn from_state(state: CalculatorState, config: CalcConfig) -> Self {
        Self { state, config }
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Current session state
    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Consumes the session, returning its state
    #[must_use]
    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Appends a digit or decimal point. Right after `=` the shown result
    /// is discarded first.
    pub fn enter_digit(&mut self, token: DigitToken) {
        let state = &mut self.state;
        if state.just_evaluated {
            state.display.clear();
            state.just_evaluated = false;
        }

        if token.is_decimal_point()
            && self.config.decimal_policy == DecimalPolicy::SingleDot
            && state.display.contains('.')
        {
            debug!(display = %state.display, "second decimal point ignored");
            return;
        }

        state.display.push(token.as_char());
        debug!(display = %state.display, "digit entered");
    }

    /// Captures the display as the first operand and makes `op` pending.
    pub fn select_operator(&mut self, op: Operator) {
        let state = &mut self.state;
        state.first_operand = parse_operand(&state.display);
        state.pending_operator = Some(op);
        state.display.clear();
        state.just_evaluated = false;
        debug!(
            operator = %op,
            unary = op.is_unary(),
            first_operand = state.first_operand,
            "operator selected"
        );
    }

    /// Applies the pending operator to the first operand and the display.
    ///
    /// The pending operator and first operand stay in place, so pressing `=`
    /// again applies the operator to the shown result.
    pub fn evaluate(&mut self) -> Evaluation {
        let state = &mut self.state;
        let second = parse_operand(&state.display);
        let evaluation = match state.pending_operator {
            Some(op) => match op.apply(state.first_operand, second) {
                Ok(value) => Evaluation::Value(value),
                Err(fault) => Evaluation::Fault(fault),
            },
            None => Evaluation::Nothing,
        };

        state.display = evaluation.render(self.config.number_style);
        state.just_evaluated = true;
        debug!(?evaluation, display = %state.display, "evaluated");
        evaluation
    }

    /// Resets the session to its initial state
    pub fn clear(&mut self) {
        self.state = CalculatorState::new();
        debug!("cleared");
    }

    /// Dispatches a key to the matching operation
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(token) => self.enter_digit(token),
            Key::Operator(op) => self.select_operator(op),
            Key::Equals => {
                self.evaluate();
            }
            Key::Clear => self.clear(),
        }
    }

    /// Parses a button label and presses it. Unknown labels leave the state
    /// untouched.
    pub fn press_label(&mut self, label: &str) -> CalcResult<()> {
        let key = Key::from_label(label)?;
        self.press(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;
    use crate::keypad::Keypad;
    use proptest::prelude::*;

    fn press_all(calc: &mut Calculator, labels: &[&str]) {
        for label in labels {
            calc.press_label(label).unwrap();
        }
    }

    fn type_number(calc: &mut Calculator, text: &str) {
        for ch in text.chars() {
            calc.enter_digit(DigitToken::new(ch).unwrap());
        }
    }

    // ===== enter_digit =====

    #[test]
    fn test_digits_append() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", ".", "5"]);
        assert_eq!(calc.display(), "12.5");
        assert_eq!(calc.phase(), Phase::Entering);
    }

    #[test]
    fn test_multiple_decimal_points_kept_by_default() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", ".", "2", ".", "3"]);
        assert_eq!(calc.display(), "1.2.3");

        // unparseable operand reads as zero
        press_all(&mut calc, &["+", "4", "="]);
        assert_eq!(calc.display(), "4.0");
    }

    #[test]
    fn test_single_dot_policy_ignores_second_point() {
        let config = CalcConfig::new().with_decimal_policy(DecimalPolicy::SingleDot);
        let mut calc = Calculator::with_config(config);
        press_all(&mut calc, &["1", ".", "2", ".", "3"]);
        assert_eq!(calc.display(), "1.23");
    }

    #[test]
    fn test_single_dot_policy_after_result() {
        let config = CalcConfig::new().with_decimal_policy(DecimalPolicy::SingleDot);
        let mut calc = Calculator::with_config(config);
        press_all(&mut calc, &["1", "+", "1", "="]);
        assert_eq!(calc.display(), "2.0");
        // the result's '.' is discarded along with the result
        press_all(&mut calc, &[".", "5"]);
        assert_eq!(calc.display(), ".5");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "3", "="]);
        assert_eq!(calc.phase(), Phase::Result);
        press_all(&mut calc, &["5"]);
        assert_eq!(calc.display(), "5");
        assert!(!calc.state().just_evaluated());
        press_all(&mut calc, &["1"]);
        assert_eq!(calc.display(), "51");
    }

    #[test]
    fn test_digit_after_fault_starts_fresh() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["8", "/", "0", "="]);
        assert_eq!(calc.display(), "Cannot divide by zero");
        press_all(&mut calc, &["7"]);
        assert_eq!(calc.display(), "7");
    }

    // ===== select_operator =====

    #[test]
    fn test_select_operator_captures_and_clears() {
        let mut calc = Calculator::new();
        type_number(&mut calc, "42");
        calc.select_operator(Operator::Subtract);
        assert_eq!(calc.display(), "");
        assert_eq!(calc.state().first_operand(), 42.0);
        assert_eq!(calc.state().pending_operator(), Some(Operator::Subtract));
        assert_eq!(calc.phase(), Phase::OperatorSelected);
    }

    #[test]
    fn test_select_operator_on_empty_display_uses_zero() {
        let mut calc = Calculator::new();
        calc.select_operator(Operator::Add);
        assert_eq!(calc.state().first_operand(), 0.0);
        type_number(&mut calc, "7");
        calc.evaluate();
        assert_eq!(calc.display(), "7.0");
    }

    #[test]
    fn test_select_operator_replaces_pending() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["6", "+", "*"]);
        // second operator re-captures the now empty display
        assert_eq!(calc.state().first_operand(), 0.0);
        assert_eq!(calc.state().pending_operator(), Some(Operator::Multiply));
    }

    #[test]
    fn test_select_operator_after_fault_uses_zero() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "/", "0", "=", "+", "3", "="]);
        assert_eq!(calc.display(), "3.0");
    }

    // ===== evaluate =====

    #[test]
    fn test_evaluate_each_operator() {
        let cases = [
            ("+", "5.0"),
            ("-", "1.0"),
            ("*", "6.0"),
            ("/", "1.5"),
        ];
        for (op, expected) in cases {
            let mut calc = Calculator::new();
            press_all(&mut calc, &["3", op, "2", "="]);
            assert_eq!(calc.display(), expected, "3 {op} 2");
        }
    }

    #[test]
    fn test_evaluate_divide_by_zero() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9", "/", "0"]);
        assert_eq!(
            calc.evaluate(),
            Evaluation::Fault(EvalFault::DivisionByZero)
        );
        assert_eq!(calc.display(), "Cannot divide by zero");
        assert_eq!(calc.phase(), Phase::Result);
    }

    #[test]
    fn test_evaluate_divide_by_empty_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9", "/", "="]);
        assert_eq!(calc.display(), "Cannot divide by zero");
    }

    #[test]
    fn test_evaluate_sqrt() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["sqrt", "9", "="]);
        assert_eq!(calc.display(), "3.0");
    }

    #[test]
    fn test_evaluate_sqrt_ignores_first_operand() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "0", "sqrt", "1", "6", "="]);
        assert_eq!(calc.display(), "4.0");
    }

    #[test]
    fn test_evaluate_sqrt_negative() {
        let state = CalculatorState::new()
            .with_pending(Operator::Sqrt, 0.0)
            .with_display("-4");
        let mut calc = Calculator::from_state(state, CalcConfig::default());
        assert_eq!(calc.evaluate(), Evaluation::Fault(EvalFault::NegativeRoot));
        assert_eq!(calc.display(), "Invalid input");
    }

    #[test]
    fn test_evaluate_without_operator() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2"]);
        assert_eq!(calc.evaluate(), Evaluation::Nothing);
        assert_eq!(calc.display(), "");
        assert_eq!(calc.phase(), Phase::Result);
    }

    #[test]
    fn test_clear_then_evaluate_is_empty() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "3", "C", "="]);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_repeated_equals_reapplies_operator() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "3", "="]);
        assert_eq!(calc.display(), "5.0");
        press_all(&mut calc, &["="]);
        assert_eq!(calc.display(), "7.0");
    }

    #[test]
    fn test_chaining_from_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "3", "="]);
        assert_eq!(calc.display(), "5.0");
        press_all(&mut calc, &["*", "4", "="]);
        assert_eq!(calc.display(), "20.0");
    }

    #[test]
    fn test_overflow_renders_infinity_and_chains() {
        let state = CalculatorState::new()
            .with_pending(Operator::Multiply, f64::MAX)
            .with_display("2");
        let mut calc = Calculator::from_state(state, CalcConfig::default());
        calc.evaluate();
        assert_eq!(calc.display(), "Infinity");
        press_all(&mut calc, &["-", "1", "="]);
        assert_eq!(calc.display(), "Infinity");
    }

    #[test]
    fn test_trimmed_style() {
        let config = CalcConfig::new().with_number_style(NumberStyle::Trimmed);
        let mut calc = Calculator::with_config(config);
        press_all(&mut calc, &["2", "+", "3", "="]);
        assert_eq!(calc.display(), "5");
        press_all(&mut calc, &["/", "2", "="]);
        assert_eq!(calc.display(), "2.5");
    }

    // ===== clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "3", "=", "C"]);
        assert_eq!(calc.state(), &CalculatorState::new());
        assert_eq!(calc.phase(), Phase::Entering);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut once = Calculator::new();
        press_all(&mut once, &["7", "*", "8"]);
        let mut twice = once.clone();
        once.clear();
        twice.clear();
        twice.clear();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_keeps_config() {
        let config = CalcConfig::new().with_number_style(NumberStyle::Trimmed);
        let mut calc = Calculator::with_config(config);
        calc.clear();
        assert_eq!(calc.config(), &config);
    }

    // ===== press / press_label =====

    #[test]
    fn test_press_label_unknown_leaves_state() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "+", "2"]);
        let before = calc.state().clone();
        assert_eq!(
            calc.press_label("AC"),
            Err(CalcError::unknown_key("AC"))
        );
        assert_eq!(calc.state(), &before);
    }

    #[test]
    fn test_press_key_values() {
        let mut calc = Calculator::new();
        calc.press(Key::Digit(DigitToken::new('6').unwrap()));
        calc.press(Key::Operator(Operator::Divide));
        calc.press(Key::Digit(DigitToken::new('4').unwrap()));
        calc.press(Key::Equals);
        assert_eq!(calc.display(), "1.5");
        calc.press(Key::Clear);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_snapshot_and_resume() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", "*"]);
        let json = serde_json::to_string(calc.state()).unwrap();

        let state: CalculatorState = serde_json::from_str(&json).unwrap();
        let mut resumed = Calculator::from_state(state, CalcConfig::default());
        press_all(&mut resumed, &["3", "="]);
        assert_eq!(resumed.display(), "36.0");
        assert_eq!(resumed.into_state().first_operand(), 12.0);
    }

    #[test]
    fn test_snapshot_and_resume_overflowed_operand() {
        let mut calc = Calculator::new();
        for _ in 0..310 {
            calc.press_label("9").unwrap();
        }
        calc.press_label("*").unwrap();
        assert_eq!(calc.state().first_operand(), f64::INFINITY);

        let json = serde_json::to_string(calc.state()).unwrap();
        let state: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(&state, calc.state());

        let mut resumed = Calculator::from_state(state, CalcConfig::default());
        press_all(&mut resumed, &["2", "="]);
        assert_eq!(resumed.display(), "Infinity");
    }

    fn binary_op() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]
    }

    proptest! {
        #[test]
        fn prop_binary_evaluation_matches_arithmetic(
            a in "[0-9]{1,6}(\\.[0-9]{1,4})?",
            b in "[1-9][0-9]{0,5}(\\.[0-9]{1,4})?",
            op in binary_op(),
        ) {
            let mut calc = Calculator::new();
            type_number(&mut calc, &a);
            calc.select_operator(op);
            type_number(&mut calc, &b);
            calc.evaluate();

            let expected = op.apply(a.parse().unwrap(), b.parse().unwrap()).unwrap();
            prop_assert_eq!(calc.display(), format_number(expected, NumberStyle::Canonical));
        }

        #[test]
        fn prop_clear_always_returns_initial_state(
            labels in proptest::collection::vec(
                proptest::sample::select(Keypad::STANDARD_LAYOUT.concat()),
                0..20,
            ),
        ) {
            let mut calc = Calculator::new();
            for label in &labels {
                calc.press_label(label).unwrap();
            }
            calc.clear();
            prop_assert_eq!(calc.state(), &CalculatorState::new());
        }

        #[test]
        fn prop_digit_after_result_shows_only_that_digit(
            a in "[0-9]{1,4}",
            b in "[0-9]{1,4}",
            op in binary_op(),
            digit in proptest::char::range('0', '9'),
        ) {
            let mut calc = Calculator::new();
            type_number(&mut calc, &a);
            calc.select_operator(op);
            type_number(&mut calc, &b);
            calc.evaluate();
            calc.enter_digit(DigitToken::new(digit).unwrap());
            prop_assert_eq!(calc.display(), digit.to_string());
        }
    }
}
