//! Keypad keys and the button grid
//!
//! Labels match exactly: `"sqrt"` is an operator, `"SQRT"` is an unknown key.
//! Nothing falls back to clear.
//!
//! The standard layout:
//! ```text
//! [ 1 ] [ 2 ] [ 3 ] [ + ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ sqrt ]
//! [ 0 ] [ . ] [ = ] [ C ]
//! ```

use crate::core::{CalcError, CalcResult, Operator};
use std::fmt;
use std::str::FromStr;

/// A character that digit entry appends: `0`-`9` or `.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitToken(char);

impl DigitToken {
    /// The decimal point token
    pub const DECIMAL_POINT: Self = Self('.');

    /// Validates a digit entry character
    pub fn new(ch: char) -> CalcResult<Self> {
        if ch.is_ascii_digit() || ch == '.' {
            Ok(Self(ch))
        } else {
            Err(CalcError::InvalidDigit(ch))
        }
    }

    /// The character appended to the display
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns true for '.'
    #[must_use]
    pub const fn is_decimal_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for DigitToken {
    type Error = CalcError;

    fn try_from(ch: char) -> CalcResult<Self> {
        Self::new(ch)
    }
}

impl fmt::Display for DigitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discrete input from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Append a digit or decimal point
    Digit(DigitToken),
    /// Select an operator
    Operator(Operator),
    /// Evaluate (=)
    Equals,
    /// Reset the session (C)
    Clear,
}

impl Key {
    /// Label of the evaluate button
    pub const EQUALS_LABEL: &'static str = "=";
    /// Label of the clear button
    pub const CLEAR_LABEL: &'static str = "C";

    /// Parses an exact button label
    pub fn from_label(label: &str) -> CalcResult<Self> {
        match label {
            Self::EQUALS_LABEL => return Ok(Self::Equals),
            Self::CLEAR_LABEL => return Ok(Self::Clear),
            _ => {}
        }
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Self::Operator(op));
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => DigitToken::new(ch)
                .map(Self::Digit)
                .map_err(|_| CalcError::unknown_key(label)),
            _ => Err(CalcError::unknown_key(label)),
        }
    }

    /// The button label for this key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(token) => token.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => Self::EQUALS_LABEL.to_string(),
            Self::Clear => Self::CLEAR_LABEL.to_string(),
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        Self::from_label(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A button placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    key: Key,
    row: usize,
    col: usize,
}

impl KeypadButton {
    /// The key this button sends
    #[must_use]
    pub const fn key(&self) -> Key {
        self.key
    }

    /// Grid row (0-indexed)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Grid column (0-indexed)
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Button label
    #[must_use]
    pub fn label(&self) -> String {
        self.key.label()
    }
}

/// Rows of buttons; rows may differ in length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Labels of the standard layout, row by row
    pub const STANDARD_LAYOUT: [&'static [&'static str]; 4] = [
        &["1", "2", "3", "+", "*"],
        &["4", "5", "6", "-", "/"],
        &["7", "8", "9", "sqrt"],
        &["0", ".", "=", "C"],
    ];

    /// The standard calculator keypad
    #[must_use]
    pub fn standard() -> Self {
        let digit = |ch| Key::Digit(DigitToken(ch));
        let op = Key::Operator;
        Self::from_keys(vec![
            vec![
                digit('1'),
                digit('2'),
                digit('3'),
                op(Operator::Add),
                op(Operator::Multiply),
            ],
            vec![
                digit('4'),
                digit('5'),
                digit('6'),
                op(Operator::Subtract),
                op(Operator::Divide),
            ],
            vec![digit('7'), digit('8'), digit('9'), op(Operator::Sqrt)],
            vec![
                digit('0'),
                Key::Digit(DigitToken::DECIMAL_POINT),
                Key::Equals,
                Key::Clear,
            ],
        ])
    }

    /// Builds a keypad from rows of labels; fails on the first unknown label
    pub fn from_labels<R: AsRef<[&'static str]>>(rows: &[R]) -> CalcResult<Self> {
        let keys = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|label| Key::from_label(label))
                    .collect::<CalcResult<Vec<_>>>()
            })
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(Self::from_keys(keys))
    }

    fn from_keys(keys: Vec<Vec<Key>>) -> Self {
        let rows = keys
            .into_iter()
            .enumerate()
            .map(|(row, keys)| {
                keys.into_iter()
                    .enumerate()
                    .map(|(col, key)| KeypadButton { key, row, col })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Iterates the rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[KeypadButton]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Finds the button with an exact label
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&KeypadButton> {
        let key = Key::from_label(label).ok()?;
        self.rows.iter().flatten().find(|button| button.key() == key)
    }

    /// All labels in row-major order
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().flatten().map(KeypadButton::label).collect()
    }

    /// Renders the grid as text, one line per row
    #[must_use]
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| format!("[ {} ]", button.label()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<DigitToken> for Key {
    fn from(token: DigitToken) -> Self {
        Self::Digit(token)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
