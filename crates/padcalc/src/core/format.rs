//! Display text <-> number conversion
//!
//! Results are rendered with the shortest decimal string that round-trips
//! through `f64` (Rust's `{:?}` formatting). Integral values keep a trailing
//! `.0` and magnitudes outside `[1e-5, 1e16)` use exponent form. Non-finite
//! values use the words `Infinity`, `-Infinity` and `NaN`, all of which
//! [`parse_operand`] reads back.

use serde::{Deserialize, Serialize};

/// How evaluated numbers are written to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    /// Shortest round-trip decimal, `5.0` for integral values
    #[default]
    Canonical,
    /// Like `Canonical` with a trailing `.0` dropped, `5` for integral values
    Trimmed,
}

/// Formats an evaluated number for the display.
#[must_use]
pub fn format_number(value: f64, style: NumberStyle) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let word = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return word.to_string();
    }

    let mut text = format!("{value:?}");
    if style == NumberStyle::Trimmed {
        if let Some(len) = text.strip_suffix(".0").map(str::len) {
            text.truncate(len);
        }
    }
    text
}

/// Reads the display as an operand. Anything that is not a number,
/// including an empty display and the fault messages, reads as `0.0`.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or_else(|_| {
        tracing::trace!(display = text, "display is not a number, using 0");
        0.0
    })
}

/// Serde adapter for operands. JSON has no infinity or NaN, so non-finite
/// values are written as their display words and read back with
/// [`parse_operand`].
pub(crate) mod operand_serde {
    use super::{format_number, parse_operand, NumberStyle};
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&format_number(*value, NumberStyle::Canonical))
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(OperandVisitor)
    }

    struct OperandVisitor;

    impl Visitor<'_> for OperandVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or one of \"Infinity\", \"-Infinity\", \"NaN\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            Ok(parse_operand(v))
        }
    }
}
