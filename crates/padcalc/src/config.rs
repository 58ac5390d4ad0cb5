//! Calculator configuration

use crate::core::{CalcError, CalcResult, NumberStyle};
use serde::{Deserialize, Serialize};

/// What digit entry does with a second decimal point in one operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalPolicy {
    /// Append every '.', so `1.2.3` can be typed (and reads as 0)
    #[default]
    Permissive,
    /// Ignore a '.' when the display already contains one
    SingleDot,
}

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Decimal point handling during digit entry
    pub decimal_policy: DecimalPolicy,
    /// Result formatting
    pub number_style: NumberStyle,
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set decimal point policy
    #[must_use]
    pub const fn with_decimal_policy(mut self, policy: DecimalPolicy) -> Self {
        self.decimal_policy = policy;
        self
    }

    /// Set result number style
    #[must_use]
    pub const fn with_number_style(mut self, style: NumberStyle) -> Self {
        self.number_style = style;
        self
    }

    /// Reads a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Writes the configuration as pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::config(e.to_string()))
    }
}
