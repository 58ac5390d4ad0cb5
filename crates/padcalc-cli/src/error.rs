//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculator rejected input
    #[error(transparent)]
    Calc(#[from] padcalc::core::CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use padcalc::core::CalcError;

    #[test]
    fn test_calc_error_is_transparent() {
        let err = CliError::from(CalcError::unknown_key("%"));
        assert_eq!(err.to_string(), "Unknown key: \"%\"");
    }

    #[test]
    fn test_io_error_display() {
        let err = CliError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
