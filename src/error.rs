//! Error types for svs_quotes.
//!
//! Text transformations are total and never fail; errors only arise when
//! parsing option values from strings.

use std::fmt;

/// Result type alias for svs_quotes operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for svs_quotes operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Unrecognized quote width name (expected `fullwidth` or `halfwidth`).
    InvalidWidth(String),
    /// Unrecognized scan side name (expected `start`, `end` or `both`).
    InvalidSide(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth(s) => write!(f, "invalid quote width: {s}"),
            Self::InvalidSide(s) => write!(f, "invalid scan side: {s}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidWidth("wide-ish".to_string());
        assert_eq!(err.to_string(), "invalid quote width: wide-ish");

        let err = Error::InvalidSide("middle".to_string());
        assert!(err.to_string().contains("middle"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidSide(String::new()));
        assert!(err.source().is_none());
    }
}
