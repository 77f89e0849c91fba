//! Error types for the MinWinTid mock service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions the mock can produce.

use thiserror::Error;

/// The main error type for the MinWinTid mock service.
///
/// All fallible operations in the service return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use minwintid_mock::error::MockError;
///
/// let error = MockError::MalformedDate {
///     parameter: "fra_dato".to_string(),
///     value: "01.01.2024".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed date in 'fra_dato': '01.01.2024' (expected YYYY-MM-DD)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum MockError {
    /// A date query parameter did not match the `YYYY-MM-DD` format.
    #[error("Malformed date in '{parameter}': '{value}' (expected YYYY-MM-DD)")]
    MalformedDate {
        /// The query parameter that failed to parse.
        parameter: String,
        /// The value that was rejected.
        value: String,
    },

    /// A required query parameter was absent or undecodable.
    #[error("Missing or invalid query parameter: {detail}")]
    MissingParameter {
        /// A description of what was missing.
        detail: String,
    },

    /// The service configuration could not be read from the environment.
    #[error("Configuration error: {message}")]
    Config {
        /// A description of the configuration failure.
        message: String,
    },

    /// The generated day list could not be encoded as a JSON string.
    #[error("Failed to encode timesheet payload: {message}")]
    Serialization {
        /// A description of the encoding failure.
        message: String,
    },
}

/// A type alias for Results that return MockError.
pub type MockResult<T> = Result<T, MockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_displays_parameter_and_value() {
        let error = MockError::MalformedDate {
            parameter: "til_dato".to_string(),
            value: "not-a-date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed date in 'til_dato': 'not-a-date' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_missing_parameter_displays_detail() {
        let error = MockError::MissingParameter {
            detail: "missing field `ident`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing or invalid query parameter: missing field `ident`"
        );
    }

    #[test]
    fn test_config_error_displays_message() {
        let error = MockError::Config {
            message: "MOCK_BIND_ADDR is not a socket address".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: MOCK_BIND_ADDR is not a socket address"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<MockError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_malformed_date() -> MockResult<()> {
            Err(MockError::MalformedDate {
                parameter: "fra_dato".to_string(),
                value: "".to_string(),
            })
        }

        fn propagates_error() -> MockResult<()> {
            returns_malformed_date()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
