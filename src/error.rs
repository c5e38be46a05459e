//! Contract violations
//!
//! Validation failures are data problems: they are recorded in the
//! validator's [`ErrorReport`](crate::ErrorReport) and the chain carries on.
//! [`ValidatorError`] is the other channel. It signals that the *caller* used
//! the API wrongly (a negative length bound, asking a single-text validator for
//! its list, feeding a number where a string was expected) and fails the call
//! outright.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Validator, ValidatorError};
//!
//! let err = Validator::text("abc").max_length(0).unwrap_err();
//! assert!(matches!(err, ValidatorError::InvalidArgument { name: "max_length", .. }));
//! assert_eq!(
//!     err.to_string(),
//!     "invalid argument max_length = 0: expected a positive integer that fits usize"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::value::Kind;

/// A misuse of the validator API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// Input of the wrong type was handed to a constructor.
    InvalidType {
        /// What the constructor accepts.
        expected: &'static str,
        /// What it was given.
        found: &'static str,
    },
    /// An operation argument is outside its allowed range.
    InvalidArgument {
        /// The operation whose argument was rejected.
        name: &'static str,
        /// The rejected argument, rendered for the message.
        value: String,
        /// What the argument must be.
        requirement: &'static str,
    },
    /// The operation only applies to one kind of validator.
    WrongVariant {
        /// The operation that was attempted.
        operation: &'static str,
        /// The kind the operation needs.
        expected: Kind,
        /// The kind of the validator it was called on.
        found: Kind,
    },
}

impl ValidatorError {
    pub(crate) fn invalid_argument(
        name: &'static str,
        value: impl fmt::Display,
        requirement: &'static str,
    ) -> Self {
        ValidatorError::InvalidArgument {
            name,
            value: value.to_string(),
            requirement,
        }
    }
}

impl fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorError::InvalidType { expected, found } => {
                write!(f, "invalid type: expected {}, found {}", expected, found)
            }
            ValidatorError::InvalidArgument {
                name,
                value,
                requirement,
            } => write!(
                f,
                "invalid argument {} = {}: expected {}",
                name, value, requirement
            ),
            ValidatorError::WrongVariant {
                operation,
                expected,
                found,
            } => write!(
                f,
                "{} requires a {} validator, found {}",
                operation, expected, found
            ),
        }
    }
}

impl StdError for ValidatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_type() {
        let err = ValidatorError::InvalidType {
            expected: "string or array of strings",
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "invalid type: expected string or array of strings, found number"
        );
    }

    #[test]
    fn test_display_invalid_argument() {
        let err = ValidatorError::invalid_argument("min_length", -1, "a non-negative integer");
        assert_eq!(
            err.to_string(),
            "invalid argument min_length = -1: expected a non-negative integer"
        );
    }

    #[test]
    fn test_display_wrong_variant() {
        let err = ValidatorError::WrongVariant {
            operation: "unwrap_list",
            expected: Kind::TextList,
            found: Kind::Text,
        };
        assert_eq!(
            err.to_string(),
            "unwrap_list requires a text list validator, found text"
        );
    }

    #[test]
    fn test_error_trait() {
        let err = ValidatorError::invalid_argument("max_length", 0, "a positive integer");
        let dyn_err: &dyn StdError = &err;
        assert!(dyn_err.source().is_none());
    }
}
