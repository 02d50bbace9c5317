//! Error types.
//!
//! Every fallible operation in veneer fails at construction time: building a
//! color from a malformed literal or calling a shorthand setter with the
//! wrong number of values. Rendering itself never fails.

use thiserror::Error;

/// Errors raised while constructing styles and colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument had the wrong shape, such as five padding values.
    #[error("invalid argument for {what}: {reason}")]
    InvalidArgument {
        /// The setter or constructor that rejected the argument.
        what: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
    /// A color literal was neither `#RGB`, `#RRGGBB` nor an index in 0-255.
    #[error("invalid color literal '{0}'")]
    InvalidColorLiteral(String),
}

impl Error {
    pub(crate) fn invalid_argument(what: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::invalid_argument("padding", "expected 1-4 values, got 5");
        assert_eq!(
            err.to_string(),
            "invalid argument for padding: expected 1-4 values, got 5"
        );

        let err = Error::InvalidColorLiteral("#12".into());
        assert_eq!(err.to_string(), "invalid color literal '#12'");
    }
}
