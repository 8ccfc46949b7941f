//! Error types for mailto URI building.

/// Result type alias for mailto operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a mailto URI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A recipient string failed email address validation.
    ///
    /// Carries the offending input so callers can report exactly
    /// which address was rejected.
    #[error("The provided email address is not valid: {0}")]
    InvalidRecipient(String),
}

impl Error {
    /// Returns the rejected input string.
    #[must_use]
    pub fn rejected(&self) -> &str {
        match self {
            Self::InvalidRecipient(addr) => addr,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_address() {
        let err = Error::InvalidRecipient("not-an-email".to_string());
        assert_eq!(
            err.to_string(),
            "The provided email address is not valid: not-an-email"
        );
    }

    #[test]
    fn test_rejected_accessor() {
        let err = Error::InvalidRecipient("x@".to_string());
        assert_eq!(err.rejected(), "x@");
    }
}
