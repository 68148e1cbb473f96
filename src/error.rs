use thiserror::Error;

/// Rejection produced when input text is not a well-formed decimal integer.
///
/// Parsing is deterministic, so a failed input fails the same way every
/// time; the offending text is carried for the caller to report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input was empty after trimming surrounding whitespace.
    #[error("empty input")]
    Empty,

    /// A sign character with nothing after it.
    #[error("missing digits after sign in {input:?}")]
    MissingDigits { input: String },

    /// A character that is neither a decimal digit nor a leading sign.
    /// Embedded whitespace lands here as well.
    #[error("invalid character {found:?} in {input:?}")]
    InvalidDigit { input: String, found: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FormatError::Empty.to_string(), "empty input");
        assert_eq!(
            FormatError::MissingDigits { input: "+".to_string() }.to_string(),
            "missing digits after sign in \"+\""
        );
        assert_eq!(
            FormatError::InvalidDigit { input: "12a".to_string(), found: 'a' }.to_string(),
            "invalid character 'a' in \"12a\""
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FormatError::Empty, FormatError::Empty);
        assert_ne!(
            FormatError::Empty,
            FormatError::MissingDigits { input: "-".to_string() }
        );
    }
}
