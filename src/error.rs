//! Error types for reduction and for the surrounding application.

use std::path::PathBuf;

use thiserror::Error;

/// Why a token string could not be reduced.
///
/// Both kinds are terminal: the scan stops at the first offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    /// A character that is neither a symbol nor the separator.
    #[error("invalid character: `{0}`")]
    InvalidCharacter(char),

    /// A second separator was scanned.
    #[error("multiple periods")]
    MultipleSeparators,
}

impl AddError {
    /// Stable `snake_case` identifier used in structured output.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Self::InvalidCharacter(_) => "invalid_character",
            Self::MultipleSeparators => "multiple_separators",
        }
    }

    /// The offending character, when there is one.
    #[must_use]
    pub fn character(self) -> Option<char> {
        match self {
            Self::InvalidCharacter(c) => Some(c),
            Self::MultipleSeparators => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_message_quotes_the_character() {
        assert_eq!(
            AddError::InvalidCharacter('+').to_string(),
            "invalid character: `+`"
        );
        assert_eq!(
            AddError::InvalidCharacter(' ').to_string(),
            "invalid character: ` `"
        );
    }

    #[test]
    fn test_multiple_separators_message() {
        assert_eq!(AddError::MultipleSeparators.to_string(), "multiple periods");
    }

    #[test]
    fn test_kind_and_character() {
        assert_eq!(AddError::InvalidCharacter('a').kind(), "invalid_character");
        assert_eq!(AddError::InvalidCharacter('a').character(), Some('a'));
        assert_eq!(AddError::MultipleSeparators.kind(), "multiple_separators");
        assert_eq!(AddError::MultipleSeparators.character(), None);
    }

    #[test]
    fn test_json_error_converts_to_output_error() {
        let json_err = serde_json::from_str::<i64>("x").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Output(_)));
        assert!(e.to_string().starts_with("output error:"));
    }

    #[test]
    fn test_config_error_names_the_file() {
        let e = Error::Config {
            path: PathBuf::from("/tmp/noop.toml"),
            message: "unknown field `colour`".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/noop.toml"));
        assert!(msg.contains("unknown field"));
    }
}
