use thiserror::Error;

/// Custom error types for mentions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MentionsError {
    #[error("max_visible_row_count is required when horizontal is set to false")]
    MissingMaxVisibleRowCount,

    #[error("Invalid trigger {0:?}: expected exactly one character")]
    InvalidTrigger(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MentionsError {
    fn from(err: std::io::Error) -> Self {
        MentionsError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for MentionsError {
    fn from(err: toml::de::Error) -> Self {
        MentionsError::Config(err.message().to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
