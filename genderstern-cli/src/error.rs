//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Lexicon could not be loaded
    InvalidLexicon(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidLexicon(msg) => write!(f, "Invalid lexicon: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn invalid_lexicon_display() {
        let error = CliError::InvalidLexicon("lexicon contains no nouns".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid lexicon: lexicon contains no nouns"
        );
    }

    #[test]
    fn error_trait_implementation() {
        let error = CliError::FileNotFound("test.txt".to_string());
        let _: &dyn std::error::Error = &error;
    }
}
