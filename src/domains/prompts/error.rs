//! Prompt lookup, argument and template failures.

use thiserror::Error;

/// Errors that can occur while listing or rendering prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt is registered under this name.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// A required argument was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// An argument was supplied but rejected, such as a year outside the decade.
    #[error("Invalid value for '{0}': {1}")]
    InvalidArgument(String, String),

    /// The template itself is malformed.
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_argument(arg: impl Into<String>) -> Self {
        Self::MissingArgument(arg.into())
    }

    pub fn invalid_argument(arg: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument(arg.into(), reason.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PromptError::invalid_argument("year", "Year must be between 2000 and 2009")
                .to_string(),
            "Invalid value for 'year': Year must be between 2000 and 2009"
        );
        assert_eq!(
            PromptError::missing_argument("year").to_string(),
            "Missing required argument: year"
        );
    }
}
