//! Error types for message transformation.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input message failed validation.
    #[error("Invalid message: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns the notification text to show the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.message(),
        }
    }
}

/// Validation error for submitted messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Message is empty or whitespace-only.
    EmptyMessage,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "메시지를 입력해주세요",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Trims a submitted message and rejects it if nothing remains.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyMessage`] for empty or whitespace-only input.
pub fn validate_message(message: &str) -> std::result::Result<&str, ValidationError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyMessage)
    } else {
        Ok(trimmed)
    }
}
