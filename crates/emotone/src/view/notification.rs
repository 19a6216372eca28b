//! Transient user notifications.

use std::fmt;

/// A short message reported to the user on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// An action succeeded.
    Success(String),
    /// An action failed or input was rejected.
    Error(String),
}

impl Notification {
    /// Copy succeeded for the variant with `label`.
    #[must_use]
    pub fn copied(label: &str) -> Self {
        Self::Success(format!("{label} 메시지가 복사되었습니다! 📋"))
    }

    /// Copy failed.
    #[must_use]
    pub fn copy_failed() -> Self {
        Self::Error("복사에 실패했습니다. 다시 시도해주세요.".to_string())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(text) => write!(f, "✔ {text}"),
            Self::Error(text) => write!(f, "✖ {text}"),
        }
    }
}

/// Prints a notification to stderr.
pub fn notify(notification: &Notification) {
    eprintln!("{notification}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_messages() {
        assert_eq!(
            Notification::copied("공손형").to_string(),
            "✔ 공손형 메시지가 복사되었습니다! 📋"
        );
        assert_eq!(
            Notification::copy_failed().to_string(),
            "✖ 복사에 실패했습니다. 다시 시도해주세요."
        );
    }
}
