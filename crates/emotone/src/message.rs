//! Input events for the interactive session.
//!
//! Each line read from stdin becomes one [`Message`]. Lines starting with `:`
//! are commands; anything else is a message to rewrite.

use emotone_core::RecipientCategory;

/// Session events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Generate suggestions for this text.
    Submit(String),
    /// Switch the recipient for later submissions.
    SetRecipient(RecipientCategory),
    /// Copy the n-th (1-based) suggestion of the last result.
    Copy(usize),
    /// Clear the last result.
    Reset,
    /// Show command help.
    Help,
    /// End the session.
    Quit,
    /// A command that could not be understood.
    Invalid(String),
}

impl Message {
    /// Parses one input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Submit(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("to"), Some(name)) => RecipientCategory::parse(name)
                .map_or_else(|| Self::Invalid(format!("알 수 없는 대상: {name}")), Self::SetRecipient),
            (Some("copy"), Some(n)) => match n.parse::<usize>() {
                Ok(index) if index > 0 => Self::Copy(index),
                _ => Self::Invalid(format!("잘못된 번호: {n}")),
            },
            (Some("reset"), None) => Self::Reset,
            (Some("help"), None) => Self::Help,
            (Some("quit" | "q"), None) => Self::Quit,
            _ => Self::Invalid(format!("알 수 없는 명령: :{command}")),
        }
    }
}
