//! Recipient, tone and variant models.

use crate::grammar::GrammarIssue;

/// Who the message is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecipientCategory {
    /// A manager or senior (팀장, 부장님).
    #[default]
    Boss,
    /// A peer at work.
    Colleague,
    /// A close friend or acquaintance.
    Friend,
}

impl RecipientCategory {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Boss, Self::Colleague, Self::Friend];

    /// Parse from the lowercase identifier, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "boss" => Some(Self::Boss),
            "colleague" => Some(Self::Colleague),
            "friend" => Some(Self::Friend),
            _ => None,
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boss => "boss",
            Self::Colleague => "colleague",
            Self::Friend => "friend",
        }
    }

    /// Korean display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Boss => "상사",
            Self::Colleague => "동료",
            Self::Friend => "친구",
        }
    }

    /// Icon shown next to the label.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Boss => "👔",
            Self::Colleague => "🤝",
            Self::Friend => "😊",
        }
    }

    /// Examples of who falls into this category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Boss => "팀장, 부장님 등",
            Self::Colleague => "같은 팀, 타부서 등",
            Self::Friend => "친한 동기, 지인 등",
        }
    }
}

impl std::fmt::Display for RecipientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a recipient identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown recipient '{0}' (expected boss, colleague or friend)")]
pub struct UnknownRecipient(pub String);

impl std::str::FromStr for RecipientCategory {
    type Err = UnknownRecipient;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownRecipient(s.to_string()))
    }
}

/// Formality register of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ToneKind {
    /// 합쇼체 endings (습니다, 십시오).
    Formal,
    /// 해요체 endings (어요, 세요).
    Friendly,
    /// 반말 endings (했어, 해줘).
    Casual,
}

impl ToneKind {
    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Friendly => "friendly",
            Self::Casual => "casual",
        }
    }

    /// Korean display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Formal => "공손형",
            Self::Friendly => "친근형",
            Self::Casual => "캐주얼형",
        }
    }

    /// Icon shown next to the label.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Formal => "👔",
            Self::Friendly => "😊",
            Self::Casual => "😄",
        }
    }
}

impl std::fmt::Display for ToneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone detected in an input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DetectedTone {
    /// Formal markers present.
    Formal,
    /// Friendly markers present.
    Friendly,
    /// Casual markers present.
    Casual,
    /// No known sentence-final marker.
    Neutral,
}

impl DetectedTone {
    /// The tone kind, or `None` for neutral text.
    #[must_use]
    pub const fn tone(self) -> Option<ToneKind> {
        match self {
            Self::Formal => Some(ToneKind::Formal),
            Self::Friendly => Some(ToneKind::Friendly),
            Self::Casual => Some(ToneKind::Casual),
            Self::Neutral => None,
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Friendly => "friendly",
            Self::Casual => "casual",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for DetectedTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tone-specific rendering of the input message.
///
/// `message` is the exact string to copy to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MessageVariant {
    /// Tone this variant was rendered in.
    pub tone: ToneKind,
    /// Display label (공손형, 친근형, 캐주얼형).
    pub label: &'static str,
    /// Final decorated text.
    pub message: String,
    /// Why this tone suits the recipient.
    pub description: &'static str,
    /// Corrected input, present together with `grammar_issues`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub corrected_text: Option<String>,
    /// Corrections applied to the input.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub grammar_issues: Option<Vec<GrammarIssue>>,
    /// Whether the ending was rewritten.
    pub tone_changed: bool,
    /// Tone detected before rewriting.
    pub original_tone: DetectedTone,
}

impl MessageVariant {
    /// Returns true if the input was corrected before rendering.
    #[must_use]
    pub const fn was_corrected(&self) -> bool {
        self.corrected_text.is_some()
    }
}
