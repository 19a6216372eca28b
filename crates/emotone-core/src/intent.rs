//! Message intent detection.

/// Purpose of a message, used to pick the trailing emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    /// Thanking the recipient.
    Gratitude,
    /// Apologising.
    Apology,
    /// Asking the recipient to do something.
    Request,
    /// Announcing a change.
    Update,
    /// Asking a question.
    Question,
    /// None of the above.
    #[default]
    General,
}

impl Intent {
    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gratitude => "gratitude",
            Self::Apology => "apology",
            Self::Request => "request",
            Self::Update => "update",
            Self::Question => "question",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const QUESTION_KEYWORDS: &[&str] = &["?", "어떻게", "언제", "어디", "무엇", "뭐"];
const REQUEST_KEYWORDS: &[&str] = &["부탁", "요청", "해주세요", "해 주세요"];
const UPDATE_KEYWORDS: &[&str] = &["변경", "수정", "알려드립니다", "공지"];
const GRATITUDE_KEYWORDS: &[&str] = &["감사", "고마워", "고맙"];
const APOLOGY_KEYWORDS: &[&str] = &["죄송", "미안"];

/// Independent intent flags for one message.
///
/// Several flags may be set at once; [`IntentContext::primary`] resolves
/// them by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct IntentContext {
    /// Message asks something.
    pub is_question: bool,
    /// Message asks for an action.
    pub is_request: bool,
    /// Message announces a change.
    pub is_update: bool,
    /// Message thanks the recipient.
    pub is_gratitude: bool,
    /// Message apologises.
    pub is_apology: bool,
}

impl IntentContext {
    /// Detects intent flags by keyword containment.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let has_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));
        Self {
            is_question: has_any(QUESTION_KEYWORDS),
            is_request: has_any(REQUEST_KEYWORDS),
            is_update: has_any(UPDATE_KEYWORDS),
            is_gratitude: has_any(GRATITUDE_KEYWORDS),
            is_apology: has_any(APOLOGY_KEYWORDS),
        }
    }

    /// The flag that drives emoji selection:
    /// gratitude > apology > request > update > question.
    #[must_use]
    pub fn primary(&self) -> Intent {
        [
            (self.is_gratitude, Intent::Gratitude),
            (self.is_apology, Intent::Apology),
            (self.is_request, Intent::Request),
            (self.is_update, Intent::Update),
            (self.is_question, Intent::Question),
        ]
        .into_iter()
        .find_map(|(set, intent)| set.then_some(intent))
        .unwrap_or_default()
    }
}
