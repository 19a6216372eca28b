//! Contextual emoji decoration.
//!
//! Decoration runs in three passes:
//!
//! 1. **Inline context**: clock, sun and calendar emoji after time and
//!    weekday expressions.
//! 2. **Sentiment words**: tone-dependent emoji after words such as `완료`.
//! 3. **Trailing sequence**: one suffix chosen by primary intent and tone.

use crate::intent::{Intent, IntentContext};
use crate::model::ToneKind;
use regex::{Captures, Regex};
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // literal pattern, covered by tests
static HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)시(간)?").expect("hour pattern"));

/// Literal inline insertions, applied in order.
const INLINE: &[(&str, &str)] = &[
    ("오전", "☀️"),
    ("오후", "🌅"),
    ("월요일", "📅"),
    ("화요일", "📅"),
    ("수요일", "📅"),
    ("목요일", "📅"),
    ("금요일", "📅"),
    ("토요일", "🎉"),
    ("일요일", "🌟"),
];

const CASUAL_WORDS: &[(&str, &str)] = &[
    ("좋아", "👍"),
    ("최고", "🎉"),
    ("완료", "✅"),
    ("성공", "🎯"),
];

const FRIENDLY_WORDS: &[(&str, &str)] = &[("완료", "✅"), ("확인", "👀")];

/// A sentiment word followed by a word break.
struct WordRule {
    pattern: Regex,
    replacement: String,
}

fn compile_words(words: &[(&str, &str)]) -> Vec<WordRule> {
    words
        .iter()
        .filter_map(|(word, emoji)| {
            let pattern = Regex::new(&format!(r"{}([\s.,!?~]|$)", regex::escape(word))).ok()?;
            Some(WordRule {
                pattern,
                replacement: format!("{word} {emoji}${{1}}"),
            })
        })
        .collect()
}

static CASUAL_RULES: LazyLock<Vec<WordRule>> = LazyLock::new(|| compile_words(CASUAL_WORDS));
static FRIENDLY_RULES: LazyLock<Vec<WordRule>> = LazyLock::new(|| compile_words(FRIENDLY_WORDS));

/// Emoji appended for an intent in a given tone.
///
/// For formal general messages [`decorate`] only appends this when the text
/// has no 🙏 yet.
#[must_use]
pub const fn trailing_emoji(intent: Intent, tone: ToneKind) -> &'static str {
    match (intent, tone) {
        (Intent::Gratitude | Intent::Apology | Intent::Request, ToneKind::Formal) => "🙏",
        (Intent::Gratitude, ToneKind::Friendly) => "😊🙏",
        (Intent::Gratitude, ToneKind::Casual) => "😄🙏✨",
        (Intent::Apology, ToneKind::Friendly) => "😅🙏",
        (Intent::Apology, ToneKind::Casual) => "😅💦",
        (Intent::Request, ToneKind::Casual) => "😊👍",
        (Intent::Update, ToneKind::Formal) => "📋",
        (Intent::Update | Intent::General, ToneKind::Casual) => "😄",
        (Intent::Question, ToneKind::Formal) => "🤔",
        (Intent::Question, ToneKind::Casual) => "🤔💭",
        (Intent::General, ToneKind::Formal)
        | (Intent::Request | Intent::Update | Intent::Question | Intent::General, ToneKind::Friendly) => {
            "😊"
        }
    }
}

/// Decorates `text` with inline and trailing emoji.
#[must_use]
pub fn decorate(text: &str, tone: ToneKind, context: &IntentContext) -> String {
    let mut result = insert_inline(text);

    let rules: &[WordRule] = match tone {
        ToneKind::Casual => CASUAL_RULES.as_slice(),
        ToneKind::Friendly => FRIENDLY_RULES.as_slice(),
        ToneKind::Formal => &[],
    };
    for rule in rules {
        result = rule
            .pattern
            .replace_all(&result, rule.replacement.as_str())
            .into_owned();
    }

    let intent = context.primary();
    let suffix = trailing_emoji(intent, tone);
    let skip = intent == Intent::General && tone == ToneKind::Formal && result.contains("🙏");
    if !skip {
        result.push(' ');
        result.push_str(suffix);
    }

    result
}

/// Pass 1: time and weekday expressions.
fn insert_inline(text: &str) -> String {
    let mut result = HOUR
        .replace_all(text, |caps: &Captures<'_>| {
            let hour = &caps[1];
            if caps.get(2).is_some() || hour.len() > 2 {
                caps[0].to_string()
            } else {
                format!("{hour}시 🕙")
            }
        })
        .into_owned();

    for (word, emoji) in INLINE {
        if result.contains(word) {
            result = result.replace(word, &format!("{word} {emoji}"));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(f: impl FnOnce(&mut IntentContext)) -> IntentContext {
        let mut context = IntentContext::default();
        f(&mut context);
        context
    }

    #[test]
    fn test_time_and_period() {
        let out = insert_inline("내일 오전 10시로 변경");
        assert_eq!(out, "내일 오전 ☀️ 10시 🕙로 변경");
    }

    #[test]
    fn test_hours_duration_is_not_a_time() {
        assert_eq!(insert_inline("2시간 걸려요"), "2시간 걸려요");
        assert_eq!(insert_inline("123시"), "123시");
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(insert_inline("월요일"), "월요일 📅");
        assert_eq!(insert_inline("토요일, 일요일"), "토요일 🎉, 일요일 🌟");
    }

    #[test]
    fn test_casual_sentiment_words() {
        let out = decorate("배포 완료! 최고", ToneKind::Casual, &IntentContext::default());
        assert_eq!(out, "배포 완료 ✅! 최고 🎉 😄");
    }

    #[test]
    fn test_sentiment_word_needs_break() {
        let out = decorate("완료했어", ToneKind::Casual, &IntentContext::default());
        assert_eq!(out, "완료했어 😄");
    }

    #[test]
    fn test_friendly_sentiment_subset() {
        let out = decorate("확인 부탁해요, 최고", ToneKind::Friendly, &ctx(|c| c.is_request = true));
        assert_eq!(out, "확인 👀 부탁해요, 최고 😊");
    }

    #[test]
    fn test_formal_has_no_sentiment_emoji() {
        let out = decorate("완료", ToneKind::Formal, &IntentContext::default());
        assert_eq!(out, "완료 😊");
    }

    #[test]
    fn test_trailing_priority() {
        let context = ctx(|c| {
            c.is_question = true;
            c.is_gratitude = true;
        });
        assert_eq!(decorate("감사합니다", ToneKind::Casual, &context), "감사합니다 😄🙏✨");
    }

    #[test]
    fn test_trailing_table() {
        assert_eq!(trailing_emoji(Intent::Apology, ToneKind::Friendly), "😅🙏");
        assert_eq!(trailing_emoji(Intent::Request, ToneKind::Formal), "🙏");
        assert_eq!(trailing_emoji(Intent::Update, ToneKind::Formal), "📋");
        assert_eq!(trailing_emoji(Intent::Question, ToneKind::Casual), "🤔💭");
    }

    #[test]
    fn test_formal_default_skipped_after_prayer() {
        let out = decorate("잘 부탁드립니다 🙏", ToneKind::Formal, &IntentContext::default());
        assert_eq!(out, "잘 부탁드립니다 🙏");
    }
}
