//! Tone detection and sentence-ending rewriting.
//!
//! Detection is a substring checklist over sentence-final markers, checked
//! formal first, then friendly, then casual. Rewriting replaces the final
//! ending of the text using a rule table chosen by target tone and
//! recipient; trailing punctuation is kept after the new ending.

use crate::model::{DetectedTone, RecipientCategory, ToneKind};

/// Markers checked in priority order.
const TONE_MARKERS: &[(DetectedTone, &[&str])] = &[
    (DetectedTone::Formal, &["니다", "니까", "십시오"]),
    (
        DetectedTone::Friendly,
        &[
            "어요", "아요", "해요", "세요", "에요", "예요", "네요", "게요", "까요", "죠",
        ],
    ),
    (
        DetectedTone::Casual,
        &[
            "했어", "할게", "해줘", "거야", "이야", "있어", "없어", "하자", "ㅋㅋ", "ㅎㅎ",
        ],
    ),
];

/// Informal endings raised to 합쇼체 for a boss.
const TO_FORMAL: &[(&str, &str)] = &[
    ("해 주세요", "해 주시기 바랍니다"),
    ("주세요", "주시기 바랍니다"),
    ("드릴게요", "드리겠습니다"),
    ("할게요", "하겠습니다"),
    ("했어요", "했습니다"),
    ("었어요", "었습니다"),
    ("았어요", "았습니다"),
    ("였어요", "였습니다"),
    ("있어요", "있습니다"),
    ("없어요", "없습니다"),
    ("이에요", "입니다"),
    ("예요", "입니다"),
    ("해요", "합니다"),
    ("해줘", "해 주시기 바랍니다"),
    ("할게", "하겠습니다"),
    ("했어", "했습니다"),
    ("있어", "있습니다"),
    ("없어", "없습니다"),
    ("이야", "입니다"),
];

/// 합쇼체, plain and 반말 endings softened to 해요체.
const TO_FRIENDLY: &[(&str, &str)] = &[
    ("주시기 바랍니다", "주세요"),
    ("부탁드립니다", "부탁드려요"),
    ("드리겠습니다", "드릴게요"),
    ("하겠습니다", "할게요"),
    ("겠습니다", "겠어요"),
    ("했습니다", "했어요"),
    ("였습니다", "였어요"),
    ("었습니다", "었어요"),
    ("았습니다", "았어요"),
    ("있습니다", "있어요"),
    ("없습니다", "없어요"),
    ("바랍니다", "바라요"),
    ("드립니다", "드려요"),
    ("합니다", "해요"),
    ("입니다", "이에요"),
    ("십시오", "세요"),
    ("했다", "했어요"),
    ("한다", "해요"),
    ("이다", "이에요"),
    ("해줘", "해 주세요"),
    ("할게", "할게요"),
    ("했어", "했어요"),
    ("거야", "거예요"),
    ("이야", "이에요"),
];

/// Formal and friendly endings relaxed to 반말 for a friend.
const TO_CASUAL: &[(&str, &str)] = &[
    ("주시기 바랍니다", "줘"),
    ("부탁드립니다", "부탁해"),
    ("하겠습니다", "할게"),
    ("했습니다", "했어"),
    ("였습니다", "였어"),
    ("었습니다", "었어"),
    ("았습니다", "았어"),
    ("있습니다", "있어"),
    ("없습니다", "없어"),
    ("합니다", "해"),
    ("입니다", "이야"),
    ("주세요", "줘"),
    ("할게요", "할게"),
    ("했어요", "했어"),
    ("이에요", "이야"),
    ("예요", "야"),
    ("해요", "해"),
    ("어요", "어"),
    ("아요", "아"),
    ("네요", "네"),
    ("까요", "까"),
    ("죠", "지"),
];

/// Trailing characters kept after a rewritten ending.
const TRAILING: &[char] = &['.', '!', '?', '~'];

/// Output of [`adjust_tone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneAdjustment {
    /// Text after rewriting.
    pub adjusted_message: String,
    /// Whether the text was actually altered.
    pub tone_changed: bool,
    /// Tone detected in the input.
    pub original_tone: DetectedTone,
}

/// Classifies the tone of `text` by its sentence-final markers.
#[must_use]
pub fn detect_tone(text: &str) -> DetectedTone {
    TONE_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| text.contains(marker)))
        .map_or(DetectedTone::Neutral, |(tone, _)| *tone)
}

/// Rule table for a target tone and recipient, if that pairing rewrites.
#[must_use]
pub const fn rules_for(
    target: ToneKind,
    recipient: RecipientCategory,
) -> Option<&'static [(&'static str, &'static str)]> {
    match (target, recipient) {
        (ToneKind::Formal, RecipientCategory::Boss) => Some(TO_FORMAL),
        (ToneKind::Friendly, _) => Some(TO_FRIENDLY),
        (ToneKind::Casual, RecipientCategory::Friend) => Some(TO_CASUAL),
        _ => None,
    }
}

/// Rewrites the ending of `text` towards `target`.
#[must_use]
pub fn adjust_tone(text: &str, target: ToneKind, recipient: RecipientCategory) -> ToneAdjustment {
    let original_tone = detect_tone(text);

    let adjusted = if original_tone.tone() == Some(target) {
        None
    } else {
        rules_for(target, recipient).and_then(|rules| rewrite_ending(text, rules))
    };

    match adjusted {
        Some(adjusted_message) if adjusted_message != text => ToneAdjustment {
            adjusted_message,
            tone_changed: true,
            original_tone,
        },
        _ => ToneAdjustment {
            adjusted_message: text.to_string(),
            tone_changed: false,
            original_tone,
        },
    }
}

/// Replaces the first rule whose suffix ends `text`, ignoring trailing
/// punctuation and whitespace.
fn rewrite_ending(text: &str, rules: &[(&str, &str)]) -> Option<String> {
    let body = text.trim_end_matches(|c: char| c.is_whitespace() || TRAILING.contains(&c));
    let tail = &text[body.len()..];

    rules.iter().find_map(|&(from, to)| {
        body.strip_suffix(from)
            .map(|stem| format!("{stem}{to}{tail}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_tone() {
        assert_eq!(detect_tone("변경되었습니다"), DetectedTone::Formal);
        assert_eq!(detect_tone("확인해 주세요"), DetectedTone::Friendly);
        assert_eq!(detect_tone("내일 보자 ㅋㅋ"), DetectedTone::Casual);
        assert_eq!(detect_tone("회의 변경"), DetectedTone::Neutral);
    }

    #[test]
    fn test_detect_tone_priority() {
        // Formal wins even when a friendly marker appears first.
        assert_eq!(detect_tone("좋아요. 감사합니다"), DetectedTone::Formal);
    }

    #[test]
    fn test_same_tone_is_untouched() {
        let result = adjust_tone("자료를 보냈습니다", ToneKind::Formal, RecipientCategory::Boss);
        assert_eq!(result.adjusted_message, "자료를 보냈습니다");
        assert!(!result.tone_changed);
        assert_eq!(result.original_tone, DetectedTone::Formal);
    }

    #[test]
    fn test_formal_for_boss() {
        let result = adjust_tone("보고서 확인했어요.", ToneKind::Formal, RecipientCategory::Boss);
        assert_eq!(result.adjusted_message, "보고서 확인했습니다.");
        assert!(result.tone_changed);
        assert_eq!(result.original_tone, DetectedTone::Friendly);
    }

    #[test]
    fn test_formal_request_for_boss() {
        let result = adjust_tone("검토해 주세요", ToneKind::Formal, RecipientCategory::Boss);
        assert_eq!(result.adjusted_message, "검토해 주시기 바랍니다");
    }

    #[test]
    fn test_friendly_from_formal() {
        let result = adjust_tone(
            "회의가 변경되었습니다!",
            ToneKind::Friendly,
            RecipientCategory::Colleague,
        );
        assert_eq!(result.adjusted_message, "회의가 변경되었어요!");
        assert!(result.tone_changed);
    }

    #[test]
    fn test_friendly_from_neutral() {
        let result = adjust_tone("배포 완료했다", ToneKind::Friendly, RecipientCategory::Boss);
        assert_eq!(result.adjusted_message, "배포 완료했어요");
        assert_eq!(result.original_tone, DetectedTone::Neutral);
    }

    #[test]
    fn test_casual_only_for_friend() {
        let friend = adjust_tone("감사합니다!", ToneKind::Casual, RecipientCategory::Friend);
        assert_eq!(friend.adjusted_message, "감사해!");

        let colleague = adjust_tone("감사합니다!", ToneKind::Casual, RecipientCategory::Colleague);
        assert_eq!(colleague.adjusted_message, "감사합니다!");
        assert!(!colleague.tone_changed);
    }

    #[test]
    fn test_formal_only_for_boss() {
        assert!(rules_for(ToneKind::Formal, RecipientCategory::Friend).is_none());
        assert!(rules_for(ToneKind::Friendly, RecipientCategory::Friend).is_some());
    }

    #[test]
    fn test_rewrite_is_anchored() {
        // 합니다 in the middle of the text is not an ending.
        let result = adjust_tone(
            "감사합니다 내일 뵙겠습니다",
            ToneKind::Friendly,
            RecipientCategory::Boss,
        );
        assert_eq!(result.adjusted_message, "감사합니다 내일 뵙겠어요");
    }

    #[test]
    fn test_unmatched_ending_reports_unchanged() {
        let result = adjust_tone("좋습니다", ToneKind::Friendly, RecipientCategory::Boss);
        assert_eq!(result.adjusted_message, "좋습니다");
        assert!(!result.tone_changed);
    }
}
