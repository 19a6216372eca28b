//! Suggestion list view.

use std::fmt::Write as _;

use emotone_core::MessageVariant;

/// Renders the original message followed by the numbered variants.
pub fn view_suggestions(
    original: &str,
    variants: &[MessageVariant],
    show_corrections: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "원본 메시지: {}", original.trim());

    if show_corrections
        && let Some(variant) = variants.iter().find(|v| v.was_corrected())
    {
        let _ = writeln!(
            out,
            "맞춤법 교정: {}",
            variant.corrected_text.as_deref().unwrap_or_default()
        );
        for issue in variant.grammar_issues.iter().flatten() {
            let _ = writeln!(out, "  - {issue}");
        }
    }

    out.push_str("추천 메시지 (:copy <번호>로 복사)\n");
    for (index, variant) in variants.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} [{}] {}",
            index + 1,
            variant.tone.icon(),
            variant.label,
            variant.message
        );
        let _ = writeln!(out, "   {}", variant.description);
    }

    out
}

/// Serializes the variants as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn view_json(variants: &[MessageVariant]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(variants)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use emotone_core::{RecipientCategory, generate_suggestions};

    #[test]
    fn test_numbered_list() {
        let variants = generate_suggestions("감사합니다!", RecipientCategory::Boss).unwrap();
        let out = view_suggestions("감사합니다!", &variants, true);
        assert!(out.contains("1. 👔 [공손형] 감사합니다! 🙏"));
        assert!(out.contains("2. 😊 [친근형] 감사해요! 😊🙏"));
        assert!(!out.contains("맞춤법 교정"));
    }

    #[test]
    fn test_corrections_listed() {
        let variants = generate_suggestions("확인해주세요", RecipientCategory::Friend).unwrap();
        let out = view_suggestions("확인해주세요", &variants, true);
        assert!(out.contains("맞춤법 교정: 확인해 주세요"));
        assert!(out.contains("  - '확인해주세요' → '확인해 주세요'"));

        let hidden = view_suggestions("확인해주세요", &variants, false);
        assert!(!hidden.contains("맞춤법 교정"));
    }

    #[test]
    fn test_json_shape() {
        let variants = generate_suggestions("확인해주세요", RecipientCategory::Boss).unwrap();
        let json: serde_json::Value = serde_json::from_str(&view_json(&variants).unwrap()).unwrap();
        let first = &json[0];
        assert_eq!(first["tone"], "formal");
        assert_eq!(first["label"], "공손형");
        assert_eq!(first["correctedText"], "확인해 주세요");
        assert_eq!(first["grammarIssues"][0], "'확인해주세요' → '확인해 주세요'");
        assert_eq!(first["originalTone"], "friendly");
    }
}
