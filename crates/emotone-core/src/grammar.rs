//! Spelling and spacing correction.
//!
//! Corrections come from two ordered tables: literal replacements for common
//! misspellings, then regex spacing fixes for auxiliary constructions such as
//! `할수있다` and `해주세요`. A missing sentence terminator is reported as an
//! advisory but never changes the text.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// Literal replacements, applied in order.
///
/// Entries whose two sides are equal are kept for reference and never fire.
const CORRECTIONS: &[(&str, &str)] = &[
    ("안녕하세요", "안녕하세요"),
    ("감사합니다", "감사합니다"),
    ("죄송합니다", "죄송합니다"),
    ("확인해주세요", "확인해 주세요"),
    ("부탁드립니다", "부탁드립니다"),
    ("되겠습니다", "되겠습니다"),
    ("알겠습니다", "알겠습니다"),
    ("해주세요", "해 주세요"),
    ("드릴게요", "드릴게요"),
    ("될수있습니다", "될 수 있습니다"),
    ("할수있습니다", "할 수 있습니다"),
];

/// A regex spacing fix.
struct SpacingRule {
    pattern: Regex,
    replacement: &'static str,
    /// Only fire when the match directly follows a word character.
    after_word: bool,
}

impl SpacingRule {
    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let start = caps.get(0).map_or(0, |m| m.start());
                if self.after_word && !text[..start].chars().next_back().is_some_and(is_word_char) {
                    return caps[0].to_string();
                }
                let mut out = String::new();
                caps.expand(self.replacement, &mut out);
                out
            })
            .into_owned()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Spacing fixes, applied in order after the literal table.
///
/// Patterns never consume the preceding syllable, so adjacent triggers are
/// all fixed in one pass.
#[allow(clippy::expect_used)] // literal patterns, covered by tests
static SPACING_RULES: LazyLock<Vec<SpacingRule>> = LazyLock::new(|| {
    vec![
        // 할수있다 -> 할 수 있다
        SpacingRule {
            pattern: Regex::new(r"(할|될|갈|올|볼|쓸)수(있|없)").expect("spacing pattern"),
            replacement: "${1} 수 ${2}",
            after_word: false,
        },
        // 도와주세요 -> 도와 주세요
        SpacingRule {
            pattern: Regex::new(r"(해|봐|와|가)주(세요|시|실|셔|어|고)").expect("spacing pattern"),
            replacement: "${1} 주${2}",
            after_word: true,
        },
    ]
});

/// Sentence terminators that satisfy the punctuation check.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A single finding reported by [`check_grammar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarIssue {
    /// A literal misspelling was replaced.
    Replaced {
        /// Text as written.
        wrong: &'static str,
        /// Replacement.
        correct: &'static str,
    },
    /// One or more spacing fixes were applied.
    Spacing,
    /// The text does not end with a sentence terminator. Advisory only.
    MissingPunctuation,
}

impl GrammarIssue {
    /// Returns true if this issue does not change the text.
    #[must_use]
    pub const fn is_advisory(&self) -> bool {
        matches!(self, Self::MissingPunctuation)
    }
}

impl fmt::Display for GrammarIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replaced { wrong, correct } => write!(f, "'{wrong}' → '{correct}'"),
            Self::Spacing => f.write_str("띄어쓰기 수정됨"),
            Self::MissingPunctuation => f.write_str("문장 끝에 마침표나 느낌표 추가 권장"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GrammarIssue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Output of [`check_grammar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionResult {
    /// Text after all corrections.
    pub corrected_text: String,
    /// Findings in the order they were detected.
    pub issues: Vec<GrammarIssue>,
}

impl CorrectionResult {
    /// Returns true if at least one correction changed the text.
    ///
    /// The punctuation advisory alone does not count.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.issues.iter().any(|issue| !issue.is_advisory())
    }

    /// Text downstream stages should use: the corrected text if anything
    /// changed, otherwise `original`.
    #[must_use]
    pub fn effective_text<'a>(&'a self, original: &'a str) -> &'a str {
        if self.has_changes() {
            &self.corrected_text
        } else {
            original
        }
    }
}

/// Applies the correction tables to `text`.
///
/// Literal entries are matched against the input as written, so overlapping
/// entries such as `확인해주세요` and `해주세요` are both reported. Spacing
/// fixes run on the literally corrected text.
#[must_use]
pub fn check_grammar(text: &str) -> CorrectionResult {
    let mut corrected = text.to_string();
    let mut issues = Vec::new();

    for &(wrong, correct) in CORRECTIONS {
        if wrong != correct && text.contains(wrong) {
            corrected = corrected.replace(wrong, correct);
            issues.push(GrammarIssue::Replaced { wrong, correct });
        }
    }

    let before_spacing = corrected.clone();
    for rule in SPACING_RULES.iter() {
        corrected = rule.apply(&corrected);
    }
    if corrected != before_spacing {
        issues.push(GrammarIssue::Spacing);
    }

    if !text.ends_with(TERMINATORS) {
        issues.push(GrammarIssue::MissingPunctuation);
    }

    CorrectionResult {
        corrected_text: corrected,
        issues,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_has_no_issues() {
        let result = check_grammar("안녕하세요. 감사합니다!");
        assert!(result.issues.is_empty());
        assert!(!result.has_changes());
    }

    #[test]
    fn test_identity_entries_never_flagged() {
        let result = check_grammar("죄송합니다. 알겠습니다.");
        assert!(result.issues.is_empty());
        assert_eq!(result.corrected_text, "죄송합니다. 알겠습니다.");
    }

    #[test]
    fn test_literal_correction() {
        let result = check_grammar("자료 확인해주세요.");
        assert_eq!(result.corrected_text, "자료 확인해 주세요.");
        // 해주세요 also occurs in the input, so it is reported too.
        assert_eq!(
            result.issues,
            vec![
                GrammarIssue::Replaced {
                    wrong: "확인해주세요",
                    correct: "확인해 주세요",
                },
                GrammarIssue::Replaced {
                    wrong: "해주세요",
                    correct: "해 주세요",
                },
            ]
        );
        assert!(result.has_changes());
    }

    #[test]
    fn test_literal_correction_is_global() {
        let result = check_grammar("이거 해주세요, 저거도 해주세요!");
        assert_eq!(result.corrected_text, "이거 해 주세요, 저거도 해 주세요!");
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_spacing_fix() {
        let result = check_grammar("내일 갈수있어?");
        assert_eq!(result.corrected_text, "내일 갈 수 있어?");
        assert_eq!(result.issues, vec![GrammarIssue::Spacing]);
    }

    #[test]
    fn test_spacing_issue_reported_once() {
        let result = check_grammar("볼수있어요. 도와주세요.");
        assert_eq!(result.corrected_text, "볼 수 있어요. 도와 주세요.");
        assert_eq!(result.issues, vec![GrammarIssue::Spacing]);
    }

    #[test]
    fn test_literal_takes_precedence_over_spacing() {
        let result = check_grammar("처리할수있습니다.");
        assert_eq!(result.corrected_text, "처리할 수 있습니다.");
        assert_eq!(
            result.issues,
            vec![GrammarIssue::Replaced {
                wrong: "할수있습니다",
                correct: "할 수 있습니다",
            }]
        );
    }

    #[test]
    fn test_missing_punctuation_is_advisory() {
        let result = check_grammar("회의 시작합니다");
        assert_eq!(result.issues, vec![GrammarIssue::MissingPunctuation]);
        assert!(!result.has_changes());
        assert_eq!(result.effective_text("회의 시작합니다"), "회의 시작합니다");
    }

    #[test]
    fn test_issue_display() {
        let issue = GrammarIssue::Replaced {
            wrong: "해주세요",
            correct: "해 주세요",
        };
        assert_eq!(issue.to_string(), "'해주세요' → '해 주세요'");
        assert_eq!(GrammarIssue::Spacing.to_string(), "띄어쓰기 수정됨");
    }

    #[test]
    fn test_adjacent_spacing_triggers() {
        let result = check_grammar("도와주고와주세요");
        assert_eq!(result.corrected_text, "도와 주고와 주세요");
        assert_eq!(
            result.issues,
            vec![GrammarIssue::Spacing, GrammarIssue::MissingPunctuation]
        );
    }

    #[test]
    fn test_spacing_needs_preceding_word() {
        let result = check_grammar("봐주세요.");
        assert_eq!(result.corrected_text, "봐주세요.");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_correction_is_idempotent() {
        for text in [
            "확인해주세요",
            "갈수있어 도와주세요",
            "할수있습니다 해주세요",
            "도와주고와주세요",
            "갈수있어갈수없어봐주세요",
        ] {
            let once = check_grammar(text).corrected_text;
            let twice = check_grammar(&once);
            assert_eq!(twice.corrected_text, once);
            assert!(!twice.has_changes());
        }
    }
}
