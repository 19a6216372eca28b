//! Variant generation.

use tracing::debug;

use crate::emoji::decorate;
use crate::error::{Result, validate_message};
use crate::grammar::check_grammar;
use crate::intent::IntentContext;
use crate::model::{MessageVariant, RecipientCategory, ToneKind};
use crate::tone::adjust_tone;

/// One entry of a recipient's variant plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPlan {
    /// Tone to render.
    pub tone: ToneKind,
    /// Why this tone suits the recipient.
    pub description: &'static str,
}

const BOSS_PLAN: &[VariantPlan] = &[
    VariantPlan {
        tone: ToneKind::Formal,
        description: "상사에게 정중하고 예의바른 톤",
    },
    VariantPlan {
        tone: ToneKind::Friendly,
        description: "따뜻하면서도 예의를 갖춘 톤",
    },
];

const COLLEAGUE_PLAN: &[VariantPlan] = &[
    VariantPlan {
        tone: ToneKind::Friendly,
        description: "동료에게 친근하고 협조적인 톤",
    },
    VariantPlan {
        tone: ToneKind::Casual,
        description: "편안하고 자연스러운 톤",
    },
];

const FRIEND_PLAN: &[VariantPlan] = &[
    VariantPlan {
        tone: ToneKind::Friendly,
        description: "따뜻하고 다정한 톤",
    },
    VariantPlan {
        tone: ToneKind::Casual,
        description: "편안하고 재미있는 톤",
    },
];

/// The tones rendered for a recipient, in output order.
#[must_use]
pub const fn plan_for(recipient: RecipientCategory) -> &'static [VariantPlan] {
    match recipient {
        RecipientCategory::Boss => BOSS_PLAN,
        RecipientCategory::Colleague => COLLEAGUE_PLAN,
        RecipientCategory::Friend => FRIEND_PLAN,
    }
}

/// Generates tone variants of `message` for `recipient`.
///
/// The message is trimmed, corrected once, and then rendered once per tone in
/// the recipient's plan. Correction details are attached to every variant
/// only when a correction actually changed the text.
///
/// # Errors
///
/// Returns [`crate::ValidationError::EmptyMessage`] (wrapped in
/// [`crate::Error`]) if the message is empty or whitespace-only.
pub fn generate_suggestions(
    message: &str,
    recipient: RecipientCategory,
) -> Result<Vec<MessageVariant>> {
    let original = validate_message(message)?;
    let correction = check_grammar(original);
    let context = IntentContext::detect(original);
    let base = correction.effective_text(original);

    let (corrected_text, grammar_issues) = if correction.has_changes() {
        (
            Some(correction.corrected_text.clone()),
            Some(correction.issues.clone()),
        )
    } else {
        (None, None)
    };

    let variants: Vec<MessageVariant> = plan_for(recipient)
        .iter()
        .map(|plan| {
            let adjustment = adjust_tone(base, plan.tone, recipient);
            MessageVariant {
                tone: plan.tone,
                label: plan.tone.label(),
                message: decorate(&adjustment.adjusted_message, plan.tone, &context),
                description: plan.description,
                corrected_text: corrected_text.clone(),
                grammar_issues: grammar_issues.clone(),
                tone_changed: adjustment.tone_changed,
                original_tone: adjustment.original_tone,
            }
        })
        .collect();

    debug!(
        recipient = %recipient,
        intent = %context.primary(),
        corrected = correction.has_changes(),
        variants = variants.len(),
        "Generated suggestions"
    );

    Ok(variants)
}
