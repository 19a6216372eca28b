//! # emotone-core
//!
//! Rule-driven tone adjustment and emoji decoration for Korean messages.
//!
//! ## Features
//!
//! - **Spelling and spacing**: Literal and regex correction tables
//! - **Tone detection**: Formal, friendly and casual sentence endings
//! - **Tone rewriting**: Ending rewrites chosen by target tone and recipient
//! - **Emoji decoration**: Time, weekday, sentiment and intent-based emoji
//! - **Variants**: Fixed per-recipient variant plans
//!
//! ## Quick Start
//!
//! ```ignore
//! use emotone_core::{RecipientCategory, generate_suggestions};
//!
//! let variants = generate_suggestions(
//!     "회의는 내일 오전 10시로 변경되었습니다",
//!     RecipientCategory::Boss,
//! )?;
//!
//! for variant in &variants {
//!     println!("[{}] {}", variant.label, variant.message);
//! }
//! ```
//!
//! ### Individual Stages
//!
//! ```ignore
//! use emotone_core::grammar::check_grammar;
//! use emotone_core::tone::adjust_tone;
//! use emotone_core::{RecipientCategory, ToneKind};
//!
//! let correction = check_grammar("자료 확인해주세요");
//! assert!(correction.has_changes());
//!
//! let adjusted = adjust_tone(&correction.corrected_text, ToneKind::Formal, RecipientCategory::Boss);
//! println!("{}", adjusted.adjusted_message);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
mod model;
mod suggest;

pub mod emoji;
pub mod grammar;
pub mod intent;
pub mod tone;

pub use error::{Error, Result, ValidationError, validate_message};
pub use grammar::{CorrectionResult, GrammarIssue};
pub use intent::{Intent, IntentContext};
pub use model::{DetectedTone, MessageVariant, RecipientCategory, ToneKind, UnknownRecipient};
pub use suggest::{VariantPlan, generate_suggestions, plan_for};
pub use tone::ToneAdjustment;
