//! Work-style diagnosis engine.
//!
//! This module provides:
//! - Per-axis scoring of binary-choice answer sequences
//! - Weighted compatibility evaluation between a rater and a subject
//! - A declarative feedback rule table for qualitative report entries
//!
//! Everything here is pure: no I/O, no shared state.

mod compatibility;
mod questions;
mod rules;
mod scorer;
mod types;

pub use compatibility::{
    complementarity, evaluate, evaluate_with_rules, similarity, DimensionScores,
    COMMUNICATION_WEIGHT, COMPLEMENTARITY_WEIGHT, GAP_SPAN, IDEAL_GAP,
    PSYCHOLOGICAL_SAFETY_WEIGHT,
};
pub use questions::{axis_label, AxisLabel, QuestionSet};
pub use rules::{
    apply_rules, FeedbackRule, RuleContext, COMMUNICATION_CAUTION, COMMUNICATION_STRENGTH,
    COMMUNICATION_TIP, COMPLEMENTARITY_STRENGTH, DELEGATE_TIP, FEEDBACK_RULES,
    GUIDED_SUPPORT_TIP, SAFETY_CAUTION, SAFETY_STRENGTH, SAFETY_TIP,
};
pub use scorer::{score, AxisScorer};
pub use types::{AxisKey, CompatibilityResult, Feedback, Question, ScoreMap};
