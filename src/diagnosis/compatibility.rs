//! Compatibility evaluator: two score maps → weighted report.
//!
//! Three dimensions feed the total:
//! - psychological safety (50%): similarity of cooperation and stress response
//! - communication (30%): similarity of decision style and directness
//! - complementarity (20%): planning and autonomy gaps close to [`IDEAL_GAP`]

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::{apply_rules, FeedbackRule, RuleContext, FEEDBACK_RULES};
use super::types::{AxisKey, CompatibilityResult, Feedback, ScoreMap};
use crate::error::DiagnosisResult;

/// Weight of psychological safety in the total score.
pub const PSYCHOLOGICAL_SAFETY_WEIGHT: f64 = 50.0;
/// Weight of communication in the total score.
pub const COMMUNICATION_WEIGHT: f64 = 30.0;
/// Weight of complementarity in the total score.
pub const COMPLEMENTARITY_WEIGHT: f64 = 20.0;
/// Axis gap at which complementarity peaks.
pub const IDEAL_GAP: f64 = 0.35;
/// Distance from [`IDEAL_GAP`] to the furthest possible gap.
pub const GAP_SPAN: f64 = 0.65;

/// Unrounded dimension scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// Cooperation and stress-response similarity.
    pub psychological_safety: f64,
    /// Decision-style and directness similarity.
    pub communication: f64,
    /// Planning and autonomy complementarity.
    pub complementarity: f64,
}

impl DimensionScores {
    /// Compute the three dimensions for a rater/subject pair.
    ///
    /// # Errors
    /// `MissingAxis` if either map lacks a canonical axis, `InvalidInput`
    /// if a score is outside `[0, 1]`.
    pub fn between(rater: &ScoreMap, subject: &ScoreMap) -> DiagnosisResult<Self> {
        rater.validate_complete()?;
        subject.validate_complete()?;

        let axis_similarity = |axis: AxisKey| -> DiagnosisResult<f64> {
            Ok(similarity(rater.require(axis)?, subject.require(axis)?))
        };
        let axis_complementarity = |axis: AxisKey| -> DiagnosisResult<f64> {
            Ok(complementarity(rater.require(axis)?, subject.require(axis)?))
        };

        let psychological_safety = (axis_similarity(AxisKey::Cooperation)?
            + axis_similarity(AxisKey::StressResponse)?)
            / 2.0;
        let communication = (axis_similarity(AxisKey::LogicEmpathy)?
            + axis_similarity(AxisKey::DirectIndirect)?)
            / 2.0;
        let complementarity = (axis_complementarity(AxisKey::PlanningImprovisation)?
            + axis_complementarity(AxisKey::AutonomyGuidance)?)
            / 2.0;

        Ok(Self {
            psychological_safety,
            communication,
            complementarity,
        })
    }

    /// Weighted composite score (0-100).
    pub fn total(&self) -> u8 {
        to_score(
            self.psychological_safety * PSYCHOLOGICAL_SAFETY_WEIGHT
                + self.communication * COMMUNICATION_WEIGHT
                + self.complementarity * COMPLEMENTARITY_WEIGHT,
        )
    }
}

/// `1 - |a - b|` for two normalized scores.
pub fn similarity(a: f64, b: f64) -> f64 {
    1.0 - (a - b).abs()
}

/// Reward peaking when two scores differ by [`IDEAL_GAP`], clamped to `[0, 1]`.
pub fn complementarity(a: f64, b: f64) -> f64 {
    let gap = (a - b).abs();
    (1.0 - (gap - IDEAL_GAP).abs() / GAP_SPAN).clamp(0.0, 1.0)
}

fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn to_percent(value: f64) -> u8 {
    to_score(value * 100.0)
}

/// Evaluate the compatibility of a rater (manager) with a subject (employee)
/// using the default feedback rules.
pub fn evaluate(rater: &ScoreMap, subject: &ScoreMap) -> DiagnosisResult<CompatibilityResult> {
    evaluate_with_rules(rater, subject, FEEDBACK_RULES)
}

/// Evaluate compatibility with a caller-supplied rule table.
pub fn evaluate_with_rules(
    rater: &ScoreMap,
    subject: &ScoreMap,
    rules: &[FeedbackRule],
) -> DiagnosisResult<CompatibilityResult> {
    let dimensions = DimensionScores::between(rater, subject)?;

    let ctx = RuleContext {
        psychological_safety: dimensions.psychological_safety,
        communication: dimensions.communication,
        complementarity: dimensions.complementarity,
        rater_autonomy: rater.require(AxisKey::AutonomyGuidance)?,
        subject_autonomy: subject.require(AxisKey::AutonomyGuidance)?,
    };

    let mut strengths = Vec::new();
    let mut cautions = Vec::new();
    let mut tips = Vec::new();
    for feedback in apply_rules(rules, &ctx) {
        match feedback {
            Feedback::Strength(msg) => strengths.push(msg.to_string()),
            Feedback::Caution(msg) => cautions.push(msg.to_string()),
            Feedback::Tip(msg) => tips.push(msg.to_string()),
        }
    }

    let result = CompatibilityResult {
        total_score: dimensions.total(),
        psychological_safety: to_percent(dimensions.psychological_safety),
        communication: to_percent(dimensions.communication),
        complementarity: to_percent(dimensions.complementarity),
        strengths,
        cautions,
        tips,
    };

    debug!(
        total = result.total_score,
        psychological_safety = dimensions.psychological_safety,
        communication = dimensions.communication,
        complementarity = dimensions.complementarity,
        "Evaluated compatibility"
    );

    Ok(result)
}
