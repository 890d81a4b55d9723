//! Core value types shared by the scorer and the compatibility evaluator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{DiagnosisError, DiagnosisResult};

// ============================================================================
// Axes
// ============================================================================

/// One of the six work-style dimensions scored by the questionnaire.
///
/// A score of `0.0` sits at the first pole named in the variant, `1.0` at
/// the second (e.g. `LogicEmpathy`: 0 = logic, 1 = empathy).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AxisKey {
    /// Decision style: logic ↔ empathy.
    LogicEmpathy,
    /// Communication directness: direct ↔ indirect.
    DirectIndirect,
    /// Cooperation: individual ↔ team.
    Cooperation,
    /// Stress response: resilient under pressure ↔ cautious.
    StressResponse,
    /// Planning style: planned ↔ improvised.
    PlanningImprovisation,
    /// Autonomy preference: autonomous ↔ guided.
    AutonomyGuidance,
}

impl AxisKey {
    /// All axes in canonical order.
    pub const ALL: [AxisKey; 6] = [
        AxisKey::LogicEmpathy,
        AxisKey::DirectIndirect,
        AxisKey::Cooperation,
        AxisKey::StressResponse,
        AxisKey::PlanningImprovisation,
        AxisKey::AutonomyGuidance,
    ];

    /// Wire name of the axis.
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisKey::LogicEmpathy => "logic_empathy",
            AxisKey::DirectIndirect => "direct_indirect",
            AxisKey::Cooperation => "cooperation",
            AxisKey::StressResponse => "stress_response",
            AxisKey::PlanningImprovisation => "planning_improvisation",
            AxisKey::AutonomyGuidance => "autonomy_guidance",
        }
    }
}

impl std::fmt::Display for AxisKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AxisKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        AxisKey::ALL
            .iter()
            .copied()
            .find(|axis| axis.as_str() == name)
            .ok_or_else(|| format!("Unknown axis: {}", s))
    }
}

// ============================================================================
// Questions
// ============================================================================

/// A single binary-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier.
    pub id: u32,
    /// Axis this question contributes to.
    pub axis: AxisKey,
    /// Prompt shown to the respondent.
    pub text: String,
    /// The two choice labels.
    pub choices: [String; 2],
    /// Axis contribution of each choice, positionally aligned with `choices`.
    /// Each weight is 0 or 1.
    pub weights: [u8; 2],
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: u32,
        axis: AxisKey,
        text: impl Into<String>,
        choices: [&str; 2],
        weights: [u8; 2],
    ) -> Self {
        Self {
            id,
            axis,
            text: text.into(),
            choices: choices.map(str::to_string),
            weights,
        }
    }
}

// ============================================================================
// Score map
// ============================================================================

/// Per-respondent mapping of axis to a normalized score in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<AxisKey, f64>);

impl ScoreMap {
    /// Create an empty score map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the score for an axis, returning the builder.
    pub fn with(mut self, axis: AxisKey, score: f64) -> Self {
        self.0.insert(axis, score);
        self
    }

    /// Build a map with every canonical axis set to `score`.
    pub fn uniform(score: f64) -> Self {
        AxisKey::ALL.iter().map(|&axis| (axis, score)).collect()
    }

    /// Score for an axis, if present.
    pub fn get(&self, axis: AxisKey) -> Option<f64> {
        self.0.get(&axis).copied()
    }

    /// Score for an axis, failing with `MissingAxis` if absent.
    pub fn require(&self, axis: AxisKey) -> DiagnosisResult<f64> {
        self.get(axis).ok_or(DiagnosisError::MissingAxis { axis })
    }

    /// Whether the map holds a score for the axis.
    pub fn contains(&self, axis: AxisKey) -> bool {
        self.0.contains_key(&axis)
    }

    /// Iterate over `(axis, score)` pairs in canonical axis order.
    pub fn iter(&self) -> impl Iterator<Item = (AxisKey, f64)> + '_ {
        self.0.iter().map(|(&axis, &score)| (axis, score))
    }

    /// Number of scored axes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no axis is scored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that all six canonical axes are present with finite values in `[0, 1]`.
    pub fn validate_complete(&self) -> DiagnosisResult<()> {
        for axis in AxisKey::ALL {
            let score = self.require(axis)?;
            if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                return Err(DiagnosisError::InvalidInput {
                    message: format!("score for {} must be within [0, 1], got {}", axis, score),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(AxisKey, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (AxisKey, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Compatibility output
// ============================================================================

/// Categorized piece of qualitative feedback produced by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Something that works well in the pairing.
    Strength(&'static str),
    /// Something the pair should watch out for.
    Caution(&'static str),
    /// Actionable advice.
    Tip(&'static str),
}

/// Compatibility report between a rater and a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Weighted composite score (0-100).
    pub total_score: u8,
    /// Psychological safety sub-score (0-100).
    pub psychological_safety: u8,
    /// Communication sub-score (0-100).
    pub communication: u8,
    /// Complementarity sub-score (0-100).
    pub complementarity: u8,
    /// Strengths of the pairing, in rule order.
    pub strengths: Vec<String>,
    /// Cautions for the pairing, in rule order.
    pub cautions: Vec<String>,
    /// Advice for the pairing, in rule order.
    pub tips: Vec<String>,
}
