//! Question sets and axis display labels.
//!
//! The canonical 12-question set is built by [`QuestionSet::canonical`];
//! alternative sets of the same shape can be loaded from JSON and are
//! validated before use.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use super::types::{AxisKey, Question};
use crate::error::{DiagnosisError, DiagnosisResult};

/// Validated, ordered sequence of questions fed to the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a question set, rejecting empty sets, duplicate ids and
    /// non-binary weights.
    pub fn new(questions: Vec<Question>) -> DiagnosisResult<Self> {
        if questions.is_empty() {
            return Err(DiagnosisError::InvalidQuestionSet {
                message: "question set must contain at least one question".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(DiagnosisError::InvalidQuestionSet {
                    message: format!("duplicate question id {}", question.id),
                });
            }
            if question.weights.iter().any(|&w| w > 1) {
                return Err(DiagnosisError::InvalidQuestionSet {
                    message: format!(
                        "question {} has non-binary weights {:?}",
                        question.id, question.weights
                    ),
                });
            }
        }

        Ok(Self { questions })
    }

    /// Parse and validate a question set from a JSON array of questions.
    pub fn from_json(json: &str) -> DiagnosisResult<Self> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(|e| DiagnosisError::InvalidQuestionSet {
                message: format!("failed to parse question set: {}", e),
            })?;
        Self::new(questions)
    }

    /// Load a question set from a JSON file.
    pub fn from_path(path: &Path) -> DiagnosisResult<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|e| DiagnosisError::InvalidQuestionSet {
                message: format!("failed to read {}: {}", path.display(), e),
            })?;
        Self::from_json(&json)
    }

    /// The fixed 12-question work-style questionnaire, two questions per axis.
    pub fn canonical() -> Self {
        use AxisKey::*;

        let questions = vec![
            Question::new(
                1,
                LogicEmpathy,
                "When making a decision, what do you weigh most?",
                ["Data and logical grounds", "People's feelings and the team mood"],
                [0, 1],
            ),
            Question::new(
                2,
                LogicEmpathy,
                "When solving a problem, what do you do first?",
                [
                    "Analyze the cause and form a hypothesis",
                    "Hear out the members and coordinate",
                ],
                [0, 1],
            ),
            Question::new(
                3,
                DirectIndirect,
                "How do you deliver feedback?",
                ["Frankly and clearly", "Gently, reading the other person"],
                [0, 1],
            ),
            Question::new(
                4,
                DirectIndirect,
                "How do you handle a clash of opinions?",
                [
                    "Argue it out and settle it on the spot",
                    "Take it away, sort it out, then talk",
                ],
                [0, 1],
            ),
            Question::new(
                5,
                Cooperation,
                "Which way do you prefer to run a project?",
                ["Together with the team", "Focused, at my own pace"],
                [1, 0],
            ),
            Question::new(
                6,
                Cooperation,
                "What role do you usually take in meetings?",
                [
                    "Speak up actively and move the room",
                    "Speak when needed and support",
                ],
                [1, 0],
            ),
            Question::new(
                7,
                StressResponse,
                "What happens to you under pressure?",
                [
                    "I get fired up and perform better",
                    "I spend effort staying calm",
                ],
                [0, 1],
            ),
            Question::new(
                8,
                StressResponse,
                "How do you deal with stress?",
                ["Talk it out with someone", "Sort it out alone and settle down"],
                [1, 0],
            ),
            Question::new(
                9,
                PlanningImprovisation,
                "Which is closer to how you work on tasks?",
                ["Plan first, then start", "Start moving and adjust as I go"],
                [0, 1],
            ),
            Question::new(
                10,
                PlanningImprovisation,
                "How do you feel when plans change?",
                [
                    "Troubled, I'd rather decide in advance",
                    "Fine, I can adapt flexibly",
                ],
                [0, 1],
            ),
            Question::new(
                11,
                AutonomyGuidance,
                "How much support do you want from your manager?",
                [
                    "Minimal, only when needed",
                    "Regular progress checks and consultation",
                ],
                [0, 1],
            ),
            Question::new(
                12,
                AutonomyGuidance,
                "When given a new assignment, what do you do?",
                [
                    "Research and try it myself first",
                    "Confirm the direction before proceeding",
                ],
                [0, 1],
            ),
        ];

        Self { questions }
    }

    /// Questions in answer order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Axes covered by this set.
    pub fn axes(&self) -> BTreeSet<AxisKey> {
        self.questions.iter().map(|q| q.axis).collect()
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Display name and pole labels for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisLabel {
    /// Axis display name.
    pub name: &'static str,
    /// Label for a score of 0.
    pub low: &'static str,
    /// Label for a score of 1.
    pub high: &'static str,
}

/// Display label for an axis.
pub fn axis_label(axis: AxisKey) -> AxisLabel {
    let (name, low, high) = match axis {
        AxisKey::LogicEmpathy => ("Decision style", "Logic-driven", "Empathy-driven"),
        AxisKey::DirectIndirect => ("Communication", "Direct", "Indirect"),
        AxisKey::Cooperation => ("Cooperation", "Individual-oriented", "Team-oriented"),
        AxisKey::StressResponse => ("Stress response", "Thrives under pressure", "Handles with care"),
        AxisKey::PlanningImprovisation => ("Working style", "Plan-first", "Improvised, flexible"),
        AxisKey::AutonomyGuidance => ("Support preference", "Autonomous", "Wants guidance"),
    };
    AxisLabel { name, low, high }
}
