//! Axis scorer: answer sequence → per-axis score map.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::questions::QuestionSet;
use super::types::{AxisKey, Question, ScoreMap};
use crate::error::{DiagnosisError, DiagnosisResult};

/// Score an answer sequence against an ordered question sequence.
///
/// Each answer is a choice index (0 or 1) for the question at the same
/// position. The weight of the chosen option is accumulated per axis and
/// each axis score is the mean of its contributions, so the output holds
/// exactly the axes that appear in `questions`.
///
/// # Errors
/// `InvalidInput` if the lengths differ or an answer is not 0 or 1;
/// `InvalidQuestionSet` if a selected weight is not binary.
pub fn score(answers: &[u8], questions: &[Question]) -> DiagnosisResult<ScoreMap> {
    if answers.len() != questions.len() {
        warn!(
            answers = answers.len(),
            questions = questions.len(),
            "Answer count does not match question count"
        );
        return Err(DiagnosisError::InvalidInput {
            message: format!(
                "expected {} answers, got {}",
                questions.len(),
                answers.len()
            ),
        });
    }

    // axis -> (sum of weights, question count)
    let mut totals: BTreeMap<AxisKey, (u32, u32)> = BTreeMap::new();

    for (position, (question, &answer)) in questions.iter().zip(answers).enumerate() {
        let weight = *question
            .weights
            .get(usize::from(answer))
            .ok_or_else(|| DiagnosisError::InvalidInput {
                message: format!(
                    "answer {} for question {} must be 0 or 1, got {}",
                    position + 1,
                    question.id,
                    answer
                ),
            })?;

        if weight > 1 {
            return Err(DiagnosisError::InvalidQuestionSet {
                message: format!("question {} has non-binary weight {}", question.id, weight),
            });
        }

        let entry = totals.entry(question.axis).or_insert((0, 0));
        entry.0 += u32::from(weight);
        entry.1 += 1;
    }

    let scores: ScoreMap = totals
        .into_iter()
        .map(|(axis, (sum, count))| (axis, f64::from(sum) / f64::from(count)))
        .collect();

    debug!(scores = ?scores, "Computed axis scores");
    Ok(scores)
}

/// Scorer bound to an injected question set.
#[derive(Debug, Clone, Default)]
pub struct AxisScorer {
    questions: QuestionSet,
}

impl AxisScorer {
    /// Create a scorer for the given question set.
    pub fn new(questions: QuestionSet) -> Self {
        Self { questions }
    }

    /// The question set answers are scored against.
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Score an answer sequence against this scorer's question set.
    pub fn score(&self, answers: &[u8]) -> DiagnosisResult<ScoreMap> {
        score(answers, self.questions.questions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> QuestionSet {
        QuestionSet::canonical()
    }

    #[test]
    fn test_all_zeros_canonical() {
        let scores = score(&[0; 12], canonical().questions()).unwrap();
        assert_eq!(scores.len(), 6);
        assert_eq!(scores.get(AxisKey::LogicEmpathy), Some(0.0));
        assert_eq!(scores.get(AxisKey::DirectIndirect), Some(0.0));
        // questions 5 and 6 carry reversed weights
        assert_eq!(scores.get(AxisKey::Cooperation), Some(1.0));
        // question 8 is reversed, question 7 is not
        assert_eq!(scores.get(AxisKey::StressResponse), Some(0.5));
        assert_eq!(scores.get(AxisKey::PlanningImprovisation), Some(0.0));
        assert_eq!(scores.get(AxisKey::AutonomyGuidance), Some(0.0));
    }

    #[test]
    fn test_all_ones_canonical() {
        let scores = score(&[1; 12], canonical().questions()).unwrap();
        assert_eq!(scores.get(AxisKey::LogicEmpathy), Some(1.0));
        assert_eq!(scores.get(AxisKey::Cooperation), Some(0.0));
        assert_eq!(scores.get(AxisKey::StressResponse), Some(0.5));
        assert_eq!(scores.get(AxisKey::AutonomyGuidance), Some(1.0));
    }

    #[test]
    fn test_mixed_answers() {
        let answers = [0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1];
        let scores = score(&answers, canonical().questions()).unwrap();
        assert_eq!(scores.get(AxisKey::LogicEmpathy), Some(0.5));
        assert_eq!(scores.get(AxisKey::DirectIndirect), Some(1.0));
        assert_eq!(scores.get(AxisKey::Cooperation), Some(0.5));
        assert_eq!(scores.get(AxisKey::StressResponse), Some(0.5));
        assert_eq!(scores.get(AxisKey::PlanningImprovisation), Some(0.5));
        assert_eq!(scores.get(AxisKey::AutonomyGuidance), Some(1.0));
    }

    #[test]
    fn test_length_mismatch() {
        let err = score(&[0; 11], canonical().questions()).unwrap_err();
        assert_eq!(
            err,
            DiagnosisError::InvalidInput {
                message: "expected 12 answers, got 11".to_string()
            }
        );
        assert!(score(&[0; 13], canonical().questions()).is_err());
    }

    #[test]
    fn test_out_of_range_answer() {
        let mut answers = [0u8; 12];
        answers[4] = 2;
        let err = score(&answers, canonical().questions()).unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidInput { .. }));
        assert!(err.to_string().contains("question 5"));
    }

    #[test]
    fn test_output_keys_match_question_axes() {
        let questions = vec![
            Question::new(1, AxisKey::Cooperation, "a", ["x", "y"], [0, 1]),
            Question::new(2, AxisKey::Cooperation, "b", ["x", "y"], [0, 1]),
            Question::new(3, AxisKey::Cooperation, "c", ["x", "y"], [0, 1]),
        ];
        let scores = score(&[1, 0, 1], &questions).unwrap();
        assert_eq!(scores.len(), 1);
        let value = scores.get(AxisKey::Cooperation).unwrap();
        assert!((value - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_unchecked_non_binary_weight() {
        let questions = vec![Question::new(9, AxisKey::Cooperation, "a", ["x", "y"], [0, 3])];
        assert!(matches!(
            score(&[1], &questions),
            Err(DiagnosisError::InvalidQuestionSet { .. })
        ));
    }

    #[test]
    fn test_axis_scorer_uses_injected_set() {
        let set = QuestionSet::new(vec![Question::new(
            1,
            AxisKey::AutonomyGuidance,
            "Want check-ins?",
            ["no", "yes"],
            [0, 1],
        )])
        .unwrap();
        let scorer = AxisScorer::new(set);
        let scores = scorer.score(&[1]).unwrap();
        assert_eq!(scores.get(AxisKey::AutonomyGuidance), Some(1.0));
        assert!(scorer.score(&[0; 12]).is_err());
    }
}
