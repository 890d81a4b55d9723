//! Declarative feedback rules for compatibility reports.
//!
//! Rules are evaluated in table order; every rule whose predicate holds
//! contributes its outcomes once. Thresholds are strict inequalities.

use super::types::Feedback;

/// Strength: similar cooperation and stress handling.
pub const SAFETY_STRENGTH: &str = "similar cooperation/stress style, safe working relationship";
/// Caution: cooperation or stress handling diverges.
pub const SAFETY_CAUTION: &str = "differing stress/cooperation styles";
/// Tip paired with [`SAFETY_CAUTION`].
pub const SAFETY_TIP: &str = "hold regular 1:1s to check in";
/// Strength: compatible communication.
pub const COMMUNICATION_STRENGTH: &str = "compatible communication style, smooth exchange";
/// Caution: feedback delivery diverges.
pub const COMMUNICATION_CAUTION: &str = "differing feedback delivery styles";
/// Tip paired with [`COMMUNICATION_CAUTION`].
pub const COMMUNICATION_TIP: &str = "tailor feedback to the receiver's preference";
/// Strength: planning/autonomy differ by a healthy margin.
pub const COMPLEMENTARITY_STRENGTH: &str =
    "good balance of planning and autonomy, complementary";
/// Tip: the subject wants guidance but the rater leans hands-off.
pub const GUIDED_SUPPORT_TIP: &str = "subject wants guided support; check in regularly";
/// Tip: the subject is autonomous but the rater leans hands-on.
pub const DELEGATE_TIP: &str = "subject is autonomous; delegate with trust";

/// Values a rule predicate can inspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleContext {
    /// Psychological safety in `[0, 1]`.
    pub psychological_safety: f64,
    /// Communication in `[0, 1]`.
    pub communication: f64,
    /// Complementarity in `[0, 1]`.
    pub complementarity: f64,
    /// Rater's autonomy-guidance score.
    pub rater_autonomy: f64,
    /// Subject's autonomy-guidance score.
    pub subject_autonomy: f64,
}

/// A predicate paired with the feedback it emits.
#[derive(Clone, Copy)]
pub struct FeedbackRule {
    /// Stable rule name, used in logs.
    pub name: &'static str,
    /// Whether the rule fires.
    pub applies: fn(&RuleContext) -> bool,
    /// Feedback emitted when the rule fires, in order.
    pub outcomes: &'static [Feedback],
}

impl std::fmt::Debug for FeedbackRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackRule")
            .field("name", &self.name)
            .field("outcomes", &self.outcomes)
            .finish()
    }
}

fn high_safety(ctx: &RuleContext) -> bool {
    ctx.psychological_safety > 0.7
}

fn low_safety(ctx: &RuleContext) -> bool {
    ctx.psychological_safety < 0.4
}

fn high_communication(ctx: &RuleContext) -> bool {
    ctx.communication > 0.7
}

fn low_communication(ctx: &RuleContext) -> bool {
    ctx.communication < 0.4
}

fn high_complementarity(ctx: &RuleContext) -> bool {
    ctx.complementarity > 0.6
}

// Direction-sensitive: the subject's preference against the rater's posture.
fn subject_wants_guidance(ctx: &RuleContext) -> bool {
    ctx.subject_autonomy > 0.6 && ctx.rater_autonomy < 0.4
}

fn subject_is_autonomous(ctx: &RuleContext) -> bool {
    ctx.subject_autonomy < 0.4 && ctx.rater_autonomy > 0.6
}

/// Default rule table.
pub const FEEDBACK_RULES: &[FeedbackRule] = &[
    FeedbackRule {
        name: "high_psychological_safety",
        applies: high_safety,
        outcomes: &[Feedback::Strength(SAFETY_STRENGTH)],
    },
    FeedbackRule {
        name: "low_psychological_safety",
        applies: low_safety,
        outcomes: &[Feedback::Caution(SAFETY_CAUTION), Feedback::Tip(SAFETY_TIP)],
    },
    FeedbackRule {
        name: "high_communication",
        applies: high_communication,
        outcomes: &[Feedback::Strength(COMMUNICATION_STRENGTH)],
    },
    FeedbackRule {
        name: "low_communication",
        applies: low_communication,
        outcomes: &[
            Feedback::Caution(COMMUNICATION_CAUTION),
            Feedback::Tip(COMMUNICATION_TIP),
        ],
    },
    FeedbackRule {
        name: "high_complementarity",
        applies: high_complementarity,
        outcomes: &[Feedback::Strength(COMPLEMENTARITY_STRENGTH)],
    },
    FeedbackRule {
        name: "subject_wants_guidance",
        applies: subject_wants_guidance,
        outcomes: &[Feedback::Tip(GUIDED_SUPPORT_TIP)],
    },
    FeedbackRule {
        name: "subject_is_autonomous",
        applies: subject_is_autonomous,
        outcomes: &[Feedback::Tip(DELEGATE_TIP)],
    },
];

/// Evaluate `rules` in order and collect the outcomes of those that fire.
pub fn apply_rules(rules: &[FeedbackRule], ctx: &RuleContext) -> Vec<Feedback> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .inspect(|rule| tracing::trace!(rule = rule.name, "Feedback rule fired"))
        .flat_map(|rule| rule.outcomes.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(safety: f64, communication: f64, complementarity: f64) -> RuleContext {
        RuleContext {
            psychological_safety: safety,
            communication,
            complementarity,
            rater_autonomy: 0.5,
            subject_autonomy: 0.5,
        }
    }

    #[test]
    fn test_middle_band_fires_nothing() {
        assert!(apply_rules(FEEDBACK_RULES, &ctx(0.5, 0.5, 0.5)).is_empty());
    }

    #[test]
    fn test_boundaries_are_strict() {
        assert!(apply_rules(FEEDBACK_RULES, &ctx(0.7, 0.7, 0.6)).is_empty());
        assert!(apply_rules(FEEDBACK_RULES, &ctx(0.4, 0.4, 0.6)).is_empty());

        // (rater, subject) pairs sitting exactly on an autonomy threshold
        for (rater, subject) in [(0.4, 1.0), (0.0, 0.6), (0.6, 0.0), (1.0, 0.4)] {
            let edge = RuleContext {
                rater_autonomy: rater,
                subject_autonomy: subject,
                ..ctx(0.5, 0.5, 0.5)
            };
            assert!(
                apply_rules(FEEDBACK_RULES, &edge).is_empty(),
                "rater {} / subject {} should not fire an autonomy tip",
                rater,
                subject
            );
        }
    }

    #[test]
    fn test_all_strengths_in_table_order() {
        let feedback = apply_rules(FEEDBACK_RULES, &ctx(1.0, 1.0, 1.0));
        assert_eq!(
            feedback,
            vec![
                Feedback::Strength(SAFETY_STRENGTH),
                Feedback::Strength(COMMUNICATION_STRENGTH),
                Feedback::Strength(COMPLEMENTARITY_STRENGTH),
            ]
        );
    }

    #[test]
    fn test_low_scores_emit_caution_and_tip() {
        let feedback = apply_rules(FEEDBACK_RULES, &ctx(0.0, 0.0, 0.0));
        assert_eq!(
            feedback,
            vec![
                Feedback::Caution(SAFETY_CAUTION),
                Feedback::Tip(SAFETY_TIP),
                Feedback::Caution(COMMUNICATION_CAUTION),
                Feedback::Tip(COMMUNICATION_TIP),
            ]
        );
    }

    #[test]
    fn test_autonomy_rules_are_directional() {
        let guided = RuleContext {
            rater_autonomy: 0.0,
            subject_autonomy: 1.0,
            ..ctx(0.5, 0.5, 0.5)
        };
        assert_eq!(
            apply_rules(FEEDBACK_RULES, &guided),
            vec![Feedback::Tip(GUIDED_SUPPORT_TIP)]
        );

        let autonomous = RuleContext {
            rater_autonomy: 1.0,
            subject_autonomy: 0.0,
            ..ctx(0.5, 0.5, 0.5)
        };
        assert_eq!(
            apply_rules(FEEDBACK_RULES, &autonomous),
            vec![Feedback::Tip(DELEGATE_TIP)]
        );
    }

    fn always(_: &RuleContext) -> bool {
        true
    }

    #[test]
    fn test_custom_rule_table() {
        const ALWAYS: &[FeedbackRule] = &[FeedbackRule {
            name: "always",
            applies: always,
            outcomes: &[Feedback::Tip("always")],
        }];
        assert_eq!(
            apply_rules(ALWAYS, &ctx(0.5, 0.5, 0.5)),
            vec![Feedback::Tip("always")]
        );
    }
}
