//! Unit tests for profile construction and serialization.

use super::*;
use crate::diagnosis::AxisKey;
use crate::error::DiagnosisError;

#[test]
fn test_profile_from_answers() {
    let questions = QuestionSet::canonical();
    let profile = Profile::from_answers("emp-1", vec![1; 12], &questions).unwrap();

    assert_eq!(profile.respondent_id, "emp-1");
    assert!(profile.name.is_none());
    assert_eq!(profile.answers, vec![1; 12]);
    assert_eq!(profile.scores.len(), 6);
    assert_eq!(profile.scores.get(AxisKey::AutonomyGuidance), Some(1.0));
}

#[test]
fn test_profile_from_invalid_answers() {
    let questions = QuestionSet::canonical();
    let err = Profile::from_answers("emp-1", vec![0; 5], &questions).unwrap_err();
    assert!(matches!(err, DiagnosisError::InvalidInput { .. }));
}

#[test]
fn test_profile_anonymous_generates_uuid() {
    let questions = QuestionSet::canonical();
    let a = Profile::anonymous(vec![0; 12], &questions).unwrap();
    let b = Profile::anonymous(vec![0; 12], &questions).unwrap();

    assert_ne!(a.respondent_id, b.respondent_id);
    assert!(Uuid::parse_str(&a.respondent_id).is_ok());
}

#[test]
fn test_profile_with_name() {
    let questions = QuestionSet::canonical();
    let profile = Profile::from_answers("mgr-1", vec![0; 12], &questions)
        .unwrap()
        .with_name("Manager")
        .with_email("mgr@example.com");
    assert_eq!(profile.name.as_deref(), Some("Manager"));
    assert_eq!(profile.email.as_deref(), Some("mgr@example.com"));
}

#[test]
fn test_profile_serialization() {
    let questions = QuestionSet::canonical();
    let profile = Profile::from_answers("emp-2", vec![0; 12], &questions).unwrap();

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["respondent_id"], "emp-2");
    assert!(json.get("name").is_none());
    assert!(json.get("email").is_none());
    assert_eq!(json["scores"]["cooperation"], 1.0);
    assert_eq!(json["answers"].as_array().unwrap().len(), 12);

    let parsed: Profile = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, profile);
}
