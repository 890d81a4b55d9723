//! Storage layer for respondent profiles.
//!
//! A profile keeps the raw answer sequence together with the score map
//! derived from it, keyed by respondent identifier.

mod sqlite;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

pub use sqlite::SqliteStorage;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::diagnosis::{QuestionSet, ScoreMap};
use crate::error::{DiagnosisResult, StorageResult};

/// A respondent's completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique respondent identifier.
    pub respondent_id: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional contact address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Choice index per question, in question order.
    pub answers: Vec<u8>,
    /// Axis scores derived from `answers`.
    pub scores: ScoreMap,
    /// When the profile was recorded.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Score `answers` against `questions` and build a profile.
    ///
    /// # Errors
    /// Propagates scorer validation failures.
    pub fn from_answers(
        respondent_id: impl Into<String>,
        answers: Vec<u8>,
        questions: &QuestionSet,
    ) -> DiagnosisResult<Self> {
        let scores = crate::diagnosis::score(&answers, questions.questions())?;
        Ok(Self {
            respondent_id: respondent_id.into(),
            name: None,
            email: None,
            answers,
            scores,
            created_at: Utc::now(),
        })
    }

    /// Same as [`Profile::from_answers`] with a freshly generated identifier.
    pub fn anonymous(answers: Vec<u8>, questions: &QuestionSet) -> DiagnosisResult<Self> {
        Self::from_answers(Uuid::new_v4().to_string(), answers, questions)
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Persistent profile store.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert a profile, replacing any existing one with the same identifier.
    async fn save_profile(&self, profile: &Profile) -> StorageResult<()>;
    /// Get a profile by respondent identifier.
    async fn get_profile(&self, respondent_id: &str) -> StorageResult<Option<Profile>>;
    /// List profiles, newest first.
    async fn list_profiles(&self, limit: usize) -> StorageResult<Vec<Profile>>;
    /// Delete a profile. Returns whether a row was removed.
    async fn delete_profile(&self, respondent_id: &str) -> StorageResult<bool>;
}
