use thiserror::Error;

use crate::diagnosis::AxisKey;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or unreadable configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong.
        message: String,
    },

    /// Scoring or evaluation failure.
    #[error("Diagnosis error: {0}")]
    Diagnosis(#[from] DiagnosisError),

    /// Profile store failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Scoring and compatibility engine errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosisError {
    /// Answers or scores that violate the input contract.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong.
        message: String,
    },

    /// A score map lacks one of the six axes.
    #[error("Missing axis: {axis}")]
    MissingAxis {
        /// The absent axis.
        axis: AxisKey,
    },

    /// Malformed question set.
    #[error("Invalid question set: {message}")]
    InvalidQuestionSet {
        /// What was wrong.
        message: String,
    },
}

/// Storage layer errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Opening the database failed.
    #[error("Database connection failed: {message}")]
    Connection {
        /// Underlying cause.
        message: String,
    },

    /// A stored row could not be decoded.
    #[error("Query failed: {message}")]
    Query {
        /// Underlying cause.
        message: String,
    },

    /// No profile with the given identifier.
    #[error("Profile not found: {respondent_id}")]
    ProfileNotFound {
        /// The requested identifier.
        respondent_id: String,
    },

    /// Schema migration failed.
    #[error("Migration failed: {message}")]
    Migration {
        /// Underlying cause.
        message: String,
    },

    /// JSON column encoding or decoding failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error reported by SQLx.
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for engine operations
pub type DiagnosisResult<T> = Result<T, DiagnosisError>;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
