//! # Workstyle Compat
//!
//! A short work-style questionnaire engine: twelve binary-choice questions
//! are scored into six normalized axes, and two respondents' scores (a
//! manager and an employee) are compared into a weighted compatibility
//! report with qualitative feedback.
//!
//! ## Features
//!
//! - **Axis Scoring**: answer sequence → per-axis mean in `[0, 1]`
//! - **Compatibility**: psychological safety (50%), communication (30%),
//!   complementarity (20%)
//! - **Feedback Rules**: ordered predicate → strength/caution/tip table
//! - **Profile Storage**: SQLite persistence of answers and scores
//!
//! ## Architecture
//!
//! ```text
//! CLI → Profile Store (SQLite)
//!  ↓
//! Diagnosis engine (pure): score() / evaluate()
//! ```
//!
//! ## Example
//!
//! ```
//! use workstyle_compat::diagnosis::{evaluate, score, QuestionSet};
//!
//! let questions = QuestionSet::canonical();
//! let manager = score(&[0; 12], questions.questions()).unwrap();
//! let employee = score(&[1; 12], questions.questions()).unwrap();
//!
//! let report = evaluate(&manager, &employee).unwrap();
//! assert!(report.total_score <= 100);
//! ```

#![warn(missing_docs)]

/// Command-line interface commands.
pub mod cli;
/// Configuration management.
pub mod config;
/// Scoring and compatibility engine.
pub mod diagnosis;
/// Error types and result aliases for the application.
pub mod error;
/// SQLite storage layer for profiles.
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult, DiagnosisError};
