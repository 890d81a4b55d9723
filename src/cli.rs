//! Command-line interface commands.
//!
//! Each command returns a [`CliResult`] carrying the text (or JSON) to
//! print and the process exit code.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use crate::diagnosis::{axis_label, evaluate, CompatibilityResult, QuestionSet};
use crate::error::{AppResult, StorageError};
use crate::storage::{Profile, ProfileStore};

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════\n\n";

/// Work-style diagnosis and manager/employee compatibility reports.
#[derive(Parser, Debug)]
#[command(name = "workstyle-compat", version, about)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the active questions
    Questions,

    /// Score an answer sequence and save it as a profile
    Take {
        /// Comma-separated choice indices (0 or 1), one per question
        #[arg(long, value_delimiter = ',', required = true)]
        answers: Vec<u8>,

        /// Respondent identifier (a UUID is generated when omitted)
        #[arg(long)]
        respondent: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Contact address
        #[arg(long)]
        email: Option<String>,
    },

    /// Show a stored profile
    Show {
        /// Respondent identifier
        respondent: String,
    },

    /// List stored profiles
    List {
        /// Maximum number of profiles to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Evaluate the compatibility of a manager (rater) with an employee (subject)
    Compare {
        /// Respondent identifier of the manager
        #[arg(long)]
        rater: String,

        /// Respondent identifier of the employee
        #[arg(long)]
        subject: String,
    },
}

/// Result of CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Output message
    pub message: String,
}

impl CliResult {
    /// Create a success result with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            message: message.into(),
        }
    }

    /// Create an error result with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: message.into(),
        }
    }
}

/// Everything a command needs to run.
pub struct CliContext<'a> {
    /// Profile store.
    pub store: &'a dyn ProfileStore,
    /// Active question set.
    pub questions: &'a QuestionSet,
    /// Emit JSON output.
    pub json: bool,
}

/// Execute a CLI command.
pub async fn execute_command(command: Commands, ctx: &CliContext<'_>) -> CliResult {
    let outcome = match command {
        Commands::Questions => Ok(execute_questions(ctx)),
        Commands::Take {
            answers,
            respondent,
            name,
            email,
        } => execute_take(ctx, answers, respondent, name, email).await,
        Commands::Show { respondent } => execute_show(ctx, &respondent).await,
        Commands::List { limit } => execute_list(ctx, limit).await,
        Commands::Compare { rater, subject } => execute_compare(ctx, &rater, &subject).await,
    };

    match outcome {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Command failed");
            CliResult::error(format!("Error: {}", e))
        }
    }
}

/// Load two stored profiles and evaluate their compatibility.
///
/// # Errors
/// `ProfileNotFound` if either profile is missing; engine errors if the
/// stored scores are incomplete.
pub async fn compare_profiles(
    store: &dyn ProfileStore,
    rater_id: &str,
    subject_id: &str,
) -> AppResult<CompatibilityResult> {
    let rater = load_profile(store, rater_id).await?;
    let subject = load_profile(store, subject_id).await?;
    Ok(evaluate(&rater.scores, &subject.scores)?)
}

async fn load_profile(store: &dyn ProfileStore, respondent_id: &str) -> AppResult<Profile> {
    Ok(store
        .get_profile(respondent_id)
        .await?
        .ok_or_else(|| StorageError::ProfileNotFound {
            respondent_id: respondent_id.to_string(),
        })?)
}

fn to_json<T: Serialize>(value: &T) -> AppResult<CliResult> {
    let json = serde_json::to_string_pretty(value).map_err(StorageError::from)?;
    Ok(CliResult::success(json))
}

fn execute_questions(ctx: &CliContext<'_>) -> CliResult {
    if ctx.json {
        return to_json(ctx.questions).unwrap_or_else(|e| CliResult::error(e.to_string()));
    }

    let mut output = String::new();
    output.push_str("\nQuestions\n");
    output.push_str(RULE);

    for question in ctx.questions.questions() {
        output.push_str(&format!(
            "{:>2}. [{}] {}\n",
            question.id,
            axis_label(question.axis).name,
            question.text
        ));
        output.push_str(&format!("    0: {}\n", question.choices[0]));
        output.push_str(&format!("    1: {}\n", question.choices[1]));
    }

    CliResult::success(output)
}

async fn execute_take(
    ctx: &CliContext<'_>,
    answers: Vec<u8>,
    respondent: Option<String>,
    name: Option<String>,
    email: Option<String>,
) -> AppResult<CliResult> {
    let mut profile = match respondent {
        Some(id) => Profile::from_answers(id, answers, ctx.questions)?,
        None => Profile::anonymous(answers, ctx.questions)?,
    };
    if let Some(name) = name {
        profile = profile.with_name(name);
    }
    if let Some(email) = email {
        profile = profile.with_email(email);
    }

    ctx.store.save_profile(&profile).await?;
    info!(respondent_id = %profile.respondent_id, "Profile recorded");

    if ctx.json {
        return to_json(&profile);
    }
    let mut output = format!("\nSaved profile {}\n", profile.respondent_id);
    output.push_str(&format_profile(&profile));
    Ok(CliResult::success(output))
}

async fn execute_show(ctx: &CliContext<'_>, respondent_id: &str) -> AppResult<CliResult> {
    let profile = load_profile(ctx.store, respondent_id).await?;
    if ctx.json {
        return to_json(&profile);
    }
    Ok(CliResult::success(format_profile(&profile)))
}

async fn execute_list(ctx: &CliContext<'_>, limit: usize) -> AppResult<CliResult> {
    let profiles = ctx.store.list_profiles(limit).await?;
    if ctx.json {
        return to_json(&profiles);
    }

    let mut output = String::new();
    output.push_str("\nProfiles\n");
    output.push_str(RULE);

    if profiles.is_empty() {
        output.push_str("No profiles recorded yet.\n");
    }
    for profile in &profiles {
        output.push_str(&format!(
            "{} | {} | {}\n",
            profile.created_at.format("%Y-%m-%d %H:%M:%S"),
            profile.respondent_id,
            profile.name.as_deref().unwrap_or("-")
        ));
    }

    Ok(CliResult::success(output))
}

async fn execute_compare(
    ctx: &CliContext<'_>,
    rater_id: &str,
    subject_id: &str,
) -> AppResult<CliResult> {
    let result = compare_profiles(ctx.store, rater_id, subject_id).await?;
    info!(
        rater = rater_id,
        subject = subject_id,
        total = result.total_score,
        "Compatibility evaluated"
    );

    if ctx.json {
        return to_json(&result);
    }
    Ok(CliResult::success(format_report(&result)))
}

/// Render a profile as text: one line per axis with its pole labels.
pub fn format_profile(profile: &Profile) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\nProfile: {}{}\n",
        profile.respondent_id,
        profile
            .name
            .as_deref()
            .map(|n| format!(" ({})", n))
            .unwrap_or_default()
    ));
    if let Some(email) = &profile.email {
        output.push_str(&format!("Email: {}\n", email));
    }
    output.push_str(RULE);

    for (axis, score) in profile.scores.iter() {
        let label = axis_label(axis);
        output.push_str(&format!(
            "{:<20} {:>3}%   {} ↔ {}\n",
            label.name,
            (score * 100.0).round(),
            label.low,
            label.high
        ));
    }

    output
}

/// Render a compatibility report as text.
pub fn format_report(result: &CompatibilityResult) -> String {
    let mut output = String::new();
    output.push_str("\nCompatibility Report\n");
    output.push_str(RULE);
    output.push_str(&format!("Total:                {:>3}\n", result.total_score));
    output.push_str(&format!(
        "Psychological safety: {:>3}\n",
        result.psychological_safety
    ));
    output.push_str(&format!("Communication:        {:>3}\n", result.communication));
    output.push_str(&format!("Complementarity:      {:>3}\n", result.complementarity));

    for (title, entries) in [
        ("Strengths", &result.strengths),
        ("Cautions", &result.cautions),
        ("Tips", &result.tips),
    ] {
        if entries.is_empty() {
            continue;
        }
        output.push_str(&format!("\n{}:\n", title));
        for entry in entries {
            output.push_str(&format!("  - {}\n", entry));
        }
    }

    output
}
