use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

use super::{Profile, ProfileStore};
use crate::config::DatabaseConfig;
use crate::error::{StorageError, StorageResult};

/// Static migrator that embeds migrations at compile time
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// SQLite-backed profile storage
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    pub async fn new(config: &DatabaseConfig) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = config.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Connection {
                message: format!("Failed to create database directory: {}", e),
            })?;
        }

        let database_url = format!("sqlite://{}?mode=rwc", config.path.display());

        let options = SqliteConnectOptions::from_str(&database_url)
            .map_err(|e| StorageError::Connection {
                message: format!("Invalid database URL: {}", e),
            })?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection {
                message: format!("Failed to connect to database: {}", e),
            })?;

        let storage = Self { pool };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Create an in-memory database, used by tests
    pub async fn new_in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| {
            StorageError::Connection {
                message: format!("Invalid database URL: {}", e),
            }
        })?;

        // Every connection to :memory: is a separate database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection {
                message: format!("Failed to open in-memory database: {}", e),
            })?;

        let storage = Self { pool };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Run database migrations using embedded sqlx migrations
    async fn run_migrations(&self) -> StorageResult<()> {
        info!("Running database migrations...");

        MIGRATOR.run(&self.pool).await.map_err(|e| StorageError::Migration {
            message: format!("Failed to run migrations: {}", e),
        })?;

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying pool for advanced queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ProfileStore for SqliteStorage {
    async fn save_profile(&self, profile: &Profile) -> StorageResult<()> {
        let answers = serde_json::to_string(&profile.answers)?;
        let scores = serde_json::to_string(&profile.scores)?;

        sqlx::query(
            r#"
            INSERT INTO profiles (respondent_id, name, email, answers, scores, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(respondent_id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                answers = excluded.answers,
                scores = excluded.scores,
                created_at = excluded.created_at
            "#,
        )
        .bind(&profile.respondent_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&answers)
        .bind(&scores)
        .bind(profile.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(respondent_id = %profile.respondent_id, "Profile saved");
        Ok(())
    }

    async fn get_profile(&self, respondent_id: &str) -> StorageResult<Option<Profile>> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT respondent_id, name, email, answers, scores, created_at
            FROM profiles
            WHERE respondent_id = ?
            "#,
        )
        .bind(respondent_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn list_profiles(&self, limit: usize) -> StorageResult<Vec<Profile>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<ProfileRow> = sqlx::query_as(
            r#"
            SELECT respondent_id, name, email, answers, scores, created_at
            FROM profiles
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Profile::try_from).collect()
    }

    async fn delete_profile(&self, respondent_id: &str) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE respondent_id = ?")
            .bind(respondent_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row type for SQLx mapping
#[derive(sqlx::FromRow)]
struct ProfileRow {
    respondent_id: String,
    name: Option<String>,
    email: Option<String>,
    answers: String,
    scores: String,
    created_at: String,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = StorageError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        use chrono::DateTime;

        Ok(Self {
            answers: serde_json::from_str(&row.answers)?,
            scores: serde_json::from_str(&row.scores)?,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .map_err(|e| StorageError::Query {
                    message: format!(
                        "Invalid created_at for profile {}: {}",
                        row.respondent_id, e
                    ),
                })?,
            respondent_id: row.respondent_id,
            name: row.name,
            email: row.email,
        })
    }
}
