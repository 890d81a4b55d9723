//! Integration tests for SQLite profile storage
//!
//! Tests database operations using an in-memory SQLite database.

use chrono::{Duration, Utc};

use workstyle_compat::config::DatabaseConfig;
use workstyle_compat::diagnosis::{AxisKey, QuestionSet};
use workstyle_compat::storage::{Profile, ProfileStore, SqliteStorage};

/// Create an in-memory storage instance for testing
async fn create_test_storage() -> SqliteStorage {
    SqliteStorage::new_in_memory()
        .await
        .expect("Failed to create in-memory storage")
}

fn profile(id: &str, answers: Vec<u8>) -> Profile {
    Profile::from_answers(id, answers, &QuestionSet::canonical()).unwrap()
}

#[tokio::test]
async fn test_save_and_get_profile() {
    let storage = create_test_storage().await;

    let saved = profile("emp-1", vec![1; 12])
        .with_name("Employee")
        .with_email("emp@example.com");
    storage.save_profile(&saved).await.unwrap();

    let loaded = storage.get_profile("emp-1").await.unwrap();
    assert!(loaded.is_some(), "Profile should exist");
    let loaded = loaded.unwrap();
    assert_eq!(loaded.respondent_id, "emp-1");
    assert_eq!(loaded.name.as_deref(), Some("Employee"));
    assert_eq!(loaded.email.as_deref(), Some("emp@example.com"));
    assert_eq!(loaded.answers, saved.answers);
    assert_eq!(loaded.scores, saved.scores);
    assert_eq!(loaded.created_at.timestamp(), saved.created_at.timestamp());
}

#[tokio::test]
async fn test_get_nonexistent_profile() {
    let storage = create_test_storage().await;

    let result = storage.get_profile("nonexistent-id").await.unwrap();

    assert!(result.is_none(), "Should return None for nonexistent profile");
}

#[tokio::test]
async fn test_save_profile_replaces_existing() {
    let storage = create_test_storage().await;

    storage.save_profile(&profile("mgr-1", vec![0; 12])).await.unwrap();
    storage.save_profile(&profile("mgr-1", vec![1; 12])).await.unwrap();

    let loaded = storage.get_profile("mgr-1").await.unwrap().unwrap();
    assert_eq!(loaded.answers, vec![1; 12]);
    assert_eq!(loaded.scores.get(AxisKey::LogicEmpathy), Some(1.0));

    let all = storage.list_profiles(10).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_list_profiles_newest_first() {
    let storage = create_test_storage().await;

    let mut older = profile("a", vec![0; 12]);
    older.created_at = Utc::now() - Duration::hours(2);
    let mut newer = profile("b", vec![1; 12]);
    newer.created_at = Utc::now();

    storage.save_profile(&older).await.unwrap();
    storage.save_profile(&newer).await.unwrap();

    let listed = storage.list_profiles(10).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|p| p.respondent_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);

    let limited = storage.list_profiles(1).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].respondent_id, "b");
}

#[tokio::test]
async fn test_delete_profile() {
    let storage = create_test_storage().await;

    storage.save_profile(&profile("gone", vec![0; 12])).await.unwrap();

    assert!(storage.delete_profile("gone").await.unwrap());
    assert!(storage.get_profile("gone").await.unwrap().is_none());
    assert!(!storage.delete_profile("gone").await.unwrap());
}

#[tokio::test]
async fn test_file_backed_storage_persists() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("nested").join("profiles.db"),
        max_connections: 2,
    };

    {
        let storage = SqliteStorage::new(&config).await.unwrap();
        storage.save_profile(&profile("kept", vec![0; 12])).await.unwrap();
        storage.pool().close().await;
    }

    let reopened = SqliteStorage::new(&config).await.unwrap();
    let loaded = reopened.get_profile("kept").await.unwrap();
    assert!(loaded.is_some());
}
