use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use ticketdesk::bootstrap::{Desk, DeskOptions};
use ticketdesk::domain::ports::clock::ManualClock;
use ticketdesk::domain::ports::key_value_store::KeyValueStore;
use ticketdesk::infrastructure::persistence::{Database, SqliteKeyValueStore};
use ticketdesk::infrastructure::storage::{InMemoryStore, LocalFileStore};
use uuid::Uuid;

pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    ))
}

pub fn empty_options() -> DeskOptions {
    DeskOptions {
        seed_demo_data: false,
        ..DeskOptions::default()
    }
}

/// Desk over a fresh in-memory store with no seed data
pub async fn setup_empty_desk() -> (Desk, Arc<InMemoryStore>, Arc<ManualClock>) {
    let store = Arc::new(InMemoryStore::new());
    let clock = test_clock();
    let desk = Desk::open(store.clone(), clock.clone(), empty_options())
        .await
        .expect("Failed to open desk");
    (desk, store, clock)
}

/// Desk over a fresh in-memory store with the demo roster and tickets
pub async fn setup_seeded_desk() -> (Desk, Arc<InMemoryStore>, Arc<ManualClock>) {
    let store = Arc::new(InMemoryStore::new());
    let clock = test_clock();
    let desk = Desk::open(store.clone(), clock.clone(), DeskOptions::default())
        .await
        .expect("Failed to open desk");
    (desk, store, clock)
}

/// SQLite file with a unique name, removed on drop
pub struct TestDb {
    pub path: PathBuf,
    pub store: Arc<SqliteKeyValueStore>,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            std::fs::remove_file(file).ok();
        }
    }
}

pub async fn setup_test_db() -> TestDb {
    let path = std::env::temp_dir().join(format!("ticketdesk_test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");
    db.run_migrations().await.expect("Failed to run migrations");

    TestDb {
        path,
        store: Arc::new(SqliteKeyValueStore::new(db)),
    }
}

/// Directory for a `LocalFileStore`, removed on drop
pub struct TestDir {
    pub path: PathBuf,
}

impl TestDir {
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(LocalFileStore::new(self.path.clone()))
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.path).ok();
    }
}

pub fn setup_test_dir() -> TestDir {
    TestDir {
        path: std::env::temp_dir().join(format!("ticketdesk_files_{}", Uuid::new_v4())),
    }
}
