#![allow(dead_code)]

//! Test infrastructure for identity bootstrap scenarios

use lb_core::{IdentityRecord, ScriptedPrompter};
use lb_db::{SqliteTableProbe, TableProbe};
use lb_identity::{IdentityBootstrapper, LocalRecordStore};

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

pub type TestBootstrapper = IdentityBootstrapper<ScriptedPrompter, SqliteTableProbe>;

/// A store directory and a SQLite backend, both under one temp directory.
pub struct TestEnv {
    _temp: TempDir,
    pub store_dir: PathBuf,
    pub db_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let store_dir = temp.path().join("config");
        let db_path = temp.path().join("lockbox.db");
        Self {
            _temp: temp,
            store_dir,
            db_path,
        }
    }

    pub fn store(&self) -> LocalRecordStore {
        LocalRecordStore::new(&self.store_dir)
    }

    pub fn probe(&self) -> SqliteTableProbe {
        SqliteTableProbe::new(&self.db_path, Duration::from_secs(5))
    }

    /// Bootstrapper answering prompts from `answers`, in order.
    pub fn bootstrapper<I, S>(&self, answers: I) -> TestBootstrapper
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IdentityBootstrapper::new(self.store(), self.probe(), ScriptedPrompter::new(answers))
    }

    /// Allocates a backend table as if another installation had registered it.
    pub async fn register_backend_user(&self, username: &str) {
        self.probe()
            .create_table(username)
            .await
            .expect("Failed to create backend table");
    }

    pub async fn backend_has(&self, username: &str) -> bool {
        self.probe()
            .table_exists(username)
            .await
            .expect("Failed to probe backend")
    }

    pub fn cache_record(&self, record: &IdentityRecord) {
        self.store().save(record).expect("Failed to seed local record");
    }
}
