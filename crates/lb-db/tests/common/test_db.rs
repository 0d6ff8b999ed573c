use lb_db::SqliteTableProbe;

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

/// Creates a probe over a fresh SQLite file inside a temp directory.
///
/// The file is not created until the probe first connects.
pub fn temp_database() -> (TempDir, PathBuf, SqliteTableProbe) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("lockbox.db");
    let probe = SqliteTableProbe::new(&db_path, Duration::from_secs(5));
    (temp_dir, db_path, probe)
}

/// Opens a direct connection for assertions.
pub async fn connect(db_path: &Path) -> SqliteConnection {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to open test database")
}

/// Column names of `table`, in declaration order.
pub async fn column_names(db_path: &Path, table: &str) -> Vec<String> {
    let mut conn = connect(db_path).await;

    // Use sqlx::query_scalar (not query!) to avoid offline mode issues in tests
    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
        .bind(table)
        .fetch_all(&mut conn)
        .await
        .expect("Failed to read table info");

    conn.close().await.expect("Failed to close connection");
    names
}
