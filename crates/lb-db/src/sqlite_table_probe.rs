//! SQLite implementation of [`TableProbe`].
//!
//! Every call opens its own connection and closes it before returning; there
//! is no pool. The username is bound as a parameter for the existence check.
//! For DDL it is an identifier, which cannot be bound, so it must pass the
//! identifier allowlist and is always emitted double-quoted.

use crate::{DbError, Result as DbResult, TableProbe};

use lb_core::is_valid_table_identifier;

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

const TABLE_EXISTS_QUERY: &str = "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?";

pub struct SqliteTableProbe {
    options: SqliteConnectOptions,
}

impl SqliteTableProbe {
    /// Probe backed by the SQLite file at `database_path`, created if missing.
    pub fn new(database_path: impl AsRef<Path>, busy_timeout: Duration) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(database_path.as_ref())
            .create_if_missing(true)
            .busy_timeout(busy_timeout);

        Self::from_options(options)
    }

    pub fn from_options(options: SqliteConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> DbResult<SqliteConnection> {
        Ok(self.options.connect().await?)
    }
}

#[async_trait]
impl TableProbe for SqliteTableProbe {
    async fn table_exists(&self, username: &str) -> DbResult<bool> {
        let mut conn = self.connect().await?;

        let matches: Vec<String> = sqlx::query_scalar(TABLE_EXISTS_QUERY)
            .bind(username)
            .fetch_all(&mut conn)
            .await?;

        conn.close().await?;

        debug!("Table '{username}' exists: {}", !matches.is_empty());
        Ok(!matches.is_empty())
    }

    async fn create_table(&self, username: &str) -> DbResult<()> {
        if !is_valid_table_identifier(username) {
            return Err(DbError::invalid_identifier(username));
        }

        let statement = create_table_statement(username);
        let mut conn = self.connect().await?;

        sqlx::query(&statement).execute(&mut conn).await?;

        conn.close().await?;

        info!("Created table '{username}'");
        Ok(())
    }
}

/// DDL for a per-user table. `table` must already satisfy the identifier allowlist.
pub(crate) fn create_table_statement(table: &str) -> String {
    format!(
        r#"
            CREATE TABLE "{table}" (
                account_id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                password TEXT NOT NULL,
                app_name TEXT NOT NULL,
                note TEXT DEFAULT NULL
            )
        "#
    )
}
