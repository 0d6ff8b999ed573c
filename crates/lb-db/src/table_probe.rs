use crate::Result as DbResult;

use async_trait::async_trait;

/// Backend operations that decide whether a username is registered.
///
/// A username is registered iff a table with exactly that name exists.
/// `table_exists` followed by `create_table` is a check-then-act sequence:
/// another process may create the same table in between, in which case
/// `create_table` fails. Implementations that can create atomically may do
/// so behind this trait without changing callers.
#[async_trait]
pub trait TableProbe: Send + Sync {
    /// Returns true iff a table named exactly `username` exists.
    async fn table_exists(&self, username: &str) -> DbResult<bool>;

    /// Allocates the per-user table. Fails if it already exists.
    async fn create_table(&self, username: &str) -> DbResult<()>;
}
