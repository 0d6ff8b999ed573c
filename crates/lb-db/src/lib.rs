pub mod error;
pub mod sqlite_table_probe;
pub mod table_probe;

#[cfg(test)]
mod tests;

pub use error::{DbError, Result};
pub use sqlite_table_probe::SqliteTableProbe;
pub use table_probe::TableProbe;
