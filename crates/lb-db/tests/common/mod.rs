pub mod test_db;

pub use test_db::{column_names, temp_database};
