use crate::DbError;
use crate::sqlite_table_probe::create_table_statement;

use googletest::prelude::*;

#[test]
fn given_table_name_when_build_statement_then_identifier_is_quoted() {
    let statement = create_table_statement("bob");

    assert_that!(statement, contains_substring(r#"CREATE TABLE "bob""#));
    assert_that!(statement, not(contains_substring("IF NOT EXISTS")));
}

#[test]
fn given_table_name_when_build_statement_then_declares_fixed_schema() {
    let statement = create_table_statement("bob");

    assert_that!(statement, contains_substring("account_id TEXT PRIMARY KEY"));
    assert_that!(statement, contains_substring("username TEXT NOT NULL"));
    assert_that!(statement, contains_substring("password TEXT NOT NULL"));
    assert_that!(statement, contains_substring("app_name TEXT NOT NULL"));
    assert_that!(statement, contains_substring("note TEXT DEFAULT NULL"));
}

#[test]
fn given_invalid_identifier_error_when_displayed_then_names_offending_value() {
    let err = DbError::invalid_identifier("bob; drop");

    assert_that!(format!("{err}"), contains_substring("bob; drop"));
}
