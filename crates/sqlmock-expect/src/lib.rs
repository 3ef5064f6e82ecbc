//! # sqlmock-expect
//!
//! One-line expectation helpers for the common statement shapes on a
//! [`sqlmock::Sqlmock`] handle.
//!
//! | helper | pattern |
//! |--------|---------|
//! | [`select`] / [`count`] | `SELECT (.+) FROM <table>` |
//! | [`update`] | `UPDATE <table> SET` |
//! | [`insert`] | `INSERT INTO <table>` |
//! | [`replace`] | `REPLACE INTO <table>` |
//! | [`delete`] | `DELETE FROM <table>` |
//!
//! Each helper takes an optional error; when given, the matching statement
//! fails with it. The `*_model` variants read the table, columns and mock
//! handle from a [`Modeler`].
//!
//! ```ignore
//! use sqlmock::{MockError, Sqlmock, values};
//! use sqlmock_expect::{insert, select};
//!
//! let mock = Sqlmock::new();
//! insert(&mock, "users", None, 42);
//! assert_eq!(mock.exec("INSERT INTO users (name) VALUES ('a')")?.last_insert_id(), 42);
//!
//! select(&mock, "users", &["id", "name"], None, &[values![1, "a"]]);
//! select(&mock, "users", &["id"], Some(MockError::injected("db error")), &[]);
//! ```

pub mod expect;
pub mod model;
pub mod statement;

pub use expect::{COUNT_COLUMN, count, delete, insert, replace, select, update};
pub use model::{
    Modeler, count_model, delete_model, insert_model, replace_model, select_model, update_model,
};
pub use statement::StatementKind;

// Re-export the mock so callers need a single dependency.
pub use sqlmock;
