//! # sqlmock
//!
//! An in-memory mock SQL driver for unit tests.
//!
//! Tests register expectations (a pattern plus the rows, result or error to
//! hand back) and the code under test runs statements through the same
//! handle. Each statement consumes exactly one matching expectation.
//!
//! ```ignore
//! use sqlmock::{Rows, Sqlmock, values};
//!
//! let mock = Sqlmock::new();
//! mock.expect_query("SELECT (.+) FROM users")
//!     .will_return_rows(Rows::new(["id", "name"]).add_row(values![1, "alice"]));
//!
//! let rows = mock.query("SELECT id, name FROM users")?;
//! let users: Vec<(i64, String)> = rows.scan()?;
//! assert_eq!(users, vec![(1, "alice".to_string())]);
//! ```

pub mod config;
pub mod error;
pub mod mock;
pub mod result;
pub mod rows;
pub mod value;

pub use config::{MockConfig, QueryMatcher, SqlPattern, normalize_sql};
pub use error::{MockError, MockResult};
pub use mock::{ExpectedExec, ExpectedQuery, Sqlmock};
pub use result::ExecResult;
pub use rows::{FromRow, Row, Rows};
pub use value::{FromValue, Value};
