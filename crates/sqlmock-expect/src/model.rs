//! Expectation helpers driven by a model's table metadata.

use crate::expect;
use sqlmock::{MockError, Sqlmock, Value};

/// A database model bound to a mock handle.
///
/// Implement this on test fixtures so expectations can be registered from the
/// model alone:
///
/// ```ignore
/// struct User {
///     mock: Sqlmock,
/// }
///
/// impl Modeler for User {
///     fn table_name(&self) -> &str {
///         "users"
///     }
///     fn columns(&self) -> &[&str] {
///         &["id", "name"]
///     }
///     fn mock(&self) -> &Sqlmock {
///         &self.mock
///     }
/// }
///
/// insert_model(&user, None, 42);
/// ```
pub trait Modeler {
    /// The database table name.
    fn table_name(&self) -> &str;

    /// Column names, in select order.
    fn columns(&self) -> &[&str];

    /// The mock handle expectations are registered on.
    fn mock(&self) -> &Sqlmock;
}

/// [`expect::select`] on the model's table and columns.
pub fn select_model<M: Modeler + ?Sized>(m: &M, err: Option<MockError>, values: &[Vec<Value>]) {
    expect::select(m.mock(), m.table_name(), m.columns(), err, values);
}

/// [`expect::count`] on the model's table.
pub fn count_model<M: Modeler + ?Sized>(m: &M, err: Option<MockError>, count: u32) {
    expect::count(m.mock(), m.table_name(), err, count);
}

/// [`expect::update`] on the model's table.
pub fn update_model<M: Modeler + ?Sized>(m: &M, err: Option<MockError>, rows_affected: i64) {
    expect::update(m.mock(), m.table_name(), err, rows_affected);
}

/// [`expect::insert`] on the model's table.
pub fn insert_model<M: Modeler + ?Sized>(m: &M, err: Option<MockError>, last_insert_id: i64) {
    expect::insert(m.mock(), m.table_name(), err, last_insert_id);
}

/// [`expect::replace`] on the model's table.
pub fn replace_model<M: Modeler + ?Sized>(m: &M, err: Option<MockError>, last_insert_id: i64) {
    expect::replace(m.mock(), m.table_name(), err, last_insert_id);
}

/// [`expect::delete`] on the model's table.
pub fn delete_model<M: Modeler + ?Sized>(m: &M, err: Option<MockError>, rows_affected: i64) {
    expect::delete(m.mock(), m.table_name(), err, rows_affected);
}
