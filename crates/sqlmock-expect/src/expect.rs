//! Expectation helpers, one per statement kind.
//!
//! Every helper registers exactly one expectation on the mock. When `err` is
//! `Some`, the matching statement fails with it and nothing else is
//! configured.

use crate::statement::StatementKind;
use sqlmock::{ExecResult, MockError, Rows, Sqlmock, Value};

#[cfg(test)]
mod tests;

/// Column name of the row produced by [`count`].
pub const COUNT_COLUMN: &str = "count";

fn log_registered(kind: StatementKind, table: &str, failing: bool) {
    tracing::debug!(target: "sqlmock_expect", %kind, table, failing, "expect");
}

/// Expect `SELECT ... FROM <table>`.
///
/// With no `values` the query yields an explicitly empty row set. Otherwise
/// one row per tuple is returned under `columns`.
///
/// # Panics
/// Panics if a tuple's length differs from `columns.len()`.
pub fn select(
    mock: &Sqlmock,
    table: &str,
    columns: &[&str],
    err: Option<MockError>,
    values: &[Vec<Value>],
) {
    let sql = StatementKind::Select.pattern(table);
    log_registered(StatementKind::Select, table, err.is_some());

    if let Some(err) = err {
        mock.expect_query(sql).will_return_error(err);
        return;
    }

    if values.is_empty() {
        mock.expect_query(sql).will_return_rows(Rows::empty());
        return;
    }

    let rows = values
        .iter()
        .fold(Rows::new(columns.iter().copied()), |rows, row| {
            rows.add_row(row.iter().cloned())
        });
    mock.expect_query(sql).will_return_rows(rows);
}

/// Expect `SELECT ... FROM <table>` answered with a single `count` row.
pub fn count(mock: &Sqlmock, table: &str, err: Option<MockError>, count: u32) {
    select(mock, table, &[COUNT_COLUMN], err, &[vec![Value::from(count)]]);
}

/// Expect `UPDATE <table> SET ...` affecting `rows_affected` rows.
pub fn update(mock: &Sqlmock, table: &str, err: Option<MockError>, rows_affected: i64) {
    expect_exec(
        mock,
        StatementKind::Update,
        table,
        err,
        ExecResult::new(0, rows_affected),
    );
}

/// Expect `INSERT INTO <table> ...` yielding `last_insert_id`.
pub fn insert(mock: &Sqlmock, table: &str, err: Option<MockError>, last_insert_id: i64) {
    expect_exec(
        mock,
        StatementKind::Insert,
        table,
        err,
        ExecResult::new(last_insert_id, 0),
    );
}

/// Expect `REPLACE INTO <table> ...` yielding `last_insert_id`.
pub fn replace(mock: &Sqlmock, table: &str, err: Option<MockError>, last_insert_id: i64) {
    expect_exec(
        mock,
        StatementKind::Replace,
        table,
        err,
        ExecResult::new(last_insert_id, 0),
    );
}

/// Expect `DELETE FROM <table> ...` affecting `rows_affected` rows.
pub fn delete(mock: &Sqlmock, table: &str, err: Option<MockError>, rows_affected: i64) {
    expect_exec(
        mock,
        StatementKind::Delete,
        table,
        err,
        ExecResult::new(0, rows_affected),
    );
}

fn expect_exec(
    mock: &Sqlmock,
    kind: StatementKind,
    table: &str,
    err: Option<MockError>,
    result: ExecResult,
) {
    let sql = kind.pattern(table);
    log_registered(kind, table, err.is_some());

    match err {
        Some(err) => {
            mock.expect_exec(sql).will_return_error(err);
        }
        None => {
            mock.expect_exec(sql).will_return_result(result);
        }
    }
}
