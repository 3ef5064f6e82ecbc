use std::fmt;

/// SQL statement shapes an expectation can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `SELECT ... FROM <table>` (also used for counts)
    Select,
    /// `UPDATE <table> SET ...`
    Update,
    /// `INSERT INTO <table> ...`
    Insert,
    /// `REPLACE INTO <table> ...`
    Replace,
    /// `DELETE FROM <table> ...`
    Delete,
}

impl StatementKind {
    /// The pattern registered with the mock for `table`.
    ///
    /// The table name is inserted as-is: it is neither escaped nor anchored,
    /// so `users` also matches statements against `users_archive`.
    pub fn pattern(self, table: &str) -> String {
        match self {
            StatementKind::Select => format!("SELECT (.+) FROM {table}"),
            StatementKind::Update => format!("UPDATE {table} SET"),
            StatementKind::Insert => format!("INSERT INTO {table}"),
            StatementKind::Replace => format!("REPLACE INTO {table}"),
            StatementKind::Delete => format!("DELETE FROM {table}"),
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatementKind::Select => "SELECT",
            StatementKind::Update => "UPDATE",
            StatementKind::Insert => "INSERT",
            StatementKind::Replace => "REPLACE",
            StatementKind::Delete => "DELETE",
        })
    }
}
