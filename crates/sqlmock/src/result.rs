/// Outcome of a mocked exec statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    last_insert_id: i64,
    rows_affected: i64,
}

impl ExecResult {
    pub fn new(last_insert_id: i64, rows_affected: i64) -> Self {
        Self {
            last_insert_id,
            rows_affected,
        }
    }

    /// Id generated by the last INSERT/REPLACE.
    pub fn last_insert_id(&self) -> i64 {
        self.last_insert_id
    }

    pub fn rows_affected(&self) -> i64 {
        self.rows_affected
    }
}
