//! The mock database handle and its expectation queue.

use crate::config::{MockConfig, SqlPattern, normalize_sql};
use crate::error::{MockError, MockResult};
use crate::result::ExecResult;
use crate::rows::Rows;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};


/// Which driver entry point an expectation answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExpectationKind {
    /// Row-returning statement (`Sqlmock::query`).
    Query,
    /// Statement executed for its side effect (`Sqlmock::exec`).
    Exec,
}

impl ExpectationKind {
    fn as_str(self) -> &'static str {
        match self {
            ExpectationKind::Query => "query",
            ExpectationKind::Exec => "exec",
        }
    }
}

impl fmt::Display for ExpectationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
enum Outcome {
    /// Nothing configured yet.
    Pending,
    Rows(Rows),
    Exec(ExecResult),
    Error(MockError),
    /// Handed out to a matching statement.
    Consumed,
}

#[derive(Debug)]
struct Expectation {
    kind: ExpectationKind,
    pattern: String,
    compiled: SqlPattern,
    outcome: Outcome,
}

impl Expectation {
    fn is_fulfilled(&self) -> bool {
        matches!(self.outcome, Outcome::Consumed)
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} matching '{}'", self.kind, self.pattern)?;
        match &self.outcome {
            Outcome::Pending => Ok(()),
            Outcome::Rows(rows) => write!(f, " returning {} row(s)", rows.len()),
            Outcome::Exec(res) => write!(
                f,
                " returning result (last_insert_id: {}, rows_affected: {})",
                res.last_insert_id(),
                res.rows_affected()
            ),
            Outcome::Error(err) => write!(f, " returning error '{err}'"),
            Outcome::Consumed => f.write_str(" (fulfilled)"),
        }
    }
}

#[derive(Debug)]
struct MockState {
    config: MockConfig,
    expectations: Vec<Expectation>,
}

/// A mock database handle.
///
/// Expectations are registered with [`Sqlmock::expect_query`] /
/// [`Sqlmock::expect_exec`] and consumed by [`Sqlmock::query`] /
/// [`Sqlmock::exec`]. Clones share the same expectation queue.
///
/// # Example
///
/// ```ignore
/// use sqlmock::{ExecResult, Sqlmock};
///
/// let mock = Sqlmock::new();
/// mock.expect_exec("INSERT INTO users")
///     .will_return_result(ExecResult::new(42, 1));
///
/// let res = mock.exec("INSERT INTO users (name) VALUES ('alice')")?;
/// assert_eq!(res.last_insert_id(), 42);
/// mock.expectations_were_met()?;
/// ```
#[derive(Debug, Clone)]
pub struct Sqlmock {
    state: Arc<Mutex<MockState>>,
}

impl Default for Sqlmock {
    fn default() -> Self {
        Self::new()
    }
}

impl Sqlmock {
    /// Create a handle with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create a handle with a custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                config,
                expectations: Vec::new(),
            })),
        }
    }

    // The queue is never left half-updated, so a poisoned lock is still usable.
    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn register(&self, kind: ExpectationKind, pattern: String) -> usize {
        tracing::debug!(target: "sqlmock", %kind, pattern = %pattern, "expectation registered");
        let mut state = self.state();
        let compiled = state.config.query_matcher.compile(&pattern);
        if let SqlPattern::Invalid { error, .. } = &compiled {
            tracing::warn!(target: "sqlmock", %kind, pattern = %pattern, %error, "expectation pattern does not compile");
        }
        state.expectations.push(Expectation {
            kind,
            pattern,
            compiled,
            outcome: Outcome::Pending,
        });
        state.expectations.len() - 1
    }

    fn configure(&self, index: usize, outcome: Outcome) {
        if let Some(exp) = self.state().expectations.get_mut(index) {
            if !exp.is_fulfilled() {
                exp.outcome = outcome;
            }
        }
    }

    /// Expect a row-returning statement whose SQL matches `sql`.
    ///
    /// Without further configuration the statement yields an empty row set.
    pub fn expect_query(&self, sql: impl Into<String>) -> ExpectedQuery {
        let index = self.register(ExpectationKind::Query, sql.into());
        ExpectedQuery {
            mock: self.clone(),
            index,
        }
    }

    /// Expect a side-effecting statement whose SQL matches `sql`.
    ///
    /// A result or an error must be configured, otherwise the matching
    /// statement fails with [`MockError::MissingResult`].
    pub fn expect_exec(&self, sql: impl Into<String>) -> ExpectedExec {
        let index = self.register(ExpectationKind::Exec, sql.into());
        ExpectedExec {
            mock: self.clone(),
            index,
        }
    }

    /// Run a row-returning statement against the registered expectations.
    pub fn query(&self, sql: &str) -> MockResult<Rows> {
        match self.take_match(ExpectationKind::Query, sql)? {
            Outcome::Pending => Ok(Rows::empty()),
            Outcome::Rows(rows) => Ok(rows),
            Outcome::Error(err) => Err(err),
            Outcome::Exec(_) | Outcome::Consumed => Err(MockError::Other(format!(
                "query '{sql}' matched an expectation without rows"
            ))),
        }
    }

    /// Run a side-effecting statement against the registered expectations.
    pub fn exec(&self, sql: &str) -> MockResult<ExecResult> {
        match self.take_match(ExpectationKind::Exec, sql)? {
            Outcome::Exec(result) => Ok(result),
            Outcome::Error(err) => Err(err),
            Outcome::Pending | Outcome::Rows(_) | Outcome::Consumed => {
                Err(MockError::MissingResult(sql.to_string()))
            }
        }
    }

    fn take_match(&self, kind: ExpectationKind, sql: &str) -> MockResult<Outcome> {
        let actual = normalize_sql(sql);
        let mut state = self.state();
        let MockState {
            config,
            expectations,
        } = &mut *state;

        let mut next_pending: Option<String> = None;
        let mut found = None;
        for (idx, exp) in expectations.iter().enumerate() {
            if exp.is_fulfilled() {
                continue;
            }
            if exp.kind == kind && exp.compiled.matches(&actual)? {
                found = Some(idx);
                break;
            }
            tracing::trace!(target: "sqlmock", %kind, sql = %actual, expectation = %exp, "expectation rejected");
            if config.ordered {
                next_pending = Some(exp.to_string());
                break;
            }
        }

        let Some(idx) = found else {
            let reason = match next_pending {
                Some(next) => format!("next expectation is {next}"),
                None if config.ordered => {
                    "all expectations were already fulfilled".to_string()
                }
                None => "no pending expectation matches".to_string(),
            };
            tracing::warn!(target: "sqlmock", %kind, sql = %actual, %reason, "unexpected statement");
            return Err(MockError::unexpected(kind.as_str(), actual, reason));
        };

        let exp = &mut expectations[idx];
        tracing::debug!(target: "sqlmock", %kind, sql = %actual, pattern = %exp.pattern, "expectation matched");
        Ok(std::mem::replace(&mut exp.outcome, Outcome::Consumed))
    }

    /// Number of expectations not consumed yet.
    pub fn pending(&self) -> usize {
        self.state()
            .expectations
            .iter()
            .filter(|e| !e.is_fulfilled())
            .count()
    }

    /// Check that every registered expectation has been consumed.
    pub fn expectations_were_met(&self) -> MockResult<()> {
        let state = self.state();
        let remaining: Vec<String> = state
            .expectations
            .iter()
            .filter(|e| !e.is_fulfilled())
            .map(|e| format!("  - {e}"))
            .collect();
        if remaining.is_empty() {
            Ok(())
        } else {
            Err(MockError::Unfulfilled(remaining.join("\n")))
        }
    }
}

/// A registered query expectation; configure what it hands back.
#[derive(Debug, Clone)]
pub struct ExpectedQuery {
    mock: Sqlmock,
    index: usize,
}

impl ExpectedQuery {
    /// Fail the matching query with `err`.
    pub fn will_return_error(self, err: MockError) -> Self {
        self.mock.configure(self.index, Outcome::Error(err));
        self
    }

    /// Answer the matching query with `rows`.
    pub fn will_return_rows(self, rows: Rows) -> Self {
        self.mock.configure(self.index, Outcome::Rows(rows));
        self
    }
}

/// A registered exec expectation; configure what it hands back.
#[derive(Debug, Clone)]
pub struct ExpectedExec {
    mock: Sqlmock,
    index: usize,
}

impl ExpectedExec {
    /// Fail the matching statement with `err`.
    pub fn will_return_error(self, err: MockError) -> Self {
        self.mock.configure(self.index, Outcome::Error(err));
        self
    }

    /// Answer the matching statement with `result`.
    pub fn will_return_result(self, result: ExecResult) -> Self {
        self.mock.configure(self.index, Outcome::Exec(result));
        self
    }
}
