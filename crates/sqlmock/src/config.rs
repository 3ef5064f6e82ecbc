use crate::error::{MockError, MockResult};
use regex::Regex;

/// How an expectation pattern is compared with the executed SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMatcher {
    /// Unanchored regular-expression search (default).
    #[default]
    Regex,
    /// Exact comparison after whitespace normalization.
    Equal,
}

impl QueryMatcher {
    /// Prepare `expected` for matching.
    ///
    /// The pattern is whitespace-normalized like the executed SQL, so a
    /// multi-line pattern still matches. A regex that fails to compile is kept
    /// and reported when a statement is matched against it.
    pub fn compile(self, expected: &str) -> SqlPattern {
        let normalized = normalize_sql(expected);
        match self {
            QueryMatcher::Regex => match Regex::new(&normalized) {
                Ok(re) => SqlPattern::Regex(re),
                Err(err) => SqlPattern::Invalid {
                    pattern: expected.to_string(),
                    error: err,
                },
            },
            QueryMatcher::Equal => SqlPattern::Equal(normalized),
        }
    }
}

/// An expectation pattern prepared by [`QueryMatcher::compile`].
#[derive(Debug, Clone)]
pub enum SqlPattern {
    Regex(Regex),
    Equal(String),
    Invalid { pattern: String, error: regex::Error },
}

impl SqlPattern {
    /// Check already-normalized `actual` SQL (see [`normalize_sql`]).
    pub fn matches(&self, actual: &str) -> MockResult<bool> {
        match self {
            SqlPattern::Regex(re) => Ok(re.is_match(actual)),
            SqlPattern::Equal(expected) => Ok(expected == actual),
            SqlPattern::Invalid { pattern, error } => Err(MockError::InvalidPattern {
                pattern: pattern.clone(),
                source: error.clone(),
            }),
        }
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_sql(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Configuration for a [`Sqlmock`](crate::Sqlmock) handle.
///
/// Defaults: regex matching, expectations consumed in registration order.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Pattern comparison strategy.
    pub query_matcher: QueryMatcher,
    /// Whether statements must arrive in the order expectations were registered.
    pub ordered: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            query_matcher: QueryMatcher::Regex,
            ordered: true,
        }
    }
}

impl MockConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern comparison strategy.
    pub fn query_matcher(mut self, matcher: QueryMatcher) -> Self {
        self.query_matcher = matcher;
        self
    }

    /// Let any pending expectation match, first registered wins.
    pub fn unordered(mut self) -> Self {
        self.ordered = false;
        self
    }
}
