//! Canned row sets and row mapping.

use crate::error::{MockError, MockResult};
use crate::value::{FromValue, Value};

/// A row set: the rows a query expectation hands back, and what
/// [`Sqlmock::query`](crate::Sqlmock::query) returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Rows {
    /// Create an empty row set with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// A row set with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append one row.
    ///
    /// # Panics
    /// Panics if the number of values differs from the number of columns.
    /// This is a mistake in the test setup, not a runtime condition.
    pub fn add_row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let row: Vec<Value> = values.into_iter().map(Into::into).collect();
        assert_eq!(
            row.len(),
            self.columns.len(),
            "expected {} row values, got {}",
            self.columns.len(),
            row.len()
        );
        self.rows.push(row);
        self
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// The first row, if any.
    pub fn first(&self) -> Option<Row<'_>> {
        self.iter().next()
    }

    /// Map every row with [`FromRow`].
    pub fn scan<T: FromRow>(&self) -> MockResult<Vec<T>> {
        self.iter().map(|row| T::from_row(&row)).collect()
    }
}

/// A borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl<'a> Row<'a> {
    pub fn columns(&self) -> &'a [String] {
        self.columns
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// Get the value at `idx`, converted into `T`.
    pub fn get<T: FromValue>(&self, idx: usize) -> MockResult<T> {
        let column = self.columns.get(idx).map(String::as_str).unwrap_or("?");
        let value = self
            .values
            .get(idx)
            .ok_or_else(|| MockError::decode(column, format!("column index {idx} out of range")))?;
        T::from_value(column, value)
    }

    /// Get the value of the named column, converted into `T`.
    pub fn get_by_name<T: FromValue>(&self, column: &str) -> MockResult<T> {
        let idx = self
            .columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| MockError::decode(column, "no such column"))?;
        self.get(idx)
    }
}

/// Trait for types that can be built from a mocked row.
pub trait FromRow: Sized {
    /// Convert a row into Self
    fn from_row(row: &Row<'_>) -> MockResult<Self>;
}

macro_rules! impl_from_row_tuple {
    ($($t:ident : $i:tt),+) => {
        impl<$($t: FromValue),+> FromRow for ($($t,)+) {
            fn from_row(row: &Row<'_>) -> MockResult<Self> {
                Ok(($(row.get::<$t>($i)?,)+))
            }
        }
    };
}

impl_from_row_tuple!(A: 0);
impl_from_row_tuple!(A: 0, B: 1);
impl_from_row_tuple!(A: 0, B: 1, C: 2);
impl_from_row_tuple!(A: 0, B: 1, C: 2, D: 3);
