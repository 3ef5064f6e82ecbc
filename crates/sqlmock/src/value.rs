//! Driver values carried by mocked rows.

use crate::error::{MockError, MockResult};
use chrono::NaiveDateTime;
use std::fmt;

/// A single value as a SQL driver would hand it back.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(NaiveDateTime),
    Json(serde_json::Value),
    Uuid(uuid::Uuid),
}

impl Value {
    /// Short type name used in decode errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Timestamp(_) => "timestamp",
            Value::Json(_) => "json",
            Value::Uuid(_) => "uuid",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v:?}"),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Timestamp(v) => write!(f, "{v}"),
            Value::Json(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Conversion out of a [`Value`] when scanning a row.
pub trait FromValue: Sized {
    /// Convert `value`, read from `column`, into `Self`.
    fn from_value(column: &str, value: &Value) -> MockResult<Self>;
}

fn mismatch(column: &str, want: &str, got: &Value) -> MockError {
    MockError::decode(
        column,
        format!("cannot scan {} value {} into {}", got.type_name(), got, want),
    )
}

impl FromValue for Value {
    fn from_value(_column: &str, value: &Value) -> MockResult<Self> {
        Ok(value.clone())
    }
}

impl FromValue for i64 {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Int(v) => Ok(*v),
            Value::Text(s) => s
                .parse()
                .map_err(|e| MockError::decode(column, format!("{e}"))),
            other => Err(mismatch(column, "i64", other)),
        }
    }
}

macro_rules! impl_from_value_narrow {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(column: &str, value: &Value) -> MockResult<Self> {
                    let wide = i64::from_value(column, value)?;
                    <$t>::try_from(wide).map_err(|_| {
                        MockError::decode(
                            column,
                            format!("value {wide} out of range for {}", stringify!($t)),
                        )
                    })
                }
            }
        )*
    };
}

impl_from_value_narrow!(i8, i16, i32, u8, u16, u32, u64, usize);

/// Largest integer magnitude an `f64` holds without rounding (2^53).
const MAX_EXACT_F64_INT: u64 = 1 << 53;

impl FromValue for f64 {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Float(v) => Ok(*v),
            Value::Int(v) if v.unsigned_abs() <= MAX_EXACT_F64_INT => Ok(*v as f64),
            Value::Int(v) => Err(MockError::decode(
                column,
                format!("integer {v} is not exactly representable as f64"),
            )),
            other => Err(mismatch(column, "f64", other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Bool(v) => Ok(*v),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            other => Err(mismatch(column, "bool", other)),
        }
    }
}

impl FromValue for String {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Text(v) => Ok(v.clone()),
            Value::Bytes(v) => String::from_utf8(v.clone())
                .map_err(|e| MockError::decode(column, e.to_string())),
            other => Err(mismatch(column, "String", other)),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Bytes(v) => Ok(v.clone()),
            Value::Text(v) => Ok(v.clone().into_bytes()),
            other => Err(mismatch(column, "Vec<u8>", other)),
        }
    }
}

impl FromValue for NaiveDateTime {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Timestamp(v) => Ok(*v),
            other => Err(mismatch(column, "NaiveDateTime", other)),
        }
    }
}

impl FromValue for serde_json::Value {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Json(v) => Ok(v.clone()),
            Value::Text(s) => {
                serde_json::from_str(s).map_err(|e| MockError::decode(column, e.to_string()))
            }
            other => Err(mismatch(column, "serde_json::Value", other)),
        }
    }
}

impl FromValue for uuid::Uuid {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Uuid(v) => Ok(*v),
            Value::Text(s) => {
                uuid::Uuid::parse_str(s).map_err(|e| MockError::decode(column, e.to_string()))
            }
            other => Err(mismatch(column, "Uuid", other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(column: &str, value: &Value) -> MockResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(column, other).map(Some),
        }
    }
}

/// Build a `Vec<Value>` from a list of expressions convertible into [`Value`].
///
/// ```ignore
/// let row = sqlmock::values![1, "alice", None::<i64>];
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($v:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($v)),+]
    };
}
