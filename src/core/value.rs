//! Dynamic value type for log messages and arguments
//!
//! `LogValue` is the closed set of shapes a log call accepts: primitives,
//! strings, ordered containers, and error-like values. Containers and errors
//! are reference-counted shared cells so the same value can appear in several
//! places, including cyclically; cycle detection works on the cell pointer.

use parking_lot::RwLock;
use std::sync::Arc;

pub type SharedSeq = Arc<RwLock<Vec<LogValue>>>;
pub type SharedMap = Arc<RwLock<Vec<(String, LogValue)>>>;
pub type SharedError = Arc<RwLock<ErrorValue>>;

#[derive(Debug, Clone, Default)]
pub enum LogValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(SharedSeq),
    Map(SharedMap),
    Error(SharedError),
}

/// An error-like value: display name, message, captured stack frames, and at
/// most one outgoing cause edge. The cause may reference any value, including
/// an ancestor error or the error itself.
#[derive(Debug, Clone, Default)]
pub struct ErrorValue {
    pub name: String,
    pub message: String,
    pub stack: Vec<String>,
    pub cause: Option<LogValue>,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: Vec::new(),
            cause: None,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, frames: Vec<String>) -> Self {
        self.stack = frames;
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: LogValue) -> Self {
        self.cause = Some(cause);
        self
    }
}

impl LogValue {
    pub fn array(items: Vec<LogValue>) -> Self {
        LogValue::Array(Arc::new(RwLock::new(items)))
    }

    pub fn map<K: Into<String>>(entries: Vec<(K, LogValue)>) -> Self {
        LogValue::Map(Arc::new(RwLock::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    pub fn error(err: ErrorValue) -> Self {
        LogValue::Error(Arc::new(RwLock::new(err)))
    }

    /// Build a value from any std error, mapping its `source()` chain onto
    /// the cause chain. Std errors carry no stack, so frames stay empty.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut messages = vec![err.to_string()];
        let mut source = err.source();
        while let Some(inner) = source {
            messages.push(inner.to_string());
            source = inner.source();
        }

        let mut value: Option<LogValue> = None;
        for message in messages.into_iter().rev() {
            let mut error = ErrorValue::new("Error", message);
            error.cause = value.take();
            value = Some(LogValue::error(error));
        }
        value.unwrap_or(LogValue::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogValue::Error(_))
    }

    pub fn as_error(&self) -> Option<&SharedError> {
        match self {
            LogValue::Error(cell) => Some(cell),
            _ => None,
        }
    }

    /// Identity of the shared cell backing a container or error, used for
    /// ancestor tracking during recursive traversal. Scalars have none.
    pub(crate) fn cell_id(&self) -> Option<usize> {
        match self {
            LogValue::Array(cell) => Some(Arc::as_ptr(cell) as usize),
            LogValue::Map(cell) => Some(Arc::as_ptr(cell) as usize),
            LogValue::Error(cell) => Some(Arc::as_ptr(cell) as usize),
            _ => None,
        }
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<ErrorValue> for LogValue {
    fn from(err: ErrorValue) -> Self {
        LogValue::error(err)
    }
}

impl From<Vec<LogValue>> for LogValue {
    fn from(items: Vec<LogValue>) -> Self {
        LogValue::array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert!(matches!(LogValue::from("hello"), LogValue::String(_)));
        assert!(matches!(LogValue::from(42), LogValue::Int(42)));
        assert!(matches!(LogValue::from(true), LogValue::Bool(true)));
        assert!(matches!(LogValue::from(1.5), LogValue::Float(_)));
    }

    #[test]
    fn test_shared_identity() {
        let shared = LogValue::map(vec![("traceId", LogValue::from("abc123"))]);
        let twin = shared.clone();
        assert_eq!(shared.cell_id(), twin.cell_id());

        let other = LogValue::map(vec![("traceId", LogValue::from("abc123"))]);
        assert_ne!(shared.cell_id(), other.cell_id());
    }

    #[test]
    fn test_scalars_have_no_identity() {
        assert!(LogValue::Null.cell_id().is_none());
        assert!(LogValue::from(1).cell_id().is_none());
        assert!(LogValue::from("x").cell_id().is_none());
    }

    #[test]
    fn test_from_std_error_maps_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let value = LogValue::from_error(&inner);

        let cell = value.as_error().expect("error value");
        let guard = cell.read();
        assert_eq!(guard.message, "file missing");
        assert!(guard.cause.is_none());
        assert!(guard.stack.is_empty());
    }

    #[test]
    fn test_from_std_error_with_source() {
        #[derive(Debug)]
        struct Outer(std::io::Error);

        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "request failed")
            }
        }

        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "connection timed out",
        ));
        let value = LogValue::from_error(&err);

        let cell = value.as_error().expect("error value");
        let guard = cell.read();
        assert_eq!(guard.message, "request failed");

        let cause = guard.cause.as_ref().and_then(LogValue::as_error).expect("cause");
        assert_eq!(cause.read().message, "connection timed out");
    }
}
