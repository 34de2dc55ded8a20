//! The uniform outcome wrapper returned by every store operation.

use serde_json::Value;

/// Outcome of a store operation.
///
/// Every [`Store`](crate::Store) operation returns an `Outcome` instead of a
/// `Result`: failures are reported as data, never as `Err`. Callers branch on
/// [`error`](Outcome::error) before trusting [`value`](Outcome::value).
///
/// `value` distinguishes three states:
///
/// - `None` - no value (absent key, or no default supplied)
/// - `Some(Value::Null)` - an explicitly stored JSON `null`
/// - `Some(v)` - a stored value
///
/// Equality is by field comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The retrieved value, the supplied default, or `Some(Value::Null)` for
    /// write operations and failures.
    pub value: Option<Value>,

    /// `true` if the operation failed.
    pub error: bool,
}

impl Outcome {
    pub(crate) fn success(value: Option<Value>) -> Self {
        Self { value, error: false }
    }

    /// Failure outcomes always carry `Null`, never a default value.
    pub(crate) fn failure() -> Self {
        Self { value: Some(Value::Null), error: true }
    }

    /// `true` if the operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.error
    }

    /// `true` if the operation failed.
    pub fn is_err(&self) -> bool {
        self.error
    }

    /// Borrow the carried value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consume the outcome and take the carried value.
    pub fn into_value(self) -> Option<Value> {
        self.value
    }
}
