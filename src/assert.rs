//! Assertion Library
//!
//! Condition checks for test bodies. Each check returns `Ok(())` when it holds
//! and otherwise a generic [`ErrorKind::Error`] failure carrying a formatted
//! message, so a body aborts with `?` on the first failed assertion. The
//! assertion's call site is recorded as the failure's stack frame.

use crate::errors::{ErrorKind, HarnessError};
use crate::runtime::Value;

fn format_message(expected: &Value, comparison: &str, actual: &Value, message: &str) -> String {
    format!(
        "Result {actual} does not {comparison} expected value {expected}\nAssert message: {message}"
    )
}

/// Fails only when `condition` is the boolean `false`; every other value passes.
///
/// ```rust
/// use normharness::assert;
/// use normharness::runtime::Value;
/// assert!(assert::assert(true, "holds").is_ok());
/// assert!(assert::assert(Value::Undefined, "not strictly false").is_ok());
/// assert!(assert::assert(false, "fails").is_err());
/// ```
#[track_caller]
pub fn assert(condition: impl Into<Value>, message: &str) -> Result<(), HarnessError> {
    match condition.into() {
        Value::Bool(false) => Err(HarnessError::failure(message)),
        _ => Ok(()),
    }
}

/// Alias of [`assert`].
#[track_caller]
pub fn ok(condition: impl Into<Value>, message: &str) -> Result<(), HarnessError> {
    assert(condition, message)
}

/// Loose (`==`) equality.
#[track_caller]
pub fn equal(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> Result<(), HarnessError> {
    let (expected, actual) = (expected.into(), actual.into());
    assert(
        expected.loose_eq(&actual),
        &format_message(&expected, "equal", &actual, message),
    )
}

/// Strict (`===`) equality.
#[track_caller]
pub fn strict_equal(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> Result<(), HarnessError> {
    let (expected, actual) = (expected.into(), actual.into());
    assert(
        expected.strict_eq(&actual),
        &format_message(&expected, "strict-equal", &actual, message),
    )
}

/// Equality check used throughout the suite; strict.
#[track_caller]
pub fn are_equal(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    message: &str,
) -> Result<(), HarnessError> {
    strict_equal(expected, actual, message)
}

/// Runs `body` and succeeds only if it fails with an error of the `expected` kind family.
///
/// ```rust
/// use normharness::{assert, ErrorKind, HarnessError};
/// let raised = assert::throws(
///     || Err::<(), _>(HarnessError::range_error("bad")),
///     ErrorKind::RangeError,
///     "",
/// );
/// assert!(raised.is_ok());
/// let silent = assert::throws(|| Ok(()), ErrorKind::RangeError, "");
/// assert!(silent.unwrap_err().message().starts_with("Test did not throw"));
/// ```
#[track_caller]
pub fn throws<T>(
    body: impl FnOnce() -> Result<T, HarnessError>,
    expected: ErrorKind,
    message: &str,
) -> Result<(), HarnessError> {
    let text = match body() {
        Ok(_) => "Test did not throw".to_string(),
        Err(err) if err.kind().is_a(expected) => return Ok(()),
        Err(err) => format!(
            "Expected test to throw {expected}, but it actually threw {}",
            err.kind()
        ),
    };
    if message.is_empty() {
        Err(HarnessError::failure(text))
    } else {
        Err(HarnessError::failure(format!("{text}\nAssert message: {message}")))
    }
}
