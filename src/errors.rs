//! Harness Error Handling
//!
//! Every failure a test body can raise, whether an assertion that did not hold
//! or a script-level error from the runtime under test, is a [`HarnessError`].
//! Errors are classified by a closed set of [`ErrorKind`] tags; assertions that
//! expect a particular failure compare the tag rather than any message text.

use std::fmt;
use std::panic::Location;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// ERROR KINDS
// ============================================================================

/// Type-safe error classification, mirroring the script-level error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic failure. Every assertion failure has this kind.
    Error,
    /// Receiver or operand of the wrong type (e.g. `null` receiver).
    TypeError,
    /// Value outside the accepted range (e.g. unknown normalization form).
    RangeError,
}

impl ErrorKind {
    /// Returns the script-visible name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
        }
    }

    /// Returns true if an error of this kind belongs to the `expected` family.
    ///
    /// `Error` is the root of the family, so every kind is an `Error`; the
    /// other kinds only match themselves.
    ///
    /// ```rust
    /// use normharness::ErrorKind;
    /// assert!(ErrorKind::TypeError.is_a(ErrorKind::Error));
    /// assert!(!ErrorKind::TypeError.is_a(ErrorKind::RangeError));
    /// ```
    pub fn is_a(&self, expected: ErrorKind) -> bool {
        expected == ErrorKind::Error || *self == expected
    }

    fn code(&self) -> &'static str {
        match self {
            ErrorKind::Error => "normharness::error",
            ErrorKind::TypeError => "normharness::type_error",
            ErrorKind::RangeError => "normharness::range_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// STACK FRAMES
// ============================================================================

/// A source location recorded when an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl From<&'static Location<'static>> for Frame {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

// ============================================================================
// HARNESS ERROR
// ============================================================================

/// The single failure signal raised inside test bodies.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct HarnessError {
    kind: ErrorKind,
    message: String,
    frames: Vec<Frame>,
}

impl HarnessError {
    /// Creates an error of the given kind, recording the caller as its first frame.
    #[track_caller]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            frames: vec![Location::caller().into()],
        }
    }

    /// Creates an error with no recorded frames.
    pub fn without_frames(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            frames: Vec::new(),
        }
    }

    #[track_caller]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Error, message)
    }

    #[track_caller]
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeError, message)
    }

    #[track_caller]
    pub fn range_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RangeError, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Renders the error as a stack trace: a `Kind: message` header followed
    /// by one `    at <location>` line per recorded frame, innermost first.
    ///
    /// ```rust
    /// use normharness::{ErrorKind, HarnessError};
    /// let err = HarnessError::without_frames(ErrorKind::RangeError, "bad form");
    /// assert_eq!(err.stack(), "RangeError: bad form");
    /// ```
    pub fn stack(&self) -> String {
        let mut stack = self.to_string();
        for frame in &self.frames {
            stack.push_str("\n    at ");
            stack.push_str(&frame.to_string());
        }
        stack
    }
}

impl Diagnostic for HarnessError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.frames
            .first()
            .map(|frame| Box::new(format!("raised at {frame}")) as Box<dyn fmt::Display + 'a>)
    }
}
