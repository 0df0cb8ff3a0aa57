//! UTF-16 script strings.
//!
//! Script strings are sequences of 16-bit code units and, unlike Rust's `str`,
//! may hold unpaired surrogates. Malformed text has to be representable so the
//! runtime can reject it.

use std::fmt;

/// An immutable sequence of UTF-16 code units.
///
/// # Examples
///
/// ```rust
/// use normharness::runtime::text::JsString;
/// let s = JsString::from("\u{00C4}ffin");
/// assert_eq!(s.len(), 5);
/// assert_eq!(s.first_lone_surrogate(), None);
///
/// let bad = JsString::from_code_units(vec![0x61, 0xDC00, 0x62]);
/// assert_eq!(bad.first_lone_surrogate(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsString(Vec<u16>);

impl JsString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_code_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    pub fn code_units(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the code-unit index of the first surrogate that is not part of
    /// a well-formed pair.
    pub fn first_lone_surrogate(&self) -> Option<usize> {
        let mut index = 0;
        for decoded in char::decode_utf16(self.0.iter().copied()) {
            match decoded {
                Ok(c) => index += c.len_utf16(),
                Err(_) => return Some(index),
            }
        }
        None
    }

    /// Converts to a Rust string, or `None` if the text is malformed.
    pub fn to_rust_string(&self) -> Option<String> {
        String::from_utf16(&self.0).ok()
    }

    /// Converts to a Rust string, replacing lone surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}
