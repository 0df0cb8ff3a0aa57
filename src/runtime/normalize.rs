//! `String.prototype.normalize` for the runtime under test.
//!
//! Argument handling follows the runtime: the receiver must be coercible, an
//! absent form means NFC, any other form must name one of the four Unicode
//! normalization forms exactly, and malformed UTF-16 is rejected. The Unicode
//! algorithm itself sits behind the [`Normalizer`] trait.

use std::fmt;

use unicode_normalization::UnicodeNormalization;

use super::text::JsString;
use super::value::{Function, Value};
use crate::errors::HarnessError;

const METHOD_NAME: &str = "String.prototype.normalize";

/// A Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalizationForm {
    #[default]
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalizationForm {
    pub const ALL: [NormalizationForm; 4] = [Self::Nfc, Self::Nfd, Self::Nfkc, Self::Nfkd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }

    /// Looks up a form by its exact, case-sensitive name.
    ///
    /// ```rust
    /// use normharness::runtime::normalize::NormalizationForm;
    /// assert_eq!(NormalizationForm::from_name("NFKD"), Some(NormalizationForm::Nfkd));
    /// assert_eq!(NormalizationForm::from_name("nfc"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|form| form.as_str() == name)
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The Unicode normalization algorithm used by the runtime.
pub trait Normalizer {
    fn normalize(&self, text: &str, form: NormalizationForm) -> String;
}

/// [`Normalizer`] backed by the `unicode-normalization` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizer;

impl Normalizer for UnicodeNormalizer {
    fn normalize(&self, text: &str, form: NormalizationForm) -> String {
        match form {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfd => text.nfd().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
            NormalizationForm::Nfkd => text.nfkd().collect(),
        }
    }
}

/// The `normalize` method as a function value.
pub fn normalize_function() -> Value {
    Value::from(Function::native_method("normalize"))
}

/// Calls `String.prototype.normalize` on `receiver` with `form`, using [`UnicodeNormalizer`].
///
/// Pass [`Value::Undefined`] as `form` for the default (NFC).
///
/// # Examples
///
/// ```rust
/// use normharness::runtime::normalize::normalize;
/// use normharness::runtime::value::Value;
/// use normharness::ErrorKind;
///
/// let nfd = normalize(&Value::from("\u{00C4}ffin"), &Value::from("NFD")).unwrap();
/// assert!(nfd.strict_eq(&Value::from("A\u{0308}ffin")));
///
/// let err = normalize(&Value::Null, &Value::Undefined).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeError);
/// ```
#[track_caller]
pub fn normalize(receiver: &Value, form: &Value) -> Result<Value, HarnessError> {
    normalize_with(&UnicodeNormalizer, receiver, form)
}

/// Like [`normalize`], with an explicit [`Normalizer`].
#[track_caller]
pub fn normalize_with<N: Normalizer + ?Sized>(
    normalizer: &N,
    receiver: &Value,
    form: &Value,
) -> Result<Value, HarnessError> {
    let text = receiver.require_object_coercible(METHOD_NAME)?.to_js_string();

    let form = match form {
        Value::Undefined => NormalizationForm::default(),
        other => {
            let name = other.to_js_string().to_string_lossy();
            let Some(form) = NormalizationForm::from_name(&name) else {
                return Err(HarnessError::range_error(format!(
                    "{METHOD_NAME}: argument '{name}' is not one of NFC, NFD, NFKC or NFKD"
                )));
            };
            form
        }
    };

    let Some(input) = text.to_rust_string() else {
        let index = text.first_lone_surrogate().unwrap_or_default();
        return Err(HarnessError::range_error(format!(
            "{METHOD_NAME}: invalid string, unpaired surrogate at index {index}"
        )));
    };

    log::trace!("normalizing {} code units to {form}", text.len());
    Ok(Value::String(JsString::from(normalizer.normalize(&input, form))))
}
