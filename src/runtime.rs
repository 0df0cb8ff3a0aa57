//! The runtime under test.
//!
//! A small model of script strings and values, just large enough for the
//! normalization suite to express its calls: coercion of the receiver, the
//! form argument, and the error classes raised on bad input.

pub mod normalize;
pub mod text;
pub mod value;

pub use normalize::{normalize, normalize_function, NormalizationForm, Normalizer, UnicodeNormalizer};
pub use text::JsString;
pub use value::{Function, Object, Value};
