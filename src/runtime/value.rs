//! Script values exercised by the normalization suite.
//!
//! Only the slice of script semantics the suite relies on is modelled: string
//! coercion, number formatting, the two equality relations and construction.

use std::fmt;
use std::rc::Rc;

use super::text::JsString;
use crate::errors::HarnessError;

// ============================================================================
// FUNCTIONS AND OBJECTS
// ============================================================================

/// A callable value. Only its identity, source text and constructibility matter here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    source: String,
    constructible: bool,
}

impl Function {
    /// A built-in constructor such as `String`.
    pub fn native(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source: native_source(name),
            constructible: true,
        }
    }

    /// A built-in method such as `String.prototype.normalize`; methods are not constructors.
    pub fn native_method(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source: native_source(name),
            constructible: false,
        }
    }

    /// A user-defined function with the given source text.
    pub fn script(name: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            source: source.to_string(),
            constructible: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_constructor(&self) -> bool {
        self.constructible
    }
}

fn native_source(name: &str) -> String {
    format!("function {name}() {{ [native code] }}")
}

/// An ordinary object with insertion-ordered string-keyed properties.
#[derive(Debug, Clone, Default)]
pub struct Object {
    properties: Vec<(JsString, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines or replaces a property, keeping the original position on replace.
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        let key = JsString::from(key);
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((key, value)),
        }
        self
    }

    /// Enumerates property keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &JsString> {
        self.properties.iter().map(|(k, _)| k)
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A script value.
///
/// # Examples
///
/// ```rust
/// use normharness::runtime::value::Value;
/// let five = Value::from(5);
/// assert!(five.loose_eq(&Value::from("5")));
/// assert!(!five.strict_eq(&Value::from("5")));
/// assert_eq!(five.to_js_string(), "5");
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(JsString),
    Function(Rc<Function>),
    Object(Rc<Object>),
}

impl Value {
    /// Returns the `typeof` name of the value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Fails with a `TypeError` when the value is `undefined` or `null`.
    #[track_caller]
    pub fn require_object_coercible(&self, method: &str) -> Result<&Self, HarnessError> {
        if self.is_nullish() {
            return Err(HarnessError::type_error(format!(
                "{method}: 'this' is null or undefined"
            )));
        }
        Ok(self)
    }

    /// String conversion as performed by the runtime.
    pub fn to_js_string(&self) -> JsString {
        match self {
            Value::String(s) => s.clone(),
            Value::Function(f) => JsString::from(f.source()),
            other => JsString::from(other.primitive_text()),
        }
    }

    /// Numeric conversion as performed by the runtime.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            other => string_to_number(&other.to_js_string().to_string_lossy()),
        }
    }

    /// Strict (`===`) equality: same type and same value, objects by identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Loose (`==`) equality with the runtime's coercion rules.
    pub fn loose_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Undefined | Null, Undefined | Null) => true,
            (Undefined | Null, _) | (_, Undefined | Null) => false,
            (Number(_), String(_)) | (String(_), Number(_)) => self.to_number() == other.to_number(),
            (Bool(_), _) => Number(self.to_number()).loose_eq(other),
            (_, Bool(_)) => self.loose_eq(&Number(other.to_number())),
            (Function(_) | Object(_), Number(_) | String(_)) => {
                String(self.to_js_string()).loose_eq(other)
            }
            (Number(_) | String(_), Function(_) | Object(_)) => {
                self.loose_eq(&String(other.to_js_string()))
            }
            _ => self.strict_eq(other),
        }
    }

    /// Invokes the value as a constructor (`new value()`).
    #[track_caller]
    pub fn construct(&self) -> Result<Value, HarnessError> {
        match self {
            Value::Function(f) if f.is_constructor() => Ok(Value::Object(Rc::new(Object::new()))),
            Value::Function(f) => Err(HarnessError::type_error(format!(
                "Function '{}' is not a constructor",
                f.name()
            ))),
            other => Err(HarnessError::type_error(format!(
                "{} is not a constructor",
                other.type_name()
            ))),
        }
    }

    fn primitive_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::Object(_) => "[object Object]".to_string(),
            Value::String(s) => s.to_string_lossy(),
            Value::Function(f) => f.source().to_string(),
        }
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        ryu_js::Buffer::new().format_finite(n).to_string()
    }
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_js_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(JsString::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(JsString::from(s))
    }
}

impl From<JsString> for Value {
    fn from(s: JsString) -> Self {
        Value::String(s)
    }
}

impl From<&JsString> for Value {
    fn from(s: &JsString) -> Self {
        Value::String(s.clone())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(Rc::new(f))
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(Rc::new(o))
    }
}
