//! The `String.prototype.normalize` conformance suite.
//!
//! Cases are listed in a fixed order; their indices are what `-only:<index>`
//! selects on.

use crate::assert;
use crate::errors::{ErrorKind, HarnessError};
use crate::runtime::{
    normalize, normalize_function, Function, JsString, NormalizationForm, Object, Value,
};
use crate::test::TestCase;

/// Builds the normalization suite.
pub fn normalize_suite() -> Vec<TestCase> {
    vec![
        TestCase::new("Correct errors are thrown for bad calls", bad_calls),
        TestCase::new("String-coercibles can be normalized", string_coercibles),
        TestCase::new("NFC normalization tests", nfc),
        TestCase::new("NFD normalization tests", nfd),
        TestCase::new("NFKC normalization tests", nfkc),
        TestCase::new("NFKD normalization tests", nfkd),
        TestCase::new("Normalization of property strings", property_strings),
        TestCase::new("Normalization is a fixed point for every form", fixed_points),
        TestCase::new("NFC recomposes decomposed input", recomposition),
    ]
}

/// `<receiver>.normalize()` with no form argument.
#[track_caller]
fn normalize_default(receiver: impl Into<Value>) -> Result<Value, HarnessError> {
    normalize(&receiver.into(), &Value::Undefined)
}

/// `<receiver>.normalize(form)`.
#[track_caller]
fn normalize_as(receiver: impl Into<Value>, form: impl Into<Value>) -> Result<Value, HarnessError> {
    normalize(&receiver.into(), &form.into())
}

const SAMPLES: [&str; 5] = [
    "",
    "\u{00C4}ffin",
    "\u{00C4}\u{FB03}n",
    "Henry IV",
    "Henry \u{2163}",
];

fn bad_calls() -> Result<(), HarnessError> {
    assert::throws(|| normalize_as("", "asd"), ErrorKind::RangeError, "")?;
    assert::throws(|| normalize_default(Value::Undefined), ErrorKind::TypeError, "")?;
    for that in [Value::Undefined, Value::Null] {
        assert::throws(|| normalize_default(that.clone()), ErrorKind::TypeError, "")?;
    }
    assert::throws(|| normalize_function().construct(), ErrorKind::TypeError, "")?;
    for malformed in [[0x61, 0xDC00, 0x62], [0x61, 0xD800, 0x62]] {
        let malformed = JsString::from_code_units(malformed.to_vec());
        assert::throws(|| normalize_default(malformed.clone()), ErrorKind::RangeError, "")?;
    }
    Ok(())
}

fn string_coercibles() -> Result<(), HarnessError> {
    assert::are_equal("5", normalize_default(5)?, "")?;
    assert::are_equal(
        "function String() { [native code] }",
        normalize_default(Function::native("String"))?,
        "",
    )?;
    let foo_code = "function foo() { return 3; }";
    let foo = Function::script("foo", foo_code);
    assert::are_equal(foo_code, normalize_default(foo)?, "")?;
    Ok(())
}

fn nfc() -> Result<(), HarnessError> {
    // no argument is treated as NFC
    assert::are_equal("", normalize_default("")?, "Empty string normalizes to itself")?;
    for sample in &SAMPLES[1..] {
        assert::are_equal(*sample, normalize_default(*sample)?, "")?;
    }

    for nfc in [Value::Undefined, Value::from("NFC")] {
        assert::are_equal("", normalize_as("", nfc.clone())?, "Empty string normalizes to itself")?;
        for sample in &SAMPLES[1..] {
            assert::are_equal(*sample, normalize_as(*sample, nfc.clone())?, "")?;
        }
    }
    Ok(())
}

fn nfd() -> Result<(), HarnessError> {
    assert::are_equal("A\u{0308}ffin", normalize_as("\u{00C4}ffin", "NFD")?, "")?;
    assert::are_equal("A\u{0308}\u{FB03}n", normalize_as("\u{00C4}\u{FB03}n", "NFD")?, "")?;
    assert::are_equal("Henry IV", normalize_as("Henry IV", "NFD")?, "")?;
    assert::are_equal("Henry \u{2163}", normalize_as("Henry \u{2163}", "NFD")?, "")?;
    Ok(())
}

fn nfkc() -> Result<(), HarnessError> {
    assert::are_equal("\u{00C4}ffin", normalize_as("\u{00C4}ffin", "NFKC")?, "")?;
    assert::are_equal("\u{00C4}ffin", normalize_as("\u{00C4}\u{FB03}n", "NFKC")?, "")?;
    assert::are_equal("Henry IV", normalize_as("Henry IV", "NFKC")?, "")?;
    assert::are_equal("Henry IV", normalize_as("Henry \u{2163}", "NFKC")?, "")?;
    Ok(())
}

fn nfkd() -> Result<(), HarnessError> {
    assert::are_equal("A\u{0308}ffin", normalize_as("\u{00C4}ffin", "NFKD")?, "")?;
    assert::are_equal("A\u{0308}ffin", normalize_as("\u{00C4}\u{FB03}n", "NFKD")?, "")?;
    assert::are_equal("Henry IV", normalize_as("Henry IV", "NFKD")?, "")?;
    assert::are_equal("Henry IV", normalize_as("Henry \u{2163}", "NFKD")?, "")?;
    Ok(())
}

fn property_strings() -> Result<(), HarnessError> {
    let o = Object::new()
        .with_property("blah", "abc")
        .with_property("hello", 42);
    for prop in o.keys() {
        assert::are_equal(prop, normalize_default(prop)?, "")?;
    }
    Ok(())
}

fn fixed_points() -> Result<(), HarnessError> {
    for form in NormalizationForm::ALL {
        assert::are_equal("", normalize_as("", form.as_str())?, "Empty string normalizes to itself")?;
        for sample in SAMPLES {
            let once = normalize_as(sample, form.as_str())?;
            let twice = normalize_as(once.clone(), form.as_str())?;
            assert::are_equal(once, twice, &format!("{form} of {sample:?}"))?;
        }
    }
    Ok(())
}

fn recomposition() -> Result<(), HarnessError> {
    assert::are_equal("\u{00C4}ffin", normalize_as("A\u{0308}ffin", "NFC")?, "")?;
    assert::are_equal("\u{00C4}\u{FB03}n", normalize_as("A\u{0308}\u{FB03}n", "NFC")?, "")?;
    Ok(())
}
