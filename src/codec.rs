//! JSON codec for `TestEnum`.
//!
//! Variants are written as the JSON string of their declared name. Reading
//! distinguishes a value of the wrong JSON type from a string that names no
//! variant, so callers can report the two failures separately.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::DecodeError;
use crate::variant::TestEnum;

/// Serializable description of a variant: its name and attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantRecord {
    /// Declared variant name.
    pub name: &'static str,
    /// The variant's boolean attribute.
    pub test_priv: bool,
}

/// Encodes a variant as a JSON string value.
#[must_use]
pub fn encode(variant: TestEnum) -> Value {
    Value::String(variant.name().to_string())
}

/// Decodes a variant from a JSON value.
///
/// # Errors
///
/// Returns [`DecodeError::ExpectedEnumString`] when the value is not a string
/// and [`DecodeError::InvalidEnumValue`] when the string names no variant.
pub fn decode(value: &Value) -> Result<TestEnum, DecodeError> {
    match value {
        Value::String(name) => Ok(TestEnum::lookup(name)?),
        other => {
            let found = json_type(other);
            debug!(found, "refusing to decode TestEnum from non-string JSON");
            Err(DecodeError::ExpectedEnumString { found })
        }
    }
}

/// Encodes a variant as JSON text, e.g. `"TEST_1"`.
#[must_use]
pub fn to_json_string(variant: TestEnum) -> String {
    encode(variant).to_string()
}

/// Parses JSON text and decodes a variant from it.
///
/// # Errors
///
/// Returns [`DecodeError::Syntax`] when the text is not JSON, otherwise the
/// errors of [`decode`].
pub fn from_json_str(text: &str) -> Result<TestEnum, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    decode(&value)
}

/// Describes a variant for display.
#[must_use]
pub const fn describe(variant: TestEnum) -> VariantRecord {
    VariantRecord {
        name: variant.name(),
        test_priv: variant.test_priv(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
