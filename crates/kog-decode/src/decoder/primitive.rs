//! Leaf decoders for scalar values.
//!
//! Form bodies carry every scalar as text, so the numeric and boolean decoders
//! accept both the JSON variant and a `String` holding the literal.

use super::Decoder;
use crate::error::DecodeError;
use crate::form::decode_component;
use crate::value::Value;

/// Succeeds with the text of a `String` value.
pub fn string() -> Decoder<String> {
    Decoder::new(|value| match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(DecodeError::mismatch("string", other)),
    })
}

/// Succeeds with an integer from a JSON integer or a string such as `"-42"`.
pub fn int() -> Decoder<i64> {
    Decoder::new(|value| match value {
        Value::String(s) => s.parse().map_err(|_| DecodeError::NotAnInt(s.clone())),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| DecodeError::NotAnInt(n.as_f64().to_string())),
        other => Err(DecodeError::mismatch("int", other)),
    })
}

/// Succeeds with a finite float from any number or numeric string.
pub fn float() -> Decoder<f64> {
    Decoder::new(|value| match value {
        Value::String(s) => s
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| DecodeError::NotAFloat(s.clone())),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(DecodeError::mismatch("float", other)),
    })
}

/// Succeeds for a JSON boolean or the exact strings `"true"` and `"false"`.
pub fn bool() -> Decoder<bool> {
    Decoder::new(|value| match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(DecodeError::NotABool(s.clone())),
        },
        other => Err(DecodeError::mismatch("boolean", other)),
    })
}

/// Succeeds with `placeholder` when the value is `Null`.
pub fn null<T>(placeholder: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::new(move |value| match value {
        Value::Null => Ok(placeholder.clone()),
        other => Err(DecodeError::mismatch("null", other)),
    })
}

/// Returns the raw subtree. Useful for deferring part of a document.
pub fn value() -> Decoder<Value> {
    Decoder::new(|value| Ok(value.clone()))
}

/// Like [`string`], but percent-decodes the text first (`+` is a space).
///
/// The form parser leaves values exactly as they arrived on the wire; this is
/// the decoder to reach for when a field may carry escaped characters.
pub fn percent_decoded() -> Decoder<String> {
    Decoder::new(|value| match value {
        Value::String(s) => Ok(decode_component(s)),
        other => Err(DecodeError::mismatch("string", other)),
    })
}
