//! JSON front end.
//!
//! JSON text is parsed by `serde_json` and converted into the shared [`Value`]
//! tree, so every decoder works the same on both dialects.

use tracing::debug;

use crate::decoder::Decoder;
use crate::error::ParseError;
use crate::value::Value;

/// Parse JSON text into a value tree.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(json))
}

/// Parse JSON from a reader into a value tree.
pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Value, ParseError> {
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    Ok(Value::from(json))
}

/// Parse JSON text and decode it.
pub fn decode<T: 'static>(text: &str, decoder: &Decoder<T>) -> Result<T, ParseError> {
    let value = parse(text)?;
    decoder.decode(&value).map_err(|err| {
        debug!(error = %err, "JSON document did not decode");
        ParseError::from(err)
    })
}
