//! URL-encoded form bodies.
//!
//! [`parse`] turns `a=1&b=2&a=3` into a top-level [`Value::Map`]. The parser is
//! deliberately lenient: segments without `=` or with an empty value are
//! dropped, not reported. Keys are percent-decoded; values are kept exactly as
//! received (use [`percent_decoded`](crate::decoder::percent_decoded) to decode
//! them). A key seen more than once collapses into a [`Value::List`] of its
//! values in arrival order. Maps never nest.

use std::num::NonZeroUsize;

use indexmap::IndexMap;
use indexmap::map::Entry;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::decoder::Decoder;
use crate::error::Result;
use crate::value::Value;

/// Bounds applied while splitting a form body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    /// Maximum number of `&`-separated segments. The last segment keeps the
    /// unsplit remainder of the body. Zero is rejected when deserializing.
    pub max_segments: NonZeroUsize,
}

impl FormLimits {
    pub const DEFAULT_MAX_SEGMENTS: NonZeroUsize = NonZeroUsize::new(100).unwrap();

    /// Limits with the given segment bound, or `None` for zero.
    pub fn with_max_segments(max_segments: usize) -> Option<Self> {
        NonZeroUsize::new(max_segments).map(|max_segments| Self { max_segments })
    }
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_segments: Self::DEFAULT_MAX_SEGMENTS,
        }
    }
}

/// Form body parser with configurable limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormParser {
    limits: FormLimits,
}

impl FormParser {
    pub fn new(limits: FormLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> FormLimits {
        self.limits
    }

    /// Parse a form body. An absent body yields an empty map.
    pub fn parse(&self, encoded: Option<&str>) -> Value {
        let Some(encoded) = encoded else {
            return Value::empty_map();
        };

        let mut data: IndexMap<String, Value> = IndexMap::new();
        let max_segments = self.limits.max_segments.get();
        let mut segments = 0;

        for segment in encoded.splitn(max_segments, '&') {
            segments += 1;
            let Some((raw_key, raw_value)) = segment.split_once('=') else {
                trace!(segment, "dropping form segment without '='");
                continue;
            };
            if raw_value.is_empty() {
                trace!(key = raw_key, "dropping form segment with empty value");
                continue;
            }
            insert(&mut data, decode_component(raw_key), raw_value);
        }

        if segments == max_segments && encoded.matches('&').count() >= segments {
            debug!(
                max_segments,
                "form body hit the segment limit; remainder kept in the last value"
            );
        }

        Value::Map(data)
    }

    /// Parse a body and run `decoder` against the result.
    pub fn decode<T: 'static>(&self, encoded: Option<&str>, decoder: &Decoder<T>) -> Result<T> {
        let value = self.parse(encoded);
        decoder.decode(&value).inspect_err(|err| {
            debug!(error = %err, "form body did not decode");
        })
    }
}

fn insert(data: &mut IndexMap<String, Value>, key: String, raw_value: &str) {
    let value = Value::String(raw_value.to_string());
    match data.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => match slot.get_mut() {
            Value::List(items) => items.push(value),
            prev => {
                let first = std::mem::replace(prev, Value::Null);
                *prev = Value::List(vec![first, value]);
            }
        },
    }
}

/// Percent-decode one form component, treating `+` as a space.
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced, so this
/// never fails.
pub(crate) fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Parse a form body with default limits.
pub fn parse(encoded: Option<&str>) -> Value {
    FormParser::default().parse(encoded)
}

/// Parse a form body with default limits, as a `Result` for `?` chains.
///
/// Form parsing itself never fails.
pub fn try_parse(encoded: &str) -> Result<Value> {
    Ok(parse(Some(encoded)))
}

/// Parse a form body with default limits and decode it.
pub fn decode<T: 'static>(encoded: Option<&str>, decoder: &Decoder<T>) -> Result<T> {
    FormParser::default().decode(encoded, decoder)
}
