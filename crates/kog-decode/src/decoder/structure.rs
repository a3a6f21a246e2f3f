//! Decoders that walk into maps and lists.
//!
//! Collection decoders visit each element once and stop at the first element
//! that fails, returning that element's error.

use indexmap::IndexMap;

use super::Decoder;
use crate::error::{DecodeError, Result};
use crate::value::Value;

/// Apply `inner` to the value stored under `key`.
pub fn get<T: 'static>(key: impl Into<String>, inner: Decoder<T>) -> Decoder<T> {
    let key = key.into();
    Decoder::new(move |value| inner.decode(field(value, &key)?))
}

/// Apply `inner` to the value found by following `path` through nested maps.
///
/// An empty path applies `inner` to the value itself. Any missing step fails
/// the whole lookup.
pub fn get_in<I, K, T>(path: I, inner: Decoder<T>) -> Decoder<T>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
    T: 'static,
{
    let path: Vec<String> = path.into_iter().map(Into::into).collect();
    Decoder::new(move |value| {
        let target = path
            .iter()
            .try_fold(value, |current, key| field(current, key))?;
        inner.decode(target)
    })
}

fn field<'v>(value: &'v Value, key: &str) -> Result<&'v Value> {
    match value {
        Value::Map(entries) => entries
            .get(key)
            .ok_or_else(|| DecodeError::MissingKey(key.to_string())),
        other => Err(DecodeError::mismatch("map", other)),
    }
}

/// Apply `inner` to the element at position `i` of a list.
///
/// Negative positions are out of range; they do not count from the end.
pub fn index<T: 'static>(i: isize, inner: Decoder<T>) -> Decoder<T> {
    Decoder::new(move |value| match value {
        Value::List(items) => {
            let item = usize::try_from(i)
                .ok()
                .and_then(|pos| items.get(pos))
                .ok_or(DecodeError::IndexOutOfRange {
                    index: i,
                    len: items.len(),
                })?;
            inner.decode(item)
        }
        other => Err(DecodeError::mismatch("list", other)),
    })
}

/// Decode every element of a list, preserving order.
pub fn list_of<T: 'static>(inner: Decoder<T>) -> Decoder<Vec<T>> {
    Decoder::new(move |value| match value {
        Value::List(items) => items.iter().map(|item| inner.decode(item)).collect(),
        other => Err(DecodeError::mismatch("list", other)),
    })
}

/// [`list_of`] producing a boxed slice.
pub fn array_of<T: 'static>(inner: Decoder<T>) -> Decoder<Box<[T]>> {
    list_of(inner).map(Vec::into_boxed_slice)
}

/// Decode every value of a map into `(key, value)` pairs, in map order.
pub fn key_value_pairs<T: 'static>(inner: Decoder<T>) -> Decoder<Vec<(String, T)>> {
    Decoder::new(move |value| match value {
        Value::Map(entries) => entries
            .iter()
            .map(|(key, item)| inner.decode(item).map(|decoded| (key.clone(), decoded)))
            .collect(),
        other => Err(DecodeError::mismatch("map", other)),
    })
}

/// Decode every value of a map, keeping the keys.
pub fn map_of<T: 'static>(inner: Decoder<T>) -> Decoder<IndexMap<String, T>> {
    Decoder::new(move |value| match value {
        Value::Map(entries) => entries
            .iter()
            .map(|(key, item)| inner.decode(item).map(|decoded| (key.clone(), decoded)))
            .collect(),
        other => Err(DecodeError::mismatch("map", other)),
    })
}

/// Decode a two-element list positionally.
pub fn pair_of<A, B>(first: Decoder<A>, second: Decoder<B>) -> Decoder<(A, B)>
where
    A: 'static,
    B: 'static,
{
    Decoder::new(move |value| match value {
        Value::List(items) => match items.as_slice() {
            [a, b] => Ok((first.decode(a)?, second.decode(b)?)),
            _ => Err(DecodeError::LengthMismatch {
                expected: 2,
                found: items.len(),
            }),
        },
        other => Err(DecodeError::mismatch("list", other)),
    })
}

/// Decode a three-element list positionally.
pub fn triple_of<A, B, C>(
    first: Decoder<A>,
    second: Decoder<B>,
    third: Decoder<C>,
) -> Decoder<(A, B, C)>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Decoder::new(move |value| match value {
        Value::List(items) => match items.as_slice() {
            [a, b, c] => Ok((first.decode(a)?, second.decode(b)?, third.decode(c)?)),
            _ => Err(DecodeError::LengthMismatch {
                expected: 3,
                found: items.len(),
            }),
        },
        other => Err(DecodeError::mismatch("list", other)),
    })
}
