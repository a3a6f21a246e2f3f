//! Typed decoders and the combinators that build them.
//!
//! A [`Decoder<T>`] is a pure function from a borrowed [`Value`] to
//! `Result<T, DecodeError>`. Decoders hold no mutable state, clone cheaply and
//! can be shared across threads; the same decoder may be applied to any number
//! of values.
//!
//! # Building blocks
//!
//! - Primitives: [`string`], [`int`], [`float`], [`bool`], [`null`], [`value`],
//!   [`percent_decoded`]
//! - Structure: [`get`], [`get_in`], [`index`], [`list_of`], [`array_of`],
//!   [`key_value_pairs`], [`map_of`], [`pair_of`], [`triple_of`]
//! - Objects: [`object1`] through [`object8`]
//! - Combinators: [`Decoder::map`], [`Decoder::and_then`], [`map2`], [`one_of`],
//!   [`nullable`], [`succeed`], [`fail`]
//!
//! Every combinator stops at the first failure and returns it unchanged.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

pub mod combinator;
pub mod object;
pub mod primitive;
pub mod structure;

pub use combinator::{fail, map2, nullable, one_of, succeed};
pub use object::{object1, object2, object3, object4, object5, object6, object7, object8};
pub use primitive::{bool, float, int, null, percent_decoded, string, value};
pub use structure::{
    array_of, get, get_in, index, key_value_pairs, list_of, map_of, pair_of, triple_of,
};

type DecodeFn<T> = dyn Fn(&Value) -> Result<T> + Send + Sync;

/// A reusable recipe for extracting a `T` from a [`Value`].
pub struct Decoder<T> {
    run: Arc<DecodeFn<T>>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decoder<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> Decoder<T> {
    /// Wrap a decoding function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Run the decoder against a value.
    pub fn decode(&self, value: &Value) -> Result<T> {
        (self.run)(value)
    }

    /// Transform a successful result. Failures pass through untouched.
    pub fn map<U, F>(self, f: F) -> Decoder<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Decoder::new(move |value| self.decode(value).map(&f))
    }

    /// Pick the next decoder based on what this one produced.
    ///
    /// The decoder returned by `f` is applied to the same input value this
    /// decoder saw, not to a sub-value, so later decoding can depend on
    /// earlier fields (for example a `version` field choosing how to read the
    /// rest of the document). `f` is not called when this decoder fails.
    pub fn and_then<U, F>(self, f: F) -> Decoder<U>
    where
        U: 'static,
        F: Fn(T) -> Decoder<U> + Send + Sync + 'static,
    {
        Decoder::new(move |value| {
            let decoded = self.decode(value)?;
            f(decoded).decode(value)
        })
    }
}
