//! Combinators that do not look at the shape of the value themselves.

use super::Decoder;
use crate::error::DecodeError;
use crate::value::Value;

/// Always succeeds with `value`, whatever the input.
pub fn succeed<T>(value: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::new(move |_| Ok(value.clone()))
}

/// Always fails with `message`, whatever the input.
pub fn fail<T: 'static>(message: impl Into<String>) -> Decoder<T> {
    let message = message.into();
    Decoder::new(move |_| Err(DecodeError::Custom(message.clone())))
}

/// Try each decoder in order and return the first success.
///
/// When every alternative fails the result is [`DecodeError::NoneMatched`]
/// rather than any one alternative's error.
pub fn one_of<T: 'static>(decoders: impl IntoIterator<Item = Decoder<T>>) -> Decoder<T> {
    let decoders: Vec<Decoder<T>> = decoders.into_iter().collect();
    Decoder::new(move |value| {
        decoders
            .iter()
            .find_map(|decoder| decoder.decode(value).ok())
            .ok_or(DecodeError::NoneMatched)
    })
}

/// `None` for `Null`, otherwise `inner`'s result wrapped in `Some`.
pub fn nullable<T: 'static>(inner: Decoder<T>) -> Decoder<Option<T>> {
    Decoder::new(move |value| match value {
        Value::Null => Ok(None),
        other => inner.decode(other).map(Some),
    })
}

/// Run two decoders against the same value and combine their results.
pub fn map2<A, B, R, F>(first: Decoder<A>, second: Decoder<B>, f: F) -> Decoder<R>
where
    A: 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    Decoder::new(move |value| {
        let a = first.decode(value)?;
        let b = second.decode(value)?;
        Ok(f(a, b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{bool, get, int, string};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_succeed_and_fail_ignore_input() {
        for v in [Value::Null, Value::from("x"), Value::empty_map()] {
            assert_eq!(succeed(7).decode(&v), Ok(7));
            assert_eq!(
                fail::<i32>("version 5 is not supported").decode(&v),
                Err(DecodeError::custom("version 5 is not supported"))
            );
        }
    }

    #[test]
    fn test_one_of_first_success() {
        let decoder = one_of([
            string().map(|s| format!("{s}x")),
            int().map(|n| (n + 1).to_string()),
        ]);
        assert_eq!(decoder.decode(&Value::from("foo")), Ok("foox".to_string()));
        assert_eq!(decoder.decode(&Value::from(2_i64)), Ok("3".to_string()));
        assert_eq!(
            decoder.decode(&Value::from(true)),
            Err(DecodeError::NoneMatched)
        );
    }

    #[test]
    fn test_one_of_empty_never_matches() {
        let decoder: Decoder<i64> = one_of(Vec::new());
        assert_eq!(decoder.decode(&Value::Null), Err(DecodeError::NoneMatched));
    }

    #[test]
    fn test_nullable() {
        assert_eq!(nullable(int()).decode(&Value::from(42_i64)), Ok(Some(42)));
        assert_eq!(nullable(int()).decode(&Value::Null), Ok(None));
        assert!(nullable(int()).decode(&Value::from(true)).is_err());
    }

    #[test]
    fn test_map2() {
        let v = Value::map([("a", Value::from(1_i64)), ("b", Value::from(2_i64))]);
        let sum = map2(get("a", int()), get("b", int()), |a, b| a + b);
        assert_eq!(sum.decode(&v), Ok(3));

        let broken = map2(get("a", bool()), get("b", int()), |a, b| (a, b));
        assert_eq!(
            broken.decode(&v),
            Err(DecodeError::TypeMismatch {
                expected: "boolean",
                found: "number"
            })
        );
    }

    #[test]
    fn test_map2_skips_second_after_first_fails() {
        let calls = Arc::new(AtomicUsize::new(0));
        let second = {
            let calls = Arc::clone(&calls);
            Decoder::new(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(0_i64)
            })
        };
        let decoder = map2(int(), second, |a, b| a + b);

        assert_eq!(
            decoder.decode(&Value::from("x")),
            Err(DecodeError::NotAnInt("x".to_string()))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(decoder.decode(&Value::from("4")), Ok(4));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
