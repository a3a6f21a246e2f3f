//! Fixed-arity record decoders.
//!
//! `objectN(constructor, d1, .., dN)` runs every field decoder against the same
//! value, left to right, and hands the results to `constructor`. Field decoders
//! usually wrap [`get`](super::get) or [`get_in`](super::get_in). The first
//! field to fail ends decoding; later fields are not run.

use super::Decoder;

macro_rules! object_decoder {
    ($(#[$meta:meta])* $name:ident => $($field:ident: $ty:ident),+) => {
        $(#[$meta])*
        pub fn $name<$($ty,)+ R, F>(constructor: F, $($field: Decoder<$ty>),+) -> Decoder<R>
        where
            $($ty: 'static,)+
            R: 'static,
            F: Fn($($ty),+) -> R + Send + Sync + 'static,
        {
            Decoder::new(move |value| Ok(constructor($($field.decode(value)?),+)))
        }
    };
}

object_decoder!(
    /// Decode a one-field record.
    object1 => d1: A
);
object_decoder!(
    /// Decode a two-field record.
    object2 => d1: A, d2: B
);
object_decoder!(object3 => d1: A, d2: B, d3: C);
object_decoder!(object4 => d1: A, d2: B, d3: C, d4: D);
object_decoder!(object5 => d1: A, d2: B, d3: C, d4: D, d5: E);
object_decoder!(object6 => d1: A, d2: B, d3: C, d4: D, d5: E, d6: G);
object_decoder!(object7 => d1: A, d2: B, d3: C, d4: D, d5: E, d6: G, d7: H);
object_decoder!(object8 => d1: A, d2: B, d3: C, d4: D, d5: E, d6: G, d7: H, d8: I);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{bool, fail, get, get_in, int, string};
    use crate::error::DecodeError;
    use crate::value::Value;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug, PartialEq)]
    struct Creds {
        uname: String,
        password: String,
    }

    #[test]
    fn test_object1() {
        let v = Value::map([("a", Value::from(42_i64))]);
        assert_eq!(object1(|x| x, get("a", int())).decode(&v), Ok(42));
    }

    #[test]
    fn test_object2_nested_fields() {
        let decoder = object2(
            |uname, password| Creds { uname, password },
            get_in(["user", "uname"], string()),
            get("password", string()),
        );
        let ok = Value::map([
            ("user", Value::map([("uname", Value::from("chuck"))])),
            ("password", Value::from("secret")),
        ]);
        assert_eq!(
            decoder.decode(&ok),
            Ok(Creds {
                uname: "chuck".into(),
                password: "secret".into()
            })
        );

        let bad = Value::map([
            ("user", Value::map([("uname", Value::from(42_i64))])),
            ("password", Value::from("secret")),
        ]);
        assert!(decoder.decode(&bad).is_err());
    }

    #[test]
    fn test_first_failure_wins_and_stops() {
        let touched = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&touched);
        let decoder = object3(
            |a: i64, b: String, c: bool| (a, b, c),
            get("a", int()),
            fail::<String>("b is broken"),
            get("c", bool()).map(move |c| {
                flag.store(true, Ordering::SeqCst);
                c
            }),
        );
        let v = Value::map([("a", Value::from(1_i64)), ("c", Value::from(true))]);
        assert_eq!(decoder.decode(&v), Err(DecodeError::custom("b is broken")));
        assert!(!touched.load(Ordering::SeqCst));
    }

    #[test]
    fn test_object8_order() {
        let decoder = object8(
            |a, b, c, d, e, f, g, h| vec![a, b, c, d, e, f, g, h],
            get("a", int()),
            get("b", int()),
            get("c", int()),
            get("d", int()),
            get("e", int()),
            get("f", int()),
            get("g", int()),
            get("h", int()),
        );
        let v = Value::map(
            ["a", "b", "c", "d", "e", "f", "g", "h"]
                .into_iter()
                .zip(1_i64..)
                .map(|(k, n)| (k, Value::from(n))),
        );
        assert_eq!(decoder.decode(&v), Ok(vec![1, 2, 3, 4, 5, 6, 7, 8]));
    }
}
