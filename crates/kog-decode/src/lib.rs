//! kog-decode: composable, typed decoders over loosely structured values.
//!
//! Raw input (a URL-encoded form body or JSON text) is first turned into a
//! [`Value`] tree by one of the front ends ([`form`], [`json`]). A
//! [`Decoder<T>`] is then applied to the tree to produce a `T` or a
//! [`DecodeError`] describing the first thing that did not match.
//!
//! ```rust
//! use kog_decode::decoder::{get, int, object2, string};
//! use kog_decode::form;
//!
//! #[derive(Debug, PartialEq)]
//! struct Login {
//!     user: String,
//!     attempts: i64,
//! }
//!
//! let decoder = object2(
//!     |user, attempts| Login { user, attempts },
//!     get("user", string()),
//!     get("attempts", int()),
//! );
//!
//! let login = form::decode(Some("user=chuck&attempts=3"), &decoder).unwrap();
//! assert_eq!(login, Login { user: "chuck".into(), attempts: 3 });
//! ```

pub mod decoder;
pub mod error;
pub mod form;
pub mod json;
pub mod value;

pub use decoder::Decoder;
pub use error::{DecodeError, ParseError, Result};
pub use form::{FormLimits, FormParser};
pub use value::{Number, Value};
