//! Error types for decoding
//!
//! Every decoder reports failure through a single [`DecodeError`]. Front ends
//! that can reject raw text (JSON) report through [`ParseError`], which also
//! absorbs decode failures so a parse-then-decode chain can use `?`.

use thiserror::Error;

/// Result type alias for decoder operations
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Why a decoder rejected a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected int, found {0:?}")]
    NotAnInt(String),

    #[error("expected float, found {0:?}")]
    NotAFloat(String),

    #[error("expected boolean, found {0:?}")]
    NotABool(String),

    #[error("expected map to have key: {0}")]
    MissingKey(String),

    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("expected list of length {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("none of the decoders matched")]
    NoneMatched,

    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    pub fn mismatch(expected: &'static str, found: &crate::Value) -> Self {
        DecodeError::TypeMismatch {
            expected,
            found: found.kind(),
        }
    }

    pub fn custom(message: impl Into<String>) -> Self {
        DecodeError::Custom(message.into())
    }
}

/// Failure to turn raw input into a value, or to decode it afterwards.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
