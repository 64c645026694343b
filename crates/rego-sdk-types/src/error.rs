//! Typed failures surfaced from builtin calls back to the evaluator.

use crate::TypeName;
use thiserror::Error;

/// Failures of the YAML codec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The undefined sentinel was found where a value had to be encoded.
    /// `path` is `/`-separated and empty for the document root.
    #[error("cannot marshal undefined value at {}", root_or(.path))]
    UnsupportedValue { path: String },

    /// Two distinct object keys render to the same mapping key text.
    /// `path` points at the later key.
    #[error("object keys collide after conversion to string at {path}")]
    KeyCollision { path: String },

    #[error("yaml parse failure: {message}")]
    ParseFailure { message: String },

    #[error("yaml emit failure: {message}")]
    EmitFailure { message: String },
}

fn root_or(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuiltinError {
    #[error("wrong number of arguments: got {got}, want {want}")]
    ArgumentCountMismatch { got: usize, want: usize },

    #[error("invalid argument {arg}: want {want}, got {got}")]
    ArgumentTypeMismatch {
        arg: String,
        got: String,
        want: String,
    },

    #[error("unknown builtin: {name}")]
    UnknownBuiltin { name: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl BuiltinError {
    pub fn type_mismatch(arg: &str, got: TypeName, want: impl Into<String>) -> Self {
        BuiltinError::ArgumentTypeMismatch {
            arg: arg.to_string(),
            got: got.as_str().to_string(),
            want: want.into(),
        }
    }
}

pub type BuiltinResult<T> = Result<T, BuiltinError>;
