//! Stable types shared across the rego-sdk workspace.
//!
//! This crate is intentionally boring:
//! - the evaluation value model (`Value`, `Number`)
//! - runtime type names used in argument checks
//! - stable builtin names
//! - typed builtin and codec errors

#![forbid(unsafe_code)]

pub mod error;
pub mod ids;
pub mod number;
pub mod type_name;
pub mod value;

pub use error::{BuiltinError, BuiltinResult, CodecError};
pub use number::Number;
pub use type_name::TypeName;
pub use value::Value;

#[cfg(test)]
mod proptest;
