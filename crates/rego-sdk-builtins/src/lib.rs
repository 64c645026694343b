//! Builtin functions and dispatch (no IO).
//!
//! Input: argument values handed over by the evaluator, plus the host's own
//! builtin table.
//! Output: result values or typed errors, and the merged registry used for
//! dispatch.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod context;
pub mod policy;
pub mod registry;
pub mod validate;
pub mod yaml;

pub use context::BuiltinContext;
pub use policy::EffectiveConfig;
pub use registry::{
    BuiltinFn, BuiltinMap, BuiltinRegistry, HostRegistry, merge, sdk_builtins, sdk_builtins_with,
    sdk_default_builtins,
};
pub use validate::{Param, Signature, validate};

#[cfg(test)]
mod proptest;
