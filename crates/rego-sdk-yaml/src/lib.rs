//! YAML codec for the evaluation value model (no IO).
//!
//! Input: YAML text or a `Value` tree.
//! Output: a `Value`, YAML text, or a validity verdict.
//!
//! All three operations are pure functions of their input.

#![forbid(unsafe_code)]

mod decode;
mod encode;

pub use decode::{is_valid, unmarshal};
pub use encode::marshal;

#[cfg(test)]
mod proptest;
