//! Fuzz target for the marshal/unmarshal round trip.
//!
//! Goal: every set-free, undefined-free value with string keys renders to YAML
//! that decodes back to the same value. Values holding `undefined` must fail
//! with `UnsupportedValue`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_yaml_roundtrip
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rego_sdk_types::{CodecError, Value};

/// Structured value tree; converted into a `Value` below.
#[derive(Arbitrary, Debug)]
enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
    Undefined,
}

fn to_value(node: Node, depth: usize) -> Value {
    if depth > 8 {
        return Value::Null;
    }
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Boolean(b),
        Node::Int(i) => Value::from(i),
        Node::Float(f) => Value::from(f),
        Node::Str(s) => Value::from(s),
        Node::Array(items) => Value::Array(
            items
                .into_iter()
                .take(16)
                .map(|n| to_value(n, depth + 1))
                .collect(),
        ),
        Node::Object(fields) => Value::object(
            fields
                .into_iter()
                .take(16)
                .map(|(k, n)| (k, to_value(n, depth + 1))),
        ),
        Node::Undefined => Value::Undefined,
    }
}

fuzz_target!(|node: Node| {
    let value = to_value(node, 0);
    match rego_sdk_yaml::marshal(&value) {
        Ok(text) => {
            assert!(!value.contains_undefined());
            let back = rego_sdk_yaml::unmarshal(&text).expect("marshal output must parse");
            assert_eq!(back, value, "yaml text was:\n{text}");
        }
        Err(CodecError::UnsupportedValue { .. }) => assert!(value.contains_undefined()),
        Err(err) => panic!("unexpected codec error: {err}"),
    }
});
