//! Property-based tests for the YAML codec.
//!
//! These tests use proptest to verify invariants around:
//! - Round-tripping set-free, undefined-free values through YAML text
//! - `is_valid` being total over arbitrary strings
//! - Undefined nodes always failing `marshal`

use crate::decode::is_blank;
use crate::{is_valid, marshal, unmarshal};
use proptest::prelude::*;
use rego_sdk_types::{CodecError, Number, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Strings that exercise YAML's implicit typing and quoting rules.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 _.:#'\"-]{0,16}",
        Just(String::new()),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("~".to_string()),
        Just("123".to_string()),
        Just("1.5".to_string()),
        Just("yes".to_string()),
        Just("- item".to_string()),
        Just("key: value".to_string()),
        Just("multi\nline".to_string()),
        Just("  padded  ".to_string()),
        Just("ünïcödé ✓".to_string()),
    ]
}

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::Int),
        prop::num::f64::NORMAL.prop_map(Number::Float),
        (-1_000i64..1_000).prop_map(|i| Number::Float(i as f64)),
        Just(Number::Float(0.0)),
    ]
}

/// Leaves that survive a YAML round trip.
fn arb_plain_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        arb_number().prop_map(Value::Number),
        arb_text().prop_map(Value::String),
    ]
}

/// Values with no `Set` nodes, no `Undefined` nodes and string-only keys.
fn arb_plain_value() -> impl Strategy<Value = Value> {
    arb_plain_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec((arb_text(), inner), 0..5).prop_map(Value::object),
        ]
    })
}

/// Values guaranteed to hold at least one `Undefined` somewhere.
fn arb_value_with_undefined() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![arb_plain_leaf(), Just(Value::Undefined)];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::set),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(Value::object),
        ]
    })
    .prop_filter("must contain undefined", Value::contains_undefined)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// unmarshal(marshal(v)) == v for every set-free, undefined-free value.
    #[test]
    fn round_trip_preserves_plain_values(v in arb_plain_value()) {
        let text = marshal(&v).expect("plain values always marshal");
        let back = unmarshal(&text).expect("marshal output always parses");
        prop_assert_eq!(&back, &v, "yaml text was:\n{}", text);
    }

    /// Integer and float representations survive the round trip distinctly.
    #[test]
    fn round_trip_preserves_number_kind(n in arb_number()) {
        let text = marshal(&Value::Number(n)).expect("numbers always marshal");
        let Value::Number(back) = unmarshal(&text).expect("number text parses") else {
            panic!("expected a number back from {text:?}");
        };
        prop_assert_eq!(back.is_float(), n.is_float(), "yaml text was {:?}", text);
    }

    /// Output always ends with the emitter's newline.
    #[test]
    fn marshal_output_ends_with_newline(v in arb_plain_value()) {
        let text = marshal(&v).expect("plain values always marshal");
        prop_assert!(text.ends_with('\n'));
        prop_assert!(!text.starts_with("---"));
    }

    /// is_valid never panics, and blank input is never valid.
    #[test]
    fn is_valid_is_total(raw in ".{0,64}") {
        let valid = is_valid(&raw);
        if is_blank(&raw) {
            prop_assert!(!valid);
        }
        let _ = unmarshal(&raw);
    }

    /// Undefined anywhere in the tree fails the whole marshal call.
    #[test]
    fn undefined_is_never_dropped(v in arb_value_with_undefined()) {
        let res = marshal(&v);
        prop_assert!(
            matches!(res, Err(CodecError::UnsupportedValue { .. })),
            "expected UnsupportedValue, got {:?}",
            res
        );
    }

    /// Sets decode back as arrays in ascending order.
    #[test]
    fn sets_round_trip_as_sorted_arrays(items in prop::collection::vec(any::<i64>(), 0..8)) {
        let set = Value::set(items.iter().copied());
        let mut sorted = items.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let back = unmarshal(&marshal(&set).expect("sets marshal")).expect("sequence parses");
        prop_assert_eq!(back, Value::Array(sorted.into_iter().map(Value::from).collect()));
    }
}
