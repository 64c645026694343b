//! Property-based tests for the value model.
//!
//! These tests use proptest to verify invariants around:
//! - Number ordering agreeing with equality and hashing
//! - Value ordering being a total order (antisymmetric, transitive)
//! - Set construction never admitting the undefined sentinel

use crate::{Number, Value};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ============================================================================
// Strategies
// ============================================================================

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::Int),
        (-1_000i64..1_000).prop_map(Number::Int),
        any::<f64>().prop_map(Number::Float),
        (-1_000i64..1_000).prop_map(|i| Number::Float(i as f64)),
        (-1_000.0f64..1_000.0).prop_map(Number::Float),
        Just(Number::Float(f64::NAN)),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        arb_number().prop_map(Value::Number),
        "[a-c]{0,3}".prop_map(Value::String),
        Just(Value::Undefined),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::set),
            prop::collection::vec(("[a-c]{1,2}", inner), 0..4).prop_map(Value::object),
        ]
    })
}

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Equal numbers must hash alike, and equality must match `cmp`.
    #[test]
    fn number_eq_agrees_with_cmp_and_hash(a in arb_number(), b in arb_number()) {
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// Ordering over three numbers must be transitive.
    #[test]
    fn number_order_is_transitive(a in arb_number(), b in arb_number(), c in arb_number()) {
        let mut v = [a, b, c];
        v.sort();
        prop_assert!(v[0] <= v[1] && v[1] <= v[2] && v[0] <= v[2]);
    }

    /// Value ordering is antisymmetric and consistent with equality.
    #[test]
    fn value_order_is_consistent(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    /// Sets built through `Value::set` never contain the undefined sentinel.
    #[test]
    fn sets_never_hold_undefined(items in prop::collection::vec(arb_leaf(), 0..8)) {
        let Value::Set(set) = Value::set(items) else {
            unreachable!("Value::set always builds a set");
        };
        prop_assert!(set.iter().all(|v| !v.is_undefined()));
    }

    /// The canonical rendering never panics and is deterministic.
    #[test]
    fn display_is_deterministic(v in arb_value()) {
        prop_assert_eq!(v.to_string(), v.clone().to_string());
    }
}
