//! Property-based tests for validation, the yaml builtins and the merge.

use crate::registry::{BuiltinFn, BuiltinMap, merge, sdk_builtins};
use crate::test_support::{ctx, host_count};
use crate::validate::want_descriptor;
use crate::yaml;
use proptest::prelude::*;
use rego_sdk_types::{BuiltinError, TypeName, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::from),
        prop::num::f64::NORMAL.prop_map(Value::from),
        "[a-z: \\-\\n]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::set),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4).prop_map(Value::object),
        ]
    })
}

fn arb_builtin() -> impl Strategy<Value = BuiltinFn> {
    prop_oneof![
        Just(yaml::is_valid as BuiltinFn),
        Just(yaml::marshal as BuiltinFn),
        Just(yaml::unmarshal as BuiltinFn),
    ]
}

fn arb_type_names() -> impl Strategy<Value = Vec<TypeName>> {
    prop::sample::subsequence(TypeName::UNIVERSE.to_vec(), 1..=TypeName::UNIVERSE.len())
        .prop_shuffle()
}

fn arb_host_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,6}",
            Just("yaml.marshal".to_string()),
            Just("yaml.is_valid".to_string()),
        ],
        0..6,
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Every yaml builtin rejects any argument count other than one.
    #[test]
    fn wrong_arity_is_always_a_count_mismatch(
        f in arb_builtin(),
        args in prop::collection::vec(arb_value(), 0..5),
    ) {
        prop_assume!(args.len() != 1);
        prop_assert_eq!(
            f(&ctx(), &args),
            Err(BuiltinError::ArgumentCountMismatch { got: args.len(), want: 1 })
        );
    }

    /// yaml.is_valid answers for every string and never errors.
    #[test]
    fn is_valid_never_errors_on_strings(raw in ".{0,48}") {
        let out = yaml::is_valid(&ctx(), &[Value::from(raw)]);
        prop_assert!(matches!(out, Ok(Value::Boolean(_))), "{:?}", out);
    }

    /// Non-string inputs to the string builtins report their own type name.
    #[test]
    fn string_builtins_report_actual_type(v in arb_value()) {
        prop_assume!(!matches!(v, Value::String(_)));
        let got = v.type_name().as_str().to_string();
        for f in [yaml::is_valid as BuiltinFn, yaml::unmarshal] {
            prop_assert_eq!(
                f(&ctx(), std::slice::from_ref(&v)),
                Err(BuiltinError::ArgumentTypeMismatch {
                    arg: "x".to_string(),
                    got: got.clone(),
                    want: "string".to_string(),
                })
            );
        }
    }

    /// yaml.marshal never fails validation; only the codec can reject input.
    #[test]
    fn marshal_fails_only_in_the_codec(v in arb_value()) {
        match yaml::marshal(&ctx(), &[v.clone()]) {
            Ok(Value::String(_)) => prop_assert!(!v.contains_undefined()),
            Err(BuiltinError::Codec(_)) => prop_assert!(v.contains_undefined()),
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }

    /// Multi-type descriptors are sorted, comma-joined and wrapped in any<>.
    #[test]
    fn want_descriptor_format(types in arb_type_names()) {
        let text = want_descriptor(&types);
        if types.len() == 1 {
            prop_assert_eq!(text, types[0].as_str());
        } else {
            let inner = text
                .strip_prefix("any<")
                .and_then(|t| t.strip_suffix('>'))
                .expect("any<...> wrapper");
            let names: Vec<&str> = inner.split(", ").collect();
            let mut sorted = names.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&names, &sorted);
            prop_assert_eq!(names.len(), types.len());
        }
    }

    /// The merge is the union of both tables, and extension builtins always win.
    #[test]
    fn merge_is_union_with_extension_priority(names in arb_host_names()) {
        let host: BuiltinMap = names
            .iter()
            .map(|n| (n.clone(), host_count as BuiltinFn))
            .collect();
        let extension = sdk_builtins();
        let merged = merge(extension.clone(), &host);

        let mut expected: Vec<&String> = host.keys().chain(extension.keys()).collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(merged.keys().collect::<Vec<_>>(), expected);

        let marshal = merged.get("yaml.marshal").copied().expect("extension builtin present");
        prop_assert_eq!(marshal(&ctx(), &[Value::from(1)]), Ok(Value::from("1\n")));
    }
}
