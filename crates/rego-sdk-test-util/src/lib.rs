//! Shared builtin test harness for the rego-sdk workspace.
//!
//! Builtin tests are tables of [`TestCase`]s run through a registry in strict
//! mode. The generators produce the repetitive failure cases (every wrong
//! argument type, too few and too many arguments) from one correct call.

use rego_sdk_builtins::{
    BuiltinContext, BuiltinFn, BuiltinMap, BuiltinRegistry, sdk_default_builtins,
};
use rego_sdk_types::{BuiltinError, BuiltinResult, Value};
use std::fmt;

#[derive(Clone, Debug)]
pub struct TestCase {
    pub description: String,
    pub name: String,
    pub args: Vec<Value>,
    pub expected: Result<Value, BuiltinError>,
}

impl TestCase {
    pub fn new(
        description: impl Into<String>,
        name: impl Into<String>,
        args: Vec<Value>,
        expected: Result<Value, BuiltinError>,
    ) -> Self {
        Self {
            description: description.into(),
            name: name.into(),
            args,
            expected,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.description = format!("{prefix}: {}", self.description);
        self
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// The SDK builtins merged over an empty host, invoked strictly.
pub fn default_registry() -> BuiltinRegistry {
    BuiltinRegistry::new(sdk_default_builtins(&BuiltinMap::new()))
}

/// Invoke `case` strictly and compare against its expectation.
///
/// Errors must match both structurally and in their rendered message.
pub fn run_case(registry: &BuiltinRegistry, case: &TestCase) {
    let actual = registry.invoke(&BuiltinContext::new(), &case.name, &case.args, true);
    match (&case.expected, &actual) {
        (Ok(want), Ok(got)) => assert_eq!(got, want, "{case}"),
        (Err(want), Err(got)) => {
            assert_eq!(got, want, "{case}");
            assert_eq!(got.to_string(), want.to_string(), "{case}");
        }
        (Ok(want), Err(got)) => panic!("{case}: expected {want}, got error: {got}"),
        (Err(want), Ok(got)) => panic!("{case}: expected error: {want}, got {got}"),
    }
}

pub fn run_cases(registry: &BuiltinRegistry, cases: &[TestCase]) {
    for case in cases {
        run_case(registry, case);
    }
}

/// One argument position to cover with wrong-type calls.
#[derive(Clone, Debug, Default)]
pub struct ArgTypeCases<'a> {
    pub builtin: &'a str,
    /// A correct call; each case replaces one argument of a copy of it.
    pub sample_args: Vec<Value>,
    pub arg_index: usize,
    pub arg_name: &'a str,
    pub allowed: &'a [&'a str],
    /// Explicit `want` text; derived from `allowed` when `None`.
    pub want: Option<&'a str>,
    /// Also emit the arity cases. Use once per builtin.
    pub with_arity_cases: bool,
    /// Sample the number as `number[integer]` instead of `number`.
    pub number_as_integer: bool,
}

/// Sample values for every runtime type name, in name order.
pub fn sample_values(number_as_integer: bool) -> Vec<(&'static str, Value)> {
    vec![
        ("array", Value::from(vec![Value::from(1), Value::from(2), Value::from(3)])),
        ("boolean", Value::Boolean(false)),
        ("null", Value::Null),
        (
            if number_as_integer {
                "number[integer]"
            } else {
                "number"
            },
            Value::from(123),
        ),
        ("object", Value::object([("a", 1)])),
        ("set", Value::set([0])),
        ("string", Value::from("hello")),
        ("undefined", Value::Undefined),
    ]
}

/// One `ArgumentTypeMismatch` case per type not in `cases.allowed`.
pub fn generate_failure_tests(cases: &ArgTypeCases<'_>) -> Vec<TestCase> {
    let mut tests = Vec::new();
    if cases.with_arity_cases {
        tests.extend(generate_number_of_arguments_failure_tests(
            cases.builtin,
            &cases.sample_args,
        ));
    }

    let want = match cases.want {
        Some(want) => want.to_string(),
        None => want_text(cases.allowed),
    };

    for (type_name, sample) in sample_values(cases.number_as_integer) {
        if cases.allowed.contains(&type_name) {
            continue;
        }
        let mut args = cases.sample_args.clone();
        args[cases.arg_index] = sample;
        tests.push(TestCase::new(
            format!("{} argument has incorrect type - {type_name}", cases.arg_name),
            cases.builtin,
            args,
            Err(BuiltinError::ArgumentTypeMismatch {
                arg: cases.arg_name.to_string(),
                got: type_name.to_string(),
                want: want.clone(),
            }),
        ));
    }
    tests
}

/// "Too few" (no arguments, only when the builtin takes any) and "too many"
/// (`sample_args` plus a trailing `null`) cases.
pub fn generate_number_of_arguments_failure_tests(
    builtin: &str,
    sample_args: &[Value],
) -> Vec<TestCase> {
    let want = sample_args.len();
    let mut tests = Vec::new();
    if want > 0 {
        tests.push(TestCase::new(
            "wrong number of arguments (too few)",
            builtin,
            Vec::new(),
            Err(BuiltinError::ArgumentCountMismatch { got: 0, want }),
        ));
    }

    let mut too_many = sample_args.to_vec();
    too_many.push(Value::Null);
    let got = too_many.len();
    tests.push(TestCase::new(
        format!(
            "wrong number of arguments (too many) with {got} argument{}",
            if got == 1 { "" } else { "s" }
        ),
        builtin,
        too_many,
        Err(BuiltinError::ArgumentCountMismatch { got, want }),
    ));
    tests
}

fn want_text(allowed: &[&str]) -> String {
    if let [only] = allowed {
        return only.to_string();
    }
    let mut names = allowed.to_vec();
    names.sort_unstable();
    format!("any<{}>", names.join(", "))
}

pub const HOST_MARSHAL_OUTPUT: &str = "host: marshal\n";

fn host_count(_ctx: &BuiltinContext, args: &[Value]) -> BuiltinResult<Value> {
    match args {
        [Value::Array(items)] => Ok(Value::from(items.len() as i64)),
        [Value::Set(items)] => Ok(Value::from(items.len() as i64)),
        [Value::Object(fields)] => Ok(Value::from(fields.len() as i64)),
        [Value::String(s)] => Ok(Value::from(s.chars().count() as i64)),
        [other] => Err(BuiltinError::type_mismatch(
            "collection",
            other.type_name(),
            "any<array, object, set, string>",
        )),
        _ => Err(BuiltinError::ArgumentCountMismatch {
            got: args.len(),
            want: 1,
        }),
    }
}

fn host_upper(_ctx: &BuiltinContext, args: &[Value]) -> BuiltinResult<Value> {
    match args {
        [Value::String(s)] => Ok(Value::from(s.to_uppercase())),
        [other] => Err(BuiltinError::type_mismatch("x", other.type_name(), "string")),
        _ => Err(BuiltinError::ArgumentCountMismatch {
            got: args.len(),
            want: 1,
        }),
    }
}

fn host_marshal(_ctx: &BuiltinContext, _args: &[Value]) -> BuiltinResult<Value> {
    Ok(Value::from(HOST_MARSHAL_OUTPUT))
}

/// A small host builtin table: `count`, `upper`, and a `yaml.marshal` stub
/// that answers [`HOST_MARSHAL_OUTPUT`] so shadowing is observable.
pub fn host_builtins() -> BuiltinMap {
    BuiltinMap::from([
        ("count".to_string(), host_count as BuiltinFn),
        ("upper".to_string(), host_upper as BuiltinFn),
        ("yaml.marshal".to_string(), host_marshal as BuiltinFn),
    ])
}
