//! Arity and argument-type checks run before every builtin body.

use rego_sdk_types::{BuiltinError, BuiltinResult, TypeName, Value};

/// One declared parameter: its name (used in errors) and the types it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub types: &'static [TypeName],
}

impl Param {
    pub fn accepts(&self, ty: TypeName) -> bool {
        self.types.contains(&ty)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub params: &'static [Param],
}

impl Signature {
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Check `args` against `signature`.
///
/// The argument count is checked first; type checks run left to right and the
/// first mismatch wins.
pub fn validate(args: &[Value], signature: &Signature) -> BuiltinResult<()> {
    if args.len() != signature.arity() {
        return Err(BuiltinError::ArgumentCountMismatch {
            got: args.len(),
            want: signature.arity(),
        });
    }
    for (arg, param) in args.iter().zip(signature.params) {
        let got = observed_type(arg, param.types);
        if !param.accepts(got) {
            return Err(BuiltinError::type_mismatch(
                param.name,
                got,
                want_descriptor(param.types),
            ));
        }
    }
    Ok(())
}

/// Type name of `arg` as seen by a parameter that accepts `allowed`.
///
/// Integral numbers report `number[integer]` only in integer-only positions.
pub fn observed_type(arg: &Value, allowed: &[TypeName]) -> TypeName {
    match arg {
        Value::Number(n)
            if n.is_integer()
                && allowed.contains(&TypeName::NumberInteger)
                && !allowed.contains(&TypeName::Number) =>
        {
            TypeName::NumberInteger
        }
        _ => arg.type_name(),
    }
}

/// `want` text for a mismatch: the bare name for a single type, otherwise
/// `any<...>` with the names sorted and joined by `", "`.
pub fn want_descriptor(types: &[TypeName]) -> String {
    if let [only] = types {
        return only.as_str().to_string();
    }
    let mut names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    format!("any<{}>", names.join(", "))
}
