//! The `yaml.*` builtins.
//!
//! Each one validates its arguments, then hands the payload to the codec.
//! Codec failures come back unchanged, wrapped in `BuiltinError::Codec`.

use crate::context::BuiltinContext;
use crate::validate::{Param, Signature, validate};
use rego_sdk_types::{BuiltinError, BuiltinResult, TypeName, Value};

const TEXT_ARG: &[Param] = &[Param {
    name: "x",
    types: &[TypeName::String],
}];

const ANY_ARG: &[Param] = &[Param {
    name: "x",
    types: &TypeName::UNIVERSE,
}];

pub const IS_VALID: Signature = Signature { params: TEXT_ARG };
pub const MARSHAL: Signature = Signature { params: ANY_ARG };
pub const UNMARSHAL: Signature = Signature { params: TEXT_ARG };

/// `yaml.is_valid(x: string) -> boolean`
pub fn is_valid(_ctx: &BuiltinContext, args: &[Value]) -> BuiltinResult<Value> {
    validate(args, &IS_VALID)?;
    let raw = text_arg(args)?;
    Ok(Value::Boolean(rego_sdk_yaml::is_valid(raw)))
}

/// `yaml.marshal(x: any) -> string`
///
/// `undefined` passes validation and is rejected by the codec.
pub fn marshal(_ctx: &BuiltinContext, args: &[Value]) -> BuiltinResult<Value> {
    validate(args, &MARSHAL)?;
    let [value] = args else {
        return Err(count_mismatch(args));
    };
    Ok(Value::String(rego_sdk_yaml::marshal(value)?))
}

/// `yaml.unmarshal(x: string) -> any`
pub fn unmarshal(_ctx: &BuiltinContext, args: &[Value]) -> BuiltinResult<Value> {
    validate(args, &UNMARSHAL)?;
    let raw = text_arg(args)?;
    Ok(rego_sdk_yaml::unmarshal(raw)?)
}

fn text_arg(args: &[Value]) -> BuiltinResult<&str> {
    match args {
        [Value::String(s)] => Ok(s.as_str()),
        [other] => Err(BuiltinError::type_mismatch(
            "x",
            other.type_name(),
            TypeName::String.as_str(),
        )),
        _ => Err(count_mismatch(args)),
    }
}

fn count_mismatch(args: &[Value]) -> BuiltinError {
    BuiltinError::ArgumentCountMismatch {
        got: args.len(),
        want: 1,
    }
}
