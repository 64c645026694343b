use rego_sdk_types::{CodecError, Number, Value};
use serde_yaml::Value as Yaml;
use std::collections::BTreeMap;
use tracing::trace;

/// Whether `raw` parses as a YAML document with actual content.
///
/// Empty, whitespace-only, comment-only and null-only documents are not valid.
/// Parse errors are swallowed into `false`; this never fails.
pub fn is_valid(raw: &str) -> bool {
    match serde_yaml::from_str::<Yaml>(raw) {
        Ok(doc) => !is_null(&doc),
        Err(err) => {
            trace!(error = %err, "yaml document rejected");
            false
        }
    }
}

/// Parse a single YAML document into a value.
///
/// Mappings become objects (scalar keys converted to their string form),
/// sequences become arrays, scalars resolve per the YAML core schema. Tags are
/// ignored and aliases are expanded. Never produces `Set` or `Undefined`.
pub fn unmarshal(raw: &str) -> Result<Value, CodecError> {
    if is_blank(raw) {
        return Ok(Value::Null);
    }
    let doc: Yaml = serde_yaml::from_str(raw).map_err(|e| parse_failure(e.to_string()))?;
    from_yaml(doc)
}

fn from_yaml(node: Yaml) -> Result<Value, CodecError> {
    let value = match node {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Boolean(b),
        Yaml::Number(n) => Value::Number(number(&n)),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut fields = BTreeMap::new();
            for (k, v) in mapping {
                let key = key_string(k)?;
                if fields.contains_key(&key) {
                    return Err(parse_failure(format!(
                        "duplicate mapping key after conversion to string: {key}"
                    )));
                }
                fields.insert(key, from_yaml(v)?);
            }
            Value::Object(fields)
        }
        Yaml::Tagged(tagged) => from_yaml(tagged.value)?,
    };
    Ok(value)
}

/// Numeric keys take the canonical number text (`1e3` becomes `1000.0`), the
/// same text `marshal` writes for a number key.
fn key_string(key: Yaml) -> Result<Value, CodecError> {
    let s = match key {
        Yaml::String(s) => s,
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => number(&n).to_string(),
        Yaml::Tagged(tagged) => return key_string(tagged.value),
        Yaml::Sequence(_) => return Err(parse_failure("unsupported mapping key: sequence")),
        Yaml::Mapping(_) => return Err(parse_failure("unsupported mapping key: mapping")),
    };
    Ok(Value::String(s))
}

/// Integers outside the i64 range decode as floats.
fn number(n: &serde_yaml::Number) -> Number {
    match n.as_i64() {
        Some(i) if !n.is_f64() => Number::Int(i),
        _ => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Only YAML's own whitespace counts; NBSP and friends are content.
pub(crate) fn is_blank(raw: &str) -> bool {
    raw.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

fn is_null(node: &Yaml) -> bool {
    match node {
        Yaml::Null => true,
        Yaml::Tagged(tagged) => is_null(&tagged.value),
        _ => false,
    }
}

fn parse_failure(message: impl Into<String>) -> CodecError {
    CodecError::ParseFailure {
        message: message.into(),
    }
}
