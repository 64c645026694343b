use rego_sdk_types::{CodecError, Number, Value};
use serde_yaml::{Mapping, Value as Yaml};

/// Render a value as a YAML document.
///
/// Objects are emitted in ascending key order and sets in their total order, so
/// the same value always renders to the same text. Any `Undefined` node fails
/// the whole call, as do two keys with the same string form; nothing is
/// dropped.
pub fn marshal(value: &Value) -> Result<String, CodecError> {
    let mut path = Vec::new();
    let doc = to_yaml(value, &mut path)?;
    serde_yaml::to_string(&doc).map_err(|e| CodecError::EmitFailure {
        message: e.to_string(),
    })
}

fn to_yaml(value: &Value, path: &mut Vec<String>) -> Result<Yaml, CodecError> {
    let node = match value {
        Value::Null => Yaml::Null,
        Value::Boolean(b) => Yaml::Bool(*b),
        Value::Number(n) => Yaml::Number(yaml_number(*n)),
        Value::String(s) => Yaml::String(s.clone()),
        Value::Array(items) => Yaml::Sequence(sequence(items.iter(), path)?),
        Value::Set(items) => Yaml::Sequence(sequence(items.iter(), path)?),
        Value::Object(fields) => {
            let mut mapping = Mapping::with_capacity(fields.len());
            for (k, v) in fields {
                let key = key_string(k, path)?;
                path.push(key.clone());
                if mapping.contains_key(key.as_str()) {
                    return Err(CodecError::KeyCollision {
                        path: render_path(path),
                    });
                }
                let node = to_yaml(v, path)?;
                path.pop();
                mapping.insert(Yaml::String(key), node);
            }
            Yaml::Mapping(mapping)
        }
        Value::Undefined => return Err(unsupported(path)),
    };
    Ok(node)
}

fn sequence<'a>(
    items: impl Iterator<Item = &'a Value>,
    path: &mut Vec<String>,
) -> Result<Vec<Yaml>, CodecError> {
    let mut out = Vec::new();
    for (i, item) in items.enumerate() {
        path.push(i.to_string());
        out.push(to_yaml(item, path)?);
        path.pop();
    }
    Ok(out)
}

/// String form of an object key: strings verbatim, anything else via its
/// canonical rendering (`1`, `true`, `[1, 2]`, ...).
fn key_string(key: &Value, path: &[String]) -> Result<String, CodecError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        k if k.contains_undefined() => Err(unsupported(path)),
        k => Ok(k.to_string()),
    }
}

fn yaml_number(n: Number) -> serde_yaml::Number {
    match n {
        Number::Int(i) => serde_yaml::Number::from(i),
        Number::Float(f) => serde_yaml::Number::from(f),
    }
}

fn unsupported(path: &[String]) -> CodecError {
    CodecError::UnsupportedValue {
        path: render_path(path),
    }
}

fn render_path(path: &[String]) -> String {
    path.iter().map(|seg| format!("/{seg}")).collect()
}
