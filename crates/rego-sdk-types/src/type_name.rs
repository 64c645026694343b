use std::fmt;

/// Runtime type names as reported in argument errors.
///
/// `NumberInteger` is never the type of a value on its own; it only shows up
/// for numbers checked against an integer-only parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeName {
    Array,
    Boolean,
    Null,
    Number,
    NumberInteger,
    Object,
    Set,
    String,
    Undefined,
}

impl TypeName {
    /// Every type a value can have, in declaration order.
    pub const UNIVERSE: [TypeName; 8] = [
        TypeName::Undefined,
        TypeName::Boolean,
        TypeName::Null,
        TypeName::Number,
        TypeName::String,
        TypeName::Array,
        TypeName::Object,
        TypeName::Set,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeName::Array => "array",
            TypeName::Boolean => "boolean",
            TypeName::Null => "null",
            TypeName::Number => "number",
            TypeName::NumberInteger => "number[integer]",
            TypeName::Object => "object",
            TypeName::Set => "set",
            TypeName::String => "string",
            TypeName::Undefined => "undefined",
        }
    }

    pub fn parse(name: &str) -> Option<TypeName> {
        Some(match name {
            "array" => TypeName::Array,
            "boolean" => TypeName::Boolean,
            "null" => TypeName::Null,
            "number" => TypeName::Number,
            "number[integer]" => TypeName::NumberInteger,
            "object" => TypeName::Object,
            "set" => TypeName::Set,
            "string" => TypeName::String,
            "undefined" => TypeName::Undefined,
            _ => return None,
        })
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
