//! Declarations of every builtin this crate provides.

use crate::registry::BuiltinFn;
use crate::validate::Signature;
use crate::yaml;
use rego_sdk_types::ids;

#[derive(Clone, Copy, Debug)]
pub struct BuiltinDecl {
    pub name: &'static str,
    pub signature: Signature,
    /// Result type as shown to policy authors (`any` when it depends on input).
    pub result: &'static str,
    pub description: &'static str,
    pub func: BuiltinFn,
}

static CATALOG: &[BuiltinDecl] = &[
    BuiltinDecl {
        name: ids::BUILTIN_YAML_IS_VALID,
        signature: yaml::IS_VALID,
        result: "boolean",
        description: "Verifies the input string is a valid YAML document.",
        func: yaml::is_valid,
    },
    BuiltinDecl {
        name: ids::BUILTIN_YAML_MARSHAL,
        signature: yaml::MARSHAL,
        result: "string",
        description: "Serializes the input term to YAML.",
        func: yaml::marshal,
    },
    BuiltinDecl {
        name: ids::BUILTIN_YAML_UNMARSHAL,
        signature: yaml::UNMARSHAL,
        result: "any",
        description: "Deserializes the input string as a YAML document.",
        func: yaml::unmarshal,
    },
];

pub fn all() -> &'static [BuiltinDecl] {
    CATALOG
}

pub fn lookup(name: &str) -> Option<&'static BuiltinDecl> {
    CATALOG.iter().find(|d| d.name == name)
}

pub fn all_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|d| d.name)
}
