//! Stable identifiers for extension builtins.
//!
//! Builtin names live in the policy language's global namespace: a dotted
//! namespace followed by a snake_case function name.

// Namespace: yaml
pub const BUILTIN_YAML_IS_VALID: &str = "yaml.is_valid";
pub const BUILTIN_YAML_MARSHAL: &str = "yaml.marshal";
pub const BUILTIN_YAML_UNMARSHAL: &str = "yaml.unmarshal";

// Config schema
pub const SCHEMA_CONFIG_V1: &str = "rego-sdk.config.v1";
