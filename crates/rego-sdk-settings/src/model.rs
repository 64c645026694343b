use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `rego-sdk.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and unknown
/// keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SdkConfigV1 {
    /// Optional schema string for tooling (`rego-sdk.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Whether builtin failures and unknown builtins are errors (default)
    /// rather than undefined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    #[serde(default)]
    pub builtins: BuiltinsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BuiltinsConfig {
    /// Extension builtins to leave out of the registry merge.
    #[serde(default)]
    pub disabled: Vec<String>,
}
