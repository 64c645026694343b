//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

use anyhow::Context;

pub use model::{BuiltinsConfig, SdkConfigV1};
pub use rego_sdk_builtins::EffectiveConfig;

/// Parse `rego-sdk.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SdkConfigV1> {
    let cfg: SdkConfigV1 = toml::from_str(input).context("parse rego-sdk config")?;
    Ok(cfg)
}

/// Resolve the config applied to the builtin registry.
pub fn resolve_config(cfg: SdkConfigV1) -> anyhow::Result<EffectiveConfig> {
    resolve::resolve_config(cfg)
}

/// JSON schema of the user-facing config model, for editors and tooling.
pub fn config_json_schema() -> schemars::Schema {
    schemars::schema_for!(SdkConfigV1)
}
