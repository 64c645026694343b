//! YAML builtins for a policy evaluator.
//!
//! The evaluator hands its own builtin table to [`sdk_default_builtins`] (or
//! [`load_registry`] when it has configuration) once at setup and dispatches
//! through the returned [`BuiltinRegistry`] afterwards.
//!
//! ```
//! use rego_sdk::{BuiltinContext, BuiltinMap, Value, load_registry};
//!
//! let registry = load_registry("", &BuiltinMap::new())?;
//! let out = registry.invoke_default(
//!     &BuiltinContext::new(),
//!     "yaml.unmarshal",
//!     &[Value::from("a: 1")],
//! )?;
//! assert_eq!(out, Value::object([("a", 1)]));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![forbid(unsafe_code)]

use anyhow::Context;
use tracing::debug;

pub use rego_sdk_builtins::{
    BuiltinContext, BuiltinFn, BuiltinMap, BuiltinRegistry, EffectiveConfig, HostRegistry, Param,
    Signature, catalog, merge, sdk_builtins, sdk_builtins_with, sdk_default_builtins, validate,
};
pub use rego_sdk_settings::{
    BuiltinsConfig, SdkConfigV1, config_json_schema, parse_config_toml, resolve_config,
};
pub use rego_sdk_types::{BuiltinError, BuiltinResult, CodecError, Number, TypeName, Value, ids};
pub use rego_sdk_yaml as yaml;

/// Build the dispatch registry from `rego-sdk.toml` text and the host's
/// builtins. An empty document means defaults.
pub fn load_registry<H: HostRegistry + ?Sized>(
    config: &str,
    host: &H,
) -> anyhow::Result<BuiltinRegistry> {
    let cfg = parse_config_toml(config)?;
    let effective = resolve_config(cfg).context("resolve rego-sdk config")?;
    let registry = BuiltinRegistry::with_config(&effective, host);
    debug!(
        builtins = registry.len(),
        strict = registry.strict(),
        disabled = effective.disabled.len(),
        "builtin registry ready"
    );
    Ok(registry)
}
