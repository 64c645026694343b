use crate::model::SdkConfigV1;
use anyhow::Context;
use rego_sdk_builtins::{EffectiveConfig, catalog};
use rego_sdk_types::ids;
use std::collections::BTreeSet;

pub fn resolve_config(cfg: SdkConfigV1) -> anyhow::Result<EffectiveConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        check_schema(schema)?;
    }

    let mut effective = EffectiveConfig::default();
    if let Some(strict) = cfg.strict {
        effective.strict = strict;
    }
    effective.disabled =
        resolve_disabled(&cfg.builtins.disabled).context("invalid [builtins] section")?;

    Ok(effective)
}

fn check_schema(schema: &str) -> anyhow::Result<()> {
    if schema != ids::SCHEMA_CONFIG_V1 {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected '{}')",
            ids::SCHEMA_CONFIG_V1
        );
    }
    Ok(())
}

fn resolve_disabled(names: &[String]) -> anyhow::Result<BTreeSet<String>> {
    let mut disabled = BTreeSet::new();
    for name in names {
        if catalog::lookup(name).is_none() {
            let known: Vec<&str> = catalog::all_names().collect();
            anyhow::bail!(
                "unknown builtin in disabled list: {name} (known: {})",
                known.join(", ")
            );
        }
        disabled.insert(name.clone());
    }
    Ok(disabled)
}
