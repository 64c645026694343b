//! Builtin tables, the host/extension merge, and dispatch.

use crate::catalog;
use crate::context::BuiltinContext;
use crate::policy::EffectiveConfig;
use rego_sdk_types::{BuiltinError, BuiltinResult, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Signature shared by every builtin, host or extension.
pub type BuiltinFn = fn(&BuiltinContext, &[Value]) -> BuiltinResult<Value>;

/// Name to implementation. Ordered so iteration and merges are deterministic.
pub type BuiltinMap = BTreeMap<String, BuiltinFn>;

/// The evaluator-side builtin table this crate extends.
pub trait HostRegistry {
    fn lookup(&self, name: &str) -> Option<BuiltinFn>;
    fn supported_names(&self) -> BTreeSet<String>;
}

impl HostRegistry for BuiltinMap {
    fn lookup(&self, name: &str) -> Option<BuiltinFn> {
        self.get(name).copied()
    }

    fn supported_names(&self) -> BTreeSet<String> {
        self.keys().cloned().collect()
    }
}

/// Merge `extension` over everything `host` supports.
///
/// Host names that fail to resolve are left out. On a collision the extension
/// implementation wins.
pub fn merge<H: HostRegistry + ?Sized>(extension: BuiltinMap, host: &H) -> BuiltinMap {
    let mut merged = BuiltinMap::new();
    for name in host.supported_names() {
        match host.lookup(&name) {
            Some(func) => {
                merged.insert(name, func);
            }
            None => debug!(builtin = %name, "host lists a builtin it cannot resolve; skipped"),
        }
    }
    let from_host = merged.len();

    let mut shadowed = 0usize;
    let from_extension = extension.len();
    for (name, func) in extension {
        if merged.contains_key(&name) {
            debug!(builtin = %name, "extension builtin shadows host builtin");
            shadowed += 1;
        }
        merged.insert(name, func);
    }

    debug!(
        host = from_host,
        extension = from_extension,
        shadowed,
        total = merged.len(),
        "builtin tables merged"
    );
    merged
}

/// Every builtin this crate provides.
pub fn sdk_builtins() -> BuiltinMap {
    catalog::all()
        .iter()
        .map(|decl| (decl.name.to_string(), decl.func))
        .collect()
}

/// The host's builtins with this crate's builtins merged over them.
pub fn sdk_default_builtins<H: HostRegistry + ?Sized>(host: &H) -> BuiltinMap {
    merge(sdk_builtins(), host)
}

/// Like [`sdk_default_builtins`], leaving out the extension builtins `cfg`
/// disables. A host builtin of the same name then stays unshadowed.
pub fn sdk_builtins_with<H: HostRegistry + ?Sized>(cfg: &EffectiveConfig, host: &H) -> BuiltinMap {
    let mut extension = sdk_builtins();
    extension.retain(|name, _| cfg.is_enabled(name));
    merge(extension, host)
}

/// Immutable, cheaply cloneable dispatch table.
#[derive(Clone)]
pub struct BuiltinRegistry {
    builtins: Arc<BuiltinMap>,
    strict: bool,
}

impl fmt::Debug for BuiltinRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinRegistry")
            .field("builtins", &self.builtins.keys().collect::<Vec<_>>())
            .field("strict", &self.strict)
            .finish()
    }
}

impl BuiltinRegistry {
    /// Wrap an already merged table. Invocation defaults to strict.
    pub fn new(builtins: BuiltinMap) -> Self {
        Self {
            builtins: Arc::new(builtins),
            strict: true,
        }
    }

    pub fn with_config<H: HostRegistry + ?Sized>(cfg: &EffectiveConfig, host: &H) -> Self {
        Self {
            builtins: Arc::new(sdk_builtins_with(cfg, host)),
            strict: cfg.strict,
        }
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Call builtin `name`.
    ///
    /// In strict mode unknown names and builtin failures are errors. Otherwise
    /// both evaluate to `Undefined`.
    pub fn invoke(
        &self,
        ctx: &BuiltinContext,
        name: &str,
        args: &[Value],
        strict: bool,
    ) -> BuiltinResult<Value> {
        trace!(builtin = name, args = ?args, "invoking builtin");
        let Some(func) = self.builtins.get(name) else {
            if strict {
                return Err(BuiltinError::UnknownBuiltin {
                    name: name.to_string(),
                });
            }
            debug!(builtin = name, "unknown builtin evaluates to undefined");
            return Ok(Value::Undefined);
        };

        match func(ctx, args) {
            Ok(value) => Ok(value),
            Err(err) => {
                debug!(builtin = name, error = %err, "builtin failed");
                if strict {
                    Err(err)
                } else {
                    debug!(builtin = name, "non-strict call evaluates to undefined");
                    Ok(Value::Undefined)
                }
            }
        }
    }

    /// [`invoke`](Self::invoke) with the strictness chosen at construction.
    pub fn invoke_default(
        &self,
        ctx: &BuiltinContext,
        name: &str,
        args: &[Value],
    ) -> BuiltinResult<Value> {
        self.invoke(ctx, name, args, self.strict)
    }

    pub fn lookup(&self, name: &str) -> Option<BuiltinFn> {
        self.builtins.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builtins.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}

impl HostRegistry for BuiltinRegistry {
    fn lookup(&self, name: &str) -> Option<BuiltinFn> {
        BuiltinRegistry::lookup(self, name)
    }

    fn supported_names(&self) -> BTreeSet<String> {
        self.names().map(str::to_string).collect()
    }
}
