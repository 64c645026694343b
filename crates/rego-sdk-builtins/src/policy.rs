use std::collections::BTreeSet;

/// Resolved SDK configuration, ready to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Default invocation mode for `BuiltinRegistry::invoke_default`.
    pub strict: bool,
    /// Extension builtins left out of the merge.
    pub disabled: BTreeSet<String>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            strict: true,
            disabled: BTreeSet::new(),
        }
    }
}

impl EffectiveConfig {
    pub fn is_enabled(&self, builtin: &str) -> bool {
        !self.disabled.contains(builtin)
    }
}
