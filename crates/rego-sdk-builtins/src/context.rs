use std::time::Instant;

/// Per-call context handed to every builtin.
///
/// Builtins in this crate never look inside it. It only carries the caller's
/// deadline bookkeeping through dispatch.
#[derive(Clone, Debug, Default)]
pub struct BuiltinContext {
    deadline: Option<Instant>,
}

impl BuiltinContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
