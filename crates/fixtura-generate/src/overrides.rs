use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Outcome of an override hook: a final boxed value, or a deferral to the
/// built-in handlers.
///
/// `handled == false` never carries a final value; `handled == true` with a
/// missing or wrongly typed value is reported by the engine as
/// [`crate::GenerateError::OverrideMismatch`].
pub struct GenerationResult {
    pub handled: bool,
    pub value: Option<Box<dyn Any>>,
}

impl GenerationResult {
    /// A final value; the engine consults no further handler.
    pub fn handled<T: Any>(value: T) -> Self {
        Self {
            handled: true,
            value: Some(Box::new(value)),
        }
    }

    /// Defer to the built-in handlers.
    pub fn pass() -> Self {
        Self {
            handled: false,
            value: None,
        }
    }
}

type Hook = Box<dyn Fn() -> GenerationResult>;

/// Type-keyed strategy map consulted before built-in dispatch. Owned by the
/// caller that constructs the engine; the engine only reads it.
#[derive(Default)]
pub struct OverrideTable {
    hooks: HashMap<TypeId, Hook>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook for `T`, replacing any earlier one.
    pub fn insert<T: Any>(&mut self, hook: impl Fn() -> GenerationResult + 'static) {
        self.hooks.insert(TypeId::of::<T>(), Box::new(hook));
    }

    pub(crate) fn hook(&self, id: TypeId) -> Option<&Hook> {
        self.hooks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
