use std::any::TypeId;

use tracing::trace;

use fixtura_random::SecureRandom;

use crate::errors::GenerateError;
use crate::overrides::OverrideTable;

/// Types the engine can produce.
///
/// Built-in impls cover primitives and well-known collections; user types get
/// theirs from the descriptor macros ([`crate::generate_enum!`],
/// [`crate::generate_via_constructor!`], [`crate::generate_unconstructible!`])
/// or from a hand-written impl.
pub trait Generate: Sized + 'static {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError>;
}

/// Recursive value engine over a [`SecureRandom`] draw source.
pub struct ValueEngine<'a> {
    random: SecureRandom<'a>,
    overrides: OverrideTable,
}

impl ValueEngine<'static> {
    /// Engine over a fresh, owned secure random source and no overrides.
    pub fn new() -> Self {
        Self::with_random(SecureRandom::new())
    }

    /// Engine over a fresh source with a caller-supplied override table.
    pub fn with_overrides(overrides: OverrideTable) -> Self {
        Self::with_random_and_overrides(SecureRandom::new(), overrides)
    }
}

impl Default for ValueEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ValueEngine<'a> {
    /// Engine over a caller-supplied draw source.
    pub fn with_random(random: SecureRandom<'a>) -> Self {
        Self {
            random,
            overrides: OverrideTable::default(),
        }
    }

    pub fn with_random_and_overrides(random: SecureRandom<'a>, overrides: OverrideTable) -> Self {
        Self { random, overrides }
    }

    /// Produces a random value of `T`.
    ///
    /// An override hook for `T` wins when it reports `handled`; a `pass`
    /// result falls through to the type's [`Generate`] impl. Hooks also apply
    /// to every recursively generated constructor parameter, because each one
    /// comes back through this entry point.
    pub fn generate<T: Generate>(&mut self) -> Result<T, GenerateError> {
        if let Some(hook) = self.overrides.hook(TypeId::of::<T>()) {
            let result = hook();
            if result.handled {
                trace!(ty = std::any::type_name::<T>(), "override hook handled type");
                return result
                    .value
                    .and_then(|value| value.downcast::<T>().ok())
                    .map(|value| *value)
                    .ok_or(GenerateError::OverrideMismatch(std::any::type_name::<T>()));
            }
        }
        T::generate(self)
    }

    /// Produces a value of `T` outside `excluded`, redrawing while the result
    /// is a member of the set.
    ///
    /// The loop is intentionally unbounded: an exclusion set covering the
    /// whole practical domain of `T` does not terminate.
    pub fn generate_excluding<T>(&mut self, excluded: &[T]) -> Result<T, GenerateError>
    where
        T: Generate + PartialEq,
    {
        loop {
            let value = self.generate::<T>()?;
            if !excluded.contains(&value) {
                return Ok(value);
            }
            trace!(
                ty = std::any::type_name::<T>(),
                "generated value excluded, redrawing"
            );
        }
    }

    /// Exact-width raw draw. Decode with `from_le_bytes` to stay on the fixed
    /// byte-order convention used across every width.
    pub fn draw<const N: usize>(&mut self) -> Result<[u8; N], GenerateError> {
        let mut buf = [0u8; N];
        self.random.fill(&mut buf)?;
        Ok(buf)
    }

    /// Direct access to the underlying draw source.
    pub fn random_mut(&mut self) -> &mut SecureRandom<'a> {
        &mut self.random
    }
}
