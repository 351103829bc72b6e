//! Recursive, type-driven value generation for test fixtures.
//!
//! For a requested type the engine consults caller override hooks first,
//! then the type's [`Generate`] impl: a built-in handler for primitives and
//! well-known collections, or a descriptor produced by the
//! [`generate_enum!`], [`generate_via_constructor!`] and
//! [`generate_unconstructible!`] macros for user types.

pub mod builtin;
pub mod engine;
pub mod errors;
mod macros;
pub mod overrides;

pub use engine::{Generate, ValueEngine};
pub use errors::GenerateError;
pub use fixtura_random::{DrawMode, SecureRandom};
pub use overrides::{GenerationResult, OverrideTable};
