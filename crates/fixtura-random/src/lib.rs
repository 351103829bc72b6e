//! Secure random value engine for test-fixture generation.
//!
//! Wraps an [`EntropySource`] and layers range-bounded integers, uniform
//! doubles, booleans, bulk unique/duplicate draws and digit-exact big
//! integers on top of it. The companion `fixtura-generate` crate builds its
//! recursive type-driven generation on this engine.

pub mod bigint;
pub mod engine;
pub mod entropy;
pub mod errors;
pub mod seq;

pub use engine::{DrawMode, SecureRandom};
pub use entropy::EntropySource;
pub use errors::RandomError;
