use thiserror::Error;

use fixtura_random::RandomError;

/// Errors emitted by the value engine.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Random(#[from] RandomError),
    #[error("type '{0}' has no usable public constructor")]
    Unsupported(&'static str),
    #[error("override hook for type '{0}' returned an incompatible value")]
    OverrideMismatch(&'static str),
    #[error("generated host label produced an invalid uri: {0}")]
    Uri(#[from] http::uri::InvalidUri),
}
