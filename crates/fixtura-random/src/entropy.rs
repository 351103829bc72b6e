use rand::TryRngCore;
use rand::rand_core::UnwrapErr;
use rand::rngs::OsRng;
use rand::RngCore;

/// Capability to fill a byte buffer with unpredictable bytes.
///
/// Every [`RngCore`] implementor is an entropy source, so a seeded
/// `ChaCha8Rng` (or any scripted generator) can drive the engine in tests
/// while `OsRng` backs it in production.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]);
}

impl<R: RngCore> EntropySource for R {
    fn fill(&mut self, dest: &mut [u8]) {
        self.fill_bytes(dest);
    }
}

/// OS-backed entropy for the engine's owned construction path.
pub(crate) type OsEntropy = UnwrapErr<OsRng>;

pub(crate) fn os_entropy() -> OsEntropy {
    OsRng.unwrap_err()
}
