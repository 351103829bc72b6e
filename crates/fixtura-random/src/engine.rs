use std::collections::HashSet;

use tracing::debug;

use crate::entropy::{os_entropy, EntropySource, OsEntropy};
use crate::errors::RandomError;

/// Governs bulk-draw behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Every value in the returned set is pairwise distinct.
    Unique,
    /// Values are drawn independently; repeats may occur.
    Duplicates,
}

enum Source<'a> {
    Owned(OsEntropy),
    Borrowed(&'a mut dyn EntropySource),
}

/// Secure random engine layered directly on an [`EntropySource`].
///
/// Range reduction is plain modulo arithmetic over a 4-byte little-endian
/// draw; the small bias this introduces for spans that do not divide 2^32 is
/// a documented limitation of the engine, not corrected here.
///
/// The engine either owns an OS-backed source ([`SecureRandom::new`]) or
/// borrows a caller-supplied one ([`SecureRandom::with_source`]). After
/// [`SecureRandom::close`] every operation fails with [`RandomError::Closed`].
pub struct SecureRandom<'a> {
    source: Source<'a>,
    closed: bool,
}

impl SecureRandom<'static> {
    /// Creates an engine that owns an internally created OS entropy source.
    pub fn new() -> Self {
        Self {
            source: Source::Owned(os_entropy()),
            closed: false,
        }
    }
}

impl Default for SecureRandom<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SecureRandom<'a> {
    /// Creates an engine over a caller-supplied entropy source. The source
    /// stays owned by the caller and is handed back when the engine drops.
    pub fn with_source(source: &'a mut dyn EntropySource) -> Self {
        Self {
            source: Source::Borrowed(source),
            closed: false,
        }
    }

    fn ensure_open(&self) -> Result<(), RandomError> {
        if self.closed {
            Err(RandomError::Closed)
        } else {
            Ok(())
        }
    }

    /// Releases the engine. The flag transitions exactly once; a second close
    /// and every later operation fail with [`RandomError::Closed`].
    pub fn close(&mut self) -> Result<(), RandomError> {
        self.ensure_open()?;
        self.closed = true;
        debug!("secure random engine closed");
        Ok(())
    }

    /// Fills `dest` directly from the entropy source.
    pub fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        self.ensure_open()?;
        match &mut self.source {
            Source::Owned(source) => source.fill(dest),
            Source::Borrowed(source) => source.fill(dest),
        }
        Ok(())
    }

    /// Four raw bytes decoded little-endian. The same byte order is the
    /// decoding convention for every width across the fixtura crates.
    fn next_u32(&mut self) -> Result<u32, RandomError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Random i32 in `[0, i32::MAX)`.
    pub fn next(&mut self) -> Result<i32, RandomError> {
        self.next_below(i32::MAX)
    }

    /// Random i32 in `[0, max)`; `max == 0` yields 0.
    pub fn next_below(&mut self, max: i32) -> Result<i32, RandomError> {
        self.ensure_open()?;
        if max < 0 {
            return Err(RandomError::InvalidArgument(format!(
                "max must be non-negative, got {max}"
            )));
        }
        if max == 0 {
            return Ok(0);
        }
        let raw = self.next_u32()?;
        Ok((raw % max as u32) as i32)
    }

    /// Random i32 in `[min, max)`; `min` itself when the bounds are equal.
    pub fn next_range(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        self.ensure_open()?;
        if max < min {
            return Err(RandomError::InvalidArgument(format!(
                "range is out of order: {min}..{max}"
            )));
        }
        if max == min {
            return Ok(min);
        }
        let span = (i64::from(max) - i64::from(min)) as u32;
        let raw = self.next_u32()?;
        Ok((i64::from(min) + i64::from(raw % span)) as i32)
    }

    /// Random boolean; fixed polarity over `next_below(2)`.
    pub fn next_bool(&mut self) -> Result<bool, RandomError> {
        Ok(self.next_below(2)? == 1)
    }

    /// Random f64 in `[0, 1)`.
    pub fn next_f64(&mut self) -> Result<f64, RandomError> {
        Ok(self.next()? as f64 * (1.0 / i32::MAX as f64))
    }

    /// `count` random bytes; pairwise distinct under [`DrawMode::Unique`].
    ///
    /// Unique mode draws one byte at a time and rejects repeats, so requests
    /// above the 256-value domain are refused up front.
    pub fn byte_values(&mut self, count: usize, mode: DrawMode) -> Result<Vec<u8>, RandomError> {
        self.ensure_open()?;
        match mode {
            DrawMode::Duplicates => {
                let mut values = vec![0u8; count];
                self.fill(&mut values)?;
                Ok(values)
            }
            DrawMode::Unique => {
                if count > 256 {
                    return Err(RandomError::InvalidArgument(format!(
                        "cannot draw {count} distinct bytes from a 256-value domain"
                    )));
                }
                let mut seen = HashSet::with_capacity(count);
                let mut values = Vec::with_capacity(count);
                let mut byte = [0u8; 1];
                while values.len() < count {
                    self.fill(&mut byte)?;
                    if seen.insert(byte[0]) {
                        values.push(byte[0]);
                    }
                }
                Ok(values)
            }
        }
    }

    /// `count` random i32 values from the default range `[0, i32::MAX)`.
    pub fn int_values(&mut self, count: usize, mode: DrawMode) -> Result<Vec<i32>, RandomError> {
        self.int_values_in(count, 0, i32::MAX, mode)
    }

    /// `count` random i32 values from `[min, max)`; pairwise distinct under
    /// [`DrawMode::Unique`], which requires the range to be wide enough.
    pub fn int_values_in(
        &mut self,
        count: usize,
        min: i32,
        max: i32,
        mode: DrawMode,
    ) -> Result<Vec<i32>, RandomError> {
        self.ensure_open()?;
        if max < min {
            return Err(RandomError::InvalidArgument(format!(
                "range is out of order: {min}..{max}"
            )));
        }
        match mode {
            DrawMode::Duplicates => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(self.next_range(min, max)?);
                }
                Ok(values)
            }
            DrawMode::Unique => {
                let width = i64::from(max) - i64::from(min);
                if count as i64 > width {
                    return Err(RandomError::InvalidArgument(format!(
                        "cannot draw {count} distinct values from a range of width {width}"
                    )));
                }
                let mut seen = HashSet::with_capacity(count);
                let mut values = Vec::with_capacity(count);
                while values.len() < count {
                    let value = self.next_range(min, max)?;
                    if seen.insert(value) {
                        values.push(value);
                    }
                }
                Ok(values)
            }
        }
    }

    /// `count` independent draws of [`SecureRandom::next_f64`].
    pub fn double_values(&mut self, count: usize) -> Result<Vec<f64>, RandomError> {
        self.ensure_open()?;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.next_f64()?);
        }
        Ok(values)
    }
}
