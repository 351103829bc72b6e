//! Digit-exact big-integer generation.

use num_bigint::{BigInt, Sign};
use tracing::trace;

use crate::engine::SecureRandom;
use crate::errors::RandomError;

// Extra bits past the ceil(digits * log2 10) budget, so the forced top bits
// land the initial draw at or above the requested magnitude.
const BIT_SAFETY_MARGIN: usize = 8;

impl SecureRandom<'_> {
    /// Random positive big integer whose decimal form has exactly `digits`
    /// digits.
    ///
    /// Digit counts below 10 fit an i32 and come straight from a bounded
    /// range draw. Larger counts draw a raw byte budget, force the high bits
    /// on and the sign positive, then correct the digit count: divide by a
    /// power of ten when too long, multiply and add a small random remainder
    /// when too short.
    pub fn big_integer(&mut self, digits: usize) -> Result<BigInt, RandomError> {
        if digits == 0 {
            return Err(RandomError::InvalidArgument(
                "digit count must be at least 1".to_string(),
            ));
        }
        if digits < 10 {
            let lower = 10_i32.pow(digits as u32 - 1);
            let value = self.next_range(lower, lower * 10)?;
            return Ok(BigInt::from(value));
        }

        let bits =
            (digits as f64 * std::f64::consts::LOG2_10).ceil() as usize + BIT_SAFETY_MARGIN;
        let mut buf = vec![0u8; bits / 8 + 1];
        self.fill(&mut buf)?;
        if let Some(high) = buf.last_mut() {
            *high |= 0b1100_0000;
        }
        let mut value = BigInt::from_bytes_le(Sign::Plus, &buf);

        loop {
            let have = decimal_digits(&value);
            if have == digits {
                break;
            }
            if have > digits {
                trace!(have, want = digits, "trimming excess digits");
                value /= pow10(have - digits);
            } else {
                let missing = digits - have;
                trace!(have, want = digits, "padding missing digits");
                value *= pow10(missing);
                let pad = missing.min(9) as u32;
                value += BigInt::from(self.next_below(10_i32.pow(pad))?);
            }
        }
        Ok(value)
    }

    /// Random big integer below `max`: a random digit count up to `max`'s own
    /// is generated, and the draw is reduced modulo `max` when it meets or
    /// exceeds it.
    pub fn big_integer_below(&mut self, max: &BigInt) -> Result<BigInt, RandomError> {
        if max.sign() != Sign::Plus {
            return Err(RandomError::InvalidArgument(
                "max must be positive".to_string(),
            ));
        }
        let digits = decimal_digits(max);
        let chosen = self.next_range(1, digits as i32 + 1)? as usize;
        let mut value = self.big_integer(chosen)?;
        if &value >= max {
            value %= max;
        }
        Ok(value)
    }

    /// Random big integer in `[min, max)` for positive, ordered bounds.
    pub fn big_integer_between(
        &mut self,
        min: &BigInt,
        max: &BigInt,
    ) -> Result<BigInt, RandomError> {
        if min.sign() != Sign::Plus || max.sign() != Sign::Plus {
            return Err(RandomError::InvalidArgument(
                "bounds must be positive".to_string(),
            ));
        }
        if min >= max {
            return Err(RandomError::InvalidArgument(
                "min must be below max".to_string(),
            ));
        }
        Ok(min + self.big_integer_below(&(max - min))?)
    }
}

fn decimal_digits(value: &BigInt) -> usize {
    value.to_string().len()
}

fn pow10(exp: usize) -> BigInt {
    BigInt::from(10u32).pow(exp as u32)
}
