//! Built-in handlers for primitives and well-known collection shapes.
//!
//! Fixed-width values draw exactly their width in raw bytes and decode
//! little-endian; deterministic sources therefore pin exact results (see the
//! integration fixtures). Arrays and collections hold exactly one recursively
//! generated element, a deliberate single-element stand-in for a full-length
//! array.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use http::Uri;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::engine::{Generate, ValueEngine};
use crate::errors::GenerateError;

impl Generate for bool {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(engine.random_mut().next_bool()?)
    }
}

impl Generate for u8 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(engine.draw::<1>()?[0])
    }
}

impl Generate for i16 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(i16::from_le_bytes(engine.draw()?))
    }
}

impl Generate for u16 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(u16::from_le_bytes(engine.draw()?))
    }
}

impl Generate for i32 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(i32::from_le_bytes(engine.draw()?))
    }
}

impl Generate for u32 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(u32::from_le_bytes(engine.draw()?))
    }
}

impl Generate for i64 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(i64::from_le_bytes(engine.draw()?))
    }
}

impl Generate for u64 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(u64::from_le_bytes(engine.draw()?))
    }
}

impl Generate for f64 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(f64::from_le_bytes(engine.draw()?))
    }
}

impl Generate for f32 {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        // Mantissa in [-1, 1) scaled by a random power of two.
        let mantissa = engine.random_mut().next_f64()? * 2.0 - 1.0;
        let exponent = engine.random_mut().next_range(-126, 128)?;
        Ok((mantissa * 2f64.powi(exponent)) as f32)
    }
}

impl Generate for char {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        // Two-byte draw; surrogate codes are folded back into the valid range
        // so the result is always a scalar value.
        let code = u16::from_le_bytes(engine.draw()?);
        let code = if (0xD800..=0xDFFF).contains(&code) {
            code - 0xD800
        } else {
            code
        };
        Ok(char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

impl Generate for String {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        // Opaque random token, not sampled from a printable alphabet.
        let bytes: [u8; 16] = engine.draw()?;
        Ok(Uuid::from_bytes(bytes).simple().to_string())
    }
}

impl Generate for Decimal {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        let lo = u32::from_le_bytes(engine.draw()?);
        let mid = u32::from_le_bytes(engine.draw()?);
        let hi = u32::from_le_bytes(engine.draw()?);
        let flags: [u8; 2] = engine.draw()?;
        let negative = flags[0] & 1 == 1;
        // Decimal scale is capped at 28 fractional digits.
        let scale = u32::from(flags[1]) % 29;
        Ok(Decimal::from_parts(lo, mid, hi, negative, scale))
    }
}

impl Generate for Uuid {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(Uuid::from_bytes(engine.draw()?))
    }
}

impl Generate for DateTime<Utc> {
    fn generate(_engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(Utc::now())
    }
}

impl Generate for Ipv4Addr {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        let [a, b, c, d] = engine.draw()?;
        Ok(Ipv4Addr::new(a, b, c, d))
    }
}

impl Generate for IpAddr {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(IpAddr::V4(engine.generate()?))
    }
}

impl Generate for Uri {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        let label = u32::from_le_bytes(engine.draw()?);
        Ok(format!("https://host-{label:08x}.example/").parse()?)
    }
}

impl Generate for TimeDelta {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        // Four independent sub-field draws, in this order.
        let days = engine.random_mut().next_below(365)?;
        let hours = engine.random_mut().next_below(24)?;
        let minutes = engine.random_mut().next_below(60)?;
        let seconds = engine.random_mut().next_below(60)?;
        Ok(TimeDelta::days(i64::from(days))
            + TimeDelta::hours(i64::from(hours))
            + TimeDelta::minutes(i64::from(minutes))
            + TimeDelta::seconds(i64::from(seconds)))
    }
}

impl<T: Generate> Generate for Vec<T> {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok(vec![engine.generate()?])
    }
}

impl<T: Generate> Generate for [T; 1] {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        Ok([engine.generate()?])
    }
}

impl<T: Generate> Generate for Arc<[T]> {
    fn generate(engine: &mut ValueEngine<'_>) -> Result<Self, GenerateError> {
        // Build the mutable collection, add one element, freeze it.
        let mut items = Vec::with_capacity(1);
        items.push(engine.generate()?);
        Ok(Arc::from(items))
    }
}
