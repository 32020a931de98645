//! Private scalar with range validation

use crate::ec::curve::{Curve, FIELD_ELEMENT_SIZE};
use crate::error::{validate, Error, Result};
use num_bigint::{BigInt, Sign};
use num_traits::Num;
use std::fmt;

/// A private scalar `k` with `1 <= k < n` for the curve's group order `n`.
///
/// Construction validates the range up front, so every arithmetic entry
/// point can assume a well-formed scalar.
#[derive(Clone)]
pub struct Scalar(BigInt);

impl Scalar {
    /// Create a scalar from an integer value.
    ///
    /// Returns [`Error::InvalidScalar`] when the value is zero, negative,
    /// or not below the group order.
    pub fn new(k: BigInt, curve: &Curve) -> Result<Self> {
        if k.sign() != Sign::Plus {
            return Err(Error::InvalidScalar {
                reason: "scalar must be a positive integer",
            });
        }
        if &k >= curve.order() {
            return Err(Error::InvalidScalar {
                reason: "scalar must be below the group order",
            });
        }
        Ok(Scalar(k))
    }

    /// Create a scalar from big-endian bytes.
    ///
    /// The slice must be exactly [`FIELD_ELEMENT_SIZE`] bytes; the value
    /// is range-checked like [`Scalar::new`].
    pub fn from_bytes(bytes: &[u8], curve: &Curve) -> Result<Self> {
        validate::length("Scalar bytes", bytes.len(), FIELD_ELEMENT_SIZE)?;
        Self::new(BigInt::from_bytes_be(Sign::Plus, bytes), curve)
    }

    /// Create a scalar from a big-endian hex string.
    pub fn from_hex(s: &str, curve: &Curve) -> Result<Self> {
        let k = BigInt::from_str_radix(s, 16)
            .map_err(|_| Error::param("Scalar hex", "not a valid hex integer"))?;
        Self::new(k, curve)
    }

    /// The scalar value.
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// Number of significant bits; at least 1 for a valid scalar.
    pub(crate) fn bit_len(&self) -> u64 {
        self.0.magnitude().bits()
    }

    /// Bit `i` of the scalar, with bit 0 the least significant.
    pub(crate) fn bit(&self, i: u64) -> bool {
        self.0.magnitude().bit(i)
    }
}

// Keep the private scalar out of debug output.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(<redacted>)")
    }
}
