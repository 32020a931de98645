//! Short-Weierstrass curve parameters
//!
//! A [`Curve`] bundles the constants `(p, a, b, n, G)` of a curve
//! `y² = x³ + a·x + b` over the prime field `F_p` into one immutable
//! value. The arithmetic in this crate always receives the parameters
//! through a `&Curve`; nothing is kept in process-wide mutable state.

use crate::ec::point::Point;
use num_bigint::BigInt;
use num_traits::Num;

/// Size of a scalar or field element in bytes (32 bytes = 256 bits)
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Length of an uncompressed point in hex characters: prefix `04` + x + y
pub const UNCOMPRESSED_HEX_LEN: usize = 2 + 4 * FIELD_ELEMENT_SIZE; // 130

/// Length of a compressed point in hex characters: prefix `02`/`03` + x
pub const COMPRESSED_HEX_LEN: usize = 2 + 2 * FIELD_ELEMENT_SIZE; // 66

// secp256k1 parameters
//
// Prime field: 2^256 - 2^32 - 2^9 - 2^8 - 2^7 - 2^6 - 2^4 - 1
const SECP256K1_P: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
// Order of the curve
const SECP256K1_N: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
// Generator point
const SECP256K1_GX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const SECP256K1_GY: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// Parameters of a short-Weierstrass curve over a prime field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    p: BigInt,
    a: BigInt,
    b: BigInt,
    n: BigInt,
    gx: BigInt,
    gy: BigInt,
}

impl Curve {
    /// Create a curve from explicit parameters.
    ///
    /// The parameters are trusted: no primality or generator-order
    /// checks are performed.
    pub fn new(p: BigInt, a: BigInt, b: BigInt, n: BigInt, gx: BigInt, gy: BigInt) -> Self {
        Curve { p, a, b, n, gx, gy }
    }

    /// The standard secp256k1 curve: `y² = x³ + 7` over `F_p`.
    pub fn secp256k1() -> Self {
        Curve {
            p: from_hex(SECP256K1_P),
            a: BigInt::from(0),
            b: BigInt::from(7),
            n: from_hex(SECP256K1_N),
            gx: from_hex(SECP256K1_GX),
            gy: from_hex(SECP256K1_GY),
        }
    }

    /// The field modulus `p`.
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// The curve coefficient `a`.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// The curve coefficient `b`.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The group order `n`.
    pub fn order(&self) -> &BigInt {
        &self.n
    }

    /// The generator point `G`.
    pub fn generator(&self) -> Point {
        Point::affine(self.gx.clone(), self.gy.clone())
    }
}

fn from_hex(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 16).expect("curve constants must be valid hex")
}
