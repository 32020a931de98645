//! Short-Weierstrass elliptic curve key-generation primitives
//!
//! This module implements affine point arithmetic over a prime field:
//! modular inverse via the extended Euclidean algorithm, point addition
//! and doubling, and left-to-right double-and-add scalar multiplication.
//! The standard secp256k1 parameters are provided; the curve equation is
//! y² = x³ + a·x + b over F_p.
//!
//! None of the arithmetic is constant-time. The execution pattern of the
//! multiplier follows the bits of the scalar, so this code is not suited
//! to environments where timing side channels matter.

pub mod curve;
pub mod encode;
pub mod field;
pub mod point;
pub mod scalar;
pub mod trace;

pub use curve::{Curve, COMPRESSED_HEX_LEN, FIELD_ELEMENT_SIZE, UNCOMPRESSED_HEX_LEN};
pub use encode::{decode_compressed, encode_compressed, encode_uncompressed};
pub use point::Point;
pub use scalar::Scalar;
pub use trace::{MulObserver, MulStep, NullObserver, TraceObserver};

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Derive the public key `k * G` for a private scalar.
pub fn derive_public_key(curve: &Curve, k: &Scalar) -> Result<Point> {
    curve.mul(&curve.generator(), k)
}

/// Generate a keypair from a cryptographically secure RNG.
///
/// Scalar candidates are rejection-sampled until one falls in `[1, n)`;
/// the transient byte buffer is wiped before returning.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
    curve: &Curve,
) -> Result<(Scalar, Point)> {
    let mut scalar_bytes = [0u8; FIELD_ELEMENT_SIZE];
    loop {
        rng.fill_bytes(&mut scalar_bytes);
        match Scalar::from_bytes(&scalar_bytes, curve) {
            Ok(private_key) => {
                scalar_bytes.zeroize();
                let public_key = derive_public_key(curve, &private_key)?;
                return Ok((private_key, public_key));
            }
            Err(_) => continue,
        }
    }
}

#[cfg(test)]
mod tests;
