//! Prime field arithmetic helpers
//!
//! Field elements are `BigInt` values normalized into `[0, n)`. Every
//! function here is a pure computation; the modulus is always passed in
//! explicitly rather than read from ambient state.

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Normalize a signed value into the canonical range `[0, n)`.
pub fn reduce(a: &BigInt, n: &BigInt) -> BigInt {
    ((a % n) + n) % n
}

/// Compute the modular inverse of `a` modulo `n` via the extended
/// Euclidean algorithm.
///
/// Returns the unique `r` in `[0, n)` with `(a * r) mod n == 1`, or
/// [`Error::NoInverse`] when `a` is congruent to zero modulo `n` (the
/// algorithm would otherwise never reach a remainder of one).
pub fn mod_inverse(a: &BigInt, n: &BigInt, context: &'static str) -> Result<BigInt> {
    let mut low = reduce(a, n);
    if low.is_zero() {
        return Err(Error::NoInverse { context });
    }

    let mut lm = BigInt::one();
    let mut hm = BigInt::zero();
    let mut high = n.clone();
    while low > BigInt::one() {
        let ratio = &high / &low;
        let nm = &hm - &lm * &ratio;
        let new = &high - &low * &ratio;
        hm = lm;
        lm = nm;
        high = low;
        low = new;
    }
    Ok(reduce(&lm, n))
}

/// Parity of a normalized field element.
pub fn is_odd(a: &BigInt) -> bool {
    (a % BigInt::from(2)).abs() == BigInt::one()
}

/// Square root of `a` modulo a prime `p` with `p ≡ 3 (mod 4)`, via the
/// exponentiation `a^((p+1)/4) mod p`.
///
/// Returns `None` when `a` is a quadratic non-residue, or when the
/// modulus is not of the supported form.
pub fn sqrt_mod(a: &BigInt, p: &BigInt) -> Option<BigInt> {
    if reduce(p, &BigInt::from(4)) != BigInt::from(3) {
        return None;
    }
    let a = reduce(a, p);
    let exponent = (p + BigInt::one()) / BigInt::from(4);
    let root = a.modpow(&exponent, p);
    if reduce(&(&root * &root), p) == a {
        Some(root)
    } else {
        None
    }
}
