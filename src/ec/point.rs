//! Affine point arithmetic and scalar multiplication
//!
//! Points are immutable: every group operation returns a fresh value.
//! The identity element is modeled explicitly as [`Point::Identity`] so
//! the mutual-inverse and `y = 0` edge cases have a well-defined result
//! instead of surfacing as a division by zero inside the field inverse.

use crate::ec::curve::Curve;
use crate::ec::field;
use crate::ec::scalar::Scalar;
use crate::ec::trace::{MulObserver, MulStep, NullObserver};
use crate::error::Result;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// A point in the curve group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    /// An affine point `(x, y)` with coordinates in `[0, p)`
    Affine {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
    /// The point at infinity (group identity)
    Identity,
}

impl Point {
    /// Create an affine point from its coordinates.
    ///
    /// The coordinates are trusted; whether they satisfy the curve
    /// equation is not checked.
    pub fn affine(x: BigInt, y: BigInt) -> Self {
        Point::Affine { x, y }
    }

    /// The identity element (point at infinity).
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            Point::Affine { x, y } => Some((x, y)),
            Point::Identity => None,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
            Point::Identity => f.write_str("Identity"),
        }
    }
}

impl Curve {
    /// Add two points using the group law.
    ///
    /// Equal points route to [`Curve::double`]; mutual inverses (same x,
    /// different y) yield the identity. The field inverse is only invoked
    /// once `b.x - a.x` is known to be nonzero.
    pub fn add(&self, a: &Point, b: &Point) -> Result<Point> {
        let ((ax, ay), (bx, by)) = match (a.coordinates(), b.coordinates()) {
            (None, _) => return Ok(b.clone()),
            (_, None) => return Ok(a.clone()),
            (Some(a), Some(b)) => (a, b),
        };

        if field::reduce(&(bx - ax), self.p()).is_zero() {
            if field::reduce(&(by - ay), self.p()).is_zero() {
                return self.double(a);
            }
            // a and b are inverses of each other
            return Ok(Point::identity());
        }

        // λ = (yb - ya) / (xb - xa)
        let lambda = field::reduce(
            &((by - ay) * field::mod_inverse(&(bx - ax), self.p(), "point addition")?),
            self.p(),
        );
        let x = field::reduce(&(&lambda * &lambda - ax - bx), self.p());
        let y = field::reduce(&(lambda * (ax - &x) - ay), self.p());
        Ok(Point::affine(x, y))
    }

    /// Double a point (add it to itself).
    ///
    /// The identity and points with `y = 0` (their own inverse) double to
    /// the identity, so the field inverse of `2·y` always exists when it
    /// is taken.
    pub fn double(&self, a: &Point) -> Result<Point> {
        let (ax, ay) = match a.coordinates() {
            None => return Ok(Point::identity()),
            Some(c) => c,
        };
        if field::reduce(ay, self.p()).is_zero() {
            return Ok(Point::identity());
        }

        // λ = (3·x² + a) / (2·y)
        let lambda = field::reduce(
            &((BigInt::from(3) * ax * ax + self.a())
                * field::mod_inverse(&(BigInt::from(2) * ay), self.p(), "point doubling")?),
            self.p(),
        );
        let x = field::reduce(&(&lambda * &lambda - BigInt::from(2) * ax), self.p());
        let y = field::reduce(&(lambda * (ax - &x) - ay), self.p());
        Ok(Point::affine(x, y))
    }

    /// Scalar multiplication: compute `k * base` by left-to-right
    /// double-and-add.
    ///
    /// Not constant-time: the sequence of doublings and additions follows
    /// the bits of `k`.
    pub fn mul(&self, base: &Point, k: &Scalar) -> Result<Point> {
        self.mul_with_observer(base, k, &mut NullObserver)
    }

    /// Scalar multiplication with a step observer.
    ///
    /// The observer is invoked after every doubling and every conditional
    /// addition with the bit index just consumed and the current
    /// accumulator; see [`MulObserver`].
    pub fn mul_with_observer(
        &self,
        base: &Point,
        k: &Scalar,
        observer: &mut dyn MulObserver,
    ) -> Result<Point> {
        if base.is_identity() {
            return Ok(Point::identity());
        }

        // The accumulator starts at the base, consuming the leading 1-bit.
        let mut acc = base.clone();
        for i in (0..k.bit_len() - 1).rev() {
            acc = self.double(&acc)?;
            observer.on_step(MulStep::Doubled { bit: i, acc: &acc });
            if k.bit(i) {
                acc = self.add(&acc, base)?;
                observer.on_step(MulStep::Added { bit: i, acc: &acc });
            }
        }
        Ok(acc)
    }
}
