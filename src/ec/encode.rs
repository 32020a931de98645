//! Hex presentation of public-key points
//!
//! Formats follow the usual SEC 1 conventions rendered as lowercase hex
//! strings: `04 || x || y` uncompressed, `02`/`03 || x` compressed with
//! the prefix selected by the parity of y. Coordinates are zero-padded
//! big-endian, 64 hex digits each.

use crate::ec::curve::{Curve, COMPRESSED_HEX_LEN, UNCOMPRESSED_HEX_LEN};
use crate::ec::field;
use crate::ec::point::Point;
use crate::error::{validate, Error, Result};
use num_bigint::{BigInt, Sign};

/// Encode a point in uncompressed form: `04 || x || y`.
///
/// The identity has no affine coordinates and cannot be encoded.
pub fn encode_uncompressed(point: &Point) -> Result<String> {
    let (x, y) = point
        .coordinates()
        .ok_or_else(|| Error::param("Point", "identity has no affine encoding"))?;
    let encoded = format!("04{:064x}{:064x}", x, y);
    debug_assert_eq!(encoded.len(), UNCOMPRESSED_HEX_LEN);
    Ok(encoded)
}

/// Encode a point in compressed form: `03 || x` if y is odd, `02 || x`
/// if y is even.
pub fn encode_compressed(point: &Point) -> Result<String> {
    let (x, y) = point
        .coordinates()
        .ok_or_else(|| Error::param("Point", "identity has no affine encoding"))?;
    let prefix = if field::is_odd(y) { "03" } else { "02" };
    Ok(format!("{}{:064x}", prefix, x))
}

/// Decode a compressed point, recovering y from the curve equation.
///
/// The square root `y = ±sqrt(x³ + a·x + b)` is resolved to the root
/// whose parity matches the prefix.
pub fn decode_compressed(curve: &Curve, encoded: &str) -> Result<Point> {
    validate::length("Compressed point hex", encoded.len(), COMPRESSED_HEX_LEN)?;
    let (tag, x_hex) = encoded.split_at(2);
    let want_odd = match tag {
        "02" => false,
        "03" => true,
        _ => {
            return Err(Error::param(
                "Compressed point",
                "invalid prefix (expected 02 or 03)",
            ))
        }
    };

    let x_bytes = hex::decode(x_hex)
        .map_err(|_| Error::param("Compressed point", "invalid hex in x-coordinate"))?;
    let x = BigInt::from_bytes_be(Sign::Plus, &x_bytes);

    // y² = x³ + a·x + b
    let rhs = field::reduce(&(&x * &x * &x + curve.a() * &x + curve.b()), curve.p());
    let y = field::sqrt_mod(&rhs, curve.p())
        .ok_or_else(|| Error::param("Compressed point", "x-coordinate is not on the curve"))?;
    let y = if field::is_odd(&y) == want_odd {
        y
    } else {
        field::reduce(&(-y), curve.p())
    };
    Ok(Point::affine(x, y))
}
