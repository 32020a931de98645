//! Elliptic curve public-key derivation over short-Weierstrass curves
//!
//! `curvekey` computes a public key from a private scalar using affine
//! point arithmetic: the extended Euclidean modular inverse, point
//! addition and doubling, and double-and-add scalar multiplication. The
//! standard secp256k1 parameters ship with the crate; any other
//! short-Weierstrass curve over a 256-bit prime field can be supplied
//! explicitly through [`Curve::new`].
//!
//! This crate is deliberately *not* constant-time and performs no
//! side-channel hardening; see the module docs of [`ec`].
//!
//! # Example
//!
//! ```
//! use curvekey::{derive_public_key, encode_compressed, Curve, Scalar};
//!
//! let curve = Curve::secp256k1();
//! let private_key = Scalar::from_hex("01", &curve)?;
//! let public_key = derive_public_key(&curve, &private_key)?;
//!
//! assert_eq!(
//!     encode_compressed(&public_key)?,
//!     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
//! );
//! # Ok::<(), curvekey::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::{
    decode_compressed, derive_public_key, encode_compressed, encode_uncompressed,
    generate_keypair, Curve, MulObserver, MulStep, NullObserver, Point, Scalar, TraceObserver,
};
