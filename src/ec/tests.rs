//! Curve arithmetic unit tests

use super::*;
use crate::ec::field;
use crate::error::Error;
use num_bigint::{BigInt, Sign};
use num_traits::{Num, One, Zero};
use rand::rngs::OsRng;
use rand::Rng;

fn dec(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 10).expect("test vector must be valid decimal")
}

// Generator coordinates in decimal, as published for secp256k1
const GX_DEC: &str = "55066263022277343669578718895168534326250603453777594175500187360389116729240";
const GY_DEC: &str = "32670510020758816978083085130507043184471273380659243275938904335757337482424";

// Known coordinates of 2G
const G2X_DEC: &str = "89565891926547004231252920425935692360644145829622209833684329913297188986597";
const G2Y_DEC: &str = "12158399299693830322967808612713398636155367887041628176798871954788371653930";

fn random_scalar(curve: &Curve) -> Scalar {
    let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
    loop {
        OsRng.fill(&mut bytes);
        if let Ok(scalar) = Scalar::from_bytes(&bytes, curve) {
            return scalar;
        }
    }
}

#[test]
fn test_mod_inverse_known_vector() {
    let curve = Curve::secp256k1();
    let inv = field::mod_inverse(&dec(GX_DEC), curve.p(), "test").unwrap();
    assert_eq!(
        inv,
        dec("16048257703666452242803569546805946138055448571451565585555302070354637922038")
    );
}

#[test]
fn test_mod_inverse_property() {
    let curve = Curve::secp256k1();
    for _ in 0..100 {
        let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
        OsRng.fill(&mut bytes);
        let a = field::reduce(&BigInt::from_bytes_be(Sign::Plus, &bytes), curve.p());
        if a.is_zero() {
            continue;
        }
        let inv = field::mod_inverse(&a, curve.p(), "test").unwrap();
        assert_eq!(field::reduce(&(a * inv), curve.p()), BigInt::one());
    }
}

#[test]
fn test_mod_inverse_of_zero() {
    let curve = Curve::secp256k1();
    let err = field::mod_inverse(&BigInt::zero(), curve.p(), "test").unwrap_err();
    assert!(matches!(err, Error::NoInverse { .. }));

    // A multiple of p is congruent to zero as well
    let err = field::mod_inverse(&(curve.p() * BigInt::from(4)), curve.p(), "test").unwrap_err();
    assert!(matches!(err, Error::NoInverse { .. }));
}

#[test]
fn test_point_addition_commutative() {
    let curve = Curve::secp256k1();
    let g = curve.generator();
    for _ in 0..10 {
        let p = curve.mul(&g, &random_scalar(&curve)).unwrap();
        let q = curve.mul(&g, &random_scalar(&curve)).unwrap();
        assert_eq!(curve.add(&p, &q).unwrap(), curve.add(&q, &p).unwrap());
    }
}

#[test]
fn test_double_matches_add_self() {
    let curve = Curve::secp256k1();
    let g = curve.generator();

    let doubled = curve.double(&g).unwrap();
    assert_eq!(doubled, curve.add(&g, &g).unwrap());
    assert_eq!(doubled, Point::affine(dec(G2X_DEC), dec(G2Y_DEC)));
}

#[test]
fn test_multiplication_by_one_yields_generator() {
    let curve = Curve::secp256k1();
    let one = Scalar::new(BigInt::one(), &curve).unwrap();
    let result = curve.mul(&curve.generator(), &one).unwrap();
    assert_eq!(result, Point::affine(dec(GX_DEC), dec(GY_DEC)));
}

#[test]
fn test_multiplication_by_two_matches_doubling() {
    let curve = Curve::secp256k1();
    let g = curve.generator();
    let two = Scalar::new(BigInt::from(2), &curve).unwrap();
    let result = curve.mul(&g, &two).unwrap();
    assert_eq!(result, curve.double(&g).unwrap());
    assert_eq!(result, Point::affine(dec(G2X_DEC), dec(G2Y_DEC)));
}

#[test]
fn test_multiplication_is_deterministic() {
    let curve = Curve::secp256k1();
    let g = curve.generator();
    let k = random_scalar(&curve);
    assert_eq!(curve.mul(&g, &k).unwrap(), curve.mul(&g, &k).unwrap());
}

#[test]
fn test_scalar_range_validation() {
    let curve = Curve::secp256k1();

    let err = Scalar::new(BigInt::zero(), &curve).unwrap_err();
    assert!(matches!(err, Error::InvalidScalar { .. }));

    let err = Scalar::new(BigInt::from(-5), &curve).unwrap_err();
    assert!(matches!(err, Error::InvalidScalar { .. }));

    let err = Scalar::new(curve.order().clone(), &curve).unwrap_err();
    assert!(matches!(err, Error::InvalidScalar { .. }));

    assert!(Scalar::new(curve.order() - BigInt::one(), &curve).is_ok());
}

#[test]
fn test_scalar_from_bytes_wrong_length() {
    let curve = Curve::secp256k1();
    let err = Scalar::from_bytes(&[1u8; 16], &curve).unwrap_err();
    assert!(matches!(err, Error::Length { expected: 32, .. }));
}

#[test]
fn test_order_minus_one_then_generator_is_identity() {
    let curve = Curve::secp256k1();
    let g = curve.generator();
    let k = Scalar::new(curve.order() - BigInt::one(), &curve).unwrap();

    // (n-1)·G = -G, so adding G lands on the identity. This is the
    // mutual-inverse branch of addition; it must not hit the inverse.
    let near_identity = curve.mul(&g, &k).unwrap();
    assert_eq!(curve.add(&near_identity, &g).unwrap(), Point::identity());
    assert_eq!(curve.add(&g, &near_identity).unwrap(), Point::identity());
}

#[test]
fn test_identity_handling() {
    let curve = Curve::secp256k1();
    let g = curve.generator();
    let identity = Point::identity();

    assert_eq!(curve.add(&g, &identity).unwrap(), g);
    assert_eq!(curve.add(&identity, &g).unwrap(), g);
    assert_eq!(curve.double(&identity).unwrap(), Point::identity());

    let two = Scalar::new(BigInt::from(2), &curve).unwrap();
    assert_eq!(curve.mul(&identity, &two).unwrap(), Point::identity());
}

#[test]
fn test_doubling_at_y_zero_yields_identity() {
    let curve = Curve::secp256k1();
    // A point with y = 0 is its own inverse; doubling must not divide by zero.
    let point = Point::affine(BigInt::from(5), BigInt::zero());
    assert_eq!(curve.double(&point).unwrap(), Point::identity());
}

#[test]
fn test_uncompressed_encoding_of_generator() {
    let curve = Curve::secp256k1();
    assert_eq!(
        encode_uncompressed(&curve.generator()).unwrap(),
        "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
         483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    );
}

#[test]
fn test_compressed_encoding_of_generator() {
    let curve = Curve::secp256k1();
    // Gy is even, so the prefix is 02
    assert_eq!(
        encode_compressed(&curve.generator()).unwrap(),
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    );
}

#[test]
fn test_compressed_roundtrip() {
    let curve = Curve::secp256k1();
    let g = curve.generator();
    for _ in 0..20 {
        let point = curve.mul(&g, &random_scalar(&curve)).unwrap();
        let encoded = encode_compressed(&point).unwrap();
        assert_eq!(decode_compressed(&curve, &encoded).unwrap(), point);
    }
}

#[test]
fn test_identity_has_no_encoding() {
    let identity = Point::identity();
    assert!(matches!(
        encode_uncompressed(&identity),
        Err(Error::Parameter { .. })
    ));
    assert!(matches!(
        encode_compressed(&identity),
        Err(Error::Parameter { .. })
    ));
}

#[test]
fn test_decode_compressed_rejects_malformed_input() {
    let curve = Curve::secp256k1();

    let err = decode_compressed(&curve, "02abcd").unwrap_err();
    assert!(matches!(err, Error::Length { .. }));

    let bad_prefix = format!("05{}", "00".repeat(32));
    let err = decode_compressed(&curve, &bad_prefix).unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));

    let bad_hex = format!("02{}", "zz".repeat(32));
    let err = decode_compressed(&curve, &bad_hex).unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));
}

struct CountingObserver {
    doubles: usize,
    adds: usize,
}

impl MulObserver for CountingObserver {
    fn on_step(&mut self, step: MulStep<'_>) {
        match step {
            MulStep::Doubled { .. } => self.doubles += 1,
            MulStep::Added { .. } => self.adds += 1,
        }
    }
}

#[test]
fn test_observer_sees_every_step() {
    let curve = Curve::secp256k1();
    let g = curve.generator();

    // 5 = 0b101: after the leading bit, two doublings and one addition
    let five = Scalar::new(BigInt::from(5), &curve).unwrap();
    let mut observer = CountingObserver {
        doubles: 0,
        adds: 0,
    };
    let observed = curve.mul_with_observer(&g, &five, &mut observer).unwrap();

    assert_eq!(observer.doubles, 2);
    assert_eq!(observer.adds, 1);
    assert_eq!(observed, curve.mul(&g, &five).unwrap());
}

#[test]
fn test_trace_observer_matches_plain_multiplication() {
    // No subscriber installed: events are discarded, the result must
    // still agree with the untraced path.
    let curve = Curve::secp256k1();
    let g = curve.generator();
    let five = Scalar::new(BigInt::from(5), &curve).unwrap();
    let traced = curve
        .mul_with_observer(&g, &five, &mut TraceObserver)
        .unwrap();
    assert_eq!(traced, curve.mul(&g, &five).unwrap());
}

#[test]
fn test_keypair_generation() {
    let curve = Curve::secp256k1();
    let (sk, pk) = generate_keypair(&mut OsRng, &curve).unwrap();
    let recomputed = derive_public_key(&curve, &sk).unwrap();
    assert_eq!(pk, recomputed);
    assert!(!pk.is_identity());
}

#[test]
fn test_scalar_from_hex_matches_from_bytes() {
    let curve = Curve::secp256k1();
    let hex_str = "a0dc65ffca799873cbea0ac274015b9526505daaaed385155425f7337704883e";
    let from_hex = Scalar::from_hex(hex_str, &curve).unwrap();
    let from_bytes = Scalar::from_bytes(&hex::decode(hex_str).unwrap(), &curve).unwrap();
    assert_eq!(from_hex.value(), from_bytes.value());
}

#[test]
fn test_scalar_debug_is_redacted() {
    let curve = Curve::secp256k1();
    let k = Scalar::new(BigInt::from(7), &curve).unwrap();
    assert_eq!(format!("{:?}", k), "Scalar(<redacted>)");
}
