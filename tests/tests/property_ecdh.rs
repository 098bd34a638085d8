//! Property-based tests for the P-256 group, ECDH and HKDF

use ecdhe::prelude::{EcdhP256, Error, FieldElement, HkdfSha256, KeyAgreement, Point, Scalar};
use ecdhe_algorithms::ec::p256::{scalar_mult, scalar_mult_base_g};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Each case runs several full ladders, so keep the case count small
fn config() -> ProptestConfig {
    ProptestConfig::with_cases(12)
}

/// Non-zero scalar from arbitrary bytes
fn scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>().prop_map(|bytes| Scalar::new(bytes).unwrap_or_else(|_| Scalar::from_u64(1)))
}

/// Random point k·G with k ≠ 0
fn point() -> impl Strategy<Value = Point> {
    scalar().prop_map(|k| scalar_mult_base_g(&k))
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn identity_is_neutral(p in point()) {
        prop_assert_eq!(p.add(&Point::identity()), p);
        prop_assert_eq!(Point::identity().add(&p), p);
    }

    #[test]
    fn negation_is_inverse(p in point()) {
        prop_assert!(p.negate().is_on_curve());
        prop_assert_eq!(p.add(&p.negate()), Point::identity());
    }

    #[test]
    fn addition_is_commutative(p in point(), q in point()) {
        prop_assert_eq!(p.add(&q), q.add(&p));
    }

    #[test]
    fn addition_is_associative(p in point(), q in point(), r in point()) {
        prop_assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
    }

    #[test]
    fn doubling_matches_self_addition(p in point()) {
        prop_assert_eq!(p.double(), p.add(&p));
        prop_assert!(p.double().is_on_curve());
    }

    #[test]
    fn scalar_mult_distributes_over_addition(k in scalar(), p in point(), q in point()) {
        let lhs = scalar_mult(&k, &p.add(&q));
        let rhs = scalar_mult(&k, &p).add(&scalar_mult(&k, &q));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_mult_is_associative(k1 in scalar(), k2 in scalar()) {
        let lhs = scalar_mult_base_g(&k1.mul_mod_n(&k2));
        let rhs = scalar_mult(&k1, &scalar_mult_base_g(&k2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_mult_adds_exponents(k1 in scalar(), k2 in scalar()) {
        let lhs = scalar_mult_base_g(&k1.add_mod_n(&k2));
        let rhs = scalar_mult_base_g(&k1).add(&scalar_mult_base_g(&k2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn sec1_roundtrip(p in point()) {
        let compressed = p.to_sec1(true).unwrap();
        let uncompressed = p.to_sec1(false).unwrap();
        prop_assert_eq!(compressed.len(), 33);
        prop_assert_eq!(uncompressed.len(), 65);
        prop_assert_eq!(Point::from_sec1(&compressed).unwrap(), p);
        prop_assert_eq!(Point::from_sec1(&uncompressed).unwrap(), p);
    }

    #[test]
    fn ecdh_is_symmetric(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (a, a_pub) = EcdhP256::generate_keypair(&mut rng);
        let (b, b_pub) = EcdhP256::generate_keypair(&mut rng);

        let s_ab = EcdhP256::compute_shared_secret(&a, &b_pub).unwrap();
        let s_ba = EcdhP256::compute_shared_secret(&b, &a_pub).unwrap();
        prop_assert_eq!(s_ab.as_bytes(), s_ba.as_bytes());
    }
}

proptest! {
    #[test]
    fn field_sqrt_of_square(bytes in any::<[u8; 32]>()) {
        if let Ok(x) = FieldElement::from_bytes(&bytes) {
            let root = x.square().sqrt().unwrap();
            prop_assert!(root == x || root == x.negate());
        }
    }

    #[test]
    fn field_inverse(bytes in any::<[u8; 32]>()) {
        if let Ok(x) = FieldElement::from_bytes(&bytes) {
            if !x.is_zero() {
                prop_assert_eq!(x.mul(&x.invert().unwrap()), FieldElement::one());
            }
        }
    }

    #[test]
    fn hkdf_prefix_law(
        ikm in prop::collection::vec(any::<u8>(), 0..64),
        salt in prop::collection::vec(any::<u8>(), 0..64),
        info in prop::collection::vec(any::<u8>(), 0..64),
        short in 0usize..64,
        extra in 0usize..200,
    ) {
        let long = short + extra;
        let a = HkdfSha256::derive(&salt, &ikm, &info, short).unwrap();
        let b = HkdfSha256::derive(&salt, &ikm, &info, long).unwrap();
        prop_assert_eq!(a.len(), short);
        prop_assert_eq!(b.len(), long);
        prop_assert_eq!(a.as_slice(), &b[..short]);
    }

    #[test]
    fn hkdf_rejects_over_ceiling(excess in 1usize..1024) {
        let result = HkdfSha256::derive(b"salt", b"ikm", b"info", 255 * 32 + excess);
        let is_output_too_long = matches!(result, Err(Error::OutputTooLong { .. }));
        prop_assert!(is_output_too_long);
    }
}
