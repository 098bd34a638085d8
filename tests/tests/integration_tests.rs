//! End-to-end tests through the `ecdhe` facade

use ecdhe::prelude::*;
use ecdhe::{compute_shared_secret, decode_point, encode_point, generate_keypair, hkdf_sha256};
use ecdhe_tests::vectors::{RFC5869_SHA256, RFC5903_P256, SMALL_MULTIPLES};
use ecdhe_tests::{hex32, point_from_hex};

#[test]
fn test_small_multiples_of_generator() {
    for (k, x, y) in SMALL_MULTIPLES {
        let expected = point_from_hex(x, y);
        let p = ecdhe_algorithms::ec::p256::scalar_mult_base_g(&Scalar::from_u64(k));
        assert_eq!(p, expected, "{}·G", k);
    }

    // Scenario: 1·G = G and 2·G = double(G)
    let g = Point::generator();
    assert_eq!(g.mul(&Scalar::from_u64(1)), g);
    assert_eq!(g.mul(&Scalar::from_u64(2)), g.double());
}

#[test]
fn test_generator_has_order_n() {
    let n = Scalar::from_bytes_reduced(NIST_P256.n);
    assert_eq!(Point::generator().mul(&n), Point::identity());
}

#[test]
fn test_full_exchange_through_the_wire() {
    let (alice_sk, alice_pk) = generate_keypair();
    let (bob_sk, bob_pk) = generate_keypair();

    let alice_wire = encode_point(&alice_pk, false).unwrap();
    let bob_wire = encode_point(&bob_pk, true).unwrap();
    assert_eq!(alice_wire.len(), 65);
    assert_eq!(bob_wire.len(), 33);

    let s_alice = compute_shared_secret(&alice_sk, &decode_point(&bob_wire).unwrap()).unwrap();
    let s_bob = compute_shared_secret(&bob_sk, &decode_point(&alice_wire).unwrap()).unwrap();
    assert_eq!(*s_alice, *s_bob);

    let k_alice = hkdf_sha256(&s_alice[..], b"", b"client write key", 16).unwrap();
    let k_bob = hkdf_sha256(&s_bob[..], b"", b"client write key", 16).unwrap();
    assert_eq!(k_alice, k_bob);
}

#[test]
fn test_alice_one_bob_two_scenario() {
    let alice = Scalar::from_u64(1);
    let bob = Scalar::from_u64(2);
    let g = Point::generator();

    let alice_pub = g.mul(&alice);
    let bob_pub = g.mul(&bob);

    let s_alice = compute_shared_secret(&alice, &bob_pub).unwrap();
    let s_bob = compute_shared_secret(&bob, &alice_pub).unwrap();

    let (_, x_2g, _) = SMALL_MULTIPLES[1];
    assert_eq!(*s_alice, hex32(x_2g));
    assert_eq!(*s_bob, hex32(x_2g));
}

#[test]
fn test_rfc5903_through_facade() {
    let v = &RFC5903_P256;
    let i = Scalar::new(hex32(v.i)).unwrap();
    let r = Scalar::new(hex32(v.r)).unwrap();
    let gi = point_from_hex(v.gix, v.giy);
    let gr = point_from_hex(v.grx, v.gry);

    assert_eq!(*compute_shared_secret(&i, &gr).unwrap(), hex32(v.shared_x));
    assert_eq!(*compute_shared_secret(&r, &gi).unwrap(), hex32(v.shared_x));
}

#[test]
fn test_invalid_peer_points() {
    let (sk, _) = generate_keypair();

    let err = compute_shared_secret(&sk, &Point::identity()).unwrap_err();
    assert!(matches!(err, Error::InfinityNotAllowed { .. }));

    let g = Point::generator();
    let off_curve = Point::Affine {
        x: g.x().unwrap(),
        y: g.y().unwrap().add(&FieldElement::one()),
    };
    let err = compute_shared_secret(&sk, &off_curve).unwrap_err();
    assert!(matches!(err, Error::PointNotOnCurve { .. }));
    assert!(err.is_invalid_peer_key());
}

#[test]
fn test_codec_rejections() {
    // Invalid leading byte on a 33-byte input
    let mut bytes = encode_point(&Point::generator(), true).unwrap();
    bytes[0] = 0x05;
    assert!(matches!(decode_point(&bytes), Err(Error::InvalidEncoding { .. })));

    // x = 1 has no square root under the curve equation
    let mut no_root = [0u8; 33];
    no_root[0] = 0x03;
    no_root[32] = 1;
    assert!(matches!(decode_point(&no_root), Err(Error::InvalidEncoding { .. })));

    assert!(matches!(
        encode_point(&Point::identity(), true),
        Err(Error::InfinityNotAllowed { .. })
    ));
    assert!(matches!(
        encode_point(&Point::identity(), false),
        Err(Error::InfinityNotAllowed { .. })
    ));
}

#[test]
fn test_hkdf_rfc5869_vectors() {
    for v in RFC5869_SHA256.iter() {
        let ikm = hex::decode(v.ikm).unwrap();
        let salt = hex::decode(v.salt).unwrap();
        let info = hex::decode(v.info).unwrap();

        let prk = HkdfSha256::extract(&salt, &ikm).unwrap();
        assert_eq!(hex::encode(&prk[..]), v.prk, "{}", v.name);

        let okm = hkdf_sha256(&ikm, &salt, &info, v.length).unwrap();
        assert_eq!(hex::encode(okm.as_slice()), v.okm, "{}", v.name);
    }
}

#[test]
fn test_hkdf_ceiling_through_facade() {
    assert_eq!(hkdf_sha256(b"ikm", b"", b"", 8160).unwrap().len(), 8160);
    assert!(matches!(
        hkdf_sha256(b"ikm", b"", b"", 8161),
        Err(Error::OutputTooLong { max: 8160, requested: 8161, .. })
    ));
}

#[test]
fn test_public_key_serde_roundtrip() {
    let (_, pk) = EcdhP256::generate_keypair(&mut rand::rngs::OsRng);
    let json = serde_json::to_string(&pk).unwrap();
    let back: EcdhP256PublicKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pk);

    let fmt = serde_json::to_string(&PointFormat::Compressed).unwrap();
    assert_eq!(serde_json::from_str::<PointFormat>(&fmt).unwrap(), PointFormat::Compressed);
}

#[test]
fn test_session_key_helper_matches_facade_hkdf() {
    let (a, a_pub) = EcdhP256::generate_keypair(&mut rand::rngs::OsRng);
    let (b, b_pub) = EcdhP256::generate_keypair(&mut rand::rngs::OsRng);
    let shared = EcdhP256::compute_shared_secret(&a, &b_pub).unwrap();
    assert_eq!(shared, EcdhP256::compute_shared_secret(&b, &a_pub).unwrap());

    let k1 = derive_session_key(&shared, b"salt", b"info", 32).unwrap();
    let k2 = hkdf_sha256(shared.as_bytes(), b"salt", b"info", 32).unwrap();
    assert_eq!(k1, k2);
}
