//! # ecdhe
//!
//! Elliptic-curve Diffie-Hellman key agreement over NIST P-256, with SEC1
//! point encoding and HKDF-SHA256 session-key derivation.
//!
//! ## Usage
//!
//! ```
//! use ecdhe::{compute_shared_secret, decode_point, encode_point, generate_keypair, hkdf_sha256};
//!
//! let (alice_sk, alice_pk) = generate_keypair();
//! let (bob_sk, bob_pk) = generate_keypair();
//!
//! // Public keys travel as SEC1 bytes
//! let wire = encode_point(&bob_pk, true).unwrap();
//! let bob_pk_received = decode_point(&wire).unwrap();
//!
//! let s_alice = compute_shared_secret(&alice_sk, &bob_pk_received).unwrap();
//! let s_bob = compute_shared_secret(&bob_sk, &alice_pk).unwrap();
//! assert_eq!(*s_alice, *s_bob);
//!
//! // Never use the raw secret as a key
//! let key = hkdf_sha256(&s_alice[..], b"", b"handshake", 32).unwrap();
//! assert_eq!(key.len(), 32);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and the OS random source
//! - `serde`: serialization for public keys and `PointFormat`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`ecdhe-params`]: curve parameters and size constants
//! - [`ecdhe-api`]: error type and the `HmacSha256` / `KeyAgreement` traits
//! - [`ecdhe-algorithms`]: field, point, scalar, SEC1, HMAC and HKDF
//! - [`ecdhe-kem`]: ECDH key agreement

pub use ecdhe_algorithms as algorithms;
pub use ecdhe_api as api;
pub use ecdhe_kem as kem;
pub use ecdhe_params as params;

pub use ecdhe_algorithms::ec::p256::{Point, PointFormat, Scalar};
pub use ecdhe_api::{Error, Result};

use ecdhe_algorithms::HkdfSha256;
use ecdhe_api::KeyAgreement;
use ecdhe_kem::{EcdhP256, EcdhP256PublicKey, EcdhP256SecretKey};
use ecdhe_params::traditional::ecdh::ECDH_P256_SHARED_SECRET_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Generate a key pair `(scalar, scalar · G)` from the operating system RNG
#[cfg(feature = "std")]
pub fn generate_keypair() -> (Scalar, Point) {
    generate_keypair_with_rng(&mut rand::rngs::OsRng)
}

/// Generate a key pair `(scalar, scalar · G)` from a caller-supplied RNG
pub fn generate_keypair_with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> (Scalar, Point) {
    let (sk, pk) = EcdhP256::generate_keypair(rng);
    (sk.scalar().clone(), *pk.point())
}

/// Compute the raw shared secret: the x-coordinate of `my_scalar · peer_point`
///
/// Fails with `InfinityNotAllowed` or `PointNotOnCurve` for an invalid peer
/// point (see [`Error::is_invalid_peer_key`]) and with
/// `DegenerateSharedSecret` when the product is the point at infinity.
pub fn compute_shared_secret(
    my_scalar: &Scalar,
    peer_point: &Point,
) -> Result<Zeroizing<[u8; ECDH_P256_SHARED_SECRET_SIZE]>> {
    let sk = EcdhP256SecretKey::from_scalar(my_scalar.clone())?;
    let pk = EcdhP256PublicKey::from_point(*peer_point);
    let shared = EcdhP256::compute_shared_secret(&sk, &pk)?;
    Ok(Zeroizing::new(*shared.as_bytes()))
}

/// Encode a point in SEC1 form (33 bytes compressed, 65 bytes uncompressed)
pub fn encode_point(point: &Point, compressed: bool) -> Result<Vec<u8>> {
    point.to_sec1(compressed)
}

/// Decode a SEC1-encoded point
pub fn decode_point(bytes: &[u8]) -> Result<Point> {
    Point::from_sec1(bytes)
}

/// HKDF-SHA256 (RFC 5869); an empty `salt` selects 32 zero bytes
pub fn hkdf_sha256(ikm: &[u8], salt: &[u8], info: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
    HkdfSha256::derive(salt, ikm, info, length)
}

/// Common imports for ecdhe users
pub mod prelude {
    pub use crate::api::{Error, HmacSha256, KeyAgreement, Result};
    pub use crate::algorithms::{Hkdf, HkdfSha256, Hmac};
    pub use crate::algorithms::ec::p256::{FieldElement, Point, PointFormat, Scalar};
    pub use crate::kem::{
        derive_session_key, EcdhP256, EcdhP256PublicKey, EcdhP256SecretKey, EcdhP256SharedSecret,
    };
    pub use crate::params::traditional::ecdh::NIST_P256;
}
