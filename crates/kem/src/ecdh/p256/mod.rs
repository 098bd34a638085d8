//! ECDH with NIST P-256
//!
//! Key-pair generation, validated shared-secret computation and
//! HKDF-SHA256 session-key derivation.
//!
//! # Security Features
//!
//! - Private scalars are drawn uniformly from [1, n−1] by rejection sampling
//! - Peer public keys are checked against the curve equation and the identity
//!   before use
//! - A shared point at infinity is reported, never silently accepted
//! - Secret keys and shared secrets are zeroized on drop and never logged
//!
//! The raw shared secret is the x-coordinate of the shared point. It is not
//! meant to be used as a key directly; feed it through
//! [`derive_session_key`].

use core::fmt;
use ecdhe_algorithms::ec::p256::{self as ec_p256, Point, Scalar};
use ecdhe_algorithms::{validate, HkdfSha256};
use ecdhe_api::{Error, KeyAgreement, Result};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const PEER_KEY_CONTEXT: &str = "ECDH-P256 peer public key";

/// ECDH key agreement over P-256
pub struct EcdhP256;

/// Public key for ECDH-P256: an affine curve point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdhP256PublicKey(Point);

/// Secret key for ECDH-P256: a scalar in [1, n−1]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdhP256SecretKey(Scalar);

/// Raw shared secret: the 32-byte big-endian x-coordinate of the shared point
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdhP256SharedSecret([u8; ec_p256::P256_SHARED_SECRET_SIZE]);

impl EcdhP256PublicKey {
    /// Wrap a point as a public key
    ///
    /// No validation happens here; [`EcdhP256::compute_shared_secret`]
    /// rejects the identity and off-curve points.
    pub fn from_point(point: Point) -> Self {
        Self(point)
    }

    /// Decode a SEC1 public key (33 or 65 bytes)
    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        Point::from_sec1(bytes).map(Self)
    }

    /// Encode the public key in SEC1 form
    pub fn to_sec1(&self, compressed: bool) -> Result<Vec<u8>> {
        self.0.to_sec1(compressed)
    }

    /// The underlying curve point
    pub fn point(&self) -> &Point {
        &self.0
    }
}

impl EcdhP256SecretKey {
    /// Wrap a scalar as a secret key
    ///
    /// Fails for the zero scalar.
    pub fn from_scalar(scalar: Scalar) -> Result<Self> {
        validate::parameter(!scalar.is_zero(), "EcdhP256SecretKey", "Scalar cannot be zero")?;
        Ok(Self(scalar))
    }

    /// Create a secret key from 32 big-endian bytes
    ///
    /// The value is reduced modulo n and must be non-zero afterwards.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Scalar::deserialize(bytes).map(Self)
    }

    /// Export the secret key bytes, wiped when the returned value is dropped
    pub fn to_bytes(&self) -> Zeroizing<[u8; ec_p256::P256_SCALAR_SIZE]> {
        Zeroizing::new(self.0.serialize())
    }

    /// The secret scalar
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// Recompute the matching public key: scalar · G
    pub fn public_key(&self) -> EcdhP256PublicKey {
        EcdhP256PublicKey(ec_p256::scalar_mult_base_g(&self.0))
    }
}

impl fmt::Debug for EcdhP256SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EcdhP256SecretKey([REDACTED])")
    }
}

impl EcdhP256SharedSecret {
    /// The shared x-coordinate, big-endian
    pub fn as_bytes(&self) -> &[u8; ec_p256::P256_SHARED_SECRET_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for EcdhP256SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for EcdhP256SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for EcdhP256SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EcdhP256SharedSecret {}

impl fmt::Debug for EcdhP256SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EcdhP256SharedSecret([REDACTED])")
    }
}

impl KeyAgreement for EcdhP256 {
    type PublicKey = EcdhP256PublicKey;
    type SecretKey = EcdhP256SecretKey;
    type SharedSecret = EcdhP256SharedSecret;

    fn name() -> &'static str {
        "ECDH-P256"
    }

    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (Self::SecretKey, Self::PublicKey) {
        let scalar = Scalar::random(rng);
        let point = ec_p256::scalar_mult_base_g(&scalar);

        // Holds for every scalar in [1, n−1]; a failure is an arithmetic bug
        assert!(point.is_on_curve(), "generated public key is not on the curve");
        assert!(!point.is_identity(), "generated public key is the identity");

        log::trace!("{}: generated key pair", Self::name());
        (EcdhP256SecretKey(scalar), EcdhP256PublicKey(point))
    }

    fn compute_shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret> {
        let peer = peer_public_key.point();

        if let Err(e) = validate::not_identity(peer.is_identity(), PEER_KEY_CONTEXT)
            .and_then(|_| validate::on_curve(peer.is_on_curve(), PEER_KEY_CONTEXT))
        {
            log::debug!("{}: rejected peer key: {}", Self::name(), e);
            return Err(e);
        }

        let shared = ec_p256::scalar_mult(secret_key.scalar(), peer);
        let x = shared.x_coordinate_bytes().ok_or_else(|| {
            log::debug!("{}: shared point is the identity", Self::name());
            Error::DegenerateSharedSecret {
                context: "ECDH-P256 shared secret",
            }
        })?;

        log::trace!("{}: computed shared secret", Self::name());
        Ok(EcdhP256SharedSecret(x))
    }
}

/// Derive a session key from a raw shared secret with HKDF-SHA256
///
/// An empty `salt` selects the all-zero salt. Fails with `OutputTooLong`
/// when `length` exceeds 255 × 32 bytes.
pub fn derive_session_key(
    shared: &EcdhP256SharedSecret,
    salt: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    HkdfSha256::derive(salt, shared.as_ref(), info, length)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::EcdhP256PublicKey;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Public keys travel as uncompressed SEC1 bytes
    impl Serialize for EcdhP256PublicKey {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let bytes = self.to_sec1(false).map_err(S::Error::custom)?;
            serializer.serialize_bytes(&bytes)
        }
    }

    impl<'de> Deserialize<'de> for EcdhP256PublicKey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            EcdhP256PublicKey::from_sec1(&bytes).map_err(D::Error::custom)
        }
    }
}
