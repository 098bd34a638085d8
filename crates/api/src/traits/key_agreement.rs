//! Trait definition for Diffie-Hellman style key agreement
//!
//! Two parties each generate a key pair, exchange public keys, and combine
//! their own secret key with the peer's public key. Both sides arrive at the
//! same shared secret.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a key-agreement scheme
///
/// # Security Design
///
/// - The shared secret is raw key material. It must go through a KDF before
///   it is used as a key.
/// - Peer public keys are validated by `compute_shared_secret`; invalid keys
///   are reported, never silently replaced.
pub trait KeyAgreement {
    /// Public key type, safe to transmit
    type PublicKey: Clone;

    /// Secret key type, zeroized when dropped
    type SecretKey: Zeroize + Clone;

    /// Raw shared secret, zeroized when dropped
    type SharedSecret: Zeroize + Clone + AsRef<[u8]>;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a fresh key pair from a cryptographically secure RNG.
    ///
    /// A key pair that violates the scheme's invariants is an implementation
    /// defect, so this does not return an error.
    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (Self::SecretKey, Self::PublicKey);

    /// Combine our secret key with the peer's public key.
    fn compute_shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
