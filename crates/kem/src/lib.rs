//! Elliptic-curve Diffie-Hellman key agreement
//!
//! This crate provides ECDH over NIST P-256: key-pair generation, validated
//! shared-secret computation, and session-key derivation through
//! HKDF-SHA256. The arithmetic lives in `ecdhe-algorithms`.

#![forbid(unsafe_code)]

pub mod ecdh;

// Re-exports
pub use ecdh::{
    derive_session_key, EcdhP256, EcdhP256PublicKey, EcdhP256SecretKey, EcdhP256SharedSecret,
};
