//! Key Derivation Functions
//!
//! HKDF (RFC 5869) over an abstract HMAC-SHA-256 primitive. The raw ECDH
//! shared secret is fed through it to obtain session keys.

pub mod hkdf;

pub use self::hkdf::{Hkdf, HkdfSha256};
