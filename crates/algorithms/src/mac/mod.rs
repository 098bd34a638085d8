//! Message Authentication Codes
//!
//! The key-agreement core only needs HMAC-SHA-256, which HKDF consumes through
//! the [`ecdhe_api::HmacSha256`] trait.

pub mod hmac;

pub use self::hmac::Hmac;
