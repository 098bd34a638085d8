//! Cryptographic primitives for the ecdhe library
//!
//! This crate provides the arithmetic and encoding layers of the key
//! agreement core:
//!
//! - P-256 field arithmetic, affine group law and Montgomery-ladder scalar
//!   multiplication ([`ec::p256`])
//! - SEC1 compressed/uncompressed point encoding with square-root
//!   decompression
//! - An HMAC-SHA-256 primitive ([`mac::hmac`]) and HKDF built on top of any
//!   [`HmacSha256`](ecdhe_api::HmacSha256) implementation ([`kdf::hkdf`])
//!
//! # Side channels
//!
//! The scalar-multiplication ladder performs one addition and one doubling
//! per scalar bit. The affine group law underneath still branches on
//! coordinate equality and inverts with a data-dependent number of reduction
//! passes, so this crate does not claim full constant-time behaviour.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{p256, P256FieldElement, P256Point, P256Scalar, PointFormat};

// MAC implementations
pub mod mac;
pub use mac::hmac::Hmac;

// KDF implementations
pub mod kdf;
pub use kdf::hkdf::{Hkdf, HkdfSha256};
