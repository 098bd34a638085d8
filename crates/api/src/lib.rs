//! Public API traits and types for the ecdhe library
//!
//! This crate provides the public API surface shared by every member of the
//! workspace: the error type returned by all fallible operations and the
//! traits that mark the seams between components (the HMAC primitive that
//! HKDF consumes, and the key-agreement contract).

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{HmacSha256, KeyAgreement};

// Re-export trait modules for direct access
pub use traits::{key_agreement, mac};
