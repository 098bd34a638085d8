//! Trait definitions for the ecdhe component seams

pub mod key_agreement;
pub mod mac;

pub use key_agreement::KeyAgreement;
pub use mac::HmacSha256;
