//! Error handling for cryptographic primitives
//!
//! The primitives report failures with the workspace-wide
//! [`ecdhe_api::Error`]; this module re-exports it and adds the
//! [`validate`] guard helpers.

pub use ecdhe_api::error::{Error, Result};

// Include the validation submodule
pub mod validate;
