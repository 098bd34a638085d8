//! Constant values for ecdhe cryptographic operations
//!
//! This crate is the single source of truth for the curve parameters and the
//! byte sizes used across the workspace. Everything here is a compile-time
//! constant; there is nothing to configure at runtime.

#![no_std]

pub mod traditional;
pub mod utils;
