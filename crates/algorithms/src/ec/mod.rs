//! Elliptic Curve Primitives
//!
//! This module provides the NIST P-256 curve used by the key-agreement core:
//! field arithmetic over the curve's prime, the affine group law, Montgomery
//! ladder scalar multiplication and SEC1 point encoding.

pub mod p256;

// Re-export types with consistent naming scheme.
pub use p256::{
    FieldElement as P256FieldElement, Point as P256Point, PointFormat, Scalar as P256Scalar,
};
