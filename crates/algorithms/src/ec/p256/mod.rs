//! NIST P-256 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ − 3x + b over the prime field 𝔽ₚ where:
//! - p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1
//! - n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! The implementation uses:
//! - Solinas (FIPS 186-4 D.2.3) reduction for field multiplication
//! - Fermat exponentiation for inversion and p ≡ 3 (mod 4) square roots
//! - Affine coordinates with the chord-and-tangent group law
//! - A Montgomery ladder for scalar multiplication
//! - SEC1 compressed and uncompressed point encoding

mod constants;
mod field;
mod point;
mod scalar;
mod sec1;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_UNCOMPRESSED_SIZE,
    P256_SCALAR_SIZE, P256_SHARED_SECRET_SIZE,
};
pub use field::{FieldElement, Legendre};
pub use point::Point;
pub use scalar::Scalar;
pub use sec1::PointFormat;

/// Get the standard base point G of the P-256 curve
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar · G
///
/// This is the core operation for generating public keys from private keys.
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: compute scalar · point
///
/// The scalar is already reduced mod n; a zero scalar or the identity point
/// yields the identity.
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}
