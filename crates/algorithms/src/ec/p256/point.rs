//! P-256 elliptic curve point operations
//!
//! Points are kept in affine coordinates. The group law follows the textbook
//! chord-and-tangent formulas, and scalar multiplication is a Montgomery
//! ladder over the bits of the reduced scalar.
//!
//! The addition formula selects between the identity, doubling and chord
//! cases by comparing coordinates. That comparison depends on the operands
//! and is a known timing side channel; the ladder above it keeps the
//! per-bit work uniform but does not remove it.

use crate::ec::p256::{
    constants::P256_FIELD_ELEMENT_SIZE,
    field::{limbs_from_be, FieldElement},
    scalar::Scalar,
};
use crate::error::{validate, Result};
use ecdhe_params::traditional::ecdh::NIST_P256;

/// A point of the P-256 group
///
/// Either the point at infinity (the group identity) or an affine pair
/// `(x, y)`. Every `Affine` value produced by this crate satisfies the curve
/// equation; values built from external bytes go through [`Point::new`] or
/// the SEC1 decoder, which check it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity
    Identity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// Create an affine point, checking the curve equation
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Point::Affine { x, y };
        validate::on_curve(point.is_on_curve(), "P-256 Point")?;
        Ok(point)
    }

    /// Create an affine point from big-endian coordinate bytes
    ///
    /// Coordinates must be below the field modulus and satisfy the curve
    /// equation.
    pub fn from_coordinates(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_bytes(x_bytes)?;
        let y = FieldElement::from_bytes(y_bytes)?;
        Self::new(x, y)
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Identity
    }

    /// The standard base point G
    pub fn generator() -> Self {
        Point::Affine {
            x: FieldElement(limbs_from_be(&NIST_P256.g_x)),
            y: FieldElement(limbs_from_be(&NIST_P256.g_y)),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Check that the point satisfies y² = x³ + a·x + b
    ///
    /// The point at infinity is considered on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Identity => true,
            Point::Affine { x, y } => y.square() == Self::curve_rhs(x),
        }
    }

    /// Right-hand side of the curve equation: x³ + a·x + b
    pub(crate) fn curve_rhs(x: &FieldElement) -> FieldElement {
        let x3 = x.square().mul(x);
        x3.add(&FieldElement::curve_a().mul(x))
            .add(&FieldElement::curve_b())
    }

    /// The x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<FieldElement> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(*x),
        }
    }

    /// The y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<FieldElement> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(*y),
        }
    }

    /// Extract x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> Option<[u8; P256_FIELD_ELEMENT_SIZE]> {
        self.x().map(|x| x.to_bytes())
    }

    /// Extract y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> Option<[u8; P256_FIELD_ELEMENT_SIZE]> {
        self.y().map(|y| y.to_bytes())
    }

    /// Additive inverse: (x, y) ↦ (x, −y)
    pub fn negate(&self) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: y.negate(),
            },
        }
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1, x2, y2) = match (self, other) {
            (Point::Identity, _) => return *other,
            (_, Point::Identity) => return *self,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        // P + (−P) = O; also covers doubling a point with y = 0
        if x1 == x2 && y1.add(y2).is_zero() {
            return Point::Identity;
        }

        let slope = if x1 == x2 && y1 == y2 {
            Self::tangent_slope(x1, y1)
        } else {
            // m = (y2 − y1) / (x2 − x1)
            y2.sub(y1).mul(&x2.sub(x1).invert_nonzero())
        };

        Self::from_slope(&slope, x1, y1, x2)
    }

    /// Double this point: 2P
    pub fn double(&self) -> Self {
        match self {
            Point::Identity => Point::Identity,
            // Vertical tangent
            Point::Affine { y, .. } if y.is_zero() => Point::Identity,
            Point::Affine { x, y } => {
                let slope = Self::tangent_slope(x, y);
                Self::from_slope(&slope, x, y, x)
            }
        }
    }

    /// Scalar multiplication: scalar · P
    ///
    /// Montgomery ladder over the bits of the reduced scalar, most significant
    /// first. The pair (R0, R1) keeps R1 = R0 + P throughout, and every bit
    /// costs one addition and one doubling whatever its value.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        if scalar.is_zero() || self.is_identity() {
            return Point::Identity;
        }

        let mut r0 = Point::Identity;
        let mut r1 = *self;

        for i in (0..scalar.bit_length()).rev() {
            if scalar.bit(i) {
                r0 = r0.add(&r1);
                r1 = r1.double();
            } else {
                r1 = r0.add(&r1);
                r0 = r0.double();
            }
        }

        r0
    }

    /// m = (3x² + a) / (2y); callers guarantee y ≠ 0
    fn tangent_slope(x: &FieldElement, y: &FieldElement) -> FieldElement {
        let x2 = x.square();
        let numerator = x2.add(&x2).add(&x2).add(&FieldElement::curve_a());
        let denominator = y.add(y);
        numerator.mul(&denominator.invert_nonzero())
    }

    /// x3 = m² − x1 − x2, y3 = m·(x1 − x3) − y1
    fn from_slope(m: &FieldElement, x1: &FieldElement, y1: &FieldElement, x2: &FieldElement) -> Self {
        let x3 = m.square().sub(x1).sub(x2);
        let y3 = m.mul(&x1.sub(&x3)).sub(y1);
        Point::Affine { x: x3, y: y3 }
    }
}
