//! SEC1 point encoding for P-256
//!
//! Uncompressed points are `0x04 || X || Y` (65 bytes), compressed points are
//! `0x02 || X` for even Y and `0x03 || X` for odd Y (33 bytes). Coordinates are
//! 32-byte big-endian. The point at infinity has no encoding here.

use crate::ec::p256::{
    constants::{
        P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_UNCOMPRESSED_SIZE,
        SEC1_TAG_COMPRESSED_EVEN, SEC1_TAG_COMPRESSED_ODD, SEC1_TAG_UNCOMPRESSED,
    },
    field::FieldElement,
    point::Point,
};
use crate::error::{validate, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointFormat {
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
}

impl PointFormat {
    /// Encoded length in bytes
    pub const fn encoded_len(self) -> usize {
        match self {
            PointFormat::Uncompressed => P256_POINT_UNCOMPRESSED_SIZE,
            PointFormat::Compressed => P256_POINT_COMPRESSED_SIZE,
        }
    }
}

impl Point {
    /// Detect the SEC1 format of an encoded point from its length and prefix
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        match (bytes.len(), bytes.first()) {
            (P256_POINT_UNCOMPRESSED_SIZE, Some(&SEC1_TAG_UNCOMPRESSED)) => {
                Ok(PointFormat::Uncompressed)
            }
            (P256_POINT_COMPRESSED_SIZE, Some(&SEC1_TAG_COMPRESSED_EVEN))
            | (P256_POINT_COMPRESSED_SIZE, Some(&SEC1_TAG_COMPRESSED_ODD)) => {
                Ok(PointFormat::Compressed)
            }
            (P256_POINT_UNCOMPRESSED_SIZE, _) | (P256_POINT_COMPRESSED_SIZE, _) => {
                log::debug!("SEC1 decode rejected: invalid prefix for {} bytes", bytes.len());
                Err(Error::encoding("P-256 SEC1", "Invalid point prefix"))
            }
            _ => {
                log::debug!("SEC1 decode rejected: unexpected length {}", bytes.len());
                Err(Error::encoding("P-256 SEC1", "Invalid encoded point length"))
            }
        }
    }

    /// Encode this point in SEC1 form
    ///
    /// Fails with `InfinityNotAllowed` for the point at infinity.
    pub fn to_sec1(&self, compressed: bool) -> Result<Vec<u8>> {
        if compressed {
            Ok(self.serialize_compressed()?.to_vec())
        } else {
            Ok(self.serialize_uncompressed()?.to_vec())
        }
    }

    /// Encode this point in the given SEC1 format
    pub fn to_sec1_format(&self, format: PointFormat) -> Result<Vec<u8>> {
        self.to_sec1(format == PointFormat::Compressed)
    }

    /// Serialize point in uncompressed format: 0x04 || x || y
    pub fn serialize_uncompressed(&self) -> Result<[u8; P256_POINT_UNCOMPRESSED_SIZE]> {
        let (x, y) = self.affine_for_encoding()?;

        let mut out = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
        out[0] = SEC1_TAG_UNCOMPRESSED;
        out[1..1 + P256_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_bytes());
        out[1 + P256_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_bytes());
        Ok(out)
    }

    /// Serialize point in compressed format: 0x02/0x03 || x
    pub fn serialize_compressed(&self) -> Result<[u8; P256_POINT_COMPRESSED_SIZE]> {
        let (x, y) = self.affine_for_encoding()?;

        let mut out = [0u8; P256_POINT_COMPRESSED_SIZE];
        out[0] = if y.is_odd() {
            SEC1_TAG_COMPRESSED_ODD
        } else {
            SEC1_TAG_COMPRESSED_EVEN
        };
        out[1..].copy_from_slice(&x.to_bytes());
        Ok(out)
    }

    /// Decode a SEC1 point, dispatching on length and prefix
    ///
    /// The result is always an affine point on the curve.
    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        match Self::detect_format(bytes)? {
            PointFormat::Uncompressed => Self::deserialize_uncompressed(bytes),
            PointFormat::Compressed => Self::deserialize_compressed(bytes),
        }
    }

    /// Deserialize an uncompressed point: 0x04 || x || y
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "P-256 Uncompressed Point",
            bytes.len(),
            P256_POINT_UNCOMPRESSED_SIZE,
        )?;
        if bytes[0] != SEC1_TAG_UNCOMPRESSED {
            log::debug!("SEC1 decode rejected: uncompressed prefix {:#04x}", bytes[0]);
            return Err(Error::encoding("P-256 SEC1", "Invalid uncompressed point prefix"));
        }

        let x = Self::coordinate(&bytes[1..1 + P256_FIELD_ELEMENT_SIZE])?;
        let y = Self::coordinate(&bytes[1 + P256_FIELD_ELEMENT_SIZE..])?;

        Point::new(x, y).map_err(|_| {
            log::debug!("SEC1 decode rejected: point not on curve");
            Error::encoding("P-256 SEC1", "Point not on curve")
        })
    }

    /// Deserialize a compressed point: 0x02/0x03 || x
    ///
    /// Recovers y from the curve equation with a modular square root and
    /// picks the root whose parity matches the prefix.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "P-256 Compressed Point",
            bytes.len(),
            P256_POINT_COMPRESSED_SIZE,
        )?;
        let tag = bytes[0];
        if tag != SEC1_TAG_COMPRESSED_EVEN && tag != SEC1_TAG_COMPRESSED_ODD {
            log::debug!("SEC1 decode rejected: compressed prefix {:#04x}", tag);
            return Err(Error::encoding("P-256 SEC1", "Invalid compressed point prefix"));
        }

        let x = Self::coordinate(&bytes[1..])?;
        let rhs = Point::curve_rhs(&x);
        let y = rhs.sqrt().ok_or_else(|| {
            log::debug!("SEC1 decode rejected: x-coordinate has no square root");
            Error::encoding("P-256 SEC1", "Invalid compressed point: no square root")
        })?;

        let want_odd = tag == SEC1_TAG_COMPRESSED_ODD;
        let y = if y.is_odd() == want_odd { y } else { y.negate() };

        // A zero y has no odd twin; the prefix must then be 0x02
        if y.is_odd() != want_odd {
            log::debug!("SEC1 decode rejected: parity mismatch for y = 0");
            return Err(Error::encoding("P-256 SEC1", "Invalid compressed point parity"));
        }

        Point::new(x, y).map_err(|_| Error::encoding("P-256 SEC1", "Point not on curve"))
    }

    fn affine_for_encoding(&self) -> Result<(FieldElement, FieldElement)> {
        match self {
            Point::Identity => Err(Error::InfinityNotAllowed {
                context: "P-256 SEC1 encode",
            }),
            Point::Affine { x, y } => Ok((*x, *y)),
        }
    }

    fn coordinate(bytes: &[u8]) -> Result<FieldElement> {
        let mut buf = [0u8; P256_FIELD_ELEMENT_SIZE];
        buf.copy_from_slice(bytes);
        FieldElement::from_bytes(&buf).map_err(|_| {
            log::debug!("SEC1 decode rejected: coordinate not below the field modulus");
            Error::encoding("P-256 SEC1", "Coordinate out of range")
        })
    }
}
