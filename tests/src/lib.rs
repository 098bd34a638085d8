//! Shared fixtures for the ecdhe integration and property tests

pub mod vectors;

use ecdhe_algorithms::ec::p256::Point;

/// Decode a hex string into a fixed 32-byte array
pub fn hex32(s: &str) -> [u8; 32] {
    let bytes = hex::decode(s).expect("valid hex");
    bytes.try_into().expect("32 bytes")
}

/// Build an affine point from hex coordinates, panicking if it is off-curve
pub fn point_from_hex(x: &str, y: &str) -> Point {
    Point::from_coordinates(&hex32(x), &hex32(y)).expect("point on curve")
}
