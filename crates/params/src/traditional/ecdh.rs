//! Constants for Elliptic Curve Diffie-Hellman over NIST P-256

/// Parameters of a short-Weierstrass curve `y² = x³ + a·x + b (mod p)`
///
/// All values are big-endian byte strings of the curve's field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Curve name as published by NIST
    pub name: &'static str,
    /// Prime modulus of the base field
    pub p: [u8; 32],
    /// Coefficient a
    pub a: [u8; 32],
    /// Coefficient b
    pub b: [u8; 32],
    /// x-coordinate of the base point G
    pub g_x: [u8; 32],
    /// y-coordinate of the base point G
    pub g_y: [u8; 32],
    /// Order of the subgroup generated by G
    pub n: [u8; 32],
    /// Cofactor
    pub h: u32,
}

/// NIST P-256 (secp256r1)
///
/// p = 2^256 - 2^224 + 2^192 + 2^96 - 1, a = -3 mod p, h = 1.
pub const NIST_P256: CurveParams = CurveParams {
    name: "P-256",
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF,
    ],
    a: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFC,
    ],
    b: [
        0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7, 0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86,
        0xBC, 0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6, 0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2,
        0x60, 0x4B,
    ],
    g_x: [
        0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47, 0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40,
        0xF2, 0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0, 0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98,
        0xC2, 0x96,
    ],
    g_y: [
        0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B, 0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E,
        0x16, 0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE, 0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF,
        0x51, 0xF5,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x51,
    ],
    h: 1,
};

/// Size of a P-256 field element in bytes
pub const ECDH_P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a P-256 private key (scalar) in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of the raw ECDH P-256 shared secret (x-coordinate) in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Size of an uncompressed SEC1 P-256 public key: 0x04 || x || y
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 1 + 2 * ECDH_P256_FIELD_ELEMENT_SIZE;

/// Size of a compressed SEC1 P-256 public key: 0x02/0x03 || x
pub const ECDH_P256_COMPRESSED_PUBLIC_KEY_SIZE: usize = 1 + ECDH_P256_FIELD_ELEMENT_SIZE;
