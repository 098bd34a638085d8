//! Shared constants for P-256 operations

use ecdhe_params::traditional::ecdh::{
    ECDH_P256_COMPRESSED_PUBLIC_KEY_SIZE, ECDH_P256_FIELD_ELEMENT_SIZE,
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P256_SHARED_SECRET_SIZE,
};

/// Size of a P-256 scalar in bytes (32 bytes = 256 bits)
pub const P256_SCALAR_SIZE: usize = ECDH_P256_PRIVATE_KEY_SIZE;

/// Size of a P-256 field element in bytes (32 bytes = 256 bits)
pub const P256_FIELD_ELEMENT_SIZE: usize = ECDH_P256_FIELD_ELEMENT_SIZE;

/// Size of an uncompressed P-256 point in bytes: 0x04 || x || y
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = ECDH_P256_PUBLIC_KEY_SIZE; // 65 bytes

/// Size of a compressed P-256 point in bytes: 0x02/0x03 || x
pub const P256_POINT_COMPRESSED_SIZE: usize = ECDH_P256_COMPRESSED_PUBLIC_KEY_SIZE; // 33 bytes

/// Size of the raw ECDH shared secret (big-endian x-coordinate)
pub const P256_SHARED_SECRET_SIZE: usize = ECDH_P256_SHARED_SECRET_SIZE;

/// SEC1 prefix of an uncompressed point
pub const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 prefix of a compressed point with even y
pub const SEC1_TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 prefix of a compressed point with odd y
pub const SEC1_TAG_COMPRESSED_ODD: u8 = 0x03;
