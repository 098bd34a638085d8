//! Constants for hash-based primitives

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of HMAC-SHA-256 in bytes
pub const HMAC_SHA256_OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;

/// Largest HKDF-SHA256 output: the block counter is a single octet
pub const HKDF_SHA256_MAX_OUTPUT_SIZE: usize = 255 * HMAC_SHA256_OUTPUT_SIZE;
