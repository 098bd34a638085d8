//! P-256 scalar arithmetic operations

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use core::fmt;
use ecdhe_params::traditional::ecdh::NIST_P256;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// P-256 scalar value for use in elliptic curve operations
///
/// Represents integers modulo the curve order n, stored big-endian and always
/// reduced into [0, n). Private keys are scalars in [1, n−1]; ladder
/// exponents may be zero. Automatically zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u8; P256_SCALAR_SIZE]);

impl Scalar {
    /// Create a private-key scalar from raw bytes with modular reduction
    ///
    /// Reduces the input modulo the curve order n and rejects a zero result,
    /// so the scalar always lies in [1, n−1].
    pub fn new(data: [u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let scalar = Self::from_bytes_reduced(data);
        if scalar.is_zero() {
            return Err(Error::param("P-256 Scalar", "Scalar cannot be zero"));
        }
        Ok(scalar)
    }

    /// Create a scalar from raw bytes, reducing modulo n and allowing zero
    ///
    /// This is the exponent form used by scalar multiplication, where
    /// `k ≡ 0 (mod n)` is a valid input that yields the identity.
    pub fn from_bytes_reduced(mut data: [u8; P256_SCALAR_SIZE]) -> Self {
        // 2²⁵⁶ < 2n, so a single conditional subtraction reduces fully
        if !Self::is_below_order(&data) {
            let mut limbs = Self::to_le_limbs(&data);
            Self::sub_in_place(&mut limbs, &Self::N_LIMBS);
            let reduced = Self::limbs_to_be(&limbs);
            data.zeroize();
            return Scalar(reduced);
        }
        Scalar(data)
    }

    /// Create a scalar from a small integer
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; P256_SCALAR_SIZE];
        bytes[P256_SCALAR_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
        Scalar(bytes)
    }

    /// Draw a scalar uniformly from [1, n−1]
    ///
    /// Uses rejection sampling: candidates ≥ n or equal to zero are
    /// discarded, so no modular bias is introduced.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; P256_SCALAR_SIZE];
        loop {
            rng.fill_bytes(&mut bytes);
            if Self::is_below_order(&bytes) && bytes.iter().any(|&b| b != 0) {
                let scalar = Scalar(bytes);
                bytes.zeroize();
                return scalar;
            }
        }
    }

    /// Serialize the scalar to a big-endian byte array
    pub fn serialize(&self) -> [u8; P256_SCALAR_SIZE] {
        self.0
    }

    /// Deserialize a private-key scalar from bytes with validation
    ///
    /// Parses bytes as a big-endian value; the value must be in [1, n−1]
    /// after reduction.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Scalar", bytes.len(), P256_SCALAR_SIZE)?;

        let mut scalar_bytes = [0u8; P256_SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);

        Self::new(scalar_bytes)
    }

    /// Check if the scalar represents zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().fold(0u8, |acc, &b| acc | b) == 0
    }

    /// Number of significant bits (0 for the zero scalar)
    pub fn bit_length(&self) -> usize {
        for (i, &byte) in self.0.iter().enumerate() {
            if byte != 0 {
                let remaining_bytes = P256_SCALAR_SIZE - 1 - i;
                return remaining_bytes * 8 + (8 - byte.leading_zeros() as usize);
            }
        }
        0
    }

    /// Bit `i` of the scalar, counting from the least significant bit
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < P256_SCALAR_SIZE * 8);
        let byte = self.0[P256_SCALAR_SIZE - 1 - i / 8];
        (byte >> (i % 8)) & 1 == 1
    }

    /// Add two scalars modulo the curve order n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let self_limbs = Self::to_le_limbs(&self.0);
        let other_limbs = Self::to_le_limbs(&other.0);

        let mut r = [0u32; 8];
        let mut carry = 0u64;

        // Plain 256-bit add
        for ((r_limb, &a), &b) in r.iter_mut().zip(self_limbs.iter()).zip(other_limbs.iter()) {
            let tmp = a as u64 + b as u64 + carry;
            *r_limb = tmp as u32;
            carry = tmp >> 32;
        }

        // If we overflowed OR r >= n, subtract n once
        if carry == 1 || Self::geq(&r, &Self::N_LIMBS) {
            Self::sub_in_place(&mut r, &Self::N_LIMBS);
        }

        Scalar(Self::limbs_to_be(&r))
    }

    /// Multiply two scalars modulo the curve order n
    ///
    /// Double-and-add over the bits of `other`, MSB first.
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        let mut acc = Scalar([0u8; P256_SCALAR_SIZE]);

        for byte in other.0 {
            for i in (0..8).rev() {
                // acc = 2·acc (mod n)
                acc = acc.add_mod_n(&acc);

                // acc = acc + self (mod n) when the bit is set
                if (byte >> i) & 1 == 1 {
                    acc = acc.add_mod_n(self);
                }
            }
        }

        acc
    }

    // Private helper methods

    /// Curve order n in little-endian limb order
    const N_LIMBS: [u32; 8] = [
        0xFC63_2551,
        0xF3B9_CAC2,
        0xA717_9E84,
        0xBCE6_FAAD,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0xFFFF_FFFF,
    ];

    /// Big-endian comparison `bytes < n`
    fn is_below_order(bytes: &[u8; P256_SCALAR_SIZE]) -> bool {
        for (&x, &y) in bytes.iter().zip(NIST_P256.n.iter()) {
            if x != y {
                return x < y;
            }
        }
        false // equal to n
    }

    /// Convert big-endian bytes to little-endian limbs
    #[inline(always)]
    fn to_le_limbs(bytes_be: &[u8; 32]) -> [u32; 8] {
        let mut limbs = [0u32; 8];
        // limb-0 holds the 4 least-significant bytes, limb-7 the 4 most-significant
        for (i, limb) in limbs.iter_mut().enumerate() {
            let start = 28 - i * 4;
            *limb = u32::from_be_bytes([
                bytes_be[start],
                bytes_be[start + 1],
                bytes_be[start + 2],
                bytes_be[start + 3],
            ]);
        }
        limbs
    }

    /// Convert little-endian limbs to big-endian bytes
    #[inline(always)]
    fn limbs_to_be(limbs: &[u32; 8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, &w) in limbs.iter().enumerate() {
            let start = 28 - i * 4;
            out[start..start + 4].copy_from_slice(&w.to_be_bytes());
        }
        out
    }

    /// Compare two limb arrays for greater-than-or-equal
    #[inline(always)]
    fn geq(a: &[u32; 8], b: &[u32; 8]) -> bool {
        for i in (0..8).rev() {
            if a[i] > b[i] {
                return true;
            }
            if a[i] < b[i] {
                return false;
            }
        }
        true // equal
    }

    /// Subtract b from a in-place (mod 2²⁵⁶)
    #[inline(always)]
    fn sub_in_place(a: &mut [u32; 8], b: &[u32; 8]) {
        let mut borrow = 0u64;
        for (a_limb, &b_limb) in a.iter_mut().zip(b.iter()) {
            let tmp = (*a_limb as u64)
                .wrapping_sub(b_limb as u64)
                .wrapping_sub(borrow);
            *a_limb = tmp as u32;
            borrow = (tmp >> 63) & 1; // 1 if we wrapped
        }
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
