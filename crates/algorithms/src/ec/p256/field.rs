//! P-256 field arithmetic implementation

use crate::ec::p256::constants::P256_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use ecdhe_params::traditional::ecdh::NIST_P256;
use subtle::{Choice, ConditionallySelectable};

/// Number of 32-bit limbs for a P-256 field element (8 × 32 = 256 bits)
const NLIMBS: usize = 8;

/// p − 2, the Fermat inversion exponent (big-endian)
const P_MINUS_2: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFD,
];

/// (p − 1) / 2, Euler's criterion exponent (big-endian)
const P_MINUS_1_OVER_2: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0x80, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// (p + 1) / 4, the square-root exponent for p ≡ 3 (mod 4) (big-endian)
const P_PLUS_1_OVER_4: [u8; 32] = [
    0x3F, 0xFF, 0xFF, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Big-endian bytes → little-endian 32-bit limbs, usable in const context
pub(crate) const fn limbs_from_be(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> [u32; NLIMBS] {
    let mut limbs = [0u32; NLIMBS];
    let mut i = 0;
    while i < NLIMBS {
        let off = (NLIMBS - 1 - i) * 4;
        limbs[i] = ((bytes[off] as u32) << 24)
            | ((bytes[off + 1] as u32) << 16)
            | ((bytes[off + 2] as u32) << 8)
            | (bytes[off + 3] as u32);
        i += 1;
    }
    limbs
}

/// Value of the Legendre symbol (a / p)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legendre {
    /// a ≡ 0 (mod p)
    Zero,
    /// a is a non-zero square modulo p
    Residue,
    /// a has no square root modulo p
    NonResidue,
}

/// P-256 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1.
/// Internally stored as 8 little-endian 32-bit limbs, always reduced into [0, p).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /* ---------------------------------------------------------------- */
    /*  Curve constants, derived from the shared parameter set          */
    /* ---------------------------------------------------------------- */

    /// The field modulus p
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = limbs_from_be(&NIST_P256.p);

    /// Curve coefficient a = −3 mod p
    pub(crate) const A_LIMBS: [u32; NLIMBS] = limbs_from_be(&NIST_P256.a);

    /// Curve coefficient b
    pub(crate) const B_LIMBS: [u32; NLIMBS] = limbs_from_be(&NIST_P256.b);

    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Curve coefficient a
    #[inline]
    pub fn curve_a() -> Self {
        FieldElement(Self::A_LIMBS)
    }

    /// Curve coefficient b
    #[inline]
    pub fn curve_b() -> Self {
        FieldElement(Self::B_LIMBS)
    }

    /// Create a field element from big-endian bytes.
    ///
    /// Values ≥ p are rejected rather than reduced, so every element has a
    /// single byte encoding.
    pub fn from_bytes(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = limbs_from_be(bytes);
        let (_, borrow) = Self::sbb8(limbs, Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("P-256 FieldElement", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Convert this field element into big-endian bytes.
    pub fn to_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; P256_FIELD_ELEMENT_SIZE];
        for (i, &limb) in self.0.iter().enumerate() {
            let offset = (NLIMBS - 1 - i) * 4;
            out[offset..offset + 4].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Return true if the element is odd (least-significant bit = 1).
    pub fn is_odd(&self) -> bool {
        (self.0[0] & 1) == 1
    }

    /// Constant-time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = Self::adc8(self.0, other.0);

        // If carry = 1 or sum ≥ p, subtract p
        let (reduced, borrow) = Self::sbb8(sum, Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;

        Self::conditional_select(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// Constant-time subtraction: (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = Self::sbb8(self.0, other.0);
        // If borrow == 1 the difference wrapped; add p back
        let (diff_plus_p, _) = Self::adc8(diff, Self::MOD_LIMBS);
        Self::conditional_select(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// Field multiplication: (self · other) mod p
    /// Schoolbook 8×8 → 16-limb product, then Solinas reduction
    pub fn mul(&self, other: &Self) -> Self {
        // Phase 1: 8×8 → 16 128-bit partial accumulators
        let mut t = [0u128; NLIMBS * 2];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                t[i + j] += (self.0[i] as u128) * (other.0[j] as u128);
            }
        }

        // Phase 2: carry-propagate into 16 × u32 limbs
        let mut wide = [0u32; NLIMBS * 2];
        let mut carry: u128 = 0;
        for (w, &v) in wide.iter_mut().zip(t.iter()) {
            let v = v + carry;
            *w = (v & 0xFFFF_FFFF) as u32;
            carry = v >> 32;
        }

        // Phase 3: reduce 16 limbs → 8 limbs mod p
        Self::reduce_wide(wide)
    }

    /// Field squaring: self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Negate this field element: p − self if non-zero, else zero
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Left-to-right square-and-multiply with a big-endian exponent
    pub fn pow(&self, exp_be: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Self {
        let mut result = FieldElement::one();
        for &byte in exp_be.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Compute multiplicative inverse via Fermat: a^(p−2) mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("P-256 FieldElement", "Inverse of zero"));
        }
        Ok(self.invert_nonzero())
    }

    /// Inversion for callers that have already excluded zero.
    ///
    /// Zero maps to zero, since 0^(p−2) = 0.
    #[inline]
    pub(crate) fn invert_nonzero(&self) -> Self {
        debug_assert!(!self.is_zero());
        self.pow(&P_MINUS_2)
    }

    /// Legendre symbol via Euler's criterion: a^((p−1)/2) mod p
    pub fn legendre(&self) -> Legendre {
        if self.is_zero() {
            return Legendre::Zero;
        }
        if self.pow(&P_MINUS_1_OVER_2) == FieldElement::one() {
            Legendre::Residue
        } else {
            Legendre::NonResidue
        }
    }

    /// Compute a square root using the fact that p ≡ 3 (mod 4):
    /// sqrt(a) = a^((p+1)/4) whenever a is a quadratic residue.
    ///
    /// Returns `Some(0)` for zero and `None` for non-residues.
    pub fn sqrt(&self) -> Option<Self> {
        match self.legendre() {
            Legendre::Zero => Some(FieldElement::zero()),
            Legendre::NonResidue => None,
            Legendre::Residue => Some(self.pow(&P_PLUS_1_OVER_4)),
        }
    }

    /* ================================================================= */
    /*  Private helper methods                                           */
    /* ================================================================= */

    /// 8-limb addition with carry
    #[inline(always)]
    fn adc8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (a_limb as u64) + (b_limb as u64) + carry;
            *r_limb = (tmp & 0xFFFF_FFFF) as u32;
            carry = tmp >> 32;
        }
        (r, carry as u32)
    }

    /// 8-limb subtraction with borrow
    #[inline(always)]
    fn sbb8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut borrow = 0u32;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let ai = a_limb as u64;
            let bi = b_limb as u64 + borrow as u64;
            *r_limb = ai.wrapping_sub(bi) as u32;
            // New borrow = 1 iff ai < bi + old_borrow
            borrow = (ai < bi) as u32;
        }
        (r, borrow)
    }

    /// Constant-time select: if flag == 0 return a else return b
    fn conditional_select(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> Self {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        FieldElement(out)
    }

    /// Reduce a 16-word (512-bit) value modulo
    /// `p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1`.
    ///
    /// Algorithm: FIPS 186-4 D.2.3 fast reduction
    /// `s1 + 2s2 + 2s3 + s4 + s5 − s6 − s7 − s8 − s9`, evaluated limb-wise in
    /// signed 64-bit accumulators, followed by carry folding and one
    /// conditional subtraction of p.
    fn reduce_wide(t: [u32; NLIMBS * 2]) -> FieldElement {
        let c: [i64; NLIMBS * 2] = core::array::from_fn(|i| t[i] as i64);

        //------------------------------------------------------------------
        // step 1  –  the nine Solinas terms, summed per output limb
        //------------------------------------------------------------------
        let mut r: [i64; NLIMBS] = [
            c[0] + c[8] + c[9] - c[11] - c[12] - c[13] - c[14],
            c[1] + c[9] + c[10] - c[12] - c[13] - c[14] - c[15],
            c[2] + c[10] + c[11] - c[13] - c[14] - c[15],
            c[3] + 2 * c[11] + 2 * c[12] + c[13] - c[15] - c[8] - c[9],
            c[4] + 2 * c[12] + 2 * c[13] + c[14] - c[9] - c[10],
            c[5] + 2 * c[13] + 2 * c[14] + c[15] - c[10] - c[11],
            c[6] + 3 * c[14] + 2 * c[15] + c[13] - c[8] - c[9],
            c[7] + 3 * c[15] + c[8] - c[10] - c[11] - c[12] - c[13],
        ];

        //------------------------------------------------------------------
        // step 2  –  propagate signed carries; fold the carry out of the top
        //            limb with 2²⁵⁶ ≡ 2²²⁴ − 2¹⁹² − 2⁹⁶ + 1 (mod p)
        //------------------------------------------------------------------
        loop {
            let mut carry = 0i64;
            for limb in r.iter_mut() {
                let tmp = *limb + carry;
                *limb = tmp & 0xFFFF_FFFF;
                carry = tmp >> 32; // arithmetic shift: floor division
            }
            if carry == 0 {
                break;
            }
            r[0] += carry;
            r[3] -= carry;
            r[6] -= carry;
            r[7] += carry;
        }

        //------------------------------------------------------------------
        // step 3  –  value < 2²⁵⁶ < 2p, so one conditional subtraction
        //------------------------------------------------------------------
        let out: [u32; NLIMBS] = core::array::from_fn(|i| r[i] as u32);
        let (sub, borrow) = Self::sbb8(out, Self::MOD_LIMBS);
        Self::conditional_select(&out, &sub, Choice::from((borrow ^ 1) as u8))
    }
}
