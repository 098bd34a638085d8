//! HMAC-based Key Derivation Function (HKDF)
//!
//! This module implements HKDF as defined in RFC 5869, instantiated with
//! HMAC-SHA-256. HKDF takes input keying material (IKM) that is not
//! necessarily uniform, such as an ECDH shared secret, and produces output
//! keying material (OKM) suitable for use as symmetric keys.
//!
//! The HMAC primitive is a type parameter implementing
//! [`ecdhe_api::HmacSha256`]; [`HkdfSha256`] binds it to this crate's
//! [`Hmac`](crate::mac::hmac::Hmac).

use crate::error::{validate, Result};
use crate::mac::hmac::Hmac;
use core::marker::PhantomData;
use ecdhe_api::HmacSha256;
use ecdhe_params::utils::hash::{HKDF_SHA256_MAX_OUTPUT_SIZE, HMAC_SHA256_OUTPUT_SIZE};
use zeroize::Zeroizing;

/// HKDF over any HMAC-SHA-256 implementation
///
/// All operations are associated functions; the type carries no state.
pub struct Hkdf<M: HmacSha256> {
    _mac: PhantomData<M>,
}

/// HKDF with this crate's HMAC-SHA-256
pub type HkdfSha256 = Hkdf<Hmac>;

impl<M: HmacSha256> Hkdf<M> {
    /// Output length of the underlying MAC, in bytes
    pub const HASH_LEN: usize = HMAC_SHA256_OUTPUT_SIZE;

    /// Largest output `expand` can produce: 255 blocks
    pub const MAX_OUTPUT_LEN: usize = HKDF_SHA256_MAX_OUTPUT_SIZE;

    /// HKDF-Extract
    ///
    /// `PRK = HMAC(salt, IKM)`. An empty salt is replaced by 32 zero bytes.
    pub fn extract(salt: &[u8], ikm: &[u8]) -> Result<Zeroizing<[u8; HMAC_SHA256_OUTPUT_SIZE]>> {
        let zero_salt = [0u8; HMAC_SHA256_OUTPUT_SIZE];
        let salt = if salt.is_empty() { &zero_salt[..] } else { salt };
        Ok(Zeroizing::new(M::hmac(salt, ikm)?))
    }

    /// HKDF-Expand
    ///
    /// `T(i) = HMAC(PRK, T(i−1) || info || i)` for `i = 1, 2, …`, with `T(0)`
    /// empty; the output is the first `length` bytes of `T(1) || T(2) || …`.
    pub fn expand(prk: &[u8], info: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        if let Err(e) = validate::max_output_length("HKDF-Expand output", length, Self::MAX_OUTPUT_LEN) {
            log::debug!("HKDF-Expand over {} rejected: {}", M::name(), e);
            return Err(e);
        }
        validate::min_length("PRK for HKDF-Expand", prk.len(), Self::HASH_LEN)?;

        let blocks = length.div_ceil(Self::HASH_LEN);
        let mut okm = Zeroizing::new(Vec::with_capacity(blocks * Self::HASH_LEN));
        let mut t = Zeroizing::new([0u8; HMAC_SHA256_OUTPUT_SIZE]);

        for i in 1..=blocks {
            // blocks ≤ 255, so the counter fits one octet
            let counter = [i as u8];
            let previous: &[u8] = if i == 1 { &[] } else { &t[..] };
            let block = M::hmac_parts(prk, &[previous, info, &counter])?;
            *t = block;
            okm.extend_from_slice(&t[..]);
        }

        okm.truncate(length);
        Ok(okm)
    }

    /// Full HKDF (Extract + Expand)
    pub fn derive(salt: &[u8], ikm: &[u8], info: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let prk = Self::extract(salt, ikm)?;
        let okm = Self::expand(&prk[..], info, length)?;
        log::trace!("HKDF derived {} bytes (info {} bytes)", length, info.len());
        Ok(okm)
    }

    /// Derive directly into a fixed-size array
    pub fn derive_array<const N: usize>(salt: &[u8], ikm: &[u8], info: &[u8]) -> Result<Zeroizing<[u8; N]>> {
        let okm = Self::derive(salt, ikm, info, N)?;
        let mut out = Zeroizing::new([0u8; N]);
        out.copy_from_slice(&okm);
        Ok(out)
    }
}
