//! Error type definitions for key agreement, point encoding and key derivation

use thiserror::Error as ThisError;

/// Primary error type for ecdhe operations
///
/// Every variant names the operation that failed in `context`. Validation
/// failures are reported as soon as they are detected and are never retried
/// with different input.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or out-of-range byte input to a decoder
    #[error("Invalid encoding: {context}: {reason}")]
    InvalidEncoding {
        context: &'static str,
        reason: &'static str,
    },

    /// An externally supplied point does not satisfy the curve equation
    #[error("{context}: point is not on the curve")]
    PointNotOnCurve { context: &'static str },

    /// The point at infinity was supplied where an affine point is required
    #[error("{context}: the point at infinity is not allowed")]
    InfinityNotAllowed { context: &'static str },

    /// The shared point collapsed to the point at infinity
    #[error("{context}: shared secret is the point at infinity")]
    DegenerateSharedSecret { context: &'static str },

    /// Requested key-derivation output exceeds the construction's ceiling
    #[error("{context}: requested {requested} bytes, at most {max} can be derived")]
    OutputTooLong {
        context: &'static str,
        max: usize,
        requested: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("Invalid parameter: {context}: {reason}")]
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// The MAC primitive rejected its input
    #[error("MAC error: {context}")]
    Mac { context: &'static str },
}

/// Result type for ecdhe operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidEncoding` error
    pub fn encoding(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidEncoding { context, reason }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidParameter { context, reason }
    }

    /// True for the failures that reject a peer's public key
    ///
    /// A peer key is refused when it is the identity or lies off the curve.
    pub fn is_invalid_peer_key(&self) -> bool {
        matches!(
            self,
            Error::PointNotOnCurve { .. } | Error::InfinityNotAllowed { .. }
        )
    }

    /// The operation that produced this error
    pub fn context(&self) -> &'static str {
        match self {
            Error::InvalidEncoding { context, .. }
            | Error::PointNotOnCurve { context }
            | Error::InfinityNotAllowed { context }
            | Error::DegenerateSharedSecret { context }
            | Error::OutputTooLong { context, .. }
            | Error::InvalidLength { context, .. }
            | Error::InvalidParameter { context, .. }
            | Error::Mac { context } => context,
        }
    }
}
