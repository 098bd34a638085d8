//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum output length
#[inline(always)]
pub fn max_output_length(context: &'static str, requested: usize, max: usize) -> Result<()> {
    if requested > max {
        return Err(Error::OutputTooLong {
            context,
            max,
            requested,
        });
    }
    Ok(())
}

/// Validate that a point satisfies the curve equation
#[inline(always)]
pub fn on_curve(is_on_curve: bool, context: &'static str) -> Result<()> {
    if !is_on_curve {
        return Err(Error::PointNotOnCurve { context });
    }
    Ok(())
}

/// Validate that a point is not the point at infinity
#[inline(always)]
pub fn not_identity(is_identity: bool, context: &'static str) -> Result<()> {
    if is_identity {
        return Err(Error::InfinityNotAllowed { context });
    }
    Ok(())
}
