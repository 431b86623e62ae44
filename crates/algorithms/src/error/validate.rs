//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
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
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
///
/// On failure the reported expectation is the next block boundary.
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    parameter(block_size > 0, "block size", "must be non-zero")?;
    if actual % block_size != 0 {
        return Err(Error::Length {
            context,
            expected: (actual / block_size + 1) * block_size,
            actual,
        });
    }
    Ok(())
}
