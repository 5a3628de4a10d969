//! Validation utilities for cipher engines

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}

/// Validate a key length against the lengths an algorithm accepts.
///
/// Routing every unsupported length through this check up front means no
/// "impossible key size" branch exists anywhere in the schedule code.
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, allowed: &[usize]) -> Result<()> {
    if !allowed.contains(&actual) {
        return Err(Error::KeyLength { context, actual });
    }
    Ok(())
}

/// Validate that a buffer holds `needed` bytes at `offset`.
///
/// The offset arithmetic is overflow-safe: an `offset + needed` that would
/// wrap is rejected the same way as a short buffer.
#[inline(always)]
pub fn buffer(context: &'static str, len: usize, offset: usize, needed: usize) -> Result<()> {
    match offset.checked_add(needed) {
        Some(end) if end <= len => Ok(()),
        _ => Err(Error::BufferTooShort {
            context,
            needed,
            actual: len.saturating_sub(offset),
        }),
    }
}
