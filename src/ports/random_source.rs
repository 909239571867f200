//! Randomness port for draws that must be non-deterministic in production.
//!
//! The anchor draw and the frame-variant assignment go through this port so
//! tests can script them; the evidence shuffle does NOT - it is seeded and
//! reproducible by design, so it stays a plain function.

/// Source of uniform random draws.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`, both ends inclusive.
    ///
    /// Callers guarantee `low <= high`.
    fn next_in_range(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `[0, len)`.
    ///
    /// Callers guarantee `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}
