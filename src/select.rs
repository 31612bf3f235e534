// Oblique Gate - Selector
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// Uniform pick from a table. Randomness comes through IndexSource so
// tests can pin the draw.

use crate::error::{ObliqueError, Result};
use rand::Rng;

/// Fallback when the card table is empty
pub const NO_CARD: &str = "No card available.";
/// Fallback when the thinking table is empty
pub const NO_THINKING: &str = "Thinking...";

/// Produces an index in `0..len`. Never called with `len == 0`.
pub trait IndexSource: Send + Sync {
    fn index(&self, len: usize) -> usize;
}

/// Thread-local RNG from rand. Not cryptographic, not seeded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always returns the same index
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn index(&self, _len: usize) -> usize {
        self.0
    }
}

/// Pick one entry, or `fallback` when the table is empty.
pub fn choose<'a>(items: &[&'a str], fallback: &'a str, source: &dyn IndexSource) -> Result<&'a str> {
    if items.is_empty() {
        return Ok(fallback);
    }
    let index = source.index(items.len());
    items
        .get(index)
        .copied()
        .ok_or(ObliqueError::IndexOutOfRange { index, len: items.len() })
}
