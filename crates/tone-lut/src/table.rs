//! The dense 256-entry lookup table.

use std::ops::Index;

use crate::sample::SampleSet;

/// Number of entries in a table: one per 8-bit intensity.
pub const TABLE_SIZE: usize = 256;

/// Total mapping from every 8-bit intensity to an 8-bit intensity.
///
/// Tables are immutable once built. Derived tables (such as the
/// [`complement`](LookupTable::complement)) are new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: [u8; TABLE_SIZE],
}

impl LookupTable {
    /// Build a table by interpolating `samples` at every integer 0..=255.
    ///
    /// Each entry is the interpolated value clamped to `[0, 255]` and then
    /// rounded with [`f64::round`] (half away from zero, which is half-up
    /// for the non-negative clamped values).
    pub fn build(samples: &SampleSet) -> Self {
        let mut entries = [0u8; TABLE_SIZE];
        for (q, entry) in entries.iter_mut().enumerate() {
            *entry = quantize(samples.evaluate(q as f64));
        }
        Self { entries }
    }

    /// The table mapping every intensity to itself.
    pub fn identity() -> Self {
        let mut entries = [0u8; TABLE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self { entries }
    }

    /// Wrap precomputed entries.
    pub const fn from_entries(entries: [u8; TABLE_SIZE]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[u8; TABLE_SIZE] {
        &self.entries
    }

    /// Look up one intensity.
    #[inline]
    pub fn get(&self, value: u8) -> u8 {
        self.entries[value as usize]
    }

    /// Negative of this table: `255 - self[i]` for every `i`.
    pub fn complement(&self) -> Self {
        let mut entries = self.entries;
        for entry in &mut entries {
            *entry = 255 - *entry;
        }
        Self { entries }
    }

    /// Replace every byte of `pixels` with its table entry.
    pub fn apply_in_place(&self, pixels: &mut [u8]) {
        for p in pixels {
            *p = self.entries[*p as usize];
        }
    }

    /// True if entries never decrease from one index to the next.
    pub fn is_monotonic(&self) -> bool {
        self.entries.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Index<u8> for LookupTable {
    type Output = u8;

    #[inline]
    fn index(&self, value: u8) -> &u8 {
        &self.entries[value as usize]
    }
}

/// Clamp to `[0, 255]` then round to the nearest byte.
#[inline]
fn quantize(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}
