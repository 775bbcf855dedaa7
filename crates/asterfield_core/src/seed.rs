//! Deterministic seeding.
//!
//! Every randomized decision in the field (child directions, orientations,
//! per-orbiter speeds) flows from one `FieldSeed`. Same seed = same field,
//! ALWAYS - this is what makes the transform sequence reproducible
//! bit-for-bit across runs and platforms.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 64-bit seed for the whole field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldSeed(u64);

impl FieldSeed {
    /// Creates a new field seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (e.g., one per level).
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        // FNV-1a hash mixing
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Builds a deterministic generator for this seed.
    ///
    /// ChaCha8 rather than `StdRng`: `StdRng` may change algorithms between
    /// rand releases, ChaCha output is stable everywhere.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}
