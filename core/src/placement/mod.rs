//! Random placement table
//!
//! Two parallel integer sequences generated once at scene construction and
//! read by index for the rest of the session. Decoration rules never draw
//! fresh random numbers: they walk the table with the fixed [`Stride`]s in
//! [`stride`], so the same seed always yields the same landscape.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use railscape_shared::constants::{OFFSET_MAX, OFFSET_MIN, SCALE_MAX, SCALE_MIN};

use crate::error::SceneError;

pub mod stride;


pub use stride::{Limit, Stride};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in the inclusive range `[min, max]`
    fn next_int(&mut self, min: i32, max: i32) -> i32;
}

/// Deterministic PCG32 generator seeded from a `u64`
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Read-only placement noise shared by every decoration rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementTable {
    offsets: Vec<i32>,
    scales: Vec<i32>,
}

impl PlacementTable {
    /// Fill a table of `count` entries from `rng`.
    ///
    /// All offsets are drawn before any scale, so a table's offsets do not
    /// depend on its length.
    pub fn generate(rng: &mut impl RandomSource, count: usize) -> Result<Self, SceneError> {
        if count == 0 {
            return Err(SceneError::InvalidPlacementCount(count));
        }

        let offsets: Vec<i32> = (0..count)
            .map(|_| rng.next_int(OFFSET_MIN, OFFSET_MAX))
            .collect();
        let scales: Vec<i32> = (0..count)
            .map(|_| rng.next_int(SCALE_MIN, SCALE_MAX))
            .collect();

        tracing::debug!(count, "generated placement table");
        Ok(Self { offsets, scales })
    }

    /// Generate with a [`SeededRandom`]
    pub fn from_seed(seed: u64, count: usize) -> Result<Self, SceneError> {
        Self::generate(&mut SeededRandom::new(seed), count)
    }

    /// Build from explicit sequences (used by tests and replays)
    pub fn from_parts(offsets: Vec<i32>, scales: Vec<i32>) -> Result<Self, SceneError> {
        if offsets.is_empty() || offsets.len() != scales.len() {
            return Err(SceneError::InvalidPlacementCount(offsets.len().min(scales.len())));
        }
        Ok(Self { offsets, scales })
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset at `index` as a float, ready for transform arithmetic
    #[inline]
    pub fn offset(&self, index: usize) -> f32 {
        self.offsets[index] as f32
    }

    /// Scale at `index` as a float
    #[inline]
    pub fn scale(&self, index: usize) -> f32 {
        self.scales[index] as f32
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    pub fn scales(&self) -> &[i32] {
        &self.scales
    }

    /// Indices a stride visits over this table
    pub fn walk(&self, stride: Stride) -> impl Iterator<Item = usize> + use<> {
        stride.indices(self.len())
    }
}
