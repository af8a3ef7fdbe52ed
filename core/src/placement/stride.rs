//! Stride contracts partitioning the placement table among decorations
//!
//! Each decoration category owns a fixed arithmetic walk over the table.
//! A walk visits `start, start + step, ...` while below its [`Limit`] and
//! reads up to `lookahead` entries past each visited index. The constants
//! below are the observable layout of the landscape and must not drift.

/// Exclusive upper bound of a walk, relative to the table length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// `len - margin`, saturating at zero
    Margin(usize),
    /// `len / 10`
    Tenth,
}

impl Limit {
    pub fn end(self, len: usize) -> usize {
        match self {
            Limit::Margin(margin) => len.saturating_sub(margin),
            Limit::Tenth => len / 10,
        }
    }
}

/// Arithmetic walk over the placement table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride {
    pub start: usize,
    pub step: usize,
    pub limit: Limit,
    /// Largest `k` such that `index + k` is read
    pub lookahead: usize,
}

impl Stride {
    /// Trees on the positive-x side
    pub const TREES_EAST: Stride = Stride::new(0, 2, Limit::Margin(2), 1);
    /// Trees on the negative-x side
    pub const TREES_WEST: Stride = Stride::new(1, 2, Limit::Margin(2), 1);
    pub const MOUNTAINS_EAST: Stride = Stride::new(0, 50, Limit::Margin(100), 1);
    pub const MOUNTAINS_WEST: Stride = Stride::new(1, 50, Limit::Margin(100), 1);
    pub const CACTI: Stride = Stride::new(2, 4, Limit::Margin(2), 1);
    pub const CLOUD_CENTERS: Stride = Stride::new(0, 3, Limit::Tenth, 2);

    /// Every stride with a fixed start, for bounds checks
    pub const CATALOG: [(&'static str, Stride); 6] = [
        ("trees_east", Stride::TREES_EAST),
        ("trees_west", Stride::TREES_WEST),
        ("mountains_east", Stride::MOUNTAINS_EAST),
        ("mountains_west", Stride::MOUNTAINS_WEST),
        ("cacti", Stride::CACTI),
        ("cloud_centers", Stride::CLOUD_CENTERS),
    ];

    pub const fn new(start: usize, step: usize, limit: Limit, lookahead: usize) -> Self {
        Self {
            start,
            step,
            limit,
            lookahead,
        }
    }

    /// Puffs of the cloud whose centre was visited at index `center`
    pub const fn cloud_puffs(center: usize) -> Stride {
        Stride::new(center, 3, Limit::Tenth, 2)
    }

    pub fn indices(self, len: usize) -> impl Iterator<Item = usize> {
        (self.start..self.limit.end(len)).step_by(self.step.max(1))
    }

    /// Highest table index this walk reads, or `None` if it visits nothing
    pub fn max_read(self, len: usize) -> Option<usize> {
        self.indices(len).last().map(|i| i + self.lookahead)
    }

    /// Whether every read stays inside a table of `len` entries
    pub fn in_bounds(self, len: usize) -> bool {
        self.max_read(len).is_none_or(|max| max < len)
    }
}
