// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Tree shape configuration.
//!
//! A list is a tree of leaves holding up to `LeafSize` elements and branches
//! holding up to `Subbranches` children. Both are powers of two so the
//! per-level fragment sizes are exact shifts.

use crate::error::{BigListError, Result};
use crate::index::Index;

const DEFAULT_LEAF_BITS: u32 = 16;
const DEFAULT_SUBBRANCH_BITS: u32 = 16;
const MAX_BITS: u32 = 24;
const DEFAULT_CAPACITY: usize = 32;

/// Shape parameters for a [`BigList`](crate::BigList).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BigListConfig {
    leaf_bits: u32,
    subbranch_bits: u32,
}

impl Default for BigListConfig {
    fn default() -> Self {
        return BigListConfig {
            leaf_bits: DEFAULT_LEAF_BITS,
            subbranch_bits: DEFAULT_SUBBRANCH_BITS,
        };
    }
}

impl BigListConfig {
    /// Build a configuration with `LeafSize = 1 << leaf_bits` and
    /// `Subbranches = 1 << subbranch_bits`.
    pub fn new(leaf_bits: u32, subbranch_bits: u32) -> Result<BigListConfig> {
        return BigListConfig::default()
            .with_leaf_bits(leaf_bits)?
            .with_subbranch_bits(subbranch_bits);
    }

    pub fn with_leaf_bits(mut self, bits: u32) -> Result<BigListConfig> {
        if bits == 0 || bits > MAX_BITS {
            return Err(BigListError::InvalidConfig("leaf bits must be in 1..=24"));
        }
        self.leaf_bits = bits;
        return Ok(self);
    }

    pub fn with_subbranch_bits(mut self, bits: u32) -> Result<BigListConfig> {
        if bits == 0 || bits > MAX_BITS {
            return Err(BigListError::InvalidConfig("subbranch bits must be in 1..=24"));
        }
        self.subbranch_bits = bits;
        return Ok(self);
    }

    #[inline(always)]
    pub fn leaf_bits(&self) -> u32 {
        return self.leaf_bits;
    }

    #[inline(always)]
    pub fn subbranch_bits(&self) -> u32 {
        return self.subbranch_bits;
    }

    /// Maximum number of elements a leaf holds.
    #[inline(always)]
    pub fn leaf_size(&self) -> usize {
        return 1usize << self.leaf_bits;
    }

    /// Maximum number of children a branch holds.
    #[inline(always)]
    pub fn subbranches(&self) -> usize {
        return 1usize << self.subbranch_bits;
    }

    /// Capacity given to an empty list on its first growth.
    #[inline]
    pub fn default_capacity(&self) -> usize {
        return DEFAULT_CAPACITY.min(self.leaf_size());
    }

    #[inline]
    pub(crate) fn leaf_size_index(&self) -> Index {
        return Index::from(self.leaf_size());
    }

    /// Per-child capacity of a branch holding `capacity` elements: the
    /// smallest `LeafSize * Subbranches^k` whose `Subbranches` multiple
    /// covers it. `None` when `capacity` fits in a single leaf.
    pub(crate) fn fragment_for(&self, capacity: &Index) -> Option<Index> {
        let mut fragment = self.leaf_size_index();
        if *capacity <= fragment {
            return None;
        }
        while (&fragment << self.subbranch_bits) < *capacity {
            fragment <<= self.subbranch_bits;
        }
        return Some(fragment);
    }
}
