// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Arbitrary-precision positions.
//!
//! Lengths, capacities and offsets are [`BigUint`]s so a list is never
//! limited by the machine word. Offsets inside a single leaf are bounded by
//! `LeafSize` and are narrowed to `usize` with [`small`].

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Position, length and capacity type used throughout the crate.
pub type Index = BigUint;

/// Narrow an index that is known to fit a leaf.
///
/// Panics if it does not, since that means the tree is corrupted.
#[inline]
pub(crate) fn small(value: &Index) -> usize {
    match value.to_usize() {
        Some(v) => return v,
        None => panic!("leaf-local offset {value} does not fit in usize"),
    }
}

/// `ceil(a / b)`.
#[inline]
pub(crate) fn div_ceil(a: &Index, b: &Index) -> Index {
    return (a + b - 1u32) / b;
}

/// Smaller of two indices, by reference.
#[inline]
pub(crate) fn min<'a>(a: &'a Index, b: &'a Index) -> &'a Index {
    if a <= b {
        return a;
    }
    return b;
}
