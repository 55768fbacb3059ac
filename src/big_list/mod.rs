// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! A list whose length and positions are arbitrary-precision integers.
//!
//! Elements live in bounded leaves under a tree of branches. Each branch
//! level multiplies the per-child capacity ("fragment") by `Subbranches`,
//! so the height grows with the logarithm of the capacity. Every node has
//! a reversal flag, which makes reversing any subtree a flag toggle.
//!
//! Structure:
//! - `arena`: node storage and upward propagation of lengths and capacities.
//! - `capacity`: growing and shrinking the tree, pushing reversal down.
//! - `compact`: packing children after removals leave gaps.
//! - `engine`: the range-copy work-list every bulk movement runs through.
//! - `edit`: single and bulk insert, single remove.
//! - `cursor`: the access-path cache behind indexed reads.
//! - `iter`: the borrowing iterator.
//! - `verify`: the structural self-check.

mod arena;
mod capacity;
mod compact;
mod cursor;
mod edit;
mod engine;
mod iter;
mod verify;

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::config::BigListConfig;
use crate::error::{BigListError, Result};
use crate::index::{self, Index};
use crate::leaf::{DequeLeaf, Leaf};

use arena::Arena;
use cursor::AccessCache;
use engine::{Engine, Task};

pub use iter::Iter;

/// A sequence of `T` indexed by [`Index`].
///
/// `L` is the leaf buffer; the default [`DequeLeaf`] suits any `T: Clone`.
pub struct BigList<T, L = DequeLeaf<T>> {
    arena: Arena<T, L>,
    cache: RefCell<AccessCache>,
}

impl<T: Clone, L: Leaf<T>> BigList<T, L> {
    // =========================================================================
    // Construction and shape
    // =========================================================================

    pub fn new() -> BigList<T, L> {
        return BigList::with_config(BigListConfig::default());
    }

    pub fn with_config(config: BigListConfig) -> BigList<T, L> {
        return BigList {
            arena: Arena::new(config),
            cache: RefCell::new(AccessCache::default()),
        };
    }

    pub fn with_capacity(capacity: impl Into<Index>) -> BigList<T, L> {
        return BigList::with_capacity_and_config(capacity, BigListConfig::default());
    }

    pub fn with_capacity_and_config(capacity: impl Into<Index>, config: BigListConfig) -> BigList<T, L> {
        let mut list = BigList::with_config(config);
        let root = list.arena.root;
        list.arena.set_capacity(root, &capacity.into());
        return list;
    }

    /// Collect `items` into a list with the given shape.
    pub fn from_iter_with_config(items: impl IntoIterator<Item = T>, config: BigListConfig) -> BigList<T, L> {
        return BigList {
            arena: Arena::from_items(config, items.into_iter().collect()),
            cache: RefCell::new(AccessCache::default()),
        };
    }

    #[inline(always)]
    pub fn len(&self) -> Index {
        return self.arena.length(self.arena.root).clone();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.arena.length(self.arena.root).is_zero();
    }

    /// Elements the list can hold before its tree has to grow.
    #[inline(always)]
    pub fn capacity(&self) -> Index {
        return self.arena.capacity(self.arena.root).clone();
    }

    #[inline(always)]
    pub fn config(&self) -> BigListConfig {
        return self.arena.config;
    }

    /// Branch levels above the leaves; 0 while everything fits in one leaf.
    pub fn height(&self) -> usize {
        return self.arena.height();
    }

    /// Reshape the tree to hold exactly `capacity` elements.
    pub fn set_capacity(&mut self, capacity: impl Into<Index>) -> Result<()> {
        let capacity = capacity.into();
        let length = self.len();
        if capacity < length {
            return Err(BigListError::CapacityBelowLength { capacity, length });
        }
        let root = self.arena.root;
        self.arena.set_capacity(root, &capacity);
        self.changed();
        return Ok(());
    }

    /// Make room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: impl Into<Index>) {
        let wanted = self.len() + additional.into();
        self.ensure_capacity(wanted);
    }

    /// Grow to at least `min`, doubling the length when that is larger.
    pub fn ensure_capacity(&mut self, min: impl Into<Index>) {
        self.arena.ensure_capacity(&min.into());
        self.changed();
    }

    /// Shrink the capacity to the length when more than a tenth is unused.
    pub fn trim_excess(&mut self) {
        let length = self.len();
        if length < self.capacity() * 9u32 / 10u32 {
            let root = self.arena.root;
            self.arena.set_capacity(root, &length);
            self.changed();
        }
    }

    // =========================================================================
    // Element access
    // =========================================================================

    pub fn get(&self, index: impl Into<Index>) -> Option<&T> {
        let index = index.into();
        if index >= self.len() {
            return None;
        }
        return Some(self.item(&index));
    }

    pub fn get_mut(&mut self, index: impl Into<Index>) -> Option<&mut T> {
        let index = index.into();
        if index >= self.len() {
            return None;
        }
        return Some(self.item_mut(&index));
    }

    pub fn first(&self) -> Option<&T> {
        return self.get(Index::zero());
    }

    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        return Some(self.item(&(self.len() - 1u32)));
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: impl Into<Index>, value: T) -> Result<T> {
        let index = index.into();
        self.check_index(&index)?;
        let (leaf, slot) = self.cache.get_mut().resolve(&self.arena, &index);
        return Ok(self.arena.leaf_mut(leaf).set(slot, value));
    }

    /// Like [`BigList::set`], but `index == len` appends.
    pub fn set_or_push(&mut self, index: impl Into<Index>, value: T) -> Result<()> {
        let index = index.into();
        if index == self.len() {
            self.push(value);
            return Ok(());
        }
        self.set(index, value)?;
        return Ok(());
    }

    /// Element at a position known to be in range.
    pub(crate) fn item(&self, index: &Index) -> &T {
        let (leaf, slot) = self.cache.borrow_mut().resolve(&self.arena, index);
        match self.arena.leaf(leaf).get(slot) {
            Some(item) => return item,
            None => panic!("resolved slot {slot} missing from leaf {leaf:?}"),
        }
    }

    fn item_mut(&mut self, index: &Index) -> &mut T {
        let (leaf, slot) = self.cache.get_mut().resolve(&self.arena, index);
        match self.arena.leaf_mut(leaf).get_mut(slot) {
            Some(item) => return item,
            None => panic!("resolved slot {slot} missing from leaf {leaf:?}"),
        }
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    pub fn push(&mut self, value: T) {
        let end = self.len();
        self.arena.insert_one(&end, value);
        self.changed();
    }

    pub fn insert(&mut self, index: impl Into<Index>, value: T) -> Result<()> {
        let index = index.into();
        self.check_position(&index)?;
        self.arena.insert_one(&index, value);
        self.changed();
        return Ok(());
    }

    /// Splice a copy of `other` in at `index`.
    pub fn insert_list(&mut self, index: impl Into<Index>, other: &BigList<T, L>) -> Result<()> {
        let index = index.into();
        self.check_position(&index)?;
        self.arena.splice(&index, &other.arena, &Index::zero(), &other.len());
        self.changed();
        return Ok(());
    }

    /// Splice the items of `iter` in at `index`, in order.
    pub fn insert_iter(&mut self, index: impl Into<Index>, iter: impl IntoIterator<Item = T>) -> Result<()> {
        let index = index.into();
        self.check_position(&index)?;
        self.splice_items(&index, iter.into_iter().collect());
        return Ok(());
    }

    /// Append a copy of `other`.
    pub fn append_list(&mut self, other: &BigList<T, L>) {
        let end = self.len();
        self.arena.splice(&end, &other.arena, &Index::zero(), &other.len());
        self.changed();
    }

    fn splice_items(&mut self, index: &Index, items: Vec<T>) {
        if items.is_empty() {
            return;
        }
        let count = Index::from(items.len());
        let scratch = Arena::from_items(self.arena.config, items);
        self.arena.splice(index, &scratch, &Index::zero(), &count);
        self.changed();
    }

    // =========================================================================
    // Removal
    // =========================================================================

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.len() - 1u32;
        let value = self.arena.remove_one(&last);
        self.changed();
        return Some(value);
    }

    pub fn remove_at(&mut self, index: impl Into<Index>) -> Result<T> {
        let index = index.into();
        self.check_index(&index)?;
        let value = self.arena.remove_one(&index);
        self.changed();
        return Ok(value);
    }

    /// Remove `count` elements starting at `index`.
    pub fn remove_range(&mut self, index: impl Into<Index>, count: impl Into<Index>) -> Result<()> {
        let (index, count) = (index.into(), count.into());
        self.check_range(&index, &count)?;
        let root = self.arena.root;
        Engine::within(&mut self.arena).run(Task::Trim { node: root, index, count });
        self.changed();
        return Ok(());
    }

    /// Drop everything from `length` on.
    pub fn truncate(&mut self, length: impl Into<Index>) -> Result<()> {
        let length = length.into();
        self.check_position(&length)?;
        let count = self.len() - &length;
        return self.remove_range(length, count);
    }

    /// Grow to `length` with clones of `value`, or truncate down to it.
    pub fn resize(&mut self, length: impl Into<Index>, value: T) {
        let length = length.into();
        let current = self.len();
        if length <= current {
            let count = &current - &length;
            let root = self.arena.root;
            Engine::within(&mut self.arena).run(Task::Trim { node: root, index: length, count });
            self.changed();
            return;
        }
        self.arena.ensure_capacity(&length);
        let root = self.arena.root;
        Engine::filling(&mut self.arena, value).run(Task::Extend {
            src: None,
            flip: false,
            dst: root,
            count: length - current,
        });
        self.changed();
    }

    /// Remove every element, keeping the capacity.
    pub fn clear(&mut self) {
        let root = self.arena.root;
        self.arena.clear_subtree(root);
        self.changed();
    }

    /// Overwrite `self[index..index + count]` with clones of `value`. The
    /// length and the tree shape stay as they are.
    pub fn fill_range(&mut self, index: impl Into<Index>, count: impl Into<Index>, value: T) -> Result<()> {
        let (index, count) = (index.into(), count.into());
        self.check_range(&index, &count)?;
        self.arena.fill(&index, &count, &value);
        self.changed();
        return Ok(());
    }

    /// Reset `self[index..index + count]` to `T::default()` in place.
    pub fn clear_range(&mut self, index: impl Into<Index>, count: impl Into<Index>) -> Result<()>
    where
        T: Default,
    {
        return self.fill_range(index, count, T::default());
    }

    /// Remove the first element equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.index_of(value) else {
            return false;
        };
        self.arena.remove_one(&index);
        self.changed();
        return true;
    }

    // =========================================================================
    // Ranges and copying
    // =========================================================================

    /// Copy of `count` elements starting at `index`.
    pub fn get_range(&self, index: impl Into<Index>, count: impl Into<Index>) -> Result<BigList<T, L>> {
        let (index, count) = (index.into(), count.into());
        self.check_range(&index, &count)?;
        return Ok(BigList {
            arena: self.slice(&index, &count),
            cache: RefCell::new(AccessCache::default()),
        });
    }

    /// Overwrite the elements from `index` on with the contents of `other`.
    pub fn set_range(&mut self, index: impl Into<Index>, other: &BigList<T, L>) -> Result<()> {
        let index = index.into();
        let count = other.len();
        self.check_range(&index, &count)?;
        let (src, dst) = (other.arena.root, self.arena.root);
        Engine::between(&other.arena, &mut self.arena).run(Task::Copy {
            src,
            src_index: Index::zero(),
            dst,
            dst_index: index,
            count,
            flip: false,
        });
        self.changed();
        return Ok(());
    }

    /// Make this list a copy of `other`.
    /// Make this list a copy of `other`. The tree is rebuilt under this
    /// list's own configuration.
    pub fn replace_with(&mut self, other: &BigList<T, L>) {
        self.arena = self.packed(&other.arena, &Index::zero(), &other.len());
        self.changed();
    }

    /// Copy `self[index..index + count]` over `dest[dest_index..]`. The
    /// destination grows when the copy runs past its end.
    pub fn copy_range_to(
        &self,
        index: impl Into<Index>,
        dest: &mut BigList<T, L>,
        dest_index: impl Into<Index>,
        count: impl Into<Index>,
    ) -> Result<()> {
        let (index, dest_index, count) = (index.into(), dest_index.into(), count.into());
        self.check_range(&index, &count)?;
        dest.check_position(&dest_index)?;
        let dest_len = dest.len();
        let overwrite = index::min(&count, &(&dest_len - &dest_index)).clone();
        if !overwrite.is_zero() {
            let (src, dst) = (self.arena.root, dest.arena.root);
            Engine::between(&self.arena, &mut dest.arena).run(Task::Copy {
                src,
                src_index: index.clone(),
                dst,
                dst_index: dest_index,
                count: overwrite.clone(),
                flip: false,
            });
        }
        let appended = &count - &overwrite;
        if !appended.is_zero() {
            dest.arena.splice(&dest_len, &self.arena, &(&index + &overwrite), &appended);
        }
        dest.changed();
        return Ok(());
    }

    /// Overlap-safe copy of `count` elements from `src` to `dst` inside
    /// this list. The list grows when the copy runs past its end.
    pub fn copy_within(&mut self, src: impl Into<Index>, dst: impl Into<Index>, count: impl Into<Index>) -> Result<()> {
        let (src, dst, count) = (src.into(), dst.into(), count.into());
        self.check_range(&src, &count)?;
        self.check_position(&dst)?;
        let length = self.len();
        let overwrite = index::min(&count, &(&length - &dst)).clone();
        let appended = &count - &overwrite;
        let tail = if appended.is_zero() {
            None
        } else {
            Some(self.slice(&(&src + &overwrite), &appended))
        };
        if !overwrite.is_zero() {
            let root = self.arena.root;
            Engine::within(&mut self.arena).run(Task::Copy {
                src: root,
                src_index: src,
                dst: root,
                dst_index: dst,
                count: overwrite,
                flip: false,
            });
        }
        if let Some(tail) = tail {
            self.arena.splice(&length, &tail, &Index::zero(), &appended);
        }
        self.changed();
        return Ok(());
    }

    /// Packed standalone tree holding `self[index..index + count]`.
    fn slice(&self, index: &Index, count: &Index) -> Arena<T, L> {
        return self.packed(&self.arena, index, count);
    }

    /// Packed tree under this list's configuration holding
    /// `src[index..index + count]`.
    fn packed(&self, src: &Arena<T, L>, index: &Index, count: &Index) -> Arena<T, L> {
        let mut out: Arena<T, L> = Arena::new(self.arena.config);
        let root = out.root;
        out.set_capacity(root, count);
        Engine::between(src, &mut out).run(Task::Extend {
            src: Some((src.root, index.clone())),
            flip: false,
            dst: root,
            count: count.clone(),
        });
        return out;
    }

    // =========================================================================
    // Reversal
    // =========================================================================

    /// Reverse the whole list in O(1).
    pub fn reverse(&mut self) {
        let root = self.arena.root;
        let node = self.arena.node_mut(root);
        node.reversed = !node.reversed;
        self.changed();
    }

    /// Reverse `count` elements starting at `index`.
    pub fn reverse_range(&mut self, index: impl Into<Index>, count: impl Into<Index>) -> Result<()> {
        let (index, count) = (index.into(), count.into());
        self.check_range(&index, &count)?;
        if count <= Index::one() {
            return Ok(());
        }
        let mut scratch = self.slice(&index, &count);
        let src = scratch.root;
        scratch.node_mut(src).reversed = true;
        let dst = self.arena.root;
        Engine::between(&scratch, &mut self.arena).run(Task::Copy {
            src,
            src_index: Index::zero(),
            dst,
            dst_index: index,
            count,
            flip: false,
        });
        self.changed();
        return Ok(());
    }

    // =========================================================================
    // Search and conversion
    // =========================================================================

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        return self.iter().any(|item| item == value);
    }

    /// Whether `value` occurs in `self[index..index + count]`.
    pub fn contains_in(&self, value: &T, index: impl Into<Index>, count: impl Into<Index>) -> Result<bool>
    where
        T: PartialEq,
    {
        return Ok(self.iter_range(index, count)?.any(|item| item == value));
    }

    pub fn index_of(&self, value: &T) -> Option<Index>
    where
        T: PartialEq,
    {
        return Self::first_match(self.iter(), Index::zero(), value);
    }

    /// First position of `value` inside `self[index..index + count]`.
    pub fn index_of_in(
        &self,
        value: &T,
        index: impl Into<Index>,
        count: impl Into<Index>,
    ) -> Result<Option<Index>>
    where
        T: PartialEq,
    {
        let index = index.into();
        let iter = self.iter_range(index.clone(), count)?;
        return Ok(Self::first_match(iter, index, value));
    }

    pub fn last_index_of(&self, value: &T) -> Option<Index>
    where
        T: PartialEq,
    {
        return Self::last_match(self.iter(), self.len(), value);
    }

    /// Last position of `value` inside `self[index..index + count]`.
    pub fn last_index_of_in(
        &self,
        value: &T,
        index: impl Into<Index>,
        count: impl Into<Index>,
    ) -> Result<Option<Index>>
    where
        T: PartialEq,
    {
        let (index, count) = (index.into(), count.into());
        let end = &index + &count;
        let iter = self.iter_range(index, count)?;
        return Ok(Self::last_match(iter, end, value));
    }

    fn first_match(iter: Iter<'_, T, L>, mut index: Index, value: &T) -> Option<Index>
    where
        T: PartialEq,
    {
        for item in iter {
            if item == value {
                return Some(index);
            }
            index += 1u32;
        }
        return None;
    }

    fn last_match(iter: Iter<'_, T, L>, mut end: Index, value: &T) -> Option<Index>
    where
        T: PartialEq,
    {
        for item in iter.rev() {
            end -= 1u32;
            if item == value {
                return Some(end);
            }
        }
        return None;
    }

    /// Whether `needle` occurs as a contiguous run. An empty needle is never
    /// found.
    pub fn contains_seq(&self, needle: &[T]) -> bool
    where
        T: PartialEq,
    {
        return self.seq_at(needle, Index::zero(), self.len());
    }

    /// Whether `needle` occurs as a contiguous run inside
    /// `self[index..index + count]`.
    pub fn contains_seq_in(&self, needle: &[T], index: impl Into<Index>, count: impl Into<Index>) -> Result<bool>
    where
        T: PartialEq,
    {
        let (index, count) = (index.into(), count.into());
        self.check_range(&index, &count)?;
        return Ok(self.seq_at(needle, index, count));
    }

    fn seq_at(&self, needle: &[T], index: Index, count: Index) -> bool
    where
        T: PartialEq,
    {
        let width = Index::from(needle.len());
        if needle.is_empty() || width > count {
            return false;
        }
        let end = &index + &count;
        let mut start = index;
        while &start + &width <= end {
            let back = &start + &width;
            if Iter::over(self, start.clone(), back).eq(needle.iter()) {
                return true;
            }
            start += 1u32;
        }
        return false;
    }

    /// Whether any element equals one of `values`.
    pub fn contains_any(&self, values: &[T]) -> bool
    where
        T: Hash + Eq,
    {
        let set: FxHashSet<&T> = values.iter().collect();
        return self.iter().any(|item| set.contains(item));
    }

    /// Whether any element of `self[index..index + count]` equals one of
    /// `values`.
    pub fn contains_any_in(&self, values: &[T], index: impl Into<Index>, count: impl Into<Index>) -> Result<bool>
    where
        T: Hash + Eq,
    {
        let mut iter = self.iter_range(index, count)?;
        let set: FxHashSet<&T> = values.iter().collect();
        return Ok(iter.any(|item| set.contains(item)));
    }

    /// Whether any element is not one of `values`.
    pub fn contains_any_excluding(&self, values: &[T]) -> bool
    where
        T: Hash + Eq,
    {
        let set: FxHashSet<&T> = values.iter().collect();
        return self.iter().any(|item| !set.contains(item));
    }

    /// Whether any element of `self[index..index + count]` is not one of
    /// `values`.
    pub fn contains_any_excluding_in(
        &self,
        values: &[T],
        index: impl Into<Index>,
        count: impl Into<Index>,
    ) -> Result<bool>
    where
        T: Hash + Eq,
    {
        let mut iter = self.iter_range(index, count)?;
        let set: FxHashSet<&T> = values.iter().collect();
        return Ok(iter.any(|item| !set.contains(item)));
    }

    /// Iterator over `self[index..index + count]`.
    pub fn iter_range(&self, index: impl Into<Index>, count: impl Into<Index>) -> Result<Iter<'_, T, L>> {
        let (index, count) = (index.into(), count.into());
        self.check_range(&index, &count)?;
        let back = &index + &count;
        return Ok(Iter::over(self, index, back));
    }

    pub fn iter(&self) -> Iter<'_, T, L> {
        return Iter::new(self);
    }

    pub fn to_vec(&self) -> Vec<T> {
        return self.iter().cloned().collect();
    }

    /// Fisher-Yates shuffle driven by `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut i = self.len();
        while i > Index::one() {
            let j = rng.gen_biguint_below(&i);
            i -= 1u32;
            if j != i {
                let a = self.item(&i).clone();
                let b = std::mem::replace(self.item_mut(&j), a);
                *self.item_mut(&i) = b;
            }
        }
        self.changed();
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Walk the whole tree and panic on the first broken invariant.
    pub fn verify(&self) {
        self.arena.verify();
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn check_index(&self, index: &Index) -> Result<()> {
        let length = self.len();
        if *index >= length {
            return Err(BigListError::IndexOutOfRange {
                index: index.clone(),
                length,
            });
        }
        return Ok(());
    }

    fn check_position(&self, index: &Index) -> Result<()> {
        let length = self.len();
        if *index > length {
            return Err(BigListError::IndexOutOfRange {
                index: index.clone(),
                length,
            });
        }
        return Ok(());
    }

    fn check_range(&self, index: &Index, count: &Index) -> Result<()> {
        let length = self.len();
        if index + count > length {
            return Err(BigListError::RangeOutOfBounds {
                index: index.clone(),
                count: count.clone(),
                length,
            });
        }
        return Ok(());
    }

    /// Called after every mutation.
    #[inline(always)]
    fn changed(&mut self) {
        self.cache.get_mut().invalidate();
        #[cfg(feature = "verify")]
        self.arena.verify();
    }
}

// =============================================================================
// Standard traits
// =============================================================================

impl<T: Clone, L: Leaf<T>> Default for BigList<T, L> {
    fn default() -> Self {
        return BigList::new();
    }
}

impl<T: Clone, L: Leaf<T>> Clone for BigList<T, L> {
    fn clone(&self) -> Self {
        return BigList {
            arena: self.arena.clone(),
            cache: RefCell::new(AccessCache::default()),
        };
    }
}

impl<T: Clone + fmt::Debug, L: Leaf<T>> fmt::Debug for BigList<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T: Clone + PartialEq, L: Leaf<T>> PartialEq for BigList<T, L> {
    fn eq(&self, other: &Self) -> bool {
        return self.len() == other.len() && self.iter().eq(other.iter());
    }
}

impl<T: Clone + Eq, L: Leaf<T>> Eq for BigList<T, L> {}

impl<T: Clone + Hash, L: Leaf<T>> Hash for BigList<T, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone, L: Leaf<T>> FromIterator<T> for BigList<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return BigList::from_iter_with_config(iter, BigListConfig::default());
    }
}

impl<T: Clone, L: Leaf<T>> Extend<T> for BigList<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let end = self.len();
        self.splice_items(&end, iter.into_iter().collect());
    }
}
