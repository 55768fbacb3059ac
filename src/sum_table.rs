// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Cumulative length table.
//!
//! Every branch keeps one of these over its children's lengths to find the
//! child holding a given offset without scanning. It is a Fenwick tree
//! (binary indexed tree) over arbitrary-precision values:
//!
//! | Operation | Time |
//! |-----------|------|
//! | `index_of_not_greater_sum` | O(log n) |
//! | `increase` / `decrease_by` / `set` | O(log n) |
//! | `add` | O(log n) |
//! | `insert_at` / `remove_at` / `reverse` | O(n) rebuild |
//!
//! Structural edits (insert, remove, reverse) only happen when children are
//! split or rotated, so rebuilding there keeps point updates cheap.

use num_traits::Zero;

use crate::index::Index;

/// Running-sum index over child lengths.
#[derive(Clone, Debug, Default)]
pub struct SumTable {
    /// Plain values, 0-indexed.
    values: Vec<Index>,
    /// 1-indexed Fenwick storage. `tree[0]` is unused.
    tree: Vec<Index>,
    total: Index,
}

#[inline(always)]
fn lowbit(i: usize) -> usize {
    return i & i.wrapping_neg();
}

impl SumTable {
    pub fn new() -> SumTable {
        return SumTable {
            values: Vec::new(),
            tree: vec![Index::zero()],
            total: Index::zero(),
        };
    }

    /// Build from initial values in O(n).
    pub fn from_values(values: Vec<Index>) -> SumTable {
        let mut table = SumTable {
            values,
            tree: Vec::new(),
            total: Index::zero(),
        };
        table.rebuild();
        return table;
    }

    fn rebuild(&mut self) {
        let n = self.values.len();
        self.tree.clear();
        self.tree.push(Index::zero());
        self.tree.extend(self.values.iter().cloned());
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                let child = self.tree[i].clone();
                self.tree[parent] += child;
            }
        }
        self.total = self.values.iter().sum();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.values.len();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.values.is_empty();
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> &Index {
        return &self.values[i];
    }

    #[inline(always)]
    pub fn total(&self) -> &Index {
        return &self.total;
    }

    pub fn values(&self) -> &[Index] {
        return &self.values;
    }

    /// Sum of the first `count` values.
    pub fn prefix(&self, count: usize) -> Index {
        let mut sum = Index::zero();
        let mut idx = count;
        while idx > 0 {
            sum += &self.tree[idx];
            idx -= lowbit(idx);
        }
        return sum;
    }

    /// Find the entry covering `offset`: the first `i` with
    /// `prefix(i + 1) > offset`, plus `offset - prefix(i)`.
    ///
    /// Zero-length entries are never returned for an offset below
    /// `total()`. For larger offsets the result is `(len(), offset - total)`.
    pub fn index_of_not_greater_sum(&self, offset: &Index) -> (usize, Index) {
        let n = self.values.len();
        let mut pos = 0usize;
        let mut rest = offset.clone();
        let mut step = if n == 0 { 0 } else { 1usize << (usize::BITS - 1 - n.leading_zeros()) };
        while step > 0 {
            let next = pos + step;
            if next <= n && self.tree[next] <= rest {
                pos = next;
                rest -= &self.tree[next];
            }
            step >>= 1;
        }
        return (pos, rest);
    }

    /// Append a value.
    pub fn add(&mut self, len: Index) {
        let n = self.values.len();
        let i = n + 1;
        let covered_from = i - lowbit(i);
        let node = &len + self.prefix(n) - self.prefix(covered_from);
        self.total += &len;
        self.values.push(len);
        self.tree.push(node);
    }

    pub fn insert_at(&mut self, i: usize, len: Index) {
        if i == self.values.len() {
            self.add(len);
            return;
        }
        self.values.insert(i, len);
        self.rebuild();
    }

    pub fn remove_at(&mut self, i: usize) -> Index {
        let value = self.values.remove(i);
        self.rebuild();
        return value;
    }

    pub fn increase(&mut self, i: usize, delta: &Index) {
        self.values[i] += delta;
        self.total += delta;
        let mut idx = i + 1;
        while idx < self.tree.len() {
            self.tree[idx] += delta;
            idx += lowbit(idx);
        }
    }

    pub fn decrease_by(&mut self, i: usize, delta: &Index) {
        self.values[i] -= delta;
        self.total -= delta;
        let mut idx = i + 1;
        while idx < self.tree.len() {
            self.tree[idx] -= delta;
            idx += lowbit(idx);
        }
    }

    /// Decrease entry `i` by one.
    pub fn decrease(&mut self, i: usize) {
        self.decrease_by(i, &Index::from(1u32));
    }

    pub fn set(&mut self, i: usize, value: Index) {
        if value >= self.values[i] {
            let delta = &value - &self.values[i];
            self.increase(i, &delta);
        } else {
            let delta = &self.values[i] - &value;
            self.decrease_by(i, &delta);
        }
    }

    /// Set entry `i`, or append when `i == len()`.
    pub fn set_or_add(&mut self, i: usize, len: Index) {
        if i == self.values.len() {
            self.add(len);
        } else {
            self.set(i, len);
        }
    }

    /// Raise entry `i` to `len` if it is currently smaller.
    pub fn update_if_greater(&mut self, i: usize, len: Index) {
        if len > self.values[i] {
            self.set(i, len);
        }
    }

    /// Reverse the order of all entries.
    pub fn reverse(&mut self) {
        self.values.reverse();
        self.rebuild();
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.rebuild();
    }
}
