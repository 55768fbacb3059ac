// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Capacity growth and shrink.
//!
//! Capacity is structural: a branch of capacity `c` with fragment `f` has
//! `ceil(c / f)` children, all of capacity `f` except a possibly shorter
//! last one. Changing capacity reshapes a node in place:
//!
//! - fits in a leaf: collapse any branch levels, then resize the leaf;
//! - a leaf that must grow past `LeafSize` is promoted: its buffer moves
//!   into a new first child and the node becomes a branch;
//! - a branch whose fragment must grow is first filled up to
//!   `Subbranches` children, then wrapped as the only child of itself one
//!   level taller, repeatedly;
//! - a branch whose fragment must shrink is compacted and collapsed into
//!   its first child, repeatedly;
//! - otherwise children are added or dropped at the tail and the last
//!   child is resized.
//!
//! Node ids never change during reshaping, so the root keeps its id.

use num_traits::Zero;
use tracing::debug;

use super::arena::{Arena, Branch, Node, NodeId, NodeKind};
use crate::index::{self, div_ceil, Index};
use crate::leaf::Leaf;
use crate::sum_table::SumTable;

impl<T: Clone, L: Leaf<T>> Arena<T, L> {
    /// Reshape `id` to hold exactly `capacity` elements. `capacity` must be
    /// at least the node's length.
    pub(crate) fn set_capacity(&mut self, id: NodeId, capacity: &Index) {
        debug_assert!(capacity >= self.length(id));
        if capacity == self.capacity(id) {
            return;
        }
        let Some(fragment) = self.config.fragment_for(capacity) else {
            self.collapse_to_leaf(id);
            self.set_node_capacity(id, capacity.clone());
            let target = index::small(capacity);
            self.leaf_mut(id).shrink_to(target);
            return;
        };
        if self.is_leaf(id) {
            self.promote(id, &fragment);
        } else if *self.fragment(id) < fragment {
            self.grow_levels(id, &fragment);
        } else if *self.fragment(id) > fragment {
            self.shrink_levels(id, &fragment);
        }
        self.resize_linear(id, capacity);
    }

    /// Grow the whole tree so it holds at least `min` elements, doubling
    /// the current length to amortize repeated growth.
    pub(crate) fn ensure_capacity(&mut self, min: &Index) {
        let root = self.root;
        if self.capacity(root) >= min {
            return;
        }
        let length = self.length(root);
        let grown = if length.is_zero() {
            Index::from(self.config.default_capacity())
        } else {
            length * 2u32
        };
        let target = if grown > *min { grown } else { min.clone() };
        self.set_capacity(root, &target);
    }

    /// Move the contents of `id` into a new only child and make `id` a
    /// branch with the given fragment above it.
    fn push_down_level(&mut self, id: NodeId, fragment: Index) -> NodeId {
        let node = self.node_mut(id);
        let kind = std::mem::replace(&mut node.kind, NodeKind::Branch(Branch {
            children: Vec::new(),
            lengths: SumTable::new(),
            fragment,
        }));
        let moved = Node {
            parent: Some(id),
            slot: 0,
            capacity: node.capacity.clone(),
            length: node.length.clone(),
            reversed: node.reversed,
            kind,
        };
        node.reversed = false;
        let length = moved.length.clone();
        let child = self.alloc(moved);
        if let NodeKind::Branch(branch) = &self.node(child).kind {
            for grandchild in branch.children.clone() {
                self.node_mut(grandchild).parent = Some(child);
            }
        }
        let branch = self.branch_mut(id);
        branch.children.push(child);
        branch.lengths.add(length);
        return child;
    }

    /// Turn leaf `id` into a branch with the given fragment whose first
    /// child holds the old buffer.
    fn promote(&mut self, id: NodeId, fragment: &Index) {
        let child = self.push_down_level(id, fragment.clone());
        self.set_capacity(child, fragment);
        debug!(fragment = %fragment, "promoted leaf to branch");
    }

    /// Add levels above `id`'s contents until its fragment reaches `target`.
    fn grow_levels(&mut self, id: NodeId, target: &Index) {
        while *self.fragment(id) < *target {
            let full = self.fragment(id) << self.config.subbranch_bits();
            if *self.capacity(id) < full {
                self.resize_linear(id, &full);
            }
            self.push_down_level(id, full.clone());
            debug!(fragment = %full, "wrapped branch in a new level");
        }
    }

    /// Remove levels from `id` until its fragment is down to `target`.
    /// The node's elements must fit in one child at every step.
    fn shrink_levels(&mut self, id: NodeId, target: &Index) {
        while !self.is_leaf(id) && *self.fragment(id) > *target {
            self.compact(id);
            self.collapse_into_first_child(id);
            debug!(capacity = %self.capacity(id), "collapsed a level");
        }
    }

    /// Collapse branch levels until `id` is a leaf. All elements must fit
    /// in a single leaf.
    fn collapse_to_leaf(&mut self, id: NodeId) {
        while !self.is_leaf(id) {
            self.compact(id);
            self.collapse_into_first_child(id);
            debug!(capacity = %self.capacity(id), "collapsed a level");
        }
    }

    /// Replace branch `id` by its first child. Every other child must be
    /// empty.
    fn collapse_into_first_child(&mut self, id: NodeId) {
        let children = self.branch(id).children.clone();
        for &child in &children[1..] {
            debug_assert!(self.length(child).is_zero());
            self.release(child);
        }
        let first = self.discard(children[0]);
        if let NodeKind::Branch(branch) = &first.kind {
            for &grandchild in &branch.children {
                self.node_mut(grandchild).parent = Some(id);
            }
        }
        let capacity = first.capacity.clone();
        let node = self.node_mut(id);
        node.reversed ^= first.reversed;
        node.kind = first.kind;
        self.set_node_capacity(id, capacity);
    }

    /// Add or drop children at the tail of branch `id` so it holds
    /// `capacity`, keeping its fragment.
    fn resize_linear(&mut self, id: NodeId, capacity: &Index) {
        let fragment = self.fragment(id).clone();
        let current = self.capacity(id).clone();
        if *capacity > current {
            let last = *self.branch(id).children.last().unwrap_or_else(|| panic!("branch {id:?} has no children"));
            let last_capacity = self.capacity(last).clone();
            if last_capacity < fragment {
                let wanted = &last_capacity + (capacity - &current);
                let target = index::min(&wanted, &fragment).clone();
                self.set_capacity(last, &target);
            }
            while *self.capacity(id) < *capacity {
                let left = capacity - self.capacity(id);
                let child = self.new_empty(index::min(&left, &fragment).clone());
                self.push_child(id, child);
            }
            debug!(capacity = %capacity, "extended branch");
        } else if *capacity < current {
            let keep = index::small(&div_ceil(capacity, &fragment));
            let last_capacity = capacity - &fragment * (keep - 1);
            let packed = {
                let branch = self.branch(id);
                branch.children[keep..].iter().all(|&c| self.length(c).is_zero())
                    && *self.length(branch.children[keep - 1]) <= last_capacity
            };
            if !packed {
                self.compact(id);
            }
            while self.branch(id).children.len() > keep {
                self.pop_child(id);
            }
            let last = self.child(id, keep - 1);
            self.set_capacity(last, &last_capacity);
            debug!(capacity = %capacity, "shrank branch");
        }
    }

    /// Clear the reversal flag of branch `id` by pushing it into its
    /// children: their order is reversed and each child's flag toggled.
    /// A short last child is first grown to a full fragment so that any
    /// child may end up last.
    pub(crate) fn normalize(&mut self, id: NodeId) {
        if !self.reversed(id) || self.is_leaf(id) {
            return;
        }
        let fragment = self.fragment(id).clone();
        let last = *self.branch(id).children.last().unwrap_or_else(|| panic!("branch {id:?} has no children"));
        if *self.capacity(last) < fragment {
            self.set_capacity(last, &fragment);
        }
        let mut children = self.branch(id).children.clone();
        children.reverse();
        for &child in &children {
            let node = self.node_mut(child);
            node.reversed = !node.reversed;
        }
        self.set_children(id, children);
        self.node_mut(id).reversed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BigListConfig;
    use crate::leaf::DequeLeaf;

    fn arena() -> Arena<u32, DequeLeaf<u32>> {
        return Arena::new(BigListConfig::new(2, 1).unwrap());
    }

    fn idx(v: u32) -> Index {
        return Index::from(v);
    }

    #[test]
    fn leaf_capacity_stays_leaf() {
        let mut a = arena();
        let root = a.root;
        a.set_capacity(root, &idx(4));
        assert!(a.is_leaf(root));
        assert_eq!(a.capacity(root), &idx(4));
    }

    #[test]
    fn promotes_then_wraps() {
        let mut a = arena();
        let root = a.root;
        a.set_capacity(root, &idx(8));
        assert_eq!(a.height(), 1);
        assert_eq!(a.fragment(root), &idx(4));
        a.set_capacity(root, &idx(16));
        assert_eq!(a.height(), 2);
        assert_eq!(a.fragment(root), &idx(8));
        assert_eq!(a.capacity(root), &idx(16));
        a.verify();
    }

    #[test]
    fn partial_last_child() {
        let mut a = arena();
        let root = a.root;
        a.set_capacity(root, &idx(6));
        let branch = a.branch(root);
        assert_eq!(branch.children.len(), 2);
        assert_eq!(a.capacity(branch.children[1]), &idx(2));
        a.verify();
    }

    #[test]
    fn shrink_back_to_leaf() {
        let mut a = arena();
        let root = a.root;
        a.set_capacity(root, &idx(64));
        assert_eq!(a.height(), 4);
        a.set_capacity(root, &idx(3));
        assert!(a.is_leaf(root));
        assert_eq!(a.capacity(root), &idx(3));
        a.verify();
    }

    #[test]
    fn ensure_capacity_doubles() {
        let mut a = arena();
        a.ensure_capacity(&idx(1));
        assert_eq!(a.capacity(a.root), &idx(4));
        let root = a.root;
        a.leaf_mut(root).extend_back(vec![1, 2, 3, 4]);
        a.add_length(root, &idx(4));
        a.ensure_capacity(&idx(5));
        assert_eq!(a.capacity(a.root), &idx(8));
        a.verify();
    }

    #[test]
    fn normalize_grows_short_last_child() {
        let mut a = arena();
        let root = a.root;
        a.set_capacity(root, &idx(6));
        a.node_mut(root).reversed = true;
        a.normalize(root);
        assert!(!a.reversed(root));
        assert_eq!(a.capacity(root), &idx(8));
        for &child in &a.branch(root).children {
            assert!(a.reversed(child));
        }
        a.verify();
    }
}
