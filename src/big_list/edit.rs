// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Inserting and removing elements.
//!
//! A single insert descends to a leaf with room. At each branch it tries
//! the children touching the insertion point, in order; when none of them
//! can take another element, the branch splits the target child into a
//! spare empty sibling and tries again.
//!
//! A bulk insert descends the same way while some child can hold the whole
//! run. Where no child can, the tail of that node after the insertion
//! point is parked in a scratch tree, the run is appended, and the tail is
//! appended back.

use num_traits::{One, Zero};
use smallvec::SmallVec;
use tracing::trace;

use super::arena::{Arena, NodeId, NodeKind};
use super::engine::{Engine, Task};
use crate::config::BigListConfig;
use crate::index::{div_ceil, small, Index};
use crate::leaf::Leaf;

impl<T: Clone, L: Leaf<T>> Arena<T, L> {
    // =========================================================================
    // Single insert
    // =========================================================================

    /// Insert `value` so that it ends up at logical position `index`.
    pub(crate) fn insert_one(&mut self, index: &Index, value: T) {
        self.reserve_insert(index);
        let mut id = self.root;
        let mut at = index.clone();
        loop {
            if self.is_leaf(id) {
                let node = self.node(id);
                let offset = small(&at);
                let physical = if node.reversed {
                    small(&node.length) - offset
                } else {
                    offset
                };
                self.leaf_mut(id).insert(physical, value);
                self.add_length(id, &Index::one());
                return;
            }
            self.normalize(id);
            match self.insert_target(id, &at) {
                Some((child, local)) => {
                    id = child;
                    at = local;
                }
                None => self.make_room(id, &at),
            }
        }
    }

    /// Grow the root until it accepts one more element at `index`.
    fn reserve_insert(&mut self, index: &Index) {
        let root = self.root;
        let wanted = self.length(root) + 1u32;
        self.ensure_capacity(&wanted);
        if self.accepts_insert(root, index) {
            return;
        }
        // Double, then round up until packing under the fragment of the new
        // capacity leaves a whole child free.
        let length = self.length(root).clone();
        let mut target = self.capacity(root) * 2u32;
        while let Some(fragment) = self.config.fragment_for(&target) {
            let packed = (div_ceil(&length, &fragment) + 1u32) * &fragment;
            if packed <= target {
                break;
            }
            target = packed;
        }
        self.set_capacity(root, &target);
        debug_assert!(self.accepts_insert(root, index), "root still full after growing to {target}");
    }

    /// Whether `id` can take one element at local offset `offset` without
    /// any of its ancestors changing shape.
    fn accepts_insert(&self, id: NodeId, offset: &Index) -> bool {
        let node = self.node(id);
        if node.length >= node.capacity {
            return false;
        }
        if self.is_leaf(id) || *offset == node.length {
            return true;
        }
        return self.has_spare_child(id);
    }

    /// Whether packing branch `id` would leave a full-size child empty.
    fn has_spare_child(&self, id: NodeId) -> bool {
        let node = self.node(id);
        let fragment = self.fragment(id);
        return div_ceil(&node.length, fragment) < &node.capacity / fragment;
    }

    /// Children of branch `id` whose range touches `at`: the one holding
    /// `at - 1`, the one holding `at`, and any empty ones in between.
    fn touching(&self, id: NodeId, at: &Index) -> (usize, usize) {
        let branch = self.branch(id);
        let lo = if at.is_zero() {
            0
        } else {
            branch.lengths.index_of_not_greater_sum(&(at - 1u32)).0
        };
        let hi = if at < self.length(id) {
            branch.lengths.index_of_not_greater_sum(at).0
        } else {
            branch.children.len() - 1
        };
        return (lo, hi);
    }

    /// First child touching `at` that accepts an insert, with the local
    /// offset inside it.
    fn insert_target(&self, id: NodeId, at: &Index) -> Option<(NodeId, Index)> {
        let (lo, hi) = self.touching(id, at);
        let branch = self.branch(id);
        for j in lo..=hi {
            let child = branch.children[j];
            let local = at - branch.lengths.prefix(j);
            if self.accepts_insert(child, &local) {
                return Some((child, local));
            }
        }
        return None;
    }

    /// Split the child of `id` that holds `at` so that a spare empty child
    /// ends up next to the insertion point. Compacts instead when there is
    /// no spare child.
    fn make_room(&mut self, id: NodeId, at: &Index) {
        let fragment = self.fragment(id).clone();
        let children = self.branch(id).children.clone();
        let spare = children
            .iter()
            .position(|&c| self.length(c).is_zero() && *self.capacity(c) == fragment);
        let Some(spare) = spare else {
            let moved = self.compact(id);
            assert!(!moved.is_zero(), "branch {id:?} full after compaction");
            return;
        };

        let (_, target) = self.touching(id, at);
        assert_ne!(spare, target, "spare child of {id:?} is the insert target");
        let (child, empty) = (children[target], children[spare]);
        let offset = at - self.branch(id).lengths.prefix(target);
        let length = self.length(child).clone();

        if *self.capacity(child) < fragment {
            // A short last child must stay last: its head moves out instead.
            if !offset.is_zero() {
                self.move_range(child, Index::zero(), empty, offset);
            }
            let to = if spare < target { target - 1 } else { target };
            self.move_child(id, spare, to);
        } else {
            let tail = &length - &offset;
            if !tail.is_zero() {
                self.move_range(child, offset, empty, tail);
            }
            let to = if spare < target { target } else { target + 1 };
            self.move_child(id, spare, to);
        }
        trace!(length = %length, "split child for insert");
    }

    /// Move `from[index..+count]` to the end of the disjoint node `to`.
    fn move_range(&mut self, from: NodeId, index: Index, to: NodeId, count: Index) {
        Engine::within(self).run(Task::Extend {
            src: Some((from, index.clone())),
            flip: false,
            dst: to,
            count: count.clone(),
        });
        Engine::within(self).run(Task::Trim { node: from, index, count });
    }

    // =========================================================================
    // Bulk insert
    // =========================================================================

    /// Insert `src[src_index..+count]` at logical position `index`.
    pub(crate) fn splice(&mut self, index: &Index, src: &Arena<T, L>, src_index: &Index, count: &Index) {
        if count.is_zero() {
            return;
        }
        let wanted = self.length(self.root) + count;
        self.ensure_capacity(&wanted);
        let mut id = self.root;
        let mut at = index.clone();
        loop {
            if self.is_leaf(id) {
                let mut items = src.gather(src.root, src_index, count);
                let node = self.node(id);
                let offset = small(&at);
                let physical = if node.reversed {
                    items.reverse();
                    small(&node.length) - offset
                } else {
                    offset
                };
                self.leaf_mut(id).insert_many(physical, items);
                self.add_length(id, count);
                return;
            }
            self.normalize(id);
            match self.splice_target(id, &at, count) {
                Some((child, local)) => {
                    id = child;
                    at = local;
                }
                None => break,
            }
        }

        let tail = self.length(id) - &at;
        let parked = if tail.is_zero() {
            None
        } else {
            let mut parked: Arena<T, L> = Arena::new(self.config);
            let root = parked.root;
            parked.set_capacity(root, &tail);
            Engine::between(self, &mut parked).run(Task::Extend {
                src: Some((id, at.clone())),
                flip: false,
                dst: root,
                count: tail.clone(),
            });
            Engine::within(self).run(Task::Trim {
                node: id,
                index: at.clone(),
                count: tail.clone(),
            });
            Some(parked)
        };
        Engine::between(src, self).run(Task::Extend {
            src: Some((src.root, src_index.clone())),
            flip: false,
            dst: id,
            count: count.clone(),
        });
        if let Some(parked) = parked {
            Engine::between(&parked, self).run(Task::Extend {
                src: Some((parked.root, Index::zero())),
                flip: false,
                dst: id,
                count: tail.clone(),
            });
            trace!(parked = %tail, "spliced through a parked tail");
        }
    }

    fn splice_target(&self, id: NodeId, at: &Index, count: &Index) -> Option<(NodeId, Index)> {
        let (lo, hi) = self.touching(id, at);
        let branch = self.branch(id);
        for j in lo..=hi {
            let child = branch.children[j];
            if self.length(child) + count <= *self.capacity(child) {
                return Some((child, at - branch.lengths.prefix(j)));
            }
        }
        return None;
    }

    /// Build a packed tree holding `items` in order.
    pub(crate) fn from_items(config: BigListConfig, items: Vec<T>) -> Arena<T, L> {
        let mut arena: Arena<T, L> = Arena::new(config);
        let root = arena.root;
        arena.set_capacity(root, &Index::from(items.len()));
        let mut items = items.into_iter();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if arena.is_leaf(id) {
                let room = small(arena.capacity(id));
                let chunk: Vec<T> = items.by_ref().take(room).collect();
                let count = Index::from(chunk.len());
                arena.leaf_mut(id).extend_back(chunk);
                arena.add_length(id, &count);
            } else {
                stack.extend(arena.branch(id).children.iter().rev().copied());
            }
        }
        return arena;
    }

    /// Clone `id[index..+count]` out in logical order.
    pub(crate) fn gather(&self, id: NodeId, index: &Index, count: &Index) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack = vec![(id, index.clone(), count.clone(), false)];
        while let Some((id, index, count, flip)) = stack.pop() {
            if count.is_zero() {
                continue;
            }
            let node = self.node(id);
            match &node.kind {
                NodeKind::Leaf(leaf) => {
                    let n = small(&count);
                    let start = if node.reversed {
                        small(&node.length) - small(&index) - n
                    } else {
                        small(&index)
                    };
                    let forward = !(flip ^ node.reversed);
                    for k in 0..n {
                        let at = if forward { start + k } else { start + n - 1 - k };
                        match leaf.get(at) {
                            Some(item) => out.push(item.clone()),
                            None => panic!("leaf {id:?} read at {at} past its length"),
                        }
                    }
                }
                NodeKind::Branch(branch) => {
                    let base = if node.reversed {
                        &node.length - &index - &count
                    } else {
                        index
                    };
                    let flip = flip ^ node.reversed;
                    let mut pieces = Vec::new();
                    let mut done = Index::zero();
                    while done < count {
                        let (j, offset) = branch.lengths.index_of_not_greater_sum(&(&base + &done));
                        let avail = branch.lengths.get(j) - &offset;
                        let left = &count - &done;
                        let chunk = if avail < left { avail } else { left };
                        done += &chunk;
                        pieces.push((branch.children[j], offset, chunk, flip));
                    }
                    if flip {
                        stack.extend(pieces);
                    } else {
                        stack.extend(pieces.into_iter().rev());
                    }
                }
            }
        }
        return out;
    }

    /// Overwrite `root[index..+count]` with clones of `value`, in place.
    /// Lengths and capacities are untouched.
    pub(crate) fn fill(&mut self, index: &Index, count: &Index, value: &T) {
        let mut stack = vec![(self.root, index.clone(), count.clone())];
        while let Some((id, index, count)) = stack.pop() {
            if count.is_zero() {
                continue;
            }
            let node = self.node(id);
            // Order does not matter for a fill, only the physical span.
            let base = if node.reversed {
                &node.length - &index - &count
            } else {
                index
            };
            if self.is_leaf(id) {
                let start = small(&base);
                let leaf = self.leaf_mut(id);
                for at in start..start + small(&count) {
                    leaf.set(at, value.clone());
                }
                continue;
            }
            let branch = self.branch(id);
            let mut done = Index::zero();
            while done < count {
                let (j, offset) = branch.lengths.index_of_not_greater_sum(&(&base + &done));
                let avail = branch.lengths.get(j) - &offset;
                let left = &count - &done;
                let chunk = if avail < left { avail } else { left };
                done += &chunk;
                stack.push((branch.children[j], offset, chunk));
            }
        }
    }

    // =========================================================================
    // Remove
    // =========================================================================

    /// Remove and return the element at logical position `index`. Children
    /// emptied on the way are rotated to the tail of their parent.
    pub(crate) fn remove_one(&mut self, index: &Index) -> T {
        let mut path: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut id = self.root;
        let mut at = index.clone();
        while let NodeKind::Branch(branch) = &self.node(id).kind {
            let node = self.node(id);
            let position = if node.reversed {
                &node.length - 1u32 - &at
            } else {
                at
            };
            let (j, offset) = branch.lengths.index_of_not_greater_sum(&position);
            path.push(id);
            id = branch.children[j];
            at = offset;
        }
        let node = self.node(id);
        let offset = small(&at);
        let physical = if node.reversed {
            small(&node.length) - 1 - offset
        } else {
            offset
        };
        let value = self.leaf_mut(id).remove_at(physical);
        self.sub_length(id, &Index::one());

        let mut child = id;
        for &parent in path.iter().rev() {
            if self.length(child).is_zero() {
                self.rotate_empty_children(parent);
            }
            child = parent;
        }
        return value;
    }
}
