// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Range-copy engine.
//!
//! Every bulk movement of elements runs through one explicit work-list, so
//! stack use does not depend on tree height. A run starts from one task and
//! keeps popping until the list is empty. Tasks only ever split into tasks
//! on strictly smaller nodes.
//!
//! Task kinds:
//!
//! - [`Task::Copy`]: overwrite `dst[dst_index..+count]` with
//!   `src[src_index..+count]`, read back to front when `flip` is set.
//!   Leaf to leaf is a buffer copy. Anything involving a branch is cut at
//!   the union of child boundaries on both sides, which covers flattening a
//!   branch into a leaf, distributing a leaf over a branch, and branch to
//!   branch copies. Branch to branch runs either direct (left to right),
//!   diagonal (flipped: the source is walked from its far end) or right to
//!   left when a node is copied onto itself with the destination after the
//!   source.
//! - [`Task::Extend`]: grow `dst` at its logical end by `count` elements,
//!   taken from a source range or cloned from the run's fill value.
//! - [`Task::Trim`]: remove `node[index..+count]`.
//! - [`Task::Tidy`]: once a branch's trims are done, rotate children that
//!   became empty to its tail.
//!
//! Copies within one tree only ever pair nodes at the same depth, which are
//! either the same node or disjoint. Extends within one tree require the
//! source and destination subtrees to be disjoint.

use num_traits::{One, Zero};
use tracing::trace;

use super::arena::{Arena, NodeId, NodeKind};
use crate::index::{self, small, Index};
use crate::leaf::Leaf;

/// A unit of work for the engine.
#[derive(Clone, Debug)]
pub(crate) enum Task {
    Copy {
        src: NodeId,
        src_index: Index,
        dst: NodeId,
        dst_index: Index,
        count: Index,
        flip: bool,
    },
    Extend {
        /// Source node and start offset; `None` extends with the fill value.
        src: Option<(NodeId, Index)>,
        flip: bool,
        dst: NodeId,
        count: Index,
    },
    Trim {
        node: NodeId,
        index: Index,
        count: Index,
    },
    Tidy {
        node: NodeId,
    },
}

/// The trees a run reads from and writes to.
pub(crate) enum Pair<'a, T, L> {
    Within(&'a mut Arena<T, L>),
    Between {
        src: &'a Arena<T, L>,
        dst: &'a mut Arena<T, L>,
    },
}

impl<'a, T: Clone, L: Leaf<T>> Pair<'a, T, L> {
    #[inline]
    fn src(&self) -> &Arena<T, L> {
        match self {
            Pair::Within(arena) => return arena,
            Pair::Between { src, .. } => return src,
        }
    }

    #[inline]
    fn dst(&mut self) -> &mut Arena<T, L> {
        match self {
            Pair::Within(arena) => return arena,
            Pair::Between { dst, .. } => return dst,
        }
    }

    #[inline]
    fn dst_ref(&self) -> &Arena<T, L> {
        match self {
            Pair::Within(arena) => return arena,
            Pair::Between { dst, .. } => return dst,
        }
    }

    #[inline]
    fn within(&self) -> bool {
        return matches!(self, Pair::Within(_));
    }
}

/// Position of a cut inside one side of a copy.
struct Piece {
    node: NodeId,
    offset: Index,
    /// Elements available from `offset` in the walking direction,
    /// `offset` itself included.
    avail: Index,
}

/// One side of a copy, mapped into physical coordinates when it is a
/// branch that will be cut at its children.
struct Side {
    node: NodeId,
    base: Index,
    split: bool,
    reversed: bool,
}

pub(crate) struct Engine<'a, T, L> {
    pair: Pair<'a, T, L>,
    fill: Option<T>,
    stack: Vec<Task>,
}

impl<'a, T: Clone, L: Leaf<T>> Engine<'a, T, L> {
    pub fn within(arena: &'a mut Arena<T, L>) -> Engine<'a, T, L> {
        return Engine {
            pair: Pair::Within(arena),
            fill: None,
            stack: Vec::new(),
        };
    }

    pub fn between(src: &'a Arena<T, L>, dst: &'a mut Arena<T, L>) -> Engine<'a, T, L> {
        return Engine {
            pair: Pair::Between { src, dst },
            fill: None,
            stack: Vec::new(),
        };
    }

    /// Engine whose sourceless extends clone `value`.
    pub fn filling(arena: &'a mut Arena<T, L>, value: T) -> Engine<'a, T, L> {
        return Engine {
            pair: Pair::Within(arena),
            fill: Some(value),
            stack: Vec::new(),
        };
    }

    /// Run `task` and everything it expands into.
    pub fn run(mut self, task: Task) {
        self.stack.push(task);
        let mut steps = 0usize;
        while let Some(task) = self.stack.pop() {
            steps += 1;
            match task {
                Task::Copy {
                    src,
                    src_index,
                    dst,
                    dst_index,
                    count,
                    flip,
                } => self.copy(src, src_index, dst, dst_index, count, flip),
                Task::Extend {
                    src,
                    flip,
                    dst,
                    count,
                } => self.extend(src, flip, dst, count),
                Task::Trim { node, index, count } => self.trim(node, index, count),
                Task::Tidy { node } => self.pair.dst().rotate_empty_children(node),
            }
        }
        trace!(steps, "copy engine run finished");
    }

    // =========================================================================
    // Copy
    // =========================================================================

    fn copy(&mut self, src: NodeId, si: Index, dst: NodeId, di: Index, count: Index, flip: bool) {
        if count.is_zero() {
            return;
        }
        if self.pair.src().is_leaf(src) && self.pair.dst_ref().is_leaf(dst) {
            self.copy_leaves(src, &si, dst, &di, small(&count), flip);
            return;
        }

        let s = side(self.pair.src(), src, &si, &count);
        let d = side(self.pair.dst_ref(), dst, &di, &count);
        let flip = flip ^ s.reversed ^ d.reversed;

        let mut chunks = Vec::new();
        let mut done = Index::zero();
        while done < count {
            let dp = piece(self.pair.dst_ref(), &d, &(&d.base + &done), true);
            let left = &count - &done;
            let sp = if flip {
                let at = &s.base + &left - 1u32;
                piece(self.pair.src(), &s, &at, false)
            } else {
                piece(self.pair.src(), &s, &(&s.base + &done), true)
            };
            let chunk = index::min(index::min(&dp.avail, &sp.avail), &left).clone();
            let src_index = if flip {
                &sp.offset + 1u32 - &chunk
            } else {
                sp.offset
            };
            chunks.push(Task::Copy {
                src: sp.node,
                src_index,
                dst: dp.node,
                dst_index: dp.offset,
                count: chunk.clone(),
                flip,
            });
            done += chunk;
        }

        // Self-overlap with the destination after the source runs back to
        // front, like memmove. The stack pops in reverse push order.
        let backward = self.pair.within() && src == dst && !flip && d.base > s.base;
        if backward {
            self.stack.extend(chunks);
        } else {
            self.stack.extend(chunks.into_iter().rev());
        }
    }

    fn copy_leaves(&mut self, src: NodeId, si: &Index, dst: NodeId, di: &Index, count: usize, flip: bool) {
        let (sp, s_rev) = physical(self.pair.src(), src, si, count);
        let (dp, d_rev) = physical(self.pair.dst_ref(), dst, di, count);
        let flip = flip ^ s_rev ^ d_rev;
        match &mut self.pair {
            Pair::Within(arena) if src == dst => {
                if flip {
                    let leaf = arena.leaf_mut(dst);
                    let items: Vec<T> = (sp..sp + count).map(|i| leaf_item(leaf, i)).collect();
                    for (k, item) in items.into_iter().rev().enumerate() {
                        leaf.set(dp + k, item);
                    }
                } else {
                    arena.leaf_mut(dst).copy_within(sp, dp, count);
                }
            }
            Pair::Within(arena) => {
                let mut target = arena.take(dst);
                match &mut target.kind {
                    NodeKind::Leaf(dest) => {
                        arena.leaf(src).copy_range_to(sp, dest, dp, count);
                        if flip {
                            dest.reverse(dp, count);
                        }
                    }
                    NodeKind::Branch(_) => panic!("node {dst:?} is a branch, expected a leaf"),
                }
                arena.put(dst, target);
            }
            Pair::Between { src: from, dst: to } => {
                let dest = to.leaf_mut(dst);
                from.leaf(src).copy_range_to(sp, dest, dp, count);
                if flip {
                    dest.reverse(dp, count);
                }
            }
        }
    }

    // =========================================================================
    // Extend
    // =========================================================================

    fn extend(&mut self, src: Option<(NodeId, Index)>, flip: bool, dst: NodeId, count: Index) {
        if count.is_zero() {
            return;
        }
        if let Some((node, _)) = &src {
            debug_assert!(
                !self.pair.within()
                    || !(self.pair.src().is_within(*node, dst) || self.pair.src().is_within(dst, *node)),
                "extend within one tree needs disjoint subtrees"
            );
            if !self.pair.src().is_leaf(*node) && self.pair.dst_ref().is_leaf(dst) {
                self.flatten_into(*node, src.as_ref().map(|s| &s.1), flip, dst, &count);
                return;
            }
        }
        if self.pair.dst_ref().is_leaf(dst) {
            self.extend_leaf(src, flip, dst, small(&count));
            return;
        }
        self.distribute_into(src, flip, dst, count);
    }

    /// Source branch into destination leaf: one extend per covered source
    /// child, executed in destination order.
    fn flatten_into(&mut self, src: NodeId, si: Option<&Index>, flip: bool, dst: NodeId, count: &Index) {
        let zero = Index::zero();
        let si = si.unwrap_or(&zero);
        let s = side(self.pair.src(), src, si, count);
        let flip = flip ^ s.reversed;
        let mut chunks = Vec::new();
        let mut done = Index::zero();
        while done < *count {
            let left = count - &done;
            let task = if flip {
                let at = &s.base + &left - 1u32;
                let sp = piece(self.pair.src(), &s, &at, false);
                let chunk = index::min(&sp.avail, &left).clone();
                let start = &sp.offset + 1u32 - &chunk;
                done += &chunk;
                Task::Extend {
                    src: Some((sp.node, start)),
                    flip,
                    dst,
                    count: chunk,
                }
            } else {
                let sp = piece(self.pair.src(), &s, &(&s.base + &done), true);
                let chunk = index::min(&sp.avail, &left).clone();
                done += &chunk;
                Task::Extend {
                    src: Some((sp.node, sp.offset)),
                    flip,
                    dst,
                    count: chunk,
                }
            };
            chunks.push(task);
        }
        self.stack.extend(chunks.into_iter().rev());
    }

    fn extend_leaf(&mut self, src: Option<(NodeId, Index)>, flip: bool, dst: NodeId, count: usize) {
        let items: Vec<T> = match &src {
            None => {
                let Some(value) = self.fill.clone() else {
                    panic!("sourceless extend without a fill value");
                };
                let arena = self.pair.dst();
                let node = arena.node(dst);
                let new_len = small(&node.length) + count;
                let reversed = node.reversed;
                let leaf = arena.leaf_mut(dst);
                if reversed {
                    leaf.resize_left(new_len, value);
                } else {
                    leaf.resize(new_len, value);
                }
                arena.add_length(dst, &Index::from(count));
                return;
            }
            Some((node, si)) => {
                let from = self.pair.src();
                let (sp, s_rev) = physical(from, *node, si, count);
                let leaf = from.leaf(*node);
                let forward = !(flip ^ s_rev);
                (0..count)
                    .map(|k| {
                        let i = if forward { sp + k } else { sp + count - 1 - k };
                        leaf_item(leaf, i)
                    })
                    .collect()
            }
        };
        let arena = self.pair.dst();
        if arena.reversed(dst) {
            let mut items = items;
            items.reverse();
            arena.leaf_mut(dst).extend_front(items);
        } else {
            arena.leaf_mut(dst).extend_back(items);
        }
        arena.add_length(dst, &Index::from(count));
    }

    /// Destination branch: fill the last used child, then the empty ones
    /// after it. Compacts first when the free space is not all at the end.
    fn distribute_into(&mut self, src: Option<(NodeId, Index)>, flip: bool, dst: NodeId, count: Index) {
        {
            let arena = self.pair.dst();
            arena.normalize(dst);
            if tail_room(arena, dst) < count {
                arena.compact(dst);
            }
        }
        let arena = self.pair.dst_ref();
        let branch = arena.branch(dst);
        let mut j = if branch.lengths.total().is_zero() {
            0
        } else {
            let last = branch.lengths.total() - 1u32;
            branch.lengths.index_of_not_greater_sum(&last).0
        };
        let mut chunks = Vec::new();
        let mut done = Index::zero();
        while done < count {
            let Some(&child) = branch.children.get(j) else {
                panic!("branch {dst:?} ran out of room while extending by {count}");
            };
            j += 1;
            let room = arena.capacity(child) - arena.length(child);
            let left = &count - &done;
            let chunk = index::min(&room, &left).clone();
            if chunk.is_zero() {
                continue;
            }
            let from = src.as_ref().map(|(node, si)| {
                let start = if flip { si + &left - &chunk } else { si + &done };
                (*node, start)
            });
            chunks.push(Task::Extend {
                src: from,
                flip,
                dst: child,
                count: chunk.clone(),
            });
            done += chunk;
        }
        self.stack.extend(chunks.into_iter().rev());
    }

    // =========================================================================
    // Trim
    // =========================================================================

    fn trim(&mut self, node: NodeId, index: Index, count: Index) {
        if count.is_zero() {
            return;
        }
        let arena = self.pair.dst();
        if arena.is_leaf(node) {
            let n = small(&count);
            let (phys, _) = physical(arena, node, &index, n);
            arena.leaf_mut(node).remove_range(phys, n);
            arena.sub_length(node, &count);
            return;
        }
        if index.is_zero() && count == *arena.length(node) {
            arena.clear_subtree(node);
            return;
        }
        let s = side(arena, node, &index, &count);
        self.stack.push(Task::Tidy { node });
        let mut done = Index::zero();
        while done < count {
            let p = piece(arena, &s, &(&s.base + &done), true);
            let left = &count - &done;
            let chunk = index::min(&p.avail, &left).clone();
            done += &chunk;
            self.stack.push(Task::Trim {
                node: p.node,
                index: p.offset,
                count: chunk,
            });
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

#[inline]
fn leaf_item<T: Clone, L: Leaf<T>>(leaf: &L, i: usize) -> T {
    match leaf.get(i) {
        Some(item) => return item.clone(),
        None => panic!("leaf read at {i} past length {}", leaf.len()),
    }
}

/// Physical start of a logical leaf range, plus the leaf's flag.
fn physical<T: Clone, L: Leaf<T>>(arena: &Arena<T, L>, id: NodeId, index: &Index, count: usize) -> (usize, bool) {
    let node = arena.node(id);
    let i = small(index);
    if node.reversed {
        return (small(&node.length) - i - count, true);
    }
    return (i, false);
}

/// Describe one side of a copy. Branches are mapped through their own
/// reversal flag and cut at their children; leaves are kept whole.
fn side<T: Clone, L: Leaf<T>>(arena: &Arena<T, L>, id: NodeId, index: &Index, count: &Index) -> Side {
    let node = arena.node(id);
    if arena.is_leaf(id) {
        return Side {
            node: id,
            base: index.clone(),
            split: false,
            reversed: false,
        };
    }
    let base = if node.reversed {
        &node.length - index - count
    } else {
        index.clone()
    };
    return Side {
        node: id,
        base,
        split: true,
        reversed: node.reversed,
    };
}

/// Find the piece holding `pos` on one side. Walking forward, `avail`
/// counts elements from `pos` to the end of the piece; walking backward it
/// counts from the start of the piece up to `pos`.
fn piece<T: Clone, L: Leaf<T>>(arena: &Arena<T, L>, side: &Side, pos: &Index, forward: bool) -> Piece {
    if !side.split {
        let avail = if forward {
            arena.length(side.node) - pos
        } else {
            pos + 1u32
        };
        return Piece {
            node: side.node,
            offset: pos.clone(),
            avail,
        };
    }
    let branch = arena.branch(side.node);
    let (i, offset) = branch.lengths.index_of_not_greater_sum(pos);
    let avail = if forward {
        branch.lengths.get(i) - &offset
    } else {
        &offset + Index::one()
    };
    return Piece {
        node: branch.children[i],
        offset,
        avail,
    };
}

/// Free space after the last non-empty child of a branch.
pub(crate) fn tail_room<T: Clone, L: Leaf<T>>(arena: &Arena<T, L>, id: NodeId) -> Index {
    let branch = arena.branch(id);
    let mut room = Index::zero();
    for &child in branch.children.iter().rev() {
        let node = arena.node(child);
        room += &node.capacity - &node.length;
        if !node.length.is_zero() {
            break;
        }
    }
    return room;
}
