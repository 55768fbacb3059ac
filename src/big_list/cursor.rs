// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Access-path cache.
//!
//! Remembers the last root-to-leaf descent. A lookup pops frames until it
//! reaches one whose range still contains the requested index, then
//! descends from there, so scanning neighbouring indices mostly stays in
//! the same leaf. Frames are only valid while the tree is unchanged; every
//! structural mutation calls [`AccessCache::invalidate`].

use num_traits::Zero;
use smallvec::SmallVec;

use super::arena::{Arena, NodeId, NodeKind};
use crate::index::{small, Index};
use crate::leaf::Leaf;

#[derive(Clone, Debug)]
struct Frame {
    node: NodeId,
    /// Global index of the node's first element.
    start: Index,
    /// Whether the node's content appears reversed in the list, not
    /// counting the node's own flag.
    reversed: bool,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct AccessCache {
    frames: SmallVec<[Frame; 8]>,
}

impl AccessCache {
    #[inline]
    pub fn invalidate(&mut self) {
        self.frames.clear();
    }

    /// Leaf and physical slot holding the element at `index`, which must
    /// be below the list's length.
    pub fn resolve<T: Clone, L: Leaf<T>>(&mut self, arena: &Arena<T, L>, index: &Index) -> (NodeId, usize) {
        while let Some(top) = self.frames.last() {
            let end = &top.start + arena.length(top.node);
            if top.start <= *index && *index < end {
                break;
            }
            self.frames.pop();
        }
        if self.frames.is_empty() {
            self.frames.push(Frame {
                node: arena.root,
                start: Index::zero(),
                reversed: false,
            });
        }

        loop {
            let Some(top) = self.frames.last() else {
                panic!("access cache emptied during descent");
            };
            let node = arena.node(top.node);
            let offset = if top.reversed {
                &top.start + &node.length - 1u32 - index
            } else {
                index - &top.start
            };
            let branch = match &node.kind {
                NodeKind::Leaf(_) => {
                    let physical = if node.reversed {
                        &node.length - 1u32 - &offset
                    } else {
                        offset
                    };
                    return (top.node, small(&physical));
                }
                NodeKind::Branch(branch) => branch,
            };
            let position = if node.reversed {
                &node.length - 1u32 - &offset
            } else {
                offset
            };
            let (slot, local) = branch.lengths.index_of_not_greater_sum(&position);
            let child = branch.children[slot];
            let child_length = arena.length(child);
            let physical_start = &position - &local;
            let logical_start = if node.reversed {
                &node.length - &physical_start - child_length
            } else {
                physical_start
            };
            let start = if top.reversed {
                &top.start + &node.length - &logical_start - child_length
            } else {
                &top.start + &logical_start
            };
            let reversed = top.reversed ^ node.reversed;
            self.frames.push(Frame {
                node: child,
                start,
                reversed,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BigListConfig;
    use crate::leaf::DequeLeaf;

    fn read(cache: &mut AccessCache, a: &Arena<u32, DequeLeaf<u32>>, i: u32) -> u32 {
        let (leaf, slot) = cache.resolve(a, &Index::from(i));
        return *a.leaf(leaf).get(slot).unwrap();
    }

    #[test]
    fn resolves_every_index() {
        let a: Arena<u32, DequeLeaf<u32>> = Arena::from_items(BigListConfig::new(2, 1).unwrap(), (0..37).collect());
        let mut cache = AccessCache::default();
        for i in 0..37 {
            assert_eq!(read(&mut cache, &a, i), i);
        }
        for i in (0..37).rev() {
            assert_eq!(read(&mut cache, &a, i), i);
        }
    }

    #[test]
    fn follows_nested_reversal() {
        let mut a: Arena<u32, DequeLeaf<u32>> = Arena::from_items(BigListConfig::new(2, 1).unwrap(), (0..16).collect());
        let root = a.root;
        let first = a.child(root, 0);
        a.node_mut(first).reversed = true;
        a.node_mut(root).reversed = true;
        let expected = a.gather(root, &Index::zero(), &Index::from(16u32));
        assert_eq!(expected, vec![15, 14, 13, 12, 11, 10, 9, 8, 0, 1, 2, 3, 4, 5, 6, 7]);
        let mut cache = AccessCache::default();
        for i in [3u32, 4, 12, 0, 15, 7, 8] {
            assert_eq!(read(&mut cache, &a, i), expected[i as usize]);
        }
    }
}
