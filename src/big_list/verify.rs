// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Structural self-check.

use num_traits::Zero;
use rustc_hash::FxHashSet;

use super::arena::{Arena, NodeKind};
use crate::index::Index;
use crate::leaf::Leaf;

impl<T: Clone, L: Leaf<T>> Arena<T, L> {
    /// Walk the whole tree and panic on the first broken invariant.
    pub(crate) fn verify(&self) {
        let leaf_size = self.config.leaf_size_index();
        let subbranches = self.config.subbranches();
        let root = self.root;
        assert!(self.node(root).parent.is_none(), "root has a parent");
        assert!(self.length(root) <= self.capacity(root), "root overfull");

        let mut seen = FxHashSet::default();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            assert!(seen.insert(id), "node {id:?} reachable twice");
            let node = self.node(id);
            assert!(node.length <= node.capacity, "node {id:?} holds more than its capacity");
            match &node.kind {
                NodeKind::Leaf(leaf) => {
                    assert_eq!(Index::from(leaf.len()), node.length, "leaf {id:?} length mismatch");
                    assert!(node.capacity <= leaf_size, "leaf {id:?} larger than a leaf may be");
                }
                NodeKind::Branch(branch) => {
                    let n = branch.children.len();
                    assert!(n >= 1 && n <= subbranches, "branch {id:?} has {n} children");
                    assert_eq!(branch.lengths.len(), n, "branch {id:?} table size");
                    assert!(branch.fragment >= leaf_size, "branch {id:?} fragment below leaf size");
                    let mut capacity = Index::zero();
                    let mut length = Index::zero();
                    for (slot, &child) in branch.children.iter().enumerate() {
                        let c = self.node(child);
                        assert_eq!(c.parent, Some(id), "child {child:?} parent link");
                        assert_eq!(c.slot, slot, "child {child:?} slot");
                        assert_eq!(branch.lengths.get(slot), &c.length, "child {child:?} table entry");
                        if slot + 1 < n {
                            assert_eq!(c.capacity, branch.fragment, "child {child:?} not a full fragment");
                        } else {
                            assert!(!c.capacity.is_zero(), "branch {id:?} has an empty last child");
                            assert!(c.capacity <= branch.fragment, "last child {child:?} too large");
                        }
                        if matches!(c.kind, NodeKind::Branch(_)) {
                            assert!(branch.fragment > leaf_size, "branch {id:?} of branches at leaf fragment");
                        }
                        capacity += &c.capacity;
                        length += &c.length;
                        stack.push(child);
                    }
                    assert_eq!(capacity, node.capacity, "branch {id:?} capacity sum");
                    assert_eq!(length, node.length, "branch {id:?} length sum");
                    assert_eq!(branch.lengths.total(), &node.length, "branch {id:?} table total");
                }
            }
        }
        assert_eq!(seen.len(), self.live_nodes(), "unreachable nodes in arena");
    }
}
