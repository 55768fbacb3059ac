// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Node storage for a big list.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`], so parent
//! links are plain indices that never own anything. A branch owns its
//! children: releasing a branch releases its whole subtree, and nothing
//! ever follows a parent link while freeing.
//!
//! Content model: a node's content is the concatenation of its children's
//! contents in physical order (or its leaf buffer), reversed when the
//! node's own `reversed` flag is set. Effective reversal along a path is
//! therefore the XOR of the flags on it.

use std::marker::PhantomData;

use num_traits::Zero;

use crate::config::BigListConfig;
use crate::index::Index;
use crate::leaf::Leaf;
use crate::sum_table::SumTable;

/// Index of a node inside its arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[inline(always)]
    fn slot(self) -> usize {
        return self.0 as usize;
    }
}

/// Children of a branch and their running lengths.
#[derive(Clone, Debug)]
pub(crate) struct Branch {
    pub children: Vec<NodeId>,
    pub lengths: SumTable,
    /// Capacity of every non-last child.
    pub fragment: Index,
}

impl Branch {
    fn new(fragment: Index) -> Branch {
        return Branch {
            children: Vec::new(),
            lengths: SumTable::new(),
            fragment,
        };
    }
}

#[derive(Clone, Debug)]
pub(crate) enum NodeKind<L> {
    Leaf(L),
    Branch(Branch),
}

#[derive(Clone, Debug)]
pub(crate) struct Node<L> {
    pub parent: Option<NodeId>,
    /// Position of this node in its parent's children.
    pub slot: usize,
    pub capacity: Index,
    pub length: Index,
    pub reversed: bool,
    pub kind: NodeKind<L>,
}

/// All nodes of one list.
#[derive(Clone)]
pub(crate) struct Arena<T, L> {
    nodes: Vec<Option<Node<L>>>,
    free: Vec<NodeId>,
    pub root: NodeId,
    pub config: BigListConfig,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Clone, L: Leaf<T>> Arena<T, L> {
    /// An empty list: a single leaf with no capacity.
    pub fn new(config: BigListConfig) -> Arena<T, L> {
        let root = Node {
            parent: None,
            slot: 0,
            capacity: Index::zero(),
            length: Index::zero(),
            reversed: false,
            kind: NodeKind::Leaf(L::default()),
        };
        return Arena {
            nodes: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
            config,
            _marker: PhantomData,
        };
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    pub fn alloc(&mut self, node: Node<L>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.slot()] = Some(node);
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(node));
        return id;
    }

    /// Remove a node from the arena without touching its children.
    pub fn take(&mut self, id: NodeId) -> Node<L> {
        match self.nodes[id.slot()].take() {
            Some(node) => return node,
            None => panic!("node {id:?} taken twice"),
        }
    }

    /// Put back a node previously removed with [`Arena::take`].
    pub fn put(&mut self, id: NodeId, node: Node<L>) {
        debug_assert!(self.nodes[id.slot()].is_none());
        self.nodes[id.slot()] = Some(node);
    }

    /// Remove a node from the arena for good and hand it back. Its
    /// children, if any, stay allocated.
    pub fn discard(&mut self, id: NodeId) -> Node<L> {
        let node = self.take(id);
        self.free.push(id);
        return node;
    }

    /// Free a node and its whole subtree.
    pub fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.take(id);
            if let NodeKind::Branch(branch) = node.kind {
                stack.extend(branch.children);
            }
            self.free.push(id);
        }
    }

    /// Build an empty subtree able to hold `capacity` elements.
    pub fn new_empty(&mut self, capacity: Index) -> NodeId {
        let top = self.alloc(Node {
            parent: None,
            slot: 0,
            capacity,
            length: Index::zero(),
            reversed: false,
            kind: NodeKind::Leaf(L::default()),
        });
        let mut stack = vec![top];
        while let Some(id) = stack.pop() {
            let capacity = self.node(id).capacity.clone();
            let Some(fragment) = self.config.fragment_for(&capacity) else {
                continue;
            };
            let mut branch = Branch::new(fragment.clone());
            let mut left = capacity;
            while !left.is_zero() {
                let child_capacity = crate::index::min(&left, &fragment).clone();
                left -= &child_capacity;
                let child = self.alloc(Node {
                    parent: Some(id),
                    slot: branch.children.len(),
                    capacity: child_capacity,
                    length: Index::zero(),
                    reversed: false,
                    kind: NodeKind::Leaf(L::default()),
                });
                branch.children.push(child);
                branch.lengths.add(Index::zero());
                stack.push(child);
            }
            self.node_mut(id).kind = NodeKind::Branch(branch);
        }
        return top;
    }

    // =========================================================================
    // Access
    // =========================================================================

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &Node<L> {
        match &self.nodes[id.slot()] {
            Some(node) => return node,
            None => panic!("node {id:?} used after release"),
        }
    }

    #[inline(always)]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<L> {
        match &mut self.nodes[id.slot()] {
            Some(node) => return node,
            None => panic!("node {id:?} used after release"),
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        return matches!(self.node(id).kind, NodeKind::Leaf(_));
    }

    #[inline(always)]
    pub fn length(&self, id: NodeId) -> &Index {
        return &self.node(id).length;
    }

    #[inline(always)]
    pub fn capacity(&self, id: NodeId) -> &Index {
        return &self.node(id).capacity;
    }

    #[inline(always)]
    pub fn reversed(&self, id: NodeId) -> bool {
        return self.node(id).reversed;
    }

    pub fn leaf(&self, id: NodeId) -> &L {
        match &self.node(id).kind {
            NodeKind::Leaf(leaf) => return leaf,
            NodeKind::Branch(_) => panic!("node {id:?} is a branch, expected a leaf"),
        }
    }

    pub fn leaf_mut(&mut self, id: NodeId) -> &mut L {
        match &mut self.node_mut(id).kind {
            NodeKind::Leaf(leaf) => return leaf,
            NodeKind::Branch(_) => panic!("node {id:?} is a branch, expected a leaf"),
        }
    }

    pub fn branch(&self, id: NodeId) -> &Branch {
        match &self.node(id).kind {
            NodeKind::Branch(branch) => return branch,
            NodeKind::Leaf(_) => panic!("node {id:?} is a leaf, expected a branch"),
        }
    }

    pub fn branch_mut(&mut self, id: NodeId) -> &mut Branch {
        match &mut self.node_mut(id).kind {
            NodeKind::Branch(branch) => return branch,
            NodeKind::Leaf(_) => panic!("node {id:?} is a leaf, expected a branch"),
        }
    }

    #[inline]
    pub fn child(&self, id: NodeId, i: usize) -> NodeId {
        return self.branch(id).children[i];
    }

    #[inline]
    pub fn fragment(&self, id: NodeId) -> &Index {
        return &self.branch(id).fragment;
    }

    /// Number of allocated nodes.
    pub fn live_nodes(&self) -> usize {
        return self.nodes.iter().filter(|n| n.is_some()).count();
    }

    /// Number of branch levels above the leaves.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut id = self.root;
        while let NodeKind::Branch(branch) = &self.node(id).kind {
            height += 1;
            id = branch.children[0];
        }
        return height;
    }

    /// Whether `ancestor` lies on the parent chain of `id` (or is `id`).
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(node) = cur {
            if node == ancestor {
                return true;
            }
            cur = self.node(node).parent;
        }
        return false;
    }

    // =========================================================================
    // Upward propagation
    // =========================================================================

    /// Grow the length of `id` and every ancestor by `delta`.
    pub fn add_length(&mut self, id: NodeId, delta: &Index) {
        if delta.is_zero() {
            return;
        }
        let mut cur = id;
        loop {
            let node = self.node_mut(cur);
            node.length += delta;
            let (parent, slot) = (node.parent, node.slot);
            let Some(parent) = parent else { return };
            self.branch_mut(parent).lengths.increase(slot, delta);
            cur = parent;
        }
    }

    /// Shrink the length of `id` and every ancestor by `delta`.
    pub fn sub_length(&mut self, id: NodeId, delta: &Index) {
        if delta.is_zero() {
            return;
        }
        let mut cur = id;
        loop {
            let node = self.node_mut(cur);
            node.length -= delta;
            let (parent, slot) = (node.parent, node.slot);
            let Some(parent) = parent else { return };
            self.branch_mut(parent).lengths.decrease_by(slot, delta);
            cur = parent;
        }
    }

    /// Set the capacity of `id`, carrying the difference to its ancestors.
    pub fn set_node_capacity(&mut self, id: NodeId, capacity: Index) {
        let old = self.node(id).capacity.clone();
        if capacity >= old {
            let delta = &capacity - &old;
            self.add_capacity(id, &delta);
        } else {
            let delta = &old - &capacity;
            self.sub_capacity(id, &delta);
        }
    }

    pub fn add_capacity(&mut self, id: NodeId, delta: &Index) {
        let mut cur = Some(id);
        while let Some(node) = cur {
            let node = self.node_mut(node);
            node.capacity += delta;
            cur = node.parent;
        }
    }

    pub fn sub_capacity(&mut self, id: NodeId, delta: &Index) {
        let mut cur = Some(id);
        while let Some(node) = cur {
            let node = self.node_mut(node);
            node.capacity -= delta;
            cur = node.parent;
        }
    }

    // =========================================================================
    // Child bookkeeping
    // =========================================================================

    /// Attach `child` after the last child of `parent`, counting its
    /// capacity and length into every ancestor.
    pub fn push_child(&mut self, parent: NodeId, child: NodeId) {
        let slot = self.branch(parent).children.len();
        let (length, capacity) = {
            let node = self.node_mut(child);
            node.parent = Some(parent);
            node.slot = slot;
            (node.length.clone(), node.capacity.clone())
        };
        let branch = self.branch_mut(parent);
        branch.children.push(child);
        branch.lengths.add(length.clone());
        self.add_capacity(parent, &capacity);
        self.add_length(parent, &length);
    }

    /// Detach and release the last child of `parent`.
    pub fn pop_child(&mut self, parent: NodeId) {
        let branch = self.branch_mut(parent);
        let Some(child) = branch.children.pop() else {
            panic!("branch {parent:?} has no children to pop");
        };
        let last = branch.lengths.len() - 1;
        branch.lengths.remove_at(last);
        let (length, capacity) = {
            let node = self.node(child);
            (node.length.clone(), node.capacity.clone())
        };
        self.sub_capacity(parent, &capacity);
        self.sub_length(parent, &length);
        self.release(child);
    }

    /// Replace the order of `parent`'s children. The new order must be a
    /// permutation of the old one.
    pub fn set_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        let lengths: Vec<Index> = children.iter().map(|&c| self.length(c).clone()).collect();
        for (slot, &child) in children.iter().enumerate() {
            self.node_mut(child).slot = slot;
        }
        let branch = self.branch_mut(parent);
        branch.children = children;
        branch.lengths = SumTable::from_values(lengths);
    }

    /// Move the child at `from` so that it ends up at position `to`.
    pub fn move_child(&mut self, parent: NodeId, from: usize, to: usize) {
        if from == to {
            return;
        }
        let mut children = self.branch(parent).children.clone();
        let child = children.remove(from);
        children.insert(to, child);
        self.set_children(parent, children);
    }

    /// Drop every element below `id`, keeping the shape and capacities.
    pub fn clear_subtree(&mut self, id: NodeId) {
        let length = self.length(id).clone();
        if length.is_zero() {
            return;
        }
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            if self.length(node).is_zero() {
                continue;
            }
            let entry = self.node_mut(node);
            entry.length = Index::zero();
            match &mut entry.kind {
                NodeKind::Leaf(leaf) => leaf.clear(),
                NodeKind::Branch(branch) => {
                    stack.extend(branch.children.iter().copied());
                    let count = branch.children.len();
                    branch.lengths = SumTable::from_values(vec![Index::zero(); count]);
                }
            }
        }
        // `id` itself is already zeroed; carry the removal to its ancestors.
        let node = self.node(id);
        if let Some(parent) = node.parent {
            let slot = node.slot;
            self.branch_mut(parent).lengths.decrease_by(slot, &length);
            self.sub_length(parent, &length);
        }
    }
}
