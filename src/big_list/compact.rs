// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Packing a branch's elements into its leading children.
//!
//! Removals leave gaps: empty or short children anywhere in a branch.
//! Reads skip them through the length table, so they are only cleaned up
//! when a structural change needs contiguous room.

use num_traits::Zero;
use tracing::trace;

use super::arena::{Arena, NodeId};
use super::engine::{Engine, Task};
use crate::index::{self, Index};
use crate::leaf::Leaf;

impl<T: Clone, L: Leaf<T>> Arena<T, L> {
    /// Move elements toward the front of branch `id` until every child
    /// before the last non-empty one is full. The child order and the
    /// branch's content are unchanged. Returns how many elements moved.
    pub(crate) fn compact(&mut self, id: NodeId) -> Index {
        let mut moved = Index::zero();
        if self.is_leaf(id) {
            return moved;
        }
        let children = self.branch(id).children.clone();
        let mut w = 0;
        let mut r = 0;
        loop {
            while w < children.len() && self.length(children[w]) == self.capacity(children[w]) {
                w += 1;
            }
            r = r.max(w + 1);
            while r < children.len() && self.length(children[r]).is_zero() {
                r += 1;
            }
            if r >= children.len() {
                break;
            }
            let room = self.capacity(children[w]) - self.length(children[w]);
            let amount = index::min(&room, self.length(children[r])).clone();
            Engine::within(self).run(Task::Extend {
                src: Some((children[r], Index::zero())),
                flip: false,
                dst: children[w],
                count: amount.clone(),
            });
            Engine::within(self).run(Task::Trim {
                node: children[r],
                index: Index::zero(),
                count: amount.clone(),
            });
            moved += amount;
        }
        if !moved.is_zero() {
            trace!(moved = %moved, "compacted branch");
        }
        return moved;
    }

    /// Move empty children of branch `id` behind the non-empty ones,
    /// keeping a short last child in place. If that short child still holds
    /// elements, they move into the first empty full-size child so the
    /// tail of the branch is free.
    pub(crate) fn rotate_empty_children(&mut self, id: NodeId) {
        if self.is_leaf(id) {
            return;
        }
        let fragment = self.fragment(id).clone();
        let mut children = self.branch(id).children.clone();
        let tail = match children.last() {
            Some(&last) if *self.capacity(last) < fragment => children.pop(),
            _ => None,
        };

        let sorted = {
            let mut seen_empty = false;
            children.iter().all(|&c| {
                let empty = self.length(c).is_zero();
                let ok = empty || !seen_empty;
                seen_empty |= empty;
                ok
            })
        };
        if !sorted {
            let (mut body, empty): (Vec<NodeId>, Vec<NodeId>) =
                children.iter().copied().partition(|&c| !self.length(c).is_zero());
            body.extend(empty);
            children = body;
        }
        let spare = children.iter().copied().find(|&c| self.length(c).is_zero());
        if let Some(last) = tail {
            children.push(last);
        }
        if !sorted {
            self.set_children(id, children);
        }

        let (Some(last), Some(spare)) = (tail, spare) else {
            return;
        };
        let count = self.length(last).clone();
        if count.is_zero() {
            return;
        }
        Engine::within(self).run(Task::Extend {
            src: Some((last, Index::zero())),
            flip: false,
            dst: spare,
            count: count.clone(),
        });
        Engine::within(self).run(Task::Trim {
            node: last,
            index: Index::zero(),
            count,
        });
    }
}
