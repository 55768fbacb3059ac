// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Borrowing iterator over a [`BigList`].

use std::iter::FusedIterator;

use num_traits::ToPrimitive;

use super::BigList;
use crate::index::Index;
use crate::leaf::{DequeLeaf, Leaf};

/// Iterator over `&T`, resolving each position through the list's access
/// cache. Both ends may be advanced. A new one can always be started with
/// [`BigList::iter`].
pub struct Iter<'a, T, L = DequeLeaf<T>> {
    list: &'a BigList<T, L>,
    front: Index,
    back: Index,
}

impl<'a, T: Clone, L: Leaf<T>> Iter<'a, T, L> {
    pub(crate) fn new(list: &'a BigList<T, L>) -> Iter<'a, T, L> {
        return Iter {
            list,
            front: Index::default(),
            back: list.len(),
        };
    }

    /// Iterator over `list[front..back]`. The range must already be checked.
    pub(crate) fn over(list: &'a BigList<T, L>, front: Index, back: Index) -> Iter<'a, T, L> {
        return Iter { list, front, back };
    }

    /// Elements not yet yielded.
    pub fn remaining(&self) -> Index {
        return &self.back - &self.front;
    }
}

impl<'a, T: Clone, L: Leaf<T>> Iterator for Iter<'a, T, L> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.list.item(&self.front);
        self.front += 1u32;
        return Some(item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().to_usize() {
            Some(n) => return (n, Some(n)),
            None => return (usize::MAX, None),
        }
    }
}

impl<'a, T: Clone, L: Leaf<T>> DoubleEndedIterator for Iter<'a, T, L> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1u32;
        return Some(self.list.item(&self.back));
    }
}

impl<'a, T: Clone, L: Leaf<T>> FusedIterator for Iter<'a, T, L> {}

impl<'a, T: Clone, L: Leaf<T>> IntoIterator for &'a BigList<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, L>;

    fn into_iter(self) -> Iter<'a, T, L> {
        return self.iter();
    }
}
