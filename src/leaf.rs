// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Leaf storage.
//!
//! A leaf is a bounded element buffer. The tree never asks a leaf to hold
//! more than `LeafSize` elements; the buffer itself grows by amortized
//! doubling and is allocated lazily, so empty leaves reserved by capacity
//! growth cost no element storage.
//!
//! All offsets are physical. The tree maps logical offsets through the
//! node's reversal flag before calling in, which is why the contract can
//! grow and shrink a leaf from either end.

use std::collections::VecDeque;

/// The operations the tree needs from a leaf buffer.
pub trait Leaf<T: Clone>: Clone + Default {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    fn get(&self, index: usize) -> Option<&T>;

    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Replace the element at `index`, returning the old one.
    fn set(&mut self, index: usize, value: T) -> T;

    fn insert(&mut self, index: usize, value: T);

    /// Insert `values` so that `values[0]` lands at `index`.
    fn insert_many(&mut self, index: usize, values: Vec<T>);

    fn remove_at(&mut self, index: usize) -> T;

    fn remove_range(&mut self, index: usize, count: usize);

    /// Grow or shrink at the back.
    fn resize(&mut self, new_len: usize, value: T);

    /// Grow or shrink at the front.
    fn resize_left(&mut self, new_len: usize, value: T);

    /// Append `values` after the last element.
    fn extend_back(&mut self, values: Vec<T>);

    /// Prepend `values` before the first element, keeping their order.
    fn extend_front(&mut self, values: Vec<T>);

    /// Reverse `count` elements starting at `index` in place.
    fn reverse(&mut self, index: usize, count: usize);

    /// Overwrite `dest[dest_index..dest_index + count]` with clones of
    /// `self[index..index + count]`.
    fn copy_range_to(&self, index: usize, dest: &mut Self, dest_index: usize, count: usize);

    /// Overlap-safe copy inside one leaf.
    fn copy_within(&mut self, src: usize, dst: usize, count: usize);

    fn shrink_to(&mut self, capacity: usize);

    fn clear(&mut self);
}

/// Default leaf backed by a ring buffer, so growing at the front is as
/// cheap as growing at the back.
#[derive(Clone, Debug)]
pub struct DequeLeaf<T> {
    items: VecDeque<T>,
}

impl<T> Default for DequeLeaf<T> {
    fn default() -> Self {
        return DequeLeaf {
            items: VecDeque::new(),
        };
    }
}

impl<T: Clone> Leaf<T> for DequeLeaf<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        return self.items.len();
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        return self.items.get(index);
    }

    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        return self.items.get_mut(index);
    }

    fn set(&mut self, index: usize, value: T) -> T {
        return std::mem::replace(&mut self.items[index], value);
    }

    fn insert(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
    }

    fn insert_many(&mut self, index: usize, values: Vec<T>) {
        if index == 0 {
            self.extend_front(values);
            return;
        }
        let tail = self.items.split_off(index);
        self.items.extend(values);
        self.items.extend(tail);
    }

    fn remove_at(&mut self, index: usize) -> T {
        match self.items.remove(index) {
            Some(value) => return value,
            None => panic!("leaf remove at {index} with length {}", self.items.len()),
        }
    }

    fn remove_range(&mut self, index: usize, count: usize) {
        self.items.drain(index..index + count);
    }

    fn resize(&mut self, new_len: usize, value: T) {
        self.items.resize(new_len, value);
    }

    fn resize_left(&mut self, new_len: usize, value: T) {
        let len = self.items.len();
        if new_len <= len {
            self.items.drain(..len - new_len);
            return;
        }
        for _ in len..new_len {
            self.items.push_front(value.clone());
        }
    }

    fn extend_back(&mut self, values: Vec<T>) {
        self.items.extend(values);
    }

    fn extend_front(&mut self, values: Vec<T>) {
        self.items.reserve(values.len());
        for value in values.into_iter().rev() {
            self.items.push_front(value);
        }
    }

    fn reverse(&mut self, index: usize, count: usize) {
        let (mut lo, mut hi) = (index, index + count);
        while lo + 1 < hi {
            hi -= 1;
            self.items.swap(lo, hi);
            lo += 1;
        }
    }

    fn copy_range_to(&self, index: usize, dest: &mut Self, dest_index: usize, count: usize) {
        for k in 0..count {
            dest.items[dest_index + k].clone_from(&self.items[index + k]);
        }
    }

    fn copy_within(&mut self, src: usize, dst: usize, count: usize) {
        if src == dst {
            return;
        }
        if dst > src {
            for k in (0..count).rev() {
                let value = self.items[src + k].clone();
                self.items[dst + k] = value;
            }
        } else {
            for k in 0..count {
                let value = self.items[src + k].clone();
                self.items[dst + k] = value;
            }
        }
    }

    fn shrink_to(&mut self, capacity: usize) {
        self.items.shrink_to(capacity);
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
