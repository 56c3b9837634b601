use alloc::collections::{vec_deque, VecDeque};
use core::iter::{Flatten, FusedIterator, Skip};

use super::block::{Block, BLOCK_LEN};
use super::BlockDeque;

/// Borrowing iterator over the elements of a [`BlockDeque`]
pub struct Iter<'a, T> {
    blocks: &'a VecDeque<Block<T>>,

    /// position of the next front element, counted from slot 0 of the first block
    head: usize,

    /// position one past the next back element
    tail: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(blocks: &'a VecDeque<Block<T>>, front_idx: usize, len: usize) -> Self {
        Self {
            blocks,
            head: front_idx,
            tail: front_idx + len,
        }
    }

    fn slot(&self, pos: usize) -> Option<&'a T> {
        self.blocks[pos / BLOCK_LEN][pos % BLOCK_LEN].as_ref()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let pos = self.head;
        self.head += 1;
        self.slot(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        self.slot(self.tail)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over the elements of a [`BlockDeque`]
pub struct IterMut<'a, T> {
    slots: Skip<Flatten<vec_deque::IterMut<'a, Block<T>>>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(blocks: &'a mut VecDeque<Block<T>>, front_idx: usize, len: usize) -> Self {
        Self {
            slots: blocks.iter_mut().flatten().skip(front_idx),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.slots.next()?.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a [`BlockDeque`]
pub struct IntoIter<T> {
    deque: BlockDeque<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(deque: BlockDeque<T>) -> Self {
        Self { deque }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
