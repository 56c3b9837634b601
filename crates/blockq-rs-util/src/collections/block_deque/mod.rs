//! Double-ended queue made of fixed-size blocks.
//!
//! Elements live in blocks of [`BLOCK_LEN`] slots. Only the first and the last block may be
//! partially filled; every block in between is full. Memory is allocated once per
//! [`BLOCK_LEN`] pushes instead of once per element, and freed the same way on pops.
//!
//! ```
//! use blockq_rs_util::collections::block_deque::BlockDeque;
//!
//! let mut d = BlockDeque::new();
//! d.push_front("foo");
//! d.push_back("bar");
//! d.push_back("123");
//! assert_eq!(d.len(), 3);
//! assert_eq!(d.pop_front(), Some("foo"));
//! assert_eq!(d.pop_front(), Some("bar"));
//! assert_eq!(d.pop_back(), Some("123"));
//! assert_eq!(d.pop_back(), None);
//! assert_eq!(d.len(), 0);
//! ```

use alloc::collections::VecDeque;
use core::fmt::Debug;
use core::num::NonZeroUsize;

use block::{Block, BLOCK_CENTER};

pub use block::BLOCK_LEN;
pub use iter::{IntoIter, Iter, IterMut};

mod block;
mod iter;

#[cfg(feature = "serde")]
mod ser_de;

/// Double-ended queue with optional maximum length.
///
/// A bounded deque behaves like a sliding window: once it holds `max_len` elements, every push
/// silently drops one element from the opposite end.
///
/// The deque does no internal locking. To share it between threads, put it behind a lock such
/// as `Mutex<BlockDeque<T>>` and hold the lock for every call, traversals included.
pub struct BlockDeque<T> {
    /// blocks in front-to-back order, never empty
    blocks: VecDeque<Block<T>>,

    /// first occupied slot of the front block
    front_idx: usize,

    /// last occupied slot of the back block
    back_idx: usize,

    /// number of stored elements
    len: usize,

    /// upper bound for `len`, unbounded if `None`
    max_len: Option<NonZeroUsize>,
}

impl<T> BlockDeque<T> {
    /// Create an empty, unbounded deque
    pub fn new() -> Self {
        Self::with_max_len(0)
    }

    /// Create an empty deque that holds at most `max_len` elements.
    ///
    /// A `max_len` of zero means there is no limit. Pushing onto a full deque drops an element
    /// from the opposite end.
    pub fn with_max_len(max_len: usize) -> Self {
        let mut blocks = VecDeque::with_capacity(1);
        blocks.push_back(Block::new());
        let mut deque = Self {
            blocks,
            front_idx: 0,
            back_idx: 0,
            len: 0,
            max_len: NonZeroUsize::new(max_len),
        };
        deque.recenter();
        deque
    }

    /// Cross the cursors in the middle of the sole block, so that the first push on either
    /// side points both cursors at the same slot.
    fn recenter(&mut self) {
        debug_assert_eq!(self.blocks.len(), 1);
        self.front_idx = BLOCK_CENTER + 1;
        self.back_idx = BLOCK_CENTER;
    }

    fn over_limit(&self) -> bool {
        matches!(self.max_len, Some(max) if self.len > max.get())
    }

    /// Number of elements in the deque
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The maximum length this deque was created with, if any
    pub fn max_len(&self) -> Option<usize> {
        self.max_len.map(NonZeroUsize::get)
    }

    /// Check if the deque is bounded and holds `max_len` elements
    pub fn is_full(&self) -> bool {
        matches!(self.max_len, Some(max) if self.len >= max.get())
    }

    /// Add an item to the back of the deque.
    ///
    /// If the deque is bounded and already full, the front element is dropped.
    pub fn push_back(&mut self, item: T) {
        if self.back_idx == BLOCK_LEN - 1 {
            tracing::trace!(blocks = self.blocks.len() + 1, "allocate back block");
            self.blocks.push_back(Block::new());
            self.back_idx = 0;
        } else {
            self.back_idx += 1;
        }

        if let Some(block) = self.blocks.back_mut() {
            block[self.back_idx] = Some(item);
        }
        self.len += 1;

        if self.over_limit() {
            tracing::trace!(len = self.len, "evict front element");
            drop(self.pop_front());
        }
    }

    /// Add an item to the front of the deque.
    ///
    /// If the deque is bounded and already full, the back element is dropped.
    pub fn push_front(&mut self, item: T) {
        if self.front_idx == 0 {
            tracing::trace!(blocks = self.blocks.len() + 1, "allocate front block");
            self.blocks.push_front(Block::new());
            self.front_idx = BLOCK_LEN - 1;
        } else {
            self.front_idx -= 1;
        }

        if let Some(block) = self.blocks.front_mut() {
            block[self.front_idx] = Some(item);
        }
        self.len += 1;

        if self.over_limit() {
            tracing::trace!(len = self.len, "evict back element");
            drop(self.pop_back());
        }
    }

    /// Remove the last element and return it, or `None` if the deque is empty
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let item = self.blocks.back_mut()?[self.back_idx].take();
        self.len -= 1;

        if self.len == 0 {
            tracing::trace!("deque drained, recenter");
            self.recenter();
        } else if self.back_idx == 0 {
            // the back block is empty now
            drop(self.blocks.pop_back());
            tracing::trace!(blocks = self.blocks.len(), "free back block");
            self.back_idx = BLOCK_LEN - 1;
        } else {
            self.back_idx -= 1;
        }

        item
    }

    /// Remove the first element and return it, or `None` if the deque is empty
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let item = self.blocks.front_mut()?[self.front_idx].take();
        self.len -= 1;

        if self.len == 0 {
            tracing::trace!("deque drained, recenter");
            self.recenter();
        } else if self.front_idx == BLOCK_LEN - 1 {
            // the front block is empty now
            drop(self.blocks.pop_front());
            tracing::trace!(blocks = self.blocks.len(), "free front block");
            self.front_idx = 0;
        } else {
            self.front_idx += 1;
        }

        item
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Block number and slot of the element at `index`, counted from the front
    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.len).then(|| {
            let pos = self.front_idx + index;
            (pos / BLOCK_LEN, pos % BLOCK_LEN)
        })
    }

    /// Element at `index`, where index 0 is the front
    pub fn get(&self, index: usize) -> Option<&T> {
        let (block, slot) = self.locate(index)?;
        self.blocks[block][slot].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let (block, slot) = self.locate(index)?;
        self.blocks[block][slot].as_mut()
    }

    /// Drop all elements, keeping a single empty block
    pub fn clear(&mut self) {
        self.blocks.truncate(1);
        if let Some(block) = self.blocks.front_mut() {
            block.clear();
        }
        self.len = 0;
        self.recenter();
    }

    /// Call `visit` with every element, front to back.
    ///
    /// Every call walks the deque again from the front. The deque stays borrowed for the whole
    /// traversal, so it cannot be modified while `visit` runs.
    pub fn each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit)
    }

    /// Front-to-back iterator over the elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.blocks, self.front_idx, self.len)
    }

    /// Front-to-back iterator that allows modifying each element
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.blocks, self.front_idx, self.len)
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert!(!self.blocks.is_empty(), "block sequence must never be empty");
        if self.len == 0 {
            assert_eq!(self.blocks.len(), 1, "empty deque must hold exactly one block");
            assert_eq!(self.front_idx, BLOCK_CENTER + 1, "empty deque must be recentred");
            assert_eq!(self.back_idx, BLOCK_CENTER, "empty deque must be recentred");
        } else {
            assert!(self.front_idx < BLOCK_LEN, "front cursor out of range");
            assert!(self.back_idx < BLOCK_LEN, "back cursor out of range");
        }
        let last = self.blocks.len() - 1;
        for (n, block) in self.blocks.iter().enumerate() {
            if n != 0 && n != last {
                assert_eq!(block.occupied(), BLOCK_LEN, "interior block {n} is not full");
            }
        }
        assert_eq!(
            self.len,
            last * BLOCK_LEN + self.back_idx + 1 - self.front_idx,
            "length does not match the cursors"
        );
        let occupied: usize = self.blocks.iter().map(Block::occupied).sum();
        assert_eq!(self.len, occupied, "length does not match the occupied slots");
        if let Some(max) = self.max_len {
            assert!(self.len <= max.get(), "bounded deque exceeds its maximum length");
        }
    }
}

impl<T> Default for BlockDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BlockDeque<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for BlockDeque<T> {
    fn clone(&self) -> Self {
        let mut deque = Self::with_max_len(self.max_len().unwrap_or(0));
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T: PartialEq> PartialEq for BlockDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BlockDeque<T> {}

impl<T> Extend<T> for BlockDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item))
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for BlockDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for BlockDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> IntoIterator for BlockDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a BlockDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BlockDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
