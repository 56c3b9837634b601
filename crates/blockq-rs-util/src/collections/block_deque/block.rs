use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::{Deref, DerefMut};

/// Number of element slots in every block.
///
/// Larger blocks mean fewer allocations per element but more unused memory in the edge blocks.
pub const BLOCK_LEN: usize = 64;

/// Slot index the cursors are recentred around when the deque runs empty
pub(crate) const BLOCK_CENTER: usize = (BLOCK_LEN - 1) / 2;

const _: () = assert!(BLOCK_LEN > 1, "a block must hold at least two elements");

/// Fixed-size run of element slots. Empty slots hold `None`.
pub(crate) struct Block<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Block<T> {
    pub fn new() -> Self {
        let mut slots = Vec::<Option<T>>::with_capacity(BLOCK_LEN);
        slots.resize_with(BLOCK_LEN, || None);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Number of occupied slots
    #[cfg(test)]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Drop every element still stored in this block
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            drop(slot.take())
        }
    }
}

impl<T: Debug> Debug for Block<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.slots.fmt(f)
    }
}

impl<T> Deref for Block<T> {
    type Target = [Option<T>];
    fn deref(&self) -> &Self::Target {
        &self.slots
    }
}

impl<T> DerefMut for Block<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.slots
    }
}

impl<'a, T> IntoIterator for &'a mut Block<T> {
    type Item = &'a mut Option<T>;
    type IntoIter = core::slice::IterMut<'a, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter_mut()
    }
}

#[test]
fn test() {
    let mut block = Block::<u32>::new();
    assert_eq!(block.len(), BLOCK_LEN);
    assert_eq!(block.occupied(), 0);
    block[BLOCK_CENTER] = Some(7);
    block[0] = Some(1);
    assert_eq!(block.occupied(), 2);
    block.clear();
    for slot in block.iter() {
        assert!(slot.is_none());
    }
}
