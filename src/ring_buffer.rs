//! Fixed-capacity ring buffer
//!
//! Never grows: once every slot has been written, `add` overwrites the oldest
//! slot. Removal swaps the target with the slot just behind the write cursor,
//! so relative order is not kept. The buffer tracks only its write position,
//! not which slots are live; callers keep that bookkeeping themselves.

use std::ops::{Index, IndexMut};

/// Circular buffer of `N` slots with a wrapping write cursor
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRingBuffer<T, const N: usize> {
    slots: [T; N],
    /// Next slot `add` writes to, always in `0..N`
    cursor: usize,
}

impl<T: Default, const N: usize> FixedRingBuffer<T, N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "FixedRingBuffer needs at least one slot") };
        Self {
            slots: std::array::from_fn(|_| T::default()),
            cursor: 0,
        }
    }
}

impl<T: Default, const N: usize> Default for FixedRingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> FixedRingBuffer<T, N> {
    /// Buffer with every slot set to `value`
    pub fn filled(value: T) -> Self {
        const { assert!(N > 0, "FixedRingBuffer needs at least one slot") };
        Self {
            slots: std::array::from_fn(|_| value.clone()),
            cursor: 0,
        }
    }
}

impl<T, const N: usize> FixedRingBuffer<T, N> {
    /// Write `item` at the cursor and advance it, wrapping at `N`
    pub fn add(&mut self, item: T) {
        self.slots[self.cursor] = item;
        self.cursor = (self.cursor + 1) % N;
    }

    /// Swap-remove: step the cursor back one slot (wrapping from 0 to `N - 1`)
    /// and exchange `index` with the slot it now points at.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Indices inside the buffer but past the live
    /// region are not detected.
    pub fn remove(&mut self, index: usize) {
        check_bounds(index, N);
        self.cursor = self.cursor.checked_sub(1).unwrap_or(N - 1);
        self.slots.swap(index, self.cursor);
    }

    /// Slot count. Constant, independent of how many items were added.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current write position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Slots in storage order (not insertion order)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<T, const N: usize> Index<usize> for FixedRingBuffer<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        check_bounds(index, N);
        &self.slots[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedRingBuffer<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        check_bounds(index, N);
        &mut self.slots[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedRingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[inline]
fn check_bounds(index: usize, len: usize) {
    if index >= len {
        panic!("ring buffer index {index} out of range for capacity {len}");
    }
}
