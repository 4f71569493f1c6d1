//! A [`List`] backed by a resizable contiguous buffer.
//!
//! # Example
//!
//! ```
//! use seqlist_core::{ArrayList, List, ListError};
//!
//! let mut list = ArrayList::new();
//! for value in [10, 20, 30, 40] {
//!     list.add(value)?;
//! }
//!
//! assert_eq!(list.remove(1)?, 20);
//! assert_eq!(list.as_slice(), [10, 30, 40]);
//! assert_eq!(
//!     list.get(3),
//!     Err(ListError::InvalidIndex { index: 3, len: 3 })
//! );
//! # Ok::<(), ListError>(())
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::orst::{InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, Sorter};
use crate::List;

/// Number of slots a list created with [`ArrayList::new`] starts out with.
pub const DEFAULT_CAPACITY: usize = 10;

/// An ordered sequence stored in one contiguous buffer.
///
/// The buffer holds `capacity` slots of which the first [`size`](List::size) are live. When an
/// insertion finds every slot taken, a buffer of twice the capacity is allocated, the live
/// elements are moved across in order and the old buffer is released. The capacity never
/// shrinks.
///
/// Cloning copies exactly the live elements into a fresh buffer, so a clone and its source never
/// observe each other's changes.
pub struct ArrayList<T> {
    // Live elements, in order. `items.len()` is the list length.
    items: Vec<T>,
    // Slots the list may fill before it has to grow.
    capacity: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements. A capacity of zero is raised to
    /// one so that doubling always makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the live elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Sorts the live elements in place with any [`Sorter`].
    ///
    /// ```
    /// use seqlist_core::orst::{Pivot, QuickSorter};
    /// use seqlist_core::ArrayList;
    ///
    /// let mut list: ArrayList<_> = (1..=10).rev().collect();
    /// list.sort_with(&QuickSorter { pivot: Pivot::Random });
    /// assert_eq!(list.as_slice(), (1..=10).collect::<Vec<_>>());
    /// ```
    pub fn sort_with<S>(&mut self, sorter: &S)
    where
        T: Ord,
        S: Sorter<T>,
    {
        sorter.sort(&mut self.items);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::InvalidIndex {
                index,
                len: self.items.len(),
            })
        }
    }

    // Makes sure one more element fits, growing the buffer when every slot is taken.
    fn reserve_one(&mut self) -> Result<()> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let requested = self
            .capacity
            .checked_mul(2)
            .ok_or(ListError::AllocationFailure {
                requested: usize::MAX,
            })?;

        let mut items = Vec::new();
        items
            .try_reserve_exact(requested)
            .map_err(|_| ListError::AllocationFailure { requested })?;
        items.append(&mut self.items);

        debug!(
            "grew array list from {} to {} slots ({} live)",
            self.capacity,
            requested,
            items.len()
        );

        self.items = items;
        self.capacity = requested;
        Ok(())
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add(&mut self, item: T) -> Result<()> {
        self.reserve_one()?;
        self.items.push(item);
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.items.len() {
            return Err(ListError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        self.reserve_one()?;
        self.items.insert(index, item);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    fn set(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(index)?;
        self.items[index] = item;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        // Shifts exactly `index + 1..len` one slot to the left.
        Ok(self.items.remove(index))
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.items.iter()
    }

    fn selection_sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(&SelectionSorter);
    }

    fn insertion_sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(&InsertionSorter { smart: false });
    }

    fn merge_sort(&mut self)
    where
        T: Ord + Clone,
    {
        self.sort_with(&MergeSorter);
    }

    fn quick_sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(&QuickSorter::default());
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }

    // Assignment: the destination keeps its own buffer when it is large enough, and its capacity
    // never goes down.
    fn clone_from(&mut self, source: &Self) {
        trace!(
            "assigning {} elements into an array list of capacity {}",
            source.items.len(),
            self.capacity
        );
        self.items.clone_from(&source.items);
        self.capacity = self.capacity.max(source.capacity);
        self.items.reserve_exact(self.capacity - self.items.len());
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let capacity = items.len().max(DEFAULT_CAPACITY);
        let mut list = Self { items, capacity };
        list.items.reserve_exact(capacity - list.items.len());
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_default_capacity() {
        let list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.size(), 0);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut list = ArrayList::with_capacity(0);
        assert_eq!(list.capacity(), 1);
        list.add('a').unwrap();
        list.add('b').unwrap();
        assert_eq!(list.capacity(), 2);
        assert_eq!(list.as_slice(), ['a', 'b']);
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut list = ArrayList::new();
        for i in 0..DEFAULT_CAPACITY {
            list.add(i).unwrap();
        }
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);

        list.add(DEFAULT_CAPACITY).unwrap();
        assert_eq!(list.capacity(), 2 * DEFAULT_CAPACITY);

        for i in list.size()..=(2 * DEFAULT_CAPACITY) {
            list.add(i).unwrap();
        }
        assert_eq!(list.capacity(), 4 * DEFAULT_CAPACITY);
        assert_eq!(
            list.as_slice(),
            (0..=2 * DEFAULT_CAPACITY).collect::<Vec<_>>()
        );
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut list: ArrayList<_> = (0..25).collect();
        let capacity = list.capacity();
        while !list.is_empty() {
            list.remove(0).unwrap();
        }
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn doubling_past_usize_max_fails() {
        let capacity = usize::MAX / 2 + 1;
        let mut list = ArrayList {
            items: vec![0u64],
            capacity,
        };
        assert_eq!(
            list.grow(),
            Err(ListError::AllocationFailure {
                requested: usize::MAX
            })
        );
        assert_eq!(list.capacity(), capacity);
        assert_eq!(list.as_slice(), [0]);
    }

    #[test]
    fn unreservable_buffer_fails() {
        let capacity = usize::MAX / 4;
        let mut list = ArrayList {
            items: vec![1u64, 2],
            capacity,
        };
        assert_eq!(
            list.grow(),
            Err(ListError::AllocationFailure {
                requested: capacity * 2
            })
        );
        assert_eq!(list.capacity(), capacity);
        assert_eq!(list.as_slice(), [1, 2]);
    }

    #[test]
    fn failed_insert_does_not_grow() {
        let mut list: ArrayList<_> = (0..DEFAULT_CAPACITY).collect();
        assert_eq!(
            list.insert(DEFAULT_CAPACITY + 1, 99),
            Err(ListError::InvalidIndex {
                index: DEFAULT_CAPACITY + 1,
                len: DEFAULT_CAPACITY
            })
        );
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert_eq!(list.size(), DEFAULT_CAPACITY);
    }

    #[test]
    fn insert_at_full_capacity() {
        let mut list: ArrayList<_> = (0..DEFAULT_CAPACITY).collect();
        list.insert(0, 100).unwrap();
        assert_eq!(list.capacity(), 2 * DEFAULT_CAPACITY);
        assert_eq!(list.get(0), Ok(&100));
        assert_eq!(list.get(DEFAULT_CAPACITY), Ok(&(DEFAULT_CAPACITY - 1)));
    }

    #[test]
    fn remove_last_index() {
        let mut list: ArrayList<_> = (0..DEFAULT_CAPACITY).collect();
        assert_eq!(list.remove(DEFAULT_CAPACITY - 1), Ok(DEFAULT_CAPACITY - 1));
        assert_eq!(list.size(), DEFAULT_CAPACITY - 1);
        assert_eq!(list.as_slice(), (0..DEFAULT_CAPACITY - 1).collect::<Vec<_>>());
    }

    #[test]
    fn clone_keeps_capacity() {
        let list: ArrayList<_> = (0..30).collect();
        let copy = list.clone();
        assert_eq!(copy.capacity(), list.capacity());
        assert_eq!(copy, list);
    }

    #[test]
    fn clone_from_never_shrinks_destination() {
        let mut big: ArrayList<_> = (0..50).collect();
        let small: ArrayList<_> = (0..3).collect();
        let capacity = big.capacity();

        big.clone_from(&small);
        assert_eq!(big, small);
        assert_eq!(big.capacity(), capacity);

        let mut tiny = ArrayList::with_capacity(1);
        tiny.add(7).unwrap();
        tiny.clone_from(&big);
        assert_eq!(tiny.capacity(), capacity);
        assert_eq!(tiny.as_slice(), [0, 1, 2]);
    }

    #[test]
    fn debug_lists_live_elements() {
        let list: ArrayList<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[3, 1, 2]");
    }

    #[test]
    fn sort_with_smart_insertion() {
        let mut list: ArrayList<_> = [5, 3, 9, 1, 3].into_iter().collect();
        list.sort_with(&InsertionSorter { smart: true });
        assert_eq!(list.as_slice(), [1, 3, 3, 5, 9]);
    }
}
