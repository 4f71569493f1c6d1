//! The `List` abstract data type and its two backings.
//!
//! Both [`ArrayList`] and [`LinkedList`] own their storage outright and share nothing but the
//! [`List`] contract, so code written against the trait runs unchanged on either one.
//!
//! # Example
//!
//! ```
//! use seqlist_core::{ArrayList, LinkedList, List};
//!
//! fn fill<L: List<i32>>(list: &mut L) {
//!     for value in [30, 10, 20] {
//!         list.add(value).unwrap();
//!     }
//! }
//!
//! let mut array = ArrayList::new();
//! let mut linked = LinkedList::new();
//! fill(&mut array);
//! fill(&mut linked);
//!
//! array.quick_sort();
//! linked.quick_sort();
//! assert!(array.iter().eq(linked.iter()));
//! ```

pub mod array_list;
pub mod linked_list;

pub use array_list::ArrayList;
pub use linked_list::LinkedList;

use crate::error::Result;

/// An ordered, index-addressed sequence.
///
/// Every fallible operation reports [`ListError::InvalidIndex`](crate::ListError::InvalidIndex)
/// without touching the list when the index is out of range. Sorting methods rearrange the
/// occupied elements in place into non-decreasing order and never change [`size`](List::size).
pub trait List<T> {
    /// Appends `item` at the end of the list.
    ///
    /// Only fails when the list could not make room for the new element.
    fn add(&mut self, item: T) -> Result<()>;

    /// Inserts `item` at `index`, shifting everything from `index` onwards one place towards the
    /// end. `index == size()` appends.
    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Overwrites the element at `index`.
    fn set(&mut self, index: usize, item: T) -> Result<()>;

    /// Removes and returns the element at `index`, closing the gap it leaves.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Number of elements in the list.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterates over the elements in sequence order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    fn selection_sort(&mut self)
    where
        T: Ord;

    fn insertion_sort(&mut self)
    where
        T: Ord;

    fn merge_sort(&mut self)
    where
        T: Ord + Clone;

    fn quick_sort(&mut self)
    where
        T: Ord;
}
