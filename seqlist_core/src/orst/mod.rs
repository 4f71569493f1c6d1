//! In-place sorting algorithms over the occupied region of a list.
//!
//! Every sorter works on a plain slice through the [`Sorter`] trait, which is how
//! [`ArrayList`](crate::ArrayList) runs them over its live elements. The
//! [`LinkedList`](crate::LinkedList) runs the same four algorithms natively over its nodes. Use
//! [`Algorithm`] to pick one by name for either backing.
//!
//! # Example
//!
//! ```
//! use seqlist_core::orst::{MergeSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! MergeSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```

pub mod benchmark;
mod sorters;

pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::{Pivot, QuickSorter};
pub use sorters::selection_sorter::SelectionSorter;

use clap::ValueEnum;

use crate::List;

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// The four sorting strategies every [`List`] provides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Algorithm {
    /// Repeatedly select the smallest remaining element
    Selection,

    /// Grow a sorted prefix one element at a time
    Insertion,

    /// Split in halves, sort each, merge
    Merge,

    /// Partition around the first element and recurse
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Sorts `list` in place with this algorithm.
    ///
    /// ```
    /// use seqlist_core::orst::Algorithm;
    /// use seqlist_core::{LinkedList, List};
    ///
    /// let mut list: LinkedList<_> = [3, 1, 2].into_iter().collect();
    /// Algorithm::Insertion.apply(&mut list);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn apply<T, L>(self, list: &mut L)
    where
        T: Ord + Clone,
        L: List<T>,
    {
        match self {
            Algorithm::Selection => list.selection_sort(),
            Algorithm::Insertion => list.insertion_sort(),
            Algorithm::Merge => list.merge_sort(),
            Algorithm::Quick => list.quick_sort(),
        }
    }

    /// Quadratic algorithms are impractical on large inputs.
    pub fn is_quadratic(self) -> bool {
        matches!(self, Algorithm::Selection | Algorithm::Insertion)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }
}
