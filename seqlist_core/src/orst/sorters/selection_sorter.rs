use log::trace;

use crate::orst::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use seqlist_core::orst::{SelectionSorter, Sorter};
///
/// let mut slice = [6, 5, 4, 3, 2, 1];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5, 6]);
///```
/// # Explanation
///
/// The slice is split into a sorted prefix, initially empty, and the unsorted rest. Each pass
/// scans the rest for its smallest element and swaps it to the front of the rest, growing the
/// prefix by one. Only `<` is used to compare, so the first of several equal minimums wins.
///
/// Always O(n²) comparisons, but never more than n - 1 swaps. The order of equal elements is not
/// preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        trace!("selection sort over {} elements", slice.len());

        // The last element is in place once everything before it is.
        for front in 0..slice.len().saturating_sub(1) {
            let mut smallest = front;
            for candidate in (front + 1)..slice.len() {
                if slice[candidate] < slice[smallest] {
                    smallest = candidate;
                }
            }
            if smallest != front {
                slice.swap(front, smallest);
            }
        }
    }
}
