use log::trace;

use crate::orst::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort grows a sorted prefix one element at a time. The first element not yet in the
/// prefix is moved left past every neighbour it compares less than, which leaves it just after
/// the last element it is not smaller than. Equal elements never pass each other, so the sort is
/// stable.
///
/// Already sorted input costs a single comparison per element; reversed input is the O(n²) worst
/// case.
///
/// With `smart` set, the insertion point is found by binary search over the prefix and the run is
/// rotated into place in one go instead of being swapped pairwise. That cuts comparisons to
/// O(n log n), though elements still move O(n²) times in the worst case.
///
/// # Usage
///```
/// use seqlist_core::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter { smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        trace!(
            "insertion sort over {} elements (smart: {})",
            slice.len(),
            self.smart
        );

        for unsorted in 1..slice.len() {
            if self.smart {
                let slot = slice[..unsorted].partition_point(|probe| probe <= &slice[unsorted]);
                slice[slot..=unsorted].rotate_right(1);
            } else {
                let mut i = unsorted;
                while i > 0 && slice[i] < slice[i - 1] {
                    slice.swap(i - 1, i);
                    i -= 1;
                }
            }
        }
    }
}
