use log::trace;

use crate::orst::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use seqlist_core::orst::{MergeSorter, Sorter};
///
/// let mut slice = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
///```
///
/// # Algorithm
///
/// Merge sort is a divide-and-conquer algorithm. The range `[start, end]` is split at
/// `mid = (start + end) / 2`, both halves are sorted recursively, and the two sorted runs are
/// merged by repeatedly taking the smaller of their front elements. When the fronts are equal the
/// left run goes first, which makes the sort stable.
///
/// Merging needs auxiliary space. A single scratch buffer the size of the whole slice is
/// allocated once per call to [`sort`](Sorter::sort) and shared by every merge, so the sort
/// performs one allocation instead of one per merge. Elements are cloned into the scratch buffer
/// and back, hence the `T: Clone` bound.
///
/// O(n log n) time in every case, O(n) extra space.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

fn merge_sort<T: Ord + Clone>(slice: &mut [T], scratch: &mut Vec<T>) {
    if slice.len() < 2 {
        return;
    }

    // Left run is `[start, mid]` inclusive, i.e. it takes the middle element on odd lengths.
    let mid = (slice.len() + 1) / 2;
    let (left, right) = slice.split_at_mut(mid);
    merge_sort(left, scratch);
    merge_sort(right, scratch);
    merge(left, right, scratch);

    slice.clone_from_slice(scratch.as_slice());
}

// Leaves the merged run of `left` and `right` in `scratch`.
fn merge<T: Ord + Clone>(left: &[T], right: &[T], scratch: &mut Vec<T>) {
    scratch.clear();

    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            scratch.push(left[l].clone());
            l += 1;
        } else {
            scratch.push(right[r].clone());
            r += 1;
        }
    }

    scratch.extend_from_slice(&left[l..]);
    scratch.extend_from_slice(&right[r..]);
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        trace!("merge sort over {} elements", slice.len());

        if slice.len() < 2 {
            return;
        }
        let mut scratch = Vec::with_capacity(slice.len());
        merge_sort(slice, &mut scratch);
    }
}
