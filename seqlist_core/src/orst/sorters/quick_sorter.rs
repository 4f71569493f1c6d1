use log::trace;
use rand::Rng;

use crate::orst::Sorter;

/// How [`QuickSorter`] chooses the pivot of each partition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pivot {
    /// Use the first element of the range. Sorted and reverse-sorted input degrade to O(n²).
    #[default]
    First,

    /// Swap a uniformly random element to the front first, then proceed as with `First`. The
    /// expected running time is O(n log n) on any input.
    Random,
}

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use seqlist_core::orst::{Pivot, QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter { pivot: Pivot::Random }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm. The first element of the range is the pivot. A
/// single forward scan swaps every element strictly less than the pivot up to a running boundary
/// just behind the pivot. The pivot is then swapped onto the boundary: everything to its left is
/// smaller, everything to its right is at least as large. Both sides are sorted the same way,
/// excluding the pivot itself.
///
/// Elements equal to the pivot always land on its right. Every partition fixes one element in its
/// final place, so ranges full of duplicates still shrink on every step.
///
/// Only the smaller side is sorted recursively; the larger side is handled by the next iteration
/// of a loop. That keeps the stack O(log n) deep even when the partitions are maximally lopsided.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter {
    pub pivot: Pivot,
}

fn quicksort<T: Ord>(mut slice: &mut [T], pivot: Pivot) {
    while slice.len() > 1 {
        if pivot == Pivot::Random {
            let chosen = rand::thread_rng().gen_range(0..slice.len());
            slice.swap(0, chosen);
        }

        let boundary = partition(slice);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(boundary);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, pivot);
            slice = right;
        } else {
            quicksort(right, pivot);
            slice = left;
        }
    }
}

// Returns the final index of the pivot, which starts out at index 0.
fn partition<T: Ord>(slice: &mut [T]) -> usize {
    let Some((pivot, rest)) = slice.split_first_mut() else {
        return 0;
    };

    let mut smaller = 0;
    for i in 0..rest.len() {
        if rest[i] < *pivot {
            rest.swap(smaller, i);
            smaller += 1;
        }
    }

    slice.swap(0, smaller);
    smaller
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        trace!(
            "quick sort over {} elements ({:?} pivot)",
            slice.len(),
            self.pivot
        );
        quicksort(slice, self.pivot)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const PIVOTS: [Pivot; 2] = [Pivot::First, Pivot::Random];

    #[test]
    fn arbitrary_array() {
        for pivot in PIVOTS {
            let mut slice = [1, 5, 4, 2, 3];
            QuickSorter { pivot }.sort(&mut slice);
            assert_eq!(slice, [1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn sorted_array() {
        for pivot in PIVOTS {
            let mut slice = (1..10).collect::<Vec<_>>();
            QuickSorter { pivot }.sort(&mut slice);
            assert_eq!(slice, (1..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn very_unsorted() {
        for pivot in PIVOTS {
            let mut slice = (1..1000).rev().collect::<Vec<_>>();
            QuickSorter { pivot }.sort(&mut slice);
            assert_eq!(slice, (1..1000).collect::<Vec<_>>());
        }
    }

    #[test]
    fn long_sorted_run_does_not_exhaust_the_stack() {
        let mut slice = (0..20_000).collect::<Vec<_>>();
        QuickSorter::default().sort(&mut slice);
        assert_eq!(slice, (0..20_000).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates() {
        for pivot in PIVOTS {
            let mut slice = [2, 2, 1, 2, 1, 1, 2];
            QuickSorter { pivot }.sort(&mut slice);
            assert_eq!(slice, [1, 1, 1, 2, 2, 2, 2]);

            let mut same = vec![5; 64];
            QuickSorter { pivot }.sort(&mut same);
            assert_eq!(same, vec![5; 64]);
        }
    }

    #[test]
    fn partition_places_pivot_on_boundary() {
        let mut slice = [4, 7, 1, 4, 9, 2];
        let boundary = partition(&mut slice);
        assert_eq!(boundary, 2);
        assert_eq!(slice[boundary], 4);
        assert!(slice[..boundary].iter().all(|v| *v < 4));
        assert!(slice[boundary + 1..].iter().all(|v| *v >= 4));
    }

    #[test]
    fn simple_edge_cases() {
        for pivot in PIVOTS {
            let mut empty: Vec<i32> = vec![];
            QuickSorter { pivot }.sort(&mut empty);
            assert!(empty.is_empty());

            let mut one = vec![1];
            QuickSorter { pivot }.sort(&mut one);
            assert_eq!(one, vec![1]);

            let mut two = vec![2, 1];
            QuickSorter { pivot }.sort(&mut two);
            assert_eq!(two, vec![1, 2]);

            let mut three = vec![3, 1, 2];
            QuickSorter { pivot }.sort(&mut three);
            assert_eq!(three, vec![1, 2, 3]);
        }
    }
}
