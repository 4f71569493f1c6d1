use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use seqlist_core::orst::{
    Algorithm, InsertionSorter, MergeSorter, Pivot, QuickSorter, SelectionSorter, Sorter,
};
use seqlist_core::{ArrayList, LinkedList, List};

fn contents<T: Clone, L: List<T>>(list: &L) -> Vec<T> {
    list.iter().cloned().collect()
}

// Shuffled multisets with plenty of duplicates, reproducible from the seed.
fn permutations(seed: u64) -> Vec<Vec<i32>> {
    let mut random = StdRng::seed_from_u64(seed);
    [0, 1, 2, 3, 7, 16, 33, 100, 257]
        .into_iter()
        .map(|n| {
            let mut values: Vec<i32> = (0..n).map(|_| random.gen_range(-20..20)).collect();
            values.shuffle(&mut random);
            values
        })
        .collect()
}

fn all_sorts_agree<L>()
where
    L: List<i32> + Clone + FromIterator<i32>,
{
    for values in permutations(0x5eed) {
        let mut expected = values.clone();
        expected.sort();

        let input: L = values.iter().copied().collect();
        for algorithm in Algorithm::ALL {
            let mut list = input.clone();
            algorithm.apply(&mut list);
            assert_eq!(
                contents(&list),
                expected,
                "{} on {values:?}",
                algorithm.name()
            );
        }
        // Sorting never touches the source of a copy.
        assert_eq!(contents(&input), values);
    }
}

fn descending_input<L>()
where
    L: List<i32> + Clone + FromIterator<i32>,
{
    let input: L = (0..500).rev().collect();
    for algorithm in Algorithm::ALL {
        let mut list = input.clone();
        algorithm.apply(&mut list);
        assert_eq!(
            contents(&list),
            (0..500).collect::<Vec<_>>(),
            "{}",
            algorithm.name()
        );
    }
}

// Pairs compare by key only, so the tag records where each element started.
#[derive(Clone, Debug)]
struct Tagged {
    key: u8,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

fn stable_sorts_keep_ties_in_order<L>()
where
    L: List<Tagged> + Clone + FromIterator<Tagged>,
{
    let mut random = StdRng::seed_from_u64(7);
    let input: L = (0..200)
        .map(|tag| Tagged {
            key: random.gen_range(0..8),
            tag,
        })
        .collect();

    for algorithm in [Algorithm::Insertion, Algorithm::Merge] {
        let mut list = input.clone();
        algorithm.apply(&mut list);
        let sorted = contents(&list);
        for pair in sorted.windows(2) {
            assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                assert!(
                    pair[0].tag < pair[1].tag,
                    "{} reordered a tie",
                    algorithm.name()
                );
            }
        }
    }
}

mod array_list {
    use super::*;

    #[test]
    fn all_sorts_agree() {
        super::all_sorts_agree::<ArrayList<i32>>();
    }

    #[test]
    fn descending_input() {
        super::descending_input::<ArrayList<i32>>();
    }

    #[test]
    fn stable_sorts_keep_ties_in_order() {
        super::stable_sorts_keep_ties_in_order::<ArrayList<Tagged>>();
    }
}

mod linked_list {
    use super::*;

    #[test]
    fn all_sorts_agree() {
        super::all_sorts_agree::<LinkedList<i32>>();
    }

    #[test]
    fn descending_input() {
        super::descending_input::<LinkedList<i32>>();
    }

    #[test]
    fn stable_sorts_keep_ties_in_order() {
        super::stable_sorts_keep_ties_in_order::<LinkedList<Tagged>>();
    }
}

#[test]
fn slice_sorters_agree_with_std() {
    let sorters: [(&str, &dyn Sorter<i32>); 6] = [
        ("selection", &SelectionSorter),
        ("insertion", &InsertionSorter { smart: false }),
        ("smart insertion", &InsertionSorter { smart: true }),
        ("merge", &MergeSorter),
        ("quick", &QuickSorter { pivot: Pivot::First }),
        ("random pivot quick", &QuickSorter { pivot: Pivot::Random }),
    ];

    for values in permutations(42) {
        let mut expected = values.clone();
        expected.sort();
        for (name, sorter) in sorters {
            let mut slice = values.clone();
            sorter.sort(&mut slice);
            assert_eq!(slice, expected, "{name} on {values:?}");
        }
    }
}

#[test]
fn linked_and_array_sort_identically() {
    for values in permutations(1234) {
        let array: ArrayList<i32> = values.iter().copied().collect();
        let linked: LinkedList<i32> = values.iter().copied().collect();
        for algorithm in Algorithm::ALL {
            let mut a = array.clone();
            let mut l = linked.clone();
            algorithm.apply(&mut a);
            algorithm.apply(&mut l);
            assert_eq!(a.as_slice(), contents(&l).as_slice());
        }
    }
}
