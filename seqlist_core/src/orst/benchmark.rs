use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use prettytable::{row, Table};
use rand::{self, Rng};
use std::{cell::Cell, cmp::Ordering, rc::Rc, time::Instant};

use super::Algorithm;
use crate::{ArrayList, Backing, LinkedList, List};

/// Sizes benchmarked when none are given.
pub const DEFAULT_SIZES: [usize; 5] = [0, 1, 100, 10_000, 100_000];

/// Largest input the quadratic algorithms are run on.
pub const QUADRATIC_LIMIT: usize = 10_000;

// Wraps an element so that every comparison made on it bumps a counter shared by the whole run.
// Only `elem` takes part in the comparison.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn tick(&self) {
        self.comparison_counter.set(self.comparison_counter.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tick();
        self.elem == other.elem
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.tick();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tick();
        self.elem.cmp(&other.elem)
    }
}

/// Outcome of sorting one list with one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub comparisons: usize,
    pub elapsed: std::time::Duration,
    pub sorted: bool,
}

fn is_sorted<T: Ord, L: List<T>>(list: &L) -> bool {
    let mut iter = list.iter();
    let Some(mut previous) = iter.next() else {
        return true;
    };
    for current in iter {
        if current < previous {
            return false;
        }
        previous = current;
    }
    true
}

fn measure<T, L>(algorithm: Algorithm, input: &L, comparisons: &Rc<Cell<usize>>) -> Measurement
where
    T: Ord + Clone,
    L: List<SortEvaluator<T>> + Clone,
{
    let mut list = input.clone();

    comparisons.set(0);
    let now = Instant::now();
    algorithm.apply(&mut list);
    let elapsed = now.elapsed();
    let counted = comparisons.get();

    Measurement {
        algorithm,
        comparisons: counted,
        elapsed,
        sorted: is_sorted(&list) && list.size() == input.size(),
    }
}

fn run_size<L>(n: usize, random: &mut impl Rng, progress: &ProgressBar) -> Vec<Measurement>
where
    L: List<SortEvaluator<i32>> + Clone + FromIterator<SortEvaluator<i32>>,
{
    let counter = Rc::new(Cell::new(0));
    let input: L = (0..n)
        .map(|_| SortEvaluator::new(random.gen::<i32>(), counter.clone()))
        .collect();

    let mut measurements = Vec::new();
    for algorithm in Algorithm::ALL {
        progress.set_message(algorithm.name());
        if algorithm.is_quadratic() && n > QUADRATIC_LIMIT {
            debug!("skipping {} for {n} elements", algorithm.name());
        } else {
            measurements.push(measure(algorithm, &input, &counter));
        }
        progress.inc(1);
    }
    measurements
}

/// Sorts lists of random `i32`s of every size in `sizes` on the given backing with each
/// algorithm, counting comparisons and wall time.
pub fn measure_sizes(
    sizes: &[usize],
    backing: Backing,
) -> anyhow::Result<Vec<(usize, Vec<Measurement>)>> {
    let mut random = rand::thread_rng();

    let progress = ProgressBar::new((sizes.len() * Algorithm::ALL.len()) as u64);
    progress.set_style(ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}) {msg}",
    )?);

    let mut results = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let measurements = match backing {
            Backing::Array => run_size::<ArrayList<_>>(n, &mut random, &progress),
            Backing::Linked => run_size::<LinkedList<_>>(n, &mut random, &progress),
        };
        results.push((n, measurements));
    }
    progress.finish_and_clear();

    Ok(results)
}

/// Runs the benchmark and prints one table per size.
pub fn run_orst(sizes: &[usize], backing: Backing) -> anyhow::Result<()> {
    for (n, measurements) in measure_sizes(sizes, backing)? {
        println!(
            "{} {} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold(),
            format!("({backing:?} backing)").dimmed()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold(),
            "Sorted".bold()
        ]);

        for algorithm in Algorithm::ALL {
            match measurements.iter().find(|m| m.algorithm == algorithm) {
                Some(m) => table.add_row(row![
                    algorithm.name(),
                    m.comparisons.to_string(),
                    format!("{:?}", m.elapsed),
                    if m.sorted { "yes".green() } else { "NO".red() }
                ]),
                None => table.add_row(row![
                    algorithm.name(),
                    "Not Doing It".red(),
                    "It is Stupid",
                    "-"
                ]),
            };
        }

        table.printstd();
        println!();
    }
    Ok(())
}
