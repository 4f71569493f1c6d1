//! # Introduction
//!
//! The classic `List` abstract data type with two backings, a resizable array ([`ArrayList`])
//! and a singly-linked chain ([`LinkedList`]), plus selection, insertion, merge and quick sort
//! running in place on either one.
//!
//! Out of range indices are reported as [`ListError::InvalidIndex`] and leave the list untouched;
//! nothing panics on ordinary misuse.
//!
//! ```
//! use seqlist_core::{ArrayList, List};
//!
//! let mut list = ArrayList::new();
//! for value in [6, 5, 4, 3, 2, 1] {
//!     list.add(value).unwrap();
//! }
//!
//! list.selection_sort();
//! list.add(7).unwrap();
//! assert_eq!(list.as_slice(), [1, 2, 3, 4, 5, 6, 7]);
//! ```

pub mod error;
pub mod list;
pub mod orst;

pub use error::{ListError, Result};
pub use list::{ArrayList, LinkedList, List};

use std::fmt::Display;

use anyhow::bail;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use orst::{Algorithm, InsertionSorter, Pivot, QuickSorter};

/// Which [`List`] implementation to run on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Backing {
    /// Resizable contiguous buffer
    Array,

    /// Singly-linked chain of nodes
    Linked,
}

/// Command line arguments for driving the lists from a terminal. Run `seqlist list --help` to see
/// what options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct ListArgs {
    #[command(subcommand)]
    command: ListCommands,
}

#[derive(Clone, Subcommand, Debug)]
enum ListCommands {
    /// Sort the given integers and print them in order.
    Sort {
        /// The sorting algorithm to use.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Quick)]
        algorithm: Algorithm,

        /// The list implementation to sort in.
        #[arg(short, long, value_enum, default_value_t = Backing::Array)]
        backing: Backing,

        /// Pick quick sort pivots at random instead of taking the first element (array only).
        #[arg(long)]
        random_pivot: bool,

        /// Find insertion points by binary search (array only).
        #[arg(long)]
        smart: bool,

        /// The values to sort.
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Count the comparisons and time taken by every algorithm on random input.
    Bench {
        /// List sizes to benchmark.
        #[arg(short, long, num_args = 1.., default_values_t = orst::benchmark::DEFAULT_SIZES)]
        sizes: Vec<usize>,

        /// The list implementation to benchmark.
        #[arg(short, long, value_enum, default_value_t = Backing::Array)]
        backing: Backing,
    },
}

impl ListArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            ListCommands::Sort {
                algorithm,
                backing,
                random_pivot,
                smart,
                values,
            } => {
                check_sort_flags(algorithm, backing, random_pivot, smart)?;
                match backing {
                    Backing::Array => {
                        let mut list: ArrayList<i64> = values.into_iter().collect();
                        match algorithm {
                            Algorithm::Quick if random_pivot => list.sort_with(&QuickSorter {
                                pivot: Pivot::Random,
                            }),
                            Algorithm::Insertion if smart => {
                                list.sort_with(&InsertionSorter { smart: true })
                            }
                            _ => algorithm.apply(&mut list),
                        }
                        print_list(algorithm, &list);
                    }
                    Backing::Linked => {
                        let mut list: LinkedList<i64> = values.into_iter().collect();
                        algorithm.apply(&mut list);
                        print_list(algorithm, &list);
                    }
                }
            }

            ListCommands::Bench { sizes, backing } => orst::benchmark::run_orst(&sizes, backing)?,
        }
        Ok(())
    }
}

// Variant flags are only accepted where they change the sort.
fn check_sort_flags(
    algorithm: Algorithm,
    backing: Backing,
    random_pivot: bool,
    smart: bool,
) -> anyhow::Result<()> {
    if random_pivot && algorithm != Algorithm::Quick {
        bail!("--random-pivot only applies to quick sort");
    }
    if smart && algorithm != Algorithm::Insertion {
        bail!("--smart only applies to insertion sort");
    }
    if (random_pivot || smart) && backing == Backing::Linked {
        bail!("--random-pivot and --smart are only supported by the array backing");
    }
    Ok(())
}

fn print_list<T: Display, L: List<T>>(algorithm: Algorithm, list: &L) {
    let rendered = list
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} {}", format!("{} ->", algorithm.name()).bold().green(), rendered);
}
