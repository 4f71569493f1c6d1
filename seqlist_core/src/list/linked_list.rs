//! A [`List`] backed by a singly-linked chain of owned nodes.
//!
//! The four sorting algorithms run directly on the nodes: selection sort swaps values between
//! nodes, the other three detach and relink nodes. None of them allocate a node.

use std::fmt;
use std::mem;

use log::trace;

use crate::error::{ListError, Result};
use crate::List;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// An ordered sequence stored as a singly-linked chain of nodes.
///
/// Index operations walk the chain from the head, so they are O(index). Appending walks to the
/// tail. Cloning copies every node, so a clone and its source share nothing.
///
/// ```
/// use seqlist_core::{LinkedList, List};
///
/// let mut list = LinkedList::new();
/// list.insert(0, 20).unwrap();
/// list.insert(0, 10).unwrap();
/// list.add(30).unwrap();
///
/// assert_eq!(list.get(1), Ok(&20));
/// assert_eq!(list.remove(0), Ok(10));
/// assert_eq!(list.size(), 2);
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

// Follows `steps` links from `link`, stopping early at the end of the chain.
fn walk<T>(mut link: &mut Link<T>, steps: usize) -> &mut Link<T> {
    for _ in 0..steps {
        link = match link {
            Some(node) => &mut node.next,
            None => break,
        };
    }
    link
}

fn values<T>(link: &Link<T>) -> impl Iterator<Item = &T> {
    std::iter::successors(link.as_deref(), |node| node.next.as_deref()).map(|node| &node.value)
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Iterates over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn invalid_index(&self, index: usize) -> ListError {
        ListError::InvalidIndex {
            index,
            len: self.len,
        }
    }

    fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::new(value, next));
        self.len += 1;
    }
}

impl<T> List<T> for LinkedList<T> {
    fn add(&mut self, item: T) -> Result<()> {
        let tail = walk(&mut self.head, self.len);
        *tail = Some(Node::new(item, None));
        self.len += 1;
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(self.invalid_index(index));
        }
        let link = walk(&mut self.head, index);
        let next = link.take();
        *link = Some(Node::new(item, next));
        self.len += 1;
        Ok(())
    }

    // `walk` stops at the tail, so an index past the end finds no node and nothing is touched.
    fn get(&self, index: usize) -> Result<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| self.invalid_index(index))
    }

    fn set(&mut self, index: usize, item: T) -> Result<()> {
        let err = self.invalid_index(index);
        let node = walk(&mut self.head, index).as_deref_mut().ok_or(err)?;
        node.value = item;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let err = self.invalid_index(index);
        let link = walk(&mut self.head, index);
        let node = link.take().ok_or(err)?;
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        LinkedList::iter(self)
    }

    fn selection_sort(&mut self)
    where
        T: Ord,
    {
        trace!("linked selection sort over {} elements", self.len);

        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            let Node { value, next } = node;
            let mut smallest: Option<&mut T> = None;
            let mut rest = next.as_deref_mut();
            while let Some(candidate) = rest {
                let current = smallest.as_deref().unwrap_or(value);
                let is_smaller = candidate.value < *current;
                if is_smaller {
                    smallest = Some(&mut candidate.value);
                }
                rest = candidate.next.as_deref_mut();
            }
            if let Some(smallest) = smallest {
                mem::swap(value, smallest);
            }
            cursor = next.as_deref_mut();
        }
    }

    fn insertion_sort(&mut self)
    where
        T: Ord,
    {
        trace!("linked insertion sort over {} elements", self.len);

        // The sorted run is kept in descending order so that input which is already ascending
        // lands at the head on every step. A new node goes in front of the first element it is
        // not smaller than, which keeps equal elements in reverse arrival order until the final
        // reversal puts them back.
        let mut unsorted = self.head.take();
        let mut descending: Link<T> = None;
        while let Some(mut node) = unsorted {
            unsorted = node.next.take();

            let larger = values(&descending)
                .take_while(|placed| node.value < **placed)
                .count();
            let link = walk(&mut descending, larger);
            node.next = link.take();
            *link = Some(node);
        }

        while let Some(mut node) = descending {
            descending = node.next.take();
            node.next = self.head.take();
            self.head = Some(node);
        }
    }

    fn merge_sort(&mut self)
    where
        T: Ord + Clone,
    {
        trace!("linked merge sort over {} elements", self.len);

        let chain = self.head.take();
        self.head = merge_sort(chain, self.len);
    }

    fn quick_sort(&mut self)
    where
        T: Ord,
    {
        trace!("linked quick sort over {} elements", self.len);

        // Pending work is processed left to right: each chain is partitioned into the nodes
        // strictly less than its head, the head itself, and the rest. Keeping the pieces on a
        // heap stack instead of the call stack bounds recursion on lopsided partitions.
        let mut sorted = None;
        let mut tail = &mut sorted;
        let mut pending = vec![Pending::Chain(self.head.take())];

        while let Some(work) = pending.pop() {
            match work {
                Pending::Chain(None) => {}
                Pending::Placed(node) => tail = &mut tail.insert(node).next,
                Pending::Chain(Some(mut pivot)) => {
                    let mut remaining = pivot.next.take();
                    let (mut less, mut rest) = (None, None);
                    let (mut less_tail, mut rest_tail) = (&mut less, &mut rest);

                    while let Some(mut node) = remaining {
                        remaining = node.next.take();
                        if node.value < pivot.value {
                            less_tail = &mut less_tail.insert(node).next;
                        } else {
                            rest_tail = &mut rest_tail.insert(node).next;
                        }
                    }

                    pending.push(Pending::Chain(rest));
                    pending.push(Pending::Placed(pivot));
                    pending.push(Pending::Chain(less));
                }
            }
        }

        self.head = sorted;
    }
}

enum Pending<T> {
    Chain(Link<T>),
    Placed(Box<Node<T>>),
}

fn merge_sort<T: Ord>(mut chain: Link<T>, len: usize) -> Link<T> {
    if len < 2 {
        return chain;
    }

    let mid = (len + 1) / 2;
    let right = walk(&mut chain, mid).take();
    let left = merge_sort(chain, mid);
    let right = merge_sort(right, len - mid);
    merge(left, right)
}

// Ties take the node from `left`.
fn merge<T: Ord>(mut left: Link<T>, mut right: Link<T>) -> Link<T> {
    let mut merged = None;
    let mut tail = &mut merged;

    while let (Some(l), Some(r)) = (&left, &right) {
        let source = if l.value <= r.value {
            &mut left
        } else {
            &mut right
        };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    *tail = left.or(right);
    merged
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    // Unlinks iteratively; the default recursive drop overflows the stack on long chains.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkedList`], created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
