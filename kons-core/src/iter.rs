// kons-core - Iterators over lists
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Iteration over lists.
//!
//! [`List::iter`] walks the spine head-to-tail yielding `&T`; indexed
//! traversal is `iter().enumerate()`. [`List::iter2`] walks two lists in
//! lockstep and is the basis of every pairwise operation in the crate; it
//! refuses outright to pair lists of different lengths rather than silently
//! truncating to the shorter one.

use crate::error::{Error, Result};
use crate::list::List;

/// Borrowing iterator over a list, head to tail.
///
/// Created by [`List::iter`]. The iterator holds a cursor into the spine;
/// the list itself is untouched.
pub struct Iter<'a, T> {
    cursor: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let cur = self.cursor;
        match cur {
            List::Empty => None,
            List::Node(node) => {
                self.cursor = &node.tail;
                Some(&node.head)
            }
        }
    }
}

/// Lockstep iterator over two equal-length lists.
///
/// Created by [`List::iter2`], which has already verified the lengths
/// match, so both cursors reach the end together.
pub struct Pairs<'a, T, U> {
    left: &'a List<T>,
    right: &'a List<U>,
}

impl<'a, T, U> Iterator for Pairs<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<(&'a T, &'a U)> {
        let (left, right) = (self.left, self.right);
        match (left, right) {
            (List::Node(l), List::Node(r)) => {
                self.left = &l.tail;
                self.right = &r.tail;
                Some((&l.head, &r.head))
            }
            _ => None,
        }
    }
}

impl<T> List<T> {
    /// Iterate over the elements in head-to-tail order.
    ///
    /// For indexed traversal use `iter().enumerate()`; positions are
    /// zero-based and increment per node.
    ///
    /// ```
    /// use kons_core::list;
    ///
    /// let xs = list![10, 20, 30];
    /// let doubled: Vec<i32> = xs.iter().map(|n| n * 2).collect();
    /// assert_eq!(doubled, vec![20, 40, 60]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { cursor: self }
    }

    /// Iterate over two lists in lockstep, yielding element pairs.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the lists have different lengths; no
    /// pairs are produced in that case.
    pub fn iter2<'a, U>(&'a self, other: &'a List<U>) -> Result<Pairs<'a, T, U>> {
        self.pairs_checked(other, "iter2")
    }

    /// Length-checked lockstep iteration, reporting `operation` on mismatch.
    pub(crate) fn pairs_checked<'a, U>(
        &'a self,
        other: &'a List<U>,
        operation: &'static str,
    ) -> Result<Pairs<'a, T, U>> {
        let left_len = self.len();
        let right_len = other.len();
        if left_len != right_len {
            return Err(Error::length_mismatch(operation, left_len, right_len));
        }
        Ok(Pairs {
            left: self,
            right: other,
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    /// Collect into a list preserving the input order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = List::Empty;
        for item in items.into_iter().rev() {
            list = List::cons(item, list);
        }
        list
    }
}
