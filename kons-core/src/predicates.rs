// kons-core - Predicates and search over lists
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Boolean queries over list elements.
//!
//! The quantifiers follow the usual vacuous conventions: `for_all` is true
//! on the empty list and `exists` is false. All of them short-circuit, so a
//! predicate is never called again after the answer is settled.

use crate::error::{Error, Result};
use crate::list::List;

impl<T> List<T> {
    /// True if `pred` holds for every element. Vacuously true when empty.
    ///
    /// Stops at the first element that fails.
    pub fn for_all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.iter() {
            if !pred(item) {
                return false;
            }
        }
        true
    }

    /// True if `pred` holds for at least one element. Vacuously false when
    /// empty.
    ///
    /// Stops at the first element that succeeds.
    pub fn exists<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.iter() {
            if pred(item) {
                return true;
            }
        }
        false
    }

    /// True if `pred` holds for every pair of elements drawn from `self`
    /// and `other` in lockstep.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the lists have different lengths; the
    /// predicate is not called in that case.
    pub fn for_all2<U, F>(&self, other: &List<U>, mut pred: F) -> Result<bool>
    where
        F: FnMut(&T, &U) -> bool,
    {
        for (a, b) in self.pairs_checked(other, "for_all2")? {
            if !pred(a, b) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True if `pred` holds for at least one pair of elements drawn from
    /// `self` and `other` in lockstep.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the lists have different lengths; the
    /// predicate is not called in that case.
    pub fn exists2<U, F>(&self, other: &List<U>, mut pred: F) -> Result<bool>
    where
        F: FnMut(&T, &U) -> bool,
    {
        for (a, b) in self.pairs_checked(other, "exists2")? {
            if pred(a, b) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The first element satisfying `pred`, head to tail.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches.
    pub fn find<F>(&self, mut pred: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.iter() {
            if pred(item) {
                return Ok(item);
            }
        }
        Err(Error::not_found("find"))
    }
}

impl<T: PartialEq> List<T> {
    /// True if `value` equals some element of the list.
    pub fn mem(&self, value: &T) -> bool {
        self.exists(|item| item == value)
    }
}
