// kons-core - Structural transforms: reverse, append, map
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Operations that build new lists out of old ones.
//!
//! Nothing here mutates: every transform walks the input and conses up a
//! fresh result. `rev_append` and `append` share the second list's spine
//! wholesale, so their cost is proportional to the first list only.
//! The mapping family borrows its input and never requires `T: Clone`.

use crate::error::Result;
use crate::list::List;

impl<T> List<T> {
    /// Build a new list by applying `f` to each element, preserving order.
    ///
    /// The output element type is free to differ from the input's. Mapping
    /// the empty list yields the empty list.
    ///
    /// ```
    /// use kons_core::list;
    ///
    /// let words = list!["one", "two", "three"];
    /// let lengths = words.map(|w| w.len());
    /// assert_eq!(lengths, list![3, 3, 5]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Like [`map`](List::map), but `f` also receives the zero-based
    /// position of each element.
    pub fn mapi<U, F>(&self, mut f: F) -> List<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        self.iter().enumerate().map(|(i, x)| f(i, x)).collect()
    }

    /// Apply `f` to elements of `self` and `other` pairwise, collecting the
    /// results in order.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`](crate::Error::LengthMismatch) if the lists
    /// have different lengths. Two empty lists zip to an empty list.
    pub fn map2<U, V, F>(&self, other: &List<U>, mut f: F) -> Result<List<V>>
    where
        F: FnMut(&T, &U) -> V,
    {
        let pairs = self.pairs_checked(other, "map2")?;
        Ok(pairs.map(|(a, b)| f(a, b)).collect())
    }
}

impl<T: Clone> List<T> {
    /// The elements of `self` in reverse order.
    ///
    /// ```
    /// use kons_core::list;
    ///
    /// let xs = list![4, 3, 2, 1, 0];
    /// assert_eq!(xs.reversed().to_string(), "[0, 1, 2, 3, 4]");
    /// ```
    pub fn reversed(&self) -> List<T> {
        let mut out = List::Empty;
        for item in self.iter() {
            out = List::cons(item.clone(), out);
        }
        out
    }

    /// The elements of `self` reversed, followed by `other`.
    ///
    /// Equivalent to `self.reversed().append(other)` but done in one pass
    /// over `self`. `other`'s spine is shared with the result, not copied.
    pub fn rev_append(&self, other: &List<T>) -> List<T> {
        let mut out = other.clone();
        for item in self.iter() {
            out = List::cons(item.clone(), out);
        }
        out
    }

    /// The elements of `self` followed by the elements of `other`.
    ///
    /// `other`'s spine is shared with the result; only `self`'s elements
    /// are re-consed.
    ///
    /// ```
    /// use kons_core::list;
    ///
    /// let front = list![4, 3, 2, 1, 0];
    /// let back = list![10, 11];
    /// assert_eq!(front.append(&back).to_string(), "[4, 3, 2, 1, 0, 10, 11]");
    /// ```
    pub fn append(&self, other: &List<T>) -> List<T> {
        self.reversed().rev_append(other)
    }
}
