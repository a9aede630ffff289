// kons-core - Core list type and structural queries
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The [`List`] type: an immutable, reference-counted cons list.
//!
//! A list is either [`List::Empty`] or a [`List::Node`] holding one element
//! (the head) and the rest of the list (the tail). Lists are never mutated
//! after construction; every operation that "changes" a list returns a new
//! one. Tails are shared between lists through [`Rc`], so cloning a list or
//! prepending to it is O(1) and never copies elements.
//!
//! All spine walks in this module (and the rest of the crate) are explicit
//! loops rather than recursion, so million-node lists do not overflow the
//! stack, not even on drop.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::rc::Rc;

use crate::error::{Error, Result};

/// An immutable singly-linked list.
///
/// Elements are homogeneous by construction: a `List<T>` can only ever hold
/// values of type `T`, so consing or appending mismatched element types is
/// a compile error rather than a runtime one.
///
/// # Examples
///
/// ```
/// use kons_core::{list, List};
///
/// let xs = list![4, 3, 2, 1, 0];
/// assert_eq!(xs.len(), 5);
/// assert_eq!(xs.head().unwrap(), &4);
/// assert_eq!(xs.to_string(), "[4, 3, 2, 1, 0]");
/// ```
pub enum List<T> {
    /// The empty list.
    Empty,
    /// One element followed by the rest of the list.
    Node(Rc<Node<T>>),
}

/// A single cell of a [`List`]: one element plus the rest of the list.
///
/// Nodes are created only through [`List::cons`] and friends; the fields are
/// not public so a node can never be mutated once built.
pub struct Node<T> {
    pub(crate) head: T,
    pub(crate) tail: List<T>,
}

impl<T> Node<T> {
    /// The element stored in this node.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// The rest of the list after this node.
    pub fn tail(&self) -> &List<T> {
        &self.tail
    }
}

/// Construction-only marker meaning "start a brand-new list here".
///
/// `Fresh` is accepted as the tail argument of [`List::cons`] and is
/// normalised to [`List::Empty`] immediately. It is a standalone unit type,
/// not a list, so it can never end up *inside* a constructed list.
///
/// ```
/// use kons_core::{Fresh, List};
///
/// let one = List::cons(42, Fresh);
/// assert_eq!(one, List::singleton(42));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Fresh;

/// Conversion of a value into a list tail, used by [`List::cons`].
///
/// Implemented for [`List`] itself (identity), for `&List` (shares the
/// spine), and for [`Fresh`] (normalises to the empty list).
pub trait IntoTail<T> {
    fn into_tail(self) -> List<T>;
}

impl<T> IntoTail<T> for List<T> {
    fn into_tail(self) -> List<T> {
        self
    }
}

impl<T> IntoTail<T> for &List<T> {
    fn into_tail(self) -> List<T> {
        self.clone()
    }
}

impl<T> IntoTail<T> for Fresh {
    fn into_tail(self) -> List<T> {
        List::Empty
    }
}

/// Build a list from its elements, head first.
///
/// `list![]` is the empty list; its element type must be inferable from
/// context.
///
/// ```
/// use kons_core::{list, List};
///
/// let xs = list![1, 2, 3];
/// assert_eq!(xs.to_string(), "[1, 2, 3]");
///
/// let none: List<i32> = list![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::Empty
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::List::cons($head, $crate::list![$($tail),*])
    };
}

// ============================================================================
// Construction
// ============================================================================

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        List::Empty
    }

    /// Prepend `head` to `tail`, returning the new list.
    ///
    /// The tail may be an existing list (by value or by reference; the
    /// spine is shared, not copied), or [`Fresh`] to start a new list.
    /// Neither `tail` nor anything sharing its spine is affected.
    ///
    /// ```
    /// use kons_core::List;
    ///
    /// let rest = List::singleton(1);
    /// let both = List::cons(2, &rest);
    /// assert_eq!(both.to_string(), "[2, 1]");
    /// assert_eq!(rest.to_string(), "[1]");
    /// ```
    pub fn cons(head: T, tail: impl IntoTail<T>) -> Self {
        List::Node(Rc::new(Node {
            head,
            tail: tail.into_tail(),
        }))
    }

    /// Create a one-element list.
    pub fn singleton(head: T) -> Self {
        List::cons(head, List::Empty)
    }
}

// ============================================================================
// Structural queries
// ============================================================================

impl<T> List<T> {
    /// The number of elements in the list. O(n).
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cur = self;
        while let List::Node(node) = cur {
            count += 1;
            cur = &node.tail;
        }
        count
    }

    /// True if the list has no elements.
    pub fn is_empty(&self) -> bool {
        matches!(self, List::Empty)
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if the list is empty.
    pub fn head(&self) -> Result<&T> {
        match self {
            List::Empty => Err(Error::empty_sequence("head")),
            List::Node(node) => Ok(&node.head),
        }
    }

    /// Everything after the first element, sharing the spine. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if the list is empty.
    pub fn tail(&self) -> Result<List<T>> {
        match self {
            List::Empty => Err(Error::empty_sequence("tail")),
            List::Node(node) => Ok(node.tail.clone()),
        }
    }

    /// The element at zero-based position `index`, by walking `index` links.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn nth(&self, index: usize) -> Result<&T> {
        let mut cur = self;
        let mut walked = 0;
        loop {
            match cur {
                // Having reached the end, `walked` is the list's length.
                List::Empty => return Err(Error::index_out_of_range(index, walked)),
                List::Node(node) => {
                    if walked == index {
                        return Ok(&node.head);
                    }
                    walked += 1;
                    cur = &node.tail;
                }
            }
        }
    }

    /// The element at `index`, or `None` past the end.
    ///
    /// The non-erroring twin of [`List::nth`].
    pub fn get(&self, index: usize) -> Option<&T> {
        self.nth(index).ok()
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

// Hand-written so cloning never requires `T: Clone`: a clone is a new
// handle onto the same spine.
impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        match self {
            List::Empty => List::Empty,
            List::Node(node) => List::Node(Rc::clone(node)),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::Empty
    }
}

// The default drop glue would recurse once per node (List -> Rc -> Node ->
// List ...). Unlinking uniquely-owned nodes in a loop instead keeps drops of
// arbitrarily long lists at constant stack depth. The loop stops at the
// first node another list still shares; that node is freed when its last
// owner drops.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut tail = mem::replace(&mut self.tail, List::Empty);
        while let List::Node(rc) = tail {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => tail = mem::replace(&mut node.tail, List::Empty),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self;
        let mut b = other;
        loop {
            match (a, b) {
                (List::Empty, List::Empty) => return true,
                (List::Node(x), List::Node(y)) => {
                    // Shared spine: the remainders are the same list.
                    if Rc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.head != y.head {
                        return false;
                    }
                    a = &x.tail;
                    b = &y.tail;
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Length-prefixed, matching how slices hash.
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
