// kons-core - Immutable cons lists with structural sharing
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # kons-core
//!
//! Immutable singly-linked lists in the Lisp/ML tradition.
//!
//! A [`List<T>`] is either empty or a node holding one element and the
//! rest of the list. Lists are never mutated after construction: every
//! operation borrows its input or builds a new list, and tails are shared
//! between lists through reference counting, so cloning a list or keeping
//! its tail costs an `Rc` bump rather than a copy.
//!
//! ## Quick Start
//!
//! ```rust
//! use kons_core::{list, List};
//!
//! let countdown = list![4, 3, 2, 1, 0];
//! assert_eq!(countdown.len(), 5);
//! assert_eq!(countdown.head().unwrap(), &4);
//! assert_eq!(countdown.to_string(), "[4, 3, 2, 1, 0]");
//!
//! let ascending = countdown.reversed();
//! assert_eq!(ascending.to_string(), "[0, 1, 2, 3, 4]");
//!
//! let squares = countdown.map(|n| n * n);
//! assert_eq!(squares, list![16, 9, 4, 1, 0]);
//! ```
//!
//! Operations that can fail (`head` of an empty list, `nth` past the end,
//! pairwise operations over unequal lengths) return [`Result`] with a
//! structured [`Error`] instead of panicking. Every traversal is a loop
//! rather than recursion, equality and drop included, so lists millions of
//! nodes long are safe to build and discard.

mod assoc;
pub mod error;
pub mod iter;
pub mod list;
mod predicates;
mod transforms;

pub use error::{Error, Result};
pub use iter::{Iter, Pairs};
pub use list::{Fresh, IntoTail, List, Node};
