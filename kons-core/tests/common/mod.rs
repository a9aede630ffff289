// kons-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for kons-core integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`ints`] - Build a `List<i32>` from a slice, preserving order
//! - [`countdown`] - The `[4, 3, 2, 1, 0]` list used by the scenario tests
//! - [`bindings`] - The `('a', 1), ('b', 42), ('c', 84)` association list
//!
//! # Macros
//!
//! - [`assert_elems!`] - Assert a list holds exactly the expected elements

// Re-export the library surface for convenience
#[allow(unused_imports)]
pub use kons_core::{list, Error, Fresh, Iter, List, Pairs, Result};

/// Build a list of integers in slice order.
#[allow(dead_code)]
pub fn ints(values: &[i32]) -> List<i32> {
    values.iter().copied().collect()
}

/// The countdown list `[4, 3, 2, 1, 0]` from the demo scenario.
#[allow(dead_code)]
pub fn countdown() -> List<i32> {
    ints(&[4, 3, 2, 1, 0])
}

/// The demo association list: `('a', 1)`, `('b', 42)`, `('c', 84)`.
#[allow(dead_code)]
pub fn bindings() -> List<(char, i32)> {
    list![('a', 1), ('b', 42), ('c', 84)]
}

/// Assert that a list holds exactly the expected elements, in order.
///
/// # Example
///
/// ```ignore
/// assert_elems!(countdown(), [4, 3, 2, 1, 0]);
/// ```
#[macro_export]
macro_rules! assert_elems {
    ($list:expr, $expected:expr) => {
        let xs = &$list;
        let got: Vec<_> = xs.iter().cloned().collect();
        assert_eq!(got, $expected, "list {} did not match", xs);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints_preserves_slice_order() {
        assert_eq!(ints(&[4, 3, 2, 1, 0]), countdown());
    }

    #[test]
    fn test_assert_elems_evaluates_its_list_once() {
        let mut builds = 0;
        let mut build = || {
            builds += 1;
            ints(&[1, 2])
        };
        assert_elems!(build(), [1, 2]);
        assert_eq!(builds, 1);
    }
}
