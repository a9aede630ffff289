// kons-core - Property-based tests for list operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for the list algebra.
//!
//! Tests the following properties:
//! - collect/iter round-trips and nth coverage
//! - reverse length and involution laws
//! - append length arithmetic and nth distribution across the seam
//! - rev_append agreement with reverse-then-append
//! - mem/exists and for_all/exists duality
//! - map family pointwise behaviour and length checks
//! - Eq/Hash agreement across construction routes

mod common;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use common::{ints, Error, List};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating lists
// =============================================================================

/// Generate element vectors for short lists
fn arb_elems(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000i32, 0..=max_len)
}

/// Generate paired elements, giving two vectors of equal length
fn arb_elem_pairs(max_len: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-1000i32..1000i32, -1000i32..1000i32), 0..=max_len)
}

fn hash_of(l: &List<i32>) -> u64 {
    let mut hasher = DefaultHasher::new();
    l.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction and access
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Collecting a vector and iterating it back is the identity
    #[test]
    fn collect_iter_roundtrip(v in arb_elems(8)) {
        let l = ints(&v);
        let back: Vec<i32> = l.iter().copied().collect();
        prop_assert_eq!(back, v);
    }

    /// len agrees with the source vector
    #[test]
    fn len_matches_source(v in arb_elems(8)) {
        prop_assert_eq!(ints(&v).len(), v.len());
    }

    /// nth hits every position, get agrees, and one past the end fails
    #[test]
    fn nth_covers_all_positions(v in arb_elems(8)) {
        let l = ints(&v);
        for (i, expected) in v.iter().enumerate() {
            prop_assert_eq!(l.nth(i).unwrap(), expected);
            prop_assert_eq!(l.get(i), Some(expected));
        }
        prop_assert_eq!(
            l.nth(v.len()).unwrap_err(),
            Error::index_out_of_range(v.len(), v.len())
        );
        prop_assert_eq!(l.get(v.len()), None);
    }
}

// =============================================================================
// Reverse and append
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reversing preserves length
    #[test]
    fn reverse_preserves_len(v in arb_elems(8)) {
        let l = ints(&v);
        prop_assert_eq!(l.reversed().len(), l.len());
    }

    /// Reversing twice is the identity
    #[test]
    fn reverse_twice_identity(v in arb_elems(8)) {
        let l = ints(&v);
        prop_assert_eq!(l.reversed().reversed(), l);
    }

    /// Reversal mirrors element positions
    #[test]
    fn reverse_mirrors_positions(v in arb_elems(8)) {
        let l = ints(&v);
        let r = l.reversed();
        for i in 0..v.len() {
            prop_assert_eq!(r.nth(i).unwrap(), &v[v.len() - 1 - i]);
        }
    }

    /// Append adds lengths
    #[test]
    fn append_adds_lengths(v1 in arb_elems(6), v2 in arb_elems(6)) {
        let joined = ints(&v1).append(&ints(&v2));
        prop_assert_eq!(joined.len(), v1.len() + v2.len());
    }

    /// nth distributes over append on both sides of the seam
    #[test]
    fn nth_distributes_over_append(v1 in arb_elems(6), v2 in arb_elems(6)) {
        let joined = ints(&v1).append(&ints(&v2));
        for (i, expected) in v1.iter().chain(v2.iter()).enumerate() {
            prop_assert_eq!(joined.nth(i).unwrap(), expected);
        }
    }

    /// rev_append is reverse-then-append
    #[test]
    fn rev_append_is_reverse_then_append(v1 in arb_elems(6), v2 in arb_elems(6)) {
        let l1 = ints(&v1);
        let l2 = ints(&v2);
        prop_assert_eq!(l1.rev_append(&l2), l1.reversed().append(&l2));
    }
}

// =============================================================================
// Predicates and search
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// mem is exists with an equality predicate
    #[test]
    fn mem_matches_exists(v in arb_elems(8), probe in -1000i32..1000i32) {
        let l = ints(&v);
        prop_assert_eq!(l.mem(&probe), l.exists(|n| *n == probe));
        prop_assert_eq!(l.mem(&probe), v.contains(&probe));
    }

    /// for_all is the negation of exists-not
    #[test]
    fn for_all_exists_duality(v in arb_elems(8), pivot in -1000i32..1000i32) {
        let l = ints(&v);
        prop_assert_eq!(
            l.for_all(|n| *n < pivot),
            !l.exists(|n| *n >= pivot)
        );
    }

    /// find returns the leftmost match when one exists
    #[test]
    fn find_is_leftmost(v in arb_elems(8), pivot in -1000i32..1000i32) {
        let l = ints(&v);
        match v.iter().find(|n| **n >= pivot) {
            Some(expected) => prop_assert_eq!(l.find(|n| *n >= pivot).unwrap(), expected),
            None => prop_assert!(l.find(|n| *n >= pivot).is_err()),
        }
    }
}

// =============================================================================
// Map family
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// map preserves length and applies pointwise
    #[test]
    fn map_is_pointwise(v in arb_elems(8)) {
        let l = ints(&v);
        let mapped = l.map(|n| n * 2 + 1);
        prop_assert_eq!(mapped.len(), l.len());
        for (i, n) in v.iter().enumerate() {
            prop_assert_eq!(mapped.nth(i).unwrap(), &(n * 2 + 1));
        }
    }

    /// mapi hands out positions in order
    #[test]
    fn mapi_positions_in_order(v in arb_elems(8)) {
        let tagged = ints(&v).mapi(|i, _| i);
        let positions: Vec<usize> = tagged.iter().copied().collect();
        let expected: Vec<usize> = (0..v.len()).collect();
        prop_assert_eq!(positions, expected);
    }

    /// map2 with addition is elementwise vector addition
    #[test]
    fn map2_is_elementwise(pairs in arb_elem_pairs(8)) {
        let (xs, ys): (Vec<i32>, Vec<i32>) = pairs.iter().cloned().unzip();
        let sums = ints(&xs).map2(&ints(&ys), |a, b| a + b).unwrap();
        for (i, (a, b)) in pairs.iter().enumerate() {
            prop_assert_eq!(sums.nth(i).unwrap(), &(a + b));
        }
    }

    /// Pairwise operations succeed exactly on equal lengths
    #[test]
    fn pairwise_succeeds_iff_equal_lengths(v1 in arb_elems(6), v2 in arb_elems(6)) {
        let outcome = ints(&v1).map2(&ints(&v2), |a, b| a + b);
        if v1.len() == v2.len() {
            prop_assert!(outcome.is_ok());
        } else {
            prop_assert_eq!(
                outcome.unwrap_err(),
                Error::length_mismatch("map2", v1.len(), v2.len())
            );
        }
    }
}

// =============================================================================
// Eq and Hash
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Lists built by different routes from the same elements agree on Eq and Hash
    #[test]
    fn eq_hash_across_construction_routes(v in arb_elems(8)) {
        let collected = ints(&v);
        let mut consed = List::new();
        for n in v.iter().rev() {
            consed = List::cons(*n, consed);
        }
        prop_assert_eq!(&collected, &consed);
        prop_assert_eq!(hash_of(&collected), hash_of(&consed));
    }

    /// Sharing a tail never changes what a list is equal to
    #[test]
    fn shared_tails_compare_equal(v in arb_elems(6), head in -1000i32..1000i32) {
        let base = ints(&v);
        let shared = List::cons(head, &base);
        let mut fresh = vec![head];
        fresh.extend_from_slice(&v);
        prop_assert_eq!(shared, ints(&fresh));
    }
}
