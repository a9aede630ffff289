// kons-core - Error types for list operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for list operations.
//!
//! Every fallible operation in this crate reports through [`Error`]; errors
//! surface synchronously to the caller and nothing is retried internally.
//! Type mismatches (consing or combining lists of different element types)
//! have no variant here because `List<T>`'s type parameter already rejects
//! them at compile time.

use std::fmt;

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when operating on a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// head/tail called on the empty list
    EmptySequence { operation: &'static str },
    /// nth past the end of the list
    IndexOutOfRange { index: usize, length: usize },
    /// Pairwise operation over lists of different lengths
    LengthMismatch {
        operation: &'static str,
        left: usize,
        right: usize,
    },
    /// find/assoc exhausted the list without a match
    NotFound { operation: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySequence { operation } => {
                write!(f, "Cannot take {} of an empty list", operation)
            }
            Error::IndexOutOfRange { index, length } => {
                write!(
                    f,
                    "Index {} out of range for list of length {}",
                    index, length
                )
            }
            Error::LengthMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "'{}' requires lists of equal length, got {} and {}",
                    operation, left, right
                )
            }
            Error::NotFound { operation } => {
                write!(f, "'{}' found no matching element", operation)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an empty-sequence error for the named operation.
    pub fn empty_sequence(operation: &'static str) -> Self {
        Error::EmptySequence { operation }
    }

    /// Create an index-out-of-range error.
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Error::IndexOutOfRange { index, length }
    }

    /// Create a length-mismatch error for the named pairwise operation.
    pub fn length_mismatch(operation: &'static str, left: usize, right: usize) -> Self {
        Error::LengthMismatch {
            operation,
            left,
            right,
        }
    }

    /// Create a not-found error for the named search operation.
    pub fn not_found(operation: &'static str) -> Self {
        Error::NotFound { operation }
    }
}
