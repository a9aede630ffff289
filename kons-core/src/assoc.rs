// kons-core - Association-list operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Key/value lookup over lists of pairs.
//!
//! Any `List<(K, V)>` doubles as an association list: the `.0` of each
//! pair is the key, the `.1` the value. Lookup walks head to tail and the
//! first matching pair wins, so consing a new binding shadows an older one
//! without touching it.

use crate::error::{Error, Result};
use crate::list::List;

impl<K: PartialEq, V> List<(K, V)> {
    /// The value bound to `key` in the first matching pair.
    ///
    /// ```
    /// use kons_core::list;
    ///
    /// let bindings = list![('a', 1), ('b', 42), ('c', 84)];
    /// assert_eq!(bindings.assoc(&'c').unwrap(), &84);
    /// assert!(bindings.assoc(&'z').is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no pair carries `key`.
    pub fn assoc(&self, key: &K) -> Result<&V> {
        for (k, v) in self.iter() {
            if k == key {
                return Ok(v);
            }
        }
        Err(Error::not_found("assoc"))
    }

    /// True if some pair in the list carries `key`.
    pub fn mem_assoc(&self, key: &K) -> bool {
        self.exists(|(k, _)| k == key)
    }
}
