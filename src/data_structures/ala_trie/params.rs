// Copyright (c) 2025 Mauka Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Destinations for parameters captured during a search.
//!
//! The trie never owns parameter storage. Each search writes into a sink the
//! caller supplies, so concurrent searches only need distinct sinks.

use serde::Serialize;
use std::collections::HashMap;

/// Receives `(name, value)` pairs discovered while matching a path.
pub trait ParamsSink {
    /// Record one captured parameter.
    fn set(&mut self, key: &str, value: &str);
}

/// Adapts a closure into a [`ParamsSink`].
///
/// ```
/// use mauka_router::data_structures::ala_trie::{AlaTrie, Payload, Setter};
///
/// let mut trie: AlaTrie = AlaTrie::new();
/// trie.insert("/users/:id", Payload::new()).unwrap();
///
/// let mut seen = Vec::new();
/// trie.search("/users/42", &mut Setter(|k: &str, v: &str| seen.push(format!("{k}={v}"))));
/// assert_eq!(seen, vec!["id=42"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Setter<F>(pub F);

impl<F> ParamsSink for Setter<F>
where
    F: FnMut(&str, &str),
{
    fn set(&mut self, key: &str, value: &str) {
        (self.0)(key, value)
    }
}

impl ParamsSink for HashMap<String, String> {
    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl ParamsSink for Vec<(String, String)> {
    fn set(&mut self, key: &str, value: &str) {
        self.push((key.to_owned(), value.to_owned()));
    }
}

/// A single captured parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParamEntry {
    /// Parameter name as declared in the pattern, without its marker
    pub key: String,
    /// Captured text
    pub value: String,
}

/// Ordered parameter store meant to be reused across requests.
///
/// [`reset`](RouteParams::reset) forgets the stored entries but keeps their
/// string buffers, so a pooled instance stops allocating once it has seen its
/// largest request.
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    entries: Vec<ParamEntry>,
    len: usize,
}

impl RouteParams {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the value of the first entry named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored entries in capture order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParamEntry> {
        self.as_slice().iter()
    }

    /// Stored entries in capture order.
    pub fn as_slice(&self) -> &[ParamEntry] {
        &self.entries[..self.len]
    }

    /// Forget all entries, keeping allocated buffers for reuse.
    pub fn reset(&mut self) {
        self.len = 0;
    }
}

impl ParamsSink for RouteParams {
    fn set(&mut self, key: &str, value: &str) {
        if let Some(slot) = self.entries.get_mut(self.len) {
            slot.key.clear();
            slot.key.push_str(key);
            slot.value.clear();
            slot.value.push_str(value);
        } else {
            self.entries.push(ParamEntry {
                key: key.to_owned(),
                value: value.to_owned(),
            });
        }
        self.len += 1;
    }
}

impl<'a> IntoIterator for &'a RouteParams {
    type Item = &'a ParamEntry;
    type IntoIter = std::slice::Iter<'a, ParamEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
