//! Data structures for the Mauka router.
//!
//! This module contains the route trie and the types that travel through
//! it. The trie is built once behind `&mut` access and then searched from
//! any number of threads through shared references.

pub mod ala_trie;

// Re-export common data structures
pub use ala_trie::{AlaTrie, AlaTrieConfig, AlaTrieError, AlaTrieResult, Payload, RouteParams};
