//! Mauka Router Library
//!
//! Request path routing over a segment trie. Patterns are made of literal
//! segments, `:named` parameters that capture one segment and a trailing
//! `*wildcard` that captures the rest of the path.
//!
//! # Architecture
//!
//! - [`data_structures::ala_trie`] holds the trie and its search algorithm
//! - [`route_table`] builds a trie from configured routes
//! - [`config`] loads and validates settings from files and the environment
//! - [`error`] defines the crate error type and error reporting

pub mod config;
pub mod data_structures;
pub mod error;
pub mod route_table;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::ala_trie::{AlaTrie, Payload, RouteParams};
pub use route_table::{RouteMatch, RouteTable};

/// Version information for the Mauka router.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
