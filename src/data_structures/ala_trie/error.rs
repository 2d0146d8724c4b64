// Copyright (c) 2025 Mauka Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Ala route trie.
//!
//! Only registration can fail. Lookups report a missing route through
//! `Option` instead of an error.

/// Errors that can occur while registering a pattern.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AlaTrieError {
    /// Error when an empty pattern is provided.
    #[error("Empty pattern not allowed")]
    EmptyPattern,

    /// Error when a pattern does not start with `/`.
    #[error("Pattern '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    /// Error when a wildcard segment is followed by further segments.
    #[error("Wildcard must be the last segment of pattern '{0}'")]
    WildcardNotLast(String),

    /// Error when a parameter or wildcard marker has no name.
    #[error("Pattern '{0}' declares a parameter without a name")]
    EmptyParameterName(String),

    /// Error when a pattern has more segments than the trie allows.
    #[error("Pattern '{pattern}' exceeds maximum trie depth of {max_depth}")]
    PatternTooDeep {
        /// The pattern that was too deep.
        pattern: String,
        /// The maximum allowed number of segments.
        max_depth: usize,
    },
}

/// Result type for Ala trie operations.
pub type AlaTrieResult<T> = std::result::Result<T, AlaTrieError>;
