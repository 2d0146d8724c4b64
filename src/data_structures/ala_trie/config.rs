// Copyright (c) 2025 Mauka Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Ala route trie.

/// Default maximum number of segments in a registered pattern.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for the Ala route trie.
///
/// Controls how strictly patterns are checked at registration time. Lookups
/// are unaffected by these settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlaTrieConfig {
    /// Maximum number of segments a pattern may have
    max_depth: usize,

    /// Whether to reject wildcards that are not the final segment and
    /// parameters without a name
    strict_patterns: bool,
}

impl AlaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_depth: 64
    /// - strict_patterns: true
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_patterns: true,
        }
    }

    /// Set the maximum number of segments a pattern may have.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable strict pattern checks.
    ///
    /// With strict checks off, a wildcard followed by more segments or an
    /// unnamed parameter is accepted as-is. Such routes never panic during
    /// lookup but their matching behavior is unspecified.
    pub fn with_strict_patterns(mut self, strict_patterns: bool) -> Self {
        self.strict_patterns = strict_patterns;
        self
    }

    /// Get the maximum number of segments a pattern may have.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Get whether strict pattern checks are enabled.
    pub fn strict_patterns(&self) -> bool {
        self.strict_patterns
    }
}

impl Default for AlaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
