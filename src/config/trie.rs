//! Trie configuration module.
//!
//! Settings applied to the route trie built from the configured routes.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::ala_trie::{AlaTrieConfig, DEFAULT_MAX_DEPTH};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Route trie settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrieSettings {
    /// Maximum number of segments a pattern may have
    pub max_depth: usize,

    /// Reject wildcards before the last segment and unnamed parameters
    pub strict_patterns: bool,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_patterns: true,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl From<&TrieSettings> for AlaTrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        AlaTrieConfig::new()
            .with_max_depth(settings.max_depth)
            .with_strict_patterns(settings.strict_patterns)
    }
}
