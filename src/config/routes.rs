//! Route list configuration module.
//!
//! Each entry names a pattern and the tag and data to attach to it.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A single configured route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteEntry {
    /// Pattern to register, e.g. `/users/:id`
    pub pattern: String,

    /// Route name reported on a match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Arbitrary data reported on a match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RouteEntry {
    /// Creates an entry with no tag or data.
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        Self {
            pattern: pattern.into(),
            tag: None,
            data: None,
        }
    }

    /// Attaches a tag.
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attaches data.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl Validate for RouteEntry {
    fn validate(&self) -> ConfigResult<()> {
        if self.pattern.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Route pattern cannot be empty".to_string(),
            ));
        }

        if !self.pattern.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "Route pattern must start with '/': {}",
                self.pattern
            )));
        }

        Ok(())
    }
}

impl Validate for [RouteEntry] {
    fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::with_capacity(self.len());
        for entry in self {
            entry.validate()?;
            if !seen.insert(entry.pattern.as_str()) {
                return Err(ConfigError::DuplicateRoute(entry.pattern.clone()));
            }
        }

        Ok(())
    }
}
