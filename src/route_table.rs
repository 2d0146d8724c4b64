//! Route table built from configuration.
//!
//! Wraps an [`AlaTrie`] whose payloads carry the tag and data of each
//! configured route, and reports matches in a serializable form.

use serde::Serialize;
use serde_json::Value;

use crate::config::{RouteEntry, RouterConfig};
use crate::data_structures::ala_trie::{
    AlaTrie, AlaTrieConfig, ParamEntry, Payload, RouteParams, DEFAULT_KEYS_SORTER,
};
use crate::error::RouterResult;

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch {
    /// The registered pattern that matched
    pub pattern: String,

    /// The route's tag, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// The route's data, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Captured parameters in capture order
    pub params: Vec<ParamEntry>,
}

/// Immutable set of routes ready for lookups.
#[derive(Debug)]
pub struct RouteTable {
    trie: AlaTrie,
}

impl RouteTable {
    /// Registers every entry into a trie configured with `trie_config`.
    ///
    /// Later entries with the same pattern replace earlier ones.
    pub fn build<'a, I>(entries: I, trie_config: AlaTrieConfig) -> RouterResult<Self>
    where
        I: IntoIterator<Item = &'a RouteEntry>,
    {
        let mut trie = AlaTrie::with_config(trie_config);

        for entry in entries {
            let mut payload = Payload::new();
            if let Some(tag) = &entry.tag {
                payload = payload.with_tag(tag.as_str());
            }
            if let Some(data) = &entry.data {
                payload = payload.with_data(data.clone());
            }
            trie.insert(&entry.pattern, payload)?;
        }

        tracing::debug!(routes = trie.len(), "route table built");
        Ok(Self { trie })
    }

    /// Builds the table described by a loaded configuration.
    pub fn from_config(config: &RouterConfig) -> RouterResult<Self> {
        Self::build(&config.routes, AlaTrieConfig::from(&config.trie))
    }

    /// Matches `path`, reusing `params` as scratch space.
    pub fn lookup_with(&self, path: &str, params: &mut RouteParams) -> Option<RouteMatch> {
        params.reset();
        let node = self.trie.search(path, params)?;

        Some(RouteMatch {
            pattern: node.key().to_owned(),
            tag: node.tag().map(str::to_owned),
            data: node.data().cloned(),
            params: params.as_slice().to_vec(),
        })
    }

    /// Matches `path`.
    pub fn lookup(&self, path: &str) -> Option<RouteMatch> {
        self.lookup_with(path, &mut RouteParams::new())
    }

    /// Registered patterns under the literal `prefix`, shallowest first.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        self.trie.autocomplete(prefix, Some(DEFAULT_KEYS_SORTER))
    }

    /// Registered patterns enclosing the literal `prefix`, nearest first.
    pub fn enclosing(&self, prefix: &str) -> Vec<&str> {
        self.trie.enclosing_routes(prefix)
    }

    /// The underlying trie.
    pub fn trie(&self) -> &AlaTrie {
        &self.trie
    }

    /// Number of distinct registered patterns.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
