// Copyright (c) 2025 Mauka Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ala Route Trie Implementation
//!
//! A segment trie over slash-delimited patterns that maps a request path to
//! its registered route and extracts positional parameters in time
//! proportional to the path length.
//!
//! # Pattern grammar
//!
//! * `/users/list` - literal segments, matched exactly
//! * `/users/:id` - a named parameter captures one segment
//! * `/files/*path` - a wildcard captures the rest of the path, slashes
//!   included, and must be the last segment
//!
//! # Precedence
//!
//! At every segment a literal child wins over the parameter slot, which wins
//! over the wildcard slot. When a path runs into a dead end, the search falls
//! back to the nearest enclosing wildcard route; a wildcard registered at the
//! root catches everything else. Only that single level of fallback exists:
//! there is no backtracking across sibling branches.
//!
//! # Concurrency
//!
//! Registration takes `&mut self`, lookups take `&self`. Build the trie
//! first, then share it (for example behind an `Arc`) and search from as
//! many threads as needed, each with its own [`ParamsSink`].
//!
//! # Example
//!
//! ```
//! use mauka_router::data_structures::ala_trie::{AlaTrie, Payload, RouteParams};
//!
//! let mut trie = AlaTrie::new();
//! trie.insert("/second/wild/*mywildcardparam", Payload::new().with_handler(1)).unwrap();
//! trie.insert("/second/wild/static", Payload::new().with_handler(2)).unwrap();
//!
//! let mut params = RouteParams::new();
//! let node = trie.search("/second/wild/static", &mut params).unwrap();
//! assert_eq!(node.handler(), Some(&2));
//! assert!(params.is_empty());
//!
//! let node = trie.search("/second/wild/anything/here", &mut params).unwrap();
//! assert_eq!(node.handler(), Some(&1));
//! assert_eq!(params.get("mywildcardparam"), Some("anything/here"));
//! ```

mod config;
mod error;
mod node;
mod params;
mod payload;
mod segment;

#[cfg(test)]
mod tests;

pub use config::{AlaTrieConfig, DEFAULT_MAX_DEPTH};
pub use error::{AlaTrieError, AlaTrieResult};
pub use node::{by_segment_count, Ancestors, KeysSorter, NodeId, NodeRef, DEFAULT_KEYS_SORTER};
pub use params::{ParamEntry, ParamsSink, RouteParams, Setter};
pub use payload::Payload;
pub use segment::{Segment, PARAM_START, PATH_SEPARATOR, WILDCARD_PARAM_START};

use node::AlaNode;

/// Route trie mapping slash-delimited patterns to payloads.
///
/// # Type Parameters
///
/// * `H` - Handler type attached to routes. Defaults to `()` for tries that
///   only carry tags and data.
#[derive(Debug)]
pub struct AlaTrie<H = ()> {
    /// Node arena; index 0 is the root
    nodes: Vec<AlaNode<H>>,

    /// Whether a wildcard pattern starts at the very first segment
    has_root_wildcard: bool,

    /// Number of registered patterns
    routes: usize,

    /// Configuration options
    config: AlaTrieConfig,
}

impl<H> AlaTrie<H> {
    /// Creates a new empty `AlaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(AlaTrieConfig::default())
    }

    /// Creates a new empty `AlaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: AlaTrieConfig) -> Self {
        Self {
            nodes: vec![AlaNode::new(None)],
            has_root_wildcard: false,
            routes: 0,
            config,
        }
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &AlaTrieConfig {
        &self.config
    }

    /// Registers a pattern with its payload.
    ///
    /// Re-registering a pattern that ends on an existing terminal node replaces
    /// that node's payload, key and parameter names in place.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to register, starting with `/`.
    /// * `payload` - Handler, tag and data for the route.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if a new route was added, `false` if an existing one was replaced.
    /// * `Err(AlaTrieError)` - If the pattern is malformed.
    pub fn insert<P>(&mut self, pattern: P, payload: Payload<H>) -> AlaTrieResult<bool>
    where
        P: AsRef<str>,
    {
        let pattern = pattern.as_ref();
        let segments = self.parse_pattern(pattern)?;

        let mut current = NodeId::ROOT;
        let mut param_keys = Vec::new();

        for segment in segments {
            match segment {
                Segment::Static(_) => {}
                Segment::Named(name) => param_keys.push(name.to_owned()),
                Segment::Wildcard(name) => {
                    param_keys.push(name.to_owned());
                    if current == NodeId::ROOT {
                        self.has_root_wildcard = true;
                    }
                }
            }
            current = self.child_or_insert(current, segment);
        }

        let routes = &mut self.routes;
        let node = &mut self.nodes[current.index()];
        let is_new = !node.end;

        if is_new {
            *routes += 1;
            tracing::debug!(pattern, "registered route");
        } else {
            tracing::warn!(pattern, previous = %node.key, "replaced route payload");
        }

        node.end = true;
        node.key = pattern.to_owned();
        node.static_key_len = segment::static_prefix(pattern).len();
        node.param_keys = param_keys;
        node.payload = payload;

        Ok(is_new)
    }

    /// Matches a concrete path and writes its parameters into `params`.
    ///
    /// The path is used as given: it must start with `/` and is neither
    /// normalized nor percent-decoded. Parameters are written only when a
    /// route is found.
    ///
    /// A match reached through a wildcard fallback binds a single parameter:
    /// the wildcard's own name, holding everything after the route's static
    /// prefix.
    ///
    /// # Arguments
    ///
    /// * `path` - The request path.
    /// * `params` - Receives the captured `(name, value)` pairs.
    ///
    /// # Returns
    ///
    /// The matched terminal node, or `None` if no route matches.
    pub fn search<S>(&self, path: &str, params: &mut S) -> Option<NodeRef<'_, H>>
    where
        S: ParamsSink + ?Sized,
    {
        if !path.starts_with(PATH_SEPARATOR) {
            return None;
        }

        if path.len() == 1 {
            return match self.root().child(path) {
                Some(node) if node.is_end() => Some(node),
                _ => self.root_wildcard_fallback(path, params),
            };
        }

        let end = path.len();
        let mut current = NodeId::ROOT;
        let mut values: Vec<&str> = Vec::new();
        let mut start = 1;

        loop {
            let stop = path[start..]
                .find(PATH_SEPARATOR)
                .map_or(end, |offset| start + offset);
            let segment = &path[start..stop];
            let node = &self.nodes[current.index()];

            if let Some(child) = node.literal_child(segment) {
                current = child;
            } else if let Some(child) = node.named_child {
                current = child;
                values.push(segment);
            } else if let Some(child) = node.wildcard_child {
                current = child;
                values.push(&path[start..]);
                break;
            } else {
                return self.ancestor_fallback(current, path, params);
            }

            if stop == end {
                break;
            }
            start = stop + 1;
        }

        let matched = self.node_ref(current);
        if !matched.is_end() {
            return self
                .ancestor_fallback(current, path, params)
                .or_else(|| self.root_wildcard_fallback(path, params));
        }

        for (key, value) in matched.param_keys().iter().zip(values) {
            params.set(key, value);
        }
        Some(matched)
    }

    /// Resolves `prefix` through literal children only.
    ///
    /// Parameter and wildcard slots are never consulted, so this answers
    /// "is this exact literal path part of the tree" rather than dispatching
    /// a request.
    pub fn search_prefix(&self, prefix: &str) -> Option<NodeRef<'_, H>> {
        if !prefix.starts_with(PATH_SEPARATOR) {
            return None;
        }

        segment::split_path(prefix)
            .into_iter()
            .try_fold(self.root(), |node, segment| node.child(segment))
    }

    /// Whether `prefix` resolves through literal children.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.search_prefix(prefix).is_some()
    }

    /// Every registered pattern under the literal `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Literal path prefix, starting with `/`.
    /// * `sorter` - Ordering for the result; pass [`DEFAULT_KEYS_SORTER`] for
    ///   shallowest-first. `None` leaves the order unspecified.
    pub fn autocomplete(&self, prefix: &str, sorter: Option<KeysSorter>) -> Vec<&str> {
        self.search_prefix(prefix)
            .map(|node| node.keys(sorter))
            .unwrap_or_default()
    }

    /// Registered patterns enclosing the literal `prefix`, nearest first.
    ///
    /// The node `prefix` resolves to is not included itself.
    pub fn enclosing_routes(&self, prefix: &str) -> Vec<&str> {
        self.search_prefix(prefix)
            .map(|node| node.enclosing_keys())
            .unwrap_or_default()
    }

    /// Handle to the root node.
    pub fn root(&self) -> NodeRef<'_, H> {
        self.node_ref(NodeId::ROOT)
    }

    /// Handle to an arbitrary node, if `id` belongs to this trie.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, H>> {
        (id.index() < self.nodes.len()).then(|| self.node_ref(id))
    }

    /// Whether a wildcard pattern is registered at the first segment.
    pub fn has_root_wildcard(&self) -> bool {
        self.has_root_wildcard
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.routes
    }

    /// Whether no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    fn node_ref(&self, id: NodeId) -> NodeRef<'_, H> {
        NodeRef::new(&self.nodes, id)
    }

    fn parse_pattern<'p>(&self, pattern: &'p str) -> AlaTrieResult<Vec<Segment<'p>>> {
        if pattern.is_empty() {
            return Err(AlaTrieError::EmptyPattern);
        }
        if !pattern.starts_with(PATH_SEPARATOR) {
            return Err(AlaTrieError::MissingLeadingSlash(pattern.to_owned()));
        }

        let segments: Vec<Segment<'p>> = segment::split_path(pattern)
            .into_iter()
            .map(Segment::classify)
            .collect();

        if segments.len() > self.config.max_depth() {
            return Err(AlaTrieError::PatternTooDeep {
                pattern: pattern.to_owned(),
                max_depth: self.config.max_depth(),
            });
        }

        if self.config.strict_patterns() {
            let last = segments.len() - 1;
            for (position, segment) in segments.iter().enumerate() {
                if segment.param_name() == Some("") {
                    return Err(AlaTrieError::EmptyParameterName(pattern.to_owned()));
                }
                if matches!(segment, Segment::Wildcard(_)) && position != last {
                    return Err(AlaTrieError::WildcardNotLast(pattern.to_owned()));
                }
            }
        }

        Ok(segments)
    }

    fn child_or_insert(&mut self, parent: NodeId, segment: Segment<'_>) -> NodeId {
        if let Some(existing) = self.nodes[parent.index()].child_for(segment) {
            return existing;
        }

        let child = NodeId::new(self.nodes.len());
        self.nodes.push(AlaNode::new(Some(parent)));
        self.nodes[parent.index()].add_child(segment, child)
    }

    /// Rebinds a dead-end search to the nearest enclosing wildcard route,
    /// capturing everything after that route's static prefix.
    fn ancestor_fallback<S>(&self, from: NodeId, path: &str, params: &mut S) -> Option<NodeRef<'_, H>>
    where
        S: ParamsSink + ?Sized,
    {
        let wildcard = self
            .node_ref(from)
            .find_closest_parent_wildcard()
            .filter(|node| node.is_end())?;

        let value = path.get(wildcard.static_key().len()..).unwrap_or_default();
        if let Some(name) = wildcard.param_keys().last() {
            params.set(name, value);
        }

        tracing::trace!(path, route = wildcard.key(), "matched through enclosing wildcard");
        Some(wildcard)
    }

    fn root_wildcard_fallback<S>(&self, path: &str, params: &mut S) -> Option<NodeRef<'_, H>>
    where
        S: ParamsSink + ?Sized,
    {
        if !self.has_root_wildcard {
            return None;
        }

        let wildcard = self.root().wildcard_child().filter(|node| node.is_end())?;
        if let Some(name) = wildcard.param_keys().last() {
            params.set(name, &path[1..]);
        }

        tracing::trace!(path, route = wildcard.key(), "matched through root wildcard");
        Some(wildcard)
    }
}

impl<H> Default for AlaTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}
