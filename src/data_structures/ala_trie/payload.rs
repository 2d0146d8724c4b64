// Copyright (c) 2025 Mauka Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data attached to a registered route.

use serde_json::Value;

/// What a terminal node carries: an optional handler, a route name and
/// arbitrary JSON data. Every part may be absent.
///
/// # Example
///
/// ```
/// use mauka_router::data_structures::ala_trie::Payload;
///
/// let payload = Payload::new()
///     .with_handler("users::show")
///     .with_tag("user_detail");
///
/// assert_eq!(payload.handler(), Some(&"users::show"));
/// assert_eq!(payload.tag(), Some("user_detail"));
/// assert!(payload.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<H> {
    handler: Option<H>,
    tag: Option<String>,
    data: Option<Value>,
}

impl<H> Payload<H> {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self {
            handler: None,
            tag: None,
            data: None,
        }
    }

    /// Attach a handler.
    pub fn with_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Attach a tag, typically the route name.
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach arbitrary data.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The attached handler, if any.
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// The attached tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The attached data, if any.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

impl<H> Default for Payload<H> {
    fn default() -> Self {
        Self::new()
    }
}
