// Copyright (c) 2025 Mauka Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern segments and the markers that classify them.

/// Marks a segment as a single-segment named parameter, e.g. `/users/:id`.
pub const PARAM_START: char = ':';

/// Marks a segment as a wildcard capturing every remaining segment, e.g. `/files/*path`.
pub const WILDCARD_PARAM_START: char = '*';

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// One classified segment of a registered pattern.
///
/// The variant decides which edge of a node the segment travels through:
/// literal children are keyed by their text, while the two dynamic kinds each
/// occupy a dedicated slot so that a literal segment can never be mistaken
/// for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Matched by exact textual equality.
    Static(&'a str),
    /// Captures exactly one path segment under the given name.
    Named(&'a str),
    /// Captures the rest of the path, slashes included, under the given name.
    Wildcard(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies a raw pattern segment by its leading marker.
    pub fn classify(raw: &'a str) -> Self {
        if let Some(name) = raw.strip_prefix(PARAM_START) {
            Segment::Named(name)
        } else if let Some(name) = raw.strip_prefix(WILDCARD_PARAM_START) {
            Segment::Wildcard(name)
        } else {
            Segment::Static(raw)
        }
    }

    /// Returns `true` for named parameters and wildcards.
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Segment::Static(_))
    }

    /// The parameter name for dynamic segments, without its marker.
    pub fn param_name(&self) -> Option<&'a str> {
        match *self {
            Segment::Static(_) => None,
            Segment::Named(name) | Segment::Wildcard(name) => Some(name),
        }
    }
}

/// Splits a slash-led pattern or prefix into its raw segments.
///
/// A single trailing slash is ignored, and the pattern `/` on its own is kept
/// as the one segment `/`. The caller guarantees the leading slash.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    if path == "/" {
        return vec![path];
    }

    let trimmed = path.strip_suffix(PATH_SEPARATOR).unwrap_or(path);
    // The first piece is the empty text before the leading slash.
    trimmed.split(PATH_SEPARATOR).skip(1).collect()
}

/// Returns the literal prefix of `pattern` up to its first dynamic segment.
///
/// For `/files/*path` this is `/files/`; for a fully static pattern it is the
/// whole pattern.
pub(crate) fn static_prefix(pattern: &str) -> &str {
    let mut offset = 0;
    for raw in pattern.split(PATH_SEPARATOR) {
        if Segment::classify(raw).is_dynamic() {
            return &pattern[..offset];
        }
        offset += raw.len() + PATH_SEPARATOR.len_utf8();
    }
    pattern
}
