//! Test utilities and fixtures for the Mauka router.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::data_structures::ala_trie::{AlaTrie, Payload};

/// Routes shared by the crate-level trie suites.
pub const FIXTURE_ROUTES: &[&str] = &[
    "/first",
    "/first/one",
    "/first/one/two",
    "/firstt",
    "/second",
    "/second/one",
    "/second/one/two",
    "/second/one/two/three",
    "/first/one/with/:param1/:param2/:param3/static",
    "/first/one/with/:param1/:param2/:param3",
    "/first/one/with/:param/static/:otherparam",
    "/first/one/with/:param",
    "/second/wild/*mywildcardparam",
    "/second/wild/static",
    "/second/wild/:param",
    "/*anything",
];

/// A trie holding [`FIXTURE_ROUTES`], each tagged with its own pattern.
pub fn fixture_trie() -> AlaTrie<usize> {
    let mut trie = AlaTrie::new();
    for (index, pattern) in FIXTURE_ROUTES.iter().enumerate() {
        trie.insert(*pattern, Payload::new().with_handler(index).with_tag(*pattern))
            .unwrap();
    }
    trie
}

/// Strategy for a literal segment that never starts with a marker.
pub fn segment_strategy() -> BoxedStrategy<String> {
    r"[a-z][a-z0-9_\-]{0,7}".prop_map(|s| s).boxed()
}

/// Strategy for a pattern mixing literal segments, named parameters and an
/// optional trailing wildcard.
pub fn pattern_strategy() -> BoxedStrategy<String> {
    let segment = prop_oneof![
        3 => segment_strategy(),
        1 => segment_strategy().prop_map(|name| format!(":{name}")),
    ];
    (
        proptest::collection::vec(segment, 1..6),
        proptest::option::of(segment_strategy()),
    )
        .prop_map(|(segments, wildcard)| {
            let mut pattern = format!("/{}", segments.join("/"));
            if let Some(name) = wildcard {
                pattern.push_str("/*");
                pattern.push_str(&name);
            }
            pattern
        })
        .boxed()
}

/// Temporary directory for configuration files written by a test.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to remove when the fixture is dropped
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
