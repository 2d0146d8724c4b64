//! Tests for the configured route table.

use serde_json::json;

use crate::config::{RouteEntry, RouterConfig};
use crate::data_structures::ala_trie::{AlaTrieConfig, AlaTrieError, ParamEntry, RouteParams};
use crate::error::RouterError;
use crate::route_table::{RouteMatch, RouteTable};

fn sample_config() -> RouterConfig {
    RouterConfig {
        routes: vec![
            RouteEntry::new("/users").with_tag("users"),
            RouteEntry::new("/users/:id").with_tag("user"),
            RouteEntry::new("/users/:id/posts/:post").with_tag("post"),
            RouteEntry::new("/static/*path").with_data(json!({ "root": "/var/www" })),
        ],
        ..RouterConfig::default()
    }
}

#[test]
fn test_lookup_reports_tag_data_and_params() {
    let table = RouteTable::from_config(&sample_config()).unwrap();
    assert_eq!(table.len(), 4);
    assert!(!table.is_empty());

    assert_eq!(
        table.lookup("/users/7/posts/9"),
        Some(RouteMatch {
            pattern: "/users/:id/posts/:post".to_string(),
            tag: Some("post".to_string()),
            data: None,
            params: vec![
                ParamEntry {
                    key: "id".to_string(),
                    value: "7".to_string()
                },
                ParamEntry {
                    key: "post".to_string(),
                    value: "9".to_string()
                },
            ],
        })
    );

    let found = table.lookup("/static/css/site.css").unwrap();
    assert_eq!(found.pattern, "/static/*path");
    assert_eq!(found.data, Some(json!({ "root": "/var/www" })));
    assert_eq!(found.params[0].value, "css/site.css");

    assert_eq!(table.lookup("/nothing"), None);
}

#[test]
fn test_lookup_with_resets_scratch_params() {
    let table = RouteTable::from_config(&sample_config()).unwrap();
    let mut params = RouteParams::new();

    table.lookup_with("/users/1/posts/2", &mut params).unwrap();
    let found = table.lookup_with("/users/3", &mut params).unwrap();

    assert_eq!(found.params.len(), 1);
    assert_eq!(params.get("id"), Some("3"));
}

#[test]
fn test_match_serializes_without_empty_fields() {
    let table = RouteTable::from_config(&sample_config()).unwrap();
    let found = table.lookup("/users/42").unwrap();

    assert_eq!(
        serde_json::to_value(&found).unwrap(),
        json!({
            "pattern": "/users/:id",
            "tag": "user",
            "params": [{ "key": "id", "value": "42" }]
        })
    );
}

#[test]
fn test_complete_and_enclosing() {
    let table = RouteTable::from_config(&sample_config()).unwrap();

    assert_eq!(
        table.complete("/users"),
        vec!["/users", "/users/:id", "/users/:id/posts/:post"]
    );
    assert!(table.complete("/missing").is_empty());
    assert!(table.enclosing("/users").is_empty());
    assert_eq!(table.trie().len(), 4);
}

#[test]
fn test_build_rejects_invalid_patterns() {
    let entries = vec![RouteEntry::new("/a/*rest/b")];
    let err = RouteTable::build(&entries, AlaTrieConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RouterError::Trie(AlaTrieError::WildcardNotLast(_))
    ));

    let entries = vec![RouteEntry::new("/a/b/c")];
    let err = RouteTable::build(&entries, AlaTrieConfig::new().with_max_depth(2)).unwrap_err();
    assert!(matches!(
        err,
        RouterError::Trie(AlaTrieError::PatternTooDeep { max_depth: 2, .. })
    ));
}

#[test]
fn test_later_entries_replace_earlier_ones() {
    let entries = vec![
        RouteEntry::new("/a").with_tag("first"),
        RouteEntry::new("/a").with_tag("second"),
    ];
    let table = RouteTable::build(&entries, AlaTrieConfig::default()).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("/a").and_then(|m| m.tag), Some("second".to_string()));
}
