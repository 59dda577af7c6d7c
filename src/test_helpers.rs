//! Shared test utilities for the migrator test suite.
//!
//! Provides temp-tree builders, lookup helpers, and navigation shape
//! assertions that work with walker output (`Group`, `Tab`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = docs_tree(&[
//!     ("intro.md", "# Intro"),
//!     ("android-core/setup.md", "x"),
//! ]);
//! let mut sink = MemorySink::default();
//! let tabs = assemble(tmp.path(), &mut sink).unwrap().into_tabs();
//!
//! assert_nav_shape(&tabs, &[
//!     ("Guides", &["Getting Started"]),
//!     ("SDKs", &["Mobile"]),
//! ]);
//! ```

use std::fs;
use tempfile::TempDir;

use crate::types::{Group, NavEntry, Tab};

// =========================================================================
// Tree setup
// =========================================================================

/// Create a temp directory holding the given `(relative path, contents)`
/// files, with parent directories created as needed.
pub fn docs_tree(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, contents) in files {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
    tmp
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a tab by name. Panics if not found.
pub fn find_tab<'a>(tabs: &'a [Tab], name: &str) -> &'a Tab {
    tabs.iter().find(|t| t.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = tabs.iter().map(|t| t.name.as_str()).collect();
        panic!("tab '{name}' not found. Available: {names:?}")
    })
}

/// Find a top-level group of a tab by label. Panics if not found.
pub fn find_group<'a>(tab: &'a Tab, label: &str) -> &'a Group {
    tab.groups
        .iter()
        .find(|g| g.label == label)
        .unwrap_or_else(|| {
            let labels: Vec<&str> = tab.groups.iter().map(|g| g.label.as_str()).collect();
            panic!(
                "group '{label}' not found in tab '{}'. Available: {labels:?}",
                tab.name
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Slugs of the pages listed directly in a group, in order.
pub fn page_slugs(group: &Group) -> Vec<&str> {
    group.pages.iter().filter_map(NavEntry::as_page).collect()
}

/// One line per direct entry: slugs as-is, nested groups as `[Label]`.
pub fn entry_labels(group: &Group) -> Vec<String> {
    group
        .pages
        .iter()
        .map(|entry| match entry {
            NavEntry::Page(slug) => slug.clone(),
            NavEntry::Group(child) => format!("[{}]", child.label),
        })
        .collect()
}

// =========================================================================
// Navigation assertions
// =========================================================================

/// Assert tab names and each tab's top-level group labels, in order.
pub fn assert_nav_shape(tabs: &[Tab], expected: &[(&str, &[&str])]) {
    let actual: Vec<(&str, Vec<&str>)> = tabs
        .iter()
        .map(|t| {
            (
                t.name.as_str(),
                t.groups.iter().map(|g| g.label.as_str()).collect(),
            )
        })
        .collect();
    let expected: Vec<(&str, Vec<&str>)> = expected
        .iter()
        .map(|(name, groups)| (*name, groups.to_vec()))
        .collect();
    assert_eq!(actual, expected, "navigation shape mismatch");
}

/// Assert that no group anywhere below `group` is empty.
pub fn assert_no_empty_groups(group: &Group) {
    for entry in &group.pages {
        if let NavEntry::Group(child) = entry {
            assert!(!child.is_empty(), "empty group '{}' listed", child.label);
            assert_no_empty_groups(child);
        }
    }
}
