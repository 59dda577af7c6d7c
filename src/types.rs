//! Navigation tree types shared by the walker, the tab assembler and the
//! CLI output.
//!
//! These serialize directly into Mintlify's `docs.json` shape: a page is a
//! bare slug string, a group is `{ "group", "expanded", "pages" }`.

use serde::{Deserialize, Serialize};

/// One entry in a group's `pages` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Slug of an emitted document: relative, extension-less, `/`-separated.
    Page(String),
    Group(Group),
}

impl NavEntry {
    pub fn as_page(&self) -> Option<&str> {
        match self {
            NavEntry::Page(slug) => Some(slug),
            NavEntry::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            NavEntry::Page(_) => None,
            NavEntry::Group(group) => Some(group),
        }
    }
}

/// A labelled, ordered collection of pages and nested groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "group")]
    pub label: String,
    /// Sidebar display flag; migrated groups start collapsed.
    #[serde(default)]
    pub expanded: bool,
    pub pages: Vec<NavEntry>,
}

impl Group {
    /// An empty, collapsed group.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            expanded: false,
            pages: Vec::new(),
        }
    }

    /// A collapsed group holding the given nested groups.
    pub fn of_groups(label: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            label: label.into(),
            expanded: false,
            pages: groups.into_iter().map(NavEntry::Group).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Every slug in this group and its descendants, in navigation order.
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs = Vec::new();
        collect_slugs(&self.pages, &mut slugs);
        slugs
    }
}

fn collect_slugs<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a str>) {
    for entry in entries {
        match entry {
            NavEntry::Page(slug) => out.push(slug),
            NavEntry::Group(group) => collect_slugs(&group.pages, out),
        }
    }
}

/// A top-level navigation tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    #[serde(rename = "tab")]
    pub name: String,
    pub groups: Vec<Group>,
}
