//! Sibling ordering within one directory.
//!
//! Docusaurus sidebars are ordered by explicit ranks rather than by file
//! name. Each entry gets a numeric rank:
//!
//! | Entry | Rank |
//! |-------|------|
//! | `index` / `readme` content file | `-1` (always first) |
//! | subdirectory | `position` from its `_category_.json` |
//! | other content file | `sidebar_position` from its frontmatter |
//! | anything without an explicit rank | [`DEFAULT_RANK`] |
//!
//! Entries are sorted by `(index first, rank, name)`, so a landing page
//! precedes siblings with any explicit rank, negative ones included. Files
//! and directories interleave freely; the entry type plays no part otherwise.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::metadata;
use crate::naming;

/// Rank of entries with no explicit position: after every ranked sibling.
pub const DEFAULT_RANK: f64 = 9999.0;

/// Rank reserved for directory landing pages.
pub const INDEX_RANK: f64 = -1.0;

/// One directory entry with its resolved rank.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub rank: f64,
}

/// Whether an entry is a directory landing page (`index.md`, `README.mdx`, ...).
pub fn is_index_entry(name: &str, is_dir: bool) -> bool {
    !is_dir && naming::is_content_file(name) && naming::is_index_stem(naming::stem(name))
}

impl SourceNode {
    /// Total sibling order: landing page first, then rank ascending, then name.
    pub fn sibling_cmp(&self, other: &Self) -> Ordering {
        other
            .is_index()
            .cmp(&self.is_index())
            .then_with(|| self.rank.total_cmp(&other.rank))
            .then_with(|| self.name.cmp(&other.name))
    }

    pub fn is_index(&self) -> bool {
        is_index_entry(&self.name, self.is_dir)
    }

    /// Whether this entry is a `.md`/`.mdx` document.
    pub fn is_content(&self) -> bool {
        !self.is_dir && naming::is_content_file(&self.name)
    }
}

/// Sort nodes into display order in place.
pub fn sort_nodes(nodes: &mut [SourceNode]) {
    nodes.sort_by(SourceNode::sibling_cmp);
}

/// Compute the rank of a single entry.
///
/// Reads the entry's `_category_.json` or frontmatter as needed; unreadable
/// sources fall back to [`DEFAULT_RANK`].
pub fn rank_entry(path: &Path, name: &str, is_dir: bool) -> f64 {
    if is_dir {
        return metadata::read_category_meta(path)
            .position()
            .unwrap_or(DEFAULT_RANK);
    }
    if is_index_entry(name, is_dir) {
        return INDEX_RANK;
    }
    if !naming::is_content_file(name) {
        return DEFAULT_RANK;
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            metadata::sidebar_position(&metadata::extract_frontmatter(&content))
                .unwrap_or(DEFAULT_RANK)
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "unreadable document, using default rank");
            DEFAULT_RANK
        }
    }
}

/// List a directory's visible entries in display order.
///
/// Dotfiles and `_category_.json` are skipped.
pub fn sorted_entries(dir: &Path) -> std::io::Result<Vec<SourceNode>> {
    let mut nodes = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if naming::is_hidden(&name) {
            continue;
        }
        let path = entry.path();
        let is_dir = path.is_dir();
        let rank = rank_entry(&path, &name, is_dir);
        nodes.push(SourceNode {
            name,
            path,
            is_dir,
            rank,
        });
    }
    sort_nodes(&mut nodes);
    Ok(nodes)
}
