//! Recursive walk of a Docusaurus docs directory.
//!
//! Walks one directory at a time, depth first, converting every content file
//! on the way and building the nested [`Group`] tree the navigation is made
//! of.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/guides/                     # Group "Guides" (title-cased name)
//! ├── _category_.json              # {"label": "Live Video", "position": 2}
//! ├── index.md                     # rank -1: always listed first
//! ├── basics.md                    # sidebar_position: 1
//! ├── advanced.mdx                 # sidebar_position: 2
//! ├── recording/                   # Nested group
//! │   └── start.md
//! └── drafts/                      # No pages anywhere below: pruned
//!     └── empty/
//! ```
//!
//! ## Output
//!
//! Each content file is converted (see [`crate::convert`]) and handed to a
//! [`PageSink`] at its mirrored relative path with an `.mdx` extension. Its
//! slug (`guides/basics`) is appended to the current group.
//!
//! A subdirectory is only listed when it ends up holding at least one page,
//! so pruning works at any depth.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::convert;
use crate::metadata;
use crate::naming::{self, OUTPUT_EXTENSION};
use crate::ordering;
use crate::types::{Group, NavEntry};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Destination for converted documents.
///
/// `rel_path` is relative to the output root and already carries the
/// `.mdx` extension.
pub trait PageSink {
    fn write_page(&mut self, rel_path: &Path, contents: &str) -> Result<(), ScanError>;
}

/// Writes pages below an output directory, creating parents as needed.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PageSink for FsSink {
    fn write_page(&mut self, rel_path: &Path, contents: &str) -> Result<(), ScanError> {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScanError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| ScanError::io(&path, e))
    }
}

/// Keeps pages in memory, keyed by `/`-separated relative path.
///
/// Used by `check` runs and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub pages: BTreeMap<String, String>,
}

impl PageSink for MemorySink {
    fn write_page(&mut self, rel_path: &Path, contents: &str) -> Result<(), ScanError> {
        let key = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        self.pages.insert(key, contents.to_string());
        Ok(())
    }
}

/// Label for a directory's group: `_category_.json` label, else its
/// title-cased name.
pub fn group_label(dir: &Path) -> String {
    let meta = metadata::read_category_meta(dir);
    match meta.label() {
        Some(label) => label.to_string(),
        None => naming::title_case(&dir_name(dir)),
    }
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Join a `/`-separated relative directory and a child name.
pub(crate) fn join_rel(rel_dir: &str, name: &str) -> String {
    if rel_dir.is_empty() {
        name.to_string()
    } else {
        format!("{rel_dir}/{name}")
    }
}

/// Walk `dir` (at `rel_dir` below the docs root) into a [`Group`].
///
/// The returned group may be empty; callers drop empty groups.
pub fn walk_directory(
    dir: &Path,
    rel_dir: &str,
    sink: &mut dyn PageSink,
) -> Result<Group, ScanError> {
    let label = group_label(dir);
    let mut group = Group::new(label.as_str());

    let entries = ordering::sorted_entries(dir).map_err(|e| ScanError::io(dir, e))?;
    for node in entries {
        if node.is_dir {
            let child = walk_directory(&node.path, &join_rel(rel_dir, &node.name), sink)?;
            if child.is_empty() {
                debug!(dir = %node.path.display(), "pruning group without pages");
            } else {
                group.pages.push(NavEntry::Group(child));
            }
        } else if node.is_content() {
            let slug = emit_page(&node.path, rel_dir, &node.name, &label, sink)?;
            push_page(&mut group, slug);
        }
    }

    Ok(group)
}

/// Append a slug unless the group already lists it.
///
/// `intro.md` and `intro.mdx` both map to `intro`; the later file overwrites
/// the earlier one on disk and the slug is listed once.
pub(crate) fn push_page(group: &mut Group, slug: String) {
    if group.pages.iter().any(|e| e.as_page() == Some(slug.as_str())) {
        debug!(%slug, "duplicate slug, keeping last written document");
        return;
    }
    group.pages.push(NavEntry::Page(slug));
}

/// Convert one content file, hand it to the sink, and return its slug.
pub fn emit_page(
    path: &Path,
    rel_dir: &str,
    file_name: &str,
    group_label: &str,
    sink: &mut dyn PageSink,
) -> Result<String, ScanError> {
    let base_name = naming::stem(file_name);
    let is_index = naming::is_index_stem(base_name);
    let raw = fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;

    let converted = convert::convert_document(&raw, base_name, is_index, group_label);

    let mut out_path = PathBuf::new();
    for part in rel_dir.split('/').filter(|p| !p.is_empty()) {
        out_path.push(part);
    }
    out_path.push(format!("{base_name}.{OUTPUT_EXTENSION}"));
    sink.write_page(&out_path, &converted)?;

    let slug = join_rel(rel_dir, base_name);
    debug!(source = %path.display(), %slug, "converted page");
    Ok(slug)
}
