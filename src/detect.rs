//! Locating the Docusaurus project on disk.
//!
//! Migrations usually run from the project root, from a checkout wrapper
//! holding `input-docusaurus/`, or from a sibling output folder. Each folder
//! is looked up independently in that order:
//!
//! ```text
//! <base>/docs
//! <base>/input-docusaurus/docs
//! <base>/../docs
//! ```

use std::path::{Path, PathBuf};

/// Wrapper folder some checkouts keep the Docusaurus site in.
pub const WRAPPER_DIR: &str = "input-docusaurus";

pub const DOCS_DIR: &str = "docs";
pub const STATIC_DIR: &str = "static";

/// First existing directory named `name` among the candidate locations.
pub fn find_dir(base: &Path, name: &str) -> Option<PathBuf> {
    [
        base.join(name),
        base.join(WRAPPER_DIR).join(name),
        base.join("..").join(name),
    ]
    .into_iter()
    .find(|candidate| candidate.is_dir())
}

/// Where the inputs of a migration live.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLayout {
    pub docs_dir: PathBuf,
    pub static_dir: Option<PathBuf>,
    /// Parent of `docs_dir`; holds `docusaurus.config.*`, `src/css/` and
    /// `migrate.toml`.
    pub project_root: PathBuf,
}

impl SourceLayout {
    /// Search around `base` for `docs/` and `static/`.
    pub fn detect(base: &Path) -> Option<Self> {
        let docs_dir = find_dir(base, DOCS_DIR)?;
        let static_dir = find_dir(base, STATIC_DIR);
        Some(Self {
            project_root: parent_or_current(&docs_dir),
            docs_dir,
            static_dir,
        })
    }

    /// Use an explicit docs directory; `static/` is its sibling if present.
    pub fn from_docs_dir(docs_dir: impl Into<PathBuf>) -> Self {
        let docs_dir = docs_dir.into();
        let project_root = parent_or_current(&docs_dir);
        let static_dir = Some(project_root.join(STATIC_DIR)).filter(|dir| dir.is_dir());
        Self {
            docs_dir,
            static_dir,
            project_root,
        }
    }
}

fn parent_or_current(dir: &Path) -> PathBuf {
    match dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
