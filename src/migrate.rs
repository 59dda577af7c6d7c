//! End-to-end migration run.
//!
//! ```text
//! 1. reset the output directory
//! 2. copy static assets       static/  →  <out>/images/
//! 3. scrape branding          config file, custom.css, logo files
//! 4. walk + convert docs      docs/    →  <out>/**/*.mdx
//! 5. write the manifest                →  <out>/docs.json
//! ```
//!
//! [`check`] runs step 4 into memory and builds the manifest without
//! touching the disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::assets::{self, AssetError};
use crate::branding::{self, Branding};
use crate::config::{ConfigError, SiteConfig};
use crate::detect::SourceLayout;
use crate::navigation::{self, DocsJson};
use crate::scan::{FsSink, MemorySink, PageSink, ScanError};

/// Manifest file written at the output root.
pub const MANIFEST_FILE: &str = "docs.json";

/// Output subfolder receiving static assets.
pub const IMAGES_DIR: &str = "images";

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Docs directory not found: {}", .0.display())]
    DocsNotFound(PathBuf),
    #[error("Output directory {} overlaps the docs source", .0.display())]
    OutputOverlapsSource(PathBuf),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MigrateError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct MigrationReport {
    pub manifest: DocsJson,
    /// `None` for [`check`] runs.
    pub output_dir: Option<PathBuf>,
    pub page_count: usize,
    pub asset_count: usize,
}

/// Migrate `layout` into `output_dir`, replacing whatever was there.
pub fn migrate(
    layout: &SourceLayout,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<MigrationReport, MigrateError> {
    ensure_docs_dir(layout)?;
    reset_output_dir(&layout.docs_dir, output_dir)?;

    let images_dir = output_dir.join(IMAGES_DIR);
    let asset_count = match &layout.static_dir {
        Some(static_dir) => {
            info!(from = %static_dir.display(), "copying static assets");
            assets::copy_static_assets(static_dir, &images_dir)?
        }
        None => 0,
    };

    let branding = branding::detect_branding(
        &layout.project_root,
        layout.static_dir.as_deref(),
        Some(&images_dir),
        &config.branding,
    );

    let mut sink = FsSink::new(output_dir);
    let (manifest, page_count) = build(layout, &branding, config, &mut sink)?;

    let manifest_path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&manifest_path, json).map_err(|e| MigrateError::io(&manifest_path, e))?;
    info!(path = %manifest_path.display(), "wrote manifest");

    Ok(MigrationReport {
        manifest,
        output_dir: Some(output_dir.to_path_buf()),
        page_count,
        asset_count,
    })
}

/// Walk and convert everything in memory; nothing is written.
///
/// The returned sink holds every converted page keyed by output path.
pub fn check(
    layout: &SourceLayout,
    config: &SiteConfig,
) -> Result<(MigrationReport, MemorySink), MigrateError> {
    ensure_docs_dir(layout)?;

    let branding = branding::detect_branding(
        &layout.project_root,
        layout.static_dir.as_deref(),
        None,
        &config.branding,
    );

    let mut sink = MemorySink::default();
    let (manifest, page_count) = build(layout, &branding, config, &mut sink)?;

    let report = MigrationReport {
        manifest,
        output_dir: None,
        page_count,
        asset_count: 0,
    };
    Ok((report, sink))
}

fn build(
    layout: &SourceLayout,
    branding: &Branding,
    config: &SiteConfig,
    sink: &mut dyn PageSink,
) -> Result<(DocsJson, usize), MigrateError> {
    info!(docs = %layout.docs_dir.display(), "converting documents");
    let tabs = navigation::assemble(&layout.docs_dir, sink)?.into_tabs();
    let page_count = navigation::page_count(&tabs);
    info!(pages = page_count, tabs = tabs.len(), "navigation assembled");
    Ok((navigation::build_manifest(tabs, branding, config), page_count))
}

fn ensure_docs_dir(layout: &SourceLayout) -> Result<(), MigrateError> {
    if layout.docs_dir.is_dir() {
        Ok(())
    } else {
        Err(MigrateError::DocsNotFound(layout.docs_dir.clone()))
    }
}

/// Empty `output_dir`, refusing when it contains the docs tree or lives
/// inside it.
fn reset_output_dir(docs_dir: &Path, output_dir: &Path) -> Result<(), MigrateError> {
    let out = canonical_target(output_dir).map_err(|e| MigrateError::io(output_dir, e))?;
    let docs = fs::canonicalize(docs_dir).map_err(|e| MigrateError::io(docs_dir, e))?;
    if docs.starts_with(&out) || out.starts_with(&docs) {
        return Err(MigrateError::OutputOverlapsSource(output_dir.to_path_buf()));
    }
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(|e| MigrateError::io(output_dir, e))?;
    }
    fs::create_dir_all(output_dir).map_err(|e| MigrateError::io(output_dir, e))
}

/// Canonical form of a path that may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing tail appended.
fn canonical_target(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut tail = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }
    let mut resolved = fs::canonicalize(existing)?;
    resolved.extend(tail.iter().rev());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn project(files: &[(&str, &str)]) -> (TempDir, SourceLayout) {
        let tmp = docs_tree(files);
        let layout = SourceLayout::from_docs_dir(tmp.path().join("docs"));
        (tmp, layout)
    }

    #[test]
    fn migrate_writes_pages_assets_and_manifest() {
        let (tmp, layout) = project(&[
            ("docs/intro.md", "# Welcome\nHi"),
            ("docs/android/setup.md", ":::tip\nUse Gradle\n:::"),
            ("static/img/shot.png", "png"),
            ("static/img/logo.svg", "svg"),
            ("docusaurus.config.js", "title: 'Acme'"),
        ]);
        let out = tmp.path().join("out");

        let report = migrate(&layout, &out, &SiteConfig::default()).unwrap();

        assert_eq!(report.page_count, 2);
        assert_eq!(report.asset_count, 2);
        assert_eq!(report.output_dir.as_deref(), Some(out.as_path()));
        assert!(out.join("intro.mdx").is_file());
        assert!(out.join("images/shot.png").is_file());
        let setup = fs::read_to_string(out.join("android/setup.mdx")).unwrap();
        assert!(setup.contains("<Tip>"));

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(MANIFEST_FILE)).unwrap()).unwrap();
        assert_eq!(manifest["name"], "Acme");
        assert_eq!(manifest["logo"]["light"], "/images/logo.svg");
        assert_eq!(manifest["navigation"]["tabs"][1]["tab"], "SDKs");
    }

    #[test]
    fn migrate_replaces_previous_output() {
        let (tmp, layout) = project(&[("docs/intro.md", "x")]);
        let out = tmp.path().join("out");
        fs::create_dir_all(out.join("stale")).unwrap();
        fs::write(out.join("stale/old.mdx"), "old").unwrap();

        migrate(&layout, &out, &SiteConfig::default()).unwrap();

        assert!(!out.join("stale").exists());
        assert!(out.join("intro.mdx").is_file());
    }

    #[test]
    fn missing_docs_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let layout = SourceLayout::from_docs_dir(tmp.path().join("docs"));
        let result = migrate(&layout, &tmp.path().join("out"), &SiteConfig::default());
        assert!(matches!(result, Err(MigrateError::DocsNotFound(_))));
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn output_containing_docs_is_refused() {
        let (tmp, layout) = project(&[("docs/intro.md", "x")]);
        let result = migrate(&layout, tmp.path(), &SiteConfig::default());
        assert!(matches!(result, Err(MigrateError::OutputOverlapsSource(_))));
        assert!(tmp.path().join("docs/intro.md").is_file());
    }

    #[test]
    fn output_inside_docs_is_refused() {
        let (tmp, layout) = project(&[("docs/a.md", "x"), ("docs/b.md", "y")]);
        let out = tmp.path().join("docs/zz-out");

        let result = migrate(&layout, &out, &SiteConfig::default());

        assert!(matches!(result, Err(MigrateError::OutputOverlapsSource(_))));
        assert!(!out.exists());
    }

    #[test]
    fn existing_output_inside_docs_is_refused() {
        let (tmp, layout) = project(&[("docs/a.md", "x"), ("docs/site/old.mdx", "old")]);
        let out = tmp.path().join("docs/site");

        let result = migrate(&layout, &out, &SiteConfig::default());

        assert!(matches!(result, Err(MigrateError::OutputOverlapsSource(_))));
        assert!(out.join("old.mdx").is_file());
    }

    #[test]
    fn sibling_output_with_shared_prefix_is_allowed() {
        let (tmp, layout) = project(&[("docs/a.md", "x")]);
        let report = migrate(&layout, &tmp.path().join("docs-out"), &SiteConfig::default()).unwrap();
        assert_eq!(report.page_count, 1);
    }

    #[test]
    fn canonical_target_of_missing_path() {
        let tmp = TempDir::new().unwrap();
        let resolved = canonical_target(&tmp.path().join("a/b")).unwrap();
        assert_eq!(resolved, fs::canonicalize(tmp.path()).unwrap().join("a/b"));
    }

    #[test]
    fn check_writes_nothing() {
        let (tmp, layout) = project(&[("docs/guides/a.md", "x"), ("docs/cli/b.md", "y")]);

        let (report, sink) = check(&layout, &SiteConfig::default()).unwrap();

        assert_eq!(report.page_count, 2);
        assert_eq!(report.output_dir, None);
        assert_eq!(sink.pages.len(), 2);
        assert!(!tmp.path().join("guides").exists());
        assert!(!tmp.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn check_finds_logo_variant_in_static() {
        let (_tmp, layout) = project(&[
            ("docs/intro.md", "x"),
            ("static/img/logo-light.svg", "svg"),
        ]);
        let (report, _) = check(&layout, &SiteConfig::default()).unwrap();
        let logo = report.manifest.logo.unwrap();
        assert_eq!(logo.light, "/images/logo-light.svg");
    }

    #[test]
    fn config_branding_reaches_manifest() {
        let (tmp, layout) = project(&[("docs/intro.md", "x")]);
        let mut config = SiteConfig::default();
        config.branding.color = Some("#0d9373".into());
        config.theme = "maple".into();

        let report = migrate(&layout, &tmp.path().join("out"), &config).unwrap();

        assert_eq!(report.manifest.theme, "maple");
        assert_eq!(report.manifest.colors.dark, "#0d9373");
    }
}
