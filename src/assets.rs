//! Static asset copy into the output `images/` folder.
//!
//! Docusaurus serves `static/` at the site root; the converter rewrites every
//! image reference to `/images/<path>`, so each asset folder is flattened
//! into `images/` with its internal structure kept:
//!
//! ```text
//! static/img/diagrams/flow.png   →  images/diagrams/flow.png
//! static/assets/video.gif        →  images/video.gif
//! static/logo.svg                →  images/logo.svg
//! ```
//!
//! Later folders overwrite earlier ones on name clashes.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Folders under `static/` whose contents are copied, in copy order.
pub const ASSET_FOLDERS: &[&str] = &["img", "images", "assets", "public", "static"];

/// Loose files at the top of `static/` that are copied too.
pub const ROOT_ASSET_FILES: &[&str] = &[
    "logo.svg",
    "logo.png",
    "favicon.ico",
    "logo-light.svg",
    "logo-dark.svg",
    "logo-light.png",
    "logo-dark.png",
];

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl AssetError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Existing asset folders under `static_dir`, in copy order.
pub fn asset_folders(static_dir: &Path) -> Vec<PathBuf> {
    ASSET_FOLDERS
        .iter()
        .map(|folder| static_dir.join(folder))
        .filter(|dir| dir.is_dir())
        .collect()
}

/// Copy the asset folders and root logo files from `static_dir` into
/// `images_dir`. Returns the number of files copied.
pub fn copy_static_assets(static_dir: &Path, images_dir: &Path) -> Result<usize, AssetError> {
    fs::create_dir_all(images_dir).map_err(|e| AssetError::io(images_dir, e))?;

    let mut copied = 0;
    for src in asset_folders(static_dir) {
        let count = copy_tree(&src, images_dir)?;
        tracing::debug!(folder = %src.display(), count, "copied asset folder");
        copied += count;
    }

    for name in ROOT_ASSET_FILES {
        let src = static_dir.join(name);
        if src.is_file() {
            let dst = images_dir.join(name);
            fs::copy(&src, &dst).map_err(|e| AssetError::io(&dst, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Recursively copy the contents of `src` into `dst`, overwriting.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| AssetError::io(&target, e))?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| AssetError::io(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| AssetError::io(&target, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn folders_flattened_into_images() {
        let tmp = TempDir::new().unwrap();
        let static_dir = tmp.path().join("static");
        write(&static_dir, "img/diagrams/flow.png", "flow");
        write(&static_dir, "assets/video.gif", "gif");
        let images = tmp.path().join("out/images");

        let copied = copy_static_assets(&static_dir, &images).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(images.join("diagrams/flow.png")).unwrap(), "flow");
        assert!(images.join("video.gif").is_file());
    }

    #[test]
    fn root_logo_files_copied() {
        let tmp = TempDir::new().unwrap();
        let static_dir = tmp.path().join("static");
        write(&static_dir, "logo.svg", "svg");
        write(&static_dir, "favicon.ico", "ico");
        write(&static_dir, "robots.txt", "ignored");
        let images = tmp.path().join("images");

        assert_eq!(copy_static_assets(&static_dir, &images).unwrap(), 2);
        assert!(images.join("logo.svg").is_file());
        assert!(images.join("favicon.ico").is_file());
        assert!(!images.join("robots.txt").exists());
    }

    #[test]
    fn later_folder_overwrites_earlier() {
        let tmp = TempDir::new().unwrap();
        let static_dir = tmp.path().join("static");
        write(&static_dir, "img/logo.png", "from img");
        write(&static_dir, "images/logo.png", "from images");
        let images = tmp.path().join("images");

        copy_static_assets(&static_dir, &images).unwrap();
        assert_eq!(fs::read_to_string(images.join("logo.png")).unwrap(), "from images");
    }

    #[test]
    fn asset_folders_in_copy_order() {
        let tmp = TempDir::new().unwrap();
        for folder in ["static", "img", "assets"] {
            fs::create_dir_all(tmp.path().join(folder)).unwrap();
        }
        fs::write(tmp.path().join("images"), "not a dir").unwrap();
        assert_eq!(
            asset_folders(tmp.path()),
            vec![
                tmp.path().join("img"),
                tmp.path().join("assets"),
                tmp.path().join("static"),
            ]
        );
    }

    #[test]
    fn empty_static_dir_copies_nothing() {
        let tmp = TempDir::new().unwrap();
        let static_dir = tmp.path().join("static");
        fs::create_dir_all(&static_dir).unwrap();
        let images = tmp.path().join("images");

        assert_eq!(copy_static_assets(&static_dir, &images).unwrap(), 0);
        assert!(images.is_dir());
    }
}
