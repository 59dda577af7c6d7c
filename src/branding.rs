//! Site branding scraped from a Docusaurus project.
//!
//! Three values carry over to the Mintlify manifest:
//!
//! - **name**: the `title:` entry of `docusaurus.config.js` (or `.ts`)
//! - **color**: `--ifm-color-primary` in `src/css/custom.css`
//! - **logo**: a `logo.svg` / `logo.png` under `static/`, referenced from the
//!   copied `/images/` folder
//!
//! Each value resolves independently; the first available wins:
//!
//! ```text
//! name:  migrate.toml [branding].name  → docusaurus.config.*  → "Documentation"
//! color: migrate.toml [branding].color → custom.css           → "#2160fd"
//! logo:  migrate.toml [branding].logo  → static/ → images/    → none
//! ```
//!
//! Every source is optional and unreadable files count as absent.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::assets;
use crate::config::BrandingConfig;
use crate::metadata;

pub const DEFAULT_NAME: &str = "Documentation";
pub const DEFAULT_COLOR: &str = "#2160fd";

const CONFIG_FILES: &[&str] = &["docusaurus.config.js", "docusaurus.config.ts"];
const CUSTOM_CSS: &str = "src/css/custom.css";

/// Logo candidates under `static/`, in preference order.
const STATIC_LOGOS: &[&str] = &[
    "img/logo.svg",
    "img/logo.png",
    "logo.svg",
    "logo.png",
    "images/logo.svg",
    "images/logo.png",
];

/// Logo variants looked up in the `images/` folder, or in the places it is
/// copied from when nothing has been copied yet.
const COPIED_LOGOS: &[&str] = &["logo-light.svg", "logo.svg", "logo.png", "logo-light.png"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branding {
    pub name: String,
    /// `#rrggbb`, used for the primary, light and dark manifest colors.
    pub color: String,
    /// Site-absolute logo path such as `/images/logo.svg`.
    pub logo: Option<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            color: DEFAULT_COLOR.to_string(),
            logo: None,
        }
    }
}

/// Scrape branding from the project, letting configured values win.
///
/// `images_dir` is the output `images/` folder after asset copy; `None` when
/// no copy happens (`check`), in which case the copy sources are searched.
pub fn detect_branding(
    project_root: &Path,
    static_dir: Option<&Path>,
    images_dir: Option<&Path>,
    overrides: &BrandingConfig,
) -> Branding {
    let detected_name = detect_name(project_root);
    let detected_color = detect_color(project_root);
    let detected_logo = detect_logo(static_dir, images_dir);

    Branding {
        name: metadata::resolve(&[overrides.name.as_deref(), detected_name.as_deref()])
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        color: metadata::resolve(&[overrides.color.as_deref(), detected_color.as_deref()])
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        logo: metadata::resolve(&[overrides.logo.as_deref(), detected_logo.as_deref()]),
    }
}

/// Site title from the first `title: '…'` entry of the Docusaurus config.
pub fn detect_name(project_root: &Path) -> Option<String> {
    static TITLE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"title:\s*['"](.*?)['"]"#).expect("valid regex"));

    CONFIG_FILES.iter().find_map(|file| {
        let raw = read_optional(&project_root.join(file))?;
        TITLE_RE
            .captures(&raw)
            .map(|caps| caps[1].to_string())
            .filter(|title| !title.trim().is_empty())
    })
}

/// Primary color from the Infima custom property in `custom.css`.
pub fn detect_color(project_root: &Path) -> Option<String> {
    static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)--ifm-color-primary:\s*(#[0-9a-f]{6});").expect("valid regex")
    });

    let raw = read_optional(&project_root.join(CUSTOM_CSS))?;
    COLOR_RE.captures(&raw).map(|caps| caps[1].to_string())
}

/// Logo path as served from the copied `/images/` folder.
pub fn detect_logo(static_dir: Option<&Path>, images_dir: Option<&Path>) -> Option<String> {
    let static_dir = static_dir?;
    let from_static = STATIC_LOGOS
        .iter()
        .map(|rel| static_dir.join(rel))
        .find(|path| path.is_file())
        .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()));

    let search_dirs: Vec<PathBuf> = match images_dir {
        Some(dir) => vec![dir.to_path_buf()],
        None => {
            let mut dirs = assets::asset_folders(static_dir);
            dirs.push(static_dir.to_path_buf());
            dirs
        }
    };
    let file = from_static.or_else(|| {
        COPIED_LOGOS
            .iter()
            .find(|name| search_dirs.iter().any(|dir| dir.join(name).is_file()))
            .map(|name| name.to_string())
    })?;
    Some(format!("/images/{file}"))
}

fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) => {
            if path.exists() {
                tracing::debug!(path = %path.display(), %err, "unreadable branding source");
            }
            None
        }
    }
}
