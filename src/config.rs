//! Migration settings module.
//!
//! Handles loading and validating the optional `migrate.toml` in the
//! Docusaurus project root (the parent of `docs/`). Everything it controls
//! ends up in the generated `docs.json`.
//!
//! ## Config File Location
//!
//! ```text
//! my-site/
//! ├── migrate.toml             # Optional; stock defaults apply without it
//! ├── docusaurus.config.js
//! ├── docs/
//! └── static/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! theme = "mint"            # Mintlify theme
//!
//! [font]
//! family = "Inter"
//!
//! [contextual]
//! options = ["copy", "view"]
//!
//! [branding]                # Overrides for values scraped from the project
//! # name = "Acme Docs"
//! # color = "#0d9373"
//! # logo = "/images/logo.svg"
//!
//! [[navbar.links]]
//! label = "Support"
//! href = "mailto:support@example.com"
//!
//! [navbar.primary]
//! type = "button"
//! label = "Dashboard"
//! href = "https://app.example.com"
//!
//! [footer.socials]
//! github = "https://github.com/example"
//!
//! [[footer.links]]
//! header = "Company"
//! items = [{ label = "Blog", href = "https://example.com/blog" }]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "migrate.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `migrate.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Mintlify theme name.
    pub theme: String,
    pub font: FontConfig,
    /// Page actions offered in the contextual menu.
    pub contextual: ContextualConfig,
    /// Overrides for detected branding.
    pub branding: BrandingConfig,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: "mint".to_string(),
            font: FontConfig::default(),
            contextual: ContextualConfig::default(),
            branding: BrandingConfig::default(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate values that would produce a broken manifest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.trim().is_empty() {
            return Err(ConfigError::Validation("theme must not be empty".into()));
        }
        if self.font.family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "font.family must not be empty".into(),
            ));
        }
        if let Some(color) = self.branding.color.as_deref().filter(|c| !is_hex_color(c)) {
            return Err(ConfigError::Validation(format!(
                "branding.color must be a #rrggbb hex color, got '{color}'"
            )));
        }
        let footer_items = self.footer.links.iter().flat_map(|column| &column.items);
        for link in self.navbar.links.iter().chain(footer_items) {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "links need a non-empty label and href".into(),
                ));
            }
        }
        Ok(())
    }
}

/// `#` followed by exactly six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextualConfig {
    pub options: Vec<String>,
}

impl Default for ContextualConfig {
    fn default() -> Self {
        Self {
            options: vec!["copy".to_string(), "view".to_string()],
        }
    }
}

/// Branding overrides. Unset fields fall back to detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandingConfig {
    pub name: Option<String>,
    /// `#rrggbb`.
    pub color: Option<String>,
    /// Site-absolute path, e.g. `/images/logo.svg`.
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Top bar links and the optional call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<PrimaryButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimaryButton {
    #[serde(rename = "type", default = "default_button_kind")]
    pub kind: String,
    pub label: String,
    pub href: String,
}

fn default_button_kind() -> String {
    "button".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Platform name → profile URL.
    pub socials: BTreeMap<String, String>,
    pub links: Vec<FooterColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterColumn {
    pub header: String,
    #[serde(default)]
    pub items: Vec<Link>,
}

// =============================================================================
// Loading
// =============================================================================

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load `migrate.toml` from `root`, or stock defaults if there is none.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    parse_config(&content)
}

/// Documented stock `migrate.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Mintlify Migration Configuration
# ================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to the Docusaurus `docs/` directory.
# Unknown keys will cause an error.

# Mintlify theme for the generated site.
theme = "mint"

# ---------------------------------------------------------------------------
# Typography
# ---------------------------------------------------------------------------
[font]
family = "Inter"

# ---------------------------------------------------------------------------
# Contextual menu
# ---------------------------------------------------------------------------
[contextual]
# Page actions shown in the contextual menu.
options = ["copy", "view"]

# ---------------------------------------------------------------------------
# Branding
# ---------------------------------------------------------------------------
# Detected from docusaurus.config.js, src/css/custom.css and static/ when
# not set here. Falls back to "Documentation" and #2160fd.
[branding]
# name = "Acme Docs"
# color = "#0d9373"
# logo = "/images/logo.svg"

# ---------------------------------------------------------------------------
# Navbar
# ---------------------------------------------------------------------------
[navbar]
links = []

# [[navbar.links]]
# label = "Support"
# href = "mailto:support@example.com"

# [navbar.primary]
# type = "button"
# label = "Dashboard"
# href = "https://app.example.com"

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
links = []

# [footer.socials]
# github = "https://github.com/example"
# x = "https://x.com/example"

# [[footer.links]]
# header = "Company"
# items = [
#     { label = "Blog", href = "https://example.com/blog" },
#     { label = "Careers", href = "https://example.com/careers" },
# ]
"##
}
