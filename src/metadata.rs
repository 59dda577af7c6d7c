//! Document and directory metadata extraction.
//!
//! Docusaurus keeps metadata in two places:
//!
//! ## Frontmatter (per document)
//!
//! A `---` delimited block at the very start of a document, one `key: value`
//! pair per line. Values may be wrapped in single or double quotes. Only two
//! keys matter to the migrator:
//!
//! - `title`: explicit page title
//! - `sidebar_position`: numeric sibling rank
//!
//! ## `_category_.json` (per directory)
//!
//! A JSON object with an optional `label` (group name) and `position`
//! (numeric sibling rank).
//!
//! ## Degradation
//!
//! Both sources are best-effort. A missing, unterminated or unparsable block
//! yields empty metadata rather than an error, so one broken file never stops
//! the rest of the tree from migrating.

use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::naming::CATEGORY_FILE;

/// Key/value pairs from a document's leading metadata block.
pub type Frontmatter = BTreeMap<String, String>;

/// Leading `---` block, tolerant of whitespace before the opening fence.
///
/// Group 1 is the block contents; the whole match is what gets stripped.
pub(crate) static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\s*---[ \t]*\r?\n([\s\S]*?)\r?\n---[ \t]*(?:\r?\n|\z)").expect("valid regex"));

/// First level-1 heading line. Group 1 is the heading text.
pub(crate) static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)[ \t\r]*$").expect("valid regex"));

/// Parse the leading metadata block of a document.
///
/// Returns an empty map when there is no block or it is never closed.
pub fn extract_frontmatter(content: &str) -> Frontmatter {
    FRONTMATTER_RE
        .captures(content)
        .map(|caps| parse_block(&caps[1]))
        .unwrap_or_default()
}

/// Parse `key: value` lines. Lines without a colon are skipped.
pub(crate) fn parse_block(block: &str) -> Frontmatter {
    block
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

/// Strip one leading and one trailing quote character, independently.
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

/// Text of the first `# heading` line, if any.
pub fn first_heading(content: &str) -> Option<String> {
    HEADING_RE
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Numeric `sidebar_position` from frontmatter.
pub fn sidebar_position(frontmatter: &Frontmatter) -> Option<f64> {
    frontmatter
        .get("sidebar_position")
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|pos| pos.is_finite())
}

/// Contents of a directory's `_category_.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryMeta {
    #[serde(default)]
    pub label: Option<String>,
    /// Kept raw: Docusaurus tolerates strings here, only numbers rank.
    #[serde(default)]
    pub position: Option<serde_json::Value>,
}

impl CategoryMeta {
    /// The `position` field, when it is a JSON number.
    pub fn position(&self) -> Option<f64> {
        self.position
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .filter(|pos| pos.is_finite())
    }

    /// Non-empty `label`, if present.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Read `_category_.json` from a directory.
///
/// Missing, unreadable, or malformed files all yield the empty default.
pub fn read_category_meta(dir: &Path) -> CategoryMeta {
    let path = dir.join(CATEGORY_FILE);
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return CategoryMeta::default();
    };
    match serde_json::from_str(&raw) {
        Ok(meta) => meta,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "ignoring malformed category file");
            CategoryMeta::default()
        }
    }
}

/// Resolve a value from multiple sources.
///
/// Takes optional values in priority order and returns the first non-None,
/// non-empty (after trimming) one.
///
/// ```text
/// title: resolve(&[frontmatter_title, first_heading])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // =========================================================================
    // Frontmatter
    // =========================================================================

    #[test]
    fn frontmatter_basic_pairs() {
        let fm = extract_frontmatter("---\ntitle: Intro\nsidebar_position: 2\n---\n# Body");
        assert_eq!(fm.get("title").map(String::as_str), Some("Intro"));
        assert_eq!(fm.get("sidebar_position").map(String::as_str), Some("2"));
    }

    #[test]
    fn frontmatter_strips_quotes() {
        let fm = extract_frontmatter("---\ntitle: \"Quoted\"\nslug: 'single'\n---\n");
        assert_eq!(fm["title"], "Quoted");
        assert_eq!(fm["slug"], "single");
    }

    #[test]
    fn frontmatter_value_keeps_later_colons() {
        let fm = extract_frontmatter("---\ndescription: Note: read this\n---\n");
        assert_eq!(fm["description"], "Note: read this");
    }

    #[test]
    fn frontmatter_skips_lines_without_colon() {
        let fm = extract_frontmatter("---\ntags\n  - a\ntitle: T\n---\n");
        assert_eq!(fm.len(), 1);
        assert_eq!(fm["title"], "T");
    }

    #[test]
    fn frontmatter_missing_is_empty() {
        assert!(extract_frontmatter("# Just a heading\n").is_empty());
    }

    #[test]
    fn frontmatter_unterminated_is_empty() {
        assert!(extract_frontmatter("---\ntitle: Oops\n\nbody text").is_empty());
    }

    #[test]
    fn frontmatter_not_at_start_is_ignored() {
        assert!(extract_frontmatter("intro\n---\ntitle: Late\n---\n").is_empty());
    }

    #[test]
    fn frontmatter_crlf_line_endings() {
        let fm = extract_frontmatter("---\r\ntitle: Windows\r\n---\r\nbody");
        assert_eq!(fm["title"], "Windows");
    }

    #[test]
    fn sidebar_position_numeric() {
        let fm = extract_frontmatter("---\nsidebar_position: 2.5\n---\n");
        assert_eq!(sidebar_position(&fm), Some(2.5));
    }

    #[test]
    fn sidebar_position_non_numeric_is_none() {
        let fm = extract_frontmatter("---\nsidebar_position: first\n---\n");
        assert_eq!(sidebar_position(&fm), None);
    }

    // =========================================================================
    // Headings
    // =========================================================================

    #[test]
    fn first_heading_found() {
        assert_eq!(
            first_heading("intro\n\n# Getting Started\n\n# Second").as_deref(),
            Some("Getting Started")
        );
    }

    #[test]
    fn first_heading_ignores_h2() {
        assert_eq!(first_heading("## Sub\ntext"), None);
    }

    #[test]
    fn first_heading_requires_space() {
        assert_eq!(first_heading("#hashtag"), None);
    }

    // =========================================================================
    // Category metadata
    // =========================================================================

    #[test]
    fn category_meta_label_and_position() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_category_.json"),
            r#"{"label": "Live Video", "position": 3}"#,
        )
        .unwrap();
        let meta = read_category_meta(tmp.path());
        assert_eq!(meta.label(), Some("Live Video"));
        assert_eq!(meta.position(), Some(3.0));
    }

    #[test]
    fn category_meta_string_position_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_category_.json"), r#"{"position": "3"}"#).unwrap();
        assert_eq!(read_category_meta(tmp.path()).position(), None);
    }

    #[test]
    fn category_meta_malformed_is_default() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_category_.json"), "{ label: nope").unwrap();
        assert_eq!(read_category_meta(tmp.path()), CategoryMeta::default());
    }

    #[test]
    fn category_meta_missing_is_default() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(read_category_meta(tmp.path()), CategoryMeta::default());
    }

    #[test]
    fn category_meta_blank_label_is_none() {
        let meta = CategoryMeta {
            label: Some("  ".into()),
            position: None,
        };
        assert_eq!(meta.label(), None);
    }

    // =========================================================================
    // resolve
    // =========================================================================

    #[test]
    fn resolve_first_non_empty_wins() {
        assert_eq!(
            resolve(&[None, Some("  "), Some("Heading"), Some("Other")]),
            Some("Heading".to_string())
        );
    }

    #[test]
    fn resolve_all_empty() {
        assert_eq!(resolve(&[None, Some("")]), None);
    }
}
