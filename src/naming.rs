//! Centralized filename conventions for Docusaurus content.
//!
//! Every entry the migrator touches is classified by its name alone: content
//! files end in `.md` or `.mdx`, landing pages are named `index` or `readme`,
//! and display titles are derived from file and directory names when nothing
//! better is available.
//!
//! ## Display Titles
//!
//! Dashes and underscores become word breaks, known acronyms keep their
//! canonical spelling, and every other word is capitalized:
//! - `getting-started` → "Getting Started"
//! - `rest_api` → "REST API"
//! - `ios-sdk-setup` → "iOS SDK Setup"

/// Extensions recognized as Docusaurus content documents.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Extension of every emitted Mintlify document.
pub const OUTPUT_EXTENSION: &str = "mdx";

/// Per-directory metadata file read for group labels and positions.
pub const CATEGORY_FILE: &str = "_category_.json";

/// Words rendered with fixed casing in titles, keyed by their lowercase form.
const ACRONYMS: &[(&str, &str)] = &[
    ("ai", "AI"),
    ("api", "API"),
    ("ui", "UI"),
    ("sdk", "SDK"),
    ("cli", "CLI"),
    ("ios", "iOS"),
    ("html", "HTML"),
    ("rest", "REST"),
    ("sip", "SIP"),
    ("rtmp", "RTMP"),
    ("stt", "STT"),
];

/// Convert a file or directory name into a display title.
///
/// - `"getting-started"` → `"Getting Started"`
/// - `"API_reference"` → `"API Reference"`
/// - `"ios"` → `"iOS"`
/// - `"--"` → `""`
pub fn title_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(title_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, acronym)) = ACRONYMS.iter().find(|(key, _)| *key == lower) {
        return (*acronym).to_string();
    }
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether a file name carries a content extension (`.md` / `.mdx`).
pub fn is_content_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| CONTENT_EXTENSIONS.contains(&ext))
}

/// File name without its final extension.
pub fn stem(name: &str) -> &str {
    name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
}

/// Whether a content stem names a directory landing page.
pub fn is_index_stem(stem: &str) -> bool {
    stem.eq_ignore_ascii_case("index") || stem.eq_ignore_ascii_case("readme")
}

/// Entries never listed as siblings: dotfiles and the category metadata file.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.') || name == CATEGORY_FILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_dashes_become_spaces() {
        assert_eq!(title_case("getting-started"), "Getting Started");
    }

    #[test]
    fn title_case_underscores_and_runs() {
        assert_eq!(title_case("live__video-_calls"), "Live Video Calls");
    }

    #[test]
    fn title_case_acronyms_any_case() {
        assert_eq!(title_case("rest_api"), "REST API");
        assert_eq!(title_case("IOS-sdk-setup"), "iOS SDK Setup");
        assert_eq!(title_case("Html"), "HTML");
    }

    #[test]
    fn title_case_lowercases_rest_of_word() {
        assert_eq!(title_case("WEBHOOKS"), "Webhooks");
        assert_eq!(title_case("fAQ"), "Faq");
    }

    #[test]
    fn title_case_empty_and_separator_only() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("--"), "");
    }

    #[test]
    fn content_file_extensions() {
        assert!(is_content_file("intro.md"));
        assert!(is_content_file("intro.mdx"));
        assert!(!is_content_file("intro.json"));
        assert!(!is_content_file("Makefile"));
    }

    #[test]
    fn stem_strips_last_extension() {
        assert_eq!(stem("intro.md"), "intro");
        assert_eq!(stem("v1.2.mdx"), "v1.2");
        assert_eq!(stem("LICENSE"), "LICENSE");
    }

    #[test]
    fn index_stems_case_insensitive() {
        assert!(is_index_stem("index"));
        assert!(is_index_stem("README"));
        assert!(is_index_stem("Readme"));
        assert!(!is_index_stem("indexes"));
    }

    #[test]
    fn hidden_entries() {
        assert!(is_hidden(".DS_Store"));
        assert!(is_hidden("_category_.json"));
        assert!(!is_hidden("intro.md"));
    }
}
