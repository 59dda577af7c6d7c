//! Docusaurus → Mintlify content conversion.
//!
//! Each pass is a function `&str -> String` applied in a fixed sequence.
//! Passes work on the output of the previous one, so the order matters:
//! tabs and admonitions must be rewritten before image references are
//! normalized, and stray bracket tags are escaped only after every known
//! component has been renamed.
//!
//! ```text
//!  1. strip_platform_imports   @theme / @site / partials imports
//!  2. convert_comments         <!-- x -->          → {/* x */}
//!  3. convert_tabs             <TabItem label="A"> → <Tab title="A">
//!  4. convert_admonitions      :::tip ... :::      → <Tip> ... </Tip>
//!  5. normalize_images         img/x.png           → /images/x.png
//!  6. convert_cards            <CardList>, to=     → <CardGroup>, href=
//!  7. escape_bracket_tags      <T[]>               → &lt;T[]&gt;
//!  8. extract_title            frontmatter > # heading > file name
//!  9. (strip)                  old frontmatter, consumed heading
//! 10. render_document          fresh `title:` frontmatter + body
//! ```
//!
//! No pass ever fails: a pattern that matches nothing leaves the text as is.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::metadata::{self, FRONTMATTER_RE, HEADING_RE};
use crate::naming;

/// Title given to directory landing pages without a better candidate.
pub const OVERVIEW_TITLE: &str = "Overview";

/// Convert one Docusaurus document body into a Mintlify page.
///
/// `base_name` is the file stem, `is_index` marks a directory landing page,
/// and `group_label` is the label of the group the page is listed under.
pub fn convert_document(raw: &str, base_name: &str, is_index: bool, group_label: &str) -> String {
    let mut body = raw.to_string();

    body = strip_platform_imports(&body);
    body = convert_comments(&body);
    body = convert_tabs(&body);
    body = convert_admonitions(&body);
    body = normalize_images(&body);
    body = convert_cards(&body);
    body = escape_bracket_tags(&body);

    let (title, body) = extract_title(&body, base_name, is_index, group_label);
    render_document(&title, &body)
}

// ---------------------------------------------------------------------------
// Pass 1: Strip imports the target renderer cannot resolve
// ---------------------------------------------------------------------------

/// Remove `import … from '…'` statements pointing at Docusaurus internals,
/// theme components, icon packs, or shared partials.
fn strip_platform_imports(md: &str) -> String {
    static PLATFORM_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r#"(?m)^import\s+[^'";]*?\bfrom\s+['"](?:@site|@theme|@docusaurus|react-feather|@fluentui)[^'"]*['"][ \t]*;?[ \t]*(?:\r?\n|\z)"#,
        )
        .expect("valid regex")
    });
    static PARTIALS_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r#"(?m)^import\s+[^'";]*?\bfrom\s+['"][^'"]*partials[^'"]*['"][ \t]*;?[ \t]*(?:\r?\n|\z)"#,
        )
        .expect("valid regex")
    });

    let md = PLATFORM_IMPORT_RE.replace_all(md, "");
    PARTIALS_IMPORT_RE.replace_all(&md, "").into_owned()
}

// ---------------------------------------------------------------------------
// Pass 2: HTML comments
// ---------------------------------------------------------------------------

/// `<!-- note -->` is invalid MDX; use a JSX block comment instead.
fn convert_comments(md: &str) -> String {
    static COMMENT_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)<!--(.*?)-->").expect("valid regex"));

    COMMENT_RE.replace_all(md, "{/*${1}*/}").into_owned()
}

// ---------------------------------------------------------------------------
// Pass 3: Tabs
// ---------------------------------------------------------------------------

/// Rename `<Tabs>` / `<TabItem>` and move each item's `label` to `title`.
///
/// Every tag is padded with blank lines so the MDX parser treats the tab
/// bodies as markdown blocks.
fn convert_tabs(md: &str) -> String {
    static TABS_OPEN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"<Tabs\b[^>]*>").expect("valid regex"));
    static TABS_CLOSE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"</Tabs>").expect("valid regex"));
    static TAB_ITEM_OPEN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"<TabItem\b([^>]*)>").expect("valid regex"));
    static TAB_ITEM_CLOSE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"</TabItem>").expect("valid regex"));
    static LABEL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"label=["']([^"']+)["']"#).expect("valid regex"));

    let md = TABS_OPEN_RE.replace_all(md, "\n\n<Tabs>\n\n");
    let md = TABS_CLOSE_RE.replace_all(&md, "\n\n</Tabs>\n\n");
    let md = TAB_ITEM_OPEN_RE.replace_all(&md, |caps: &Captures| {
        let title = LABEL_RE
            .captures(&caps[1])
            .map(|label| label[1].to_string())
            .unwrap_or_else(|| "Tab".to_string());
        format!("\n\n<Tab title=\"{title}\">\n\n")
    });
    TAB_ITEM_CLOSE_RE.replace_all(&md, "\n\n</Tab>\n\n").into_owned()
}

// ---------------------------------------------------------------------------
// Pass 4: Admonitions
// ---------------------------------------------------------------------------

/// Mintlify callout component for a Docusaurus admonition kind.
///
/// Case-insensitive; unknown or missing kinds become `Note`.
pub fn admonition_tag(kind: &str) -> &'static str {
    match kind.to_ascii_lowercase().as_str() {
        "info" => "Info",
        "note" => "Note",
        "tip" => "Tip",
        "warning" | "caution" | "danger" => "Warning",
        _ => "Note",
    }
}

/// `:::kind optional title\nbody\n:::` → `<Tag>\n\nbody\n\n</Tag>`.
///
/// The admonition title (after the kind, including `[Title]` syntax) is
/// dropped; Mintlify callouts have no title slot.
fn convert_admonitions(md: &str) -> String {
    static ADMONITION_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?s):::([A-Za-z]*)[^\n]*\n(.*?)\n:::").expect("valid regex")
    });

    ADMONITION_RE
        .replace_all(md, |caps: &Captures| {
            let tag = admonition_tag(&caps[1]);
            format!("\n\n<{tag}>\n\n{}\n\n</{tag}>\n\n", caps[2].trim())
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Pass 5: Image references
// ---------------------------------------------------------------------------

/// Rewrite every recognized image reference to `/images/<path>`.
///
/// Static assets are copied flat into the output `images/` directory, so
/// everything after the conventional asset folder (`img`, `images`,
/// `assets`) is kept and the rest of the path is dropped. Recognized shapes:
///
/// - `![alt](../static/img/x.png)`
/// - `<img src="/img/x.png" />`
/// - `<img src={require('@site/static/img/x.png')} />`
/// - `<img src={require('./img/x.png').default} />`
///
/// Raw tags become markdown images with alt text `Image`. Already-canonical
/// `/images/x.png` references are left unchanged.
fn normalize_images(md: &str) -> String {
    // Optional `@site/`, `/`, `./` or `../`, optional `static/`, asset folder.
    const PREFIX: &str = r"(?:@site/|\.{0,2}/)?(?:static/)?(?:img|images|assets)/";

    static MARKDOWN_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!(r"!\[([^\]]*)\]\(\s*{PREFIX}([^)]+?)\s*\)")).expect("valid regex")
    });
    static HTML_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!(r#"<img[^>]+src=["']\s*{PREFIX}([^"']+)["'][^>]*>"#))
            .expect("valid regex")
    });
    static REQUIRE_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!(
            r#"<img[^>]+src=\{{\s*require\(\s*['"]\s*{PREFIX}([^"']+)['"]\s*\)(?:\.default)?\s*\}}[^>]*>"#
        ))
        .expect("valid regex")
    });

    let md = MARKDOWN_IMAGE_RE.replace_all(md, "![${1}](/images/${2})");
    let md = HTML_IMAGE_RE.replace_all(&md, "![Image](/images/${1})");
    REQUIRE_IMAGE_RE
        .replace_all(&md, "![Image](/images/${1})")
        .into_owned()
}

// ---------------------------------------------------------------------------
// Pass 6: Cards
// ---------------------------------------------------------------------------

/// `<CardList>` → `<CardGroup cols={2}>` and `<Card to=…>` → `<Card href=…>`.
fn convert_cards(md: &str) -> String {
    static CARD_LIST_OPEN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"<CardList\b[^>]*>").expect("valid regex"));
    static CARD_LIST_CLOSE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"</CardList>").expect("valid regex"));
    // Group 2 is whatever precedes `to=`: whitespace, or a quote/brace
    // closing the previous attribute with no space in between.
    static CARD_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"<Card\b([^>]*?)([\s"'}])to=(["'][^"']+["'])([^>]*)>"#).expect("valid regex")
    });

    let md = CARD_LIST_OPEN_RE.replace_all(md, "<CardGroup cols={2}>");
    let md = CARD_LIST_CLOSE_RE.replace_all(&md, "</CardGroup>");
    CARD_LINK_RE
        .replace_all(&md, |caps: &Captures| {
            let closer = caps[2].trim();
            format!("<Card{}{closer} href={}{}>", &caps[1], &caps[3], &caps[4])
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Pass 7: Escape tag-like text
// ---------------------------------------------------------------------------

/// Escape `<Foo[...]>` / `<a\b>` style text that MDX would try to parse as JSX.
fn escape_bracket_tags(md: &str) -> String {
    static BRACKET_TAG_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"<([A-Za-z0-9_]*[\[\\][^>]*)>").expect("valid regex"));

    BRACKET_TAG_RE.replace_all(md, "&lt;${1}&gt;").into_owned()
}

// ---------------------------------------------------------------------------
// Passes 8-9: Title resolution and source metadata removal
// ---------------------------------------------------------------------------

/// Resolve the page title and return it with the remaining body.
///
/// Precedence: frontmatter `title`, then the first `# heading`, then
/// `Overview` for landing pages or the title-cased file name otherwise.
/// The old frontmatter block is always dropped; the heading is dropped only
/// when it supplied the title. A landing page titled like its own group is
/// renamed `Overview` so the sidebar does not repeat the group name.
fn extract_title(md: &str, base_name: &str, is_index: bool, group_label: &str) -> (String, String) {
    let (frontmatter, mut body) = match FRONTMATTER_RE.captures(md) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            (metadata::parse_block(&caps[1]), md[end..].to_string())
        }
        None => (metadata::Frontmatter::new(), md.to_string()),
    };

    let explicit = metadata::resolve(&[frontmatter.get("title").map(String::as_str)]);
    let title = match explicit {
        Some(title) => title,
        None => match take_first_heading(&mut body) {
            Some(heading) => heading,
            None if is_index => OVERVIEW_TITLE.to_string(),
            None => naming::title_case(base_name),
        },
    };

    let title = if is_index && !group_label.is_empty() && title.eq_ignore_ascii_case(group_label) {
        OVERVIEW_TITLE.to_string()
    } else {
        title
    };

    (title, body)
}

/// Remove the first `# heading` line from `body`, returning its text.
fn take_first_heading(body: &mut String) -> Option<String> {
    let (range, text) = {
        let caps = HEADING_RE.captures(body.as_str())?;
        (caps.get(0)?.range(), caps[1].trim().to_string())
    };
    if text.is_empty() {
        return None;
    }
    body.replace_range(range, "");
    Some(text)
}

// ---------------------------------------------------------------------------
// Pass 10: Output
// ---------------------------------------------------------------------------

/// Prefix the body with a fresh frontmatter block holding only the title.
/// Escape a value for a double-quoted YAML scalar.
fn escape_yaml_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn render_document(title: &str, body: &str) -> String {
    format!(
        "---\ntitle: \"{}\"\n---\n\n{}",
        escape_yaml_string(title),
        body.trim_start()
    )
}
