//! Tab assembly and the `docs.json` manifest.
//!
//! The docs root is walked one top-level entry at a time. Each top-level
//! directory becomes a [`Group`] (via [`scan::walk_directory`]) that lands in
//! one of three tabs:
//!
//! | Folder name | Destination |
//! |-------------|-------------|
//! | `guides` | children hoisted into **Guides**, loose pages into Getting Started |
//! | listed in the SDK table | **SDKs**, under its platform sub-group |
//! | other SDK-ish (`sdk`, `android`, `web`, `core`, …) | **SDKs** / Other SDKs |
//! | tool-ish (`cli`, `plugin`, `tool`, `package`) | **Tools** |
//! | anything else | **Guides** |
//!
//! Top-level content files form a synthetic, collapsed "Getting Started"
//! group at the front of Guides. The `partials` folder holds shared includes
//! and is never walked.
//!
//! Tabs with nothing in them are left out of the manifest.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::branding::Branding;
use crate::config::{ContextualConfig, FontConfig, FooterConfig, NavbarConfig, SiteConfig};
use crate::ordering;
use crate::scan::{self, PageSink, ScanError};
use crate::types::{Group, NavEntry, Tab};

/// Top-level folder whose child groups are promoted into the Guides tab.
pub const GUIDES_FOLDER: &str = "guides";

/// Top-level folder of shared includes; not part of the navigation.
pub const SHARED_FOLDER: &str = "partials";

/// Label of the synthetic group holding top-level pages.
pub const GETTING_STARTED: &str = "Getting Started";

pub const GUIDES_TAB: &str = "Guides";
pub const SDKS_TAB: &str = "SDKs";
pub const TOOLS_TAB: &str = "Tools";

pub const SCHEMA_URL: &str = "https://mintlify.com/docs.json";

/// Sub-groups of the SDKs tab, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Mobile,
    ReactNative,
    UiKits,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Web,
        Platform::Mobile,
        Platform::ReactNative,
        Platform::UiKits,
        Platform::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Web => "Web",
            Platform::Mobile => "Mobile",
            Platform::ReactNative => "React Native",
            Platform::UiKits => "UI Kits",
            Platform::Other => "Other SDKs",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Known SDK folder names. Checked in order; the first hit wins.
const SDK_TABLE: &[(Platform, &[&str])] = &[
    (
        Platform::Web,
        &["react-web-core", "web-core", "javascript", "html", "web"],
    ),
    (
        Platform::Mobile,
        &["android", "android-core", "ios", "ios-core", "flutter", "flutter-core"],
    ),
    (Platform::ReactNative, &["react-native", "rn-core", "rn-ui-kit"]),
    (
        Platform::UiKits,
        &["ui-kit", "react-ui-kit", "angular-ui-kit", "vue"],
    ),
];

static SDK_FOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sdk|android|ios|react|flutter|angular|web|core|ui").expect("valid regex")
});

static TOOL_FOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cli|plugin|tool|package").expect("valid regex"));

/// Where a top-level folder's group goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Guides,
    Sdk(Platform),
    Tools,
}

/// Classify a top-level folder (other than `guides`) by name.
///
/// Table entries match as substrings of the lowercased name.
pub fn classify_folder(name: &str) -> Bucket {
    let lower = name.to_lowercase();
    for (platform, keys) in SDK_TABLE {
        if keys.iter().any(|key| lower.contains(key)) {
            return Bucket::Sdk(*platform);
        }
    }
    if SDK_FOLDER_RE.is_match(&lower) {
        Bucket::Sdk(Platform::Other)
    } else if TOOL_FOLDER_RE.is_match(&lower) {
        Bucket::Tools
    } else {
        Bucket::Guides
    }
}

/// Accumulates top-level groups until the tabs are built.
#[derive(Debug, Default)]
pub struct TabBuckets {
    pub getting_started: Vec<String>,
    pub guides: Vec<Group>,
    pub platforms: [Vec<Group>; 5],
    pub tools: Vec<Group>,
}

impl TabBuckets {
    /// Route a walked top-level folder by its directory name.
    pub fn add_folder(&mut self, name: &str, group: Group) {
        if name.eq_ignore_ascii_case(GUIDES_FOLDER) {
            for entry in group.pages {
                match entry {
                    NavEntry::Group(child) => self.guides.push(child),
                    NavEntry::Page(slug) => self.getting_started.push(slug),
                }
            }
            return;
        }
        match classify_folder(name) {
            Bucket::Guides => self.guides.push(group),
            Bucket::Sdk(platform) => self.platforms[platform.index()].push(group),
            Bucket::Tools => self.tools.push(group),
        }
    }

    pub fn add_root_page(&mut self, slug: String) {
        self.getting_started.push(slug);
    }

    /// Build the non-empty tabs: Guides, SDKs, Tools.
    pub fn into_tabs(self) -> Vec<Tab> {
        let mut tabs = Vec::new();

        let mut guides = self.guides;
        if !self.getting_started.is_empty() {
            let mut start = Group::new(GETTING_STARTED);
            start.pages = self
                .getting_started
                .into_iter()
                .map(NavEntry::Page)
                .collect();
            guides.insert(0, start);
        }
        if !guides.is_empty() {
            tabs.push(Tab {
                name: GUIDES_TAB.to_string(),
                groups: guides,
            });
        }

        let mut platforms = self.platforms;
        let sdk_groups: Vec<Group> = Platform::ALL
            .iter()
            .filter_map(|platform| {
                let groups = std::mem::take(&mut platforms[platform.index()]);
                (!groups.is_empty()).then(|| Group::of_groups(platform.label(), groups))
            })
            .collect();
        if !sdk_groups.is_empty() {
            tabs.push(Tab {
                name: SDKS_TAB.to_string(),
                groups: sdk_groups,
            });
        }

        if !self.tools.is_empty() {
            tabs.push(Tab {
                name: TOOLS_TAB.to_string(),
                groups: self.tools,
            });
        }

        tabs
    }
}

/// Walk the docs root, converting every page into `sink`, and bucket the
/// top-level entries.
pub fn assemble(docs_root: &Path, sink: &mut dyn PageSink) -> Result<TabBuckets, ScanError> {
    let mut buckets = TabBuckets::default();
    let entries = ordering::sorted_entries(docs_root).map_err(|e| ScanError::io(docs_root, e))?;

    for node in entries {
        if node.name.eq_ignore_ascii_case(SHARED_FOLDER) {
            debug!(path = %node.path.display(), "skipping shared includes");
            continue;
        }
        if node.is_dir {
            let group = scan::walk_directory(&node.path, &node.name, sink)?;
            if group.is_empty() {
                debug!(dir = %node.path.display(), "pruning top-level folder without pages");
                continue;
            }
            buckets.add_folder(&node.name, group);
        } else if node.is_content() {
            let slug = scan::emit_page(&node.path, "", &node.name, GETTING_STARTED, sink)?;
            buckets.add_root_page(slug);
        }
    }

    Ok(buckets)
}

/// Total number of pages across all tabs.
pub fn page_count(tabs: &[Tab]) -> usize {
    tabs.iter()
        .flat_map(|tab| &tab.groups)
        .map(|group| group.slugs().len())
        .sum()
}

// =============================================================================
// docs.json
// =============================================================================

/// The Mintlify site manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocsJson {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub theme: String,
    pub name: String,
    pub colors: Colors,
    pub font: FontConfig,
    pub contextual: ContextualConfig,
    pub navbar: NavbarConfig,
    pub navigation: Navigation,
    pub footer: FooterConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colors {
    pub primary: String,
    pub light: String,
    pub dark: String,
}

impl Colors {
    /// One color for all three slots.
    pub fn uniform(color: &str) -> Self {
        Self {
            primary: color.to_string(),
            light: color.to_string(),
            dark: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Logo {
    pub href: String,
    pub light: String,
    pub dark: String,
}

/// Combine the tabs with branding and site settings.
pub fn build_manifest(tabs: Vec<Tab>, branding: &Branding, config: &SiteConfig) -> DocsJson {
    DocsJson {
        schema: SCHEMA_URL.to_string(),
        theme: config.theme.clone(),
        name: branding.name.clone(),
        colors: Colors::uniform(&branding.color),
        font: config.font.clone(),
        contextual: config.contextual.clone(),
        navbar: config.navbar.clone(),
        navigation: Navigation { tabs },
        footer: config.footer.clone(),
        logo: branding.logo.as_ref().map(|path| Logo {
            href: "/".to_string(),
            light: path.clone(),
            dark: path.clone(),
        }),
    }
}
