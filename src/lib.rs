//! # Mintlify Migrate
//!
//! Turns a Docusaurus documentation tree into a ready-to-serve Mintlify site.
//! The docs directory is the data source: folders become navigation groups,
//! `sidebar_position` and `_category_.json` decide the order, and every
//! `.md`/`.mdx` file is rewritten into Mintlify's MDX dialect.
//!
//! # Architecture: One Pass, One Manifest
//!
//! ```text
//! static/  →  images/            (asset copy)
//! docs/    →  **/*.mdx           (walk + convert, depth first)
//!          →  docs.json          (tabs + branding, written once at the end)
//! ```
//!
//! The walk converts each document as it is reached and hands it to a
//! [`scan::PageSink`]. Navigation groups are built bottom-up by the walker,
//! bucketed into tabs by [`navigation`], and serialized with the branding
//! into the manifest.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`ordering`] | Sibling ranks: index first, explicit positions, then names |
//! | [`metadata`] | Frontmatter, first heading, `_category_.json` |
//! | [`naming`] | Content extensions, index detection, title casing |
//! | [`convert`] | Docusaurus → Mintlify markup rewrite pipeline |
//! | [`scan`] | Recursive walk producing nested groups and converted pages |
//! | [`navigation`] | Guides / SDKs / Tools tabs and the `docs.json` manifest |
//! | [`types`] | Navigation types serialized into `docs.json` |
//! | [`detect`] | Finding `docs/` and `static/` around a base directory |
//! | [`assets`] | Copying `static/` assets into `images/` |
//! | [`branding`] | Site name, primary color and logo scraped from the project |
//! | [`config`] | Optional `migrate.toml` loading and validation |
//! | [`migrate`] | Run orchestration for `migrate` and `check` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Text Rewrites, Not an MDX Parser
//!
//! Conversion is an ordered list of regex passes over the raw document.
//! Docusaurus sources mix Markdown, JSX and HTML freely; a pass pipeline
//! tolerates whatever it does not recognize and leaves it untouched.
//!
//! ## Overwrite, Don't Merge
//!
//! Every `migrate` run starts from an empty output directory. There is no
//! incremental mode; the source tree stays the single source of truth.

pub mod assets;
pub mod branding;
pub mod config;
pub mod convert;
pub mod detect;
pub mod metadata;
pub mod migrate;
pub mod naming;
pub mod navigation;
pub mod ordering;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
