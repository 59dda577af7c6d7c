//! CLI output formatting for migration runs.
//!
//! # Information-First Display
//!
//! The primary display is the navigation the migrated site will have: tabs,
//! groups with their positional index and page count, and the slugs inside.
//! Filesystem detail is limited to the summary lines.
//!
//! # Output Format
//!
//! ## Navigation
//!
//! ```text
//! Guides
//! 001 Getting Started (2 pages)
//!     001 intro
//!     002 guides/overview
//! 002 Live Video (2 pages)
//!     001 guides/video/index
//!     002 Recording (1 page)
//!         001 guides/video/recording/start
//!
//! SDKs
//! 001 Mobile (1 page)
//!     001 Android Core (1 page)
//!         001 android-core/quickstart
//! ```
//!
//! ## Migrate
//!
//! ```text
//! <navigation>
//!
//! Assets: 14 files copied to images/
//! Migrated Acme Docs to mintlify-output (5 pages, 2 tabs)
//!
//! Next:
//!     cd mintlify-output
//!     mint dev
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::migrate::MigrationReport;
use crate::types::{Group, NavEntry, Tab};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural_pages(n: usize) -> String {
    if n == 1 {
        "1 page".to_string()
    } else {
        format!("{n} pages")
    }
}

/// Group header: positional index, label and total page count.
///
/// ```text
/// 001 Live Video (3 pages)
/// ```
fn group_header(index: usize, group: &Group) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        group.label,
        plural_pages(group.slugs().len())
    )
}

fn format_entries(entries: &[NavEntry], depth: usize, lines: &mut Vec<String>) {
    for (i, entry) in entries.iter().enumerate() {
        match entry {
            NavEntry::Page(slug) => {
                lines.push(format!("{}{} {}", indent(depth), format_index(i + 1), slug));
            }
            NavEntry::Group(group) => {
                lines.push(format!("{}{}", indent(depth), group_header(i + 1, group)));
                format_entries(&group.pages, depth + 1, lines);
            }
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Render every tab with its group tree. Tabs are separated by a blank line.
pub fn format_navigation(tabs: &[Tab]) -> Vec<String> {
    let mut lines = Vec::new();
    for (t, tab) in tabs.iter().enumerate() {
        if t > 0 {
            lines.push(String::new());
        }
        lines.push(tab.name.clone());
        for (i, group) in tab.groups.iter().enumerate() {
            lines.push(group_header(i + 1, group));
            format_entries(&group.pages, 1, &mut lines);
        }
    }
    if lines.is_empty() {
        lines.push("No documents found".to_string());
    }
    lines
}

// ============================================================================
// Migrate
// ============================================================================

pub fn format_migration_output(report: &MigrationReport) -> Vec<String> {
    let tabs = &report.manifest.navigation.tabs;
    let mut lines = format_navigation(tabs);
    lines.push(String::new());
    lines.push(format!(
        "Assets: {} files copied to images/",
        report.asset_count
    ));

    let Some(out) = &report.output_dir else {
        return lines;
    };
    lines.push(format!(
        "Migrated {} to {} ({}, {} tabs)",
        report.manifest.name,
        out.display(),
        plural_pages(report.page_count),
        tabs.len()
    ));
    lines.push(String::new());
    lines.push("Next:".to_string());
    lines.push(format!("{}cd {}", indent(1), out.display()));
    lines.push(format!("{}mint dev", indent(1)));
    lines
}

pub fn print_migration_output(report: &MigrationReport) {
    for line in format_migration_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(report: &MigrationReport) -> Vec<String> {
    let tabs = &report.manifest.navigation.tabs;
    let mut lines = format_navigation(tabs);
    lines.push(String::new());
    lines.push(format!(
        "Content is valid: {} in {} tabs",
        plural_pages(report.page_count),
        tabs.len()
    ));
    lines
}

pub fn print_check_output(report: &MigrationReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
