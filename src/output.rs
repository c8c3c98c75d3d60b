//! CLI output formatting.
//!
//! Output is information-centric: the landing page is listed by its feature
//! cards and the sidebar by its sections, with file paths as indented context.
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//!     001 Expressive, Beautiful Syntax
//!         Image: img/code.svg
//!     002 Designed For Your Team
//!         Image: img/dev.svg
//!
//! Sidebar someSidebar (6 sections, 17 docs) → sidebars.json
//!
//! Files
//!     index.html
//!     site.json
//!     sidebars.json
//!     12 static files
//! ```
//!
//! ## Sidebar
//!
//! ```text
//! someSidebar
//! 001 Prologue (3 docs)
//!     introduction
//!     contributions
//!     license
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::{BuildSummary, SIDEBAR_MANIFEST};
use crate::sidebar::NavigationTree;
use crate::site::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Feature cards as they will appear on the landing page.
fn feature_lines(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();
    if site.features.is_empty() {
        lines.push("    (no features, section omitted)".to_string());
        return lines;
    }
    for (i, feature) in site.features.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), feature.title));
        if let Some(image) = &feature.image {
            lines.push(format!("        Image: {}", image.as_str()));
        }
    }
    lines
}

fn sidebar_headline(tree: &NavigationTree) -> String {
    format!(
        "Sidebar {} ({}, {})",
        tree.id(),
        plural(tree.sections().len(), "section"),
        plural(tree.doc_ids().count(), "doc"),
    )
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(site: &Site, summary: &BuildSummary) -> Vec<String> {
    let mut lines = vec!["Home → index.html".to_string()];
    lines.extend(feature_lines(site));

    lines.push(String::new());
    lines.push(format!(
        "{} → {}",
        sidebar_headline(&site.sidebar),
        SIDEBAR_MANIFEST
    ));

    lines.push(String::new());
    lines.push("Files".to_string());
    for file in &summary.files {
        lines.push(format!("    {}", file));
    }
    if summary.assets_copied > 0 {
        lines.push(format!(
            "    {}",
            plural(summary.assets_copied, "static file")
        ));
    }
    lines
}

pub fn print_build_output(site: &Site, summary: &BuildSummary) {
    for line in format_build_output(site, summary) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(site: &Site) -> Vec<String> {
    let config = &site.config;
    let mut lines = vec![
        format!("Site: {}", config.title),
        format!("    Tagline: {}", config.tagline),
        format!("    URL: {}{}", config.url.trim_end_matches('/'), config.base_url),
        String::new(),
        "Features".to_string(),
    ];
    lines.extend(feature_lines(site));
    lines.push(String::new());
    lines.push(sidebar_headline(&site.sidebar));
    lines
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// sidebar
// ============================================================================

pub fn format_sidebar(tree: &NavigationTree) -> Vec<String> {
    let mut lines = vec![tree.id().to_string()];
    for (i, section) in tree.sections().iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            section.label,
            plural(section.docs.len(), "doc")
        ));
        for doc in &section.docs {
            lines.push(format!("    {}", doc));
        }
    }
    lines
}

pub fn print_sidebar(tree: &NavigationTree) {
    for line in format_sidebar(tree) {
        println!("{}", line);
    }
}
