//! Docs sidebar declaration.
//!
//! The sidebar is an ordered list of labelled sections, each an ordered list of
//! document ids. It is declared in `sidebars.toml` (path configurable via
//! `docs.sidebar_path`):
//!
//! ```toml
//! id = "someSidebar"
//!
//! [[section]]
//! label = "Prologue"
//! docs = ["introduction", "contributions", "license"]
//!
//! [[section]]
//! label = "Getting Started"
//! docs = ["installation", "configuration", "structure", "deployment"]
//! ```
//!
//! Declaration order is display order, and [`GeneratorSidebars`] keeps it when
//! the tree is written out as `sidebars.json`. Whether the ids name real
//! documents is left to the docs generator.

use crate::content::ContentError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Sidebar location when `docs.sidebar_path` is left at its default.
pub const DEFAULT_SIDEBAR_PATH: &str = "sidebars.toml";

/// One labelled group of documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarSection {
    pub label: String,
    #[serde(default)]
    pub docs: Vec<String>,
}

/// Ordered mapping from section label to document ids.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationTree {
    id: String,
    sections: Vec<SidebarSection>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SidebarFile {
    #[serde(default = "default_sidebar_id")]
    id: String,
    #[serde(default, rename = "section")]
    sections: Vec<SidebarSection>,
}

fn default_sidebar_id() -> String {
    "someSidebar".to_string()
}

impl NavigationTree {
    /// Build a tree, rejecting blank or repeated section labels.
    pub fn new(id: impl Into<String>, sections: Vec<SidebarSection>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for (i, section) in sections.iter().enumerate() {
            if section.label.trim().is_empty() {
                return Err(ContentError::EmptySectionLabel(i));
            }
            if !seen.insert(section.label.as_str()) {
                return Err(ContentError::DuplicateSection(section.label.clone()));
            }
        }
        Ok(Self {
            id: id.into(),
            sections,
        })
    }

    /// Sidebar id the generator refers to.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    /// All document ids in display order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.docs.iter().map(String::as_str))
    }

    /// Serializable view in the generator's `{ id: { label: [docs] } }` shape.
    pub fn generator_view(&self) -> GeneratorSidebars<'_> {
        GeneratorSidebars(self)
    }
}

/// `sidebars.json` view of a [`NavigationTree`], preserving section order.
pub struct GeneratorSidebars<'a>(&'a NavigationTree);

struct SectionMap<'a>(&'a [SidebarSection]);

impl Serialize for GeneratorSidebars<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.id, &SectionMap(&self.0.sections))?;
        map.end()
    }
}

impl Serialize for SectionMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for section in self.0 {
            map.serialize_entry(&section.label, &section.docs)?;
        }
        map.end()
    }
}

/// Parse a `sidebars.toml` document.
pub fn parse_sidebar(content: &str, path: &Path) -> Result<NavigationTree, ContentError> {
    let file: SidebarFile =
        toml::from_str(content).map_err(|e| ContentError::Toml(path.to_path_buf(), e))?;
    NavigationTree::new(file.id, file.sections)
}

/// Load the sidebar declared at `path`. A missing file is an error.
pub fn load_sidebar(path: &Path) -> Result<NavigationTree, ContentError> {
    let content = fs::read_to_string(path)?;
    parse_sidebar(&content, path)
}

/// Like [`load_sidebar`], but a missing file yields [`stock_sidebar`].
pub fn load_sidebar_or_stock(path: &Path) -> Result<NavigationTree, ContentError> {
    if !path.exists() {
        return Ok(stock_sidebar());
    }
    load_sidebar(path)
}

/// The Octopy documentation sidebar.
pub fn stock_sidebar() -> NavigationTree {
    let section = |label: &str, docs: &[&str]| SidebarSection {
        label: label.to_string(),
        docs: docs.iter().map(|d| d.to_string()).collect(),
    };
    NavigationTree {
        id: default_sidebar_id(),
        sections: vec![
            section("Prologue", &["introduction", "contributions", "license"]),
            section(
                "Getting Started",
                &["installation", "configuration", "structure", "deployment"],
            ),
            section("Architecture", &["lifecycle", "container"]),
            section(
                "The Basics",
                &["routing", "middleware", "csrf", "controller", "request"],
            ),
            section("Frontend", &["templating", "localization"]),
            section("Security", &["encryption"]),
        ],
    }
}
