//! Loading the declarative inputs of a build.
//!
//! A source directory holds everything the build reads:
//!
//! ```text
//! website/
//! ├── config.toml        # Site config (optional, overrides stock defaults)
//! ├── features.toml      # Landing page feature cards (optional)
//! ├── sidebars.toml      # Docs sidebar (path from docs.sidebar_path)
//! ├── css/custom.css     # Custom stylesheet (path from theme.custom_css)
//! └── static/            # Copied verbatim to the output root
//!     └── img/
//! ```
//!
//! [`load`] reads all of it once; the resulting [`Site`] is immutable for the
//! rest of the build.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, ContentError, FeatureEntry, NonEmpty};
use crate::sidebar::{self, NavigationTree};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

/// Name of the directory copied verbatim into the output.
pub const STATIC_DIR: &str = "static";

/// Everything a build renders, read once from the source directory.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub features: Vec<FeatureEntry>,
    pub sidebar: NavigationTree,
}

impl Site {
    /// Features for the page composer; `None` when the list is empty.
    pub fn feature_cards(&self) -> Option<NonEmpty<FeatureEntry>> {
        NonEmpty::from_vec(self.features.clone())
    }
}

pub fn load(source: &Path) -> Result<Site, LoadError> {
    let config = config::load_config(source)?;
    let features = content::load_features(source)?;
    let sidebar_path = source.join(&config.docs.sidebar_path);
    // Only the default location falls back to the stock sidebar.
    let sidebar = if config.docs.sidebar_path == sidebar::DEFAULT_SIDEBAR_PATH {
        sidebar::load_sidebar_or_stock(&sidebar_path)?
    } else {
        sidebar::load_sidebar(&sidebar_path)?
    };
    tracing::debug!(
        features = features.len(),
        sections = sidebar.sections().len(),
        "loaded site from {}",
        source.display()
    );
    Ok(Site {
        config,
        features,
        sidebar,
    })
}

/// Custom stylesheet in `source`, if the configured file exists.
pub fn custom_css_path(source: &Path, config: &SiteConfig) -> Option<PathBuf> {
    if config.theme.custom_css.is_empty() {
        return None;
    }
    let path = source.join(&config.theme.custom_css);
    path.is_file().then_some(path)
}
