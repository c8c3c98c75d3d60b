//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The stock defaults
//! describe the Octopy documentation site as deployed; a `config.toml` in the
//! source directory overrides any subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Octopy Framework"
//! tagline = "A lightweight PHP Framework with Laravel look like"
//! url = "https://framework.octopy.id"
//! base_url = "/"                   # Must start and end with "/"
//! favicon = "img/favicon.ico"
//! organization_name = "Octopy ID"
//! project_name = "OctopyDocumentation"
//! stylesheets = ["https://fonts.googleapis.com/css?family=Miriam+Libre"]
//!
//! [hero]
//! subtitle = "Octopy is a lightweight MVC framework ..."
//! image = "img/octopy-600px.png"   # Empty string hides the illustration
//! cta_label = "Get Started"
//! cta_target = "docs/installation"
//!
//! [theme]
//! custom_css = "css/custom.css"    # Relative to the source directory
//!
//! [theme.prism]
//! default_language = "php"
//! theme = "github"
//!
//! [colors.light]
//! primary = "#3b5bdb"
//! ...
//!
//! [navbar]
//! title = "Octopy Framework"
//! search = true
//!
//! [navbar.logo]
//! alt = "Octopy Framework Logo"
//! src = "img/octopy.png"
//!
//! [[navbar.links]]
//! to = "docs/introduction"         # Internal target (resolved against base_url)
//! label = "Documentation"
//! position = "right"
//!
//! [[navbar.links]]
//! href = "https://github.com/..."  # External target (opens in a new tab)
//! label = "GitHub"
//!
//! [footer]
//! copyright = "Copyright © {year} Octopy ID - All Right Reserved."
//!
//! [docs]
//! sidebar_path = "sidebars.toml"
//! edit_url = "https://github.com/SupianIDz/OctopyDocumentation/edit/master/website/"
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key by key; arrays (such as `navbar.links`) replace the stock
//! value wholesale. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the navbar and the document `<title>`.
    pub title: String,
    /// Headline shown in the hero banner.
    pub tagline: String,
    /// Absolute URL the site is served from.
    pub url: String,
    /// Path prefix under `url`. Always starts and ends with `/`.
    pub base_url: String,
    pub favicon: String,
    pub organization_name: String,
    pub project_name: String,
    /// External stylesheets linked from every page.
    pub stylesheets: Vec<String>,
    pub hero: HeroConfig,
    pub theme: ThemeConfig,
    pub colors: ColorConfig,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub docs: DocsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Octopy Framework".to_string(),
            tagline: "A lightweight PHP Framework with Laravel look like".to_string(),
            url: "https://framework.octopy.id".to_string(),
            base_url: "/".to_string(),
            favicon: "img/favicon.ico".to_string(),
            organization_name: "Octopy ID".to_string(),
            project_name: "OctopyDocumentation".to_string(),
            stylesheets: vec!["https://fonts.googleapis.com/css?family=Miriam+Libre".to_string()],
            hero: HeroConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
            docs: DocsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.tagline.trim().is_empty() {
            return Err(ConfigError::Validation("tagline must not be empty".into()));
        }
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| ConfigError::Validation(format!("url is not a valid URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(
                "url must use the http or https scheme".into(),
            ));
        }
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must start and end with '/'".into(),
            ));
        }
        if self.hero.cta_label.trim().is_empty() || self.hero.cta_target.trim().is_empty() {
            return Err(ConfigError::Validation(
                "hero.cta_label and hero.cta_target must not be empty".into(),
            ));
        }
        for (i, link) in self.navbar.links.iter().enumerate() {
            if link.label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "navbar.links[{i}].label must not be empty"
                )));
            }
            let (key, target) = match &link.target {
                LinkTarget::Internal(to) => ("to", to),
                LinkTarget::External(href) => ("href", href),
            };
            if target.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "navbar.links[{i}].{key} must not be empty"
                )));
            }
        }
        if !self.theme.custom_css.is_empty() {
            check_source_relative("theme.custom_css", &self.theme.custom_css)?;
        }
        check_source_relative("docs.sidebar_path", &self.docs.sidebar_path)?;
        Ok(())
    }
}

/// Paths read from the source dir (and mirrored into the output) must stay
/// inside it: relative, with no `..` components.
fn check_source_relative(key: &str, value: &str) -> Result<(), ConfigError> {
    let path = Path::new(value);
    let contained = !value.trim().is_empty()
        && !value.starts_with('/')
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if contained {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{key} must be a relative path inside the source directory, got {value:?}"
        )))
    }
}

/// Hero banner chrome on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Fixed line under the tagline.
    pub subtitle: String,
    /// Illustration beside the headline. Empty hides it.
    pub image: String,
    pub cta_label: String,
    /// Document the call-to-action button points at.
    pub cta_target: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            subtitle: "Octopy is a lightweight MVC framework inspired by Laravel and less footprint."
                .to_string(),
            image: "img/octopy-600px.png".to_string(),
            cta_label: "Get Started".to_string(),
            cta_target: "docs/installation".to_string(),
        }
    }
}

/// Theme settings. Prism options are passed through to the docs generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Custom stylesheet, relative to the source directory. Linked and copied
    /// only when the file exists.
    pub custom_css: String,
    pub prism: PrismConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            custom_css: "css/custom.css".to_string(),
            prism: PrismConfig::default(),
        }
    }
}

/// Syntax highlighting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrismConfig {
    pub default_language: String,
    pub theme: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            default_language: "php".to_string(),
            theme: "github".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Brand color: hero background, buttons, active links.
    pub primary: String,
    /// Hover shade of the brand color.
    pub primary_dark: String,
    pub background: String,
    pub text: String,
    /// Text drawn on top of `primary` (hero headline, button labels).
    pub hero_text: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            primary: "#3b5bdb".to_string(),
            primary_dark: "#2f4ac0".to_string(),
            background: "#ffffff".to_string(),
            text: "#1c1e21".to_string(),
            hero_text: "#ffffff".to_string(),
            border: "#dadde1".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            primary: "#748ffc".to_string(),
            primary_dark: "#5c7cfa".to_string(),
            background: "#18191a".to_string(),
            text: "#e3e3e3".to_string(),
            hero_text: "#18191a".to_string(),
            border: "#444950".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Navbar contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    pub title: String,
    /// Whether the docs generator should show its search box.
    pub search: bool,
    pub logo: LogoConfig,
    pub links: Vec<NavLink>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            title: "Octopy Framework".to_string(),
            search: true,
            logo: LogoConfig::default(),
            links: vec![
                NavLink {
                    label: "Documentation".to_string(),
                    target: LinkTarget::Internal("docs/introduction".to_string()),
                    position: Position::Right,
                },
                NavLink {
                    label: "Blog".to_string(),
                    target: LinkTarget::Internal("blog".to_string()),
                    position: Position::Right,
                },
                NavLink {
                    label: "GitHub".to_string(),
                    target: LinkTarget::External(
                        "https://github.com/SupianIDz/OctopyFramework".to_string(),
                    ),
                    position: Position::Right,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    pub alt: String,
    /// Empty hides the logo.
    pub src: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            alt: "Octopy Framework Logo".to_string(),
            src: "img/octopy.png".to_string(),
        }
    }
}

/// A navbar link. Declared in TOML with exactly one of `to` or `href`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NavLinkDef", into = "NavLinkDef")]
pub struct NavLink {
    pub label: String,
    pub target: LinkTarget,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkTarget {
    /// Site-relative path, resolved against `base_url`.
    Internal(String),
    /// Absolute URL, rendered as-is and opened in a new tab.
    External(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    #[default]
    Right,
}

/// On-disk shape of [`NavLink`].
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavLinkDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    label: String,
    #[serde(default)]
    position: Position,
}

impl TryFrom<NavLinkDef> for NavLink {
    type Error = String;

    fn try_from(def: NavLinkDef) -> Result<Self, Self::Error> {
        let target = match (def.to, def.href) {
            (Some(to), None) => LinkTarget::Internal(to),
            (None, Some(href)) => LinkTarget::External(href),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "navbar link '{}' sets both `to` and `href`",
                    def.label
                ));
            }
            (None, None) => {
                return Err(format!(
                    "navbar link '{}' needs one of `to` or `href`",
                    def.label
                ));
            }
        };
        Ok(NavLink {
            label: def.label,
            target,
            position: def.position,
        })
    }
}

impl From<NavLink> for NavLinkDef {
    fn from(link: NavLink) -> Self {
        let (to, href) = match link.target {
            LinkTarget::Internal(to) => (Some(to), None),
            LinkTarget::External(href) => (None, Some(href)),
        };
        NavLinkDef {
            to,
            href,
            label: link.label,
            position: link.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Copyright line. `{year}` is replaced with the build year.
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            copyright: "Copyright © {year} Octopy ID - All Right Reserved.".to_string(),
        }
    }
}

impl FooterConfig {
    pub fn copyright_for(&self, year: i32) -> String {
        self.copyright.replace("{year}", &year.to_string())
    }
}

/// Options for the docs preset of the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Sidebar declaration, relative to the source directory.
    pub sidebar_path: String,
    /// Prefix for "edit this page" links.
    pub edit_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            sidebar_path: crate::sidebar::DEFAULT_SIDEBAR_PATH.to_string(),
            edit_url: "https://github.com/SupianIDz/OctopyDocumentation/edit/master/website/"
                .to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory on top of the stock
/// defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Octopy Site Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Site title (navbar and browser tab).
title = "Octopy Framework"

# Headline shown in the landing page hero.
tagline = "A lightweight PHP Framework with Laravel look like"

# Absolute URL the site is served from.
url = "https://framework.octopy.id"

# Path prefix under `url`. Must start and end with "/".
base_url = "/"

favicon = "img/favicon.ico"
organization_name = "Octopy ID"
project_name = "OctopyDocumentation"

# External stylesheets linked from every page.
stylesheets = ["https://fonts.googleapis.com/css?family=Miriam+Libre"]

# ---------------------------------------------------------------------------
# Landing page hero
# ---------------------------------------------------------------------------
[hero]
subtitle = "Octopy is a lightweight MVC framework inspired by Laravel and less footprint."
# Illustration beside the headline. Set to "" to hide it.
image = "img/octopy-600px.png"
cta_label = "Get Started"
cta_target = "docs/installation"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Custom stylesheet relative to the source directory (used when present).
custom_css = "css/custom.css"

# Syntax highlighting, passed through to the docs generator.
[theme.prism]
default_language = "php"
theme = "github"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
primary = "#3b5bdb"
primary_dark = "#2f4ac0"
background = "#ffffff"
text = "#1c1e21"
hero_text = "#ffffff"     # Text on top of the primary color
border = "#dadde1"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
primary = "#748ffc"
primary_dark = "#5c7cfa"
background = "#18191a"
text = "#e3e3e3"
hero_text = "#18191a"
border = "#444950"

# ---------------------------------------------------------------------------
# Navbar
# ---------------------------------------------------------------------------
[navbar]
title = "Octopy Framework"
search = true

[navbar.logo]
alt = "Octopy Framework Logo"
src = "img/octopy.png"

# Each link needs a label and exactly one of `to` (site path) or `href`
# (external URL). Position is "left" or "right" (default).
[[navbar.links]]
to = "docs/introduction"
label = "Documentation"
position = "right"

[[navbar.links]]
to = "blog"
label = "Blog"
position = "right"

[[navbar.links]]
href = "https://github.com/SupianIDz/OctopyFramework"
label = "GitHub"
position = "right"

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
# {year} is replaced with the year of the build.
copyright = "Copyright © {year} Octopy ID - All Right Reserved."

# ---------------------------------------------------------------------------
# Docs preset
# ---------------------------------------------------------------------------
[docs]
sidebar_path = "sidebars.toml"
edit_url = "https://github.com/SupianIDz/OctopyDocumentation/edit/master/website/"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {light_primary};
    --color-primary-dark: {light_primary_dark};
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-hero-text: {light_hero_text};
    --color-border: {light_border};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-primary: {dark_primary};
        --color-primary-dark: {dark_primary_dark};
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-hero-text: {dark_hero_text};
        --color-border: {dark_border};
    }}
}}"#,
        light_primary = colors.light.primary,
        light_primary_dark = colors.light.primary_dark,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_hero_text = colors.light.hero_text,
        light_border = colors.light.border,
        dark_primary = colors.dark.primary,
        dark_primary_dark = colors.dark.primary_dark,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_hero_text = colors.dark.hero_text,
        dark_border = colors.dark.border,
    )
}
