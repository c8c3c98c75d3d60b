//! Landing page rendering and output generation.
//!
//! Takes a loaded [`Site`] and writes the static output:
//!
//! ```text
//! dist/
//! ├── index.html          # Landing page (hero + feature cards)
//! ├── site.json           # Resolved site config for the docs generator
//! ├── sidebars.json       # Sidebar tree, declaration order preserved
//! ├── css/custom.css      # Custom stylesheet (if present in the source)
//! └── img/...             # Everything under the source static/ dir
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every renderer takes its inputs as arguments; nothing is looked up from
//! shared state. Absent content is expressed in the types: a feature without
//! an image has `image: None`, and a page without features receives `None`
//! instead of an empty list. Both render nothing at all.

use crate::base_url;
use crate::config::{self, LinkTarget, NavLink, Position, SiteConfig};
use crate::content::{FeatureEntry, ImageRef, NonEmpty};
use crate::site::{self, STATIC_DIR, Site};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Walking static files failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Static file outside of source dir: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),
}

/// Generator-facing site config.
pub const SITE_MANIFEST: &str = "site.json";
/// Generator-facing sidebar tree.
pub const SIDEBAR_MANIFEST: &str = "sidebars.json";

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Page-level inputs that come from the build rather than the site config.
#[derive(Debug, Clone)]
pub struct Chrome {
    /// Inline stylesheet (color variables + base styles).
    pub css: String,
    /// Year substituted into the footer copyright.
    pub year: i32,
    /// Resolved href of the custom stylesheet, when one was copied.
    pub custom_css: Option<String>,
}

impl Chrome {
    pub fn new(config: &SiteConfig, year: i32, custom_css: Option<String>) -> Self {
        let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
        Self {
            css,
            year,
            custom_css,
        }
    }
}

/// What a build wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    /// Files written by the renderer, relative to `output_dir`.
    pub files: Vec<String>,
    /// Number of files copied from the source `static/` directory.
    pub assets_copied: usize,
}

pub fn generate(
    site: &Site,
    source: &Path,
    output_dir: &Path,
    year: i32,
) -> Result<BuildSummary, GenerateError> {
    let config = &site.config;
    fs::create_dir_all(output_dir)?;

    let assets_copied = copy_static(&source.join(STATIC_DIR), output_dir)?;
    let mut files = Vec::new();

    let custom_css = match site::custom_css_path(source, config) {
        Some(path) => {
            let rel = config.theme.custom_css.trim_start_matches('/');
            let dest = output_dir.join(rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&path, &dest)?;
            files.push(rel.to_string());
            Some(base_url::resolve(&config.base_url, rel))
        }
        None => None,
    };

    let chrome = Chrome::new(config, year, custom_css);
    let cards = site.feature_cards();
    let index_html = render_home(config, cards.as_ref(), &chrome);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;
    files.push("index.html".to_string());
    info!(
        features = site.features.len(),
        "generated {}",
        output_dir.join("index.html").display()
    );

    let mut resolved = config.clone();
    resolved.footer.copyright = config.footer.copyright_for(year);
    fs::write(
        output_dir.join(SITE_MANIFEST),
        serde_json::to_string_pretty(&resolved)?,
    )?;
    files.push(SITE_MANIFEST.to_string());

    fs::write(
        output_dir.join(SIDEBAR_MANIFEST),
        serde_json::to_string_pretty(&site.sidebar.generator_view())?,
    )?;
    files.push(SIDEBAR_MANIFEST.to_string());

    info!("site generated at {}", output_dir.display());
    Ok(BuildSummary {
        output_dir: output_dir.to_path_buf(),
        files,
        assets_copied,
    })
}

/// Copy `src` into `dst` recursively, returning the number of files copied.
/// A missing `src` copies nothing.
fn copy_static(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let target = dst.join(entry.path().strip_prefix(src)?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            debug!("copied {}", target.display());
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document: head, navbar, content, footer.
fn base_document(config: &SiteConfig, chrome: &Chrome, content: Markup) -> Markup {
    let base = config.base_url.as_str();
    let title = format!("{} - {}", config.title, config.tagline);
    let favicon = ImageRef::new(config.favicon.as_str());
    let preview_image = ImageRef::new(config.hero.image.as_str())
        .map(|img| base_url::resolve_absolute(&config.url, base, img.as_str()));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(config.tagline);
                link rel="canonical" href=(base_url::resolve_absolute(&config.url, base, base));
                @if let Some(image) = preview_image {
                    meta property="og:image" content=(image);
                }
                @if let Some(icon) = favicon {
                    link rel="icon" href=(icon.resolve(base));
                }
                @for sheet in &config.stylesheets {
                    link rel="stylesheet" href=(base_url::resolve(base, sheet));
                }
                style { (PreEscaped(&chrome.css)) }
                @if let Some(href) = &chrome.custom_css {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                (render_navbar(config))
                div.main-wrapper {
                    (content)
                }
                (render_footer(&config.footer.copyright_for(chrome.year)))
            }
        }
    }
}

/// Renders the navbar: brand on the left, links grouped by position.
pub fn render_navbar(config: &SiteConfig) -> Markup {
    let base = config.base_url.as_str();
    let navbar = &config.navbar;
    let logo = ImageRef::new(navbar.logo.src.as_str());

    html! {
        nav.navbar {
            div.navbar__inner {
                div.navbar__items {
                    a.navbar__brand href=(base) {
                        @if let Some(logo) = &logo {
                            img.navbar__logo src=(logo.resolve(base)) alt=(navbar.logo.alt);
                        }
                        @if !navbar.title.is_empty() {
                            b.navbar__title { (navbar.title) }
                        }
                    }
                    @for link in links_at(&navbar.links, Position::Left) {
                        (render_nav_link(link, base))
                    }
                }
                div class="navbar__items navbar__items--right" {
                    @for link in links_at(&navbar.links, Position::Right) {
                        (render_nav_link(link, base))
                    }
                }
            }
        }
    }
}

fn links_at(links: &[NavLink], position: Position) -> impl Iterator<Item = &NavLink> {
    links.iter().filter(move |l| l.position == position)
}

fn render_nav_link(link: &NavLink, base: &str) -> Markup {
    html! {
        @match &link.target {
            LinkTarget::Internal(to) => {
                a.navbar__link href=(base_url::resolve(base, to)) { (link.label) }
            }
            LinkTarget::External(href) => {
                a.navbar__link href=(href) target="_blank" rel="noopener noreferrer" {
                    (link.label)
                }
            }
        }
    }
}

fn render_footer(copyright: &str) -> Markup {
    html! {
        footer.footer {
            div class="container text--center" {
                div.footer__copyright { (copyright) }
            }
        }
    }
}

// ============================================================================
// Landing page
// ============================================================================

/// Renders one feature card.
///
/// `index` is the card's position in the list; it is emitted as
/// `data-index` and carries no other meaning.
pub fn render_feature(feature: &FeatureEntry, index: usize, base: &str) -> Markup {
    html! {
        div class="col col--4 feature" data-index=(index) {
            @if let Some(image) = &feature.image {
                div class="text--center" {
                    img.feature-image src=(image.resolve(base)) alt=(feature.title);
                }
            }
            h3 class="text--center" { (feature.title) }
            p class="text--center" { (feature.description) }
        }
    }
}

/// Composes the landing page body: hero header plus feature cards.
///
/// The features section is left out entirely when `features` is `None`.
pub fn compose_home(config: &SiteConfig, features: Option<&NonEmpty<FeatureEntry>>) -> Markup {
    let base = config.base_url.as_str();
    let hero = &config.hero;
    let illustration = ImageRef::new(hero.image.as_str());

    html! {
        header class="hero hero--primary hero-banner" {
            div.container {
                div.row {
                    div class="col padding-top--lg" {
                        h1.hero__title { (config.tagline) }
                        p.hero__subtitle { (hero.subtitle) }
                        div.buttons {
                            a class="button button--secondary button--lg get-started"
                                href=(base_url::resolve(base, &hero.cta_target)) {
                                (hero.cta_label)
                            }
                        }
                    }
                    @if let Some(image) = &illustration {
                        div class="col text--center" {
                            img.hero-image src=(image.resolve(base)) alt=(config.title);
                        }
                    }
                }
            }
        }
        main {
            @if let Some(features) = features {
                section.features {
                    div.container {
                        div.row {
                            @for (idx, feature) in features.iter().enumerate() {
                                (render_feature(feature, idx, base))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the complete landing page document.
pub fn render_home(
    config: &SiteConfig,
    features: Option<&NonEmpty<FeatureEntry>>,
    chrome: &Chrome,
) -> Markup {
    base_document(config, chrome, compose_home(config, features))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::stock_features;
    use crate::test_helpers::*;

    fn chrome() -> Chrome {
        Chrome {
            css: String::new(),
            year: 2020,
            custom_css: None,
        }
    }

    // =========================================================================
    // Feature renderer
    // =========================================================================

    #[test]
    fn feature_with_image_has_one_img() {
        let entry = feature("Zero Dependencies", Some("img/zero.svg"));
        let html = render_feature(&entry, 0, "/").into_string();
        assert_eq!(count_tag(&html, "img"), 1);
        assert!(html.contains(r#"src="/img/zero.svg""#));
        assert!(html.contains(r#"alt="Zero Dependencies""#));
    }

    #[test]
    fn feature_without_image_has_no_img() {
        let entry = feature("Designed For Your Team", None);
        let html = render_feature(&entry, 0, "/").into_string();
        assert_eq!(count_tag(&html, "img"), 0);
        assert!(html.contains("<h3"));
        assert!(html.contains("<p"));
    }

    #[test]
    fn feature_heading_and_description() {
        let entry = FeatureEntry::new("Zero Dependencies", "No packages needed.", Some("img/zero.svg"));
        let html = render_feature(&entry, 2, "/").into_string();
        assert!(html.contains(r#"<h3 class="text--center">Zero Dependencies</h3>"#));
        assert!(html.contains(r#"<p class="text--center">No packages needed.</p>"#));
        assert!(html.contains(r#"data-index="2""#));
    }

    #[test]
    fn feature_image_follows_base_url() {
        let entry = feature("Zero Dependencies", Some("img/zero.svg"));
        let html = render_feature(&entry, 0, "/octopy/").into_string();
        let src = attr_values(&html, "img", "src");
        assert_eq!(src, vec!["/octopy/img/zero.svg"]);
        assert!(src[0].ends_with("img/zero.svg"));
    }

    #[test]
    fn feature_external_image_untouched() {
        let entry = feature("Remote", Some("https://cdn.example/a.svg"));
        let html = render_feature(&entry, 0, "/octopy/").into_string();
        assert_eq!(attr_values(&html, "img", "src"), vec!["https://cdn.example/a.svg"]);
    }

    #[test]
    fn feature_text_is_escaped() {
        let entry = FeatureEntry::new("<b>bold</b>", "a & b", None);
        let html = render_feature(&entry, 0, "/").into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    // =========================================================================
    // Page composer
    // =========================================================================

    #[test]
    fn compose_lists_features_in_order() {
        let config = SiteConfig::default();
        let features = NonEmpty::from_vec(vec![
            feature("Gamma", None),
            feature("Alpha", Some("img/a.svg")),
            feature("Beta", None),
        ])
        .unwrap();
        let html = compose_home(&config, Some(&features)).into_string();
        assert_in_order(&html, &[">Gamma</h3>", ">Alpha</h3>", ">Beta</h3>"]);
        assert_in_order(
            &html,
            &[r#"data-index="0""#, r#"data-index="1""#, r#"data-index="2""#],
        );
    }

    #[test]
    fn compose_without_features_omits_section() {
        let config = SiteConfig::default();
        let html = compose_home(&config, None).into_string();
        assert!(!html.contains("<section"));
        assert!(!html.contains(r#"class="features""#));
        assert!(!html.contains("feature"));
    }

    #[test]
    fn tagline_is_sole_headline() {
        let mut config = SiteConfig::default();
        config.tagline = "A lightweight PHP Framework with Laravel look like".to_string();
        let html = render_home(&config, None, &chrome()).into_string();
        assert_eq!(count_tag(&html, "h1"), 1);
        assert!(html.contains(
            r#"<h1 class="hero__title">A lightweight PHP Framework with Laravel look like</h1>"#
        ));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn compose_hero_subtitle_and_cta() {
        let mut config = SiteConfig::default();
        config.base_url = "/octopy/".to_string();
        let html = compose_home(&config, None).into_string();
        assert!(html.contains(
            "Octopy is a lightweight MVC framework inspired by Laravel and less footprint."
        ));
        assert!(html.contains(r#"href="/octopy/docs/installation""#));
        assert!(html.contains(">Get Started</a>"));
    }

    #[test]
    fn compose_hero_image_optional() {
        let mut config = SiteConfig::default();
        let with = compose_home(&config, None).into_string();
        assert_eq!(attr_values(&with, "img", "src"), vec!["/img/octopy-600px.png"]);

        config.hero.image = String::new();
        let without = compose_home(&config, None).into_string();
        assert_eq!(count_tag(&without, "img"), 0);
    }

    #[test]
    fn compose_stock_features() {
        let config = SiteConfig::default();
        let features = NonEmpty::from_vec(stock_features()).unwrap();
        let html = compose_home(&config, Some(&features)).into_string();
        // three cards plus the hero illustration
        assert_eq!(count_tag(&html, "img"), 4);
        assert!(html.contains(">Zero Dependencies</h3>"));
    }

    // =========================================================================
    // Document chrome
    // =========================================================================

    #[test]
    fn document_title_and_doctype() {
        let config = SiteConfig::default();
        let html = render_home(&config, None, &chrome()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(
            "<title>Octopy Framework - A lightweight PHP Framework with Laravel look like</title>"
        ));
    }

    #[test]
    fn document_links_stylesheets_and_favicon() {
        let config = SiteConfig::default();
        let html = render_home(&config, None, &chrome()).into_string();
        assert!(html.contains(r#"href="https://fonts.googleapis.com/css?family=Miriam+Libre""#));
        assert!(html.contains(r#"<link rel="icon" href="/img/favicon.ico">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://framework.octopy.id/">"#));
    }

    #[test]
    fn document_links_custom_css_when_given() {
        let config = SiteConfig::default();
        let mut chrome = chrome();
        chrome.custom_css = Some("/css/custom.css".to_string());
        let html = render_home(&config, None, &chrome).into_string();
        assert!(html.contains(r#"href="/css/custom.css""#));
    }

    #[test]
    fn footer_uses_build_year() {
        let config = SiteConfig::default();
        let html = render_home(&config, None, &chrome()).into_string();
        assert!(html.contains("Copyright © 2020 Octopy ID - All Right Reserved."));
    }

    #[test]
    fn navbar_internal_and_external_links() {
        let mut config = SiteConfig::default();
        config.base_url = "/octopy/".to_string();
        let html = render_navbar(&config).into_string();
        assert!(html.contains(r#"href="/octopy/docs/introduction""#));
        assert!(html.contains(r#"href="/octopy/blog""#));
        assert!(html.contains(
            r#"href="https://github.com/SupianIDz/OctopyFramework" target="_blank""#
        ));
        assert_in_order(&html, &[">Documentation<", ">Blog<", ">GitHub<"]);
    }

    #[test]
    fn navbar_groups_by_position() {
        let mut config = SiteConfig::default();
        config.navbar.links[1].position = Position::Left;
        let html = render_navbar(&config).into_string();
        // Left group precedes the right group
        assert_in_order(&html, &[">Blog<", "navbar__items--right", ">Documentation<"]);
    }

    #[test]
    fn navbar_brand_has_no_headline() {
        let config = SiteConfig::default();
        let html = render_navbar(&config).into_string();
        assert_eq!(count_tag(&html, "h1"), 0);
        assert!(html.contains(r#"alt="Octopy Framework Logo""#));
    }

    // =========================================================================
    // generate
    // =========================================================================

    #[test]
    fn generate_writes_outputs() {
        let source = setup_fixtures();
        let out = tempfile::TempDir::new().unwrap();
        let site = site::load(source.path()).unwrap();

        let summary = generate(&site, source.path(), out.path(), 2021).unwrap();

        assert_eq!(
            summary.files,
            vec!["css/custom.css", "index.html", SITE_MANIFEST, SIDEBAR_MANIFEST]
        );
        assert_eq!(summary.assets_copied, 3);
        assert!(out.path().join("img/zero.svg").exists());
        assert!(out.path().join("css/custom.css").exists());

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains(r#"href="/octopy/css/custom.css""#));
        assert!(index.contains("© 2021 Fixture Docs"));
        assert!(index.contains(r#"src="/octopy/img/octopy-600px.svg""#));
        assert_in_order(&index, &[">Zero Dependencies</h3>", ">No Image</h3>", ">Last</h3>"]);
    }

    #[test]
    fn generate_site_manifest_resolves_copyright() {
        let source = setup_fixtures();
        let out = tempfile::TempDir::new().unwrap();
        let site = site::load(source.path()).unwrap();
        generate(&site, source.path(), out.path(), 2021).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.path().join(SITE_MANIFEST)).unwrap())
                .unwrap();
        assert_eq!(json["base_url"], "/octopy/");
        assert_eq!(json["footer"]["copyright"], "© 2021 Fixture Docs");
        assert_eq!(json["theme"]["prism"]["default_language"], "php");
    }

    #[test]
    fn generate_sidebar_manifest_in_declaration_order() {
        let source = setup_fixtures();
        let out = tempfile::TempDir::new().unwrap();
        let site = site::load(source.path()).unwrap();
        generate(&site, source.path(), out.path(), 2021).unwrap();

        let json = fs::read_to_string(out.path().join(SIDEBAR_MANIFEST)).unwrap();
        assert!(json.contains(r#""docs""#));
        assert_in_order(&json, &["\"Prologue\"", "\"Getting Started\"", "\"Security\""]);
    }

    #[test]
    fn generate_without_static_dir() {
        let source = tempfile::TempDir::new().unwrap();
        let out = tempfile::TempDir::new().unwrap();
        let site = site::load(source.path()).unwrap();
        let summary = generate(&site, source.path(), out.path(), 2021).unwrap();
        assert_eq!(summary.assets_copied, 0);
        assert_eq!(summary.files, vec!["index.html", SITE_MANIFEST, SIDEBAR_MANIFEST]);
    }

    #[test]
    fn generate_empty_features_omits_section() {
        let source = tempfile::TempDir::new().unwrap();
        fs::write(source.path().join("features.toml"), "feature = []").unwrap();
        let out = tempfile::TempDir::new().unwrap();
        let site = site::load(source.path()).unwrap();
        generate(&site, source.path(), out.path(), 2021).unwrap();

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(!index.contains("<section"));
        assert_eq!(count_tag(&index, "h1"), 1);
    }
}
