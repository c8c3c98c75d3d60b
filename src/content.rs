//! Landing page content model.
//!
//! Feature entries are declared in `features.toml` in the source directory:
//!
//! ```toml
//! [[feature]]
//! title = "Zero Dependencies"
//! description = "Octopy is designed without dependency on other packages."
//! image = "img/zero.svg"    # Optional
//! ```
//!
//! Declaration order is display order. When the file is absent the stock
//! Octopy features are used; `feature = []` declares an empty list, which
//! suppresses the features section of the landing page.

use crate::base_url;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {}: {}", .0.display(), .1)]
    Toml(PathBuf, toml::de::Error),
    #[error("Feature {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
    #[error("Sidebar section label must not be empty (section {0})")]
    EmptySectionLabel(usize),
    #[error("Duplicate sidebar section: {0}")]
    DuplicateSection(String),
}

/// Reference to an image resource, relative to the site root or external.
///
/// Never empty: an empty declaration means "no image" and becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        if path.trim().is_empty() {
            None
        } else {
            Some(Self(path))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Displayable URL for this image under `base_url`.
    pub fn resolve(&self, base: &str) -> String {
        base_url::resolve(base, &self.0)
    }
}

/// One feature card on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureEntry {
    pub title: String,
    pub description: String,
    #[serde(
        default,
        deserialize_with = "image_ref_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<ImageRef>,
}

impl FeatureEntry {
    pub fn new(title: &str, description: &str, image: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.and_then(ImageRef::new),
        }
    }
}

fn image_ref_or_none<'de, D>(deserializer: D) -> Result<Option<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(ImageRef::new))
}

/// A sequence with at least one element.
#[derive(Debug, Clone, PartialEq)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    /// `None` for an empty vector.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FeaturesFile {
    #[serde(default, rename = "feature")]
    features: Vec<FeatureEntry>,
}

/// Parse a `features.toml` document and check every entry.
pub fn parse_features(content: &str, path: &Path) -> Result<Vec<FeatureEntry>, ContentError> {
    let file: FeaturesFile =
        toml::from_str(content).map_err(|e| ContentError::Toml(path.to_path_buf(), e))?;
    validate_features(&file.features)?;
    Ok(file.features)
}

/// Load `features.toml` from `root`, falling back to [`stock_features`].
pub fn load_features(root: &Path) -> Result<Vec<FeatureEntry>, ContentError> {
    let path = root.join("features.toml");
    if !path.exists() {
        return Ok(stock_features());
    }
    let content = fs::read_to_string(&path)?;
    parse_features(&content, &path)
}

fn validate_features(features: &[FeatureEntry]) -> Result<(), ContentError> {
    for (index, feature) in features.iter().enumerate() {
        if feature.title.trim().is_empty() {
            return Err(ContentError::EmptyField {
                index,
                field: "title",
            });
        }
        if feature.description.trim().is_empty() {
            return Err(ContentError::EmptyField {
                index,
                field: "description",
            });
        }
    }
    Ok(())
}

/// The three features of the Octopy landing page.
pub fn stock_features() -> Vec<FeatureEntry> {
    vec![
        FeatureEntry::new(
            "Expressive, Beautiful Syntax",
            "Value elegance, simplicity, readability and easy to use ? You’ll fit right in. \
             Octopy is designed for people just like you.",
            Some("img/code.svg"),
        ),
        FeatureEntry::new(
            "Designed For Your Team",
            "Whether you’re a solo developer or a 20 person team, Octopy is a breath of fresh \
             air. Keep everyone in sync using Octopy’s database agnostic migrations and schema \
             builder.",
            Some("img/dev.svg"),
        ),
        FeatureEntry::new(
            "Zero Dependencies",
            "Octopy is designed without dependency on other packages. But you are free to use \
             packages from outside using composer.",
            Some("img/zero.svg"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn image_ref_rejects_blank() {
        assert!(ImageRef::new("").is_none());
        assert!(ImageRef::new("   ").is_none());
        assert_eq!(ImageRef::new("img/zero.svg").unwrap().as_str(), "img/zero.svg");
    }

    #[test]
    fn image_ref_resolves_against_base() {
        let img = ImageRef::new("img/zero.svg").unwrap();
        assert_eq!(img.resolve("/"), "/img/zero.svg");
        assert_eq!(img.resolve("/octopy/"), "/octopy/img/zero.svg");
    }

    #[test]
    fn non_empty_from_empty_vec_is_none() {
        assert!(NonEmpty::<u32>::from_vec(vec![]).is_none());
    }

    #[test]
    fn non_empty_keeps_order() {
        let ne = NonEmpty::from_vec(vec![3, 1, 2]).unwrap();
        assert_eq!(ne.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn parse_features_in_order() {
        let toml = r#"
[[feature]]
title = "One"
description = "First"
image = "img/one.svg"

[[feature]]
title = "Two"
description = "Second"
"#;
        let features = parse_features(toml, Path::new("features.toml")).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].title, "One");
        assert_eq!(features[0].image.as_ref().unwrap().as_str(), "img/one.svg");
        assert_eq!(features[1].title, "Two");
        assert!(features[1].image.is_none());
    }

    #[test]
    fn empty_image_string_means_no_image() {
        let toml = r#"
[[feature]]
title = "One"
description = "First"
image = ""
"#;
        let features = parse_features(toml, Path::new("features.toml")).unwrap();
        assert!(features[0].image.is_none());
    }

    #[test]
    fn empty_feature_list_is_allowed() {
        let features = parse_features("feature = []", Path::new("features.toml")).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn empty_title_rejected() {
        let toml = r#"
[[feature]]
title = ""
description = "First"
"#;
        let err = parse_features(toml, Path::new("features.toml")).unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyField {
                index: 0,
                field: "title"
            }
        ));
    }

    #[test]
    fn unknown_feature_key_rejected() {
        let toml = r#"
[[feature]]
title = "One"
description = "First"
imageUrl = "img/one.svg"
"#;
        let err = parse_features(toml, Path::new("features.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Toml(..)));
    }

    #[test]
    fn load_features_falls_back_to_stock() {
        let tmp = TempDir::new().unwrap();
        let features = load_features(tmp.path()).unwrap();
        assert_eq!(features, stock_features());
    }

    #[test]
    fn load_features_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("features.toml"),
            "[[feature]]\ntitle = \"Solo\"\ndescription = \"Only one\"\n",
        )
        .unwrap();
        let features = load_features(tmp.path()).unwrap();
        assert_eq!(features, vec![FeatureEntry::new("Solo", "Only one", None)]);
    }

    #[test]
    fn stock_features_all_have_images() {
        let features = stock_features();
        let titles: Vec<&str> = features.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Expressive, Beautiful Syntax",
                "Designed For Your Team",
                "Zero Dependencies"
            ]
        );
        assert!(features.iter().all(|f| f.image.is_some()));
    }
}
