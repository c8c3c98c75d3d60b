//! Shared test utilities for the octopy-site test suite.
//!
//! Fixture setup plus small markup inspectors that keep render tests focused
//! on structure (how many images, what order) rather than exact strings.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_feature(&feature("Zero Dependencies", Some("img/zero.svg")), 0, "/")
//!     .into_string();
//! assert_eq!(count_tag(&html, "img"), 1);
//! assert_eq!(attr_values(&html, "img", "src"), vec!["/img/zero.svg"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::FeatureEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Content builders
// =========================================================================

/// Feature with a filler description.
pub fn feature(title: &str, image: Option<&str>) -> FeatureEntry {
    FeatureEntry::new(title, &format!("About {title}."), image)
}

// =========================================================================
// Markup inspection
// =========================================================================

/// Start offsets of every `<tag` opening in `html`.
fn tag_starts<'a>(html: &'a str, tag: &'a str) -> impl Iterator<Item = usize> + 'a {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .map(|(i, _)| i)
        .filter(move |&i| {
            matches!(
                html[i + tag.len() + 1..].chars().next(),
                Some(' ') | Some('>') | Some('/')
            )
        })
        .collect::<Vec<_>>()
        .into_iter()
}

/// Number of `<tag ...>` elements in `html`.
pub fn count_tag(html: &str, tag: &str) -> usize {
    tag_starts(html, tag).count()
}

/// Values of `attr` on every `<tag>` in document order. Elements without the
/// attribute are skipped.
pub fn attr_values(html: &str, tag: &str, attr: &str) -> Vec<String> {
    let needle = format!(" {attr}=\"");
    tag_starts(html, tag)
        .filter_map(|start| {
            let end = start + html[start..].find('>')?;
            let element = &html[start..end];
            let value_start = element.find(&needle)? + needle.len();
            let value_len = element[value_start..].find('"')?;
            Some(element[value_start..value_start + value_len].to_string())
        })
        .collect()
}

/// Assert that every needle occurs in `haystack`, in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut cursor = 0;
    for needle in needles {
        match haystack[cursor..].find(needle) {
            Some(pos) => cursor += pos + needle.len(),
            None => panic!("'{needle}' not found after offset {cursor} (expected order: {needles:?})"),
        }
    }
}
