//! # Octopy Site
//!
//! Static site builder for the Octopy Framework documentation website. The
//! site is described entirely by declarative files in a source directory;
//! this crate turns them into the landing page and the manifests the docs
//! generator consumes.
//!
//! # Architecture: Load, then Generate
//!
//! ```text
//! 1. Load      website/  →  Site       (config.toml, features.toml, sidebars.toml)
//! 2. Generate  Site      →  dist/      (index.html, site.json, sidebars.json, static/)
//! ```
//!
//! Loading reads and validates every input once; the resulting [`site::Site`]
//! is immutable. Generation is a single synchronous pass. The renderers are
//! pure functions of their arguments, so tests exercise them without touching
//! the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Reads the source directory into a [`site::Site`] |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, color CSS |
//! | [`content`] | Feature entries, `ImageRef`, `NonEmpty`, `features.toml` loading |
//! | [`sidebar`] | Ordered sidebar tree and its `sidebars.json` form |
//! | [`base_url`] | Resolution of site paths against `base_url` |
//! | [`generate`] | Maud renderers for the landing page and the output writer |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Templates are Rust
//! expressions checked at compile time, and all interpolation is escaped.
//!
//! ## Absence in the Types
//!
//! A feature without an image carries `image: None`, and the page composer
//! takes `Option<&NonEmpty<FeatureEntry>>`. Rendering nothing is a visible
//! branch in each renderer rather than a truthiness check on strings or
//! lists.
//!
//! ## Stock Defaults
//!
//! Every input file is optional. Missing files fall back to the Octopy site
//! as deployed, so an empty source directory builds the real landing page.

pub mod base_url;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod sidebar;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;
