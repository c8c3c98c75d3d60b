//! Resolution of site-relative paths against the configured `base_url`.
//!
//! Every path that ends up in an `href` or `src` goes through [`resolve`], so a
//! site deployed under a sub-path (`base_url = "/octopy/"`) keeps working
//! without touching the content model.
//!
//! | Input | `base_url` | Output |
//! |-------|------------|--------|
//! | `img/zero.svg` | `/` | `/img/zero.svg` |
//! | `/img/zero.svg` | `/octopy/` | `/octopy/img/zero.svg` |
//! | `/octopy/img/zero.svg` | `/octopy/` | `/octopy/img/zero.svg` |
//! | `https://cdn.example/x.svg` | any | unchanged |

/// True for URLs that leave the site: `http:`, `https:` or protocol-relative.
pub fn is_external(path: &str) -> bool {
    path.starts_with("http:") || path.starts_with("https:") || path.starts_with("//")
}

/// Resolve `path` to a server-absolute path under `base_url`.
///
/// External URLs and paths already carrying the base prefix pass through
/// unchanged. Empty input stays empty.
pub fn resolve(base_url: &str, path: &str) -> String {
    if path.is_empty() || is_external(path) {
        return path.to_string();
    }
    if path.starts_with('/') && path.starts_with(base_url) {
        return path.to_string();
    }
    format!("{}{}", base_url, path.trim_start_matches('/'))
}

/// Like [`resolve`], but prefixed with the site `url` so the result is a full
/// URL (canonical link, preview image metadata).
pub fn resolve_absolute(site_url: &str, base_url: &str, path: &str) -> String {
    let resolved = resolve(base_url, path);
    if resolved.is_empty() || is_external(&resolved) {
        return resolved;
    }
    format!("{}{}", site_url.trim_end_matches('/'), resolved)
}
