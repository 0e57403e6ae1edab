//! Helpers for constructing URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/shop` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path for the router (e.g., `/shop` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// Root of the product and collection JSON endpoints.
///
/// `QUICKVIEW_API_BASE` wins when set; otherwise the bundled `static/api`
/// directory under the public base is used.
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("QUICKVIEW_API_BASE"), public_url())
}

/// Collection listed on the catalog page.
#[must_use]
pub fn collection() -> &'static str {
    option_env!("QUICKVIEW_COLLECTION")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("accessories")
}

#[must_use]
pub fn product_url(api_base: &str, handle: &str) -> String {
    format!("{}/products/{handle}.json", api_base.trim_end_matches('/'))
}

#[must_use]
pub fn catalog_url(api_base: &str, collection: &str) -> String {
    format!(
        "{}/collections/{collection}.json",
        api_base.trim_end_matches('/')
    )
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn api_base_with(explicit: Option<&str>, public: &str) -> String {
    explicit
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .map_or_else(
            || asset_path_with_base("static/api", public),
            |base| base.trim_end_matches('/').to_string(),
        )
}
