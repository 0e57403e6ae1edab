// Accessibility helpers

/// Elements that can take keyboard focus inside the overlay.
pub const FOCUSABLE_QUERY: &str =
    "button:not([disabled]), [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "quickview-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #1d4ed8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// No-op outside the browser or when the region is not mounted.
pub fn announce(msg: &str) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}
