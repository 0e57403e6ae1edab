//! Overlay open/closed state carried in a single URL query parameter
//!
//! The query string is the only source of truth: [`OverlayState`] is
//! re-derived from it on every read and never cached, so back/forward
//! navigation opens and closes the overlay with no extra bookkeeping.

use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;
use std::cell::RefCell;

/// Reserved query parameter naming the open item.
pub const QUERY_PARAM: &str = "product";

static HANDLE_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").ok());

const VALUE_ENCODE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// True for storefront-shaped handles; anything else never reaches a fetch URL.
#[must_use]
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_RE
        .as_ref()
        .is_some_and(|re| re.is_match(handle))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Raw `&`-separated query segments, kept byte-for-byte.
///
/// Only segments whose key is the edited parameter are ever rewritten;
/// every other segment, including empty ones, keeps its bytes and position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    segments: Vec<String>,
}

impl QueryString {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        if raw.is_empty() {
            return Self::default();
        }
        Self {
            segments: raw.split('&').map(str::to_string).collect(),
        }
    }

    fn key_of(segment: &str) -> String {
        let key = segment.split_once('=').map_or(segment, |(key, _)| key);
        decode_component(key)
    }

    /// Decoded value of the first segment named `param`.
    #[must_use]
    pub fn get(&self, param: &str) -> Option<String> {
        self.segments
            .iter()
            .find(|segment| Self::key_of(segment) == param)
            .map(|segment| {
                segment
                    .split_once('=')
                    .map_or_else(String::new, |(_, value)| decode_component(value))
            })
    }

    /// Set `param`, replacing its first occurrence in place or appending it.
    #[must_use]
    pub fn with_param(&self, param: &str, value: &str) -> Self {
        let encoded = format!(
            "{}={}",
            utf8_percent_encode(param, VALUE_ENCODE),
            utf8_percent_encode(value, VALUE_ENCODE)
        );
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        let mut placed = false;
        for segment in &self.segments {
            if Self::key_of(segment) == param {
                if !placed {
                    segments.push(encoded.clone());
                    placed = true;
                }
            } else {
                segments.push(segment.clone());
            }
        }
        if !placed {
            segments.push(encoded);
        }
        Self { segments }
    }

    /// Remove every occurrence of `param`.
    #[must_use]
    pub fn without_param(&self, param: &str) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .filter(|segment| Self::key_of(segment) != param)
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `?`-prefixed form, or the empty string when there are no segments.
    #[must_use]
    pub fn to_search(&self) -> String {
        if self.segments.is_empty() {
            String::new()
        } else {
            format!("?{}", self.segments.join("&"))
        }
    }
}

/// Overlay state as read from the current URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open(String),
}

impl OverlayState {
    /// Derive the state from a raw query string (with or without `?`).
    #[must_use]
    pub fn from_query(raw: &str) -> Self {
        match QueryString::parse(raw).get(QUERY_PARAM) {
            Some(handle) if is_valid_handle(&handle) => Self::Open(handle),
            Some(handle) if !handle.is_empty() => {
                log::warn!("ignoring malformed product handle in URL: {handle:?}");
                Self::Closed
            }
            _ => Self::Closed,
        }
    }

    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        match self {
            Self::Open(handle) => Some(handle.as_str()),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Classify the move from `self` to `next`.
    #[must_use]
    pub fn transition_to(&self, next: &Self) -> OverlayTransition {
        match (self, next) {
            (Self::Closed, Self::Open(to)) => OverlayTransition::Opened(to.clone()),
            (Self::Open(from), Self::Open(to)) if from != to => OverlayTransition::Switched {
                from: from.clone(),
                to: to.clone(),
            },
            (Self::Open(_), Self::Closed) => OverlayTransition::Closed,
            _ => OverlayTransition::Unchanged,
        }
    }
}

/// Effect-relevant classification of a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayTransition {
    Opened(String),
    Switched { from: String, to: String },
    Closed,
    Unchanged,
}

impl OverlayTransition {
    /// Handle whose product must be fetched as a consequence of this move.
    #[must_use]
    pub fn fetch_target(&self) -> Option<&str> {
        match self {
            Self::Opened(handle) | Self::Switched { to: handle, .. } => Some(handle.as_str()),
            Self::Closed | Self::Unchanged => None,
        }
    }
}

/// Store backing the query string: the browser history in the web crate,
/// [`MemoryHistory`] elsewhere.
pub trait HistoryStore {
    /// Current query string, `?`-prefixed or empty.
    fn current_query(&self) -> String;

    /// Push a new entry carrying `query` on the current path, without
    /// reloading the page or moving the scroll position.
    fn push_query(&self, query: &str);
}

/// Drives [`OverlayState`] through a [`HistoryStore`].
#[derive(Debug, Clone)]
pub struct NavigationSynchronizer<H> {
    history: H,
}

impl<H: HistoryStore> NavigationSynchronizer<H> {
    pub const fn new(history: H) -> Self {
        Self { history }
    }

    pub const fn history(&self) -> &H {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        OverlayState::from_query(&self.history.current_query())
    }

    /// Open (or switch to) `handle`. Returns the transition that was pushed.
    pub fn open(&self, handle: &str) -> OverlayTransition {
        if !is_valid_handle(handle) {
            log::warn!("refusing to open overlay for malformed handle {handle:?}");
            return OverlayTransition::Unchanged;
        }
        let current = self.state();
        let next = OverlayState::Open(handle.to_string());
        let transition = current.transition_to(&next);
        if transition == OverlayTransition::Unchanged {
            return transition;
        }
        let query = QueryString::parse(&self.history.current_query())
            .with_param(QUERY_PARAM, handle)
            .to_search();
        log::debug!("overlay {transition:?}");
        self.history.push_query(&query);
        transition
    }

    /// Close the overlay. Returns the transition that was pushed.
    pub fn close(&self) -> OverlayTransition {
        let raw = self.history.current_query();
        let parsed = QueryString::parse(&raw);
        if parsed.get(QUERY_PARAM).is_none() {
            return OverlayTransition::Unchanged;
        }
        let transition = self.state().transition_to(&OverlayState::Closed);
        self.history
            .push_query(&parsed.without_param(QUERY_PARAM).to_search());
        log::debug!("overlay closed");
        transition
    }
}

/// In-memory history with back/forward, for tests and the tester harness.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    cursor: RefCell<usize>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial_query: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial_query.to_string()]),
            cursor: RefCell::new(0),
        }
    }

    /// Number of entries pushed so far, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Step back one entry, as the browser back button would.
    pub fn back(&self) -> bool {
        let mut cursor = self.cursor.borrow_mut();
        if *cursor == 0 {
            return false;
        }
        *cursor -= 1;
        true
    }

    pub fn forward(&self) -> bool {
        let mut cursor = self.cursor.borrow_mut();
        if *cursor + 1 >= self.entries.borrow().len() {
            return false;
        }
        *cursor += 1;
        true
    }

    /// Replace the URL out of band (address bar edit, external link).
    pub fn visit(&self, query: &str) {
        self.push_query(query);
    }
}

impl HistoryStore for MemoryHistory {
    fn current_query(&self) -> String {
        let cursor = *self.cursor.borrow();
        self.entries
            .borrow()
            .get(cursor)
            .cloned()
            .unwrap_or_default()
    }

    fn push_query(&self, query: &str) {
        let mut cursor = self.cursor.borrow_mut();
        let mut entries = self.entries.borrow_mut();
        entries.truncate(*cursor + 1);
        entries.push(query.to_string());
        *cursor = entries.len() - 1;
    }
}

impl<H: HistoryStore> HistoryStore for &H {
    fn current_query(&self) -> String {
        (**self).current_query()
    }

    fn push_query(&self, query: &str) {
        (**self).push_query(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_edits_preserve_other_segments_bytes() {
        let raw = "?sort=price%20asc&&tag=a+b&x";
        let opened = QueryString::parse(raw).with_param(QUERY_PARAM, "tee");
        assert_eq!(opened.to_search(), "?sort=price%20asc&&tag=a+b&x&product=tee");
        let closed = opened.without_param(QUERY_PARAM);
        assert_eq!(closed.to_search(), raw);
    }

    #[test]
    fn with_param_replaces_in_place() {
        let query = QueryString::parse("?a=1&product=old&b=2&product=older");
        assert_eq!(
            query.with_param(QUERY_PARAM, "new").to_search(),
            "?a=1&product=new&b=2"
        );
    }

    #[test]
    fn get_decodes_values() {
        let query = QueryString::parse("q=red+shoes&product=tee%2Dshirt");
        assert_eq!(query.get("q").as_deref(), Some("red shoes"));
        assert_eq!(query.get(QUERY_PARAM).as_deref(), Some("tee-shirt"));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn state_derives_from_query_only() {
        assert_eq!(OverlayState::from_query(""), OverlayState::Closed);
        assert_eq!(OverlayState::from_query("?product="), OverlayState::Closed);
        assert_eq!(
            OverlayState::from_query("?a=1&product=tee"),
            OverlayState::Open("tee".into())
        );
        assert_eq!(
            OverlayState::from_query("?product=..%2Fadmin"),
            OverlayState::Closed
        );
    }

    #[test]
    fn open_is_idempotent() {
        let history = MemoryHistory::new("?page=2");
        let nav = NavigationSynchronizer::new(&history);
        assert_eq!(nav.open("tee"), OverlayTransition::Opened("tee".into()));
        let len = history.len();
        assert_eq!(nav.open("tee"), OverlayTransition::Unchanged);
        assert_eq!(history.len(), len);
        assert_eq!(nav.state(), OverlayState::Open("tee".into()));
    }

    #[test]
    fn open_close_round_trip_restores_query() {
        let history = MemoryHistory::new("?page=2&sort=new");
        let nav = NavigationSynchronizer::new(&history);
        nav.open("tee");
        assert_eq!(history.current_query(), "?page=2&sort=new&product=tee");
        assert_eq!(nav.close(), OverlayTransition::Closed);
        assert_eq!(history.current_query(), "?page=2&sort=new");
        assert_eq!(nav.close(), OverlayTransition::Unchanged);
    }

    #[test]
    fn switching_items_while_open() {
        let history = MemoryHistory::new("");
        let nav = NavigationSynchronizer::new(&history);
        nav.open("tee");
        assert_eq!(
            nav.open("hat"),
            OverlayTransition::Switched {
                from: "tee".into(),
                to: "hat".into()
            }
        );
        assert_eq!(history.current_query(), "?product=hat");
    }

    #[test]
    fn back_and_forward_move_between_states() {
        let history = MemoryHistory::new("?page=1");
        let nav = NavigationSynchronizer::new(&history);
        nav.open("tee");
        nav.open("hat");
        assert!(history.back());
        assert_eq!(nav.state(), OverlayState::Open("tee".into()));
        assert!(history.back());
        assert_eq!(nav.state(), OverlayState::Closed);
        assert!(history.forward());
        assert_eq!(nav.state(), OverlayState::Open("tee".into()));
        history.visit("?product=cap");
        assert_eq!(nav.state(), OverlayState::Open("cap".into()));
        assert!(!history.forward());
    }

    #[test]
    fn malformed_handles_are_refused() {
        let history = MemoryHistory::new("");
        let nav = NavigationSynchronizer::new(&history);
        assert_eq!(nav.open("../etc"), OverlayTransition::Unchanged);
        assert_eq!(history.len(), 1);
        assert!(!is_valid_handle(""));
        assert!(is_valid_handle("usb-c_cable-2"));
    }

    #[test]
    fn transitions_name_fetch_targets() {
        let closed = OverlayState::Closed;
        let tee = OverlayState::Open("tee".into());
        let hat = OverlayState::Open("hat".into());
        assert_eq!(closed.transition_to(&tee).fetch_target(), Some("tee"));
        assert_eq!(tee.transition_to(&hat).fetch_target(), Some("hat"));
        assert_eq!(tee.transition_to(&tee), OverlayTransition::Unchanged);
        assert_eq!(hat.transition_to(&closed), OverlayTransition::Closed);
        assert_eq!(closed.transition_to(&closed).fetch_target(), None);
    }
}
