// src/session.rs
//
// Cookie-keyed, in-memory UI sessions. Each browser page session owns a
// filter store, the last applied search result, and per-place review
// panel state. Nothing here is persisted; state lives exactly as long
// as the process, matching the page-session lifecycle of the filter
// objects it replaces.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::api::models::{Place, Review};
use crate::filters::FilterStateStore;

/// A review joined with its author's display name, ready to render.
#[derive(Debug, Clone)]
pub struct ReviewItem {
    pub author: String,
    pub created_at: String,
    pub text: String,
}

/// Collapsed/expanded review panel for one rendered place.
///
/// The panel starts collapsed with only the fetched review list (for
/// the count header). The first expansion performs the per-review
/// author lookups and caches the joined items, so re-toggling flips
/// visibility without re-fetching or appending duplicates.
#[derive(Debug, Clone, Default)]
pub struct ReviewPanel {
    pub reviews: Vec<Review>,
    pub expanded: bool,
    pub items: Option<Vec<ReviewItem>>,
}

impl ReviewPanel {
    pub fn new(reviews: Vec<Review>) -> Self {
        ReviewPanel {
            reviews,
            expanded: false,
            items: None,
        }
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

/// The outcome of one search: places in response order, plus a review
/// panel per place that had a successful summary fetch.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub places: Vec<Place>,
    pub panels: HashMap<String, ReviewPanel>,
}

/// Sessions idle longer than this are dropped on the next sweep; a
/// cookie carrying an evicted token gets a fresh session transparently.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Debug, Default)]
pub struct UiSession {
    pub filters: FilterStateStore,
    search_epoch: u64,
    pub results: Option<SearchResults>,
    pub last_seen: i64,
}

impl UiSession {
    /// Marks the start of a new search and returns its epoch. Results
    /// of any search started earlier are stale from this point on.
    pub fn begin_search(&mut self) -> u64 {
        self.search_epoch += 1;
        self.search_epoch
    }

    /// Applies the results of the search started at `epoch`. Returns
    /// false and discards them when a newer search has begun since, so
    /// an out-of-order response can never overwrite a newer one.
    pub fn apply_results(&mut self, epoch: u64, results: SearchResults) -> bool {
        if epoch != self.search_epoch {
            return false;
        }
        self.results = Some(results);
        true
    }
}

pub struct SessionStore {
    inner: Mutex<HashMap<[u8; 32], UiSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the raw token to use for this request, minting a fresh
    /// session when the cookie is absent, unknown, or expired. The bool
    /// is true when a Set-Cookie is needed. Expired sessions are swept
    /// here so the registry cannot grow without bound.
    pub fn resolve(&self, raw_token: Option<&str>) -> (String, bool) {
        let now = now_unix();
        let mut sessions = self.inner.lock().unwrap();
        sessions.retain(|_, sess| now < sess.last_seen + SESSION_TTL_SECS);

        if let Some(token) = raw_token {
            if let Some(sess) = sessions.get_mut(&token_key(token)) {
                sess.last_seen = now;
                return (token.to_string(), false);
            }
        }

        let mut raw = [0u8; 32];
        OsRng.fill_bytes(&mut raw);
        let token = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw);

        sessions.insert(
            token_key(&token),
            UiSession {
                last_seen: now,
                ..UiSession::default()
            },
        );
        (token, true)
    }

    /// Runs `f` with the session for `raw_token` held under the store
    /// lock, refreshing its idle clock. Callers must not perform API
    /// calls inside `f`.
    pub fn with<R>(&self, raw_token: &str, f: impl FnOnce(&mut UiSession) -> R) -> R {
        let mut sessions = self.inner.lock().unwrap();
        let session = sessions.entry(token_key(raw_token)).or_default();
        session.last_seen = now_unix();
        f(session)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the session token from a Cookie header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|part| {
        let mut kv = part.trim().splitn(2, '=');
        match (kv.next(), kv.next()) {
            (Some("session"), Some(v)) if !v.is_empty() => Some(v),
            _ => None,
        }
    })
}

fn token_key(raw_token: &str) -> [u8; 32] {
    Sha256::digest(raw_token.as_bytes()).into()
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
