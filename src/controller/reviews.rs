// controller/reviews.rs
use log::warn;
use maud::Markup;

use crate::api::models::Review;
use crate::api::PlacesApi;
use crate::errors::ServerError;
use crate::session::{ReviewItem, ReviewPanel, SessionStore};
use crate::templates::review_panel;

/// Lazily fetches and shows reviews for a single place.
///
/// Panel lifecycle: collapsed (initial) -> toggle -> expanded (author
/// lookups issued, items cached) -> toggle -> collapsed (markup kept,
/// hidden). Once the cache is filled, re-toggling never re-fetches.
/// Two first expansions racing may each run the lookups, but only one
/// fills the cache, so the rendered list never carries duplicates.
pub struct ReviewExpander<'a> {
    api: &'a dyn PlacesApi,
}

enum ToggleStep {
    /// First expansion, author lookups still needed.
    Expand(Vec<Review>),
    /// Visibility flip only.
    Done,
}

impl<'a> ReviewExpander<'a> {
    pub fn new(api: &'a dyn PlacesApi) -> Self {
        Self { api }
    }

    /// Retrieves the review list for the count header. A failed fetch
    /// leaves the place without a panel; its header simply stays empty.
    pub fn fetch_review_summary(&self, place_id: &str) -> Option<ReviewPanel> {
        match self.api.place_reviews(place_id) {
            Ok(reviews) => Some(ReviewPanel::new(reviews)),
            Err(e) => {
                warn!("review summary for place {place_id} failed: {e}");
                None
            }
        }
    }

    /// Flips the panel for `place_id` and returns its re-rendered
    /// markup. Author lookups happen outside the session lock.
    pub fn toggle(
        &self,
        sessions: &SessionStore,
        token: &str,
        place_id: &str,
    ) -> Result<Markup, ServerError> {
        let step = sessions.with(token, |sess| {
            let results = sess
                .results
                .as_mut()
                .ok_or(ServerError::NotFound)?;
            let panel = results
                .panels
                .get_mut(place_id)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown place {place_id}")))?;

            if panel.expanded {
                panel.expanded = false;
                Ok(ToggleStep::Done)
            } else if panel.items.is_some() {
                panel.expanded = true;
                Ok(ToggleStep::Done)
            } else {
                Ok(ToggleStep::Expand(panel.reviews.clone()))
            }
        })?;

        if let ToggleStep::Expand(reviews) = step {
            let items = self.join_authors(&reviews);
            sessions.with(token, |sess| {
                if let Some(panel) = sess
                    .results
                    .as_mut()
                    .and_then(|r| r.panels.get_mut(place_id))
                {
                    // A racing toggle may have filled the cache first.
                    if panel.items.is_none() {
                        panel.items = Some(items);
                    }
                    panel.expanded = true;
                }
            });
        }

        sessions
            .with(token, |sess| {
                sess.results
                    .as_ref()
                    .and_then(|r| r.panels.get(place_id))
                    .map(|panel| review_panel(place_id, panel))
            })
            .ok_or(ServerError::NotFound)
    }

    /// Joins each review with its author's display name, one lookup per
    /// review. A failed lookup drops that item and logs; no retry.
    fn join_authors(&self, reviews: &[Review]) -> Vec<ReviewItem> {
        reviews
            .iter()
            .filter_map(|review| match self.api.user(&review.user_id) {
                Ok(user) => Some(ReviewItem {
                    author: user.display_name(),
                    created_at: review.created_at.clone(),
                    text: review.text.clone(),
                }),
                Err(e) => {
                    warn!("author lookup for review {} failed: {e}", review.id);
                    None
                }
            })
            .collect()
    }
}
