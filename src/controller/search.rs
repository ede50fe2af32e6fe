// controller/search.rs
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::api::models::SearchFilters;
use crate::api::PlacesApi;
use crate::config::PageOptions;
use crate::controller::ReviewExpander;
use crate::filters::Category;
use crate::session::{SearchResults, SessionStore};
use crate::templates::FilterCatalog;

/// Orchestrates one search: filter store -> places query -> stored
/// results -> review summaries. Runs unconditionally on page load with
/// whatever is selected (nothing selected means an unfiltered result
/// set) and again on every explicit trigger.
pub struct SearchController<'a> {
    api: &'a dyn PlacesApi,
    sessions: &'a SessionStore,
    page: PageOptions,
}

impl<'a> SearchController<'a> {
    pub fn new(api: &'a dyn PlacesApi, sessions: &'a SessionStore, page: PageOptions) -> Self {
        Self {
            api,
            sessions,
            page,
        }
    }

    /// Issues the query for the session's current selections and, when
    /// it is still the newest search by the time the response arrives,
    /// replaces the session's results with it. On a failed query the
    /// previous results are left untouched.
    pub fn run_search(&self, token: &str) {
        let (epoch, filters) = self.sessions.with(token, |sess| {
            let epoch = sess.begin_search();
            let filters = SearchFilters {
                amenities: sess.filters.selected_ids(Category::Amenity),
                states: sess.filters.selected_ids(Category::State),
                cities: sess.filters.selected_ids(Category::City),
            };
            (epoch, filters)
        });

        let places = match self.api.search_places(&filters) {
            Ok(places) => places,
            Err(e) => {
                warn!("place search failed: {e}");
                return;
            }
        };

        info!("search returned {} places", places.len());
        for place in &places {
            debug!("place {}", place.id);
        }

        let mut panels = HashMap::new();
        if self.page.review_expansion {
            let expander = ReviewExpander::new(self.api);
            for place in &places {
                if let Some(panel) = expander.fetch_review_summary(&place.id) {
                    panels.insert(place.id.clone(), panel);
                }
            }
        }

        let applied = self
            .sessions
            .with(token, |sess| sess.apply_results(epoch, SearchResults { places, panels }));
        if !applied {
            debug!("discarding results of superseded search (epoch {epoch})");
        }
    }

    /// Checkbox-group source data. A failed catalog fetch leaves that
    /// group empty rather than failing the page.
    pub fn load_catalog(&self) -> FilterCatalog {
        let mut catalog = FilterCatalog::default();

        match self.api.amenities() {
            Ok(amenities) => catalog.amenities = amenities,
            Err(e) => warn!("amenity catalog fetch failed: {e}"),
        }

        match self.api.states() {
            Ok(states) => catalog.states = states,
            Err(e) => warn!("state catalog fetch failed: {e}"),
        }

        for state in &catalog.states {
            match self.api.state_cities(&state.id) {
                Ok(mut cities) => catalog.cities.append(&mut cities),
                Err(e) => warn!("city catalog fetch for state {} failed: {e}", state.id),
            }
        }

        catalog
    }
}
