mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::ApiClient;

use models::{Amenity, ApiStatus, City, Place, Review, SearchFilters, State, User};

/// The places REST API surface the front end consumes. Controllers take
/// this trait rather than the concrete client so tests can substitute an
/// in-memory double.
pub trait PlacesApi: Send + Sync {
    fn status(&self) -> Result<ApiStatus, ApiError>;
    fn search_places(&self, filters: &SearchFilters) -> Result<Vec<Place>, ApiError>;
    fn place_reviews(&self, place_id: &str) -> Result<Vec<Review>, ApiError>;
    fn user(&self, user_id: &str) -> Result<User, ApiError>;

    // Catalog endpoints, used to render the checkbox groups.
    fn amenities(&self) -> Result<Vec<Amenity>, ApiError>;
    fn states(&self) -> Result<Vec<State>, ApiError>;
    fn state_cities(&self, state_id: &str) -> Result<Vec<City>, ApiError>;
}
