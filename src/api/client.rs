// client.rs
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::api::models::{Amenity, ApiStatus, City, Place, Review, SearchFilters, State, User};
use crate::api::{ApiError, PlacesApi};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the places REST API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` must not carry a trailing slash (Config normalizes it).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        if base_url.is_empty() {
            return Err(ApiError::Config("API base URL is empty".into()));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        resp.json().map_err(|e| ApiError::JsonParse(e.to_string()))
    }
}

impl PlacesApi for ApiClient {
    fn status(&self) -> Result<ApiStatus, ApiError> {
        self.get_json("/api/v1/status/")
    }

    fn search_places(&self, filters: &SearchFilters) -> Result<Vec<Place>, ApiError> {
        let resp = self
            .client
            .post(format!("{}/api/v1/places_search", self.base_url))
            .json(filters)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        resp.json().map_err(|e| ApiError::JsonParse(e.to_string()))
    }

    fn place_reviews(&self, place_id: &str) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("/api/v1/places/{place_id}/reviews"))
    }

    fn user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get_json(&format!("/api/v1/users/{user_id}"))
    }

    fn amenities(&self) -> Result<Vec<Amenity>, ApiError> {
        self.get_json("/api/v1/amenities")
    }

    fn states(&self) -> Result<Vec<State>, ApiError> {
        self.get_json("/api/v1/states")
    }

    fn state_cities(&self, state_id: &str) -> Result<Vec<City>, ApiError> {
        self.get_json(&format!("/api/v1/states/{state_id}/cities"))
    }
}
