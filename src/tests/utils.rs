// src/tests/utils.rs
use std::collections::HashMap;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use crate::api::models::{
    Amenity, ApiStatus, City, Place, Review, SearchFilters, State, User,
};
use crate::api::{ApiError, PlacesApi};
use crate::config::{Config, PageOptions};
use crate::router::AppContext;
use crate::session::SessionStore;

/// In-memory places API double. Records the bodies of every search and
/// every review/user fetch so tests can assert on what was issued.
#[derive(Default)]
pub struct FakeApi {
    pub status: Option<String>,
    pub places: Vec<Place>,
    pub reviews: HashMap<String, Vec<Review>>,
    pub users: HashMap<String, User>,
    pub amenities: Vec<Amenity>,
    pub states: Vec<State>,
    pub cities: Vec<City>,
    pub fail_reviews: bool,

    pub search_bodies: Mutex<Vec<SearchFilters>>,
    pub review_fetches: Mutex<Vec<String>>,
    pub user_fetches: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn healthy() -> Self {
        FakeApi {
            status: Some("OK".to_string()),
            ..FakeApi::default()
        }
    }
}

impl PlacesApi for FakeApi {
    fn status(&self) -> Result<ApiStatus, ApiError> {
        match &self.status {
            Some(status) => Ok(ApiStatus {
                status: status.clone(),
            }),
            None => Err(ApiError::Network("connection refused".into())),
        }
    }

    fn search_places(&self, filters: &SearchFilters) -> Result<Vec<Place>, ApiError> {
        self.search_bodies.lock().unwrap().push(filters.clone());
        Ok(self.places.clone())
    }

    fn place_reviews(&self, place_id: &str) -> Result<Vec<Review>, ApiError> {
        self.review_fetches.lock().unwrap().push(place_id.to_string());
        if self.fail_reviews {
            return Err(ApiError::Http(500));
        }
        Ok(self.reviews.get(place_id).cloned().unwrap_or_default())
    }

    fn user(&self, user_id: &str) -> Result<User, ApiError> {
        self.user_fetches.lock().unwrap().push(user_id.to_string());
        self.users.get(user_id).cloned().ok_or(ApiError::Http(404))
    }

    fn amenities(&self) -> Result<Vec<Amenity>, ApiError> {
        Ok(self.amenities.clone())
    }

    fn states(&self) -> Result<Vec<State>, ApiError> {
        Ok(self.states.clone())
    }

    fn state_cities(&self, state_id: &str) -> Result<Vec<City>, ApiError> {
        Ok(self
            .cities
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect())
    }
}

pub fn place(id: &str, name: &str, guests: i64, rooms: i64, baths: i64) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        price_by_night: 100,
        max_guest: guests,
        number_rooms: rooms,
        number_bathrooms: baths,
        description: format!("{name} description"),
    }
}

pub fn review(id: &str, user_id: &str, place_id: &str, text: &str) -> Review {
    Review {
        id: id.to_string(),
        user_id: user_id.to_string(),
        place_id: place_id.to_string(),
        created_at: "2017-03-25T02:17:06.000000".to_string(),
        text: text.to_string(),
    }
}

pub fn user(first: &str, last: &str) -> User {
    User {
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}

pub fn page_options() -> PageOptions {
    PageOptions {
        search_button: true,
        review_expansion: true,
    }
}

pub fn make_ctx(api: Arc<FakeApi>, page: PageOptions) -> AppContext {
    let bind_addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    AppContext {
        api,
        sessions: SessionStore::new(),
        config: Config {
            bind_addr,
            api_base_url: "http://0.0.0.0:5001".to_string(),
            page,
        },
    }
}

pub fn request(method: &str, path: &str, body: &str) -> astra::Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(astra::Body::from(body.to_string()))
        .unwrap()
}

pub fn request_with_cookie(method: &str, path: &str, body: &str, cookie: &str) -> astra::Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .header("Cookie", cookie)
        .body(astra::Body::from(body.to_string()))
        .unwrap()
}

pub fn read_body(resp: &mut astra::Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Pulls the `session=...` pair out of a Set-Cookie header.
pub fn session_cookie(resp: &astra::Response) -> Option<String> {
    resp.headers()
        .get("Set-Cookie")?
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
