use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    pub status: String,
}

impl ApiStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// A rentable listing as returned by the search endpoint. Read-only:
/// rendered, never mutated, discarded on the next search.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub price_by_night: i64,
    pub max_guest: i64,
    pub number_rooms: i64,
    pub number_bathrooms: i64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub place_id: String,
    pub created_at: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub state_id: String,
}

/// Body of the `places_search` POST. Empty selections serialize as
/// three empty arrays, which the API treats as "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchFilters {
    pub amenities: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}
