use maud::{html, Markup};

use crate::api::models::Place;
use crate::session::{ReviewPanel, SearchResults};
use crate::templates::components::{count_noun, review_panel};

/// One listing article. When review expansion is on, the card carries a
/// reviews container keyed by `data-place`; until the summary fetch for
/// that place has succeeded its header stays empty.
pub fn place_card(place: &Place, with_reviews: bool, panel: Option<&ReviewPanel>) -> Markup {
    html! {
        article {
            div class="title_box" {
                h2 { (place.name) }
                div class="price_by_night" { "$" (place.price_by_night) }
            }
            div class="information" {
                div class="max_guest" { (count_noun(place.max_guest, "Guest")) }
                div class="number_rooms" { (count_noun(place.number_rooms, "Bedroom")) }
                div class="number_bathrooms" { (count_noun(place.number_bathrooms, "Bathroom")) }
            }
            div class="description" { (place.description) }
            @if with_reviews {
                @if let Some(panel) = panel {
                    (review_panel(&place.id, panel))
                } @else {
                    div class="reviews" data-place=(place.id) {
                        h2 {}
                        ul {}
                    }
                }
            }
        }
    }
}

/// The shared render target. Every call replaces the previous contents
/// wholesale; place order follows the input sequence untouched. The id
/// is the swap target for search responses.
pub fn places_section(results: Option<&SearchResults>, with_reviews: bool) -> Markup {
    html! {
        section id="places" class="places" {
            (place_list(results, with_reviews))
        }
    }
}

/// Out-of-band variant for responses whose primary swap target is
/// elsewhere (a filter toggle that also refreshes the listing).
pub fn places_section_swap(results: Option<&SearchResults>, with_reviews: bool) -> Markup {
    html! {
        section id="places" class="places" hx-swap-oob="true" {
            (place_list(results, with_reviews))
        }
    }
}

fn place_list(results: Option<&SearchResults>, with_reviews: bool) -> Markup {
    html! {
        @if let Some(results) = results {
            @for place in &results.places {
                (place_card(place, with_reviews, results.panels.get(&place.id)))
            }
        }
    }
}
