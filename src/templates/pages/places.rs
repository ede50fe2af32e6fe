// templates/pages/places.rs

use maud::{html, Markup};

use crate::api::models::{Amenity, City, State};
use crate::config::PageOptions;
use crate::filters::{Category, FilterStateStore};
use crate::session::SearchResults;
use crate::templates::{components, desktop_layout};

/// Checkbox-group source data fetched from the API's catalog endpoints.
/// Groups whose fetch failed render empty.
#[derive(Debug, Clone, Default)]
pub struct FilterCatalog {
    pub amenities: Vec<Amenity>,
    pub states: Vec<State>,
    pub cities: Vec<City>,
}

pub struct PlacesPageVm<'a> {
    pub api_available: bool,
    pub catalog: &'a FilterCatalog,
    pub filters: &'a FilterStateStore,
    pub results: Option<&'a SearchResults>,
    pub page: PageOptions,
}

/// Response fragment for a checkbox toggle: the refreshed aggregation
/// label for the touched group (the primary swap target), plus an
/// out-of-band places section when filter changes trigger searches
/// directly.
pub fn filter_update_fragment(
    filters: &FilterStateStore,
    category: Category,
    results: Option<&SearchResults>,
    page: PageOptions,
) -> Markup {
    html! {
        (components::filter_bar::aggregation_label(filters, category))
        @if !page.search_button {
            (components::places_section_swap(results, page.review_expansion))
        }
    }
}

pub fn places_page(vm: &PlacesPageVm) -> Markup {
    desktop_layout(
        "Places",
        components::status_badge(vm.api_available),
        html! {
            (components::filter_bar(vm.catalog, vm.filters, vm.page))
            (components::places_section(vm.results, vm.page.review_expansion))
        },
    )
}
