pub mod components;
pub mod layouts;
pub mod pages;

pub use components::{filter_bar, place_card, places_section, review_panel, status_badge};
pub use layouts::desktop::desktop_layout;
pub use pages::{places_page, FilterCatalog, PlacesPageVm};
