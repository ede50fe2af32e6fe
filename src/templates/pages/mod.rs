pub mod places;

pub use places::{places_page, FilterCatalog, PlacesPageVm};
