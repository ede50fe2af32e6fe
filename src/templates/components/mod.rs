pub mod filter_bar;
pub mod place_card;
pub mod review_panel;
pub mod status_badge;

pub use filter_bar::filter_bar;
pub use place_card::{place_card, places_section, places_section_swap};
pub use review_panel::review_panel;
pub use status_badge::status_badge;

/// Counts render with a trailing "s" unless the count is exactly 1.
pub fn count_noun(count: i64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
