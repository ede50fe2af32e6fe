mod reviews;
mod search;
mod status;

pub use reviews::ReviewExpander;
pub use search::SearchController;
pub use status::probe_status;
