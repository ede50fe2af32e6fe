// filters.rs
//
// Selected-filter bookkeeping for the three checkbox groups. The
// upstream page kept these as three plain objects mutated from a change
// handler; here they are an explicit store owned by the session so the
// controller can be handed one directly.

use std::fmt;

/// One checkbox group. Parsed from the group id the markup carries,
/// which is also how the change handler upstream told them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Amenity,
    City,
    State,
}

impl Category {
    pub fn from_group_id(id: &str) -> Option<Self> {
        match id {
            "amenity_filter" => Some(Category::Amenity),
            "city_filter" => Some(Category::City),
            "state_filter" => Some(Category::State),
            _ => None,
        }
    }

    pub fn group_id(self) -> &'static str {
        match self {
            Category::Amenity => "amenity_filter",
            Category::City => "city_filter",
            Category::State => "state_filter",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub label: String,
    pub id: String,
}

/// Per-category selection, label-keyed. Within a category labels are
/// unique: selecting the same label twice overwrites in place (keeping
/// the original position), deselecting removes the entry entirely.
#[derive(Debug, Default, Clone)]
pub struct FilterStateStore {
    amenities: Vec<FilterEntry>,
    cities: Vec<FilterEntry>,
    states: Vec<FilterEntry>,
}

impl FilterStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self, category: Category) -> &Vec<FilterEntry> {
        match category {
            Category::Amenity => &self.amenities,
            Category::City => &self.cities,
            Category::State => &self.states,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<FilterEntry> {
        match category {
            Category::Amenity => &mut self.amenities,
            Category::City => &mut self.cities,
            Category::State => &mut self.states,
        }
    }

    pub fn set(&mut self, category: Category, label: &str, id: &str) {
        let entries = self.entries_mut(category);
        match entries.iter_mut().find(|e| e.label == label) {
            Some(existing) => existing.id = id.to_string(),
            None => entries.push(FilterEntry {
                label: label.to_string(),
                id: id.to_string(),
            }),
        }
    }

    /// Silent if the label was never selected.
    pub fn unset(&mut self, category: Category, label: &str) {
        self.entries_mut(category).retain(|e| e.label != label);
    }

    pub fn is_selected(&self, category: Category, label: &str) -> bool {
        self.entries(category).iter().any(|e| e.label == label)
    }

    /// Currently selected labels, sorted for display.
    pub fn selected_labels(&self, category: Category) -> Vec<String> {
        let mut labels: Vec<String> = self
            .entries(category)
            .iter()
            .map(|e| e.label.clone())
            .collect();
        labels.sort();
        labels
    }

    /// Ids in insertion order. Query semantics do not depend on order.
    pub fn selected_ids(&self, category: Category) -> Vec<String> {
        self.entries(category).iter().map(|e| e.id.clone()).collect()
    }

    pub fn amenities_label(&self) -> String {
        self.selected_labels(Category::Amenity).join(", ")
    }

    /// City and state selections share one "locations" display: the
    /// sorted union of both label sets, deduplicated even when a city
    /// and a state carry the same label string.
    pub fn locations_label(&self) -> String {
        let mut labels: Vec<String> = self
            .cities
            .iter()
            .chain(self.states.iter())
            .map(|e| e.label.clone())
            .collect();
        labels.sort();
        labels.dedup();
        labels.join(", ")
    }
}
