use crate::filters::{Category, FilterStateStore};

#[test]
fn selecting_twice_overwrites_without_duplicates() {
    let mut store = FilterStateStore::new();
    store.set(Category::Amenity, "Wifi", "a1");
    store.set(Category::Amenity, "Wifi", "a2");

    assert_eq!(store.selected_labels(Category::Amenity), vec!["Wifi"]);
    assert_eq!(store.selected_ids(Category::Amenity), vec!["a2"]);
}

#[test]
fn labels_come_back_sorted() {
    let mut store = FilterStateStore::new();
    store.set(Category::Amenity, "Pool", "a3");
    store.set(Category::Amenity, "Air conditioning", "a1");
    store.set(Category::Amenity, "Kitchen", "a2");

    assert_eq!(
        store.selected_labels(Category::Amenity),
        vec!["Air conditioning", "Kitchen", "Pool"]
    );
    // Ids keep insertion order.
    assert_eq!(store.selected_ids(Category::Amenity), vec!["a3", "a1", "a2"]);
}

#[test]
fn unset_removes_and_is_silent_when_absent() {
    let mut store = FilterStateStore::new();
    store.set(Category::City, "Denver", "c1");
    store.unset(Category::City, "Denver");
    store.unset(Category::City, "Denver");
    store.unset(Category::City, "never selected");

    assert!(store.selected_labels(Category::City).is_empty());
    assert!(store.selected_ids(Category::City).is_empty());
}

#[test]
fn toggle_sequences_behave_as_a_set() {
    let mut store = FilterStateStore::new();
    for _ in 0..3 {
        store.set(Category::State, "Oregon", "s1");
        store.set(Category::State, "Texas", "s2");
        store.unset(Category::State, "Oregon");
    }
    store.set(Category::State, "Oregon", "s1");

    assert_eq!(
        store.selected_labels(Category::State),
        vec!["Oregon", "Texas"]
    );
}

#[test]
fn categories_are_independent() {
    let mut store = FilterStateStore::new();
    store.set(Category::Amenity, "Wifi", "a1");
    store.set(Category::City, "Wifi", "c1");
    store.unset(Category::Amenity, "Wifi");

    assert!(store.selected_labels(Category::Amenity).is_empty());
    assert_eq!(store.selected_labels(Category::City), vec!["Wifi"]);
}

#[test]
fn locations_label_merges_cities_and_states_sorted() {
    let mut store = FilterStateStore::new();
    store.set(Category::State, "Texas", "s1");
    store.set(Category::City, "Austin", "c1");
    store.set(Category::City, "Boulder", "c2");

    assert_eq!(store.locations_label(), "Austin, Boulder, Texas");
}

#[test]
fn locations_label_dedupes_shared_label_strings() {
    let mut store = FilterStateStore::new();
    // "New York" is both a state and a city.
    store.set(Category::State, "New York", "s1");
    store.set(Category::City, "New York", "c1");

    assert_eq!(store.locations_label(), "New York");
}

#[test]
fn amenities_label_is_independent_of_locations() {
    let mut store = FilterStateStore::new();
    store.set(Category::Amenity, "Wifi", "a1");
    store.set(Category::Amenity, "Pool", "a2");
    store.set(Category::City, "Austin", "c1");

    assert_eq!(store.amenities_label(), "Pool, Wifi");
    assert_eq!(store.locations_label(), "Austin");
}

#[test]
fn category_parses_from_group_id() {
    assert_eq!(Category::from_group_id("amenity_filter"), Some(Category::Amenity));
    assert_eq!(Category::from_group_id("city_filter"), Some(Category::City));
    assert_eq!(Category::from_group_id("state_filter"), Some(Category::State));
    assert_eq!(Category::from_group_id("price_filter"), None);
}
