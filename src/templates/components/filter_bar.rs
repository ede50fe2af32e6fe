use maud::{html, Markup};

use crate::config::PageOptions;
use crate::filters::{Category, FilterStateStore};
use crate::templates::pages::FilterCatalog;

/// The filter sidebar: location checkboxes (states with their cities
/// nested), amenity checkboxes, and the aggregation labels the change
/// handler keeps in sync. Each checkbox carries `data-name`/`data-id`
/// and posts its toggle over htmx, swapping only the group's label
/// (plus the places section out of band when toggles trigger searches).
pub fn filter_bar(
    catalog: &FilterCatalog,
    filters: &FilterStateStore,
    page: PageOptions,
) -> Markup {
    html! {
        section class="filters" {
            div class="locations" {
                h3 { "States" }
                (aggregation_label(filters, Category::State))
                ul {
                    @for state in &catalog.states {
                        li {
                            (filter_checkbox(Category::State, &state.name, &state.id, filters))
                            ul {
                                @for city in catalog.cities.iter().filter(|c| c.state_id == state.id) {
                                    li {
                                        (filter_checkbox(Category::City, &city.name, &city.id, filters))
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div class="amenities" {
                h3 { "Amenities" }
                (aggregation_label(filters, Category::Amenity))
                ul {
                    @for amenity in &catalog.amenities {
                        li {
                            (filter_checkbox(Category::Amenity, &amenity.name, &amenity.id, filters))
                        }
                    }
                }
            }
            @if page.search_button {
                form
                    method="post"
                    action="/search"
                    hx-post="/search"
                    hx-target="#places"
                    hx-swap="outerHTML"
                {
                    button type="submit" { "Search" }
                }
            }
        }
    }
}

/// The `<h4>` summary a change handler keeps in sync: amenity labels
/// stand alone, city and state labels share the locations display. The
/// id is the swap target for toggle responses.
pub fn aggregation_label(filters: &FilterStateStore, category: Category) -> Markup {
    let (id, text) = match category {
        Category::Amenity => ("amenities_label", filters.amenities_label()),
        Category::City | Category::State => ("locations_label", filters.locations_label()),
    };
    html! { h4 id=(id) { (text) } }
}

fn filter_checkbox(
    category: Category,
    label: &str,
    id: &str,
    filters: &FilterStateStore,
) -> Markup {
    let checked = filters.is_selected(category, label);
    let label_target = match category {
        Category::Amenity => "#amenities_label",
        Category::City | Category::State => "#locations_label",
    };

    html! {
        form
            method="post"
            action="/filters"
            hx-post="/filters"
            hx-target=(label_target)
            hx-swap="outerHTML"
            hx-trigger="change"
        {
            input type="hidden" name="category" value=(category.group_id());
            input type="hidden" name="label" value=(label);
            input type="hidden" name="id" value=(id);
            // Submitted as checked=true only while the box is ticked.
            input type="checkbox"
                name="checked"
                value="true"
                id=(category.group_id())
                data-name=(label)
                data-id=(id)
                checked[checked];
            label { (label) }
        }
    }
}
