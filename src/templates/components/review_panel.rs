use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::session::ReviewPanel;

/// Review container for one place: "{n} Reviews" header, toggle
/// control, and the (possibly hidden) review list. The list markup is
/// kept in the page when collapsed; only its visibility flips.
pub fn review_panel(place_id: &str, panel: &ReviewPanel) -> Markup {
    html! {
        div class="reviews" data-place=(place_id) {
            h2 {
                (panel.review_count()) " Reviews "
                form
                    method="post"
                    action="/reviews"
                    hx-post="/reviews"
                    hx-target="closest div.reviews"
                    hx-swap="outerHTML"
                    class="toggle_review"
                {
                    input type="hidden" name="place" value=(place_id);
                    button type="submit" {
                        @if panel.expanded { "hide" } @else { "show" }
                    }
                }
            }
            (review_list(panel))
        }
    }
}

fn review_list(panel: &ReviewPanel) -> Markup {
    let style = if panel.expanded {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        ul style=(style) {
            @if let Some(items) = &panel.items {
                @for item in items {
                    li {
                        h3 { "From " (item.author) " the " (format_created_at(&item.created_at)) }
                        p { (item.text) }
                    }
                }
            }
        }
    }
}

/// API timestamps look like `2017-03-25T02:17:06.000000`; anything that
/// does not parse is shown as-is.
fn format_created_at(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%d %B %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
