use maud::{html, Markup};

/// The decorative API liveness indicator. Available gets the extra
/// class; anything else renders the bare badge.
pub fn status_badge(available: bool) -> Markup {
    html! {
        @if available {
            div id="api_status" class="available" {}
        } @else {
            div id="api_status" {}
        }
    }
}
