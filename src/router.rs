use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use astra::Request;
use log::debug;
use maud::Markup;
use url::form_urlencoded;

use crate::api::PlacesApi;
use crate::config::Config;
use crate::controller::{probe_status, ReviewExpander, SearchController};
use crate::errors::ServerError;
use crate::filters::Category;
use crate::responses::{html_response, html_response_with_session, ResultResp};
use crate::session::{token_from_cookie_header, SessionStore};
use crate::templates::pages::places::filter_update_fragment;
use crate::templates::{places_page, places_section, PlacesPageVm};

pub struct AppContext {
    pub api: Arc<dyn PlacesApi>,
    pub sessions: SessionStore,
    pub config: Config,
}

pub fn handle(mut req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    // Reject unknown routes before touching the session registry.
    let known = matches!(
        (method.as_str(), path.as_str()),
        ("GET", "/") | ("POST", "/filters") | ("POST", "/search") | ("POST", "/reviews")
    );
    if !known {
        return Err(ServerError::NotFound);
    }

    let cookie_token = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header)
        .map(str::to_string);
    let (token, fresh_session) = ctx.sessions.resolve(cookie_token.as_deref());

    let params = parse_params(&mut req);

    let markup = match (method.as_str(), path.as_str()) {
        ("GET", "/") => page(ctx, &token),
        ("POST", "/filters") => toggle_filter(ctx, &token, &params)?,
        ("POST", "/search") => search(ctx, &token),
        ("POST", "/reviews") => toggle_reviews(ctx, &token, &params)?,
        _ => unreachable!("route checked above"),
    };

    if fresh_session {
        html_response_with_session(markup, &token)
    } else {
        html_response(markup)
    }
}

/// Full page render: status probe, catalog fetch, unconditional search
/// with whatever the session has selected.
fn page(ctx: &AppContext, token: &str) -> Markup {
    let controller = SearchController::new(ctx.api.as_ref(), &ctx.sessions, ctx.config.page);

    let api_available = probe_status(ctx.api.as_ref());
    let catalog = controller.load_catalog();
    controller.run_search(token);

    ctx.sessions.with(token, |sess| {
        places_page(&PlacesPageVm {
            api_available,
            catalog: &catalog,
            filters: &sess.filters,
            results: sess.results.as_ref(),
            page: ctx.config.page,
        })
    })
}

fn toggle_filter(
    ctx: &AppContext,
    token: &str,
    params: &HashMap<String, String>,
) -> Result<Markup, ServerError> {
    let category = params
        .get("category")
        .and_then(|s| Category::from_group_id(s))
        .ok_or_else(|| ServerError::BadRequest("missing or unknown filter category".into()))?;
    let label = params
        .get("label")
        .ok_or_else(|| ServerError::BadRequest("missing filter label".into()))?;
    let id = params
        .get("id")
        .ok_or_else(|| ServerError::BadRequest("missing filter id".into()))?;
    let checked = params.get("checked").map(|s| s == "true").unwrap_or(false);

    ctx.sessions.with(token, |sess| {
        if checked {
            sess.filters.set(category, label, id);
        } else {
            sess.filters.unset(category, label);
        }
    });
    debug!("filter {category} {} label={label}", if checked { "set" } else { "unset" });

    // Without an explicit search button a filter change is the trigger.
    if !ctx.config.page.search_button {
        SearchController::new(ctx.api.as_ref(), &ctx.sessions, ctx.config.page).run_search(token);
    }

    Ok(ctx.sessions.with(token, |sess| {
        filter_update_fragment(&sess.filters, category, sess.results.as_ref(), ctx.config.page)
    }))
}

fn search(ctx: &AppContext, token: &str) -> Markup {
    SearchController::new(ctx.api.as_ref(), &ctx.sessions, ctx.config.page).run_search(token);

    ctx.sessions.with(token, |sess| {
        places_section(sess.results.as_ref(), ctx.config.page.review_expansion)
    })
}

fn toggle_reviews(
    ctx: &AppContext,
    token: &str,
    params: &HashMap<String, String>,
) -> Result<Markup, ServerError> {
    if !ctx.config.page.review_expansion {
        return Err(ServerError::NotFound);
    }

    let place_id = params
        .get("place")
        .ok_or_else(|| ServerError::BadRequest("missing place id".into()))?;

    ReviewExpander::new(ctx.api.as_ref()).toggle(&ctx.sessions, token, place_id)
}

/// Collects request parameters from the query string and, for form
/// posts, the urlencoded body.
fn parse_params(req: &mut Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    let mut buf = Vec::new();
    if req.body_mut().reader().read_to_end(&mut buf).is_ok() && !buf.is_empty() {
        for (k, v) in form_urlencoded::parse(&buf) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    map
}
