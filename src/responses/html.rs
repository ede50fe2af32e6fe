// responses/html.rs
use astra::{Body, ResponseBuilder};
use maud::Markup;

use crate::errors::ServerError;
use crate::responses::ResultResp;

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Same as `html_response`, but also installs the session cookie for a
/// freshly minted session.
pub fn html_response_with_session(markup: Markup, session_token: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header(
            "Set-Cookie",
            format!("session={session_token}; Path=/; HttpOnly"),
        )
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
