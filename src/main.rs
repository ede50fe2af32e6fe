use std::sync::Arc;

use astra::Server;
use log::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::router::{handle, AppContext};
use crate::session::SessionStore;

mod api;
mod config;
mod controller;
mod errors;
mod filters;
mod responses;
mod router;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let api = match ApiClient::new(&config.api_base_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("API client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    info!(
        "starting placefront at http://{addr}, places API at {}",
        config.api_base_url
    );

    let ctx = AppContext {
        api: Arc::new(api),
        sessions: SessionStore::new(),
        config,
    };

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => crate::responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }
}
