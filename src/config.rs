// config.rs
use std::env;
use std::net::SocketAddr;

use url::Url;

/// Which interactive pieces the rendered page carries. The upstream UI
/// shipped as several incremental variants (with/without an explicit
/// search button, with/without review panels); one configuration
/// replaces those parallel copies.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    /// When false, toggling a filter checkbox re-runs the search
    /// immediately instead of waiting for the search button.
    pub search_button: bool,
    pub review_expansion: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Base URL of the places REST API, no trailing slash.
    pub api_base_url: String,
    pub page: PageOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env::var("PLACEFRONT_BIND")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|e| format!("PLACEFRONT_BIND is not a socket address: {e}"))?;

        let raw_url =
            env::var("PLACEFRONT_API_URL").unwrap_or_else(|_| "http://0.0.0.0:5001".to_string());
        let api_base_url = Url::parse(&raw_url)
            .map_err(|e| format!("PLACEFRONT_API_URL is not a valid URL ({raw_url}): {e}"))?
            .as_str()
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            bind_addr,
            api_base_url,
            page: PageOptions {
                search_button: env_flag("PLACEFRONT_SEARCH_BUTTON", true),
                review_expansion: env_flag("PLACEFRONT_REVIEWS", true),
            },
        })
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => matches!(v.as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}
