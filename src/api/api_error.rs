use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Config(String),
    Network(String),
    Http(u16),
    JsonParse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "Client configuration error: {msg}"),
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Http(status) => write!(f, "API responded with HTTP {status}"),
            ApiError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for ApiError {}
