// API token types in separate module
pub mod api_tokens;
pub use api_tokens::*;

// Named routes and URL building
pub mod routes;
pub use routes::{Method, NamedRoute, UrlBuilder};

// API client types and trait
pub mod api;
pub use api::{ApiClientConfig, ApiError, ApiTokensApi, ValidationErrors};
