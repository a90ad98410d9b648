//! Named routes for the API token endpoints.
//!
//! Callers never format paths themselves: they name a route and ask a
//! [`UrlBuilder`] for the URL. The browser client and the tests inject
//! their own builders.

use crate::ApiClientConfig;

/// HTTP method used by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Every route the token settings page talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedRoute {
    ApiTokensIndex,
    ApiTokensStore,
    ApiTokensUpdate { id: u64 },
    ApiTokensDestroy { id: u64 },
}

impl NamedRoute {
    /// Route name, as used in server-side route tables
    pub fn name(&self) -> &'static str {
        match self {
            NamedRoute::ApiTokensIndex => "api-tokens.index",
            NamedRoute::ApiTokensStore => "api-tokens.store",
            NamedRoute::ApiTokensUpdate { .. } => "api-tokens.update",
            NamedRoute::ApiTokensDestroy { .. } => "api-tokens.destroy",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            NamedRoute::ApiTokensIndex => Method::Get,
            NamedRoute::ApiTokensStore => Method::Post,
            NamedRoute::ApiTokensUpdate { .. } => Method::Put,
            NamedRoute::ApiTokensDestroy { .. } => Method::Delete,
        }
    }

    /// Path relative to the server root
    pub fn path(&self) -> String {
        match self {
            NamedRoute::ApiTokensIndex | NamedRoute::ApiTokensStore => {
                "/user/api-tokens".to_string()
            }
            NamedRoute::ApiTokensUpdate { id } | NamedRoute::ApiTokensDestroy { id } => {
                format!("/user/api-tokens/{}", id)
            }
        }
    }
}

/// Resolves named routes to URLs
pub trait UrlBuilder {
    fn url_for(&self, route: NamedRoute) -> String;
}

impl UrlBuilder for ApiClientConfig {
    fn url_for(&self, route: NamedRoute) -> String {
        self.url(&route.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_keyed_by_id() {
        assert_eq!(NamedRoute::ApiTokensStore.path(), "/user/api-tokens");
        assert_eq!(
            NamedRoute::ApiTokensUpdate { id: 7 }.path(),
            "/user/api-tokens/7"
        );
        assert_eq!(
            NamedRoute::ApiTokensDestroy { id: 12 }.path(),
            "/user/api-tokens/12"
        );
    }

    #[test]
    fn test_methods() {
        assert_eq!(NamedRoute::ApiTokensIndex.method(), Method::Get);
        assert_eq!(NamedRoute::ApiTokensStore.method(), Method::Post);
        assert_eq!(NamedRoute::ApiTokensUpdate { id: 1 }.method(), Method::Put);
        assert_eq!(
            NamedRoute::ApiTokensDestroy { id: 1 }.method().as_str(),
            "DELETE"
        );
    }

    #[test]
    fn test_config_builds_absolute_urls() {
        let config = ApiClientConfig::new("https://app.example.com");
        assert_eq!(
            config.url_for(NamedRoute::ApiTokensUpdate { id: 3 }),
            "https://app.example.com/user/api-tokens/3"
        );
    }
}
