//! Browser implementation of [`ApiTokensApi`] on top of gloo-net.

use std::fmt;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use shared::{
    ApiError, ApiTokenPageData, ApiTokensApi, CreateApiTokenRequest,
    CreateApiTokenResponse, NamedRoute, UpdateApiTokenRequest, UrlBuilder,
};

/// Shared handle to the injected URL builder.
///
/// Compared by pointer so it can live in Yew props.
#[derive(Clone)]
pub struct Routes(Rc<dyn UrlBuilder>);

impl Routes {
    pub fn new(builder: impl UrlBuilder + 'static) -> Self {
        Self(Rc::new(builder))
    }

    pub fn url(&self, route: NamedRoute) -> String {
        self.0.url_for(route)
    }
}

impl PartialEq for Routes {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Routes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Routes(..)")
    }
}

/// Same-origin client; the session cookie authenticates requests
#[derive(Clone, Debug)]
pub struct BrowserApiClient {
    routes: Routes,
}

impl BrowserApiClient {
    pub fn new(routes: Routes) -> Self {
        Self { routes }
    }

    fn request(&self, route: NamedRoute) -> RequestBuilder {
        let url = self.routes.url(route);
        let builder = match route.method() {
            shared::Method::Get => Request::get(&url),
            shared::Method::Post => Request::post(&url),
            shared::Method::Put => Request::put(&url),
            shared::Method::Delete => Request::delete(&url),
        };
        builder.header("Accept", "application/json")
    }

    async fn send(&self, request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }
}

impl ApiTokensApi for BrowserApiClient {
    async fn list_api_tokens(&self) -> Result<ApiTokenPageData, ApiError> {
        let response = self
            .send(self.request(NamedRoute::ApiTokensIndex).build())
            .await?;
        response
            .json::<ApiTokenPageData>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_api_token(
        &self,
        req: &CreateApiTokenRequest,
    ) -> Result<CreateApiTokenResponse, ApiError> {
        let response = self
            .send(self.request(NamedRoute::ApiTokensStore).json(req))
            .await?;
        response
            .json::<CreateApiTokenResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn update_api_token(
        &self,
        id: u64,
        req: &UpdateApiTokenRequest,
    ) -> Result<(), ApiError> {
        self.send(self.request(NamedRoute::ApiTokensUpdate { id }).json(req))
            .await?;
        Ok(())
    }

    async fn delete_api_token(&self, id: u64) -> Result<(), ApiError> {
        self.send(self.request(NamedRoute::ApiTokensDestroy { id }).build())
            .await?;
        Ok(())
    }
}
