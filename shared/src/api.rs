//! API client types and trait definitions
//!
//! This module defines the API contract for the token endpoints. The
//! browser implements it with gloo-net; tests implement it in memory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::{
    ApiToken, ApiTokenPageData, CreateApiTokenRequest, CreateApiTokenResponse,
    UpdateApiTokenRequest,
};

/// Field-keyed validation failure returned with a 422
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// One message per field (the first one the server sent)
    pub fn first_messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|m| (field.clone(), m.clone()))
            })
            .collect()
    }
}

/// API error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// The server rejected the submitted fields
    #[error("Validation failed: {}", .0.message.as_deref().unwrap_or("invalid input"))]
    Validation(ValidationErrors),
    /// Authentication required or failed (401)
    #[error("Auth error: {0}")]
    Auth(String),
    /// Authenticated but not allowed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl ApiError {
    /// Map a non-success HTTP status and its body to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<MessageBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().to_string());

        match status {
            401 => ApiError::Auth(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            422 => match serde_json::from_str::<ValidationErrors>(body) {
                Ok(errors) => ApiError::Validation(errors),
                Err(e) => ApiError::Parse(e.to_string()),
            },
            _ => ApiError::Server { status, message },
        }
    }

    /// Field messages to show next to inputs; empty for non-validation errors
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self {
            ApiError::Validation(errors) => errors.first_messages(),
            _ => BTreeMap::new(),
        }
    }

    /// True only when the session is gone; a 403 keeps the user logged in
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

/// Trait defining the API token endpoints
///
/// All methods are async and return Result<T, ApiError>.
#[allow(async_fn_in_trait)]
pub trait ApiTokensApi {
    /// Current tokens plus the permission catalog
    async fn list_api_tokens(&self) -> Result<ApiTokenPageData, ApiError>;

    /// Create a token; the response carries the secret once
    async fn create_api_token(
        &self,
        req: &CreateApiTokenRequest,
    ) -> Result<CreateApiTokenResponse, ApiError>;

    /// Replace a token's permissions
    async fn update_api_token(&self, id: u64, req: &UpdateApiTokenRequest)
        -> Result<(), ApiError>;

    /// Delete a token
    async fn delete_api_token(&self, id: u64) -> Result<(), ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_from_422() {
        let body = r#"{
            "message": "The name field is required.",
            "errors": {
                "name": ["The name field is required.", "The name must be a string."],
                "permissions.0": ["The selected permission is invalid."]
            }
        }"#;
        let err = ApiError::from_status(422, body);
        let fields = err.field_errors();
        assert_eq!(fields.get("name").unwrap(), "The name field is required.");
        assert_eq!(
            fields.get("permissions.0").unwrap(),
            "The selected permission is invalid."
        );
        assert_eq!(
            err.to_string(),
            "Validation failed: The name field is required."
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(ApiError::from_status(401, r#"{"message":"Unauthenticated."}"#).is_unauthorized());
        assert_eq!(
            ApiError::from_status(404, "missing"),
            ApiError::NotFound("missing".to_string())
        );
        assert_eq!(
            ApiError::from_status(500, r#"{"message":"Server Error"}"#),
            ApiError::Server {
                status: 500,
                message: "Server Error".to_string()
            }
        );
        assert!(matches!(
            ApiError::from_status(422, "not json"),
            ApiError::Parse(_)
        ));
    }

    #[test]
    fn test_forbidden_is_not_unauthorized() {
        let err = ApiError::from_status(403, r#"{"message":"This action is unauthorized."}"#);
        assert_eq!(
            err,
            ApiError::Forbidden("This action is unauthorized.".to_string())
        );
        assert!(!err.is_unauthorized());
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_transport_errors_have_no_field_errors() {
        let err = ApiError::Network("connection reset".to_string());
        assert!(err.field_errors().is_empty());
        assert_eq!(err.to_string(), "Network error: connection reset");
    }

    #[test]
    fn test_empty_message_lists_are_skipped() {
        let mut errors = ValidationErrors::default();
        errors.errors.insert("name".to_string(), Vec::new());
        assert!(errors.first_messages().is_empty());
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ApiClientConfig::new("http://localhost:8000/");
        assert_eq!(config.url("/user/api-tokens"), "http://localhost:8000/user/api-tokens");
    }
}
