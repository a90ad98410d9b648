//! API Token Types
//!
//! Wire types for the personal API token endpoints. The backend owns
//! hashing, storage and ability enforcement; these types only describe
//! what travels between the settings page and the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A duplicate-free list of permission (ability) names.
///
/// Order is insertion order and carries no meaning. Deserializing or
/// collecting from an iterator drops repeated names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Permissions(Vec<String>);

impl Permissions {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.0.iter().any(|p| p == permission)
    }

    /// Check or uncheck a permission.
    ///
    /// Returns true if the selection changed.
    pub fn set(&mut self, permission: &str, checked: bool) -> bool {
        match (checked, self.contains(permission)) {
            (true, false) => {
                self.0.push(permission.to_string());
                true
            }
            (false, true) => {
                self.0.retain(|p| p != permission);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Permissions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut permissions = Permissions::new();
        for permission in iter {
            let permission = permission.into();
            permissions.set(&permission, true);
        }
        permissions
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

/// A token as listed by the backend (never includes the secret)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub abilities: Permissions,
    /// Human-readable "last used" string, e.g. "3 days ago"
    #[serde(default)]
    pub last_used_ago: Option<String>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Everything the token settings page needs from the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiTokenPageData {
    pub tokens: Vec<ApiToken>,
    /// Every permission name the server recognises, in display order
    #[serde(default)]
    pub available_permissions: Vec<String>,
    /// Permissions preselected for new tokens
    #[serde(default)]
    pub default_permissions: Permissions,
}

/// Request to create a new API token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApiTokenRequest {
    pub name: String,
    pub permissions: Permissions,
}

/// Response after creating an API token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApiTokenResponse {
    pub token: ApiToken,
    /// The secret, only returned once
    pub plain_text_token: String,
}

/// Request to replace a token's permission set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateApiTokenRequest {
    pub permissions: Permissions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_adds_exactly_one() {
        let mut permissions: Permissions = ["read"].into_iter().collect();
        assert!(permissions.set("write", true));
        assert_eq!(permissions.len(), 2);
        assert!(permissions.contains("write"));

        // Checking again is a no-op
        assert!(!permissions.set("write", true));
        assert_eq!(permissions.len(), 2);
    }

    #[test]
    fn test_uncheck_removes_exactly_one() {
        let mut permissions: Permissions = ["read", "write", "delete"].into_iter().collect();
        assert!(permissions.set("write", false));
        assert_eq!(permissions.as_slice(), &["read", "delete"]);

        assert!(!permissions.set("write", false));
        assert_eq!(permissions.len(), 2);
    }

    #[test]
    fn test_collect_drops_duplicates() {
        let permissions: Permissions = ["read", "read", "write", "read"].into_iter().collect();
        assert_eq!(permissions.as_slice(), &["read", "write"]);
    }

    #[test]
    fn test_deserialize_token_from_backend_payload() {
        let json = r#"{
            "id": 7,
            "name": "CI Bot",
            "abilities": ["read", "read", "create"],
            "last_used_ago": "2 hours ago",
            "last_used_at": "2026-10-19T08:00:00Z",
            "created_at": "2026-09-01T12:30:00Z"
        }"#;
        let token: ApiToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.id, 7);
        assert_eq!(token.abilities.as_slice(), &["read", "create"]);
        assert_eq!(token.last_used_ago.as_deref(), Some("2 hours ago"));
        assert!(token.created_at.is_some());
    }

    #[test]
    fn test_deserialize_token_without_optional_fields() {
        let token: ApiToken = serde_json::from_str(r#"{"id": 1, "name": "laptop"}"#).unwrap();
        assert!(token.abilities.is_empty());
        assert_eq!(token.last_used_ago, None);
        assert_eq!(token.last_used_at, None);
    }

    #[test]
    fn test_create_request_serializes_permissions_as_list() {
        let req = CreateApiTokenRequest {
            name: "CI Bot".to_string(),
            permissions: ["read"].into_iter().collect(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "CI Bot", "permissions": ["read"] })
        );
    }
}
