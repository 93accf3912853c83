//! API models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Client-supplied body for creating or replacing a user
///
/// Absent fields take their default value. `id` and `createdAt` are not part
/// of the payload and are silently dropped if a client sends them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
}

impl User {
    /// Replace every mutable field, keeping `id` and `created_at`
    pub fn apply(&mut self, payload: UserPayload) {
        self.username = payload.username;
        self.email = payload.email;
        self.full_name = payload.full_name;
        self.is_active = payload.is_active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: 7,
            username: "x".to_string(),
            email: "x@x.com".to_string(),
            full_name: "X".to_string(),
            created_at: Utc::now(),
            is_active: true,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["fullName"], "X");
        assert_eq!(value["isActive"], true);
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_payload_ignores_id_and_created_at() {
        let payload: UserPayload = serde_json::from_value(json!({
            "id": 99,
            "username": "y",
            "createdAt": "2001-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(payload.username, "y");
        assert_eq!(payload.email, "");
        assert!(!payload.is_active);
    }
}
