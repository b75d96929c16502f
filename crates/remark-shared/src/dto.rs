//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored comment. `content` is HTML-entity encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user; the password hash is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Entry in the `/populate` result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulatedUser {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// `/comments` query string. Values stay raw so unusable ones can fall back
/// to defaults instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCommentsQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Body of `POST /user`. `id` may be a number or a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserLookupRequest {
    pub id: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_uses_camel_case() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let body = serde_json::to_value(CommentResponse {
            id: 1,
            content: "&lt;b&gt;".into(),
            created_at,
        })
        .unwrap();

        assert_eq!(body["createdAt"], json!("2024-05-01T12:00:00Z"));
        assert_eq!(body["content"], json!("&lt;b&gt;"));
        assert!(body.get("created_at").is_none());
    }

    #[test]
    fn test_lookup_accepts_any_id_shape() {
        let numeric: UserLookupRequest = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(numeric.id, Some(json!(4)));

        let text: UserLookupRequest = serde_json::from_value(json!({ "id": "4" })).unwrap();
        assert_eq!(text.id, Some(json!("4")));

        let missing: UserLookupRequest = serde_json::from_value(json!({})).unwrap();
        assert!(missing.id.is_none());
    }
}
