use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Token response from `/api/v1/access_token`.
/// Reddit reports rejected user credentials with a 200 and an `error` field.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SessionData {
    pub token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_in: Duration,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.created_at + self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(created_at: DateTime<Utc>) -> SessionData {
        SessionData {
            token: "tok".to_string(),
            token_type: "bearer".to_string(),
            scope: "*".to_string(),
            expires_in: Duration::seconds(3600),
            username: "viewer_bot".to_string(),
            created_at,
        }
    }

    #[test]
    fn test_fresh_session_not_expired() {
        let s = session(Utc::now());
        assert!(!s.is_expired());
    }

    #[test]
    fn test_old_session_expired() {
        let s = session(Utc::now() - Duration::minutes(61));
        assert!(s.is_expired());
    }

    #[test]
    fn test_parse_invalid_grant() {
        let resp: TokenResponse = serde_json::from_str(r#"{"error": "invalid_grant"}"#)
            .expect("Failed to parse token error JSON");
        assert_eq!(resp.error.as_deref(), Some("invalid_grant"));
        assert!(resp.access_token.is_none());
    }
}
