use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Credentials or app configuration rejected by Reddit
    #[error("{0}")]
    OAuth(String),

    #[error("received {status} HTTP response")]
    Response { status: u16, body: String },

    /// Reddit answered with a redirect, e.g. to `/subreddits/search` for an unknown subreddit
    #[error("Redirect to {0}")]
    Redirect(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            401 => ApiError::OAuth("received 401 HTTP response".to_string()),
            code => ApiError::Response {
                status: code,
                body: body.to_string(),
            },
        }
    }

    /// Build the error for a 3xx, reporting only the target path
    pub fn from_redirect(location: &str) -> Self {
        let path = location.strip_suffix(".json").unwrap_or(location);
        ApiError::Redirect(path.to_string())
    }

    /// Build the error for a token response carrying an `error` field
    pub fn from_grant_error(error: &str, description: Option<&str>) -> Self {
        match description {
            Some(desc) => ApiError::OAuth(format!("{} error processing request ({})", error, desc)),
            None => ApiError::OAuth(error.to_string()),
        }
    }

    /// Category name shown to the operator for unclassified failures
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::OAuth(_) => "OAuthError",
            ApiError::Response { .. } => "ResponseError",
            ApiError::Redirect(_) => "Redirect",
            ApiError::NetworkError(_) => "NetworkError",
            ApiError::InvalidResponse(_) => "InvalidResponse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_unauthorized_maps_to_oauth() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, ApiError::OAuth(_)));
        assert_eq!(err.to_string(), "received 401 HTTP response");
    }

    #[test]
    fn test_forbidden_is_a_response_error() {
        let body = r#"{"reason": "private", "message": "Forbidden", "error": 403}"#;
        match ApiError::from_status(StatusCode::FORBIDDEN, body) {
            ApiError::Response { status, body: b } => {
                assert_eq!(status, 403);
                assert_eq!(b, body);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_redirect_strips_json_suffix() {
        let err = ApiError::from_redirect("/subreddits/search.json");
        assert_eq!(err.to_string(), "Redirect to /subreddits/search");
        assert_eq!(err.kind(), "Redirect");
        assert_eq!(
            ApiError::from_redirect("/r/Rust/new").to_string(),
            "Redirect to /r/Rust/new"
        );
    }

    #[test]
    fn test_other_statuses_keep_raw_body() {
        let body = r#"{"message": "Too Many Requests", "error": 429}"#;
        match ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, body) {
            ApiError::Response { status, body: b } => {
                assert_eq!(status, 429);
                assert_eq!(b, body);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert_eq!(err.to_string(), "received 500 HTTP response");
    }

    #[test]
    fn test_grant_error_message() {
        assert_eq!(
            ApiError::from_grant_error("invalid_grant", None).to_string(),
            "invalid_grant"
        );
        assert_eq!(
            ApiError::from_grant_error("invalid_grant", Some("bad password")).to_string(),
            "invalid_grant error processing request (bad password)"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(ApiError::InvalidResponse("x".into()).kind(), "InvalidResponse");
        assert_eq!(ApiError::OAuth("x".into()).kind(), "OAuthError");
    }
}
