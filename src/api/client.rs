//! API client for communicating with the Reddit REST API.
//!
//! This module provides the `ApiClient` struct for the script-app password
//! grant and the authenticated reads the viewer needs.

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, Utc};
use reqwest::{header, redirect, Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::auth::session::TokenResponse;
use crate::auth::SessionData;
use crate::config::{Credentials, Endpoints};
use crate::models::{Listing, Me, Post, LINK_KIND};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Token endpoint path on the auth host
const ACCESS_TOKEN_PATH: &str = "/api/v1/access_token";

/// Identity endpoint path on the API host
const ME_PATH: &str = "/api/v1/me";

/// Token lifetime assumed when the response omits `expires_in`.
/// Reddit issues one-hour tokens to script apps.
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// API client for Reddit.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: Endpoints,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client sending the given user agent on every request
    pub fn new(user_agent: &str, endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoints,
            token: None,
        })
    }

    /// Create a new ApiClient bound to a session, sharing the connection pool.
    pub fn with_session(&self, session: &SessionData) -> Self {
        Self {
            client: self.client.clone(),
            endpoints: self.endpoints.clone(),
            token: Some(session.token.clone()),
        }
    }

    /// Obtain an access token with the password grant
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<SessionData> {
        let url = join_url(&self.endpoints.auth_base_url, ACCESS_TOKEN_PATH);
        debug!(url = %url, username = %credentials.username, "Requesting access token");

        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .context("Failed to send authentication request")?;

        let response = Self::check_response(response).await?;
        let token: TokenResponse = Self::parse_json(response).await?;

        if let Some(error) = token.error {
            return Err(ApiError::from_grant_error(&error, token.error_description.as_deref()).into());
        }

        let access_token = token
            .access_token
            .ok_or_else(|| ApiError::InvalidResponse("token response without access_token".to_string()))?;

        Ok(SessionData {
            token: access_token,
            token_type: token.token_type.unwrap_or_else(|| "bearer".to_string()),
            scope: token.scope.unwrap_or_default(),
            expires_in: Duration::seconds(token.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)),
            username: credentials.username.clone(),
            created_at: Utc::now(),
        })
    }

    /// Fetch the account behind the current token
    pub async fn me(&self) -> Result<Me> {
        let url = join_url(&self.endpoints.api_base_url, ME_PATH);
        self.get(&url).await
    }

    /// Fetch the newest posts of a subreddit, newest first
    pub async fn fetch_new_posts(&self, subreddit: &str, limit: usize) -> Result<Vec<Post>> {
        let mut url = Url::parse(&self.endpoints.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.endpoints.api_base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["r", subreddit, "new"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("raw_json", "1");

        debug!(subreddit = subreddit, limit = limit, "Fetching new posts");
        let listing: Listing<Post> = self.get(url.as_str()).await?;

        let mut posts = listing.into_items(LINK_KIND);
        posts.truncate(limit);
        info!(subreddit = subreddit, count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Redirects are not followed; they surface as `ApiError::Redirect`.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_redirection() {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            let path = response
                .url()
                .join(location)
                .map(|url| url.path().to_string())
                .unwrap_or_else(|_| location.to_string());
            debug!(status = response.status().as_u16(), location = location, "Redirect not followed");
            Err(ApiError::from_redirect(&path).into())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Request failed");
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await.context("Failed to read response body")?;
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        Self::parse_json(response).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
