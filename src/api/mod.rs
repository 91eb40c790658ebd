//! REST API client module for Reddit.
//!
//! `ApiClient` performs the password grant against the token endpoint,
//! verifies the resulting session with `/api/v1/me`, and reads subreddit
//! listings from the OAuth host using the bearer token.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
