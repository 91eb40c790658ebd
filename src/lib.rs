//! Reddit post viewer - authenticate as a script app and list a subreddit's newest posts.
//!
//! The flow is linear: load credentials, obtain a password-grant token,
//! verify it, prompt for a subreddit, print title/author/score of the five
//! newest posts. Every failure is mapped to a `report::Outcome` and printed
//! as a friendly diagnostic instead of propagating out of `main`.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod report;
pub mod utils;
pub mod viewer;
