//! Data models for Reddit API responses.
//!
//! - `Listing`, `Thing`: the paginated envelope Reddit wraps collections in
//! - `Post`: a subreddit submission (title, author, score)
//! - `Me`: the account behind the current access token

pub mod listing;
pub mod post;
pub mod user;

pub use listing::{Listing, ListingData, Thing};
pub use post::{Post, LINK_KIND};
pub use user::Me;
