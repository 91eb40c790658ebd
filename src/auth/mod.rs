//! Authentication state for the Reddit password grant.
//!
//! `SessionData` holds the bearer token issued to the script app together
//! with the account it belongs to. It lives only for the duration of a run.

pub mod session;

pub use session::SessionData;
