//! Utility functions for console formatting.

pub mod format;

pub use format::{format_author, mask_secret, separator};
