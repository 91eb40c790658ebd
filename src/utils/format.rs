/// Width of the dashed line printed after each post
pub const SEPARATOR_WIDTH: usize = 40;

/// Display value for a post whose author account no longer exists
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Mask a secret with one asterisk per character
pub fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

/// Dashed separator line
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Format an optional author name, falling back to "Unknown"
pub fn format_author(author: Option<&str>) -> &str {
    author.unwrap_or(UNKNOWN_AUTHOR)
}
