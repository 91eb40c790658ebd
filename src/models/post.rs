use serde::{Deserialize, Deserializer};

/// Thing kind prefix for submissions
pub const LINK_KIND: &str = "t3";

/// Placeholder Reddit puts in `author` once the account is gone
const DELETED_AUTHOR: &str = "[deleted]";

/// A subreddit submission. Only the fields this viewer shows are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_author")]
    pub author: Option<String>,
    #[serde(default)]
    pub score: i64,
}

impl Post {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

fn deserialize_author<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let author: Option<String> = Option::deserialize(deserializer)?;
    Ok(author.filter(|name| !name.is_empty() && name != DELETED_AUTHOR))
}
