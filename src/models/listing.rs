use serde::Deserialize;

/// Reddit's paginated envelope: `{"kind": "Listing", "data": {"children": [...]}}`
#[derive(Debug, Clone, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData<T> {
    #[serde(default = "Vec::new")]
    pub children: Vec<Thing<T>>,
}

/// A typed child of a listing, e.g. kind `t3` for links
#[derive(Debug, Clone, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

impl<T> Listing<T> {
    /// Unwrap children of the given kind, in listing order
    pub fn into_items(self, kind: &str) -> Vec<T> {
        self.data
            .children
            .into_iter()
            .filter(|child| child.kind == kind)
            .map(|child| child.data)
            .collect()
    }
}
