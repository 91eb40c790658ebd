use serde::Deserialize;

/// Response of `/api/v1/me` for the authenticated account
#[derive(Debug, Clone, Deserialize)]
pub struct Me {
    pub name: String,
}
