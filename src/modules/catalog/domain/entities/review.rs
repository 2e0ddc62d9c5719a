use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Opaque provider id (hex string on TMDB).
    pub id: String,
    pub author: String,
    pub content: String,
    pub url: String,
}
