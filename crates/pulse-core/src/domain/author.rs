use serde::{Deserialize, Serialize};

/// Author entity - owns zero or more posts through `Post::author_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Author {
    /// Create a new author with both names set.
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}
