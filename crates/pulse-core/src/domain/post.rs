use serde::{Deserialize, Serialize};

/// Post entity - a titled article that readers can upvote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub title: Option<String>,
    pub votes: i32,
}

impl Post {
    /// Create a new post.
    pub fn new(id: i32, author_id: i32, title: impl Into<String>, votes: i32) -> Self {
        Self {
            id,
            author_id,
            title: Some(title.into()),
            votes,
        }
    }

    pub fn is_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}
