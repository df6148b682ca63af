//! Seed data the dataset is built from at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pulse_core::domain::{Author, Post};

/// Authors and posts, in the order they are listed.
///
/// The JSON form uses camelCase keys:
/// `{"authors": [{"id": 1, "firstName": "Tom", "lastName": "Coleman"}],
///   "posts": [{"id": 1, "authorId": 1, "title": "...", "votes": 2}]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub authors: Vec<Author>,
    pub posts: Vec<Post>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            authors: vec![
                Author::new(1, "Tom", "Coleman"),
                Author::new(2, "Sashko", "Stubailo"),
                Author::new(3, "Mikhail", "Novikov"),
            ],
            posts: vec![
                Post::new(1, 1, "Introduction to GraphQL", 2),
                Post::new(2, 2, "Welcome to Meteor", 3),
                Post::new(3, 2, "Advanced GraphQL", 1),
                Post::new(4, 3, "Launchpad is Cool", 7),
            ],
        }
    }
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Errors raised while loading or validating seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {entity_type} id {id} in seed data")]
    DuplicateId { entity_type: &'static str, id: i32 },

    #[error("Post {id} has a negative vote count")]
    NegativeVotes { id: i32 },
}
