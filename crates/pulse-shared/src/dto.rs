//! Data Transfer Objects - response types for the REST side of the API.

use serde::{Deserialize, Serialize};

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    /// Posts currently held in the dataset.
    pub posts: usize,
    /// Listeners currently registered for upvote notifications.
    pub subscribers: usize,
}
