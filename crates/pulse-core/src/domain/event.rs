use serde::{Deserialize, Serialize};

/// Raised after a post's vote count was incremented.
///
/// Carries only the post id; listeners re-read the post when they
/// receive it, so they always observe the state at delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpvoted {
    pub id: i32,
}
