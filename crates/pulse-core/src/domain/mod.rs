//! Domain entities - the core business objects.

mod author;
mod event;
mod post;

pub use author::Author;
pub use event::PostUpvoted;
pub use post::Post;
