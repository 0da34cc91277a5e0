//! Domain layer: the post entity and its identifier.

pub mod post;
pub mod post_id;

pub use post::{NewPost, Post};
pub use post_id::PostId;
