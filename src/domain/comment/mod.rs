pub mod entity;
pub mod repository;
pub mod specifications;

pub use entity::{Comment, CommentId, CommentText, NewComment};
pub use repository::CommentRepository;
