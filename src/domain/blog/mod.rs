pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Blog, NewBlog};
pub use repository::{BlogPresence, BlogRepository};
pub use value_objects::{BlogContent, BlogId, BlogTitle};
