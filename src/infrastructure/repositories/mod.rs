// src/infrastructure/repositories/mod.rs
mod blogs;
mod comments;
mod error;
mod reactions;
mod sqlite;
mod users;

pub use blogs::SqliteBlogRepository;
pub use comments::SqliteCommentRepository;
pub use error::map_sqlx;
pub use reactions::SqliteReactionRepository;
pub use sqlite::{SqliteRecord, SqliteRepository};
pub use users::SqliteUserRepository;
