pub mod auth;
pub mod blogs;
pub mod comments;
pub mod reactions;
pub mod users;

pub use auth::AuthenticatedUser;
pub use blogs::{BlogDetailDto, BlogDto};
pub use comments::{CommentDto, CommentThreadDto};
pub use reactions::ReactionDto;
pub use users::UserDto;
