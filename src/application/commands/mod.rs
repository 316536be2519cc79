pub mod blogs;
pub mod comments;
pub mod reactions;
pub mod users;
