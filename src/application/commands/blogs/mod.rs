mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateBlogCommand, CreateBlogCommandBuilder};
pub use delete::DeleteBlogCommand;
pub use service::BlogCommandService;
pub use update::{UpdateBlogByTitleCommand, UpdateBlogCommand};
