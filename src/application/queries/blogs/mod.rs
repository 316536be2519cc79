mod comments;
mod get;
mod list;
mod reactions;
mod service;

pub use comments::GetCommentThreadQuery;
pub use get::GetBlogQuery;
pub use service::BlogQueryService;
