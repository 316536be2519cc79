mod add;
mod remove;
mod service;

pub use add::AddCommentCommand;
pub use remove::RemoveCommentCommand;
pub use service::CommentCommandService;
