mod get;
mod list;
mod principal;
mod service;

pub use get::GetUserQuery;
pub use service::UserQueryService;
