mod delete;
mod password;
mod register;
mod service;
mod update;

pub use delete::DeleteUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
