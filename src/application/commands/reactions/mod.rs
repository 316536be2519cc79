mod react;
mod service;
mod withdraw;

pub use react::ReactCommand;
pub use service::ReactionCommandService;
pub use withdraw::WithdrawReactionCommand;
