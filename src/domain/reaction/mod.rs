pub mod entity;
pub mod repository;

pub use entity::{NewReaction, Reaction, ReactionId, ReactionStatus};
pub use repository::ReactionRepository;
