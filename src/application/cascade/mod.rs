// src/application/cascade/mod.rs
pub mod coordinator;
pub mod planner;
pub mod resolver;

pub use coordinator::TransactionCoordinator;
pub use planner::{BlogDeletePlan, CascadePlanner, DeletePlan, ThreadDeletePlan, UserDeletePlan};
pub use resolver::CommentThreadResolver;
