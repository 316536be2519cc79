pub mod audit;
pub mod blog;
pub mod comment;
pub mod entity;
pub mod errors;
pub mod filter;
pub mod reaction;
pub mod repository;
pub mod specification;
pub mod user;
