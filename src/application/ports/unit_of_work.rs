// src/application/ports/unit_of_work.rs
use crate::domain::{errors::DomainResult, repository::Session};
use async_trait::async_trait;

/// An open transaction. Dropping it without `commit` discards its work.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Handle to pass to repositories so they run inside this transaction.
    fn session(&mut self) -> &mut Session;

    async fn commit(self: Box<Self>) -> DomainResult<()>;

    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}

#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    /// Check out a dedicated connection and start a transaction on it.
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}
