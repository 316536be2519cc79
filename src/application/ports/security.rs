// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain password into a self-describing PHC string.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}
