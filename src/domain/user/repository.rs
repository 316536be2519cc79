use crate::domain::errors::DomainResult;
use crate::domain::repository::{FilteredRepository, Session};
use crate::domain::user::entity::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: FilteredRepository<User> {
    async fn count(&self, session: Option<&mut Session>) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewUser, session: Option<&mut Session>) -> DomainResult<User>;

    /// Write back the editable profile columns and audit fields of `user`.
    async fn update(&self, user: &User, session: Option<&mut Session>) -> DomainResult<User>;
}
