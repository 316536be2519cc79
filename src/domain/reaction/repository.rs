use crate::domain::errors::DomainResult;
use crate::domain::reaction::entity::{NewReaction, Reaction};
use crate::domain::repository::{FilteredRepository, Session};
use async_trait::async_trait;

#[async_trait]
pub trait ReactionRepository: FilteredRepository<Reaction> {
    async fn insert(
        &self,
        reaction: NewReaction,
        session: Option<&mut Session>,
    ) -> DomainResult<Reaction>;
}
