use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::repository::FilteredRepository;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: FilteredRepository<Comment> {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
}
